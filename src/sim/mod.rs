//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - One step per frame, no wall-clock time
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod ball;
pub mod paddle;
pub mod rect;
pub mod state;
pub mod tick;

pub use ball::{Ball, ScoreSignal, Side};
pub use paddle::{Direction, Paddle};
pub use rect::{Arena, Bounds, Rect};
pub use state::{GameEvent, GamePhase, GameState, Score};
pub use tick::{TickInput, apply_input, tick};
