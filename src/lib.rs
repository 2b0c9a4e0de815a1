//! Pong - two paddles, one ball, first point ends the round
//!
//! Core modules:
//! - `sim`: Deterministic simulation (ball, paddles, scoring, game phase)
//! - `game`: Frame loop tying input, simulation and drawing together
//! - `renderer`: Drawing collaborator and the terminal backend
//! - `platform`: Input events and frame pacing
//! - `settings`: One-time window configuration

pub mod color;
pub mod error;
pub mod game;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use color::Color;
pub use error::ConfigError;
pub use game::Game;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    use glam::Vec2;

    /// Arena dimensions (pixels)
    pub const ARENA_WIDTH: f32 = 500.0;
    pub const ARENA_HEIGHT: f32 = 400.0;

    /// Target frame rate - larger is a faster game
    pub const FRAME_RATE: u32 = 90;

    /// Ball defaults. The start center is replaced by a random one right away.
    pub const BALL_RADIUS: f32 = 10.0;
    pub const BALL_START_CENTER: Vec2 = Vec2::new(50.0, 75.0);
    pub const BALL_START_VELOCITY: Vec2 = Vec2::new(1.0, 2.0);

    /// Paddle defaults
    pub const PADDLE_SIZE: Vec2 = Vec2::new(20.0, 110.0);
    pub const PADDLE_STEP: f32 = 5.0;
    pub const PADDLE_TOP: f32 = 150.0;
    /// Left paddle's left edge, from the arena's left edge
    pub const LEFT_PADDLE_X: f32 = 30.0;
    /// Right paddle's left edge, from the arena's right edge
    pub const RIGHT_PADDLE_INSET: f32 = 45.0;

    /// HUD layout
    pub const DIVIDER_X: f32 = 245.0;
    /// Left score is right-aligned to this x
    pub const SCORE_LEFT_ANCHOR_X: f32 = 220.0;
    pub const SCORE_RIGHT_X: f32 = 270.0;
    pub const GAME_OVER_TEXT: &str = "GAME OVER";
}
