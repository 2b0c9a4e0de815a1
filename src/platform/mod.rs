//! Platform abstraction layer
//!
//! The input and timing half of the windowing collaborator:
//! - Input events and held-key state ([`HeldKeys`])
//! - Frame pacing
//! - Teardown of the window / terminal

pub mod clock;
pub mod keys;

use std::collections::HashSet;

pub use clock::FrameClock;
pub use keys::HeldKeys;

/// Keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Up,
    Down,
    W,
    S,
    Escape,
}

/// Keys currently held down
pub type KeySet = HashSet<Key>;

/// A window/system event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlatformEvent {
    /// The user asked to close the window
    CloseRequested,
    /// A key went down (or auto-repeated)
    KeyPressed(Key),
    /// A key came up. Only terminals with release reporting send these.
    KeyReleased(Key),
    /// Anything the game doesn't care about
    Other,
}

/// Input and timing services the game loop needs from its host
pub trait Platform {
    /// Drain all pending events without blocking
    fn poll_events(&mut self) -> Vec<PlatformEvent>;

    /// Keys held as of the last `poll_events`
    fn pressed_keys(&self) -> &KeySet;

    /// Block until the frame budget for `target_fps` has elapsed
    fn tick_clock(&mut self, target_fps: u32);

    /// Release the window. Called exactly once when the loop exits.
    fn close(&mut self);
}
