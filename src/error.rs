//! Construction errors
//!
//! Gameplay itself has no failure modes: a ball leaving the arena is a
//! scoring event, not an error. The only things that can go wrong are
//! degenerate values handed to a constructor.

use std::fmt;

/// A value rejected when building an arena, ball, paddle or settings
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Arena width or height is not positive
    ArenaSize { width: f32, height: f32 },
    /// Ball radius is not positive
    BallRadius(f32),
    /// Ball does not fit inside the arena on some axis
    BallTooLarge { radius: f32, width: f32, height: f32 },
    /// Paddle width or height is not positive
    PaddleSize { width: f32, height: f32 },
    /// Paddle step is not positive
    PaddleStep(f32),
    /// Frame rate of zero
    FrameRate,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ArenaSize { width, height } => {
                write!(f, "arena size must be positive, got {width}x{height}")
            }
            ConfigError::BallRadius(radius) => {
                write!(f, "ball radius must be positive, got {radius}")
            }
            ConfigError::BallTooLarge {
                radius,
                width,
                height,
            } => write!(
                f,
                "ball of radius {radius} does not fit in a {width}x{height} arena"
            ),
            ConfigError::PaddleSize { width, height } => {
                write!(f, "paddle size must be positive, got {width}x{height}")
            }
            ConfigError::PaddleStep(step) => {
                write!(f, "paddle step must be positive, got {step}")
            }
            ConfigError::FrameRate => write!(f, "frame rate must be at least 1"),
        }
    }
}

impl std::error::Error for ConfigError {}
