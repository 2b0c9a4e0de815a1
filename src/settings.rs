//! Window settings
//!
//! Applied once at startup, never touched by the frame loop.

use std::time::Duration;

use crate::color::Color;
use crate::consts::*;
use crate::error::ConfigError;
use crate::platform::clock::frame_budget;
use crate::sim::Arena;

/// Window configuration
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// Window title
    pub title: String,
    /// Arena / window size in pixels
    pub width: f32,
    pub height: f32,
    /// Target frames per second
    pub frame_rate: u32,

    // === Text ===
    /// Font family name. The terminal backend logs it but draws text one
    /// cell per glyph.
    pub font_name: String,
    /// Font size in pixels (terminal backend: informational only)
    pub font_size: u32,
    pub font_color: Color,

    // === Colors ===
    pub bg_color: Color,
    /// Background behind the GAME OVER text
    pub game_over_bg: Color,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            title: "Pong".to_string(),
            width: ARENA_WIDTH,
            height: ARENA_HEIGHT,
            frame_rate: FRAME_RATE,

            font_name: "ariel".to_string(),
            font_size: 64,
            font_color: Color::WHITE,

            bg_color: Color::BLACK,
            game_over_bg: Color::BLUE,
        }
    }
}

impl Settings {
    /// Reject settings no window could be opened with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.frame_rate == 0 {
            return Err(ConfigError::FrameRate);
        }
        self.arena().map(|_| ())
    }

    /// The play field matching the window size
    pub fn arena(&self) -> Result<Arena, ConfigError> {
        Arena::new(self.width, self.height)
    }

    /// Time budget for one frame
    pub fn frame_budget(&self) -> Duration {
        frame_budget(self.frame_rate)
    }
}
