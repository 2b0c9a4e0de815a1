//! Rendering module
//!
//! The drawing half of the windowing collaborator. The game only ever talks
//! to the [`Renderer`] trait; [`terminal::TerminalBackend`] is the concrete
//! implementation used by the binary.

pub mod canvas;
pub mod scene;
pub mod terminal;

use std::io;

use glam::Vec2;

use crate::color::Color;
use crate::platform::Platform;
use crate::sim::Rect;

pub use scene::{Drawable, draw_frame};
pub use terminal::TerminalBackend;

/// How a string is painted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextStyle {
    pub color: Color,
    /// Fill behind the glyphs, `None` leaves the frame as it is
    pub background: Option<Color>,
}

/// Immediate-mode drawing primitives. Coordinates are arena pixels.
pub trait Renderer {
    /// Fill the frame with the background color
    fn clear_screen(&mut self);

    /// Show everything drawn since the last clear
    fn present_frame(&mut self) -> io::Result<()>;

    /// Draw `text` with its top-left corner at `pos`
    fn draw_text(&mut self, text: &str, pos: Vec2, style: TextStyle);

    fn draw_line(&mut self, from: Vec2, to: Vec2, color: Color);

    fn draw_circle(&mut self, center: Vec2, radius: f32, color: Color);

    fn draw_rect(&mut self, rect: Rect, color: Color);

    /// Width of `text` in pixels in the current font
    fn string_width(&self, text: &str) -> f32;

    /// Line height of the current font in pixels
    fn font_height(&self) -> f32;
}

/// A complete window: drawing plus input and timing
pub trait Backend: Platform + Renderer {}

impl<T: Platform + Renderer + ?Sized> Backend for T {}
