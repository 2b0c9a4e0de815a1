//! Axis-aligned geometry for the arena and paddles
//!
//! Screen coordinates: x grows to the right, y grows downward, origin at the
//! arena's top-left corner.

use glam::Vec2;

use crate::error::ConfigError;

/// True for finite values strictly above zero
#[inline]
pub(crate) fn positive(value: f32) -> bool {
    value.is_finite() && value > 0.0
}

/// An axis-aligned rectangle given by its top-left corner and size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub top_left: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(top_left: Vec2, size: Vec2) -> Self {
        Self { top_left, size }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.top_left.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.top_left.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.top_left.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.top_left.y + self.size.y
    }

    /// Check if `y` lies strictly between the top and bottom edges
    pub fn spans_y_exclusive(&self, y: f32) -> bool {
        self.top() < y && y < self.bottom()
    }
}

/// Anything with a rectangular footprint a ball can bounce off
pub trait Bounds {
    fn bounds(&self) -> Rect;
}

impl Bounds for Rect {
    fn bounds(&self) -> Rect {
        *self
    }
}

/// The play field
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arena {
    width: f32,
    height: f32,
}

impl Arena {
    pub fn new(width: f32, height: f32) -> Result<Self, ConfigError> {
        if !positive(width) || !positive(height) {
            return Err(ConfigError::ArenaSize { width, height });
        }
        Ok(Self { width, height })
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.height
    }

    /// Horizontal center line, used to tell which side a ball left through
    #[inline]
    pub fn midline(&self) -> f32 {
        self.width / 2.0
    }

    /// Check if a circle lies fully inside the arena (touching the edge counts)
    pub fn contains_circle(&self, center: Vec2, radius: f32) -> bool {
        center.x >= radius
            && center.x <= self.width - radius
            && center.y >= radius
            && center.y <= self.height - radius
    }
}
