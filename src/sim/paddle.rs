//! Player paddles

use glam::Vec2;

use super::rect::{Bounds, Rect, positive};
use crate::color::Color;
use crate::error::ConfigError;

/// Vertical move command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

/// A paddle. Only its vertical position ever changes after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Paddle {
    top_left: Vec2,
    size: Vec2,
    /// Distance covered by one move command
    step: f32,
    color: Color,
}

impl Paddle {
    pub fn new(top_left: Vec2, size: Vec2, step: f32, color: Color) -> Result<Self, ConfigError> {
        if !positive(size.x) || !positive(size.y) {
            return Err(ConfigError::PaddleSize {
                width: size.x,
                height: size.y,
            });
        }
        if !positive(step) {
            return Err(ConfigError::PaddleStep(step));
        }
        Ok(Self {
            top_left,
            size,
            step,
            color,
        })
    }

    pub fn top_left(&self) -> Vec2 {
        self.top_left
    }

    pub fn size(&self) -> Vec2 {
        self.size
    }

    pub fn step(&self) -> f32 {
        self.step
    }

    pub fn color(&self) -> Color {
        self.color
    }

    /// Move one step. Up decreases y. Not clamped to the arena, so a paddle
    /// can be driven fully off screen.
    pub fn shift(&mut self, direction: Direction) {
        match direction {
            Direction::Up => self.top_left.y -= self.step,
            Direction::Down => self.top_left.y += self.step,
        }
    }
}

impl Bounds for Paddle {
    fn bounds(&self) -> Rect {
        Rect::new(self.top_left, self.size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paddle() -> Paddle {
        Paddle::new(
            Vec2::new(455.0, 150.0),
            Vec2::new(20.0, 110.0),
            5.0,
            Color::WHITE,
        )
        .unwrap()
    }

    #[test]
    fn test_paddle_shift() {
        let mut p = paddle();
        p.shift(Direction::Up);
        assert_eq!(p.top_left(), Vec2::new(455.0, 145.0));
        p.shift(Direction::Down);
        p.shift(Direction::Down);
        assert_eq!(p.top_left(), Vec2::new(455.0, 155.0));
        assert_eq!(p.size(), Vec2::new(20.0, 110.0));
    }

    #[test]
    fn test_paddle_is_not_clamped() {
        let mut p = paddle();
        for _ in 0..40 {
            p.shift(Direction::Up);
        }
        assert_eq!(p.top_left().y, -50.0);
        assert_eq!(p.top_left().x, 455.0);
    }

    #[test]
    fn test_paddle_bounds() {
        let rect = paddle().bounds();
        assert_eq!(rect.left(), 455.0);
        assert_eq!(rect.right(), 475.0);
        assert_eq!(rect.top(), 150.0);
        assert_eq!(rect.bottom(), 260.0);
    }

    #[test]
    fn test_paddle_rejects_degenerate_values() {
        assert_eq!(
            Paddle::new(Vec2::ZERO, Vec2::new(0.0, 110.0), 5.0, Color::WHITE),
            Err(ConfigError::PaddleSize {
                width: 0.0,
                height: 110.0
            })
        );
        assert_eq!(
            Paddle::new(Vec2::ZERO, Vec2::new(20.0, 110.0), -5.0, Color::WHITE),
            Err(ConfigError::PaddleStep(-5.0))
        );
    }
}
