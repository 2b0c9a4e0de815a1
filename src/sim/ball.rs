//! The ball: motion, wall reflection, paddle contact and scoring signal

use glam::Vec2;
use rand::Rng;

use super::rect::{Arena, Bounds, positive};
use crate::color::Color;
use crate::error::ConfigError;

/// Which paddle a contact test is made against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

/// Outcome of one ball step on the horizontal axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreSignal {
    NoScore,
    /// Ball left the arena through the left edge
    LeftScored,
    /// Ball left the arena through the right edge
    RightScored,
}

impl ScoreSignal {
    /// Side of the arena the ball left through, if any
    pub fn side(self) -> Option<Side> {
        match self {
            ScoreSignal::NoScore => None,
            ScoreSignal::LeftScored => Some(Side::Left),
            ScoreSignal::RightScored => Some(Side::Right),
        }
    }
}

/// A ball entity
#[derive(Debug, Clone, PartialEq)]
pub struct Ball {
    pub center: Vec2,
    pub velocity: Vec2,
    radius: f32,
    color: Color,
}

impl Ball {
    pub fn new(
        center: Vec2,
        radius: f32,
        velocity: Vec2,
        color: Color,
    ) -> Result<Self, ConfigError> {
        if !positive(radius) {
            return Err(ConfigError::BallRadius(radius));
        }
        Ok(Self {
            center,
            velocity,
            radius,
            color,
        })
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn color(&self) -> Color {
        self.color
    }

    /// Check if the whole ball can be placed inside the arena
    pub fn fits(&self, arena: &Arena) -> bool {
        2.0 * self.radius <= arena.width() && 2.0 * self.radius <= arena.height()
    }

    /// Advance one frame and report whether the ball left through a side.
    ///
    /// Both axes move first. Touching the top or bottom wall negates `vy`;
    /// the ball may overlap the wall by up to one frame of travel. Touching
    /// the left or right edge is not a bounce but a scoring signal, named
    /// after the half of the arena the center is in.
    pub fn advance(&mut self, arena: &Arena) -> ScoreSignal {
        self.center += self.velocity;

        let r = self.radius;
        if self.center.y < r || self.center.y + r > arena.height() {
            self.velocity.y = -self.velocity.y;
        }

        if self.center.x < r || self.center.x + r > arena.width() {
            if self.center.x > arena.midline() {
                ScoreSignal::RightScored
            } else {
                ScoreSignal::LeftScored
            }
        } else {
            ScoreSignal::NoScore
        }
    }

    /// Bounce off a paddle if touching it.
    ///
    /// Contact means the ball's leading edge for `side` (left edge for the
    /// left paddle, right edge for the right one) has passed the paddle's
    /// inner face and the center lies strictly within the paddle's vertical
    /// span. On contact both velocity components are negated.
    pub fn intersects<P: Bounds + ?Sized>(&mut self, paddle: &P, side: Side) -> bool {
        let rect = paddle.bounds();
        let reached = match side {
            Side::Left => self.center.x - self.radius < rect.right(),
            Side::Right => self.center.x + self.radius > rect.left(),
        };

        if reached && rect.spans_y_exclusive(self.center.y) {
            self.velocity = -self.velocity;
            true
        } else {
            false
        }
    }

    /// Move the center to a uniformly random spot with the whole ball inside
    pub fn randomize_position<R: Rng + ?Sized>(&mut self, arena: &Arena, rng: &mut R) {
        let r = self.radius;
        let max_x = (arena.width() - r).max(r);
        let max_y = (arena.height() - r).max(r);
        self.center = Vec2::new(rng.random_range(r..=max_x), rng.random_range(r..=max_y));
    }
}
