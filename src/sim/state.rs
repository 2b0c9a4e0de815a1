//! Game state and core simulation types
//!
//! One owning struct holds the arena, the ball, both paddles and the score.
//! Nothing here knows about drawing or input devices.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::ball::{Ball, ScoreSignal, Side};
use super::paddle::Paddle;
use super::rect::Arena;
use crate::color::Color;
use crate::consts::*;
use crate::error::ConfigError;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Ball and paddles are live
    Playing,
    /// A point was scored; physics and paddle input are frozen for good
    GameOver,
}

/// Points per side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Score {
    pub left: u32,
    pub right: u32,
}

impl Score {
    fn increment(&mut self, side: Side) {
        match side {
            Side::Left => self.left += 1,
            Side::Right => self.right += 1,
        }
    }
}

/// Something that happened during a tick, for the loop to report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// The ball left through `side`; that side's counter went up
    /// and the round is over.
    PointScored { side: Side, score: Score },
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Seed the ball placement was drawn from
    pub seed: u64,
    pub arena: Arena,
    pub ball: Ball,
    pub left_paddle: Paddle,
    pub right_paddle: Paddle,
    pub score: Score,
    pub phase: GamePhase,
    /// Simulation tick counter (Playing ticks only)
    pub time_ticks: u64,
}

impl GameState {
    /// Create the reference game on a 500x400 arena
    pub fn new(seed: u64) -> Result<Self, ConfigError> {
        Self::for_arena(Arena::new(ARENA_WIDTH, ARENA_HEIGHT)?, seed)
    }

    /// Standard ball and paddles on the given arena: one paddle near each
    /// side, ball dropped at a random spot
    pub fn for_arena(arena: Arena, seed: u64) -> Result<Self, ConfigError> {
        let ball = Ball::new(
            BALL_START_CENTER,
            BALL_RADIUS,
            BALL_START_VELOCITY,
            Color::WHITE,
        )?;
        let left_paddle = Paddle::new(
            Vec2::new(LEFT_PADDLE_X, PADDLE_TOP),
            PADDLE_SIZE,
            PADDLE_STEP,
            Color::WHITE,
        )?;
        let right_paddle = Paddle::new(
            Vec2::new(arena.width() - RIGHT_PADDLE_INSET, PADDLE_TOP),
            PADDLE_SIZE,
            PADDLE_STEP,
            Color::WHITE,
        )?;
        Self::with_entities(arena, ball, left_paddle, right_paddle, seed)
    }

    /// Create a game from prebuilt entities. The ball is moved to a random
    /// position inside the arena.
    pub fn with_entities(
        arena: Arena,
        mut ball: Ball,
        left_paddle: Paddle,
        right_paddle: Paddle,
        seed: u64,
    ) -> Result<Self, ConfigError> {
        if !ball.fits(&arena) {
            return Err(ConfigError::BallTooLarge {
                radius: ball.radius(),
                width: arena.width(),
                height: arena.height(),
            });
        }

        ball.randomize_position(&arena, &mut Pcg32::seed_from_u64(seed));

        Ok(Self {
            seed,
            arena,
            ball,
            left_paddle,
            right_paddle,
            score: Score::default(),
            phase: GamePhase::Playing,
            time_ticks: 0,
        })
    }

    pub fn is_playing(&self) -> bool {
        self.phase == GamePhase::Playing
    }

    pub fn paddle_mut(&mut self, side: Side) -> &mut Paddle {
        match side {
            Side::Left => &mut self.left_paddle,
            Side::Right => &mut self.right_paddle,
        }
    }

    /// Apply a ball step's scoring signal.
    ///
    /// The first point scored while Playing bumps that side's counter and
    /// moves to GameOver. Signals arriving after that are ignored.
    pub fn record_score(&mut self, signal: ScoreSignal) -> Option<GameEvent> {
        if self.phase != GamePhase::Playing {
            return None;
        }
        let side = signal.side()?;
        self.score.increment(side);
        self.phase = GamePhase::GameOver;
        Some(GameEvent::PointScored {
            side,
            score: self.score,
        })
    }
}
