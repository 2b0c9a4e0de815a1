//! Per-frame simulation step
//!
//! Paddle commands are applied when input is handled; the physics step runs
//! later in the same frame, after drawing.

use super::ball::Side;
use super::paddle::Direction;
use super::state::{GameEvent, GameState};

/// Movement keys held during a frame. Keys are independent: both paddles
/// can move in the same frame, and up plus down on one paddle cancel out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub left_up: bool,
    pub left_down: bool,
    pub right_up: bool,
    pub right_down: bool,
}

impl TickInput {
    /// Move commands in the order they are applied
    pub fn commands(&self) -> impl Iterator<Item = (Side, Direction)> {
        [
            (self.left_up, Side::Left, Direction::Up),
            (self.left_down, Side::Left, Direction::Down),
            (self.right_up, Side::Right, Direction::Up),
            (self.right_down, Side::Right, Direction::Down),
        ]
        .into_iter()
        .filter_map(|(held, side, direction)| held.then_some((side, direction)))
    }
}

/// Apply one frame of paddle commands. Ignored once the game is over.
pub fn apply_input(state: &mut GameState, input: &TickInput) {
    if !state.is_playing() {
        return;
    }
    for (side, direction) in input.commands() {
        state.paddle_mut(side).shift(direction);
    }
}

/// Advance the physics by one frame.
///
/// Paddle contact is tested against the ball's pre-move position, left
/// paddle first, then the ball moves and its scoring signal is recorded.
/// Does nothing once the game is over.
pub fn tick(state: &mut GameState) -> Option<GameEvent> {
    if !state.is_playing() {
        return None;
    }

    state.ball.intersects(&state.left_paddle, Side::Left);
    state.ball.intersects(&state.right_paddle, Side::Right);

    let signal = state.ball.advance(&state.arena);
    state.time_ticks += 1;
    state.record_score(signal)
}
