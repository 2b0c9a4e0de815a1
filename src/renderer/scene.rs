//! Scene drawing: entities, score, divider and the GAME OVER overlay
//!
//! Everything here only reads game state.

use std::io;

use glam::Vec2;

use super::{Renderer, TextStyle};
use crate::color::Color;
use crate::consts::*;
use crate::settings::Settings;
use crate::sim::{Ball, Bounds, GamePhase, GameState, Paddle};

/// Something that knows how to draw itself
pub trait Drawable {
    fn draw<R: Renderer + ?Sized>(&self, renderer: &mut R);
}

impl Drawable for Ball {
    fn draw<R: Renderer + ?Sized>(&self, renderer: &mut R) {
        renderer.draw_circle(self.center, self.radius(), self.color());
    }
}

impl Drawable for Paddle {
    fn draw<R: Renderer + ?Sized>(&self, renderer: &mut R) {
        renderer.draw_rect(self.bounds(), self.color());
    }
}

/// Draw and present one complete frame
pub fn draw_frame<R: Renderer + ?Sized>(
    renderer: &mut R,
    state: &GameState,
    settings: &Settings,
) -> io::Result<()> {
    renderer.clear_screen();
    draw_score(renderer, state, settings);
    renderer.draw_line(
        Vec2::new(DIVIDER_X, 0.0),
        Vec2::new(DIVIDER_X, state.arena.height()),
        Color::WHITE,
    );
    state.ball.draw(renderer);
    state.left_paddle.draw(renderer);
    state.right_paddle.draw(renderer);
    if state.phase == GamePhase::GameOver {
        draw_game_over(renderer, state, settings);
    }
    renderer.present_frame()
}

/// Left score right-aligned against the anchor, right score left-aligned
fn draw_score<R: Renderer + ?Sized>(
    renderer: &mut R,
    state: &GameState,
    settings: &Settings,
) {
    let style = TextStyle {
        color: settings.font_color,
        background: None,
    };

    let left = state.score.left.to_string();
    let width = renderer.string_width(&left);
    renderer.draw_text(&left, Vec2::new(SCORE_LEFT_ANCHOR_X - width, 0.0), style);

    let right = state.score.right.to_string();
    renderer.draw_text(&right, Vec2::new(SCORE_RIGHT_X, 0.0), style);
}

/// GAME OVER in the bottom-left corner, in the ball's color
fn draw_game_over<R: Renderer + ?Sized>(
    renderer: &mut R,
    state: &GameState,
    settings: &Settings,
) {
    let style = TextStyle {
        color: state.ball.color(),
        background: Some(settings.game_over_bg),
    };
    let y = state.arena.height() - renderer.font_height();
    renderer.draw_text(GAME_OVER_TEXT, Vec2::new(0.0, y), style);
}
