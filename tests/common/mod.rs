//! Scripted backend: replays per-frame input and records every draw call

#![allow(dead_code)]

use std::collections::VecDeque;
use std::io;

use glam::Vec2;
use pong::Color;
use pong::platform::{Key, KeySet, Platform, PlatformEvent};
use pong::renderer::{Renderer, TextStyle};
use pong::sim::Rect;

/// Pixels per character for `string_width`
pub const GLYPH_WIDTH: f32 = 10.0;
pub const FONT_HEIGHT: f32 = 20.0;

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Clear,
    Present,
    Text(String, Vec2, TextStyle),
    Line(Vec2, Vec2, Color),
    Circle(Vec2, f32, Color),
    Rect(Rect, Color),
}

/// What the platform reports for one frame
#[derive(Debug, Clone, Default)]
pub struct FrameInput {
    pub events: Vec<PlatformEvent>,
    pub held: Vec<Key>,
}

impl FrameInput {
    pub fn idle() -> Self {
        Self::default()
    }

    pub fn holding(keys: &[Key]) -> Self {
        Self {
            events: keys.iter().map(|&k| PlatformEvent::KeyPressed(k)).collect(),
            held: keys.to_vec(),
        }
    }

    pub fn close_requested() -> Self {
        Self {
            events: vec![PlatformEvent::CloseRequested],
            held: Vec::new(),
        }
    }
}

#[derive(Debug, Default)]
pub struct ScriptedBackend {
    script: VecDeque<FrameInput>,
    pressed: KeySet,
    pub calls: Vec<Call>,
    pub polls: usize,
    pub clock_ticks: Vec<u32>,
    pub closes: usize,
    pub fail_present: bool,
    pub panic_on_tick: bool,
}

impl ScriptedBackend {
    pub fn new(script: impl IntoIterator<Item = FrameInput>) -> Self {
        Self {
            script: script.into_iter().collect(),
            ..Default::default()
        }
    }

    /// Calls recorded between the last Clear and the Present that follows it
    pub fn last_frame(&self) -> &[Call] {
        let start = self
            .calls
            .iter()
            .rposition(|c| *c == Call::Clear)
            .unwrap_or(0);
        &self.calls[start..]
    }

    pub fn texts(&self) -> Vec<&str> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                Call::Text(text, _, _) => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl Platform for ScriptedBackend {
    /// Once the script runs out, every poll reports a close request
    fn poll_events(&mut self) -> Vec<PlatformEvent> {
        self.polls += 1;
        let frame = self
            .script
            .pop_front()
            .unwrap_or_else(FrameInput::close_requested);
        self.pressed = frame.held.into_iter().collect();
        frame.events
    }

    fn pressed_keys(&self) -> &KeySet {
        &self.pressed
    }

    fn tick_clock(&mut self, target_fps: u32) {
        if self.panic_on_tick {
            panic!("clock failure");
        }
        self.clock_ticks.push(target_fps);
    }

    fn close(&mut self) {
        self.closes += 1;
    }
}

impl Renderer for ScriptedBackend {
    fn clear_screen(&mut self) {
        self.calls.push(Call::Clear);
    }

    fn present_frame(&mut self) -> io::Result<()> {
        self.calls.push(Call::Present);
        if self.fail_present {
            return Err(io::Error::new(io::ErrorKind::BrokenPipe, "display gone"));
        }
        Ok(())
    }

    fn draw_text(&mut self, text: &str, pos: Vec2, style: TextStyle) {
        self.calls.push(Call::Text(text.to_string(), pos, style));
    }

    fn draw_line(&mut self, from: Vec2, to: Vec2, color: Color) {
        self.calls.push(Call::Line(from, to, color));
    }

    fn draw_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.calls.push(Call::Circle(center, radius, color));
    }

    fn draw_rect(&mut self, rect: Rect, color: Color) {
        self.calls.push(Call::Rect(rect, color));
    }

    fn string_width(&self, text: &str) -> f32 {
        text.chars().count() as f32 * GLYPH_WIDTH
    }

    fn font_height(&self) -> f32 {
        FONT_HEIGHT
    }
}
