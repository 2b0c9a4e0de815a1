//! The frame loop
//!
//! Each frame: handle input, draw, advance the simulation, then sleep out
//! the rest of the frame budget. Gameplay runs in two phases (Playing and
//! GameOver, see [`GamePhase`]); closing is a separate flag that is honoured
//! in either phase.

use std::ops::{Deref, DerefMut};

use crate::error::ConfigError;
use crate::platform::{Key, KeySet, Platform, PlatformEvent};
use crate::renderer::{Backend, draw_frame};
use crate::settings::Settings;
use crate::sim::{GameEvent, GamePhase, GameState, TickInput, apply_input, tick};

/// Translate held keys into paddle commands: W/S drive the left paddle,
/// the arrow keys the right one
pub fn input_from_keys(keys: &KeySet) -> TickInput {
    TickInput {
        left_up: keys.contains(&Key::W),
        left_down: keys.contains(&Key::S),
        right_up: keys.contains(&Key::Up),
        right_down: keys.contains(&Key::Down),
    }
}

/// One game session
#[derive(Debug)]
pub struct Game {
    state: GameState,
    settings: Settings,
    closing: bool,
}

impl Game {
    pub fn new(settings: Settings, seed: u64) -> Result<Self, ConfigError> {
        settings.validate()?;
        let state = GameState::for_arena(settings.arena()?, seed)?;
        log::info!("Game initialized with seed: {}", seed);
        Ok(Self {
            state,
            settings,
            closing: false,
        })
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    pub fn is_closing(&self) -> bool {
        self.closing
    }

    /// Run frames until a close is requested, then release the window.
    /// The window is closed exactly once on every way out of this function,
    /// including unwinding.
    pub fn play<B: Backend + ?Sized>(&mut self, backend: &mut B) {
        log::info!(
            "Starting {} at {} fps ({:?} per frame)",
            self.settings.title,
            self.settings.frame_rate,
            self.settings.frame_budget()
        );
        let mut window = CloseOnDrop::new(backend);
        while !self.closing {
            self.run_frame(&mut *window);
        }
        log::info!(
            "Closing with score {} - {}",
            self.state.score.left,
            self.state.score.right
        );
    }

    /// One pass of the loop
    pub fn run_frame<B: Backend + ?Sized>(&mut self, backend: &mut B) {
        self.handle_events(backend);
        self.draw(backend);
        self.update(backend);
    }

    fn handle_events<B: Backend + ?Sized>(&mut self, backend: &mut B) {
        for event in backend.poll_events() {
            if event == PlatformEvent::CloseRequested {
                self.request_close("close requested");
            }
        }

        let keys = backend.pressed_keys();
        if keys.contains(&Key::Escape) {
            self.request_close("escape pressed");
        }
        let input = input_from_keys(keys);
        apply_input(&mut self.state, &input);
    }

    fn draw<B: Backend + ?Sized>(&self, backend: &mut B) {
        if let Err(e) = draw_frame(backend, &self.state, &self.settings) {
            log::warn!("Render error: {:?}", e);
        }
    }

    fn update<B: Backend + ?Sized>(&mut self, backend: &mut B) {
        if let Some(GameEvent::PointScored { side, score }) = tick(&mut self.state) {
            log::info!(
                "{:?} side scored after {} ticks ({} - {})",
                side,
                self.state.time_ticks,
                score.left,
                score.right
            );
            log::info!("Game over");
        }
        backend.tick_clock(self.settings.frame_rate);
    }

    fn request_close(&mut self, reason: &str) {
        if !self.closing {
            log::info!("Close: {}", reason);
            self.closing = true;
        }
    }
}

/// Borrowed window that is closed when the guard goes away
struct CloseOnDrop<'a, P: Platform + ?Sized> {
    platform: &'a mut P,
}

impl<'a, P: Platform + ?Sized> CloseOnDrop<'a, P> {
    fn new(platform: &'a mut P) -> Self {
        Self { platform }
    }
}

impl<P: Platform + ?Sized> Deref for CloseOnDrop<'_, P> {
    type Target = P;

    fn deref(&self) -> &P {
        &*self.platform
    }
}

impl<P: Platform + ?Sized> DerefMut for CloseOnDrop<'_, P> {
    fn deref_mut(&mut self) -> &mut P {
        &mut *self.platform
    }
}

impl<P: Platform + ?Sized> Drop for CloseOnDrop<'_, P> {
    fn drop(&mut self) {
        self.platform.close();
    }
}
