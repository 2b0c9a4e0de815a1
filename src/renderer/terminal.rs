//! Terminal backend built on crossterm
//!
//! Raw mode on the alternate screen with the cursor hidden. Frames are
//! rasterised into a [`Canvas`] and written out on `present_frame`.
//! Where the terminal supports it, key release reporting is switched on so
//! held keys are exact; otherwise [`HeldKeys`] infers releases from the
//! autorepeat stream.

use std::io::{self, Stdout, Write};
use std::time::{Duration, Instant};

use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, KeyboardEnhancementFlags,
    PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::style::{self, Print, SetBackgroundColor, SetForegroundColor};
use crossterm::{cursor, execute, queue, terminal};
use glam::Vec2;

use super::canvas::{CELL_HEIGHT, CELL_WIDTH, Canvas};
use super::{Renderer, TextStyle};
use crate::color::Color;
use crate::platform::{FrameClock, HeldKeys, Key, KeySet, Platform, PlatformEvent};
use crate::settings::Settings;
use crate::sim::Rect;

/// Window backed by the controlling terminal
pub struct TerminalBackend {
    out: Stdout,
    canvas: Canvas,
    held: HeldKeys,
    clock: FrameClock,
    closed: bool,
}

impl TerminalBackend {
    /// Take over the terminal. Fails if stdout is not a usable terminal.
    pub fn open(settings: &Settings) -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        let mut backend = Self {
            out: io::stdout(),
            canvas: Canvas::new(settings.width, settings.height, settings.bg_color),
            held: HeldKeys::new(false),
            clock: FrameClock::new(),
            closed: false,
        };
        // From here on Drop restores the terminal if anything fails
        execute!(
            backend.out,
            terminal::EnterAlternateScreen,
            terminal::SetTitle(&settings.title),
            cursor::Hide,
            terminal::Clear(terminal::ClearType::All)
        )?;

        if supports_key_release() {
            execute!(
                backend.out,
                PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES)
            )?;
            backend.held = HeldKeys::new(true);
        } else {
            log::info!("Terminal does not report key releases; inferring them from autorepeat");
        }

        let (cols, rows) = terminal::size()?;
        if cols < backend.canvas.cols() || rows < backend.canvas.rows() {
            log::warn!(
                "Terminal is {}x{}, game needs {}x{} - the arena will be cut off",
                cols,
                rows,
                backend.canvas.cols(),
                backend.canvas.rows()
            );
        }
        log::debug!(
            "Font '{}' at {}px not applied; text is one terminal cell per glyph",
            settings.font_name,
            settings.font_size
        );
        log::info!(
            "Terminal backend ready ({}x{} cells)",
            backend.canvas.cols(),
            backend.canvas.rows()
        );
        Ok(backend)
    }

    fn restore(&mut self) -> io::Result<()> {
        if self.held.reports_release() {
            execute!(self.out, PopKeyboardEnhancementFlags)?;
        }
        execute!(
            self.out,
            style::ResetColor,
            cursor::Show,
            terminal::LeaveAlternateScreen
        )?;
        terminal::disable_raw_mode()
    }
}

impl Drop for TerminalBackend {
    fn drop(&mut self) {
        self.close();
    }
}

impl Platform for TerminalBackend {
    fn poll_events(&mut self) -> Vec<PlatformEvent> {
        let mut events = Vec::new();
        loop {
            match event::poll(Duration::ZERO) {
                Ok(true) => {}
                Ok(false) => break,
                Err(e) => {
                    log::warn!("Input poll failed: {}", e);
                    break;
                }
            }
            match event::read() {
                Ok(raw) => {
                    let event = translate_event(&raw);
                    track_key(&mut self.held, event, Instant::now());
                    events.push(event);
                }
                Err(e) => {
                    log::warn!("Input read failed: {}", e);
                    break;
                }
            }
        }
        self.held.expire(Instant::now());
        events
    }

    fn pressed_keys(&self) -> &KeySet {
        self.held.keys()
    }

    fn tick_clock(&mut self, target_fps: u32) {
        self.clock.tick(target_fps);
    }

    fn close(&mut self) {
        if self.closed {
            return;
        }
        self.closed = true;
        if let Err(e) = self.restore() {
            log::warn!("Failed to restore terminal: {}", e);
        }
    }
}

impl Renderer for TerminalBackend {
    fn clear_screen(&mut self) {
        self.canvas.clear();
    }

    fn present_frame(&mut self) -> io::Result<()> {
        for row in 0..self.canvas.rows() {
            queue!(self.out, cursor::MoveTo(0, row))?;
            let mut current: Option<(Color, Color)> = None;
            for cell in self.canvas.row(row) {
                if current != Some((cell.fg, cell.bg)) {
                    queue!(
                        self.out,
                        SetForegroundColor(term_color(cell.fg)),
                        SetBackgroundColor(term_color(cell.bg))
                    )?;
                    current = Some((cell.fg, cell.bg));
                }
                queue!(self.out, Print(cell.ch))?;
            }
        }
        queue!(self.out, style::ResetColor)?;
        self.out.flush()
    }

    fn draw_text(&mut self, text: &str, pos: Vec2, style: TextStyle) {
        self.canvas.text(pos, text, style.color, style.background);
    }

    fn draw_line(&mut self, from: Vec2, to: Vec2, color: Color) {
        self.canvas.line(from, to, color);
    }

    fn draw_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.canvas.fill_circle(center, radius, color);
    }

    fn draw_rect(&mut self, rect: Rect, color: Color) {
        self.canvas.fill_rect(rect, color);
    }

    fn string_width(&self, text: &str) -> f32 {
        text.chars().count() as f32 * CELL_WIDTH
    }

    fn font_height(&self) -> f32 {
        CELL_HEIGHT
    }
}

fn term_color(color: Color) -> style::Color {
    style::Color::Rgb {
        r: color.r,
        g: color.g,
        b: color.b,
    }
}

/// Release reporting needs the kitty keyboard protocol, which crossterm
/// only drives on unix terminals
#[cfg(unix)]
fn supports_key_release() -> bool {
    terminal::supports_keyboard_enhancement().unwrap_or(false)
}

#[cfg(not(unix))]
fn supports_key_release() -> bool {
    false
}

/// Feed one translated event into the held-key set
fn track_key(held: &mut HeldKeys, event: PlatformEvent, now: Instant) {
    match event {
        PlatformEvent::KeyPressed(key) => held.press(key, now),
        PlatformEvent::KeyReleased(key) => held.release(key),
        _ => {}
    }
}

/// Map a crossterm event to what the game cares about. Ctrl-C is a close
/// request since raw mode swallows the signal.
pub fn translate_event(event: &Event) -> PlatformEvent {
    let Event::Key(KeyEvent {
        code,
        modifiers,
        kind,
        ..
    }) = event
    else {
        return PlatformEvent::Other;
    };
    if *kind == KeyEventKind::Release {
        return match map_key(*code) {
            Some(key) => PlatformEvent::KeyReleased(key),
            None => PlatformEvent::Other,
        };
    }
    if modifiers.contains(KeyModifiers::CONTROL) && *code == KeyCode::Char('c') {
        return PlatformEvent::CloseRequested;
    }
    match map_key(*code) {
        Some(key) => PlatformEvent::KeyPressed(key),
        None => PlatformEvent::Other,
    }
}

fn map_key(code: KeyCode) -> Option<Key> {
    match code {
        KeyCode::Up => Some(Key::Up),
        KeyCode::Down => Some(Key::Down),
        KeyCode::Char('w' | 'W') => Some(Key::W),
        KeyCode::Char('s' | 'S') => Some(Key::S),
        KeyCode::Esc => Some(Key::Escape),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn key(code: KeyCode, modifiers: KeyModifiers, kind: KeyEventKind) -> Event {
        Event::Key(KeyEvent {
            code,
            modifiers,
            kind,
            state: KeyEventState::NONE,
        })
    }

    fn press(code: KeyCode) -> Event {
        key(code, KeyModifiers::NONE, KeyEventKind::Press)
    }

    #[test]
    fn test_translate_movement_keys() {
        assert_eq!(
            translate_event(&press(KeyCode::Up)),
            PlatformEvent::KeyPressed(Key::Up)
        );
        assert_eq!(
            translate_event(&press(KeyCode::Char('w'))),
            PlatformEvent::KeyPressed(Key::W)
        );
        assert_eq!(
            translate_event(&press(KeyCode::Char('S'))),
            PlatformEvent::KeyPressed(Key::S)
        );
        assert_eq!(
            translate_event(&press(KeyCode::Esc)),
            PlatformEvent::KeyPressed(Key::Escape)
        );
    }

    #[test]
    fn test_translate_repeat_and_release() {
        let repeat = key(KeyCode::Down, KeyModifiers::NONE, KeyEventKind::Repeat);
        assert_eq!(translate_event(&repeat), PlatformEvent::KeyPressed(Key::Down));
        let release = key(KeyCode::Down, KeyModifiers::NONE, KeyEventKind::Release);
        assert_eq!(translate_event(&release), PlatformEvent::KeyReleased(Key::Down));
        let other = key(KeyCode::Char('x'), KeyModifiers::NONE, KeyEventKind::Release);
        assert_eq!(translate_event(&other), PlatformEvent::Other);
    }

    /// Replays a held Up key through translation into the held set, one
    /// 90 fps frame at a time
    fn held_frames(reports_release: bool, script: &[(u32, Event)], frames: u32) -> Vec<bool> {
        let start = Instant::now();
        let frame = Duration::from_millis(11);
        let mut held = HeldKeys::new(reports_release);
        (0..frames)
            .map(|n| {
                let now = start + frame * n;
                for (_, raw) in script.iter().filter(|(at, _)| *at == n) {
                    track_key(&mut held, translate_event(raw), now);
                }
                held.expire(now);
                held.keys().contains(&Key::Up)
            })
            .collect()
    }

    #[test]
    fn test_held_key_with_release_reporting() {
        let script = [
            (0, press(KeyCode::Up)),
            (100, key(KeyCode::Up, KeyModifiers::NONE, KeyEventKind::Release)),
        ];
        let frames = held_frames(true, &script, 120);
        assert!(frames[..100].iter().all(|&down| down));
        assert!(frames[100..].iter().all(|&down| !down));
    }

    #[test]
    fn test_held_key_from_autorepeat() {
        // Press, ~500ms of silence, then repeats every third frame
        let mut script = vec![(0, press(KeyCode::Up))];
        script.extend((46..100).step_by(3).map(|n| (n, press(KeyCode::Up))));
        let frames = held_frames(false, &script, 130);
        assert!(frames[..100].iter().all(|&down| down));
        // Repeats stopped at frame 97, so the key comes up ~100ms later
        assert!(frames[120..].iter().all(|&down| !down));
    }

    #[test]
    fn test_ctrl_c_requests_close() {
        let ctrl_c = key(KeyCode::Char('c'), KeyModifiers::CONTROL, KeyEventKind::Press);
        assert_eq!(translate_event(&ctrl_c), PlatformEvent::CloseRequested);
        assert_eq!(translate_event(&press(KeyCode::Char('c'))), PlatformEvent::Other);
    }

    #[test]
    fn test_other_events_are_ignored() {
        assert_eq!(translate_event(&Event::Resize(80, 24)), PlatformEvent::Other);
        assert_eq!(translate_event(&Event::FocusLost), PlatformEvent::Other);
    }
}
