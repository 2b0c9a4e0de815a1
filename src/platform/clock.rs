//! Frame pacing
//!
//! Sleeps away whatever is left of a fixed per-frame budget, the way a
//! game clock tick does. Frames that overrun their budget are not
//! compensated for later.

use std::thread;
use std::time::{Duration, Instant};

/// Time budget for a single frame at `target_fps`
pub fn frame_budget(target_fps: u32) -> Duration {
    Duration::from_secs(1) / target_fps.max(1)
}

/// Tracks the end of the previous frame and counts frames for the FPS log
#[derive(Debug)]
pub struct FrameClock {
    last_tick: Instant,
    frames: u32,
    window_start: Instant,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock {
    /// Start timing the first frame now
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            last_tick: now,
            frames: 0,
            window_start: now,
        }
    }

    /// Sleep out the rest of this frame's budget and return how long the
    /// whole frame took
    pub fn tick(&mut self, target_fps: u32) -> Duration {
        let last = self.last_tick;
        let busy = Instant::now().duration_since(last);
        if let Some(remaining) = frame_budget(target_fps).checked_sub(busy) {
            thread::sleep(remaining);
        }

        let end = Instant::now();
        self.last_tick = end;
        self.record_frame(end);
        end.duration_since(last)
    }

    fn record_frame(&mut self, now: Instant) {
        self.frames += 1;
        if now.duration_since(self.window_start) >= Duration::from_secs(1) {
            log::debug!("{} fps", self.frames);
            self.frames = 0;
            self.window_start = now;
        }
    }
}
