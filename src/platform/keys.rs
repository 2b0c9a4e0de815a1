//! Held-key tracking
//!
//! Terminals with the keyboard enhancement protocol report releases, so a
//! key is simply down from its press until its release. Plain terminals only
//! send a press followed by OS autorepeats, so there a key is taken to be
//! released once the autorepeats stop arriving.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use super::{Key, KeySet};

/// How long a fresh press stays held without releases. Covers the usual
/// delay before the OS starts autorepeating (around 500ms).
pub const FIRST_REPEAT_WAIT: Duration = Duration::from_millis(600);

/// How long a key stays held after an autorepeat (repeats come ~30 Hz)
pub const REPEAT_WAIT: Duration = Duration::from_millis(100);

#[derive(Debug, Clone, Copy)]
struct Hold {
    last_seen: Instant,
    repeating: bool,
}

/// The set of keys currently down
#[derive(Debug, Clone)]
pub struct HeldKeys {
    reports_release: bool,
    holds: HashMap<Key, Hold>,
    held: KeySet,
}

impl HeldKeys {
    /// `reports_release` says whether release events will arrive. Without
    /// them, holds time out.
    pub fn new(reports_release: bool) -> Self {
        Self {
            reports_release,
            holds: HashMap::new(),
            held: KeySet::new(),
        }
    }

    pub fn reports_release(&self) -> bool {
        self.reports_release
    }

    /// A press or autorepeat for `key` arrived at `now`
    pub fn press(&mut self, key: Key, now: Instant) {
        let repeating = self.holds.contains_key(&key);
        self.holds.insert(
            key,
            Hold {
                last_seen: now,
                repeating,
            },
        );
        self.held.insert(key);
    }

    pub fn release(&mut self, key: Key) {
        self.holds.remove(&key);
        self.held.remove(&key);
    }

    /// Drop holds whose autorepeat has gone quiet. No-op when releases
    /// are reported.
    pub fn expire(&mut self, now: Instant) {
        if self.reports_release {
            return;
        }
        self.holds.retain(|_, hold| {
            let wait = if hold.repeating {
                REPEAT_WAIT
            } else {
                FIRST_REPEAT_WAIT
            };
            now.saturating_duration_since(hold.last_seen) <= wait
        });
        self.held.retain(|key| self.holds.contains_key(key));
    }

    pub fn keys(&self) -> &KeySet {
        &self.held
    }
}
