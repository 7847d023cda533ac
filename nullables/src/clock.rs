//! Nullable clock — deterministic time for testing.
//!
//! Engine operations take `now: Timestamp` directly; tests drive the
//! lockup, cooldown and appeal-window gates by advancing this clock and
//! passing `clock.now()`.

use bond_types::Timestamp;
use std::cell::Cell;

/// A deterministic clock. Time only advances when you tell it to.
pub struct NullClock {
    current: Cell<u64>,
}

impl NullClock {
    pub fn new(initial_secs: u64) -> Self {
        Self {
            current: Cell::new(initial_secs),
        }
    }

    /// Get the current time.
    pub fn now(&self) -> Timestamp {
        Timestamp::new(self.current.get())
    }

    /// Advance time by a number of seconds and return the new now.
    pub fn advance(&self, secs: u64) -> Timestamp {
        self.current.set(self.current.get() + secs);
        self.now()
    }

    /// Set the time to a specific value.
    pub fn set(&self, secs: u64) {
        self.current.set(secs);
    }
}
