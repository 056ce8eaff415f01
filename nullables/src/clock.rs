//! Nullable clock: deterministic epoch time for testing.

use escrow_host::EpochClock;
use escrow_types::EpochTime;
use std::cell::Cell;

/// A deterministic clock for testing.
///
/// Time only advances when you tell it to.
pub struct NullClock {
    current: Cell<u32>,
}

impl NullClock {
    pub fn new(initial_secs: u32) -> Self {
        Self {
            current: Cell::new(initial_secs),
        }
    }

    /// Advance time by a number of seconds, saturating at the end of the
    /// epoch range.
    pub fn advance(&self, secs: u32) {
        self.current.set(self.current.get().saturating_add(secs));
    }

    /// Set the time to a specific value.
    pub fn set(&self, secs: u32) {
        self.current.set(secs);
    }
}

impl EpochClock for NullClock {
    fn now(&self) -> EpochTime {
        EpochTime::new(self.current.get())
    }
}
