//! Host time source.

use escrow_types::EpochTime;

/// Source of the current host epoch time.
pub trait EpochClock {
    fn now(&self) -> EpochTime;
}

/// Wall clock converted to host epoch seconds.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemEpochClock;

impl EpochClock for SystemEpochClock {
    fn now(&self) -> EpochTime {
        EpochTime::now()
    }
}
