//! Host epoch time.
//!
//! The host measures time in whole seconds since its genesis epoch,
//! 2018-01-01T00:00:00Z, not since the Unix epoch.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

/// Unix milliseconds of the host genesis epoch.
pub const EPOCH_BEGINNING_MS: u64 = 1_514_764_800_000;

/// Seconds since the host genesis epoch.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EpochTime(u32);

impl EpochTime {
    pub const GENESIS: Self = Self(0);

    pub const fn new(secs: u32) -> Self {
        Self(secs)
    }

    /// Convert Unix milliseconds to epoch seconds, rounding to the nearest second.
    ///
    /// Instants before genesis clamp to [`EpochTime::GENESIS`].
    pub fn from_unix_millis(millis: u64) -> Self {
        let since = millis.saturating_sub(EPOCH_BEGINNING_MS);
        if since == 0 {
            return Self::GENESIS;
        }
        let secs = (since + 500) / 1000;
        Self(u32::try_from(secs).unwrap_or(u32::MAX))
    }

    /// Current wall-clock time in host epoch seconds.
    pub fn now() -> Self {
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0);
        Self::from_unix_millis(millis)
    }

    pub fn as_secs(&self) -> u32 {
        self.0
    }

    /// The instant `secs` seconds later, clamped at `u32::MAX`.
    pub fn plus_secs(&self, secs: u32) -> Self {
        Self(self.0.saturating_add(secs))
    }
}

impl fmt::Display for EpochTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn genesis_maps_to_zero() {
        assert_eq!(EpochTime::from_unix_millis(EPOCH_BEGINNING_MS), EpochTime::GENESIS);
        assert_eq!(EpochTime::from_unix_millis(0), EpochTime::GENESIS);
    }

    #[test]
    fn rounds_to_nearest_second() {
        assert_eq!(EpochTime::from_unix_millis(EPOCH_BEGINNING_MS + 1_499).as_secs(), 1);
        assert_eq!(EpochTime::from_unix_millis(EPOCH_BEGINNING_MS + 1_500).as_secs(), 2);
    }

    #[test]
    fn plus_secs_saturates() {
        assert_eq!(EpochTime::new(u32::MAX - 1).plus_secs(10).as_secs(), u32::MAX);
        assert_eq!(EpochTime::new(1_700_000_000).plus_secs(345_600).to_string(), "1700345600");
    }
}
