//! Token amounts in NQT, the smallest integer unit of the native token.
//!
//! No fractional values exist in transaction fields, so amounts are plain
//! unsigned integers and never pass through floating point.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of NQT in one whole coin.
pub const ONE_COIN: u64 = 100_000_000;

/// An amount expressed in NQT.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NqtAmount(u64);

impl NqtAmount {
    pub const ZERO: Self = Self(0);

    pub const fn new(nqt: u64) -> Self {
        Self(nqt)
    }

    /// Whole coins, e.g. `from_coins(5)` is 500_000_000 NQT.
    pub const fn from_coins(coins: u64) -> Self {
        Self(coins * ONE_COIN)
    }

    pub fn nqt(&self) -> u64 {
        self.0
    }

    pub fn checked_add(self, other: Self) -> Option<Self> {
        self.0.checked_add(other.0).map(Self)
    }
}

impl fmt::Display for NqtAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coins_scale_to_nqt() {
        assert_eq!(NqtAmount::from_coins(5).nqt(), 500_000_000);
    }

    #[test]
    fn checked_add_detects_overflow() {
        assert_eq!(NqtAmount::new(u64::MAX).checked_add(NqtAmount::new(1)), None);
        assert_eq!(
            NqtAmount::new(1).checked_add(NqtAmount::new(2)),
            Some(NqtAmount::new(3))
        );
    }

    #[test]
    fn serializes_as_bare_integer() {
        assert_eq!(serde_json::to_string(&NqtAmount::new(500)).unwrap(), "500");
    }
}
