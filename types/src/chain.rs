//! Chain identifier.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies one of the host's parallel ledgers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChainId(u32);

impl ChainId {
    /// The parent chain.
    pub const ARDR: Self = Self(1);
    /// The child chain hosting the marketplace in this deployment.
    pub const IGNIS: Self = Self(2);
    /// The pegged-fiat child chain.
    pub const AEUR: Self = Self(3);

    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    pub fn is_parent(&self) -> bool {
        *self == Self::ARDR
    }
}

impl fmt::Display for ChainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
