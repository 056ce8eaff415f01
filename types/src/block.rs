//! Block height.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Height of a block on the host blockchain.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BlockHeight(u32);

impl BlockHeight {
    pub const fn new(height: u32) -> Self {
        Self(height)
    }

    pub fn get(&self) -> u32 {
        self.0
    }

    /// The height `blocks` blocks after this one, clamped at `u32::MAX`.
    pub fn plus_blocks(&self, blocks: u32) -> Self {
        Self(self.0.saturating_add(blocks))
    }
}

impl fmt::Display for BlockHeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
