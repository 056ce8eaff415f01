//! Digital Goods Store lookup.

use crate::good::GoodRecord;
use crate::HostError;
use escrow_types::ChainId;

/// Read access to the DGS catalog of each chain.
///
/// A lookup is a pure read of chain state. Implementations may block; the
/// caller never retries.
pub trait GoodsCatalog {
    fn get_good(&self, chain: ChainId, goods: &str) -> Result<GoodRecord, HostError>;
}

impl<T: GoodsCatalog + ?Sized> GoodsCatalog for &T {
    fn get_good(&self, chain: ChainId, goods: &str) -> Result<GoodRecord, HostError> {
        (**self).get_good(chain, goods)
    }
}
