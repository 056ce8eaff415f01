//! Nullable DGS catalog: thread-safe in-memory goods for testing.

use escrow_host::{GoodRecord, GoodsCatalog, HostError};
use escrow_types::{ChainId, NqtAmount};
use std::collections::HashMap;
use std::sync::Mutex;

/// An in-memory goods catalog keyed by chain and good id.
///
/// Unknown goods come back as a record without a price, the way the host
/// answers. Every lookup is recorded for assertions.
pub struct NullCatalog {
    goods: Mutex<HashMap<(ChainId, String), GoodRecord>>,
    failure: Mutex<Option<fn() -> HostError>>,
    lookups: Mutex<Vec<(ChainId, String)>>,
}

impl NullCatalog {
    pub fn new() -> Self {
        Self {
            goods: Mutex::new(HashMap::new()),
            failure: Mutex::new(None),
            lookups: Mutex::new(Vec::new()),
        }
    }

    /// List a good at the given price.
    pub fn with_good(self, chain: ChainId, goods: &str, price: NqtAmount) -> Self {
        self.insert(chain, GoodRecord::priced(goods, price));
        self
    }

    pub fn insert(&self, chain: ChainId, record: GoodRecord) {
        self.goods
            .lock()
            .unwrap()
            .insert((chain, record.goods.clone()), record);
    }

    /// Make every subsequent lookup fail.
    pub fn fail_with(&self, failure: fn() -> HostError) {
        *self.failure.lock().unwrap() = Some(failure);
    }

    /// Every `(chain, goods)` pair looked up so far, in order.
    pub fn lookups(&self) -> Vec<(ChainId, String)> {
        self.lookups.lock().unwrap().clone()
    }
}

impl Default for NullCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl GoodsCatalog for NullCatalog {
    fn get_good(&self, chain: ChainId, goods: &str) -> Result<GoodRecord, HostError> {
        self.lookups
            .lock()
            .unwrap()
            .push((chain, goods.to_string()));

        if let Some(failure) = *self.failure.lock().unwrap() {
            return Err(failure());
        }

        Ok(self
            .goods
            .lock()
            .unwrap()
            .get(&(chain, goods.to_string()))
            .cloned()
            .unwrap_or_else(|| GoodRecord::missing(goods)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn returns_listed_good_on_its_chain_only() {
        let catalog = NullCatalog::new().with_good(ChainId::IGNIS, "GOOD_A", NqtAmount::new(10));

        let found = catalog.get_good(ChainId::IGNIS, "GOOD_A").unwrap();
        assert_eq!(found.price(), Some(NqtAmount::new(10)));

        let other_chain = catalog.get_good(ChainId::new(4), "GOOD_A").unwrap();
        assert_eq!(other_chain.price(), None);
    }

    #[test]
    fn records_lookups() {
        let catalog = NullCatalog::new();
        let _ = catalog.get_good(ChainId::IGNIS, "X");
        let _ = catalog.get_good(ChainId::IGNIS, "Y");
        assert_eq!(
            catalog.lookups(),
            vec![(ChainId::IGNIS, "X".to_string()), (ChainId::IGNIS, "Y".to_string())]
        );
    }

    #[test]
    fn injected_failure_is_returned() {
        let catalog = NullCatalog::new().with_good(ChainId::IGNIS, "GOOD_A", NqtAmount::new(10));
        catalog.fail_with(|| HostError::Timeout(5_000));
        assert!(matches!(
            catalog.get_good(ChainId::IGNIS, "GOOD_A"),
            Err(HostError::Timeout(5_000))
        ));
    }
}
