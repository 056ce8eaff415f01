//! Goods catalog loaded from a TOML file.
//!
//! ```toml
//! [[goods]]
//! chain = 2
//! goods = "GOOD_A"
//! price_nqt = 1000000000
//! ```

use escrow_host::{GoodRecord, GoodsCatalog, HostError};
use escrow_types::{AccountId, ChainId, NqtAmount};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    goods: Vec<CatalogEntry>,
}

#[derive(Debug, Deserialize)]
struct CatalogEntry {
    chain: ChainId,
    goods: String,
    price_nqt: NqtAmount,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    seller: Option<AccountId>,
    #[serde(default)]
    quantity: Option<u32>,
    #[serde(default)]
    delisted: bool,
}

/// A read-only snapshot of DGS goods.
#[derive(Debug, Default)]
pub struct StaticCatalog {
    goods: HashMap<(ChainId, String), GoodRecord>,
}

impl StaticCatalog {
    pub fn from_toml_str(s: &str) -> anyhow::Result<Self> {
        let file: CatalogFile = toml::from_str(s)?;
        let goods = file
            .goods
            .into_iter()
            .map(|e| {
                let record = GoodRecord {
                    goods: e.goods.clone(),
                    name: e.name,
                    seller: e.seller,
                    price: Some(e.price_nqt),
                    quantity: e.quantity,
                    delisted: e.delisted,
                };
                ((e.chain, e.goods), record)
            })
            .collect();
        Ok(Self { goods })
    }

    pub fn from_toml_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn len(&self) -> usize {
        self.goods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.goods.is_empty()
    }
}

impl GoodsCatalog for StaticCatalog {
    fn get_good(&self, chain: ChainId, goods: &str) -> Result<GoodRecord, HostError> {
        Ok(self
            .goods
            .get(&(chain, goods.to_string()))
            .cloned()
            .unwrap_or_else(|| GoodRecord::missing(goods)))
    }
}
