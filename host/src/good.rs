//! DGS good record as returned by the host lookup.

use escrow_types::{AccountId, NqtAmount};
use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A DGS good. Only `price` is consulted by the contract.
///
/// The host reports a missing or unavailable good as a record without
/// `priceNQT`, so every field is optional.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoodRecord {
    #[serde(default)]
    pub goods: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seller: Option<AccountId>,
    #[serde(
        rename = "priceNQT",
        default,
        deserialize_with = "lenient_price",
        skip_serializing_if = "Option::is_none"
    )]
    pub price: Option<NqtAmount>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<u32>,
    #[serde(default)]
    pub delisted: bool,
}

impl GoodRecord {
    pub fn priced(goods: impl Into<String>, price: NqtAmount) -> Self {
        Self {
            goods: goods.into(),
            price: Some(price),
            ..Default::default()
        }
    }

    /// The record the host answers with when the good does not exist.
    pub fn missing(goods: impl Into<String>) -> Self {
        Self {
            goods: goods.into(),
            ..Default::default()
        }
    }

    pub fn price(&self) -> Option<NqtAmount> {
        self.price
    }
}

/// The host API renders `priceNQT` as a decimal string; accept numbers too.
fn lenient_price<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<NqtAmount>, D::Error> {
    struct PriceVisitor;

    impl<'de> Visitor<'de> for PriceVisitor {
        type Value = Option<NqtAmount>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a non-negative NQT amount as a number or decimal string")
        }

        fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_some<D: Deserializer<'de>>(self, d: D) -> Result<Self::Value, D::Error> {
            d.deserialize_any(self)
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
            Ok(Some(NqtAmount::new(v)))
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
            u64::try_from(v)
                .map(|v| Some(NqtAmount::new(v)))
                .map_err(|_| E::custom(format!("negative price: {v}")))
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
            v.trim()
                .parse::<u64>()
                .map(|v| Some(NqtAmount::new(v)))
                .map_err(|_| E::custom(format!("invalid price: {v}")))
        }
    }

    deserializer.deserialize_option(PriceVisitor)
}
