//! Message attached to a DGS purchase for the seller.

use crate::error::TransactionError;
use serde::{Deserialize, Serialize};

/// The JSON object embedded in the purchase message.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseMessage {
    #[serde(rename = "buyerMsg")]
    pub buyer_msg: String,
}

impl PurchaseMessage {
    pub fn new(buyer_msg: impl Into<String>) -> Self {
        Self {
            buyer_msg: buyer_msg.into(),
        }
    }

    pub fn to_json(&self) -> Result<String, TransactionError> {
        Ok(serde_json::to_string(self)?)
    }
}
