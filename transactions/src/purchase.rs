//! DGS purchase transaction: the phased buy issued on behalf of the buyer.

use crate::error::TransactionError;
use crate::message::PurchaseMessage;
use crate::phasing::PhasingParams;
use crate::text::{decimal, json_text};
use escrow_types::{BlockHeight, ChainId, EpochTime, NqtAmount};
use serde::Serialize;

/// A phased Digital Goods Store purchase.
///
/// `message` and `phasing_params` are typed here and rendered as JSON text
/// only when the descriptor is serialized for the host.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DgsPurchaseTx {
    pub chain: ChainId,
    pub goods: String,
    #[serde(serialize_with = "json_text")]
    pub message: PurchaseMessage,
    pub message_is_prunable: bool,
    #[serde(serialize_with = "decimal")]
    pub delivery_deadline_timestamp: EpochTime,
    #[serde(rename = "priceNQT")]
    pub price: NqtAmount,
    #[serde(serialize_with = "decimal")]
    pub quantity: u32,
    pub phased: bool,
    #[serde(serialize_with = "json_text")]
    pub phasing_params: PhasingParams,
    pub phasing_finish_height: BlockHeight,
}

impl DgsPurchaseTx {
    /// Deadline as the decimal string the host expects.
    pub fn delivery_deadline_text(&self) -> String {
        self.delivery_deadline_timestamp.to_string()
    }

    pub fn quantity_text(&self) -> String {
        self.quantity.to_string()
    }

    pub fn message_json(&self) -> Result<String, TransactionError> {
        self.message.to_json()
    }

    pub fn phasing_params_json(&self) -> Result<String, TransactionError> {
        self.phasing_params.to_json()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use escrow_types::AccountId;

    fn sample() -> DgsPurchaseTx {
        DgsPurchaseTx {
            chain: ChainId::IGNIS,
            goods: "GOOD_A".into(),
            message: PurchaseMessage::new("ship fast"),
            message_is_prunable: true,
            delivery_deadline_timestamp: EpochTime::new(1_700_345_600),
            price: NqtAmount::new(1_000_000_000),
            quantity: 1,
            phased: true,
            phasing_params: PhasingParams::escrow(
                AccountId::new(1111),
                AccountId::new(8_984_186_822_627_297_858),
                ChainId::IGNIS,
            ),
            phasing_finish_height: BlockHeight::new(120_100),
        }
    }

    #[test]
    fn host_fields_render_as_text() {
        let value = serde_json::to_value(sample()).unwrap();
        assert_eq!(value["deliveryDeadlineTimestamp"], "1700345600");
        assert_eq!(value["quantity"], "1");
        assert_eq!(value["priceNQT"], 1_000_000_000u64);
        assert_eq!(value["message"], r#"{"buyerMsg":"ship fast"}"#);
        assert_eq!(value["messageIsPrunable"], true);
        assert_eq!(value["phasingFinishHeight"], 120_100);
        assert_eq!(value["phased"], true);
    }

    #[test]
    fn phasing_params_embed_as_json_string() {
        let tx = sample();
        let value = serde_json::to_value(&tx).unwrap();
        let embedded = value["phasingParams"].as_str().unwrap();
        assert_eq!(embedded, tx.phasing_params_json().unwrap());

        let parsed: serde_json::Value = serde_json::from_str(embedded).unwrap();
        assert_eq!(parsed["phasingVotingModel"], 6);
        assert_eq!(parsed["phasingSubPolls"]["Buyer"]["phasingWhitelist"][0], "1111");
    }
}
