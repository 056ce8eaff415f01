//! Outbound transaction descriptors produced by the escrow contract.
//!
//! The contract never signs or broadcasts anything. It hands one of these
//! descriptors to the host, which turns it into a real transaction:
//! - **sendMoney**: refund of the trigger amount to the buyer
//! - **dgsPurchase**: phased purchase of a Digital Goods Store good
//!
//! The serde form of every descriptor mirrors the host API parameter names.

pub mod error;
pub mod message;
pub mod phasing;
pub mod purchase;
pub mod send;

mod text;

pub use error::TransactionError;
pub use message::PurchaseMessage;
pub use phasing::{MinBalanceModel, PhasingExpression, PhasingParams, SubPoll, VotingModel};
pub use purchase::DgsPurchaseTx;
pub use send::SendMoneyTx;

use escrow_types::ChainId;
use serde::Serialize;

/// The single descriptor a contract invocation hands back to the host.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "requestType")]
pub enum OutboundTransaction {
    #[serde(rename = "sendMoney")]
    SendMoney(SendMoneyTx),
    #[serde(rename = "dgsPurchase")]
    DgsPurchase(DgsPurchaseTx),
}

impl OutboundTransaction {
    /// Host API request type of this descriptor.
    pub fn request_type(&self) -> &'static str {
        match self {
            Self::SendMoney(_) => "sendMoney",
            Self::DgsPurchase(_) => "dgsPurchase",
        }
    }

    /// Chain the transaction will be submitted on.
    pub fn chain(&self) -> ChainId {
        match self {
            Self::SendMoney(tx) => tx.chain,
            Self::DgsPurchase(tx) => tx.chain,
        }
    }

    pub fn as_send_money(&self) -> Option<&SendMoneyTx> {
        match self {
            Self::SendMoney(tx) => Some(tx),
            Self::DgsPurchase(_) => None,
        }
    }

    pub fn as_dgs_purchase(&self) -> Option<&DgsPurchaseTx> {
        match self {
            Self::DgsPurchase(tx) => Some(tx),
            Self::SendMoney(_) => None,
        }
    }

    /// Compact JSON form handed to the host.
    pub fn to_json(&self) -> Result<String, TransactionError> {
        Ok(serde_json::to_string(self)?)
    }
}

impl From<SendMoneyTx> for OutboundTransaction {
    fn from(tx: SendMoneyTx) -> Self {
        Self::SendMoney(tx)
    }
}

impl From<DgsPurchaseTx> for OutboundTransaction {
    fn from(tx: DgsPurchaseTx) -> Self {
        Self::DgsPurchase(tx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use escrow_types::{AccountId, NqtAmount};

    #[test]
    fn send_money_json_is_tagged() {
        let tx: OutboundTransaction =
            SendMoneyTx::new(ChainId::IGNIS, AccountId::new(2222), NqtAmount::new(500)).into();
        assert_eq!(tx.request_type(), "sendMoney");
        assert_eq!(
            tx.to_json().unwrap(),
            r#"{"requestType":"sendMoney","chain":2,"recipient":"2222","amountNQT":500}"#
        );
        assert!(tx.as_dgs_purchase().is_none());
    }
}
