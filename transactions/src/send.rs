//! Send-money transaction: the refund path of the contract.

use escrow_types::{AccountId, ChainId, NqtAmount};
use serde::Serialize;

/// A plain money transfer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SendMoneyTx {
    pub chain: ChainId,
    pub recipient: AccountId,
    #[serde(rename = "amountNQT")]
    pub amount: NqtAmount,
}

impl SendMoneyTx {
    pub fn new(chain: ChainId, recipient: AccountId, amount: NqtAmount) -> Self {
        Self {
            chain,
            recipient,
            amount,
        }
    }
}
