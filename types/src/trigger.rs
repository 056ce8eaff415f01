//! The inbound transaction that triggers a contract invocation.

use crate::account::AccountId;
use crate::amount::NqtAmount;
use crate::chain::ChainId;
use crate::error::TypesError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Host transaction types a trigger may carry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionType {
    ParentPayment,
    ChildPayment,
    ArbitraryMessage,
    AssetTransfer,
    DgsPurchase,
    PhasingVoteCasting,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ParentPayment => "PARENT_PAYMENT",
            Self::ChildPayment => "CHILD_PAYMENT",
            Self::ArbitraryMessage => "ARBITRARY_MESSAGE",
            Self::AssetTransfer => "ASSET_TRANSFER",
            Self::DgsPurchase => "DGS_PURCHASE",
            Self::PhasingVoteCasting => "PHASING_VOTE_CASTING",
        }
    }

    /// Plain money transfers on either the parent or a child chain.
    pub fn is_payment(&self) -> bool {
        matches!(self, Self::ParentPayment | Self::ChildPayment)
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransactionType {
    type Err = TypesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PARENT_PAYMENT" => Ok(Self::ParentPayment),
            "CHILD_PAYMENT" => Ok(Self::ChildPayment),
            "ARBITRARY_MESSAGE" => Ok(Self::ArbitraryMessage),
            "ASSET_TRANSFER" => Ok(Self::AssetTransfer),
            "DGS_PURCHASE" => Ok(Self::DgsPurchase),
            "PHASING_VOTE_CASTING" => Ok(Self::PhasingVoteCasting),
            other => Err(TypesError::UnknownTransactionType(other.to_string())),
        }
    }
}

/// Read-only view of the transaction that triggered the contract.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TriggerTransaction {
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    pub chain: ChainId,
    pub sender: AccountId,
    pub recipient: AccountId,
    #[serde(rename = "amountNQT")]
    pub amount: NqtAmount,
    #[serde(default)]
    pub phased: bool,
}

impl TriggerTransaction {
    /// An unphased child-chain payment, the common trigger shape.
    pub fn payment(
        chain: ChainId,
        sender: AccountId,
        recipient: AccountId,
        amount: NqtAmount,
    ) -> Self {
        let transaction_type = if chain.is_parent() {
            TransactionType::ParentPayment
        } else {
            TransactionType::ChildPayment
        };
        Self {
            transaction_type,
            chain,
            sender,
            recipient,
            amount,
            phased: false,
        }
    }

    pub fn with_phased(mut self, phased: bool) -> Self {
        self.phased = phased;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payment_type_follows_chain() {
        let parent = TriggerTransaction::payment(
            ChainId::ARDR,
            AccountId::new(1),
            AccountId::new(2),
            NqtAmount::new(10),
        );
        assert_eq!(parent.transaction_type, TransactionType::ParentPayment);

        let child = TriggerTransaction::payment(
            ChainId::IGNIS,
            AccountId::new(1),
            AccountId::new(2),
            NqtAmount::new(10),
        );
        assert_eq!(child.transaction_type, TransactionType::ChildPayment);
        assert!(!child.phased);
    }

    #[test]
    fn deserializes_host_json() {
        let json = r#"{
            "type": "CHILD_PAYMENT",
            "chain": 2,
            "sender": "1111",
            "recipient": "9999",
            "amountNQT": 2000000000
        }"#;
        let tx: TriggerTransaction = serde_json::from_str(json).unwrap();
        assert_eq!(tx.sender, AccountId::new(1111));
        assert_eq!(tx.amount, NqtAmount::new(2_000_000_000));
        assert!(!tx.phased);
    }

    #[test]
    fn type_names_round_trip_through_from_str() {
        for ty in [
            TransactionType::ParentPayment,
            TransactionType::ChildPayment,
            TransactionType::DgsPurchase,
        ] {
            assert_eq!(ty.as_str().parse::<TransactionType>().unwrap(), ty);
        }
        assert!("SEND_MONEY".parse::<TransactionType>().is_err());
    }
}
