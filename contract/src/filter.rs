//! Trigger gates checked before the handler runs.

use escrow_types::{AccountId, ChainId, TransactionType, TriggerTransaction};
use thiserror::Error;

use crate::EscrowConfig;

/// Why a trigger was not admitted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TriggerRejection {
    #[error("transaction type {0} is not accepted")]
    UnacceptedType(TransactionType),

    #[error("recipient {recipient} is not the contract runner {runner}")]
    NotAddressedToRunner {
        recipient: AccountId,
        runner: AccountId,
    },

    #[error("payments on chain {0} are rejected")]
    RejectedChain(ChainId),
}

/// Declarative gates on the trigger's type, recipient and chain. Only parent
/// and child chain payments are accepted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TriggerFilter {
    pub rejected_chains: Vec<ChainId>,
}

impl TriggerFilter {
    pub fn from_config(config: &EscrowConfig) -> Self {
        Self {
            rejected_chains: config.rejected_chains.clone(),
        }
    }

    /// Admit the trigger only if every gate passes. Gates are checked in
    /// order: type, recipient, chain.
    pub fn check(
        &self,
        trigger: &TriggerTransaction,
        runner: AccountId,
    ) -> Result<(), TriggerRejection> {
        if !trigger.transaction_type.is_payment() {
            return Err(TriggerRejection::UnacceptedType(trigger.transaction_type));
        }
        if trigger.recipient != runner {
            return Err(TriggerRejection::NotAddressedToRunner {
                recipient: trigger.recipient,
                runner,
            });
        }
        if self.rejected_chains.contains(&trigger.chain) {
            return Err(TriggerRejection::RejectedChain(trigger.chain));
        }
        Ok(())
    }
}

impl Default for TriggerFilter {
    fn default() -> Self {
        Self::from_config(&EscrowConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use escrow_types::NqtAmount;

    const RUNNER: AccountId = AccountId::new(9_999);

    fn payment(chain: ChainId) -> TriggerTransaction {
        TriggerTransaction::payment(chain, AccountId::new(1_111), RUNNER, NqtAmount::new(500))
    }

    #[test]
    fn admits_payments_to_runner() {
        let filter = TriggerFilter::default();
        assert_eq!(filter.check(&payment(ChainId::IGNIS), RUNNER), Ok(()));
        assert_eq!(filter.check(&payment(ChainId::ARDR), RUNNER), Ok(()));
    }

    #[test]
    fn rejects_non_payment_types() {
        let mut tx = payment(ChainId::IGNIS);
        tx.transaction_type = TransactionType::DgsPurchase;
        assert_eq!(
            TriggerFilter::default().check(&tx, RUNNER),
            Err(TriggerRejection::UnacceptedType(TransactionType::DgsPurchase))
        );
    }

    #[test]
    fn rejects_other_recipients() {
        let mut tx = payment(ChainId::IGNIS);
        tx.recipient = AccountId::new(1);
        assert!(matches!(
            TriggerFilter::default().check(&tx, RUNNER),
            Err(TriggerRejection::NotAddressedToRunner { .. })
        ));
    }

    #[test]
    fn rejects_pegged_fiat_chain() {
        assert_eq!(
            TriggerFilter::default().check(&payment(ChainId::AEUR), RUNNER),
            Err(TriggerRejection::RejectedChain(ChainId::AEUR))
        );
    }

    #[test]
    fn type_gate_checked_first() {
        let mut tx = payment(ChainId::AEUR);
        tx.transaction_type = TransactionType::ArbitraryMessage;
        tx.recipient = AccountId::new(1);
        assert!(matches!(
            TriggerFilter::default().check(&tx, RUNNER),
            Err(TriggerRejection::UnacceptedType(_))
        ));
    }
}
