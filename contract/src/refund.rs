//! Refund decision: when the buyer gets their money back.

use escrow_transactions::SendMoneyTx;
use escrow_types::{ChainId, TriggerTransaction};
use std::fmt;

/// The conditions that end an invocation with a refund, in priority order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RefundReason {
    /// The trigger itself is phased and could still be rolled back.
    PhasedTrigger,
    /// `goods` is empty or the UI placeholder.
    MissingGoods,
    /// The lookup returned no price.
    UnknownGood,
    /// Price plus fee buffer exceeds the amount received.
    Underpaid,
}

impl RefundReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PhasedTrigger => "phased_trigger",
            Self::MissingGoods => "missing_goods",
            Self::UnknownGood => "unknown_good",
            Self::Underpaid => "underpaid",
        }
    }

    /// Line written to the host log when this refund is issued.
    pub fn log_message(&self) -> &'static str {
        match self {
            Self::PhasedTrigger => "Phased trigger, refunding on trigger chain",
            Self::MissingGoods => "No good sent, sending back payment",
            Self::UnknownGood => "WARNING: Could not get good, sending back payment",
            Self::Underpaid => "WARNING: Not enough sent, sending back payment",
        }
    }

    /// Only the phased-trigger refund goes back on the trigger's own chain.
    /// The others go out on the marketplace chain.
    pub fn refund_chain(
        &self,
        trigger: &TriggerTransaction,
        marketplace_chain: ChainId,
    ) -> ChainId {
        match self {
            Self::PhasedTrigger => trigger.chain,
            _ => marketplace_chain,
        }
    }
}

impl fmt::Display for RefundReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Build the refund for `reason`: the full trigger amount back to the sender.
pub fn build_refund(
    reason: RefundReason,
    trigger: &TriggerTransaction,
    marketplace_chain: ChainId,
) -> SendMoneyTx {
    match reason {
        RefundReason::PhasedTrigger | RefundReason::MissingGoods => {
            tracing::info!(reason = %reason, "{}", reason.log_message())
        }
        RefundReason::UnknownGood | RefundReason::Underpaid => {
            tracing::warn!(reason = %reason, "{}", reason.log_message())
        }
    }
    SendMoneyTx::new(
        reason.refund_chain(trigger, marketplace_chain),
        trigger.sender,
        trigger.amount,
    )
}
