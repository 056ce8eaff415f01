//! The escrow handler.

use escrow_transactions::OutboundTransaction;
use escrow_utils::format_duration;

use crate::filter::{TriggerFilter, TriggerRejection};
use crate::pricing::{is_underpaid, lookup_price};
use crate::purchase::{build_purchase, PurchaseOrder};
use crate::refund::{build_refund, RefundReason};
use crate::{EscrowConfig, TransactionContext};

/// Which branch of the handler produced the outbound descriptor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Decision {
    Purchase,
    Refund(RefundReason),
}

/// Result of one invocation: exactly one descriptor for the host to sign.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContractResponse {
    pub decision: Decision,
    pub transaction: OutboundTransaction,
}

impl ContractResponse {
    pub fn is_refund(&self) -> bool {
        matches!(self.decision, Decision::Refund(_))
    }
}

/// Stateless escrow handler. Safe to call concurrently; each call only
/// touches its own [`TransactionContext`].
pub struct EscrowContract {
    config: EscrowConfig,
    filter: TriggerFilter,
}

impl EscrowContract {
    pub fn new(config: EscrowConfig) -> Self {
        let filter = TriggerFilter::from_config(&config);
        Self { config, filter }
    }

    /// Trigger gates. The host skips the invocation when this fails.
    pub fn validate(&self, ctx: &TransactionContext<'_>) -> Result<(), TriggerRejection> {
        self.filter.check(ctx.trigger, ctx.runner)
    }

    /// Decide between refund and purchase for an admitted trigger.
    ///
    /// Assumes [`EscrowContract::validate`] passed.
    pub fn process_transaction(&self, ctx: &TransactionContext<'_>) -> ContractResponse {
        let trigger = ctx.trigger;
        let _span = tracing::info_span!(
            "escrow",
            chain = %trigger.chain,
            sender = %trigger.sender,
            amount = %trigger.amount
        )
        .entered();

        // A phased trigger can be un-approved after we have already bought the
        // good, which would leave the contract paying for it.
        if trigger.phased {
            return self.refund(RefundReason::PhasedTrigger, ctx);
        }

        let Some(goods) = ctx.params.goods_id() else {
            return self.refund(RefundReason::MissingGoods, ctx);
        };

        let Some(price) = lookup_price(ctx.catalog, trigger.chain, goods) else {
            return self.refund(RefundReason::UnknownGood, ctx);
        };

        if is_underpaid(price, trigger.amount, self.config.fee_buffer_nqt) {
            return self.refund(RefundReason::Underpaid, ctx);
        }

        tracing::info!("INFO: price: {} |  amount: {}", price, trigger.amount);

        let now = ctx.clock.now();
        let order = PurchaseOrder {
            chain: trigger.chain,
            goods,
            price,
            buyer: ctx.sender(),
            buyer_msg: &ctx.params.buyer_msg,
        };
        let purchase = build_purchase(&self.config, &order, now, ctx.block_height);
        tracing::debug!(
            goods,
            deadline = %purchase.delivery_deadline_timestamp,
            window = %format_duration(u64::from(self.config.delivery_window_secs)),
            finish_height = %purchase.phasing_finish_height,
            "phased purchase built"
        );

        ContractResponse {
            decision: Decision::Purchase,
            transaction: purchase.into(),
        }
    }

    fn refund(&self, reason: RefundReason, ctx: &TransactionContext<'_>) -> ContractResponse {
        let refund = build_refund(reason, ctx.trigger, self.config.marketplace_chain);
        ContractResponse {
            decision: Decision::Refund(reason),
            transaction: refund.into(),
        }
    }
}

impl Default for EscrowContract {
    fn default() -> Self {
        Self::new(EscrowConfig::default())
    }
}
