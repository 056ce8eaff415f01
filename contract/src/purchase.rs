//! Phased purchase builder.

use escrow_transactions::{DgsPurchaseTx, PhasingParams, PurchaseMessage};
use escrow_types::params::PURCHASE_QUANTITY;
use escrow_types::{AccountId, BlockHeight, ChainId, EpochTime, NqtAmount};

use crate::EscrowConfig;

/// What is being bought, and for whom.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PurchaseOrder<'a> {
    /// Chain of the trigger; the purchase is made there.
    pub chain: ChainId,
    pub goods: &'a str,
    /// The looked-up price, not the amount received.
    pub price: NqtAmount,
    pub buyer: AccountId,
    pub buyer_msg: &'a str,
}

/// Compose the phased DGS purchase for `order`.
///
/// One unit is bought. The seller must deliver within the delivery window
/// from `now`, and the phasing resolves by `height` plus the phasing window.
/// Release requires the buyer's approval or the arbiter's silence.
pub fn build_purchase(
    config: &EscrowConfig,
    order: &PurchaseOrder<'_>,
    now: EpochTime,
    height: BlockHeight,
) -> DgsPurchaseTx {
    let phasing_params =
        PhasingParams::escrow(order.buyer, config.escrow_arbiter, config.marketplace_chain);
    debug_assert!(
        phasing_params.undefined_polls().is_empty(),
        "escrow expression names an undefined sub-poll"
    );
    DgsPurchaseTx {
        chain: order.chain,
        goods: order.goods.to_string(),
        message: PurchaseMessage::new(order.buyer_msg),
        message_is_prunable: true,
        delivery_deadline_timestamp: now.plus_secs(config.delivery_window_secs),
        price: order.price,
        quantity: PURCHASE_QUANTITY,
        phased: true,
        phasing_params,
        phasing_finish_height: height.plus_blocks(config.phasing_window_blocks),
    }
}
