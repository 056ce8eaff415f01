//! Fixed constants of the escrow contract.
//!
//! These are the values the deployed contract has always used. Each one can be
//! overridden through the contract configuration; the defaults must stay as
//! they are for outbound descriptors to remain bit-compatible.

use crate::account::AccountId;
use crate::amount::NqtAmount;
use crate::chain::ChainId;

/// Reserved from the received amount to cover the purchase's network fee (5 coins).
pub const FEE_BUFFER_NQT: NqtAmount = NqtAmount::from_coins(5);

/// Delivery window granted to the seller: 4 days.
pub const DELIVERY_WINDOW_SECS: u32 = 345_600;

/// Phasing window of the purchase, roughly 4 days of testnet blocks.
pub const PHASING_WINDOW_BLOCKS: u32 = 20_100;

/// Chain used for refunds of unphased triggers and for the phasing params.
pub const MARKETPLACE_CHAIN: ChainId = ChainId::IGNIS;

/// Chain whose payments are never processed.
pub const REJECTED_CHAIN: ChainId = ChainId::AEUR;

/// Account allowed to veto a purchase.
pub const ESCROW_ARBITER: AccountId = AccountId::new(8_984_186_822_627_297_858);

/// UI default sent when the operator forgot to fill in a string parameter.
pub const PLACEHOLDER_PARAM: &str = "[String]";

/// Units of a good bought per invocation.
pub const PURCHASE_QUANTITY: u32 = 1;
