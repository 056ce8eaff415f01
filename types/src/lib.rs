//! Fundamental types for the DGS escrow contract.
//!
//! This crate defines the values shared across every other crate in the workspace:
//! account ids, chain ids, NQT amounts, epoch timestamps, block heights, the
//! trigger transaction view, and the fixed protocol constants.

pub mod account;
pub mod amount;
pub mod block;
pub mod chain;
pub mod error;
pub mod params;
pub mod time;
pub mod trigger;

pub use account::AccountId;
pub use amount::NqtAmount;
pub use block::BlockHeight;
pub use chain::ChainId;
pub use error::TypesError;
pub use time::EpochTime;
pub use trigger::{TransactionType, TriggerTransaction};
