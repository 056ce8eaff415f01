//! Escrow contract for the Digital Goods Store.
//!
//! A buyer pays the contract account and names a good in the invocation
//! parameters. The contract checks the trigger, looks the good up, and either
//! refunds the buyer or buys the good on their behalf with a phased purchase
//! that the buyer can release and the escrow arbiter can veto.
//!
//! Control flow is linear and every admitted trigger yields exactly one
//! outbound descriptor:
//!
//! ```text
//! filter -> params -> phased? -> goods set? -> lookup -> price check -> purchase
//!                        |            |            |            |
//!                        +------------+---refund---+------------+
//! ```

pub mod config;
pub mod context;
pub mod contract;
pub mod error;
pub mod filter;
pub mod params;
pub mod pricing;
pub mod purchase;
pub mod refund;
pub mod runner;

pub use config::EscrowConfig;
pub use context::TransactionContext;
pub use contract::{ContractResponse, Decision, EscrowContract};
pub use error::ContractError;
pub use filter::{TriggerFilter, TriggerRejection};
pub use params::ContractParams;
pub use refund::RefundReason;
pub use runner::ContractRunner;
