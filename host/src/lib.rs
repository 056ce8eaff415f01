//! Abstract host services for the escrow contract.
//!
//! The contract runs inside a blockchain node and reads chain state through
//! the services defined here. Every host (the real node, the replay daemon,
//! in-memory doubles for testing) implements these traits; the contract
//! depends only on the traits.

pub mod catalog;
pub mod clock;
pub mod error;
pub mod good;

pub use catalog::GoodsCatalog;
pub use clock::{EpochClock, SystemEpochClock};
pub use error::HostError;
pub use good::GoodRecord;
