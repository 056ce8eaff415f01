//! Nullable infrastructure for deterministic testing.
//!
//! The contract reaches the host only through the traits in `escrow-host`.
//! This crate provides test-friendly implementations that:
//! - Return deterministic values
//! - Can be controlled programmatically
//! - Record what the contract asked for
//!
//! Usage: swap real host services for nullables in tests.

pub mod catalog;
pub mod clock;

pub use catalog::NullCatalog;
pub use clock::NullClock;
