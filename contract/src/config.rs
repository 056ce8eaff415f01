//! Contract configuration with TOML file support.

use escrow_types::params::{
    DELIVERY_WINDOW_SECS, ESCROW_ARBITER, FEE_BUFFER_NQT, MARKETPLACE_CHAIN,
    PHASING_WINDOW_BLOCKS, REJECTED_CHAIN,
};
use escrow_types::{AccountId, ChainId, NqtAmount};
use serde::{Deserialize, Serialize};

use crate::ContractError;

/// Operator-tunable settings of the escrow contract.
///
/// Every field defaults to the value the deployed contract has always used,
/// so an empty file reproduces its behaviour exactly.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EscrowConfig {
    /// Refund chain for unphased triggers, and the `chain` of the phasing params.
    #[serde(default = "default_marketplace_chain")]
    pub marketplace_chain: ChainId,

    /// Payments on these chains never reach the handler.
    #[serde(default = "default_rejected_chains")]
    pub rejected_chains: Vec<ChainId>,

    /// Amount kept on top of the price to pay the purchase fee.
    #[serde(default = "default_fee_buffer")]
    pub fee_buffer_nqt: NqtAmount,

    /// Seller's delivery window, in seconds.
    #[serde(default = "default_delivery_window")]
    pub delivery_window_secs: u32,

    /// Blocks until unresolved phasing is rejected.
    #[serde(default = "default_phasing_window")]
    pub phasing_window_blocks: u32,

    /// Account whose vote vetoes a purchase.
    #[serde(default = "default_escrow_arbiter")]
    pub escrow_arbiter: AccountId,
}

// ── Serde default helpers ──────────────────────────────────────────────

fn default_marketplace_chain() -> ChainId {
    MARKETPLACE_CHAIN
}

fn default_rejected_chains() -> Vec<ChainId> {
    vec![REJECTED_CHAIN]
}

fn default_fee_buffer() -> NqtAmount {
    FEE_BUFFER_NQT
}

fn default_delivery_window() -> u32 {
    DELIVERY_WINDOW_SECS
}

fn default_phasing_window() -> u32 {
    PHASING_WINDOW_BLOCKS
}

fn default_escrow_arbiter() -> AccountId {
    ESCROW_ARBITER
}

// ── Impl ───────────────────────────────────────────────────────────────

impl EscrowConfig {
    /// Load configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<std::path::Path>) -> Result<Self, ContractError> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ContractError::Config(format!("{}: {e}", path.as_ref().display())))?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ContractError> {
        let config: Self = toml::from_str(s).map_err(|e| ContractError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize the configuration to a TOML string.
    pub fn to_toml_string(&self) -> Result<String, ContractError> {
        toml::to_string_pretty(self).map_err(|e| ContractError::Config(e.to_string()))
    }

    /// Reject settings that would make every purchase fail on the host.
    pub fn validate(&self) -> Result<(), ContractError> {
        if self.delivery_window_secs == 0 {
            return Err(ContractError::Config(
                "delivery_window_secs must be positive".into(),
            ));
        }
        if self.phasing_window_blocks == 0 {
            return Err(ContractError::Config(
                "phasing_window_blocks must be positive".into(),
            ));
        }
        if self.rejected_chains.contains(&self.marketplace_chain) {
            return Err(ContractError::Config(format!(
                "marketplace chain {} is also rejected",
                self.marketplace_chain
            )));
        }
        Ok(())
    }
}

impl Default for EscrowConfig {
    fn default() -> Self {
        Self {
            marketplace_chain: default_marketplace_chain(),
            rejected_chains: default_rejected_chains(),
            fee_buffer_nqt: default_fee_buffer(),
            delivery_window_secs: default_delivery_window(),
            phasing_window_blocks: default_phasing_window(),
            escrow_arbiter: default_escrow_arbiter(),
        }
    }
}
