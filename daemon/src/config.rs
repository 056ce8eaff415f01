//! Daemon configuration with TOML file support.

use escrow_contract::EscrowConfig;
use escrow_types::AccountId;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// File-level settings; CLI flags and env vars override them.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DaemonConfig {
    /// Log format: "human" or "json".
    #[serde(default = "default_log_format")]
    pub log_format: String,

    /// Log level filter: "trace", "debug", "info", "warn", "error".
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Account operating the contract.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account: Option<AccountId>,

    #[serde(default)]
    pub contract: EscrowConfig,
}

fn default_log_format() -> String {
    "human".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl DaemonConfig {
    pub fn from_toml_str(s: &str) -> anyhow::Result<Self> {
        let config: Self = toml::from_str(s)?;
        config.contract.validate()?;
        Ok(config)
    }

    pub fn from_toml_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn to_toml_string(&self) -> anyhow::Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

impl Default for DaemonConfig {
    fn default() -> Self {
        Self {
            log_format: default_log_format(),
            log_level: default_log_level(),
            account: None,
            contract: EscrowConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use escrow_types::NqtAmount;
    use std::io::Write;

    #[test]
    fn minimal_toml_uses_defaults() {
        let config = DaemonConfig::from_toml_str("").unwrap();
        assert_eq!(config.log_format, "human");
        assert_eq!(config.log_level, "info");
        assert!(config.account.is_none());
        assert_eq!(config.contract, EscrowConfig::default());
    }

    #[test]
    fn contract_table_overrides() {
        let config = DaemonConfig::from_toml_str(
            r#"
            log_format = "json"
            account = "9999"

            [contract]
            fee_buffer_nqt = 1
            "#,
        )
        .unwrap();
        assert_eq!(config.log_format, "json");
        assert_eq!(config.account, Some(AccountId::new(9_999)));
        assert_eq!(config.contract.fee_buffer_nqt, NqtAmount::new(1));
    }

    #[test]
    fn invalid_contract_section_rejected() {
        assert!(DaemonConfig::from_toml_str("[contract]\nphasing_window_blocks = 0").is_err());
    }

    #[test]
    fn loads_from_file_and_round_trips() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "account = \"1\"").unwrap();
        let config = DaemonConfig::from_toml_file(file.path()).unwrap();
        let text = config.to_toml_string().unwrap();
        let again = DaemonConfig::from_toml_str(&text).unwrap();
        assert_eq!(again.account, Some(AccountId::new(1)));
    }
}
