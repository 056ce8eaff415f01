//! Invocation parameters.
//!
//! The host passes the contract's parameters as a JSON object. Two entries are
//! recognised; anything missing binds to the empty string.

use escrow_types::params::PLACEHOLDER_PARAM;
use serde_json::Value;

use crate::ContractError;

/// Typed view of the `goods` and `buyerMsg` invocation parameters.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContractParams {
    pub goods: String,
    pub buyer_msg: String,
}

impl ContractParams {
    pub fn new(goods: impl Into<String>, buyer_msg: impl Into<String>) -> Self {
        Self {
            goods: goods.into(),
            buyer_msg: buyer_msg.into(),
        }
    }

    /// Bind from the host's parameter object.
    ///
    /// DGS good ids are unsigned 64-bit numbers, so a `goods` given as such a
    /// number is rendered to its decimal text. Negative and fractional numbers,
    /// and other non-string values, bind to the empty string.
    pub fn from_json(params: &Value) -> Self {
        Self {
            goods: string_param(params, "goods"),
            buyer_msg: string_param(params, "buyerMsg"),
        }
    }

    /// Parse and bind a JSON parameter string. An empty string means no parameters.
    pub fn from_json_str(s: &str) -> Result<Self, ContractError> {
        if s.trim().is_empty() {
            return Ok(Self::default());
        }
        let value: Value =
            serde_json::from_str(s).map_err(|e| ContractError::Params(e.to_string()))?;
        if !value.is_object() {
            return Err(ContractError::Params("parameters must be a JSON object".into()));
        }
        Ok(Self::from_json(&value))
    }

    /// The good to buy, or `None` when the operator left it empty or at the
    /// UI placeholder.
    pub fn goods_id(&self) -> Option<&str> {
        match self.goods.as_str() {
            "" | PLACEHOLDER_PARAM => None,
            goods => Some(goods),
        }
    }
}

fn string_param(params: &Value, key: &str) -> String {
    match params.get(key) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.as_u64().map(|id| id.to_string()).unwrap_or_default(),
        _ => String::new(),
    }
}
