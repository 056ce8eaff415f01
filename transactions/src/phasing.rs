//! Phasing parameters: the deferred-approval rules attached to a purchase.
//!
//! A phased transaction only takes effect once its approval rule holds before
//! the finish height. The escrow rule is a composite poll over two whitelist
//! sub-polls, one for the buyer and one for the escrow arbiter:
//!
//! ```text
//! approve  <=>  Buyer  |  !Escro
//! ```
//!
//! The buyer can release the funds at any time; otherwise they are released
//! unless the arbiter vetoes before the finish height.

use crate::error::TransactionError;
use crate::text::decimal;
use escrow_types::{AccountId, ChainId};
use serde::{Serialize, Serializer};
use std::fmt;

/// Name of the buyer's sub-poll in the escrow expression.
pub const BUYER_POLL: &str = "Buyer";
/// Name of the arbiter's sub-poll in the escrow expression.
pub const ESCROW_POLL: &str = "Escro";

/// How votes on a poll are counted. Serialized as the host's numeric code.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum VotingModel {
    None,
    Account,
    Nqt,
    Asset,
    Currency,
    Transaction,
    Hash,
    Composite,
    Property,
}

impl VotingModel {
    pub fn code(&self) -> i8 {
        match self {
            Self::None => -1,
            Self::Account => 0,
            Self::Nqt => 1,
            Self::Asset => 2,
            Self::Currency => 3,
            Self::Transaction => 4,
            Self::Hash => 5,
            Self::Composite => 6,
            Self::Property => 7,
        }
    }
}

impl Serialize for VotingModel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i8(self.code())
    }
}

/// Minimum balance a voter must hold for the vote to count.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MinBalanceModel {
    None,
    Nqt,
    Asset,
    Currency,
}

impl MinBalanceModel {
    pub fn code(&self) -> u8 {
        match self {
            Self::None => 0,
            Self::Nqt => 1,
            Self::Asset => 2,
            Self::Currency => 3,
        }
    }
}

impl Serialize for MinBalanceModel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.code())
    }
}

/// Boolean expression over named sub-polls.
///
/// Rendered in the host's expression syntax: `|` for or, `!` for not, with
/// single spaces around `|`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PhasingExpression {
    Poll(String),
    Not(Box<PhasingExpression>),
    Or(Box<PhasingExpression>, Box<PhasingExpression>),
}

impl PhasingExpression {
    pub fn poll(name: impl Into<String>) -> Self {
        Self::Poll(name.into())
    }

    pub fn not(self) -> Self {
        Self::Not(Box::new(self))
    }

    pub fn or(self, rhs: Self) -> Self {
        Self::Or(Box::new(self), Box::new(rhs))
    }

    /// `Buyer | !Escro`
    pub fn escrow() -> Self {
        Self::poll(BUYER_POLL).or(Self::poll(ESCROW_POLL).not())
    }
}

impl fmt::Display for PhasingExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Poll(name) => f.write_str(name),
            Self::Not(e) => match e.as_ref() {
                Self::Or(..) => write!(f, "!({e})"),
                _ => write!(f, "!{e}"),
            },
            Self::Or(a, b) => write!(f, "{a} | {b}"),
        }
    }
}

impl Serialize for PhasingExpression {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// A whitelist vote referenced by name from a composite expression.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SubPoll {
    #[serde(rename = "phasingHolding", serialize_with = "decimal")]
    pub holding: u64,
    #[serde(rename = "phasingQuorum", serialize_with = "decimal")]
    pub quorum: u64,
    #[serde(rename = "phasingWhitelist")]
    pub whitelist: Vec<AccountId>,
    #[serde(rename = "phasingMinBalance", serialize_with = "decimal")]
    pub min_balance: u64,
    #[serde(rename = "phasingMinBalanceModel")]
    pub min_balance_model: MinBalanceModel,
    #[serde(rename = "phasingVotingModel")]
    pub voting_model: VotingModel,
}

impl SubPoll {
    /// One approving vote from any whitelisted account is enough.
    pub fn whitelist(accounts: Vec<AccountId>) -> Self {
        Self {
            holding: 0,
            quorum: 1,
            whitelist: accounts,
            min_balance: 0,
            min_balance_model: MinBalanceModel::None,
            voting_model: VotingModel::Account,
        }
    }
}

/// Named sub-polls, serialized as a JSON object in insertion order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SubPolls(Vec<(String, SubPoll)>);

impl SubPolls {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn with(mut self, name: impl Into<String>, poll: SubPoll) -> Self {
        self.0.push((name.into(), poll));
        self
    }

    pub fn get(&self, name: &str) -> Option<&SubPoll> {
        self.0.iter().find(|(n, _)| n == name).map(|(_, p)| p)
    }
}

impl Serialize for SubPolls {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, poll) in &self.0 {
            map.serialize_entry(name, poll)?;
        }
        map.end()
    }
}

/// Top-level phasing parameters of a composite poll.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PhasingParams {
    #[serde(rename = "phasingQuorum", serialize_with = "decimal")]
    pub quorum: u64,
    #[serde(rename = "phasingExpression")]
    pub expression: PhasingExpression,
    #[serde(rename = "phasingHolding", serialize_with = "decimal")]
    pub holding: u64,
    #[serde(rename = "phasingMinBalance", serialize_with = "decimal")]
    pub min_balance: u64,
    #[serde(rename = "phasingMinBalanceModel")]
    pub min_balance_model: MinBalanceModel,
    #[serde(rename = "phasingSubPolls")]
    pub sub_polls: SubPolls,
    #[serde(rename = "phasingVotingModel")]
    pub voting_model: VotingModel,
    #[serde(serialize_with = "decimal")]
    pub chain: ChainId,
}

impl PhasingParams {
    /// The escrow rule: approved by the buyer, or not vetoed by the arbiter.
    pub fn escrow(buyer: AccountId, arbiter: AccountId, chain: ChainId) -> Self {
        Self {
            quorum: 1,
            expression: PhasingExpression::escrow(),
            holding: 0,
            min_balance: 0,
            min_balance_model: MinBalanceModel::None,
            sub_polls: SubPolls::new()
                .with(ESCROW_POLL, SubPoll::whitelist(vec![arbiter]))
                .with(BUYER_POLL, SubPoll::whitelist(vec![buyer])),
            voting_model: VotingModel::Composite,
            chain,
        }
    }

    /// Every sub-poll the expression names must be defined.
    pub fn undefined_polls(&self) -> Vec<String> {
        let mut missing = Vec::new();
        collect_polls(&self.expression, &mut |name| {
            if self.sub_polls.get(name).is_none() && !missing.iter().any(|m| m == name) {
                missing.push(name.to_string());
            }
        });
        missing
    }

    /// Compact JSON text as expected in the host's `phasingParams` field.
    pub fn to_json(&self) -> Result<String, TransactionError> {
        Ok(serde_json::to_string(self)?)
    }
}

fn collect_polls(expr: &PhasingExpression, visit: &mut dyn FnMut(&str)) {
    match expr {
        PhasingExpression::Poll(name) => visit(name),
        PhasingExpression::Not(e) => collect_polls(e, visit),
        PhasingExpression::Or(a, b) => {
            collect_polls(a, visit);
            collect_polls(b, visit);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ARBITER: u64 = 8_984_186_822_627_297_858;

    #[test]
    fn escrow_expression_text() {
        assert_eq!(PhasingExpression::escrow().to_string(), "Buyer | !Escro");
    }

    #[test]
    fn negated_disjunction_is_parenthesized() {
        let e = PhasingExpression::poll("A")
            .or(PhasingExpression::poll("B"))
            .not();
        assert_eq!(e.to_string(), "!(A | B)");
        assert_eq!(PhasingExpression::poll("A").not().not().to_string(), "!!A");
    }

    #[test]
    fn escrow_params_json_is_exact() {
        let params = PhasingParams::escrow(
            AccountId::new(1111),
            AccountId::new(ARBITER),
            ChainId::IGNIS,
        );
        let expected = concat!(
            r#"{"phasingQuorum":"1","phasingExpression":"Buyer | !Escro","#,
            r#""phasingHolding":"0","phasingMinBalance":"0","phasingMinBalanceModel":0,"#,
            r#""phasingSubPolls":{"#,
            r#""Escro":{"phasingHolding":"0","phasingQuorum":"1","#,
            r#""phasingWhitelist":["8984186822627297858"],"#,
            r#""phasingMinBalance":"0","phasingMinBalanceModel":0,"phasingVotingModel":0},"#,
            r#""Buyer":{"phasingHolding":"0","phasingQuorum":"1","#,
            r#""phasingWhitelist":["1111"],"#,
            r#""phasingMinBalance":"0","phasingMinBalanceModel":0,"phasingVotingModel":0}},"#,
            r#""phasingVotingModel":6,"chain":"2"}"#,
        );
        assert_eq!(params.to_json().unwrap(), expected);
    }

    #[test]
    fn escrow_params_define_every_poll() {
        let params = PhasingParams::escrow(
            AccountId::new(1),
            AccountId::new(ARBITER),
            ChainId::IGNIS,
        );
        assert!(params.undefined_polls().is_empty());
    }

    #[test]
    fn reports_undefined_polls() {
        let mut params = PhasingParams::escrow(
            AccountId::new(1),
            AccountId::new(ARBITER),
            ChainId::IGNIS,
        );
        params.expression = PhasingExpression::poll("Seller").or(PhasingExpression::poll("Buyer"));
        assert_eq!(params.undefined_polls(), vec!["Seller".to_string()]);
    }
}
