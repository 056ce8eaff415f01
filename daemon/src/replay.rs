//! Replay a batch of trigger transactions through the contract.

use escrow_contract::{ContractParams, ContractRunner, Decision};
use escrow_host::{EpochClock, GoodsCatalog};
use escrow_transactions::OutboundTransaction;
use escrow_types::{AccountId, BlockHeight, TriggerTransaction};
use serde::{Deserialize, Serialize};
use std::io::Write;

/// One entry of the triggers file: the transaction and its invocation parameters.
#[derive(Debug, Deserialize)]
pub struct Invocation {
    pub trigger: TriggerTransaction,
    #[serde(default)]
    pub params: serde_json::Value,
}

/// One output line.
#[derive(Debug, Serialize)]
pub struct ReplayRecord<'a> {
    pub sender: AccountId,
    pub decision: String,
    pub transaction: &'a OutboundTransaction,
}

fn describe(decision: Decision) -> String {
    match decision {
        Decision::Purchase => "purchase".to_string(),
        Decision::Refund(reason) => format!("refund:{reason}"),
    }
}

pub fn parse_invocations(s: &str) -> anyhow::Result<Vec<Invocation>> {
    Ok(serde_json::from_str(s)?)
}

/// Run every invocation and write one JSON line per admitted trigger.
///
/// Returns the number of lines written.
pub fn replay(
    runner: &ContractRunner,
    invocations: &[Invocation],
    height: BlockHeight,
    catalog: &dyn GoodsCatalog,
    clock: &dyn EpochClock,
    out: &mut dyn Write,
) -> anyhow::Result<usize> {
    let mut written = 0;
    for invocation in invocations {
        let params = ContractParams::from_json(&invocation.params);
        let Some(response) = runner.invoke(&invocation.trigger, params, height, catalog, clock)
        else {
            continue;
        };
        let record = ReplayRecord {
            sender: invocation.trigger.sender,
            decision: describe(response.decision),
            transaction: &response.transaction,
        };
        serde_json::to_writer(&mut *out, &record)?;
        writeln!(out)?;
        written += 1;
    }
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::StaticCatalog;
    use escrow_contract::EscrowContract;
    use escrow_types::EpochTime;

    struct FixedClock;

    impl EpochClock for FixedClock {
        fn now(&self) -> EpochTime {
            EpochTime::new(1_700_000_000)
        }
    }

    const TRIGGERS: &str = r#"[
        {
            "trigger": {"type": "CHILD_PAYMENT", "chain": 2, "sender": "1111",
                        "recipient": "9999", "amountNQT": 2000000000},
            "params": {"goods": "GOOD_A", "buyerMsg": "ship fast"}
        },
        {
            "trigger": {"type": "CHILD_PAYMENT", "chain": 2, "sender": "3333",
                        "recipient": "9999", "amountNQT": 500},
            "params": {"goods": "[String]"}
        },
        {
            "trigger": {"type": "CHILD_PAYMENT", "chain": 3, "sender": "4444",
                        "recipient": "9999", "amountNQT": 500}
        }
    ]"#;

    #[test]
    fn writes_one_line_per_admitted_trigger() {
        let catalog = StaticCatalog::from_toml_str(
            "[[goods]]\nchain = 2\ngoods = \"GOOD_A\"\nprice_nqt = 1000000000\n",
        )
        .unwrap();
        let runner = ContractRunner::new(EscrowContract::default(), AccountId::new(9_999));
        let invocations = parse_invocations(TRIGGERS).unwrap();

        let mut out = Vec::new();
        let written = replay(
            &runner,
            &invocations,
            BlockHeight::new(100_000),
            &catalog,
            &FixedClock,
            &mut out,
        )
        .unwrap();
        assert_eq!(written, 2);

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<serde_json::Value> = text
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        assert_eq!(lines[0]["decision"], "purchase");
        assert_eq!(lines[0]["transaction"]["requestType"], "dgsPurchase");
        assert_eq!(lines[0]["transaction"]["deliveryDeadlineTimestamp"], "1700345600");
        assert_eq!(lines[1]["decision"], "refund:missing_goods");
        assert_eq!(lines[1]["transaction"]["recipient"], "3333");
        assert_eq!(runner.stats().summary(), "skipped=1 refunded=1 purchased=1");
    }
}
