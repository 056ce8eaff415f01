//! Host log output of each handler branch: message text and level.

use std::io;
use std::sync::{Arc, Mutex};

use escrow_contract::{ContractParams, ContractRunner, EscrowContract};
use escrow_nullables::{NullCatalog, NullClock};
use escrow_types::{AccountId, BlockHeight, ChainId, NqtAmount, TriggerTransaction};

const RUNNER: AccountId = AccountId::new(9_999);
const PRICE: u64 = 1_000_000_000;

/// In-memory sink for the fmt subscriber.
#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl CapturedLogs {
    fn lines(&self) -> Vec<String> {
        let bytes = self.0.lock().unwrap().clone();
        String::from_utf8(bytes)
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect()
    }
}

/// Invoke the contract once under a capturing subscriber and return the
/// lines it logged at info and above.
fn invoke_logged(trigger: TriggerTransaction, goods: &str) -> Vec<String> {
    let logs = CapturedLogs::default();
    let writer = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .without_time()
        .with_target(false)
        .with_max_level(tracing::Level::INFO)
        .finish();

    let catalog = NullCatalog::new().with_good(ChainId::IGNIS, "GOOD_A", NqtAmount::new(PRICE));
    let runner = ContractRunner::new(EscrowContract::default(), RUNNER);
    tracing::subscriber::with_default(subscriber, || {
        runner
            .invoke(
                &trigger,
                ContractParams::new(goods, "ship fast"),
                BlockHeight::new(100_000),
                &catalog,
                &NullClock::new(1_700_000_000),
            )
            .unwrap();
    });
    logs.lines()
}

fn payment(amount: u64) -> TriggerTransaction {
    TriggerTransaction::payment(
        ChainId::IGNIS,
        AccountId::new(1_111),
        RUNNER,
        NqtAmount::new(amount),
    )
}

fn assert_logged(lines: &[String], level: &str, text: &str) {
    let line = lines
        .iter()
        .find(|l| l.contains(text))
        .unwrap_or_else(|| panic!("no line containing {text:?} in {lines:#?}"));
    assert!(
        line.trim_start().starts_with(level),
        "expected {level} for {text:?}, got {line:?}"
    );
}

#[test]
fn phased_trigger_logs_info() {
    let lines = invoke_logged(payment(2 * PRICE).with_phased(true), "GOOD_A");
    assert_logged(&lines, "INFO", "Phased trigger, refunding on trigger chain");
    assert_eq!(lines.len(), 1);
}

#[test]
fn missing_goods_logs_info() {
    let lines = invoke_logged(payment(2 * PRICE), "");
    assert_logged(&lines, "INFO", "No good sent, sending back payment");
    assert_eq!(lines.len(), 1);
}

#[test]
fn placeholder_goods_logs_like_missing() {
    let lines = invoke_logged(payment(2 * PRICE), "[String]");
    assert_logged(&lines, "INFO", "No good sent, sending back payment");
}

#[test]
fn unknown_good_logs_warn() {
    let lines = invoke_logged(payment(2 * PRICE), "GOOD_X");
    assert_logged(&lines, "WARN", "WARNING: Could not get good, sending back payment");
    assert_eq!(lines.len(), 1);
}

#[test]
fn underpayment_logs_warn() {
    let lines = invoke_logged(payment(PRICE + 499_999_999), "GOOD_A");
    assert_logged(&lines, "WARN", "WARNING: Not enough sent, sending back payment");
    assert_eq!(lines.len(), 1);
}

#[test]
fn purchase_logs_price_and_amount() {
    let lines = invoke_logged(payment(PRICE + 500_000_000), "GOOD_A");
    assert_logged(&lines, "INFO", "INFO: price: 1000000000 |  amount: 1500000000");
    assert!(lines.iter().all(|l| !l.contains("sending back payment")));
}
