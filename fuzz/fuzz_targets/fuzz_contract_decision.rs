#![no_main]

use arbitrary::Arbitrary;
use escrow_contract::{ContractParams, Decision, EscrowContract, TransactionContext};
use escrow_nullables::{NullCatalog, NullClock};
use escrow_types::{AccountId, BlockHeight, ChainId, NqtAmount, TriggerTransaction};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Input {
    chain: u8,
    sender: u64,
    amount: u64,
    phased: bool,
    goods: String,
    listed_price: Option<u64>,
    buyer_msg: String,
    now: u32,
    height: u32,
}

fuzz_target!(|input: Input| {
    // Every admitted trigger yields exactly one descriptor, and refunds always
    // return the full amount to the sender.
    let chain = ChainId::new(u32::from(input.chain % 6));
    let catalog = match input.listed_price {
        Some(price) => NullCatalog::new().with_good(chain, &input.goods, NqtAmount::new(price)),
        None => NullCatalog::new(),
    };
    let clock = NullClock::new(input.now);
    let trigger = TriggerTransaction::payment(
        chain,
        AccountId::new(input.sender),
        AccountId::new(1),
        NqtAmount::new(input.amount),
    )
    .with_phased(input.phased);
    let ctx = TransactionContext::new(
        &trigger,
        AccountId::new(1),
        BlockHeight::new(input.height),
        &catalog,
        &clock,
    )
    .with_params(ContractParams::new(input.goods.clone(), input.buyer_msg));

    let response = EscrowContract::default().process_transaction(&ctx);
    match response.decision {
        Decision::Refund(_) => {
            let refund = response.transaction.as_send_money().expect("refund is sendMoney");
            assert_eq!(refund.recipient, trigger.sender);
            assert_eq!(refund.amount, trigger.amount);
        }
        Decision::Purchase => {
            let purchase = response.transaction.as_dgs_purchase().expect("purchase is dgsPurchase");
            assert!(!input.phased);
            assert_eq!(purchase.quantity, 1);
            assert!(purchase.phasing_params_json().is_ok());
        }
    }
});
