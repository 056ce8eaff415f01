#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Parameter binding must never panic, and a bound placeholder must never
    // be offered as a good id.
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(params) = escrow_contract::ContractParams::from_json_str(s) {
            if let Some(goods) = params.goods_id() {
                assert!(!goods.is_empty());
                assert_ne!(goods, "[String]");
            }
        }
    }
});
