#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Host responses and trigger views arrive as JSON. Parsing must never panic
    // on malformed input.
    let _ = serde_json::from_slice::<escrow_host::GoodRecord>(data);
    let _ = serde_json::from_slice::<escrow_types::TriggerTransaction>(data);
    let _ = serde_json::from_slice::<escrow_types::AccountId>(data);
});
