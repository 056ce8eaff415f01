//! Good lookup and price reconciliation.

use escrow_host::GoodsCatalog;
use escrow_types::{ChainId, NqtAmount};

/// Look up the good's price on `chain`.
///
/// A host error is indistinguishable from a good that does not exist: both
/// yield `None`. The lookup is never retried.
pub fn lookup_price(catalog: &dyn GoodsCatalog, chain: ChainId, goods: &str) -> Option<NqtAmount> {
    match catalog.get_good(chain, goods) {
        Ok(record) => record.price(),
        Err(e) => {
            tracing::debug!(chain = %chain, goods, error = %e, "DGS lookup failed");
            None
        }
    }
}

/// Amount the buyer must have sent: price plus fee buffer, or `None` on overflow.
pub fn required_amount(price: NqtAmount, fee_buffer: NqtAmount) -> Option<NqtAmount> {
    price.checked_add(fee_buffer)
}

/// `price + fee_buffer > amount`. Paying exactly the required amount is enough.
pub fn is_underpaid(price: NqtAmount, amount: NqtAmount, fee_buffer: NqtAmount) -> bool {
    match required_amount(price, fee_buffer) {
        Some(required) => required > amount,
        None => true,
    }
}
