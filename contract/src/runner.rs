//! Host-side invocation loop: gate, invoke, count.

use escrow_host::{EpochClock, GoodsCatalog};
use escrow_types::{AccountId, BlockHeight, TriggerTransaction};
use escrow_utils::StatsCounter;

use crate::{ContractParams, ContractResponse, EscrowContract, TransactionContext};

pub const STAT_SKIPPED: &str = "skipped";
pub const STAT_REFUNDED: &str = "refunded";
pub const STAT_PURCHASED: &str = "purchased";

/// Runs the contract on behalf of one account, the way the node's contract
/// runner does: triggers failing the filter are skipped without entering the
/// handler, the rest produce exactly one descriptor each.
pub struct ContractRunner {
    contract: EscrowContract,
    account: AccountId,
    stats: StatsCounter,
}

impl ContractRunner {
    pub fn new(contract: EscrowContract, account: AccountId) -> Self {
        Self {
            contract,
            account,
            stats: StatsCounter::new(&[STAT_SKIPPED, STAT_REFUNDED, STAT_PURCHASED]),
        }
    }

    pub fn stats(&self) -> &StatsCounter {
        &self.stats
    }

    /// Invoke the contract for one trigger. `None` means the trigger was not
    /// admitted.
    pub fn invoke(
        &self,
        trigger: &TriggerTransaction,
        params: ContractParams,
        block_height: BlockHeight,
        catalog: &dyn GoodsCatalog,
        clock: &dyn EpochClock,
    ) -> Option<ContractResponse> {
        let ctx = TransactionContext::new(trigger, self.account, block_height, catalog, clock)
            .with_params(params);

        if let Err(rejection) = self.contract.validate(&ctx) {
            tracing::debug!(sender = %trigger.sender, %rejection, "trigger skipped");
            self.stats.increment(STAT_SKIPPED);
            return None;
        }

        let response = self.contract.process_transaction(&ctx);
        if response.is_refund() {
            self.stats.increment(STAT_REFUNDED);
        } else {
            self.stats.increment(STAT_PURCHASED);
        }
        Some(response)
    }
}
