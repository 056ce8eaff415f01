//! Everything the host hands the handler for one invocation.

use escrow_host::{EpochClock, GoodsCatalog};
use escrow_types::{AccountId, BlockHeight, TriggerTransaction};

use crate::ContractParams;

/// Invocation frame: the trigger, chain state, and the host services.
///
/// Owned by a single invocation; nothing in it outlives the call.
pub struct TransactionContext<'a> {
    pub trigger: &'a TriggerTransaction,
    /// Account operating the contract.
    pub runner: AccountId,
    pub block_height: BlockHeight,
    pub params: ContractParams,
    pub catalog: &'a dyn GoodsCatalog,
    pub clock: &'a dyn EpochClock,
}

impl<'a> TransactionContext<'a> {
    pub fn new(
        trigger: &'a TriggerTransaction,
        runner: AccountId,
        block_height: BlockHeight,
        catalog: &'a dyn GoodsCatalog,
        clock: &'a dyn EpochClock,
    ) -> Self {
        Self {
            trigger,
            runner,
            block_height,
            params: ContractParams::default(),
            catalog,
            clock,
        }
    }

    pub fn with_params(mut self, params: ContractParams) -> Self {
        self.params = params;
        self
    }

    /// Buyer of the good: the trigger's sender.
    pub fn sender(&self) -> AccountId {
        self.trigger.sender
    }
}
