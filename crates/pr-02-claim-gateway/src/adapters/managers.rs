//! Reference claim managers.

use std::collections::HashSet;

use shared_types::Address;
use tracing::warn;

use crate::domain::errors::ManagerError;
use crate::ports::outbound::{ClaimManager, FulfillClaim};

/// A manager that only answers its gateway and delegates the reward to `F`.
#[derive(Clone, Debug)]
pub struct GatedManager<F: FulfillClaim> {
    gateway: Address,
    fulfillment: F,
}

impl<F: FulfillClaim> GatedManager<F> {
    pub fn new(gateway: Address, fulfillment: F) -> Self {
        Self {
            gateway,
            fulfillment,
        }
    }

    /// The only caller this manager accepts.
    pub fn gateway(&self) -> Address {
        self.gateway
    }

    pub fn fulfillment(&self) -> &F {
        &self.fulfillment
    }
}

impl<F: FulfillClaim> ClaimManager for GatedManager<F> {
    fn claim(&mut self, caller: Address, claimer: Address) -> Result<(), ManagerError> {
        if caller != self.gateway {
            warn!(
                caller = %caller,
                gateway = %self.gateway,
                "Manager hook called by non-gateway"
            );
            return Err(ManagerError::NotGateway { caller });
        }
        self.fulfillment.fulfill(claimer)
    }
}

/// One reward per claimer. Repeat claims fail, which is where per-use replay
/// protection lives.
#[derive(Clone, Debug, Default)]
pub struct SingleUseReward {
    claimed: HashSet<Address>,
    order: Vec<Address>,
}

impl SingleUseReward {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_claimed(&self, claimer: &Address) -> bool {
        self.claimed.contains(claimer)
    }

    /// Claimers in the order they were paid.
    pub fn claimers(&self) -> &[Address] {
        &self.order
    }
}

impl FulfillClaim for SingleUseReward {
    fn fulfill(&mut self, claimer: Address) -> Result<(), ManagerError> {
        if !self.claimed.insert(claimer) {
            return Err(ManagerError::AlreadyClaimed { claimer });
        }
        self.order.push(claimer);
        Ok(())
    }
}
