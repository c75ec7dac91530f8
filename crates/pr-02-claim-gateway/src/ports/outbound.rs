//! # Driven Ports (SPI - Outbound)
//!
//! Claim managers are external collaborators. The gateway only ever calls
//! their single hook.

use shared_types::Address;

use crate::domain::errors::ManagerError;

/// A claim manager's fulfillment hook.
///
/// Implementations must reject any `caller` other than the gateway they were
/// deployed for, and must leave no state behind when they return an error.
pub trait ClaimManager: Send {
    fn claim(&mut self, caller: Address, claimer: Address) -> Result<(), ManagerError>;
}

impl<T: ClaimManager + ?Sized> ClaimManager for Box<T> {
    fn claim(&mut self, caller: Address, claimer: Address) -> Result<(), ManagerError> {
        (**self).claim(caller, claimer)
    }
}

/// Reward logic behind a gated manager. Called only after the caller check.
pub trait FulfillClaim: Send {
    fn fulfill(&mut self, claimer: Address) -> Result<(), ManagerError>;
}

/// Resolves a manager address to the code deployed there.
pub trait ManagerDirectory {
    fn manager_mut(&mut self, manager: &Address) -> Option<&mut dyn ClaimManager>;
}
