//! # Manager Registry
//!
//! Manager address → authorized flag. The zero address is never a manager.

use std::collections::HashMap;

use pr_01_packet_verification::AccessError;
use shared_types::Address;

/// Boolean authorization map for claim managers.
#[derive(Clone, Debug, Default)]
pub struct ManagerRegistry {
    managers: HashMap<Address, bool>,
}

impl ManagerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrites the flag for `manager`, returning the previous value.
    pub fn set(&mut self, manager: Address, authorized: bool) -> Result<bool, AccessError> {
        if manager.is_zero() {
            return Err(AccessError::ZeroAddress("manager"));
        }
        Ok(self.managers.insert(manager, authorized).unwrap_or(false))
    }

    pub fn is_manager(&self, manager: &Address) -> bool {
        self.managers.get(manager).copied().unwrap_or(false)
    }

    /// Currently authorized managers, sorted.
    pub fn managers(&self) -> Vec<Address> {
        let mut managers: Vec<Address> = self
            .managers
            .iter()
            .filter_map(|(manager, authorized)| authorized.then_some(*manager))
            .collect();
        managers.sort();
        managers
    }
}
