//! In-memory manager directory.

use std::collections::HashMap;

use shared_types::Address;
use tracing::debug;

use crate::ports::outbound::{ClaimManager, ManagerDirectory};

/// Maps manager addresses to in-process [`ClaimManager`]s.
///
/// Use `M = Box<dyn ClaimManager>` to mix manager types.
pub struct InMemoryManagerDirectory<M: ClaimManager = Box<dyn ClaimManager>> {
    managers: HashMap<Address, M>,
}

impl<M: ClaimManager> InMemoryManagerDirectory<M> {
    pub fn new() -> Self {
        Self {
            managers: HashMap::new(),
        }
    }

    /// Places `manager` at `address`, returning whatever was there before.
    pub fn deploy(&mut self, address: Address, manager: M) -> Option<M> {
        debug!(manager = %address, "Manager deployed");
        self.managers.insert(address, manager)
    }

    pub fn remove(&mut self, address: &Address) -> Option<M> {
        self.managers.remove(address)
    }

    /// Read access for inspecting manager state.
    pub fn get(&self, address: &Address) -> Option<&M> {
        self.managers.get(address)
    }

    pub fn len(&self) -> usize {
        self.managers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.managers.is_empty()
    }
}

impl<M: ClaimManager> Default for InMemoryManagerDirectory<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: ClaimManager> ManagerDirectory for InMemoryManagerDirectory<M> {
    fn manager_mut(&mut self, manager: &Address) -> Option<&mut dyn ClaimManager> {
        self.managers
            .get_mut(manager)
            .map(|m| m as &mut dyn ClaimManager)
    }
}
