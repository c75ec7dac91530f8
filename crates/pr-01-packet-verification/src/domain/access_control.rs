//! # Access Control
//!
//! Single-administrator gate. Renouncing sets the administrator to the zero
//! address, after which every gated call fails for every caller.

use shared_types::Address;

use super::errors::AccessError;

/// Holds the current administrator.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AccessControl {
    admin: Address,
}

impl AccessControl {
    /// Installs `admin` as the initial administrator.
    pub fn new(admin: Address) -> Result<Self, AccessError> {
        if admin.is_zero() {
            return Err(AccessError::ZeroAddress("admin"));
        }
        Ok(Self { admin })
    }

    /// Current administrator; zero once renounced.
    pub fn admin(&self) -> Address {
        self.admin
    }

    pub fn is_renounced(&self) -> bool {
        self.admin.is_zero()
    }

    /// Fails unless `caller` is the live administrator.
    pub fn only_admin(&self, caller: Address) -> Result<(), AccessError> {
        if self.is_renounced() || caller != self.admin {
            return Err(AccessError::NotAdmin { caller });
        }
        Ok(())
    }

    /// Hands the role to `new_admin`. Returns the previous administrator.
    pub fn transfer(&mut self, caller: Address, new_admin: Address) -> Result<Address, AccessError> {
        self.only_admin(caller)?;
        if new_admin.is_zero() {
            return Err(AccessError::ZeroAddress("new admin"));
        }
        Ok(std::mem::replace(&mut self.admin, new_admin))
    }

    /// Drops the role permanently. Returns the previous administrator.
    pub fn renounce(&mut self, caller: Address) -> Result<Address, AccessError> {
        self.only_admin(caller)?;
        Ok(std::mem::replace(&mut self.admin, Address::ZERO))
    }
}
