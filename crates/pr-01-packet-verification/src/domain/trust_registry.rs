//! # Trust Registry
//!
//! Signer address → trusted flag. Unknown signers are untrusted and the flag
//! has no history: whatever was written last wins.

use std::collections::HashMap;

use shared_types::Address;

/// Boolean trust map keyed by recovered signer address.
#[derive(Clone, Debug, Default)]
pub struct TrustRegistry {
    signers: HashMap<Address, bool>,
}

impl TrustRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrites the flag for `signer`, returning the previous value.
    ///
    /// The zero address is accepted like any other key; recovery never yields
    /// it as a signer, so trusting it has no effect on verification.
    pub fn set(&mut self, signer: Address, trusted: bool) -> bool {
        self.signers.insert(signer, trusted).unwrap_or(false)
    }

    pub fn is_trusted(&self, signer: &Address) -> bool {
        self.signers.get(signer).copied().unwrap_or(false)
    }

    /// Currently trusted signers, sorted.
    pub fn trusted_signers(&self) -> Vec<Address> {
        let mut signers: Vec<Address> = self
            .signers
            .iter()
            .filter(|(_, trusted)| **trusted)
            .map(|(signer, _)| *signer)
            .collect();
        signers.sort();
        signers
    }
}
