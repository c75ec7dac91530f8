//! # Driven Ports (SPI - Outbound)
//!
//! What the verifier needs from the outside world:
//! - the execution environment (chain id, own address, clock)
//! - secp256k1 signer recovery

use std::sync::Arc;

use shared_types::{Address, Hash, Timestamp, U256};

use crate::domain::entities::PacketSignature;

// =============================================================================
// EXECUTION ENVIRONMENT
// =============================================================================

/// Facts supplied by the host the verifier runs in.
pub trait ExecutionEnvironment: Send + Sync {
    /// Live EIP-155 chain id. May change after a fork.
    fn chain_id(&self) -> U256;

    /// Address of this verifier instance (the EIP-712 `verifyingContract`).
    fn self_address(&self) -> Address;

    /// Current block timestamp in seconds.
    fn block_timestamp(&self) -> Timestamp;
}

impl<T: ExecutionEnvironment + ?Sized> ExecutionEnvironment for Arc<T> {
    fn chain_id(&self) -> U256 {
        (**self).chain_id()
    }

    fn self_address(&self) -> Address {
        (**self).self_address()
    }

    fn block_timestamp(&self) -> Timestamp {
        (**self).block_timestamp()
    }
}

// =============================================================================
// SIGNATURE RECOVERY
// =============================================================================

/// Interface for ECDSA signer recovery (the `ecrecover` contract).
pub trait SignatureRecovery: Send + Sync {
    /// Recover signer address from a prehashed digest.
    ///
    /// # Returns
    ///
    /// * `Some(Address)` - Recovered signer address
    /// * `None` - If the signature is malformed or unrecoverable
    fn recover(&self, digest: &Hash, signature: &PacketSignature) -> Option<Address>;
}
