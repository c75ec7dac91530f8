//! # Packet Verification Errors
//!
//! Error types for recovery, access control and packet enforcement.

use shared_types::Address;
use thiserror::Error;

/// Errors from secp256k1 public-key recovery.
///
/// Never surfaced through the verifier: a failed recovery is treated as the
/// null signer.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RecoveryError {
    /// The signature format is invalid (wrong length, scalar out of range)
    #[error("Invalid signature format")]
    InvalidFormat,

    /// Signature has high S value (EIP-2 malleability protection)
    #[error("Malleable signature (high S value)")]
    MalleableSignature,

    /// Invalid recovery ID (v must be 27 or 28, or 0 / 1)
    #[error("Invalid recovery ID: {0}")]
    InvalidRecoveryId(u8),

    /// No public key satisfies the signature
    #[error("Failed to recover public key")]
    RecoveryFailed,
}

/// Administrator gate failures.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AccessError {
    /// Caller is not the current administrator (or the role was renounced).
    #[error("Unauthorized: {caller} is not the administrator")]
    NotAdmin {
        /// The rejected caller.
        caller: Address,
    },

    /// The null identity was supplied where a concrete one is required.
    #[error("Invalid argument: {0} must not be the zero address")]
    ZeroAddress(&'static str),
}

/// Enforcement failure for a packet.
///
/// Deliberately carries no reason: callers learn only that the packet was
/// rejected.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum PacketError {
    /// The packet failed verification.
    #[error("Invalid packet")]
    InvalidPacket,
}

/// Top-level error for the verifier service.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum VerifierError {
    /// Administrator gate rejected the call.
    #[error(transparent)]
    Access(#[from] AccessError),

    /// Packet enforcement failed.
    #[error(transparent)]
    Packet(#[from] PacketError),
}
