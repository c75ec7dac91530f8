//! # Claim Errors
//!
//! Every variant aborts the whole claim: no registry change, no manager
//! state change, no event.

use pr_01_packet_verification::{AccessError, PacketError, VerifierError};
use shared_types::Address;
use thiserror::Error;

/// Failures raised by a claim manager's hook.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ManagerError {
    /// The hook was called by someone other than the gateway.
    #[error("Unauthorized: {caller} is not the gateway")]
    NotGateway {
        /// The rejected caller.
        caller: Address,
    },

    /// The claimer already received this manager's reward.
    #[error("Reward already claimed by {claimer}")]
    AlreadyClaimed {
        /// The repeat claimer.
        claimer: Address,
    },

    /// Manager-specific fulfillment failure.
    #[error("Fulfillment failed: {0}")]
    Fulfillment(String),
}

/// Gateway errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ClaimError {
    /// The packet failed verification. The reason is not disclosed.
    #[error("Invalid packet")]
    InvalidPacket,

    /// The caller is not the packet's named receiver.
    #[error("Unauthorized: not your packet (caller {caller}, receiver {receiver})")]
    NotYourPacket {
        /// Who called.
        caller: Address,
        /// Who the packet names.
        receiver: Address,
    },

    /// The request id is not an authorized manager.
    #[error("Invalid manager: {0}")]
    InvalidManager(Address),

    /// The manager is authorized but nothing answers at its address.
    #[error("No manager deployed at {0}")]
    ManagerNotDeployed(Address),

    /// Administrator gate or argument check failed.
    #[error(transparent)]
    Access(#[from] AccessError),

    /// The manager's hook failed.
    #[error("Manager hook failed: {0}")]
    Manager(#[from] ManagerError),
}

impl From<PacketError> for ClaimError {
    fn from(_: PacketError) -> Self {
        Self::InvalidPacket
    }
}

impl From<VerifierError> for ClaimError {
    fn from(err: VerifierError) -> Self {
        match err {
            VerifierError::Access(e) => Self::Access(e),
            VerifierError::Packet(e) => e.into(),
        }
    }
}
