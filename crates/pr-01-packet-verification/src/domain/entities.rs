//! # Domain Entities
//!
//! Core data structures for packet verification.

use serde::{Deserialize, Serialize};
use shared_types::{Address, U256};

use super::errors::RecoveryError;

// =============================================================================
// SIGNATURE
// =============================================================================

/// Recoverable ECDSA signature on the secp256k1 curve.
///
/// The signer is never carried alongside the signature; it is recovered from
/// the typed-data digest.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PacketSignature {
    /// Recovery ID (27 or 28; 0 and 1 are accepted and normalised)
    pub v: u8,
    /// R component (32 bytes)
    pub r: [u8; 32],
    /// S component (32 bytes)
    pub s: [u8; 32],
}

impl PacketSignature {
    /// Length of the packed `r || s || v` form.
    pub const PACKED_LEN: usize = 65;

    /// Packs the signature as `r || s || v`, the layout wallets produce.
    #[must_use]
    pub fn to_bytes(&self) -> [u8; 65] {
        let mut out = [0u8; 65];
        out[..32].copy_from_slice(&self.r);
        out[32..64].copy_from_slice(&self.s);
        out[64] = self.v;
        out
    }

    /// Parses a packed `r || s || v` signature.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, RecoveryError> {
        if bytes.len() != Self::PACKED_LEN {
            return Err(RecoveryError::InvalidFormat);
        }
        let mut r = [0u8; 32];
        let mut s = [0u8; 32];
        r.copy_from_slice(&bytes[..32]);
        s.copy_from_slice(&bytes[32..64]);
        Ok(Self { v: bytes[64], r, s })
    }
}

// =============================================================================
// PACKET
// =============================================================================

/// A signed assertion produced off-chain by a data provider.
///
/// `request`, `deadline` and `receiver` are all covered by the signature;
/// a packet is only meaningful together with the request id supplied by the
/// verifying call site.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Packet {
    /// Signature over the typed-data digest.
    pub signature: PacketSignature,
    /// Call site this packet authorizes.
    pub request: Address,
    /// Last second (inclusive) at which the packet is accepted.
    pub deadline: U256,
    /// Identity entitled to act on the packet.
    pub receiver: Address,
}

/// The unsigned `VerifyPacket` struct that producers sign.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PacketContents {
    /// Call site this packet authorizes.
    pub request: Address,
    /// Last second (inclusive) at which the packet is accepted.
    pub deadline: U256,
    /// Identity entitled to act on the packet.
    pub receiver: Address,
}

impl Packet {
    /// The signed fields, without the signature.
    #[must_use]
    pub fn contents(&self) -> PacketContents {
        PacketContents {
            request: self.request,
            deadline: self.deadline,
            receiver: self.receiver,
        }
    }
}

impl PacketContents {
    /// Attaches a signature to the contents.
    #[must_use]
    pub fn with_signature(self, signature: PacketSignature) -> Packet {
        Packet {
            signature,
            request: self.request,
            deadline: self.deadline,
            receiver: self.receiver,
        }
    }
}

// =============================================================================
// EIP-712 DOMAIN
// =============================================================================

/// The `EIP712Domain` fields a verifier instance signs under.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Eip712Domain {
    /// Protocol name.
    pub name: String,
    /// Protocol version.
    pub version: String,
    /// EIP-155 chain id of the execution network.
    pub chain_id: U256,
    /// Address of the verifying instance.
    pub verifying_contract: Address,
}

impl Eip712Domain {
    /// Same domain on a different network.
    #[must_use]
    pub fn with_chain_id(&self, chain_id: U256) -> Self {
        Self {
            chain_id,
            ..self.clone()
        }
    }
}
