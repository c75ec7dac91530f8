//! # Packet Signer
//!
//! Producer-side counterpart of the verifier: signs `VerifyPacket` structs
//! under a domain separator.

use k256::ecdsa::{RecoveryId, SigningKey};
use shared_types::{Address, Hash, U256};

use super::ecdsa::address_from_pubkey;
use super::eip712::{hash_packet, typed_digest};
use super::entities::{Packet, PacketContents, PacketSignature};
use super::errors::RecoveryError;

/// A data provider's signing key.
pub struct PacketSigner {
    key: SigningKey,
    address: Address,
}

impl PacketSigner {
    /// Wraps an existing key.
    pub fn new(key: SigningKey) -> Self {
        let address = address_from_pubkey(key.verifying_key());
        Self { key, address }
    }

    /// Parses a 32-byte secret scalar.
    pub fn from_slice(secret: &[u8]) -> Result<Self, RecoveryError> {
        let key = SigningKey::from_slice(secret).map_err(|_| RecoveryError::InvalidFormat)?;
        Ok(Self::new(key))
    }

    /// Address the verifier will recover for this signer's packets.
    pub fn address(&self) -> Address {
        self.address
    }

    /// Signs a prehashed digest. Output is low-S with `v` in {27, 28}.
    pub fn sign_digest(&self, digest: &Hash) -> Result<PacketSignature, RecoveryError> {
        let (sig, recid) = self
            .key
            .sign_prehash_recoverable(digest)
            .map_err(|_| RecoveryError::InvalidFormat)?;

        // Flipping s negates R, so the y parity flips with it
        let (sig, recid) = match sig.normalize_s() {
            Some(low) => (low, RecoveryId::new(!recid.is_y_odd(), recid.is_x_reduced())),
            None => (sig, recid),
        };

        let bytes = sig.to_bytes();
        let mut r = [0u8; 32];
        let mut s = [0u8; 32];
        r.copy_from_slice(&bytes[..32]);
        s.copy_from_slice(&bytes[32..]);

        Ok(PacketSignature {
            v: recid.to_byte() + 27,
            r,
            s,
        })
    }

    /// Builds and signs a packet for `request` and `receiver`.
    pub fn sign_packet(
        &self,
        separator: &Hash,
        request: Address,
        deadline: U256,
        receiver: Address,
    ) -> Result<Packet, RecoveryError> {
        let contents = PacketContents {
            request,
            deadline,
            receiver,
        };
        let digest = typed_digest(separator, &hash_packet(&contents));
        Ok(contents.with_signature(self.sign_digest(&digest)?))
    }
}

impl std::fmt::Debug for PacketSigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PacketSigner")
            .field("address", &self.address)
            .finish_non_exhaustive()
    }
}
