//! # ECDSA Recovery (secp256k1)
//!
//! Signer recovery for packet signatures.
//!
//! ## Security Notes
//!
//! - **Scalar Range Validation**: R and S must be in [1, n-1]
//! - **Malleability (EIP-2)**: high-S signatures are rejected, so each
//!   signer/digest pair has exactly one accepted encoding
//! - Addresses are `keccak256(uncompressed_pubkey[1..])[12..]`

use k256::ecdsa::{RecoveryId, Signature, VerifyingKey};
use sha3::{Digest, Keccak256};
use shared_types::{Address, Hash};

use super::entities::PacketSignature;
use super::errors::RecoveryError;

// =============================================================================
// CORE RECOVERY
// =============================================================================

/// Recover the signer's address from a prehashed digest and signature.
pub fn recover_address(
    digest: &Hash,
    signature: &PacketSignature,
) -> Result<Address, RecoveryError> {
    let recovery_id = parse_recovery_id(signature.v)?;

    let mut sig_bytes = [0u8; 64];
    sig_bytes[..32].copy_from_slice(&signature.r);
    sig_bytes[32..].copy_from_slice(&signature.s);

    // from_slice rejects zero scalars and values >= n
    let sig = Signature::from_slice(&sig_bytes).map_err(|_| RecoveryError::InvalidFormat)?;

    if sig.normalize_s().is_some() {
        return Err(RecoveryError::MalleableSignature);
    }

    let recovered_key = VerifyingKey::recover_from_prehash(digest, &sig, recovery_id)
        .map_err(|_| RecoveryError::RecoveryFailed)?;

    Ok(address_from_pubkey(&recovered_key))
}

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Keccak256 hash function.
pub fn keccak256(data: &[u8]) -> Hash {
    let mut hasher = Keccak256::new();
    hasher.update(data);
    let result = hasher.finalize();
    let mut hash = [0u8; 32];
    hash.copy_from_slice(&result);
    hash
}

/// Derive Ethereum address from public key.
pub fn address_from_pubkey(public_key: &VerifyingKey) -> Address {
    let pubkey_bytes = public_key.to_encoded_point(false);

    // Skip the 0x04 SEC1 tag
    let hash = keccak256(&pubkey_bytes.as_bytes()[1..]);

    let mut address = [0u8; 20];
    address.copy_from_slice(&hash[12..]);
    Address::new(address)
}

/// Parse recovery ID from v value.
///
/// Valid v values: 27, 28, and the raw 0, 1.
fn parse_recovery_id(v: u8) -> Result<RecoveryId, RecoveryError> {
    let id = match v {
        0 | 27 => 0,
        1 | 28 => 1,
        _ => return Err(RecoveryError::InvalidRecoveryId(v)),
    };

    RecoveryId::try_from(id).map_err(|_| RecoveryError::InvalidRecoveryId(v))
}

// =============================================================================
// TEST HELPERS
// =============================================================================
