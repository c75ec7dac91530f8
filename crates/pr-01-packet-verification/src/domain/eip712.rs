//! # EIP-712 Typed Data
//!
//! Domain separation and struct hashing for `VerifyPacket` messages.
//!
//! ```text
//! domainSeparator = keccak256(DOMAIN_TYPEHASH || keccak256(name) || keccak256(version)
//!                             || chainId || verifyingContract)
//! structHash      = keccak256(PACKET_TYPEHASH || request || deadline || receiver)
//! digest          = keccak256(0x19 || 0x01 || domainSeparator || structHash)
//! ```
//!
//! Every field is ABI-encoded to a 32-byte word.

use shared_types::{u256_to_word, Hash, U256};

use super::ecdsa::keccak256;
use super::entities::{Eip712Domain, PacketContents};

/// `EIP712Domain` type string.
pub const DOMAIN_TYPE: &str =
    "EIP712Domain(string name,string version,uint256 chainId,address verifyingContract)";

/// `VerifyPacket` type string.
pub const PACKET_TYPE: &str = "VerifyPacket(address request,uint256 deadline,address receiver)";

/// keccak256 of [`DOMAIN_TYPE`].
pub fn domain_typehash() -> Hash {
    keccak256(DOMAIN_TYPE.as_bytes())
}

/// keccak256 of [`PACKET_TYPE`].
pub fn packet_typehash() -> Hash {
    keccak256(PACKET_TYPE.as_bytes())
}

/// Computes the domain separator for `domain`.
pub fn hash_domain(domain: &Eip712Domain) -> Hash {
    let mut encoded = Vec::with_capacity(5 * 32);
    encoded.extend_from_slice(&domain_typehash());
    encoded.extend_from_slice(&keccak256(domain.name.as_bytes()));
    encoded.extend_from_slice(&keccak256(domain.version.as_bytes()));
    encoded.extend_from_slice(&u256_to_word(domain.chain_id));
    encoded.extend_from_slice(&domain.verifying_contract.to_word());
    keccak256(&encoded)
}

/// Computes `hashStruct(VerifyPacket)`.
pub fn hash_packet(contents: &PacketContents) -> Hash {
    let mut encoded = Vec::with_capacity(4 * 32);
    encoded.extend_from_slice(&packet_typehash());
    encoded.extend_from_slice(&contents.request.to_word());
    encoded.extend_from_slice(&u256_to_word(contents.deadline));
    encoded.extend_from_slice(&contents.receiver.to_word());
    keccak256(&encoded)
}

/// Final signing digest: `keccak256(0x19 0x01 || separator || struct_hash)`.
pub fn typed_digest(separator: &Hash, struct_hash: &Hash) -> Hash {
    let mut encoded = [0u8; 66];
    encoded[0] = 0x19;
    encoded[1] = 0x01;
    encoded[2..34].copy_from_slice(separator);
    encoded[34..].copy_from_slice(struct_hash);
    keccak256(&encoded)
}

// =============================================================================
// CACHED SEPARATOR
// =============================================================================

/// Domain separator cached against the chain id seen at construction.
///
/// The cache is only served while the live chain id matches; after a fork the
/// separator is recomputed from the live id on every call, so signatures made
/// for the old chain stop verifying.
#[derive(Clone, Debug)]
pub struct DomainSeparator {
    domain: Eip712Domain,
    cached: Hash,
}

impl DomainSeparator {
    /// Captures `domain` (including its chain id) and computes the initial
    /// separator with `compute`.
    pub fn new(domain: Eip712Domain, compute: impl Fn(&Eip712Domain) -> Hash) -> Self {
        let cached = compute(&domain);
        Self { domain, cached }
    }

    /// Chain id captured at construction.
    pub fn cached_chain_id(&self) -> U256 {
        self.domain.chain_id
    }

    /// Domain fields as captured at construction.
    pub fn captured_domain(&self) -> &Eip712Domain {
        &self.domain
    }

    /// Separator valid for `live_chain_id`.
    pub fn separator(
        &self,
        live_chain_id: U256,
        compute: impl Fn(&Eip712Domain) -> Hash,
    ) -> Hash {
        if live_chain_id == self.domain.chain_id {
            self.cached
        } else {
            compute(&self.domain.with_chain_id(live_chain_id))
        }
    }
}
