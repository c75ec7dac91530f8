//! # Packet Verification (PR-01)
//!
//! Verifies signed off-chain packets at the point of use.
//!
//! ## Architecture
//!
//! This crate follows hexagonal architecture:
//! - **Domain Layer** (`domain/`): EIP-712 hashing, signer recovery, trust
//!   registry, administrator gate
//! - **Ports Layer** (`ports/`): consumer/admin APIs, hooks, environment and
//!   recovery SPIs
//! - **Adapters** (`adapters/`): `k256` recovery, fixed and wall-clock
//!   environments
//! - **Service Layer** (`service.rs`): wires domain logic to ports
//!
//! ## Verification
//!
//! A packet verifies for `request_id` iff all of these hold:
//!
//! ```text
//! now <= packet.deadline
//! request_id == packet.request
//! signer = ecrecover(keccak256(0x1901 || separator || hashStruct(packet)), sig)
//! signer != 0 && trusted[signer]
//! ```
//!
//! ## Security Notes
//!
//! - **Opaque verdicts**: callers get `bool` / `InvalidPacket`, never the
//!   failing check
//! - **No nonce**: a packet stays valid for its request until the deadline;
//!   per-use replay protection belongs to the consumer
//! - **Fork safety**: the separator follows the live chain id

pub mod adapters;
pub mod config;
pub mod domain;
pub mod events;
pub mod ports;
pub mod service;

// Re-export public API
pub use adapters::{FixedEnvironment, K256Recovery, SystemEnvironment};
pub use config::{ConfigError, VerifierConfig, DEFAULT_DOMAIN_NAME, DEFAULT_DOMAIN_VERSION};
pub use domain::ecdsa::{address_from_pubkey, keccak256, recover_address};
pub use domain::eip712::{hash_domain, hash_packet, typed_digest, DOMAIN_TYPE, PACKET_TYPE};
pub use domain::entities::{Eip712Domain, Packet, PacketContents, PacketSignature};
pub use domain::errors::{AccessError, PacketError, RecoveryError, VerifierError};
pub use domain::signer::PacketSigner;
pub use domain::verifier::packet_digest;
pub use events::VerifierEvent;
pub use ports::inbound::{
    DefaultHooks, PacketVerificationApi, PacketVerifierHooks, VerifierAdminApi,
};
pub use ports::outbound::{ExecutionEnvironment, SignatureRecovery};
pub use service::PacketVerificationService;
