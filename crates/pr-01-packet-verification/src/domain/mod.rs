//! # Domain Layer
//!
//! Pure verification logic: typed-data hashing, signer recovery, the trust
//! registry and the administrator gate. No I/O.

pub mod access_control;
pub mod ecdsa;
pub mod eip712;
pub mod entities;
pub mod errors;
pub mod invariants;
pub mod signer;
pub mod trust_registry;
pub mod verifier;

pub use access_control::AccessControl;
pub use eip712::DomainSeparator;
pub use entities::*;
pub use errors::*;
pub use invariants::*;
pub use signer::PacketSigner;
pub use trust_registry::TrustRegistry;
