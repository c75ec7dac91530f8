//! # Driving Ports (API - Inbound)
//!
//! The surfaces consumers and administrators call, plus the hook trait
//! deployments implement to customise separator computation and trust
//! updates.

use shared_types::{Address, Hash};

use crate::domain::eip712::hash_domain;
use crate::domain::entities::{Eip712Domain, Packet};
use crate::domain::errors::{AccessError, PacketError, VerifierError};
use crate::domain::trust_registry::TrustRegistry;
use crate::events::VerifierEvent;

// =============================================================================
// CONSUMER SURFACE
// =============================================================================

/// Read-only packet verification.
pub trait PacketVerificationApi {
    /// `true` iff the packet is live, scoped to `request_id`, and signed by a
    /// trusted signer. Never says which check failed.
    fn verify(&self, request_id: &Address, packet: &Packet) -> bool;

    /// Enforcing form of [`verify`](Self::verify).
    fn require_valid_packet(
        &self,
        request_id: &Address,
        packet: &Packet,
    ) -> Result<(), PacketError> {
        if self.verify(request_id, packet) {
            Ok(())
        } else {
            Err(PacketError::InvalidPacket)
        }
    }

    /// Separator for the live chain id.
    fn domain_separator(&self) -> Hash;

    /// EIP-712 domain fields with the live chain id.
    fn domain(&self) -> Eip712Domain;

    /// Digest a producer must sign for `packet` on the live chain.
    fn packet_digest(&self, packet: &Packet) -> Hash;

    fn is_trusted(&self, signer: &Address) -> bool;

    /// Address this verifier signs under.
    fn verifying_contract(&self) -> Address;
}

// =============================================================================
// ADMINISTRATOR SURFACE
// =============================================================================

/// Administrator-gated mutations. Every call names its caller explicitly.
pub trait VerifierAdminApi {
    fn set_trusted(
        &mut self,
        caller: Address,
        signer: Address,
        trusted: bool,
    ) -> Result<(), VerifierError>;

    fn transfer_admin(&mut self, caller: Address, new_admin: Address) -> Result<(), VerifierError>;

    /// Irrevocably clears the administrator.
    fn renounce_admin(&mut self, caller: Address) -> Result<(), VerifierError>;

    /// Current administrator; zero once renounced.
    fn admin(&self) -> Address;

    /// Gate check for components that share this administrator.
    fn only_admin(&self, caller: Address) -> Result<(), AccessError>;

    /// Drains buffered events.
    fn take_events(&mut self) -> Vec<VerifierEvent>;
}

// =============================================================================
// OVERRIDABLE HOOKS
// =============================================================================

/// Extension points for a concrete deployment.
///
/// Both methods have defaults; implementors override only what they need.
pub trait PacketVerifierHooks: Send + Sync {
    /// Computes the separator for `domain`.
    fn compute_domain_separator(&self, domain: &Eip712Domain) -> Hash {
        hash_domain(domain)
    }

    /// Applies an already-authorized trust update. Returns the previous flag.
    fn set_trusted(&self, registry: &mut TrustRegistry, signer: Address, trusted: bool) -> bool {
        registry.set(signer, trusted)
    }
}

/// Hooks with every default left in place.
#[derive(Clone, Copy, Debug, Default)]
pub struct DefaultHooks;

impl PacketVerifierHooks for DefaultHooks {}
