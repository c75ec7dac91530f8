//! # Packet Verification Rules
//!
//! Short-circuiting evaluation of a packet against a request id:
//!
//! 1. deadline not passed
//! 2. `request_id == packet.request`
//! 3. signer recovered from the typed digest
//! 4. signer is trusted
//!
//! The stage that failed is kept crate-private. Public callers only ever see
//! a boolean verdict or [`PacketError::InvalidPacket`](super::errors::PacketError).

use shared_types::{Address, Hash, Timestamp};

use super::eip712::{hash_packet, typed_digest};
use super::entities::Packet;
use super::invariants::{
    check_deadline_invariant, check_request_binding_invariant, check_signer_present_invariant,
};

/// Which check rejected a packet. Used for operator-side logging only.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Rejection {
    Expired,
    RequestMismatch,
    UnrecoverableSigner,
    UntrustedSigner,
}

impl Rejection {
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            Self::Expired => "expired",
            Self::RequestMismatch => "request_mismatch",
            Self::UnrecoverableSigner => "unrecoverable_signer",
            Self::UntrustedSigner => "untrusted_signer",
        }
    }
}

/// Digest a producer must sign for `packet` under `separator`.
pub fn packet_digest(separator: &Hash, packet: &Packet) -> Hash {
    typed_digest(separator, &hash_packet(&packet.contents()))
}

/// Runs every check in order, returning the trusted signer on success.
///
/// `separator` is only invoked once the cheap checks have passed.
pub(crate) fn check_packet(
    now: Timestamp,
    request_id: &Address,
    packet: &Packet,
    separator: impl FnOnce() -> Hash,
    recover: impl FnOnce(&Hash) -> Option<Address>,
    is_trusted: impl FnOnce(&Address) -> bool,
) -> Result<Address, Rejection> {
    if !check_deadline_invariant(now, packet.deadline) {
        return Err(Rejection::Expired);
    }
    if !check_request_binding_invariant(request_id, packet) {
        return Err(Rejection::RequestMismatch);
    }

    let digest = packet_digest(&separator(), packet);
    let signer = recover(&digest).unwrap_or(Address::ZERO);
    if !check_signer_present_invariant(&signer) {
        return Err(Rejection::UnrecoverableSigner);
    }
    if !is_trusted(&signer) {
        return Err(Rejection::UntrustedSigner);
    }
    Ok(signer)
}
