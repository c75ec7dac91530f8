//! # Domain Invariants
//!
//! The individual checks a packet must pass. Each returns `true` when the
//! packet satisfies the rule.

use shared_types::{Address, Timestamp, U256};

use super::entities::Packet;

/// The deadline is inclusive: a packet is still live at `now == deadline`.
#[must_use]
pub fn check_deadline_invariant(now: Timestamp, deadline: U256) -> bool {
    U256::from(now) <= deadline
}

/// A packet only authorizes the request it names.
#[must_use]
pub fn check_request_binding_invariant(request_id: &Address, packet: &Packet) -> bool {
    *request_id == packet.request
}

/// Failed recovery maps to the zero address, which never counts as a signer.
#[must_use]
pub fn check_signer_present_invariant(recovered: &Address) -> bool {
    !recovered.is_zero()
}

/// Receiver binding for consumers that act on behalf of `caller`.
#[must_use]
pub fn check_receiver_invariant(caller: &Address, packet: &Packet) -> bool {
    *caller == packet.receiver
}
