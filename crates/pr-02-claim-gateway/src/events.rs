//! # Event Schema
//!
//! Gateway events. Verifier events raised through the gateway's
//! administrator surface are carried in [`GatewayEvent::Verifier`].

use pr_01_packet_verification::VerifierEvent;
use serde::{Deserialize, Serialize};
use shared_types::Address;

/// Gateway-side events.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GatewayEvent {
    /// Forwarded from the verifier (admin changes, trust updates).
    Verifier(VerifierEvent),
    /// A manager's authorization flag was written.
    ManagerSet {
        /// Manager address.
        manager: Address,
        /// New flag value.
        authorized: bool,
    },
    /// A claim went through end to end.
    Claimed {
        /// Packet receiver (the caller).
        receiver: Address,
        /// Manager that fulfilled the claim.
        manager: Address,
    },
}

impl From<VerifierEvent> for GatewayEvent {
    fn from(event: VerifierEvent) -> Self {
        Self::Verifier(event)
    }
}
