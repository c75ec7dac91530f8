//! # Driving Ports (API - Inbound)

use pr_01_packet_verification::Packet;
use shared_types::Address;

use crate::domain::errors::ClaimError;
use crate::events::GatewayEvent;

/// Consumer and administrator surface of the gateway.
pub trait ClaimGatewayApi {
    /// Claims the reward of manager `request_id` for `caller`.
    ///
    /// Succeeds only if the packet verifies for `request_id`, names `caller`
    /// as receiver, `request_id` is an authorized manager, and the manager's
    /// hook succeeds.
    fn claim(
        &mut self,
        caller: Address,
        request_id: Address,
        packet: &Packet,
    ) -> Result<(), ClaimError>;

    /// Administrator-only. Authorizes or revokes a manager.
    fn set_manager(
        &mut self,
        caller: Address,
        manager: Address,
        authorized: bool,
    ) -> Result<(), ClaimError>;

    fn is_manager(&self, manager: &Address) -> bool;

    /// Drains buffered events, including the verifier's.
    fn take_events(&mut self) -> Vec<GatewayEvent>;
}
