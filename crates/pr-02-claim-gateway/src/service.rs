//! # Claim Gateway Service
//!
//! Public entry point for reward claims. A claim runs, in order:
//!
//! 1. packet verification for `request_id` (opaque `InvalidPacket` on failure)
//! 2. receiver binding (`packet.receiver == caller`)
//! 3. manager authorization (`request_id` doubles as the manager address)
//! 4. the manager's hook, called with the gateway as caller
//! 5. `Claimed { receiver, manager }`
//!
//! Steps 1-3 read only; the hook is the single mutation, and the event is
//! recorded only after it succeeds.

use pr_01_packet_verification::domain::check_receiver_invariant;
use pr_01_packet_verification::{
    ExecutionEnvironment, Packet, PacketVerificationApi, PacketVerificationService,
    VerifierAdminApi,
};
use relay_telemetry::{log_admin_event, metric_inc, ADMIN_ACTIONS, CLAIMS};
use shared_types::Address;
use tracing::{info, instrument, warn};

use crate::config::GatewayConfig;
use crate::domain::errors::ClaimError;
use crate::domain::manager_registry::ManagerRegistry;
use crate::events::GatewayEvent;
use crate::ports::inbound::ClaimGatewayApi;
use crate::ports::outbound::{ClaimManager, ManagerDirectory};

/// Component name attached to log lines.
pub const COMPONENT: &str = "claim-gateway";

/// The claim gateway. Shares its administrator with the embedded verifier.
pub struct ClaimGatewayService<V, D>
where
    V: PacketVerificationApi + VerifierAdminApi,
    D: ManagerDirectory,
{
    verifier: V,
    directory: D,
    managers: ManagerRegistry,
    events: Vec<GatewayEvent>,
}

impl<E, D> ClaimGatewayService<PacketVerificationService<E>, D>
where
    E: ExecutionEnvironment,
    D: ManagerDirectory,
{
    /// Builds the verifier and gateway from configuration.
    ///
    /// The gateway's identity is the environment's `self_address`, which is
    /// also the verifier's `verifyingContract`.
    pub fn from_config(
        env: E,
        deployer: Address,
        directory: D,
        config: GatewayConfig,
    ) -> Result<Self, ClaimError> {
        let verifier = PacketVerificationService::new(env, deployer, config.verifier)?;

        let mut managers = ManagerRegistry::new();
        for manager in config.managers {
            managers.set(manager, true)?;
        }

        Ok(Self::with_registry(verifier, directory, managers))
    }
}

impl<V, D> ClaimGatewayService<V, D>
where
    V: PacketVerificationApi + VerifierAdminApi,
    D: ManagerDirectory,
{
    /// Wraps an existing verifier with no managers authorized.
    pub fn new(verifier: V, directory: D) -> Self {
        Self::with_registry(verifier, directory, ManagerRegistry::new())
    }

    fn with_registry(verifier: V, directory: D, managers: ManagerRegistry) -> Self {
        info!(
            component = COMPONENT,
            gateway = %verifier.verifying_contract(),
            admin = %verifier.admin(),
            managers = managers.managers().len(),
            "Claim gateway initialized"
        );
        Self {
            verifier,
            directory,
            managers,
            events: Vec::new(),
        }
    }

    /// Identity the gateway presents to managers.
    pub fn gateway_address(&self) -> Address {
        self.verifier.verifying_contract()
    }

    pub fn verifier(&self) -> &V {
        &self.verifier
    }

    pub fn directory(&self) -> &D {
        &self.directory
    }

    pub fn directory_mut(&mut self) -> &mut D {
        &mut self.directory
    }

    /// Currently authorized managers, sorted.
    pub fn managers(&self) -> Vec<Address> {
        self.managers.managers()
    }

    pub fn admin(&self) -> Address {
        self.verifier.admin()
    }

    /// Events emitted since the last [`take_events`](ClaimGatewayApi::take_events).
    pub fn events(&self) -> &[GatewayEvent] {
        &self.events
    }

    // === Administrator surface forwarded to the verifier ===

    pub fn set_trusted(
        &mut self,
        caller: Address,
        signer: Address,
        trusted: bool,
    ) -> Result<(), ClaimError> {
        self.verifier.set_trusted(caller, signer, trusted)?;
        self.collect_verifier_events();
        Ok(())
    }

    pub fn transfer_admin(
        &mut self,
        caller: Address,
        new_admin: Address,
    ) -> Result<(), ClaimError> {
        self.verifier.transfer_admin(caller, new_admin)?;
        self.collect_verifier_events();
        Ok(())
    }

    pub fn renounce_admin(&mut self, caller: Address) -> Result<(), ClaimError> {
        self.verifier.renounce_admin(caller)?;
        self.collect_verifier_events();
        Ok(())
    }

    fn collect_verifier_events(&mut self) {
        self.events
            .extend(self.verifier.take_events().into_iter().map(GatewayEvent::from));
    }

    fn reject(&self, outcome: &'static str, err: ClaimError) -> ClaimError {
        warn!(component = COMPONENT, outcome, error = %err, "Claim rejected");
        metric_inc!(CLAIMS, &[outcome]);
        err
    }
}

impl<V, D> ClaimGatewayApi for ClaimGatewayService<V, D>
where
    V: PacketVerificationApi + VerifierAdminApi,
    D: ManagerDirectory,
{
    #[instrument(skip(self, packet), fields(caller = %caller, request = %request_id))]
    fn claim(
        &mut self,
        caller: Address,
        request_id: Address,
        packet: &Packet,
    ) -> Result<(), ClaimError> {
        if self.verifier.require_valid_packet(&request_id, packet).is_err() {
            return Err(self.reject("invalid_packet", ClaimError::InvalidPacket));
        }

        if !check_receiver_invariant(&caller, packet) {
            let err = ClaimError::NotYourPacket {
                caller,
                receiver: packet.receiver,
            };
            return Err(self.reject("not_your_packet", err));
        }

        if !self.managers.is_manager(&request_id) {
            return Err(self.reject("invalid_manager", ClaimError::InvalidManager(request_id)));
        }

        let gateway = self.gateway_address();
        let outcome = match self.directory.manager_mut(&request_id) {
            Some(manager) => manager
                .claim(gateway, packet.receiver)
                .map_err(ClaimError::from),
            None => Err(ClaimError::ManagerNotDeployed(request_id)),
        };
        if let Err(err) = outcome {
            return Err(self.reject("manager_failed", err));
        }

        info!(
            component = COMPONENT,
            receiver = %packet.receiver,
            manager = %request_id,
            "Claim fulfilled"
        );
        metric_inc!(CLAIMS, &["fulfilled"]);
        self.events.push(GatewayEvent::Claimed {
            receiver: packet.receiver,
            manager: request_id,
        });
        Ok(())
    }

    #[instrument(skip(self), fields(caller = %caller, manager = %manager))]
    fn set_manager(
        &mut self,
        caller: Address,
        manager: Address,
        authorized: bool,
    ) -> Result<(), ClaimError> {
        if let Err(err) = self.verifier.only_admin(caller) {
            warn!(
                component = COMPONENT,
                caller = %caller,
                action = "set_manager",
                "Unauthorized administrator call"
            );
            metric_inc!(ADMIN_ACTIONS, &["denied"]);
            return Err(err.into());
        }

        let previous = self.managers.set(manager, authorized)?;

        log_admin_event!(
            COMPONENT,
            "Manager updated",
            caller,
            manager = %manager,
            authorized,
            previous
        );
        metric_inc!(ADMIN_ACTIONS, &["set_manager"]);
        self.events.push(GatewayEvent::ManagerSet {
            manager,
            authorized,
        });
        Ok(())
    }

    fn is_manager(&self, manager: &Address) -> bool {
        self.managers.is_manager(manager)
    }

    fn take_events(&mut self) -> Vec<GatewayEvent> {
        std::mem::take(&mut self.events)
    }
}
