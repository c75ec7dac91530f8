//! # Packet Verification Service
//!
//! Wires the domain rules to the ports: the execution environment supplies
//! the clock and chain id, the recovery adapter supplies signers, the hooks
//! supply separator computation and trust updates.
//!
//! Mutations take `&mut self` and views take `&self`, so one operation always
//! completes before the next begins. Every mutation validates fully before it
//! touches state, so a failed call leaves no state change and no event.

use relay_telemetry::{log_admin_event, metric_inc, ADMIN_ACTIONS, PACKET_VERIFICATIONS};
use shared_types::{Address, Hash};
use tracing::{debug, info, instrument, warn};

use crate::adapters::K256Recovery;
use crate::config::VerifierConfig;
use crate::domain::access_control::AccessControl;
use crate::domain::eip712::DomainSeparator;
use crate::domain::entities::{Eip712Domain, Packet};
use crate::domain::errors::{AccessError, VerifierError};
use crate::domain::trust_registry::TrustRegistry;
use crate::domain::verifier::{self, check_packet};
use crate::events::VerifierEvent;
use crate::ports::inbound::{
    DefaultHooks, PacketVerificationApi, PacketVerifierHooks, VerifierAdminApi,
};
use crate::ports::outbound::{ExecutionEnvironment, SignatureRecovery};

/// Component name attached to log lines.
pub const COMPONENT: &str = "packet-verifier";

/// The packet verifier: separator, trust registry and administrator.
pub struct PacketVerificationService<E, R = K256Recovery, H = DefaultHooks>
where
    E: ExecutionEnvironment,
    R: SignatureRecovery,
    H: PacketVerifierHooks,
{
    env: E,
    recovery: R,
    hooks: H,
    separator: DomainSeparator,
    registry: TrustRegistry,
    access: AccessControl,
    events: Vec<VerifierEvent>,
}

impl<E: ExecutionEnvironment> PacketVerificationService<E> {
    /// Create a verifier with `k256` recovery and default hooks.
    ///
    /// `config.admin` takes precedence over `deployer`.
    pub fn new(env: E, deployer: Address, config: VerifierConfig) -> Result<Self, VerifierError> {
        Self::with_parts(env, K256Recovery, DefaultHooks, deployer, config)
    }
}

impl<E, R, H> PacketVerificationService<E, R, H>
where
    E: ExecutionEnvironment,
    R: SignatureRecovery,
    H: PacketVerifierHooks,
{
    /// Create a verifier with explicit recovery and hook implementations.
    pub fn with_parts(
        env: E,
        recovery: R,
        hooks: H,
        deployer: Address,
        config: VerifierConfig,
    ) -> Result<Self, VerifierError> {
        let access = AccessControl::new(config.admin.unwrap_or(deployer))?;

        let domain = Eip712Domain {
            name: config.name,
            version: config.version,
            chain_id: env.chain_id(),
            verifying_contract: env.self_address(),
        };
        let separator = DomainSeparator::new(domain, |d| hooks.compute_domain_separator(d));

        let mut registry = TrustRegistry::new();
        for signer in &config.trusted_signers {
            hooks.set_trusted(&mut registry, *signer, true);
        }

        info!(
            component = COMPONENT,
            admin = %access.admin(),
            verifying_contract = %separator.captured_domain().verifying_contract,
            chain_id = %separator.cached_chain_id(),
            trusted_signers = config.trusted_signers.len(),
            "Packet verifier initialized"
        );

        Ok(Self {
            env,
            recovery,
            hooks,
            separator,
            registry,
            access,
            events: Vec::new(),
        })
    }

    /// Events emitted since the last [`take_events`](VerifierAdminApi::take_events).
    pub fn events(&self) -> &[VerifierEvent] {
        &self.events
    }

    /// Currently trusted signers, sorted.
    pub fn trusted_signers(&self) -> Vec<Address> {
        self.registry.trusted_signers()
    }

    /// The execution environment this verifier reads.
    pub fn environment(&self) -> &E {
        &self.env
    }

    fn gate(&self, caller: Address, action: &'static str) -> Result<(), AccessError> {
        self.access.only_admin(caller).inspect_err(|_| {
            warn!(
                component = COMPONENT,
                caller = %caller,
                action,
                "Unauthorized administrator call"
            );
            metric_inc!(ADMIN_ACTIONS, &["denied"]);
        })
    }
}

impl<E, R, H> PacketVerificationApi for PacketVerificationService<E, R, H>
where
    E: ExecutionEnvironment,
    R: SignatureRecovery,
    H: PacketVerifierHooks,
{
    #[instrument(skip(self, packet), fields(request = %request_id))]
    fn verify(&self, request_id: &Address, packet: &Packet) -> bool {
        let result = check_packet(
            self.env.block_timestamp(),
            request_id,
            packet,
            || self.domain_separator(),
            |digest| self.recovery.recover(digest, &packet.signature),
            |signer| self.registry.is_trusted(signer),
        );

        match result {
            Ok(signer) => {
                debug!(signer = %signer, "Packet accepted");
                metric_inc!(PACKET_VERIFICATIONS, &["accepted"]);
                true
            }
            Err(rejection) => {
                debug!(stage = rejection.as_str(), "Packet rejected");
                metric_inc!(PACKET_VERIFICATIONS, &["rejected"]);
                false
            }
        }
    }

    fn domain_separator(&self) -> Hash {
        self.separator
            .separator(self.env.chain_id(), |d| self.hooks.compute_domain_separator(d))
    }

    fn domain(&self) -> Eip712Domain {
        self.separator
            .captured_domain()
            .with_chain_id(self.env.chain_id())
    }

    fn packet_digest(&self, packet: &Packet) -> Hash {
        verifier::packet_digest(&self.domain_separator(), packet)
    }

    fn is_trusted(&self, signer: &Address) -> bool {
        self.registry.is_trusted(signer)
    }

    fn verifying_contract(&self) -> Address {
        self.separator.captured_domain().verifying_contract
    }
}

impl<E, R, H> VerifierAdminApi for PacketVerificationService<E, R, H>
where
    E: ExecutionEnvironment,
    R: SignatureRecovery,
    H: PacketVerifierHooks,
{
    #[instrument(skip(self), fields(caller = %caller, signer = %signer))]
    fn set_trusted(
        &mut self,
        caller: Address,
        signer: Address,
        trusted: bool,
    ) -> Result<(), VerifierError> {
        self.gate(caller, "set_trusted")?;

        let previous = self.hooks.set_trusted(&mut self.registry, signer, trusted);

        log_admin_event!(
            COMPONENT,
            "Trusted signer updated",
            caller,
            signer = %signer,
            trusted,
            previous
        );
        metric_inc!(ADMIN_ACTIONS, &["set_trusted"]);
        self.events.push(VerifierEvent::TrustedSignerSet { signer, trusted });
        Ok(())
    }

    #[instrument(skip(self), fields(caller = %caller, new_admin = %new_admin))]
    fn transfer_admin(
        &mut self,
        caller: Address,
        new_admin: Address,
    ) -> Result<(), VerifierError> {
        self.gate(caller, "transfer_admin")?;

        let previous = self.access.transfer(caller, new_admin)?;

        log_admin_event!(
            COMPONENT,
            "Administrator transferred",
            caller,
            new_admin = %new_admin
        );
        metric_inc!(ADMIN_ACTIONS, &["transfer_admin"]);
        self.events.push(VerifierEvent::AdminChanged {
            previous,
            new: new_admin,
        });
        Ok(())
    }

    #[instrument(skip(self), fields(caller = %caller))]
    fn renounce_admin(&mut self, caller: Address) -> Result<(), VerifierError> {
        self.gate(caller, "renounce_admin")?;

        let previous = self.access.renounce(caller)?;

        log_admin_event!(COMPONENT, "Administrator renounced", caller);
        metric_inc!(ADMIN_ACTIONS, &["renounce_admin"]);
        self.events.push(VerifierEvent::AdminChanged {
            previous,
            new: Address::ZERO,
        });
        Ok(())
    }

    fn admin(&self) -> Address {
        self.access.admin()
    }

    fn only_admin(&self, caller: Address) -> Result<(), AccessError> {
        self.access.only_admin(caller)
    }

    fn take_events(&mut self) -> Vec<VerifierEvent> {
        std::mem::take(&mut self.events)
    }
}
