//! # Claim Gateway (PR-02)
//!
//! Hands out rewards through registered claim managers, but only against a
//! valid packet that names the caller as receiver.
//!
//! ## Architecture
//!
//! - **Domain Layer** (`domain/`): manager registry, claim errors
//! - **Ports Layer** (`ports/`): `ClaimGatewayApi`; `ClaimManager`,
//!   `FulfillClaim` and `ManagerDirectory` for the manager side
//! - **Adapters** (`adapters/`): in-memory directory, gated reference manager
//! - **Service Layer** (`service.rs`): the claim flow
//!
//! ## Replay
//!
//! The gateway adds no nonce. The same packet passes verification until its
//! deadline; a manager that must pay once per receiver enforces that itself
//! (see [`SingleUseReward`]).

pub mod adapters;
pub mod config;
pub mod domain;
pub mod events;
pub mod ports;
pub mod service;

// Re-export public API
pub use adapters::{GatedManager, InMemoryManagerDirectory, SingleUseReward};
pub use config::GatewayConfig;
pub use domain::errors::{ClaimError, ManagerError};
pub use domain::manager_registry::ManagerRegistry;
pub use events::GatewayEvent;
pub use ports::inbound::ClaimGatewayApi;
pub use ports::outbound::{ClaimManager, FulfillClaim, ManagerDirectory};
pub use service::ClaimGatewayService;
