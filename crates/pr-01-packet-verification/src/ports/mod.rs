//! # Ports Layer
//!
//! - **Driving Ports (Inbound)**: `PacketVerificationApi`, `VerifierAdminApi`,
//!   `PacketVerifierHooks`
//! - **Driven Ports (Outbound)**: `ExecutionEnvironment`, `SignatureRecovery`

pub mod inbound;
pub mod outbound;

pub use inbound::*;
pub use outbound::*;
