//! # Ports Layer
//!
//! - **Driving Ports (Inbound)**: `ClaimGatewayApi`
//! - **Driven Ports (Outbound)**: `ClaimManager`, `FulfillClaim`, `ManagerDirectory`

pub mod inbound;
pub mod outbound;

pub use inbound::*;
pub use outbound::*;
