//! # Shared Types Crate
//!
//! Identity and digest primitives used by every Packet-Relay crate.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: `Address` and `Hash` are defined once here.
//! - **Explicit Null Identity**: `Address::ZERO` is the null identity; recovery
//!   failures and renounced ownership are both expressed with it.
//! - **Text Form**: addresses travel as `0x`-prefixed lower-case hex in configs,
//!   logs and JSON.

pub mod entities;
pub mod errors;

pub use entities::*;
pub use errors::*;
