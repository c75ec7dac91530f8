//! # Domain Layer
//!
//! Manager registry and claim errors. No I/O.

pub mod errors;
pub mod manager_registry;

pub use errors::*;
pub use manager_registry::ManagerRegistry;
