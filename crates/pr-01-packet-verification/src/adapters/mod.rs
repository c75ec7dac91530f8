//! # Adapters Layer
//!
//! Implementations of the outbound ports.

mod environment;
mod recovery;

pub use environment::{FixedEnvironment, SystemEnvironment};
pub use recovery::K256Recovery;
