//! # Adapters Layer
//!
//! In-process stand-ins for deployed claim managers.

mod directory;
mod managers;

pub use directory::InMemoryManagerDirectory;
pub use managers::{GatedManager, SingleUseReward};
