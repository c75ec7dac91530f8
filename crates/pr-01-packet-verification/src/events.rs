//! # Event Schema
//!
//! Events the verifier emits on successful administrator mutations. Failed
//! operations never emit.

use serde::{Deserialize, Serialize};
use shared_types::Address;

/// Verifier-side events.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum VerifierEvent {
    /// Administrator changed (transfer or renounce). `new` is zero after
    /// renounce.
    AdminChanged {
        /// Administrator before the change.
        previous: Address,
        /// Administrator after the change.
        new: Address,
    },
    /// A signer's trust flag was written.
    TrustedSignerSet {
        /// Signer whose flag changed.
        signer: Address,
        /// New flag value.
        trusted: bool,
    },
}

impl VerifierEvent {
    /// Stable event name, matching the metric `action` label.
    pub fn name(&self) -> &'static str {
        match self {
            Self::AdminChanged { .. } => "admin_changed",
            Self::TrustedSignerSet { .. } => "trusted_signer_set",
        }
    }
}
