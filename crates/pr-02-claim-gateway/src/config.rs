//! # Gateway Configuration

use std::env;

use pr_01_packet_verification::{ConfigError, VerifierConfig};
use serde::{Deserialize, Serialize};
use shared_types::Address;

/// Claim gateway configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GatewayConfig {
    /// Settings for the embedded packet verifier.
    pub verifier: VerifierConfig,

    /// Managers authorized from the start.
    pub managers: Vec<Address>,
}

impl GatewayConfig {
    /// Create a config for testing.
    pub fn for_testing() -> Self {
        Self {
            verifier: VerifierConfig::for_testing(),
            managers: Vec::new(),
        }
    }

    /// Create configuration from environment variables.
    ///
    /// Reads every `VerifierConfig` variable plus `PR_MANAGERS`
    /// (comma-separated manager addresses).
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) over an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let verifier = VerifierConfig::from_lookup(&lookup)?;

        let managers = match lookup("PR_MANAGERS") {
            Some(list) => list
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(|s| {
                    s.parse().map_err(|source| ConfigError::InvalidAddress {
                        var: "PR_MANAGERS",
                        source,
                    })
                })
                .collect::<Result<_, _>>()?,
            None => Vec::new(),
        };

        Ok(Self { verifier, managers })
    }
}
