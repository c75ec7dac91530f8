//! # Verifier Configuration
//!
//! Domain name/version, the initial administrator, and the signers trusted at
//! construction.

use std::env;

use serde::{Deserialize, Serialize};
use shared_types::{Address, AddressParseError};
use thiserror::Error;

/// Default EIP-712 domain name.
pub const DEFAULT_DOMAIN_NAME: &str = "PacketVerifier";

/// Default EIP-712 domain version.
pub const DEFAULT_DOMAIN_VERSION: &str = "1";

/// Packet verifier configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VerifierConfig {
    /// EIP-712 domain name.
    pub name: String,

    /// EIP-712 domain version.
    pub version: String,

    /// Initial administrator. When unset, the deploying identity is used.
    pub admin: Option<Address>,

    /// Signers trusted from the start.
    pub trusted_signers: Vec<Address>,
}

/// Configuration loading failures.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    /// An address-valued variable did not parse.
    #[error("Invalid address in {var}: {source}")]
    InvalidAddress {
        /// Variable that held the bad value.
        var: &'static str,
        /// Parse failure.
        #[source]
        source: AddressParseError,
    },

    /// A required string was empty.
    #[error("{0} must not be empty")]
    Empty(&'static str),
}

impl Default for VerifierConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_DOMAIN_NAME.to_string(),
            version: DEFAULT_DOMAIN_VERSION.to_string(),
            admin: None,
            trusted_signers: Vec::new(),
        }
    }
}

impl VerifierConfig {
    /// Create a config for testing: fixed admin, no trusted signers.
    pub fn for_testing() -> Self {
        Self {
            name: "PacketVerifierTest".to_string(),
            admin: Some(Address::repeat_byte(0xad)),
            ..Self::default()
        }
    }

    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `PR_DOMAIN_NAME`: Domain name (default: PacketVerifier)
    /// - `PR_DOMAIN_VERSION`: Domain version (default: 1)
    /// - `PR_ADMIN`: Initial administrator address
    /// - `PR_TRUSTED_SIGNERS`: Comma-separated signer addresses
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) over an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(name) = lookup("PR_DOMAIN_NAME") {
            config.name = name;
        }
        if let Some(version) = lookup("PR_DOMAIN_VERSION") {
            config.version = version;
        }
        if let Some(admin) = lookup("PR_ADMIN") {
            config.admin = Some(parse_address("PR_ADMIN", &admin)?);
        }
        if let Some(signers) = lookup("PR_TRUSTED_SIGNERS") {
            config.trusted_signers = signers
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(|s| parse_address("PR_TRUSTED_SIGNERS", s))
                .collect::<Result<_, _>>()?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Rejects empty domain fields.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.name.is_empty() {
            return Err(ConfigError::Empty("domain name"));
        }
        if self.version.is_empty() {
            return Err(ConfigError::Empty("domain version"));
        }
        Ok(())
    }
}

fn parse_address(var: &'static str, value: &str) -> Result<Address, ConfigError> {
    value
        .parse()
        .map_err(|source| ConfigError::InvalidAddress { var, source })
}
