//! # Error Types
//!
//! Defines error types used across crates.

use thiserror::Error;

/// Errors produced when parsing an `Address` from text.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AddressParseError {
    /// Wrong number of hex digits (expected 40, prefix excluded).
    #[error("Invalid address length: {0} hex digits, expected 40")]
    InvalidLength(usize),

    /// Non-hex characters in the input.
    #[error("Invalid address hex: {0}")]
    InvalidHex(#[from] hex::FromHexError),
}
