//! # Packet-Relay Test Suite
//!
//! Cross-crate scenarios that no single crate can run on its own.
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! └── integration/
//!     ├── verification_flow.rs  # signer → verifier properties
//!     ├── claim_flow.rs         # signer → verifier → gateway → manager
//!     └── telemetry.rs          # subscriber and metrics wiring
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p pr-tests
//! cargo bench -p pr-tests
//! ```

pub mod integration;
