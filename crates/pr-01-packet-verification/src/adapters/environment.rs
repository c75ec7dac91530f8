//! Execution environment adapters.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use parking_lot::RwLock;
use shared_types::{Address, Timestamp, U256};

use crate::ports::outbound::ExecutionEnvironment;

/// Deterministic environment for tests and simulations.
///
/// Clock and chain id are adjustable through `&self` so the environment can be
/// shared (via `Arc`) with the service under test.
#[derive(Debug)]
pub struct FixedEnvironment {
    chain_id: RwLock<U256>,
    self_address: Address,
    now: AtomicU64,
}

impl FixedEnvironment {
    /// Create an environment at a fixed start time.
    pub fn new(chain_id: u64, self_address: Address) -> Self {
        Self {
            chain_id: RwLock::new(U256::from(chain_id)),
            self_address,
            now: AtomicU64::new(1_700_000_000),
        }
    }

    /// Set current time for testing.
    pub fn set_time(&self, time: Timestamp) {
        self.now.store(time, Ordering::SeqCst);
    }

    /// Advance time for testing.
    pub fn advance_time(&self, secs: u64) {
        self.now.fetch_add(secs, Ordering::SeqCst);
    }

    /// Simulate a chain fork.
    pub fn set_chain_id(&self, chain_id: u64) {
        *self.chain_id.write() = U256::from(chain_id);
    }
}

impl ExecutionEnvironment for FixedEnvironment {
    fn chain_id(&self) -> U256 {
        *self.chain_id.read()
    }

    fn self_address(&self) -> Address {
        self.self_address
    }

    fn block_timestamp(&self) -> Timestamp {
        self.now.load(Ordering::SeqCst)
    }
}

/// Wall-clock environment with a fixed chain id.
#[derive(Clone, Debug)]
pub struct SystemEnvironment {
    chain_id: U256,
    self_address: Address,
}

impl SystemEnvironment {
    pub fn new(chain_id: u64, self_address: Address) -> Self {
        Self {
            chain_id: U256::from(chain_id),
            self_address,
        }
    }
}

impl ExecutionEnvironment for SystemEnvironment {
    fn chain_id(&self) -> U256 {
        self.chain_id
    }

    fn self_address(&self) -> Address {
        self.self_address
    }

    fn block_timestamp(&self) -> Timestamp {
        // A clock before the epoch reads as 0, which only makes packets look
        // fresher than they are
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0)
    }
}
