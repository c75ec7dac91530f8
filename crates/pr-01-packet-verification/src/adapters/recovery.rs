//! secp256k1 recovery adapter backed by `k256`.

use shared_types::{Address, Hash};
use tracing::trace;

use crate::domain::ecdsa::recover_address;
use crate::domain::entities::PacketSignature;
use crate::ports::outbound::SignatureRecovery;

/// Default [`SignatureRecovery`]: local `k256` recovery with Ethereum
/// address derivation.
#[derive(Clone, Copy, Debug, Default)]
pub struct K256Recovery;

impl SignatureRecovery for K256Recovery {
    fn recover(&self, digest: &Hash, signature: &PacketSignature) -> Option<Address> {
        match recover_address(digest, signature) {
            Ok(address) if !address.is_zero() => Some(address),
            Ok(_) => None,
            Err(e) => {
                trace!(error = %e, "signature recovery failed");
                None
            }
        }
    }
}
