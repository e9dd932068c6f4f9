//! Multi-signature assets
//!
//! A multi-signature wallet is identified by a single aggregate public key:
//! the point sum of a key derived from `min` and every participant key. Its
//! address is then derived exactly like a single-key address.

use crate::error::WasmArkError;
use crate::public_key::PublicKey;
use serde::{Deserialize, Serialize};

/// Spending condition requiring `min` signatures out of `public_keys`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MultiSignatureAsset {
    /// Minimum number of signatures, signed so negative input reaches validation
    pub min: i64,
    /// Participant public keys (hex encoded, compressed)
    pub public_keys: Vec<String>,
}

impl MultiSignatureAsset {
    pub fn new(min: i64, public_keys: Vec<String>) -> Self {
        MultiSignatureAsset { min, public_keys }
    }

    /// Check the asset and decode its keys
    ///
    /// Keys are checked first, then the lower and upper bound of `min`.
    pub fn validate(&self) -> Result<Vec<PublicKey>, WasmArkError> {
        let keys = self
            .public_keys
            .iter()
            .map(|key| PublicKey::from_hex(key))
            .collect::<Result<Vec<_>, _>>()?;

        if self.min < 1 {
            return Err(WasmArkError::InvalidMinimumSignatureCount(self.min));
        }

        let min = self.min as u64;
        if min > keys.len() as u64 {
            return Err(WasmArkError::MinimumExceedsKeyCount {
                min: self.min,
                keys: keys.len(),
            });
        }

        Ok(keys)
    }

    /// Aggregate public key identifying this multi-signature wallet
    pub fn public_key(&self) -> Result<PublicKey, WasmArkError> {
        let keys = self.validate()?;
        let min_key = min_key(self.min as u64)?;

        PublicKey::aggregate(std::iter::once(&min_key).chain(keys.iter()))
    }
}

/// Key derived from the signature threshold, using its hex form as passphrase
fn min_key(min: u64) -> Result<PublicKey, WasmArkError> {
    PublicKey::from_passphrase(&format!("{:02x}", min))
}
