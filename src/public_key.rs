//! Compressed secp256k1 public keys
//!
//! Keys cross the JS boundary as 66-character hex strings. Internally they are
//! kept as raw SEC1 bytes; curve validation only happens when point arithmetic
//! is needed (multi-signature aggregation).

use crate::error::WasmArkError;
use core::fmt;
use k256::elliptic_curve::sec1::ToEncodedPoint;
use k256::{ProjectivePoint, SecretKey};
use sha2::{Digest, Sha256};
use std::str::FromStr;

/// Length of a compressed SEC1 public key
pub const PUBLIC_KEY_LENGTH: usize = 33;

/// 33-byte compressed public key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PublicKey([u8; PUBLIC_KEY_LENGTH]);

impl PublicKey {
    /// Parse a hex encoded compressed public key
    pub fn from_hex(public_key: &str) -> Result<Self, WasmArkError> {
        let bytes = hex::decode(public_key).map_err(|_| {
            WasmArkError::InvalidPublicKeyLength(format!(
                "'{}' is not a {}-byte hex string",
                public_key, PUBLIC_KEY_LENGTH
            ))
        })?;
        Self::from_bytes(&bytes)
    }

    /// Create a public key from raw bytes with length validation
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, WasmArkError> {
        let array: [u8; PUBLIC_KEY_LENGTH] = bytes.try_into().map_err(|_| {
            WasmArkError::InvalidPublicKeyLength(format!(
                "expected {} bytes, got {}",
                PUBLIC_KEY_LENGTH,
                bytes.len()
            ))
        })?;
        Ok(PublicKey(array))
    }

    /// Derive the public key whose private key is SHA256(passphrase)
    pub fn from_passphrase(passphrase: &str) -> Result<Self, WasmArkError> {
        let secret = Sha256::digest(passphrase.as_bytes());
        let secret_key = SecretKey::from_slice(&secret).map_err(|_| {
            WasmArkError::InvalidPublicKey("passphrase does not yield a valid secret".to_string())
        })?;
        Self::from_point(&secret_key.public_key().to_projective())
    }

    /// Sum of the given keys as curve points
    ///
    /// Fails if a key is not on the curve or the sum is the point at infinity.
    pub fn aggregate<'a, I>(keys: I) -> Result<Self, WasmArkError>
    where
        I: IntoIterator<Item = &'a PublicKey>,
    {
        let mut sum = ProjectivePoint::IDENTITY;
        for key in keys {
            sum += key.to_point()?;
        }
        Self::from_point(&sum)
    }

    pub fn as_bytes(&self) -> &[u8; PUBLIC_KEY_LENGTH] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    fn to_point(&self) -> Result<ProjectivePoint, WasmArkError> {
        k256::PublicKey::from_sec1_bytes(&self.0)
            .map(|pk| pk.to_projective())
            .map_err(|_| {
                WasmArkError::InvalidPublicKey(format!("{} is not a secp256k1 point", self))
            })
    }

    fn from_point(point: &ProjectivePoint) -> Result<Self, WasmArkError> {
        let public_key = k256::PublicKey::from_affine(point.to_affine()).map_err(|_| {
            WasmArkError::InvalidPublicKey("key sum is the point at infinity".to_string())
        })?;
        Self::from_bytes(public_key.to_encoded_point(true).as_bytes())
    }
}

impl fmt::Display for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl FromStr for PublicKey {
    type Err = WasmArkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}
