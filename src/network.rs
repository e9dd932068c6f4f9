//! Network configuration
//!
//! The address prefix is always handed to the codec explicitly. A `Network`
//! is just a named prefix the caller resolves once per active network.

use crate::error::WasmArkError;
use serde::{Deserialize, Serialize};

/// Mainnet public key hash version (addresses start with 'A')
pub const MAINNET_ADDRESS_PREFIX: u8 = 23;
/// Devnet public key hash version (addresses start with 'D')
pub const DEVNET_ADDRESS_PREFIX: u8 = 30;

/// Named network with its address prefix byte
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Network {
    /// Network name (e.g., "mainnet", "devnet")
    pub name: String,
    /// Version byte prepended to the public key hash
    pub address_prefix: u8,
}

impl Network {
    pub fn mainnet() -> Self {
        Self::custom("mainnet", MAINNET_ADDRESS_PREFIX)
    }

    pub fn devnet() -> Self {
        Self::custom("devnet", DEVNET_ADDRESS_PREFIX)
    }

    pub fn custom(name: &str, address_prefix: u8) -> Self {
        Network {
            name: name.to_string(),
            address_prefix,
        }
    }

    /// Resolve a preset by name (case-insensitive)
    pub fn from_name(name: &str) -> Result<Self, WasmArkError> {
        match name.to_lowercase().as_str() {
            "mainnet" | "ark" => Ok(Self::mainnet()),
            "devnet" | "dark" => Ok(Self::devnet()),
            other => Err(WasmArkError::InvalidNetwork(format!(
                "Unknown network '{}'",
                other
            ))),
        }
    }

    /// Get the prefix value
    pub fn prefix(&self) -> u8 {
        self.address_prefix
    }
}

impl Default for Network {
    fn default() -> Self {
        Self::mainnet()
    }
}
