//! Error types for wasm-ark

use core::fmt;
use wasm_bindgen::prelude::*;

/// Main error type for wasm-ark operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WasmArkError {
    /// A public key did not decode to a 33-byte compressed key
    InvalidPublicKeyLength(String),
    /// Multi-signature minimum is lower than 1
    InvalidMinimumSignatureCount(i64),
    /// Multi-signature minimum is larger than the number of public keys
    MinimumExceedsKeyCount { min: i64, keys: usize },
    /// Key bytes of the right length that are not a secp256k1 point
    InvalidPublicKey(String),
    /// Malformed or mismatching address
    InvalidAddress(String),
    /// Unknown network name or prefix
    InvalidNetwork(String),
    /// JSON / JS value conversion failure
    Serialization(String),
}

impl std::error::Error for WasmArkError {}

impl fmt::Display for WasmArkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WasmArkError::InvalidPublicKeyLength(s) => {
                write!(f, "Invalid public key length: {}", s)
            }
            WasmArkError::InvalidMinimumSignatureCount(min) => write!(
                f,
                "Invalid minimum signature count: {} (must be at least 1)",
                min
            ),
            WasmArkError::MinimumExceedsKeyCount { min, keys } => write!(
                f,
                "Minimum signature count {} exceeds the number of public keys ({})",
                min, keys
            ),
            WasmArkError::InvalidPublicKey(s) => write!(f, "Invalid public key: {}", s),
            WasmArkError::InvalidAddress(s) => write!(f, "Invalid address: {}", s),
            WasmArkError::InvalidNetwork(s) => write!(f, "Invalid network: {}", s),
            WasmArkError::Serialization(s) => write!(f, "Serialization error: {}", s),
        }
    }
}

impl From<serde_json::Error> for WasmArkError {
    fn from(err: serde_json::Error) -> Self {
        WasmArkError::Serialization(err.to_string())
    }
}

impl From<serde_wasm_bindgen::Error> for WasmArkError {
    fn from(err: serde_wasm_bindgen::Error) -> Self {
        WasmArkError::Serialization(err.to_string())
    }
}

// Converts to JS Error with stack trace
impl From<WasmArkError> for JsValue {
    fn from(err: WasmArkError) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = WasmArkError::InvalidAddress("bad checksum".to_string());
        assert_eq!(err.to_string(), "Invalid address: bad checksum");
    }

    #[test]
    fn test_multisig_error_display() {
        let err = WasmArkError::MinimumExceedsKeyCount { min: 3, keys: 2 };
        assert_eq!(
            err.to_string(),
            "Minimum signature count 3 exceeds the number of public keys (2)"
        );

        let err = WasmArkError::InvalidMinimumSignatureCount(0);
        assert!(err.to_string().contains("at least 1"));
    }

    #[test]
    fn test_from_json_error() {
        let json_err = serde_json::from_str::<u8>("not json").unwrap_err();
        let err: WasmArkError = json_err.into();
        assert!(matches!(err, WasmArkError::Serialization(_)));
    }
}
