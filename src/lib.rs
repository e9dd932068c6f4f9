//! wasm-ark: WASM module for ARK explorer crypto and record handling
//!
//! This crate provides:
//! - Address derivation from public keys, passphrases and multi-signature assets
//! - Address decoding and validation
//! - Sanitization of transaction records fetched from the explorer API
//!
//! # Architecture
//!
//! The crate follows a two-layer architecture:
//! - **Core layer** (`src/*.rs`): Pure Rust logic, no WASM dependencies
//! - **WASM layer** (`src/wasm/*.rs`): Thin wrappers with `#[wasm_bindgen]`
//!
//! The network address prefix is an argument of every derivation; callers
//! resolve it from a [`Network`] once per active network.

pub mod address;
pub mod error;
pub mod multisig;
pub mod network;
pub mod public_key;
pub mod transaction;
pub mod wasm;

// Re-export main types for convenience
pub use address::{
    address_from_multi_signature_asset, address_from_passphrase, address_from_public_key,
    decode_address, encode_address, validate_address,
};
pub use error::WasmArkError;
pub use multisig::MultiSignatureAsset;
pub use network::Network;
pub use public_key::PublicKey;
pub use transaction::{
    sanitize_response_json, sanitize_transactions, sanitize_transactions_json, Sanitizer,
    Transaction, TransactionPayload, TransactionResponse,
};
