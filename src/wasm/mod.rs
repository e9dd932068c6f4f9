//! WASM bindings for wasm-ark
//!
//! This module contains thin wrappers with #[wasm_bindgen] that delegate
//! to the core Rust implementations.

pub mod address;
pub mod transaction;

// Re-export WASM types
pub use address::AddressNamespace;
pub use transaction::TransactionNamespace;
