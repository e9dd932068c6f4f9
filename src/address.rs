//! Base58Check wallet addresses
//!
//! Payload layout: `prefix (1) || RIPEMD160(public key) (20)`, followed by the
//! first 4 bytes of the double SHA256 of the payload, all Base58 encoded with
//! the Bitcoin alphabet (see the `check` feature of the bs58 crate).

use crate::error::WasmArkError;
use crate::multisig::MultiSignatureAsset;
use crate::public_key::PublicKey;
use ripemd::{Digest, Ripemd160};

/// Length of the public key hash carried by an address
pub const PUBLIC_KEY_HASH_LENGTH: usize = 20;

/// Length of the decoded payload (prefix + public key hash)
const PAYLOAD_LENGTH: usize = 1 + PUBLIC_KEY_HASH_LENGTH;

/// Derive the address of a hex encoded public key
///
/// # Arguments
/// * `public_key` - 33-byte compressed public key as hex
/// * `prefix` - Network address prefix (23 for mainnet, 30 for devnet)
pub fn address_from_public_key(public_key: &str, prefix: u8) -> Result<String, WasmArkError> {
    let key = PublicKey::from_hex(public_key)?;
    Ok(encode_address(&key, prefix))
}

/// Derive the address of a multi-signature wallet
///
/// Fails without a partial result if any key or the `min` bound is invalid.
pub fn address_from_multi_signature_asset(
    asset: &MultiSignatureAsset,
    prefix: u8,
) -> Result<String, WasmArkError> {
    let key = asset.public_key()?;
    log::debug!(
        "multi-signature {}-of-{} resolved to public key {}",
        asset.min,
        asset.public_keys.len(),
        key
    );
    Ok(encode_address(&key, prefix))
}

/// Derive the address of the key pair generated from a passphrase
pub fn address_from_passphrase(passphrase: &str, prefix: u8) -> Result<String, WasmArkError> {
    let key = PublicKey::from_passphrase(passphrase)?;
    Ok(encode_address(&key, prefix))
}

/// Encode a public key to an address for the given network prefix
pub fn encode_address(public_key: &PublicKey, prefix: u8) -> String {
    let mut payload = Vec::with_capacity(PAYLOAD_LENGTH);
    payload.push(prefix);
    payload.extend_from_slice(&public_key_hash(public_key));

    let address = bs58::encode(&payload).with_check().into_string();
    log::trace!("encoded {} with prefix {} as {}", public_key, prefix, address);
    address
}

/// Decode an address to its prefix and public key hash
pub fn decode_address(address: &str) -> Result<(u8, [u8; PUBLIC_KEY_HASH_LENGTH]), WasmArkError> {
    // with_check strips and verifies the 4-byte checksum
    let decoded = bs58::decode(address)
        .with_check(None)
        .into_vec()
        .map_err(|e| WasmArkError::InvalidAddress(format!("{}", e)))?;

    if decoded.len() != PAYLOAD_LENGTH {
        return Err(WasmArkError::InvalidAddress(format!(
            "Invalid payload length: {}",
            decoded.len()
        )));
    }

    let mut hash = [0u8; PUBLIC_KEY_HASH_LENGTH];
    hash.copy_from_slice(&decoded[1..]);
    Ok((decoded[0], hash))
}

/// Validate an address, optionally requiring a specific network prefix
pub fn validate_address(address: &str, expected_prefix: Option<u8>) -> bool {
    match decode_address(address) {
        Ok((prefix, _)) => expected_prefix.map_or(true, |expected| prefix == expected),
        Err(_) => false,
    }
}

/// RIPEMD160 over the raw compressed key bytes
fn public_key_hash(public_key: &PublicKey) -> [u8; PUBLIC_KEY_HASH_LENGTH] {
    let digest = Ripemd160::digest(public_key.as_bytes());
    let mut hash = [0u8; PUBLIC_KEY_HASH_LENGTH];
    hash.copy_from_slice(&digest);
    hash
}
