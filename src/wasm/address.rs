//! WASM bindings for address derivation
//!
//! AddressNamespace provides static methods used by the explorer UI. The
//! network prefix is always passed by the caller.

use crate::address::{
    address_from_multi_signature_asset, address_from_passphrase, address_from_public_key,
    validate_address,
};
use crate::multisig::MultiSignatureAsset;
use crate::public_key::PublicKey;
use crate::WasmArkError;
use wasm_bindgen::prelude::*;

/// Namespace for address operations
#[wasm_bindgen]
pub struct AddressNamespace;

#[wasm_bindgen]
impl AddressNamespace {
    /// Derive an address from a hex encoded compressed public key
    ///
    /// # Arguments
    /// * `public_key` - 66-character hex public key
    /// * `prefix` - Network address prefix
    #[wasm_bindgen(js_name = addressFromPublicKey)]
    pub fn address_from_public_key(public_key: &str, prefix: u8) -> Result<String, JsValue> {
        Ok(address_from_public_key(public_key, prefix)?)
    }

    /// Derive a multi-signature address from `{ min, publicKeys }`
    #[wasm_bindgen(js_name = addressFromMultiSignatureAsset)]
    pub fn address_from_multi_signature_asset(
        asset: JsValue,
        prefix: u8,
    ) -> Result<String, JsValue> {
        let asset = multi_signature_asset_from_js(asset)?;
        Ok(address_from_multi_signature_asset(&asset, prefix)?)
    }

    /// Get the aggregate public key of a multi-signature asset as hex
    #[wasm_bindgen(js_name = publicKeyFromMultiSignatureAsset)]
    pub fn public_key_from_multi_signature_asset(asset: JsValue) -> Result<String, JsValue> {
        let asset = multi_signature_asset_from_js(asset)?;
        Ok(asset.public_key()?.to_hex())
    }

    #[wasm_bindgen(js_name = addressFromPassphrase)]
    pub fn address_from_passphrase(passphrase: &str, prefix: u8) -> Result<String, JsValue> {
        Ok(address_from_passphrase(passphrase, prefix)?)
    }

    #[wasm_bindgen(js_name = publicKeyFromPassphrase)]
    pub fn public_key_from_passphrase(passphrase: &str) -> Result<String, JsValue> {
        Ok(PublicKey::from_passphrase(passphrase)?.to_hex())
    }

    /// Check an address, optionally against a network prefix
    #[wasm_bindgen(js_name = validateAddress)]
    pub fn validate_address(address: &str, prefix: Option<u8>) -> bool {
        validate_address(address, prefix)
    }
}

fn multi_signature_asset_from_js(asset: JsValue) -> Result<MultiSignatureAsset, WasmArkError> {
    Ok(serde_wasm_bindgen::from_value(asset)?)
}

// WASM tests - only run in wasm32 target
#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    #[wasm_bindgen_test]
    fn test_address_from_public_key() {
        let address = AddressNamespace::address_from_public_key(
            "03d3fdad9c5b25bf8880e6b519eb3611a5c0b31adebc8455f0e096175b28321aff",
            30,
        )
        .unwrap();
        assert_eq!(address, "D6Z26L69gdk9qYmTv5uzk3uGepigtHY4ax");
    }

    #[wasm_bindgen_test]
    fn test_multisig_asset_from_js() {
        let asset = MultiSignatureAsset::new(
            2,
            vec![
                "0235d486fea0193cbe77e955ab175b8f6eb9eaf784de689beffbd649989f5d6be3".to_string(),
                "03a46f2547d20b47003c1c376788db5a54d67264df2ae914f70bf453b6a1fa1b3a".to_string(),
                "03d7dfe44e771039334f4712fb95ad355254f674c8f5d286503199157b7bf7c357".to_string(),
            ],
        );
        let js = serde_wasm_bindgen::to_value(&asset).unwrap();
        let address = AddressNamespace::address_from_multi_signature_asset(js, 30).unwrap();
        assert_eq!(address, "DCxytpFTrQavKX17W4j9n6T9o5iPhAigw6");
    }

    #[wasm_bindgen_test]
    fn test_multisig_min_zero_throws() {
        let asset = MultiSignatureAsset::new(
            0,
            vec!["0235d486fea0193cbe77e955ab175b8f6eb9eaf784de689beffbd649989f5d6be3".to_string()],
        );
        let js = serde_wasm_bindgen::to_value(&asset).unwrap();
        assert!(AddressNamespace::address_from_multi_signature_asset(js, 30).is_err());
    }
}
