//! WASM bindings for transaction sanitization

use crate::transaction::{
    sanitize_response, sanitize_transactions, TransactionPayload, TransactionResponse,
};
use crate::WasmArkError;
use serde::Serialize;
use wasm_bindgen::prelude::*;

/// Namespace for transaction record operations
#[wasm_bindgen]
pub struct TransactionNamespace;

#[wasm_bindgen]
impl TransactionNamespace {
    /// Sanitize a transaction object or an array of them
    ///
    /// Returns a value of the same shape with censored fields escaped.
    #[wasm_bindgen(js_name = sanitizeTransactions)]
    pub fn sanitize_transactions(transactions: JsValue) -> Result<JsValue, JsValue> {
        let payload: TransactionPayload =
            serde_wasm_bindgen::from_value(transactions).map_err(WasmArkError::from)?;
        Ok(to_js_value(&sanitize_transactions(payload))?)
    }

    /// Sanitize the `data` member of an API response, keeping `meta`
    #[wasm_bindgen(js_name = sanitizeResponse)]
    pub fn sanitize_response(response: JsValue) -> Result<JsValue, JsValue> {
        let response: TransactionResponse =
            serde_wasm_bindgen::from_value(response).map_err(WasmArkError::from)?;
        Ok(to_js_value(&sanitize_response(response))?)
    }
}

/// Serialize as plain JS objects (not `Map`) so the UI can read fields directly
fn to_js_value<T: Serialize>(value: &T) -> Result<JsValue, WasmArkError> {
    Ok(value.serialize(&serde_wasm_bindgen::Serializer::json_compatible())?)
}
