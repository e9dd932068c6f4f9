//! Transaction records and vendor field sanitization
//!
//! Records come from the explorer API as JSON objects. Only the censored
//! fields are rewritten; everything else passes through untouched so new API
//! fields survive a round trip.

use crate::error::WasmArkError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Fields holding free-form, user supplied text
pub const CENSORED_FIELDS: &[&str] = &["vendorField"];

/// Transaction record as returned by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Transaction(Map<String, Value>);

impl Transaction {
    pub fn id(&self) -> Option<&str> {
        self.get_str("id")
    }

    pub fn sender(&self) -> Option<&str> {
        self.get_str("sender")
    }

    pub fn sender_public_key(&self) -> Option<&str> {
        self.get_str("senderPublicKey")
    }

    pub fn recipient(&self) -> Option<&str> {
        self.get_str("recipient")
    }

    pub fn vendor_field(&self) -> Option<&str> {
        self.get_str("vendorField")
    }

    /// Transaction type (within its type group)
    pub fn tx_type(&self) -> Option<u64> {
        self.0.get("type").and_then(Value::as_u64)
    }

    pub fn type_group(&self) -> Option<u64> {
        self.0.get("typeGroup").and_then(Value::as_u64)
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    fn get_str(&self, field: &str) -> Option<&str> {
        self.0.get(field).and_then(Value::as_str)
    }

    fn sanitize(&mut self, sanitizer: &Sanitizer) {
        for field in CENSORED_FIELDS {
            if let Some(Value::String(text)) = self.0.get_mut(*field) {
                *text = sanitizer.apply(text);
            }
        }
    }
}

impl From<Map<String, Value>> for Transaction {
    fn from(map: Map<String, Value>) -> Self {
        Transaction(map)
    }
}

/// API `data` payload: one record or a page of records
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TransactionPayload {
    Many(Vec<Transaction>),
    Single(Transaction),
}

impl TransactionPayload {
    pub fn len(&self) -> usize {
        match self {
            TransactionPayload::Many(transactions) => transactions.len(),
            TransactionPayload::Single(_) => 1,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// API response envelope; `meta` and any other keys are kept as-is
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionResponse {
    pub data: TransactionPayload,
    #[serde(flatten)]
    pub rest: Map<String, Value>,
}

/// Makes user supplied text safe to render as HTML
#[derive(Debug, Clone, Copy, Default)]
pub struct Sanitizer;

impl Sanitizer {
    pub fn new() -> Self {
        Sanitizer
    }

    /// Escape markup characters and drop control characters
    ///
    /// Newlines and tabs are kept.
    pub fn apply(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        for c in text.chars() {
            match c {
                '&' => out.push_str("&amp;"),
                '<' => out.push_str("&lt;"),
                '>' => out.push_str("&gt;"),
                '"' => out.push_str("&quot;"),
                '\'' => out.push_str("&#x27;"),
                '/' => out.push_str("&#x2F;"),
                '\n' | '\t' => out.push(c),
                c if c.is_control() => {}
                c => out.push(c),
            }
        }
        out
    }
}

/// Sanitize every censored field; the payload keeps its shape
pub fn sanitize_transactions(payload: TransactionPayload) -> TransactionPayload {
    let sanitizer = Sanitizer::new();
    match payload {
        TransactionPayload::Single(mut transaction) => {
            transaction.sanitize(&sanitizer);
            TransactionPayload::Single(transaction)
        }
        TransactionPayload::Many(mut transactions) => {
            for transaction in transactions.iter_mut() {
                transaction.sanitize(&sanitizer);
            }
            log::debug!("sanitized {} transactions", transactions.len());
            TransactionPayload::Many(transactions)
        }
    }
}

/// Sanitize the `data` member of an API response
pub fn sanitize_response(mut response: TransactionResponse) -> TransactionResponse {
    response.data = sanitize_transactions(response.data);
    response
}

/// Sanitize a JSON record or array of records
pub fn sanitize_transactions_json(json: &str) -> Result<String, WasmArkError> {
    let payload: TransactionPayload = serde_json::from_str(json)?;
    Ok(serde_json::to_string(&sanitize_transactions(payload))?)
}

/// Sanitize a JSON API response (`{"data": ..., "meta": ...}`)
pub fn sanitize_response_json(json: &str) -> Result<String, WasmArkError> {
    let response: TransactionResponse = serde_json::from_str(json)?;
    Ok(serde_json::to_string(&sanitize_response(response))?)
}
