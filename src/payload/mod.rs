//! Webhook payload decoding
//!
//! The automation platform hands over either the alert object itself, a
//! request-like envelope (`{"body": ...}` or `{"json": {"body": ...}}`), or a
//! body that is still a JSON-encoded string. Decoding never fails: when the
//! body cannot be decoded the envelope itself is used, and lacking one an
//! empty mapping, so field defaulting takes over downstream.

pub mod reader;

pub use reader::{FieldReader, Normalized};

use serde_json::{Map, Value};

/// Maximum levels of string-in-string encoding that are unwrapped
const MAX_STRING_DEPTH: usize = 2;

/// Decode a raw webhook value into the alert's field mapping
pub fn decode(raw: &Value) -> Map<String, Value> {
    let inner = match raw.get("json") {
        Some(json @ Value::Object(_)) => json,
        _ => raw,
    };

    let (body, container) = match inner {
        Value::Object(map) => match map.get("body") {
            Some(body) if !body.is_null() => (body, Some(map)),
            _ => return map.clone(),
        },
        other => (other, None),
    };

    match decode_body(body, 0) {
        Some(fields) => fields,
        None => {
            log::warn!("Alert body could not be decoded, falling back to the raw container");
            container.cloned().unwrap_or_default()
        }
    }
}

fn decode_body(body: &Value, depth: usize) -> Option<Map<String, Value>> {
    match body {
        Value::Object(map) => Some(map.clone()),
        Value::String(text) if depth < MAX_STRING_DEPTH => {
            match serde_json::from_str::<Value>(text) {
                Ok(decoded) => decode_body(&decoded, depth + 1),
                Err(e) => {
                    log::debug!("Body is not valid JSON: {}", e);
                    None
                }
            }
        }
        _ => None,
    }
}
