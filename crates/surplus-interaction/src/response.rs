//! Turns a raw HTTP status and body into an [`Envelope`] or a typed error.
//!
//! Kept free of `reqwest` types so every branch is unit-testable.

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use surplus_core::api::{ApiOperation, Envelope, EnvelopeStatus};
use surplus_core::{Result, SurplusError};

const ENVELOPE_KEYS: [&str; 3] = ["status", "message", "error"];
const PAGINATION_KEYS: [&str; 2] = ["total", "total_pages"];

pub(crate) fn normalize<T>(operation: ApiOperation, status: u16, body: &[u8]) -> Result<Envelope<T>>
where
    T: DeserializeOwned,
{
    let fallback = operation.fallback_message();
    let parsed = if body.iter().all(u8::is_ascii_whitespace) {
        Ok(Value::Null)
    } else {
        serde_json::from_slice::<Value>(body)
    };

    if !(200..300).contains(&status) {
        let message = parsed
            .ok()
            .and_then(|value| server_message(&value))
            .unwrap_or_else(|| fallback.to_string());
        return Err(if status == 401 {
            SurplusError::unauthorized(message)
        } else {
            SurplusError::transport(Some(status), message)
        });
    }

    let value = parsed.map_err(|err| {
        tracing::warn!("[ApiClient] {operation}: unparseable body: {err}");
        SurplusError::bad_response(fallback)
    })?;

    // some routes answer 200 with an error envelope
    if value.get("status").and_then(Value::as_str) == Some("error") {
        let message = server_message(&value).unwrap_or_else(|| fallback.to_string());
        return Err(SurplusError::transport(Some(status), message));
    }

    let message = value
        .get("message")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();

    let data = match extract_data(value) {
        None => None,
        Some(raw) => Some(serde_json::from_value::<T>(raw).map_err(|err| {
            tracing::warn!("[ApiClient] {operation}: unexpected payload shape: {err}");
            SurplusError::bad_response(fallback)
        })?),
    };

    Ok(Envelope {
        status: EnvelopeStatus::Success,
        message,
        data,
    })
}

fn server_message(value: &Value) -> Option<String> {
    let object = value.as_object()?;
    ["message", "error"].iter().find_map(|key| {
        object
            .get(*key)
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|text| !text.is_empty())
            .map(str::to_string)
    })
}

/// Locates the payload of a success body.
///
/// - non-object bodies (a bare list) are the payload
/// - `{data: ...}` without pagination keys yields `data`
/// - paginated bodies and flat bodies (login answers with top-level
///   `user_id`, `role`) yield the object minus the envelope keys
fn extract_data(value: Value) -> Option<Value> {
    let mut object: Map<String, Value> = match value {
        Value::Null => return None,
        Value::Object(object) => object,
        other => return Some(other),
    };

    let paginated = PAGINATION_KEYS.iter().any(|key| object.contains_key(*key));
    if !paginated {
        if let Some(data) = object.remove("data") {
            return (!data.is_null()).then_some(data);
        }
    }

    for key in ENVELOPE_KEYS {
        object.remove(key);
    }
    (!object.is_empty()).then_some(Value::Object(object))
}
