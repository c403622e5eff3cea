//! Response envelope normalization.
//!
//! The live API wraps most bodies as `{ success, data, message? }` but a few
//! endpoints return the payload bare. Historically every call site guessed
//! the shape inline; here both shapes funnel through one typed result.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::errors::{ClientError, FALLBACK_ERROR_MESSAGE};

/// Decode a 2xx response body into `T`.
///
/// - enveloped, `success: true`, decodable `data` -> `Ok(T)`
/// - enveloped, `success: false` -> `Err(Api)` with the server message
/// - bare body that decodes as `T` -> `Ok(T)`
/// - anything else -> `Err(Decode)`
pub fn normalize<T: DeserializeOwned>(value: Value) -> Result<T, ClientError> {
    if let Some(success) = envelope_success(&value) {
        if !success {
            return Err(ClientError::api_message(
                error_message(&value).unwrap_or_else(|| FALLBACK_ERROR_MESSAGE.to_string()),
            ));
        }
        let data = value
            .get("data")
            .cloned()
            .ok_or_else(|| ClientError::Decode("envelope has no data field".into()))?;
        return serde_json::from_value(data).map_err(|e| ClientError::Decode(e.to_string()));
    }
    serde_json::from_value(value).map_err(|e| ClientError::Decode(e.to_string()))
}

/// Decode a 2xx response body as a bare acknowledgement.
///
/// Write endpoints answer with an envelope and no usable `data`; only the
/// `success` flag matters. A 2xx with no envelope at all also counts as
/// success, matching how the API behaves for deletes.
pub fn ack(value: &Value) -> Result<(), ClientError> {
    match envelope_success(value) {
        Some(true) | None => Ok(()),
        Some(false) => Err(ClientError::api_message(
            error_message(value).unwrap_or_else(|| FALLBACK_ERROR_MESSAGE.to_string()),
        )),
    }
}

/// The `message` field of an enveloped (error) body, if any.
pub fn error_message(value: &Value) -> Option<String> {
    value
        .get("message")
        .and_then(Value::as_str)
        .filter(|m| !m.trim().is_empty())
        .map(str::to_owned)
}

fn envelope_success(value: &Value) -> Option<bool> {
    value.get("success").and_then(Value::as_bool)
}
