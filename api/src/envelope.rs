//! Backend response envelope classification.
//!
//! The backend wraps payloads as `{ success: true, data }` or reports
//! `{ error: true, code, message, details?, requestId? }`. Some routes answer
//! unwrapped, so anything matching neither shape passes through untouched.

#[cfg(test)]
#[path = "envelope_test.rs"]
mod envelope_test;

use serde_json::Value;

/// A response body sorted into one of the three shapes the client accepts.
#[derive(Debug, Clone, PartialEq)]
pub enum Envelope {
    /// `success: true` with a `data` field (which may itself be `null`).
    Success(Value),
    /// `error: true`; the whole body is the error payload.
    Failure(Value),
    /// Neither marker present: an unwrapped payload.
    Raw(Value),
}

impl Envelope {
    #[must_use]
    pub fn classify(body: Value) -> Self {
        if is_true(body.get("error")) {
            return Self::Failure(body);
        }
        if is_true(body.get("success")) {
            if let Value::Object(mut map) = body {
                return match map.remove("data") {
                    Some(data) => Self::Success(data),
                    None => Self::Raw(Value::Object(map)),
                };
            }
        }
        Self::Raw(body)
    }

    /// Payload handed to callers on a 2xx response.
    ///
    /// # Errors
    ///
    /// Returns the error payload when the body is an `error: true` envelope.
    pub fn into_payload(self) -> Result<Value, Value> {
        match self {
            Self::Success(data) | Self::Raw(data) => Ok(data),
            Self::Failure(body) => Err(body),
        }
    }
}

fn is_true(v: Option<&Value>) -> bool {
    matches!(v, Some(Value::Bool(true)))
}

/// Parse a raw response body: empty is `null`, non-JSON text becomes a string.
#[must_use]
pub fn parse_body(raw: &str) -> Value {
    if raw.trim().is_empty() {
        return Value::Null;
    }
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_owned()))
}

/// Take `key` out of an unwrapped object payload, or use the payload itself.
///
/// Services read `{ product: {...} }`-style payloads; tolerating the bare
/// object keeps them working against routes that skip the wrapper key.
#[must_use]
pub fn take_key(payload: Value, key: &str) -> Value {
    match payload {
        Value::Object(mut map) if map.contains_key(key) => map.remove(key).unwrap_or(Value::Null),
        other => other,
    }
}
