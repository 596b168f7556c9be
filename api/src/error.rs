//! Normalized error types shared by every API consumer.
//!
//! DESIGN
//! ======
//! Backend adapters fail with [`BackendError`]; the transport folds that and
//! every non-2xx payload into one [`ApiError`] shape so pages never handle
//! adapter-specific errors. Auth operations wrap it in [`AuthError`] so login
//! and register report failure as a value instead of unwinding.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const UNKNOWN_ERROR: &str = "UNKNOWN_ERROR";
pub const NETWORK_ERROR: &str = "NETWORK_ERROR";
pub const DECODE_ERROR: &str = "DECODE_ERROR";
pub const UNAUTHORIZED: &str = "UNAUTHORIZED";

pub const FALLBACK_MESSAGE: &str = "An error occurred";

/// Failure reported by an HTTP backend adapter before any response exists.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BackendError {
    /// The request could not be delivered or the response could not be read.
    #[error("network request failed: {0}")]
    Network(String),
    /// HTTP is not available in this build (e.g. server-side rendering).
    #[error("http backend unavailable")]
    Unavailable,
}

/// One field-level validation problem reported by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorDetail {
    /// Path to the offending field; segments are names or array indices.
    #[serde(default)]
    pub path: Vec<Value>,
    #[serde(default)]
    pub message: String,
}

impl ErrorDetail {
    /// Field name for form mapping: the first path segment, if any.
    #[must_use]
    pub fn field(&self) -> Option<String> {
        match self.path.first()? {
            Value::String(name) => Some(name.clone()),
            Value::Number(index) => Some(index.to_string()),
            _ => None,
        }
    }
}

/// The one error shape every caller of the transport handles.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{code}: {message}")]
pub struct ApiError {
    pub code: String,
    pub message: String,
    pub details: Vec<ErrorDetail>,
    pub request_id: Option<String>,
    /// HTTP status when a response was received.
    pub status: Option<u16>,
    /// True when `message` is a generic stand-in, not backend text.
    pub(crate) message_is_fallback: bool,
}

impl ApiError {
    #[must_use]
    pub fn new(code: &str, message: &str) -> Self {
        Self {
            code: code.to_owned(),
            message: message.to_owned(),
            details: Vec::new(),
            request_id: None,
            status: None,
            message_is_fallback: false,
        }
    }

    /// Normalize a non-2xx (or `error: true`) response payload.
    ///
    /// Missing fields fall back to `UNKNOWN_ERROR` / a generic message; a
    /// malformed `details` entry is dropped rather than failing the whole error.
    #[must_use]
    pub fn from_payload(status: u16, body: &Value) -> Self {
        let code = body.get("code").and_then(Value::as_str);
        let message = body
            .get("message")
            .and_then(Value::as_str)
            .filter(|m| !m.trim().is_empty());
        let details = body
            .get("details")
            .and_then(Value::as_array)
            .map(|items| {
                items
                    .iter()
                    .filter_map(|item| serde_json::from_value::<ErrorDetail>(item.clone()).ok())
                    .collect()
            })
            .unwrap_or_default();
        let request_id = body
            .get("requestId")
            .or_else(|| body.get("request_id"))
            .and_then(Value::as_str)
            .map(str::to_owned);

        let default_code = if status == 401 { UNAUTHORIZED } else { UNKNOWN_ERROR };
        Self {
            code: code.unwrap_or(default_code).to_owned(),
            message: message.unwrap_or(FALLBACK_MESSAGE).to_owned(),
            details,
            request_id,
            status: Some(status),
            message_is_fallback: message.is_none(),
        }
    }

    /// Normalize an adapter failure where no response was received.
    #[must_use]
    pub fn from_backend(err: &BackendError) -> Self {
        let mut out = Self::new(NETWORK_ERROR, &err.to_string());
        out.message_is_fallback = true;
        out
    }

    /// Response arrived but did not match the expected payload type.
    #[must_use]
    pub fn decode(status: u16, err: &serde_json::Error) -> Self {
        let mut out = Self::new(DECODE_ERROR, &format!("unexpected response payload: {err}"));
        out.status = Some(status);
        out.message_is_fallback = true;
        out
    }

    /// Backend-supplied message, if the backend supplied one.
    #[must_use]
    pub fn backend_message(&self) -> Option<&str> {
        if self.message_is_fallback { None } else { Some(&self.message) }
    }

    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        self.status == Some(401)
    }

    /// Map validation details onto form fields (first message per field wins).
    #[must_use]
    pub fn field_errors(&self) -> BTreeMap<String, String> {
        let mut out = BTreeMap::new();
        for detail in &self.details {
            if let Some(field) = detail.field() {
                out.entry(field).or_insert_with(|| detail.message.clone());
            }
        }
        out
    }

    /// User-facing text: backend message (or `fallback`) plus any detail messages.
    #[must_use]
    pub fn display_message(&self, fallback: &str) -> String {
        let base = self.backend_message().unwrap_or(fallback);
        let details: Vec<&str> = self
            .details
            .iter()
            .map(|d| d.message.as_str())
            .filter(|m| !m.is_empty())
            .collect();
        if details.is_empty() {
            base.to_owned()
        } else {
            format!("{base}: {}", details.join(", "))
        }
    }
}

/// Failure of an explicit auth action (login, register, OAuth completion).
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AuthError {
    /// The backend refused the action; `message` is ready for display.
    #[error("{message}")]
    Rejected {
        message: String,
        #[source]
        source: ApiError,
    },
    /// The backend reported success but sent no access token.
    #[error("auth response did not include a token")]
    MissingToken,
    /// A later login/register/logout started while this one was in flight.
    #[error("auth action superseded by a newer one")]
    Superseded,
}

impl AuthError {
    #[must_use]
    pub fn rejected(source: ApiError, fallback: &str) -> Self {
        Self::Rejected { message: source.display_message(fallback), source }
    }

    /// Field-level validation errors carried by a rejection, if any.
    #[must_use]
    pub fn field_errors(&self) -> BTreeMap<String, String> {
        match self {
            Self::Rejected { source, .. } => source.field_errors(),
            Self::MissingToken | Self::Superseded => BTreeMap::new(),
        }
    }
}
