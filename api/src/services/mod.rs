//! Typed calls for each backend resource.
//!
//! Services are free functions over a borrowed [`Transport`]; they hold no
//! state of their own. Most routes wrap their payload in a resource key
//! (`{ product: {...} }`), which [`keyed`] strips before decoding.

pub mod articles;
pub mod personas;
pub mod products;
pub mod schedules;
pub mod tools;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::envelope;
use crate::error::ApiError;
use crate::transport::{HttpBackend, Method, RequestOptions, Transport};

pub(crate) async fn keyed<T, B>(
    transport: &Transport<B>,
    method: Method,
    path: &str,
    body: Option<Value>,
    options: &RequestOptions,
    key: &str,
) -> Result<T, ApiError>
where
    T: DeserializeOwned,
    B: HttpBackend,
{
    let (status, payload) = transport.exchange(method, path, body, options).await?;
    decode_key(status, payload, key)
}

/// Decode `key` out of a payload that arrived with `status`.
pub(crate) fn decode_key<T: DeserializeOwned>(status: u16, payload: Value, key: &str) -> Result<T, ApiError> {
    serde_json::from_value(envelope::take_key(payload, key)).map_err(|e| ApiError::decode(status, &e))
}

/// Fire a call whose payload the caller does not need.
pub(crate) async fn discard<B: HttpBackend>(
    transport: &Transport<B>,
    method: Method,
    path: &str,
    body: Option<Value>,
) -> Result<(), ApiError> {
    let _: Value = transport.request(method, path, body, &RequestOptions::default()).await?;
    Ok(())
}
