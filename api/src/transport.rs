//! HTTP transport: credential injection, envelope unwrapping, error normalization.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every backend call in the client and the CLI goes through [`Transport`].
//! The actual wire I/O is delegated to an [`HttpBackend`] (`gloo-net` in the
//! browser, `reqwest` natively, a script in tests) so the rules here are the
//! same everywhere.
//!
//! ERROR HANDLING
//! ==============
//! Callers only ever see [`ApiError`]. A 401 additionally clears the session
//! and asks the [`Navigator`] for a full redirect to `/login` before the call
//! is rejected; nothing is retried.

#[cfg(test)]
#[path = "transport_test.rs"]
mod transport_test;

use std::future::Future;
use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::config::ApiConfig;
use crate::envelope::{self, Envelope};
use crate::error::{ApiError, BackendError, UNKNOWN_ERROR};
use crate::routes;
use crate::session::SessionStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl Method {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }
}

/// Fully resolved request handed to a backend adapter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    /// Serialized JSON body.
    pub body: Option<String>,
}

impl HttpRequest {
    /// Case-insensitive header lookup.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    #[must_use]
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self { status, body: body.into() }
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Performs one HTTP exchange. Non-2xx statuses are responses, not errors.
pub trait HttpBackend {
    fn send(&self, request: HttpRequest) -> impl Future<Output = Result<HttpResponse, BackendError>>;
}

/// Full-page navigation, used to leave authenticated UI behind entirely.
pub trait Navigator: Send + Sync {
    fn redirect(&self, path: &str);
}

/// Per-call knobs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestOptions {
    /// Query pairs, form-url-encoded onto the path.
    pub query: Vec<(String, String)>,
    /// Clear the session and redirect to login on 401. Auth calls turn this
    /// off so a credential rejection reaches the form instead.
    pub auth_redirect: bool,
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self { query: Vec::new(), auth_redirect: true }
    }
}

impl RequestOptions {
    #[must_use]
    pub fn query(mut self, key: &str, value: impl ToString) -> Self {
        self.query.push((key.to_owned(), value.to_string()));
        self
    }

    #[must_use]
    pub fn without_auth_redirect(mut self) -> Self {
        self.auth_redirect = false;
        self
    }
}

pub struct Transport<B> {
    config: ApiConfig,
    backend: B,
    store: Arc<dyn SessionStore>,
    navigator: Arc<dyn Navigator>,
}

impl<B: HttpBackend> Transport<B> {
    pub fn new(config: ApiConfig, backend: B, store: Arc<dyn SessionStore>, navigator: Arc<dyn Navigator>) -> Self {
        Self { config, backend, store, navigator }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn store(&self) -> &dyn SessionStore {
        self.store.as_ref()
    }

    pub fn navigator(&self) -> &dyn Navigator {
        self.navigator.as_ref()
    }

    /// Perform a call and decode the unwrapped payload into `T`.
    ///
    /// # Errors
    ///
    /// Returns the normalized [`ApiError`] for network failures, non-2xx
    /// responses, `error: true` envelopes, and payloads that do not decode.
    pub async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
        options: &RequestOptions,
    ) -> Result<T, ApiError> {
        let (status, payload) = self.exchange(method, path, body, options).await?;
        serde_json::from_value(payload).map_err(|e| ApiError::decode(status, &e))
    }

    /// `GET` with default options.
    ///
    /// # Errors
    ///
    /// See [`Transport::request`].
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.request(Method::Get, path, None, &RequestOptions::default()).await
    }

    /// `GET` with query pairs or other options.
    ///
    /// # Errors
    ///
    /// See [`Transport::request`].
    pub async fn get_with<T: DeserializeOwned>(&self, path: &str, options: &RequestOptions) -> Result<T, ApiError> {
        self.request(Method::Get, path, None, options).await
    }

    /// # Errors
    ///
    /// See [`Transport::request`].
    pub async fn post<T: DeserializeOwned>(&self, path: &str, body: Option<Value>) -> Result<T, ApiError> {
        self.request(Method::Post, path, body, &RequestOptions::default()).await
    }

    /// # Errors
    ///
    /// See [`Transport::request`].
    pub async fn put<T: DeserializeOwned>(&self, path: &str, body: Option<Value>) -> Result<T, ApiError> {
        self.request(Method::Put, path, body, &RequestOptions::default()).await
    }

    /// # Errors
    ///
    /// See [`Transport::request`].
    pub async fn patch<T: DeserializeOwned>(&self, path: &str, body: Option<Value>) -> Result<T, ApiError> {
        self.request(Method::Patch, path, body, &RequestOptions::default()).await
    }

    /// # Errors
    ///
    /// See [`Transport::request`].
    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.request(Method::Delete, path, None, &RequestOptions::default()).await
    }

    /// Perform a call and return the response status with the unwrapped payload.
    pub(crate) async fn exchange(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
        options: &RequestOptions,
    ) -> Result<(u16, Value), ApiError> {
        let request = self.build_request(method, path, body.as_ref(), options);
        log::debug!("{} {path}", method.as_str());

        let response = self.backend.send(request).await.map_err(|e| {
            log::warn!("{} {path} failed: {e}", method.as_str());
            ApiError::from_backend(&e)
        })?;
        let payload = envelope::parse_body(&response.body);

        if response.status == 401 && options.auth_redirect {
            log::warn!("{} {path} returned 401; clearing session", method.as_str());
            self.store.clear();
            self.navigator.redirect(routes::LOGIN);
            return Err(ApiError::from_payload(401, &payload));
        }
        if !response.is_success() {
            return Err(ApiError::from_payload(response.status, &payload));
        }

        Envelope::classify(payload)
            .into_payload()
            .map(|data| (response.status, data))
            .map_err(|body| ApiError::from_payload(response.status, &body))
    }

    fn build_request(&self, method: Method, path: &str, body: Option<&Value>, options: &RequestOptions) -> HttpRequest {
        let mut headers = vec![("Content-Type".to_owned(), "application/json".to_owned())];
        if let Some(token) = self.store.get() {
            headers.push(("Authorization".to_owned(), format!("Bearer {token}")));
        }
        HttpRequest {
            method,
            url: with_query(self.config.url(path), &options.query),
            headers,
            body: body.map(Value::to_string),
        }
    }
}

fn with_query(url: String, query: &[(String, String)]) -> String {
    if query.is_empty() {
        return url;
    }
    let encoded = url::form_urlencoded::Serializer::new(String::new())
        .extend_pairs(query)
        .finish();
    let sep = if url.contains('?') { '&' } else { '?' };
    format!("{url}{sep}{encoded}")
}

/// Serialize a request body for [`Transport::request`].
///
/// # Errors
///
/// Returns an [`ApiError`] if `body` cannot be represented as JSON.
pub fn encode_body<T: Serialize>(body: &T) -> Result<Value, ApiError> {
    serde_json::to_value(body)
        .map_err(|e| ApiError::new(UNKNOWN_ERROR, &format!("request body could not be encoded: {e}")))
}
