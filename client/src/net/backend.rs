//! `gloo-net` implementation of [`HttpBackend`].
//!
//! Client-side (hydrate): real `fetch` calls.
//! Server-side (SSR): every call fails with [`BackendError::Unavailable`];
//! the backend API is only reachable from the browser.

#![allow(clippy::unused_async)]

use api::{BackendError, HttpBackend, HttpRequest, HttpResponse};
#[cfg(feature = "hydrate")]
use api::Method;

#[derive(Clone, Copy, Debug, Default)]
pub struct GlooBackend;

impl HttpBackend for GlooBackend {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, BackendError> {
        #[cfg(feature = "hydrate")]
        {
            use gloo_net::http::Request;

            let mut builder = match request.method {
                Method::Get => Request::get(&request.url),
                Method::Post => Request::post(&request.url),
                Method::Put => Request::put(&request.url),
                Method::Patch => Request::patch(&request.url),
                Method::Delete => Request::delete(&request.url),
            };
            for (name, value) in &request.headers {
                builder = builder.header(name, value);
            }
            let sent = match request.body {
                Some(body) => builder.body(body).map_err(network)?.send().await,
                None => builder.send().await,
            };
            let response = sent.map_err(network)?;
            let status = response.status();
            let body = response.text().await.map_err(network)?;
            Ok(HttpResponse::new(status, body))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            Err(BackendError::Unavailable)
        }
    }
}

#[cfg(feature = "hydrate")]
fn network(err: gloo_net::Error) -> BackendError {
    BackendError::Network(err.to_string())
}
