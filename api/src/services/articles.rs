//! Articles queued for summarization.

#[cfg(test)]
#[path = "articles_test.rs"]
mod articles_test;

use serde_json::json;

use crate::error::ApiError;
use crate::models::article::Article;
use crate::transport::{HttpBackend, Method, RequestOptions, Transport};

use super::{discard, keyed};

/// # Errors
///
/// Any transport or decode failure.
pub async fn list<B: HttpBackend>(transport: &Transport<B>) -> Result<Vec<Article>, ApiError> {
    keyed(transport, Method::Get, "/articles", None, &RequestOptions::default(), "articles").await
}

/// # Errors
///
/// Any transport or decode failure.
pub async fn submit<B: HttpBackend>(transport: &Transport<B>, url: &str) -> Result<Article, ApiError> {
    let body = json!({ "url": url });
    keyed(transport, Method::Post, "/articles", Some(body), &RequestOptions::default(), "article").await
}

/// # Errors
///
/// Any transport failure.
pub async fn delete<B: HttpBackend>(transport: &Transport<B>, id: &str) -> Result<(), ApiError> {
    discard(transport, Method::Delete, &format!("/articles/{id}"), None).await
}
