//! Custom tool requests.

#[cfg(test)]
#[path = "tools_test.rs"]
mod tools_test;

use serde_json::json;

use crate::error::ApiError;
use crate::models::tool::ToolRequest;
use crate::transport::{HttpBackend, Method, RequestOptions, Transport};

use super::keyed;

/// # Errors
///
/// Any transport or decode failure.
pub async fn list<B: HttpBackend>(transport: &Transport<B>) -> Result<Vec<ToolRequest>, ApiError> {
    keyed(transport, Method::Get, "/tools", None, &RequestOptions::default(), "tools").await
}

/// Ask for a new tool described in free text.
///
/// # Errors
///
/// Any transport or decode failure.
pub async fn request<B: HttpBackend>(transport: &Transport<B>, description: &str) -> Result<ToolRequest, ApiError> {
    let body = json!({ "request_payload": { "description": description } });
    keyed(transport, Method::Post, "/tools", Some(body), &RequestOptions::default(), "tool").await
}
