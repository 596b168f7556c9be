//! Marketplace catalog and seller product management.

#[cfg(test)]
#[path = "products_test.rs"]
mod products_test;

use crate::error::ApiError;
use crate::models::product::{Product, ProductDraft, ProductFilters, ProductPatch, ProductsResponse};
use crate::transport::{HttpBackend, Method, RequestOptions, Transport, encode_body};

use super::{discard, keyed};

pub const DEFAULT_FEATURED_LIMIT: u32 = 6;

/// Public catalog page.
///
/// # Errors
///
/// Any transport or decode failure.
pub async fn list<B: HttpBackend>(transport: &Transport<B>, filters: &ProductFilters) -> Result<ProductsResponse, ApiError> {
    let options = RequestOptions { query: filters.to_query(), ..RequestOptions::default() };
    transport.get_with("/products", &options).await
}

/// # Errors
///
/// Any transport or decode failure.
pub async fn featured<B: HttpBackend>(transport: &Transport<B>, limit: u32) -> Result<Vec<Product>, ApiError> {
    let options = RequestOptions::default().query("limit", limit);
    keyed(transport, Method::Get, "/products/featured", None, &options, "products").await
}

/// # Errors
///
/// Any transport or decode failure.
pub async fn get<B: HttpBackend>(transport: &Transport<B>, id: &str) -> Result<Product, ApiError> {
    keyed(transport, Method::Get, &format!("/products/{id}"), None, &RequestOptions::default(), "product").await
}

/// One of the caller's own products, drafts included.
///
/// # Errors
///
/// Any transport or decode failure.
pub async fn get_mine<B: HttpBackend>(transport: &Transport<B>, id: &str) -> Result<Product, ApiError> {
    keyed(transport, Method::Get, &format!("/products/my/{id}"), None, &RequestOptions::default(), "product").await
}

/// # Errors
///
/// Any transport or decode failure.
pub async fn list_mine<B: HttpBackend>(transport: &Transport<B>, include_drafts: bool) -> Result<Vec<Product>, ApiError> {
    let options = RequestOptions::default().query("include_drafts", include_drafts);
    keyed(transport, Method::Get, "/products/my", None, &options, "products").await
}

/// Create a product. Blank optional fields are dropped before sending.
///
/// # Errors
///
/// Any transport or decode failure; backend validation arrives as
/// [`ApiError::details`].
pub async fn create<B: HttpBackend>(transport: &Transport<B>, draft: &ProductDraft) -> Result<Product, ApiError> {
    let body = encode_body(&draft.clone().normalized())?;
    keyed(transport, Method::Post, "/products", Some(body), &RequestOptions::default(), "product").await
}

/// # Errors
///
/// Any transport or decode failure.
pub async fn update<B: HttpBackend>(transport: &Transport<B>, id: &str, patch: &ProductPatch) -> Result<Product, ApiError> {
    let body = encode_body(patch)?;
    keyed(transport, Method::Put, &format!("/products/{id}"), Some(body), &RequestOptions::default(), "product").await
}

/// # Errors
///
/// Any transport failure.
pub async fn delete<B: HttpBackend>(transport: &Transport<B>, id: &str) -> Result<(), ApiError> {
    discard(transport, Method::Delete, &format!("/products/{id}"), None).await
}

/// # Errors
///
/// Any transport or decode failure.
pub async fn publish<B: HttpBackend>(transport: &Transport<B>, id: &str) -> Result<Product, ApiError> {
    let path = format!("/products/{id}/publish");
    keyed(transport, Method::Post, &path, None, &RequestOptions::default(), "product").await
}

/// # Errors
///
/// Any transport or decode failure.
pub async fn unpublish<B: HttpBackend>(transport: &Transport<B>, id: &str) -> Result<Product, ApiError> {
    let path = format!("/products/{id}/unpublish");
    keyed(transport, Method::Post, &path, None, &RequestOptions::default(), "product").await
}

/// Count a download against the product.
///
/// # Errors
///
/// Any transport failure.
pub async fn record_download<B: HttpBackend>(transport: &Transport<B>, id: &str) -> Result<(), ApiError> {
    discard(transport, Method::Post, &format!("/products/{id}/download"), None).await
}
