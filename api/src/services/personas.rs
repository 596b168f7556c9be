//! The caller's writing persona.

#[cfg(test)]
#[path = "personas_test.rs"]
mod personas_test;

use crate::error::ApiError;
use crate::models::persona::{Persona, PersonaUpdate};
use crate::transport::{HttpBackend, Method, RequestOptions, Transport, encode_body};

use super::keyed;

/// # Errors
///
/// Any transport or decode failure.
pub async fn get<B: HttpBackend>(transport: &Transport<B>) -> Result<Persona, ApiError> {
    keyed(transport, Method::Get, "/personas", None, &RequestOptions::default(), "persona").await
}

/// # Errors
///
/// Any transport or decode failure.
pub async fn update<B: HttpBackend>(transport: &Transport<B>, update: &PersonaUpdate) -> Result<Persona, ApiError> {
    let body = encode_body(update)?;
    keyed(transport, Method::Put, "/personas", Some(body), &RequestOptions::default(), "persona").await
}
