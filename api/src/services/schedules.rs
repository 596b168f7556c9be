//! Recurring fetch schedules.

#[cfg(test)]
#[path = "schedules_test.rs"]
mod schedules_test;

use serde_json::Value;

use crate::error::ApiError;
use crate::models::schedule::{NewSchedule, Schedule, SchedulePatch};
use crate::transport::{HttpBackend, Method, RequestOptions, Transport, encode_body};

use super::{decode_key, discard, keyed};

/// All schedules of the caller. A payload without the list reads as empty.
///
/// # Errors
///
/// Any transport or decode failure.
pub async fn list<B: HttpBackend>(transport: &Transport<B>) -> Result<Vec<Schedule>, ApiError> {
    let (status, payload) = transport.exchange(Method::Get, "/schedules", None, &RequestOptions::default()).await?;
    match payload.get("schedules") {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(_) => decode_key(status, payload, "schedules"),
    }
}

/// # Errors
///
/// Any transport or decode failure.
pub async fn create<B: HttpBackend>(transport: &Transport<B>, schedule: &NewSchedule) -> Result<Schedule, ApiError> {
    let body = encode_body(schedule)?;
    keyed(transport, Method::Post, "/schedules", Some(body), &RequestOptions::default(), "schedule").await
}

/// # Errors
///
/// Any transport or decode failure.
pub async fn update<B: HttpBackend>(transport: &Transport<B>, id: &str, patch: &SchedulePatch) -> Result<Schedule, ApiError> {
    let body = encode_body(patch)?;
    keyed(transport, Method::Put, &format!("/schedules/{id}"), Some(body), &RequestOptions::default(), "schedule").await
}

/// # Errors
///
/// Any transport failure.
pub async fn delete<B: HttpBackend>(transport: &Transport<B>, id: &str) -> Result<(), ApiError> {
    discard(transport, Method::Delete, &format!("/schedules/{id}"), None).await
}
