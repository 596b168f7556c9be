//! Client route paths and role-based landing routes.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use crate::models::user::Role;

pub const ROOT: &str = "/";
pub const LOGIN: &str = "/login";
pub const REGISTER: &str = "/register";
pub const DASHBOARD: &str = "/dashboard";
pub const SELLER: &str = "/seller";
pub const SELLER_APPLY: &str = "/seller/apply";
pub const ADMIN: &str = "/admin";
pub const GOOGLE_CALLBACK: &str = "/auth/callback/google";

/// Landing route after sign-in. Total over every role; no role means `/`.
#[must_use]
pub fn redirect_route(role: Option<&Role>) -> &'static str {
    match role {
        Some(Role::Admin) => ADMIN,
        Some(Role::Seller) => SELLER,
        Some(Role::User) => DASHBOARD,
        Some(Role::Unknown) | None => ROOT,
    }
}

/// Only same-origin absolute paths are followed after an OAuth round trip.
#[must_use]
pub fn sanitize_return_path(raw: Option<&str>) -> &str {
    match raw.map(str::trim) {
        Some(path) if path.starts_with('/') && !path.starts_with("//") => path,
        _ => ROOT,
    }
}
