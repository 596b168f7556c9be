//! Client-side API core for the workflow marketplace and bot dashboard.
//!
//! This crate owns everything a frontend needs to talk to the REST backend:
//! the envelope/error wire model, the HTTP transport, the token store, and
//! the auth session manager. It has no browser or runtime dependency; the
//! `client` crate plugs in `gloo-net` + `localStorage`, the `cli` crate plugs
//! in `reqwest` + a session file.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every page and command goes through [`transport::Transport`]. Identity is
//! owned by a single [`auth::AuthSession`] constructed at startup and shared
//! by reference with every consumer.

pub mod auth;
pub mod config;
pub mod envelope;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;
pub mod session;
pub mod transport;

#[cfg(test)]
mod test_support;

pub use auth::{AuthSession, AuthState};
pub use config::ApiConfig;
pub use error::{ApiError, AuthError, BackendError, ErrorDetail};
pub use models::user::{Role, SellerStatus, User};
pub use session::{KeyValueStorage, MemoryStorage, Session, SessionStore, TokenStore};
pub use transport::{HttpBackend, HttpRequest, HttpResponse, Method, Navigator, RequestOptions, Transport};
