//! Auth session manager: who is logged in, and how that changes.
//!
//! SYSTEM CONTEXT
//! ==============
//! One [`AuthSession`] is built at startup and shared (`Arc`) by every page
//! or command. It owns the [`Transport`], so the token it stores is the token
//! every later request carries.
//!
//! DESIGN
//! ======
//! Each explicit action (`login`, `register`, `complete_oauth`, `logout`)
//! bumps a monotonic generation. Async work remembers the generation it
//! started under and only applies its result if nothing newer began in the
//! meantime, so a slow profile fetch from startup can never resurrect a user
//! that was just logged out.
//!
//! Failures of explicit actions are returned as [`AuthError`] values with a
//! display-ready message.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use serde::Deserialize;
use serde_json::{Value, json};

use crate::error::{ApiError, AuthError};
use crate::models::user::User;
use crate::routes;
use crate::services::decode_key;
use crate::session::Session;
use crate::transport::{HttpBackend, Method, RequestOptions, Transport};

pub const LOGIN_FAILED: &str = "Login failed";
pub const REGISTRATION_FAILED: &str = "Registration failed";
pub const OAUTH_FAILED: &str = "Google sign-in failed";

/// Snapshot of identity. `loading` means "unknown yet", not "logged out".
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub user: Option<User>,
    pub loading: bool,
}

impl AuthState {
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}

/// Success payload of the credential endpoints.
#[derive(Debug, Deserialize)]
struct AuthGrant {
    #[serde(default)]
    token: Option<String>,
    #[serde(default, rename = "refreshToken", alias = "refresh_token")]
    refresh_token: Option<String>,
    #[serde(default)]
    user: Option<User>,
}

pub struct AuthSession<B> {
    transport: Transport<B>,
    generation: AtomicU64,
    state: Mutex<AuthState>,
}

impl<B: HttpBackend> AuthSession<B> {
    /// Wrap a transport. Identity starts as loading when a token is stored.
    pub fn new(transport: Transport<B>) -> Self {
        let loading = transport.store().get().is_some();
        Self { transport, generation: AtomicU64::new(0), state: Mutex::new(AuthState { user: None, loading }) }
    }

    pub fn transport(&self) -> &Transport<B> {
        &self.transport
    }

    pub fn state(&self) -> AuthState {
        self.lock().clone()
    }

    pub fn user(&self) -> Option<User> {
        self.lock().user.clone()
    }

    /// Landing page for the current user's role.
    pub fn redirect_route(&self) -> &'static str {
        let state = self.lock();
        routes::redirect_route(state.user.as_ref().and_then(|u| u.role.as_ref()))
    }

    /// Resolve the stored token into a user.
    ///
    /// A failed profile fetch drops the token: the stored credential is not
    /// usable. A result that arrives after a newer auth action is ignored.
    pub async fn init(&self) {
        let generation = self.current();
        if self.transport.store().get().is_none() {
            self.lock().loading = false;
            return;
        }

        let result = self.fetch_profile().await;
        if self.is_stale(generation) {
            log::debug!("discarding profile fetch superseded by a newer auth action");
            return;
        }

        let mut state = self.lock();
        state.loading = false;
        match result {
            Ok(user) => state.user = Some(user),
            Err(err) => {
                log::warn!("stored session rejected: {err}");
                self.transport.store().clear();
                state.user = None;
            }
        }
    }

    /// # Errors
    ///
    /// [`AuthError::Rejected`] when the backend refuses the credentials,
    /// [`AuthError::MissingToken`] on a tokenless success, and
    /// [`AuthError::Superseded`] when a newer auth action started meanwhile.
    pub async fn login(&self, email: &str, password: &str) -> Result<User, AuthError> {
        self.authenticate("/auth/login", email, password, LOGIN_FAILED).await
    }

    /// # Errors
    ///
    /// Same as [`AuthSession::login`].
    pub async fn register(&self, email: &str, password: &str) -> Result<User, AuthError> {
        self.authenticate("/auth/register", email, password, REGISTRATION_FAILED).await
    }

    /// Exchange a Google authorization code for a session.
    ///
    /// # Errors
    ///
    /// Same as [`AuthSession::login`].
    pub async fn complete_oauth(&self, code: &str) -> Result<User, AuthError> {
        let generation = self.bump();
        let options = RequestOptions::default().query("code", code).without_auth_redirect();
        let result = self.transport.exchange(Method::Get, "/auth/google/callback", None, &options).await;
        self.establish(generation, result, OAUTH_FAILED).await
    }

    /// Forget the session and leave for the login page.
    pub fn logout(&self) {
        self.bump();
        self.transport.store().clear();
        *self.lock() = AuthState::default();
        self.transport.navigator().redirect(routes::LOGIN);
    }

    async fn authenticate(&self, path: &str, email: &str, password: &str, fallback: &str) -> Result<User, AuthError> {
        let generation = self.bump();
        let body = json!({ "email": email, "password": password });
        let options = RequestOptions::default().without_auth_redirect();
        let result = self.transport.exchange(Method::Post, path, Some(body), &options).await;
        self.establish(generation, result, fallback).await
    }

    async fn establish(
        &self,
        generation: u64,
        result: Result<(u16, Value), ApiError>,
        fallback: &str,
    ) -> Result<User, AuthError> {
        if self.is_stale(generation) {
            return Err(AuthError::Superseded);
        }
        let grant = result
            .and_then(|(status, payload)| {
                serde_json::from_value::<AuthGrant>(payload).map_err(|e| ApiError::decode(status, &e))
            })
            .map_err(|err| {
                self.lock().loading = false;
                AuthError::rejected(err, fallback)
            })?;

        let Some(token) = grant.token.filter(|t| !t.is_empty()) else {
            self.lock().loading = false;
            return Err(AuthError::MissingToken);
        };
        self.transport.store().set(&Session::new(token, grant.refresh_token));

        let user = match grant.user {
            Some(user) => user,
            None => match self.fetch_profile().await {
                Ok(user) => user,
                Err(_) if self.is_stale(generation) => return Err(AuthError::Superseded),
                Err(err) => {
                    // A token without a usable profile is not a session.
                    self.transport.store().clear();
                    self.lock().loading = false;
                    return Err(AuthError::rejected(err, fallback));
                }
            },
        };
        if self.is_stale(generation) {
            return Err(AuthError::Superseded);
        }

        *self.lock() = AuthState { user: Some(user.clone()), loading: false };
        Ok(user)
    }

    async fn fetch_profile(&self) -> Result<User, ApiError> {
        let (status, payload) = self.transport.exchange(Method::Get, "/auth/me", None, &RequestOptions::default()).await?;
        decode_key(status, payload, "user")
    }

    fn bump(&self) -> u64 {
        self.generation.fetch_add(1, Ordering::SeqCst) + 1
    }

    fn current(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }

    fn is_stale(&self, generation: u64) -> bool {
        self.current() != generation
    }

    fn lock(&self) -> MutexGuard<'_, AuthState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
