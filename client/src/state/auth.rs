//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! [`AuthContext`] is provided once by `App`. It pairs the shared
//! [`AuthSession`] (which owns the transport and the token store) with a
//! signal mirror of its [`AuthState`] that route guards and identity-aware
//! views subscribe to.
//!
//! DESIGN
//! ======
//! The signal starts as loading on both server and client: the server cannot
//! see `localStorage`, so rendering "logged out" there would not hydrate.
//! The browser resolves identity after mount and publishes it with
//! [`AuthContext::sync`].

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::sync::Arc;

use api::{ApiConfig, AuthSession, Navigator, SessionStore, TokenStore, Transport};
use leptos::prelude::*;

pub use api::AuthState;

use crate::net::backend::GlooBackend;
use crate::net::browser::{BrowserNavigator, LocalStorage};

/// Identity before the browser has checked for a stored session.
pub fn unresolved_state() -> AuthState {
    AuthState { user: None, loading: true }
}

#[derive(Clone)]
pub struct AuthContext {
    pub session: Arc<AuthSession<GlooBackend>>,
    pub state: RwSignal<AuthState>,
}

impl AuthContext {
    pub fn new() -> Self {
        let store: Arc<dyn SessionStore> = Arc::new(TokenStore::new(LocalStorage));
        let navigator: Arc<dyn Navigator> = Arc::new(BrowserNavigator);
        let transport = Transport::new(ApiConfig::from_build_env(), GlooBackend, store, navigator);
        Self { session: Arc::new(AuthSession::new(transport)), state: RwSignal::new(unresolved_state()) }
    }

    pub fn transport(&self) -> &Transport<GlooBackend> {
        self.session.transport()
    }

    /// Resolve the stored token into a user once the app is mounted.
    pub fn start(&self) {
        #[cfg(feature = "hydrate")]
        {
            let ctx = self.clone();
            leptos::task::spawn_local(async move {
                ctx.session.init().await;
                ctx.sync();
            });
        }
    }

    /// Publish the session's current state to subscribers.
    pub fn sync(&self) {
        self.state.set(self.session.state());
    }

    pub fn logout(&self) {
        self.session.logout();
        self.sync();
    }
}

impl Default for AuthContext {
    fn default() -> Self {
        Self::new()
    }
}
