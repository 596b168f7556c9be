//! Client-held credentials.
//!
//! ARCHITECTURE
//! ============
//! [`SessionStore`] is the source of truth for "is logged in". The stock
//! implementation, [`TokenStore`], keeps the pair under two global keys of a
//! [`KeyValueStorage`] (browser `localStorage`, a session file, or memory).
//!
//! TRADE-OFFS
//! ==========
//! No expiry is tracked; an expired token is discovered when the backend
//! answers 401. Concurrent writers race and the last one wins.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use serde::{Deserialize, Serialize};

pub const TOKEN_KEY: &str = "token";
pub const REFRESH_TOKEN_KEY: &str = "refresh_token";

/// Access token plus the optional refresh token issued alongside it.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
    pub refresh_token: Option<String>,
}

impl Session {
    #[must_use]
    pub fn new(access_token: impl Into<String>, refresh_token: Option<String>) -> Self {
        Self { access_token: access_token.into(), refresh_token }
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("access_token", &"<redacted>")
            .field("refresh_token", &self.refresh_token.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

/// Durable holder of at most one active token pair.
pub trait SessionStore: Send + Sync {
    /// Replace the active pair.
    fn set(&self, session: &Session);
    /// Current access token, if any.
    fn get(&self) -> Option<String>;
    /// Current pair, if an access token is present.
    fn session(&self) -> Option<Session>;
    /// Drop the active pair.
    fn clear(&self);
}

/// Minimal string key/value storage, shaped after the Web Storage API.
pub trait KeyValueStorage: Send + Sync {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&self, key: &str, value: &str);
    fn remove_item(&self, key: &str);
}

/// [`SessionStore`] over the global `token` / `refresh_token` keys.
#[derive(Debug, Default)]
pub struct TokenStore<K> {
    storage: K,
}

impl<K: KeyValueStorage> TokenStore<K> {
    pub fn new(storage: K) -> Self {
        Self { storage }
    }

    pub fn storage(&self) -> &K {
        &self.storage
    }
}

impl<K: KeyValueStorage> SessionStore for TokenStore<K> {
    fn set(&self, session: &Session) {
        self.storage.set_item(TOKEN_KEY, &session.access_token);
        match &session.refresh_token {
            Some(refresh) => self.storage.set_item(REFRESH_TOKEN_KEY, refresh),
            None => self.storage.remove_item(REFRESH_TOKEN_KEY),
        }
    }

    fn get(&self) -> Option<String> {
        self.storage.get_item(TOKEN_KEY).filter(|t| !t.is_empty())
    }

    fn session(&self) -> Option<Session> {
        let access_token = self.get()?;
        let refresh_token = self.storage.get_item(REFRESH_TOKEN_KEY).filter(|t| !t.is_empty());
        Some(Session { access_token, refresh_token })
    }

    fn clear(&self) {
        self.storage.remove_item(TOKEN_KEY);
        self.storage.remove_item(REFRESH_TOKEN_KEY);
    }
}

/// In-process storage for tests and throwaway sessions.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.lock().unwrap_or_else(PoisonError::into_inner).get(key).cloned()
    }

    fn set_item(&self, key: &str, value: &str) {
        self.items
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_owned(), value.to_owned());
    }

    fn remove_item(&self, key: &str) {
        self.items.lock().unwrap_or_else(PoisonError::into_inner).remove(key);
    }
}
