//! Backend base URL configuration.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const API_URL_ENV: &str = "MARKETPLACE_API_URL";
pub const DEFAULT_API_URL: &str = "http://localhost:3001/api";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}

impl ApiConfig {
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        Self { base_url: base_url.trim_end_matches('/').to_owned() }
    }

    /// Build config from the runtime environment.
    ///
    /// Optional:
    /// - `MARKETPLACE_API_URL`: default `http://localhost:3001/api`
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_value(std::env::var(API_URL_ENV).ok().as_deref())
    }

    /// Build config from the value baked in at compile time.
    ///
    /// Browser bundles have no process environment, so the WASM client reads
    /// `MARKETPLACE_API_URL` when it is built instead.
    #[must_use]
    pub fn from_build_env() -> Self {
        Self::from_value(option_env!("MARKETPLACE_API_URL"))
    }

    fn from_value(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            Some(value) if !value.is_empty() => Self::new(value),
            _ => Self::default(),
        }
    }

    /// Join a backend-relative path onto the base URL.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{path}", self.base_url)
        } else {
            format!("{}/{path}", self.base_url)
        }
    }
}
