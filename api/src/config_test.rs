use super::*;

/// # Safety
/// Tests that touch the process environment use a single variable and restore it.
unsafe fn clear_api_env() {
    unsafe { std::env::remove_var(API_URL_ENV) };
}

#[test]
fn default_points_at_local_backend() {
    assert_eq!(ApiConfig::default().base_url, DEFAULT_API_URL);
}

#[test]
fn new_trims_trailing_slashes() {
    assert_eq!(ApiConfig::new("https://api.example.test/v1//").base_url, "https://api.example.test/v1");
}

#[test]
fn url_joins_leading_slash_paths() {
    let cfg = ApiConfig::new("https://api.example.test/api");
    assert_eq!(cfg.url("/auth/me"), "https://api.example.test/api/auth/me");
}

#[test]
fn url_inserts_separator_for_bare_paths() {
    let cfg = ApiConfig::new("https://api.example.test/api/");
    assert_eq!(cfg.url("products"), "https://api.example.test/api/products");
}

#[test]
fn from_value_blank_falls_back_to_default() {
    assert_eq!(ApiConfig::from_value(Some("   ")), ApiConfig::default());
    assert_eq!(ApiConfig::from_value(None), ApiConfig::default());
}

#[test]
fn from_env_reads_override_then_default() {
    unsafe {
        clear_api_env();
        std::env::set_var(API_URL_ENV, "https://market.example.test/api/");
    }
    assert_eq!(ApiConfig::from_env().base_url, "https://market.example.test/api");

    unsafe { clear_api_env() };
    assert_eq!(ApiConfig::from_env().base_url, DEFAULT_API_URL);
}
