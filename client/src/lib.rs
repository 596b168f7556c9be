//! # client
//!
//! Leptos + WASM frontend for the workflow marketplace and bot dashboard.
//!
//! This crate contains pages, the auth guard, and the browser adapters
//! (`gloo-net`, `localStorage`, `window.location`) that plug into the
//! `api` crate's transport and session manager.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install browser logging and hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
