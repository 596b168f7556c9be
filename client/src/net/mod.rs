//! Browser adapters for the `api` crate.
//!
//! SYSTEM CONTEXT
//! ==============
//! `backend` performs HTTP through `gloo-net`; `browser` provides the
//! `localStorage` token storage and full-page navigation. Outside the
//! `hydrate` build they degrade to inert stubs so SSR can render the shell.

pub mod backend;
pub mod browser;
