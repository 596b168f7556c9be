//! Utility helpers shared across client UI modules.

pub mod auth;
pub mod format;
