//! Reusable UI component modules.

pub mod credentials_form;
