//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration: it reads [`AuthContext`] from
//! context, calls the `api` services through its transport, and keeps
//! rendering details in `components`.
//!
//! [`AuthContext`]: crate::state::auth::AuthContext

pub mod dashboard;
pub mod google_callback;
pub mod home;
pub mod login;
pub mod register;
