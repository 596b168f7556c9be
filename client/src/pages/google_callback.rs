//! Google OAuth return page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Google redirects here with `code` and `state`. The code is exchanged
//! exactly once; on success the browser performs a full navigation to the
//! `state` path so the whole app restarts with the new session.

#[cfg(test)]
#[path = "google_callback_test.rs"]
mod google_callback_test;

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use api::routes;

use crate::state::auth::AuthContext;

pub const MISSING_CODE: &str = "Missing Google authorization code.";

/// Validate the callback query: `(code, return_path)`.
///
/// # Errors
///
/// Returns [`MISSING_CODE`] when no usable code is present.
pub fn callback_params(code: Option<String>, state: Option<String>) -> Result<(String, String), &'static str> {
    let code = code.map(|c| c.trim().to_owned()).filter(|c| !c.is_empty()).ok_or(MISSING_CODE)?;
    let return_to = routes::sanitize_return_path(state.as_deref()).to_owned();
    Ok((code, return_to))
}

#[component]
pub fn GoogleCallbackPage() -> impl IntoView {
    let auth = expect_context::<AuthContext>();
    let query = use_query_map();
    let error = RwSignal::new(None::<String>);
    let started = StoredValue::new(false);

    Effect::new(move || {
        if started.get_value() {
            return;
        }
        started.set_value(true);

        let params = query.with(|q| callback_params(q.get("code"), q.get("state")));
        let (code, return_to) = match params {
            Ok(pair) => pair,
            Err(msg) => {
                error.set(Some(msg.to_owned()));
                return;
            }
        };

        #[cfg(feature = "hydrate")]
        {
            let auth = auth.clone();
            leptos::task::spawn_local(async move {
                match auth.session.complete_oauth(&code).await {
                    Ok(_) => auth.transport().navigator().redirect(&return_to),
                    Err(api::AuthError::Superseded) => {}
                    Err(err) => error.set(Some(err.to_string())),
                }
                auth.sync();
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (&auth, code, return_to);
    });

    view! {
        <div class="auth-page">
            <div class="auth-card">
                {move || match error.get() {
                    Some(message) => view! {
                        <p class="auth-error">"Sign-in failed"</p>
                        <p>{message}</p>
                    }
                    .into_any(),
                    None => view! { <p class="auth-loading">"Completing Google sign-in..."</p> }.into_any(),
                }}
            </div>
        </div>
    }
}
