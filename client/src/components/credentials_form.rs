//! Email + password form shared by the login and register pages.
//!
//! On success the user lands on the route for their role; on failure the
//! backend's message (with any validation details) is shown inline.

#[cfg(test)]
#[path = "credentials_form_test.rs"]
mod credentials_form_test;

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use api::routes;

use crate::state::auth::AuthContext;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthMode {
    Login,
    Register,
}

impl AuthMode {
    pub fn title(self) -> &'static str {
        match self {
            Self::Login => "Sign in",
            Self::Register => "Create an account",
        }
    }

    pub fn submit_label(self) -> &'static str {
        match self {
            Self::Login => "Sign in",
            Self::Register => "Register",
        }
    }

    pub fn busy_label(self) -> &'static str {
        match self {
            Self::Login => "Signing in...",
            Self::Register => "Creating account...",
        }
    }

    /// Link to the other form: `(href, text)`.
    pub fn alternate(self) -> (&'static str, &'static str) {
        match self {
            Self::Login => (routes::REGISTER, "Need an account? Register"),
            Self::Register => (routes::LOGIN, "Already registered? Sign in"),
        }
    }
}

/// Trim the email and require both fields.
///
/// # Errors
///
/// Returns the message to show next to the form.
pub fn validate_credentials(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || !email.contains('@') {
        return Err("Enter a valid email address.");
    }
    if password.is_empty() {
        return Err("Enter your password.");
    }
    Ok((email.to_owned(), password.to_owned()))
}

#[component]
pub fn CredentialsForm(mode: AuthMode) -> impl IntoView {
    let auth = expect_context::<AuthContext>();
    let navigate = use_navigate();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (email_value, password_value) = match validate_credentials(&email.get(), &password.get()) {
            Ok(pair) => pair,
            Err(msg) => {
                error.set(Some(msg.to_owned()));
                return;
            }
        };
        busy.set(true);
        error.set(None);

        #[cfg(feature = "hydrate")]
        {
            let auth = auth.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let result = match mode {
                    AuthMode::Login => auth.session.login(&email_value, &password_value).await,
                    AuthMode::Register => auth.session.register(&email_value, &password_value).await,
                };
                auth.sync();
                match result {
                    Ok(_) => navigate(auth.session.redirect_route(), NavigateOptions::default()),
                    Err(api::AuthError::Superseded) => {}
                    Err(err) => error.set(Some(err.to_string())),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (&auth, &navigate, email_value, password_value);
    };

    let (alt_href, alt_text) = mode.alternate();

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>{mode.title()}</h1>
                <Show when=move || error.get().is_some()>
                    <p class="auth-error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <form class="auth-form" on:submit=on_submit>
                    <label for="email">"Email"</label>
                    <input
                        id="email"
                        class="auth-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <label for="password">"Password"</label>
                    <input
                        id="password"
                        class="auth-input"
                        type="password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="auth-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { mode.busy_label() } else { mode.submit_label() }}
                    </button>
                </form>
                <a class="auth-link" href=alt_href>{alt_text}</a>
            </div>
        </div>
    }
}
