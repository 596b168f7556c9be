//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route components should apply identical unauthenticated redirect behavior.
//! While identity is loading a guarded page shows a placeholder; once loaded
//! without a user it redirects to `/login` and renders nothing protected.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use api::routes;
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::auth::{AuthContext, AuthState};

/// What a guarded route renders for a given auth state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardView {
    Loading,
    Hidden,
    Content,
}

pub fn should_redirect_unauth(state: &AuthState) -> bool {
    !state.loading && state.user.is_none()
}

pub fn guard_view(state: &AuthState) -> GuardView {
    if state.loading {
        GuardView::Loading
    } else if state.user.is_some() {
        GuardView::Content
    } else {
        GuardView::Hidden
    }
}

/// Redirect to `/login` whenever auth has loaded and no user is present.
pub fn install_unauth_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_redirect_unauth(&auth.get()) {
            navigate(routes::LOGIN, NavigateOptions::default());
        }
    });
}

/// Render `children` only for a signed-in user.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<AuthContext>();
    install_unauth_redirect(auth.state, use_navigate());

    move || match guard_view(&auth.state.get()) {
        GuardView::Loading => view! { <p class="auth-loading">"Loading..."</p> }.into_any(),
        GuardView::Hidden => ().into_any(),
        GuardView::Content => children().into_any(),
    }
}
