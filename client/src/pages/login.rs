//! Login page.

use leptos::prelude::*;

use crate::components::credentials_form::{AuthMode, CredentialsForm};

#[component]
pub fn LoginPage() -> impl IntoView {
    view! { <CredentialsForm mode=AuthMode::Login/> }
}
