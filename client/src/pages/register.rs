use leptos::prelude::*;

use crate::components::credentials_form::{AuthMode, CredentialsForm};

#[component]
pub fn RegisterPage() -> impl IntoView {
    view! { <CredentialsForm mode=AuthMode::Register/> }
}
