//! Signed-in dashboard: identity, submitted articles, logout.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the authenticated landing route for every role. Content renders
//! inside `RequireAuth`, so article loading only starts once a user exists.

use leptos::prelude::*;

use api::models::article::Article;

use crate::state::auth::AuthContext;
use crate::util::auth::RequireAuth;
use crate::util::format::{article_status_label, role_label};

#[component]
pub fn DashboardPage() -> impl IntoView {
    view! {
        <RequireAuth>
            <DashboardContent/>
        </RequireAuth>
    }
}

#[component]
fn DashboardContent() -> impl IntoView {
    let auth = expect_context::<AuthContext>();
    let articles = RwSignal::new(Vec::<Article>::new());
    let info = RwSignal::new(None::<String>);
    let new_url = RwSignal::new(String::new());

    load_articles(&auth, articles, info);

    let submit_ctx = auth.clone();
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let url = new_url.get().trim().to_owned();
        if url.is_empty() {
            info.set(Some("Paste an article URL first.".to_owned()));
            return;
        }
        submit_article(&submit_ctx, url, articles, info);
        new_url.set(String::new());
    };

    let logout_ctx = auth.clone();
    let on_logout = move |_| logout_ctx.logout();

    let identity = move || {
        auth.state
            .get()
            .user
            .map(|u| format!("{} ({})", u.email, role_label(u.role)))
            .unwrap_or_default()
    };

    view! {
        <div class="dashboard-page">
            <header class="dashboard-header">
                <span class="dashboard-identity">{identity}</span>
                <button class="dashboard-logout" on:click=on_logout>"Log out"</button>
            </header>
            <form class="dashboard-submit" on:submit=on_submit>
                <input
                    class="dashboard-input"
                    type="url"
                    placeholder="https://example.com/article"
                    prop:value=move || new_url.get()
                    on:input=move |ev| new_url.set(event_target_value(&ev))
                />
                <button type="submit">"Summarize"</button>
            </form>
            <Show when=move || info.get().is_some()>
                <p class="dashboard-info">{move || info.get().unwrap_or_default()}</p>
            </Show>
            <ul class="dashboard-articles">
                <For
                    each=move || articles.get()
                    key=|article| article.id.clone()
                    children=|article| {
                        view! {
                            <li class="dashboard-article">
                                <span class="dashboard-article__title">{article.label().to_owned()}</span>
                                <span class="dashboard-article__status">{article_status_label(article.status)}</span>
                            </li>
                        }
                    }
                />
            </ul>
        </div>
    }
}

fn load_articles(auth: &AuthContext, articles: RwSignal<Vec<Article>>, info: RwSignal<Option<String>>) {
    #[cfg(feature = "hydrate")]
    {
        let auth = auth.clone();
        leptos::task::spawn_local(async move {
            match api::services::articles::list(auth.transport()).await {
                Ok(items) => articles.set(items),
                Err(err) => info.set(Some(err.display_message("Could not load articles"))),
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = (auth, articles, info);
}

fn submit_article(auth: &AuthContext, url: String, articles: RwSignal<Vec<Article>>, info: RwSignal<Option<String>>) {
    #[cfg(feature = "hydrate")]
    {
        let auth = auth.clone();
        leptos::task::spawn_local(async move {
            match api::services::articles::submit(auth.transport(), &url).await {
                Ok(article) => {
                    articles.update(|items| items.insert(0, article));
                    info.set(None);
                }
                Err(err) => info.set(Some(err.display_message("Could not submit article"))),
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = (auth, url, articles, info);
}
