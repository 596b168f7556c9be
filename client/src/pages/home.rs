//! Public landing page with featured marketplace products.

use leptos::prelude::*;

use api::models::product::Product;
use api::routes;

use crate::state::auth::AuthContext;
use crate::util::format::price_label;

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = expect_context::<AuthContext>();
    let products = RwSignal::new(Vec::<Product>::new());
    let failed = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    {
        let auth = auth.clone();
        leptos::task::spawn_local(async move {
            let limit = api::services::products::DEFAULT_FEATURED_LIMIT;
            match api::services::products::featured(auth.transport(), limit).await {
                Ok(items) => products.set(items),
                Err(err) => {
                    log::warn!("featured products unavailable: {err}");
                    failed.set(true);
                }
            }
        });
    }

    let account_link = Memo::new(move |_| {
        if auth.state.with(|state| state.user.is_some()) {
            (auth.session.redirect_route(), "My dashboard")
        } else {
            (routes::LOGIN, "Sign in")
        }
    });

    view! {
        <div class="home-page">
            <header class="home-header">
                <h1>"Workflow Marketplace"</h1>
                <a class="home-account" href=move || account_link.get().0>{move || account_link.get().1}</a>
            </header>
            <Show when=move || failed.get()>
                <p class="home-error">"Featured products could not be loaded."</p>
            </Show>
            <ul class="home-products">
                <For
                    each=move || products.get()
                    key=|product| product.id.clone()
                    children=|product| {
                        let price = price_label(&product);
                        view! {
                            <li class="home-product">
                                <h2>{product.title}</h2>
                                <p>{product.description}</p>
                                <span class="home-product__price">{price}</span>
                            </li>
                        }
                    }
                />
            </ul>
        </div>
    }
}
