//! Leptos product listing page.

use leptos::*;

use vitrine_catalog::{CatalogLoader, ListingView, ProductCard, derive_view};

use crate::frontend::api;

/// Main application component.
#[component]
pub fn App() -> impl IntoView {
    view! { <ProductListPage/> }
}

/// Product list with a submit-only search form.
#[component]
fn ProductListPage() -> impl IntoView {
    // No reactive source: the catalog is read exactly once per mount. Leptos
    // drops the resource on unmount, so a late response is never applied.
    let catalog = create_local_resource(
        || (),
        |_| async move {
            let transport = api::catalog_transport();
            let mut loader = CatalogLoader::new();
            loader.load(&transport).await;
            loader.into_state()
        },
    );

    let (term, set_term) = create_signal(String::new());
    let search_input = create_node_ref::<html::Input>();

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        if let Some(input) = search_input.get() {
            set_term.set(input.value());
        }
    };

    view! {
        <div class="app">
            <header>
                <h1>"Products"</h1>
                <form class="search" on:submit=on_submit>
                    <input type="search" placeholder="Search" node_ref=search_input/>
                    <button type="submit">"Search"</button>
                </form>
            </header>

            <main>
                {move || {
                    catalog.with(|state| term.with(|term| listing_view(derive_view(state, term))))
                }}
            </main>
        </div>
    }
}

fn listing_view(listing: ListingView<'_>) -> View {
    match listing {
        ListingView::Pending => ().into_view(),
        ListingView::Failed { message } => view! { <p class="error">{message}</p> }.into_view(),
        ListingView::Products { cards, count_label } => view! {
            <section class="product-list">
                <p class="count" data-testid="total-quantity-label">{count_label}</p>
                <ul>
                    {cards.iter().map(product_card).collect_view()}
                </ul>
            </section>
        }
        .into_view(),
    }
}

fn product_card(card: &ProductCard<'_>) -> View {
    let key = card.key.to_string();
    let title = card.product.title().to_string();
    let price = card
        .product
        .field("price")
        .map(|price| match price {
            serde_json::Value::String(s) => s.clone(),
            other => other.to_string(),
        });

    view! {
        <li class="product" data-key=key>
            <h3>{title}</h3>
            {price.map(|price| view! { <span class="price">{price}</span> })}
        </li>
    }
    .into_view()
}
