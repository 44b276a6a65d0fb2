//! Wishlist page: saved product snapshots.
//!
//! Entries render from the snapshot captured at save time — no refetch.
//! The heart on each card is a toggle, so "remove" here is the same
//! operation that added the product in the first place.

use leptos::prelude::*;

use crate::state::cart::{StoreSignal, add_to_cart, toggle_wishlist};
use crate::state::ui::UiState;
use crate::util::format::format_price;

#[component]
pub fn WishlistPage() -> impl IntoView {
    let store = expect_context::<StoreSignal>();
    let ui = expect_context::<RwSignal<UiState>>();

    let count = move || store.with(cart::CartStore::wishlist_count);
    let is_empty = move || count() == 0;

    let cards = move || {
        store
            .with(|state| state.wishlist().to_vec())
            .into_iter()
            .map(|product| {
                let detail_href = format!("/product/{}", product.slug);
                let remove_product = product.clone();
                let bag_product = product.clone();
                view! {
                    <div class="wishlist-card">
                        <a class="wishlist-card__media" href=detail_href.clone()>
                            <img src=product.primary_image().to_owned() alt=product.name.clone()/>
                        </a>
                        <div class="wishlist-card__body">
                            <span class="wishlist-card__brand">
                                {product.brand_name.clone().unwrap_or_default()}
                            </span>
                            <a class="wishlist-card__name" href=detail_href>
                                {product.name.clone()}
                            </a>
                            <span class="wishlist-card__price">{format_price(product.price)}</span>
                        </div>
                        <div class="wishlist-card__actions">
                            <button
                                class="wishlist-card__bag"
                                on:click=move |_| add_to_cart(store, ui, bag_product.clone(), 1)
                            >
                                "Add to Bag"
                            </button>
                            <button
                                class="wishlist-card__remove"
                                on:click=move |_| {
                                    toggle_wishlist(store, ui, remove_product.clone());
                                }
                            >
                                "Remove"
                            </button>
                        </div>
                    </div>
                }
            })
            .collect_view()
    };

    view! {
        <div class="wishlist-page">
            <div class="wishlist-page__hero">
                <h1>"Wishlist"</h1>
                <span class="wishlist-page__count">{count} " saved"</span>
            </div>
            <Show
                when=move || !is_empty()
                fallback=|| {
                    view! {
                        <div class="wishlist-page__empty">
                            <h2>"Nothing saved yet."</h2>
                            <p>"Tap the heart on any product to keep it here."</p>
                            <a class="wishlist-page__browse" href="/shop">"Browse the shop"</a>
                        </div>
                    }
                }
            >
                <div class="wishlist-page__grid">{cards}</div>
            </Show>
        </div>
    }
}
