//! Product card used by the shop grid, home rails, and related-product
//! strips.
//!
//! The card is the main place customers add to cart and toggle the
//! wishlist without leaving a listing, so both actions route through
//! `state::cart` and reflect immediately in the header badges.

use cart::Product;
use leptos::prelude::*;

use crate::state::cart::{StoreSignal, add_to_cart, toggle_wishlist};
use crate::state::ui::UiState;
use crate::util::format::format_price;

/// One product tile: image, brand, name, price, wishlist heart, add button.
#[component]
pub fn ProductCard(product: Product) -> impl IntoView {
    let store = expect_context::<StoreSignal>();
    let ui = expect_context::<RwSignal<UiState>>();

    let product_id = product.id;
    let detail_href = format!("/product/{}", product.slug);
    let image = product.primary_image().to_owned();
    let name = product.name.clone();
    let brand = product.brand_name.clone().unwrap_or_default();
    let price = format_price(product.price);

    let in_wishlist = move || store.with(|state| state.is_in_wishlist(product_id));

    let wishlist_product = product.clone();
    let on_wishlist = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        toggle_wishlist(store, ui, wishlist_product.clone());
    };

    let cart_product = product.clone();
    let on_add = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        add_to_cart(store, ui, cart_product.clone(), 1);
    };

    view! {
        <a class="product-card" href=detail_href>
            <div class="product-card__media">
                <img src=image alt=name.clone() loading="lazy"/>
                <button
                    class="product-card__wishlist"
                    class=("product-card__wishlist--active", in_wishlist)
                    aria-label="Toggle wishlist"
                    on:click=on_wishlist
                >
                    "♥"
                </button>
            </div>
            <div class="product-card__body">
                <Show when={
                    let brand = brand.clone();
                    move || !brand.is_empty()
                }>
                    <span class="product-card__brand">{brand.clone()}</span>
                </Show>
                <h3 class="product-card__name">{name.clone()}</h3>
                <div class="product-card__row">
                    <span class="product-card__price">{price.clone()}</span>
                    <button class="product-card__add" on:click=on_add>
                        "Add to Bag"
                    </button>
                </div>
            </div>
        </a>
    }
}
