//! Full-page cart view.
//!
//! The drawer's bigger sibling: the same live store rows plus an order
//! summary. Totals come from the store's derived values, never from local
//! arithmetic, so this page cannot disagree with the drawer or checkout.

use leptos::prelude::*;

use crate::state::cart::{StoreSignal, remove_from_cart, update_quantity};
use crate::util::format::format_price;

#[component]
pub fn CartPage() -> impl IntoView {
    let store = expect_context::<StoreSignal>();

    let is_empty = move || store.with(|state| state.items().is_empty());
    let count = move || store.with(cart::CartStore::cart_count);
    let subtotal = move || format_price(store.with(cart::CartStore::cart_total));

    let rows = move || {
        store
            .with(|state| state.items().to_vec())
            .into_iter()
            .map(|item| {
                let id = item.product.id;
                let quantity = i64::from(item.quantity);
                let detail_href = format!("/product/{}", item.product.slug);
                view! {
                    <div class="cart-page__row">
                        <a class="cart-page__media" href=detail_href.clone()>
                            <img
                                src=item.product.primary_image().to_owned()
                                alt=item.product.name.clone()
                            />
                        </a>
                        <div class="cart-page__info">
                            <span class="cart-page__brand">
                                {item.product.brand_name.clone().unwrap_or_default()}
                            </span>
                            <a class="cart-page__name" href=detail_href>
                                {item.product.name.clone()}
                            </a>
                            <span class="cart-page__unit">
                                {format_price(item.product.price)} " each"
                            </span>
                        </div>
                        <div class="quantity-stepper">
                            <button on:click=move |_| update_quantity(store, id, quantity - 1)>
                                "−"
                            </button>
                            <span>{item.quantity}</span>
                            <button on:click=move |_| update_quantity(store, id, quantity + 1)>
                                "+"
                            </button>
                        </div>
                        <span class="cart-page__line-total">{format_price(item.line_total())}</span>
                        <button
                            class="cart-page__remove"
                            aria-label="Remove from cart"
                            on:click=move |_| remove_from_cart(store, id)
                        >
                            "Remove"
                        </button>
                    </div>
                }
            })
            .collect_view()
    };

    view! {
        <div class="cart-page">
            <div class="cart-page__hero">
                <h1>"Your Bag"</h1>
                <span class="cart-page__count">{count} " items"</span>
            </div>
            <Show
                when=move || !is_empty()
                fallback=|| {
                    view! {
                        <div class="cart-page__empty">
                            <h2>"Your bag is empty."</h2>
                            <a class="cart-page__browse" href="/shop">"Browse the shop"</a>
                        </div>
                    }
                }
            >
                <div class="cart-page__layout">
                    <div class="cart-page__rows">{rows}</div>
                    <aside class="order-summary">
                        <h2>"Order Summary"</h2>
                        <div class="order-summary__line">
                            <span>"Subtotal"</span>
                            <span>{subtotal}</span>
                        </div>
                        <div class="order-summary__line">
                            <span>"Shipping"</span>
                            <span>"Free"</span>
                        </div>
                        <div class="order-summary__line order-summary__line--total">
                            <span>"Total"</span>
                            <span>{subtotal}</span>
                        </div>
                        <a class="order-summary__checkout" href="/checkout">"Checkout"</a>
                    </aside>
                </div>
            </Show>
        </div>
    }
}
