//! Slide-over cart drawer.
//!
//! SYSTEM CONTEXT
//! ==============
//! Opened from the header bag button and after cart adds on some pages.
//! Renders the live cart with quantity steppers; the stepper's minus at
//! quantity 1 removes the row, which is the store's delete-on-zero rule
//! doing its job rather than drawer-local logic.

use leptos::prelude::*;

use crate::state::cart::{StoreSignal, remove_from_cart, update_quantity};
use crate::state::ui::UiState;
use crate::util::format::format_price;

/// The slide-over cart. Hidden unless `UiState::cart_drawer_open`.
#[component]
pub fn CartDrawer() -> impl IntoView {
    let store = expect_context::<StoreSignal>();
    let ui = expect_context::<RwSignal<UiState>>();

    let close = move |_| ui.update(UiState::close_cart_drawer);
    let is_open = move || ui.get().cart_drawer_open;
    let is_empty = move || store.with(|state| state.items().is_empty());
    let subtotal = move || format_price(store.with(cart::CartStore::cart_total));

    let rows = move || {
        store
            .with(|state| state.items().to_vec())
            .into_iter()
            .map(|item| {
                let id = item.product.id;
                let quantity = i64::from(item.quantity);
                let line_total = format_price(item.line_total());
                view! {
                    <div class="cart-drawer__item">
                        <img
                            class="cart-drawer__item-image"
                            src=item.product.primary_image().to_owned()
                            alt=item.product.name.clone()
                        />
                        <div class="cart-drawer__item-body">
                            <span class="cart-drawer__item-brand">
                                {item.product.brand_name.clone().unwrap_or_default()}
                            </span>
                            <h3 class="cart-drawer__item-name">{item.product.name.clone()}</h3>
                            <div class="cart-drawer__item-row">
                                <div class="quantity-stepper">
                                    <button on:click=move |_| update_quantity(store, id, quantity - 1)>
                                        "−"
                                    </button>
                                    <span>{item.quantity}</span>
                                    <button on:click=move |_| update_quantity(store, id, quantity + 1)>
                                        "+"
                                    </button>
                                </div>
                                <span class="cart-drawer__item-total">{line_total}</span>
                            </div>
                        </div>
                        <button
                            class="cart-drawer__item-remove"
                            aria-label="Remove from cart"
                            on:click=move |_| remove_from_cart(store, id)
                        >
                            "×"
                        </button>
                    </div>
                }
            })
            .collect_view()
    };

    view! {
        <Show when=is_open>
            <div class="cart-drawer__overlay" on:click=close></div>
            <aside class="cart-drawer">
                <div class="cart-drawer__header">
                    <h2>"Your Bag"</h2>
                    <button class="cart-drawer__close" aria-label="Close cart" on:click=close>
                        "×"
                    </button>
                </div>
                <div class="cart-drawer__content">
                    <Show
                        when=move || !is_empty()
                        fallback=|| {
                            view! {
                                <div class="cart-drawer__empty">
                                    <p>"Your bag is empty."</p>
                                    <a href="/shop">"Browse the shop"</a>
                                </div>
                            }
                        }
                    >
                        {rows}
                    </Show>
                </div>
                <div class="cart-drawer__footer">
                    <div class="cart-drawer__subtotal">
                        <span>"Subtotal"</span>
                        <span>{subtotal}</span>
                    </div>
                    <a class="cart-drawer__link" href="/cart" on:click=close>
                        "View Cart"
                    </a>
                    <a class="cart-drawer__checkout" href="/checkout" on:click=close>
                        "Checkout"
                    </a>
                </div>
            </aside>
        </Show>
    }
}
