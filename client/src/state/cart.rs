//! Cart/wishlist operation layer: store mutations plus their UI effects.
//!
//! DESIGN
//! ======
//! Components never call `CartStore` methods directly. They go through
//! these functions, which pair each mutation with its toast so every "add"
//! confirms the same way no matter which page triggered it. The store
//! itself persists on every mutation; nothing here touches storage.
//!
//! Cross-tab note: the persisted cart/wishlist keys are written by this
//! tab's store only. Sibling tabs do not re-read them until reload — the
//! storage signal is reserved for login state (see `app`).

#[cfg(test)]
#[path = "cart_test.rs"]
mod cart_test;

use cart::{CartStore, Product, ProductId};
use leptos::prelude::*;

use crate::state::ui::{ToastKind, UiState, show_toast};
use crate::util::storage::LocalStorage;

/// The shared cart/wishlist store as provided via context.
pub type StoreSignal = RwSignal<CartStore<LocalStorage>>;

/// Hydrate the store from browser storage (or empty, natively).
#[must_use]
pub fn hydrate_store() -> CartStore<LocalStorage> {
    CartStore::load(LocalStorage)
}

/// Add `quantity` of `product` to the cart and confirm with a toast.
pub fn add_to_cart(store: StoreSignal, ui: RwSignal<UiState>, product: Product, quantity: i64) {
    store.update(|state| state.add_to_cart(product, quantity));
    show_toast(ui, ADDED_TO_CART_MESSAGE, ToastKind::Success);
}

/// Remove a line item. Silent: the row disappearing is its own feedback.
pub fn remove_from_cart(store: StoreSignal, id: ProductId) {
    store.update(|state| {
        state.remove_from_cart(id);
    });
}

/// Set a line item's quantity exactly; zero or less removes the row.
pub fn update_quantity(store: StoreSignal, id: ProductId, quantity: i64) {
    store.update(|state| state.update_quantity(id, quantity));
}

/// Empty the cart. Used after successful order placement.
pub fn clear_cart(store: StoreSignal) {
    store.update(cart::CartStore::clear_cart);
}

/// Toggle `product` on the wishlist, toast the outcome, and return the new
/// membership state so callers can flip their heart icon synchronously.
pub fn toggle_wishlist(store: StoreSignal, ui: RwSignal<UiState>, product: Product) -> bool {
    let mut added = false;
    store.update(|state| added = state.toggle_wishlist(product));
    show_toast(ui, wishlist_toast_message(added), ToastKind::Success);
    added
}

/// Confirmation shown for every cart add, whether it inserted a new row or
/// bumped an existing one.
pub const ADDED_TO_CART_MESSAGE: &str = "Added to your bag";

/// Toast copy for a wishlist toggle outcome.
#[must_use]
pub fn wishlist_toast_message(added: bool) -> &'static str {
    if added {
        "Saved to your wishlist"
    } else {
        "Removed from your wishlist"
    }
}
