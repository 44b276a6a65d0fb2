//! The cart/wishlist store and its operation set.
//!
//! SYSTEM CONTEXT
//! ==============
//! One `CartStore` instance lives behind a signal at the application root;
//! every component mutates it through the operations below and never through
//! direct field access. Each mutation re-serializes the touched collection
//! to its storage key before returning, so the persisted state never lags
//! the in-memory state. Hydration happens once, in [`CartStore::load`], and
//! tolerates absent or corrupt stored values by starting empty.
//!
//! Operations are synchronous and run to completion — nothing here awaits,
//! so two mutations can never interleave on the same collection.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::consts;
use crate::product::{CartLineItem, Product, ProductId};
use crate::storage::StorageBackend;

/// Client-side owner of the cart and wishlist collections.
///
/// Both collections are insertion-ordered and hold at most one entry per
/// product id. Quantities are always at least 1; the delete-on-zero rule is
/// applied by the operations, never left to callers.
#[derive(Debug, Clone)]
pub struct CartStore<S: StorageBackend> {
    storage: S,
    items: Vec<CartLineItem>,
    wishlist: Vec<Product>,
}

impl<S: StorageBackend> CartStore<S> {
    /// Hydrate a store from `storage`.
    ///
    /// A missing key or a value that fails to parse as the expected shape
    /// yields an empty collection for that key; hydration never fails.
    pub fn load(storage: S) -> Self {
        let items = read_collection(&storage, consts::CART_KEY);
        let wishlist = read_collection(&storage, consts::WISHLIST_KEY);
        Self {
            storage,
            items,
            wishlist,
        }
    }

    /// Cart line items in insertion order.
    #[must_use]
    pub fn items(&self) -> &[CartLineItem] {
        &self.items
    }

    /// Wishlist snapshots in insertion order.
    #[must_use]
    pub fn wishlist(&self) -> &[Product] {
        &self.wishlist
    }

    // ── Cart operations ─────────────────────────────────────────

    /// Add `quantity` of `product` to the cart.
    ///
    /// A non-positive or otherwise invalid quantity is treated as 1. If the
    /// product is already in the cart its line item's quantity is
    /// incremented; the cart never holds two rows for one product id.
    pub fn add_to_cart(&mut self, product: Product, quantity: i64) {
        let quantity = clamp_quantity(quantity);
        if let Some(item) = self
            .items
            .iter_mut()
            .find(|item| item.product.id == product.id)
        {
            item.quantity = item.quantity.saturating_add(quantity);
        } else {
            self.items.push(CartLineItem { product, quantity });
        }
        self.persist_cart();
    }

    /// Remove the line item for `id`, returning it if it was present.
    /// Removing an absent id is a no-op, not an error.
    pub fn remove_from_cart(&mut self, id: ProductId) -> Option<CartLineItem> {
        let index = self.items.iter().position(|item| item.product.id == id)?;
        let removed = self.items.remove(index);
        self.persist_cart();
        Some(removed)
    }

    /// Set the quantity for `id` to exactly `quantity`.
    ///
    /// A quantity of 0 or less deletes the line item — a zero-quantity row
    /// must never persist. An id that is not in the cart is a no-op.
    pub fn update_quantity(&mut self, id: ProductId, quantity: i64) {
        if quantity <= 0 {
            self.remove_from_cart(id);
            return;
        }
        let Some(item) = self.items.iter_mut().find(|item| item.product.id == id) else {
            return;
        };
        item.quantity = clamp_quantity(quantity);
        self.persist_cart();
    }

    /// Empty the cart unconditionally. Used after successful order
    /// placement.
    pub fn clear_cart(&mut self) {
        self.items.clear();
        self.persist_cart();
    }

    // ── Wishlist operations ─────────────────────────────────────

    /// Toggle `product`'s wishlist membership, returning the new state:
    /// `true` when the product was just added, `false` when it was removed.
    pub fn toggle_wishlist(&mut self, product: Product) -> bool {
        let added = match self
            .wishlist
            .iter()
            .position(|entry| entry.id == product.id)
        {
            Some(index) => {
                self.wishlist.remove(index);
                false
            }
            None => {
                self.wishlist.push(product);
                true
            }
        };
        self.persist_wishlist();
        added
    }

    /// Whether `id` is currently in the wishlist. Pure query.
    #[must_use]
    pub fn is_in_wishlist(&self, id: ProductId) -> bool {
        self.wishlist.iter().any(|entry| entry.id == id)
    }

    // ── Derived values ──────────────────────────────────────────

    /// Total quantity across all cart line items.
    #[must_use]
    pub fn cart_count(&self) -> u32 {
        self.items.iter().map(|item| item.quantity).sum()
    }

    /// Number of wishlist entries.
    #[must_use]
    pub fn wishlist_count(&self) -> usize {
        self.wishlist.len()
    }

    /// Sum of unit price times quantity across the cart. Recomputed on
    /// demand rather than stored, so later price corrections cannot drift.
    #[must_use]
    pub fn cart_total(&self) -> f64 {
        self.items.iter().map(CartLineItem::line_total).sum()
    }

    // ── Persistence ─────────────────────────────────────────────

    fn persist_cart(&self) {
        write_collection(&self.storage, consts::CART_KEY, &self.items);
    }

    fn persist_wishlist(&self) {
        write_collection(&self.storage, consts::WISHLIST_KEY, &self.wishlist);
    }
}

/// Clamp an operation quantity to the valid range. The storefront contract
/// treats any non-positive or missing quantity as 1 rather than rejecting
/// the call.
fn clamp_quantity(quantity: i64) -> u32 {
    if quantity < 1 {
        1
    } else {
        u32::try_from(quantity).unwrap_or(u32::MAX)
    }
}

/// Read and parse a persisted collection, falling back to empty on a
/// missing key or a malformed value.
fn read_collection<S: StorageBackend, T: DeserializeOwned>(storage: &S, key: &str) -> Vec<T> {
    match storage.read(key) {
        Some(raw) => match serde_json::from_str(&raw) {
            Ok(parsed) => parsed,
            Err(_) => Vec::new(),
        },
        None => Vec::new(),
    }
}

/// Serialize and write a collection under `key`. Best-effort, like the
/// backend itself.
fn write_collection<S: StorageBackend, T: Serialize>(storage: &S, key: &str, value: &[T]) {
    if let Ok(raw) = serde_json::to_string(value) {
        storage.write(key, &raw);
    }
}
