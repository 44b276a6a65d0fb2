//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render storefront chrome and product surfaces while
//! reading/writing shared state from Leptos context providers. Cart and
//! wishlist mutations always go through `state::cart`, never the store
//! directly.

pub mod cart_drawer;
pub mod footer;
pub mod header;
pub mod product_card;
pub mod search_overlay;
pub mod toast;
