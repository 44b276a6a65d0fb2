//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`auth`, `cart`, `ui`) so individual components
//! can depend on small focused models. All cart/wishlist mutation flows
//! through the operation layer in [`cart`], never through direct field
//! access, so the store's invariants hold no matter which component asks.

pub mod auth;
pub mod cart;
pub mod ui;
