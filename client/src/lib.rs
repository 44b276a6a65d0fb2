//! # client
//!
//! Leptos + WASM frontend for the printmart storefront.
//!
//! This crate contains pages, components, application state, network types,
//! and utility helpers. It integrates with the `cart` crate for the pure
//! state-container logic behind cart and wishlist operations.

pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;
