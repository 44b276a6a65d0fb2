//! Storage keys and shared constants for the cart crate.

// ── Durable storage keys ────────────────────────────────────────

/// Key under which the cart line-item array is persisted.
pub const CART_KEY: &str = "cart";

/// Key under which the wishlist snapshot array is persisted.
pub const WISHLIST_KEY: &str = "wishlist";

// ── Rendering fallbacks ─────────────────────────────────────────

/// Image shown when a product snapshot carries no usable image paths.
pub const PLACEHOLDER_IMAGE: &str = "/images/placeholder-product.png";
