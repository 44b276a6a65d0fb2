//! Product snapshots and cart line items.
//!
//! Data flows into this layer from the REST backend (JSON deserialization)
//! and back out through durable storage. The backend is loose about two
//! fields: `images` arrives either as a JSON array of path strings or as a
//! JSON-encoded string of the same, and `price` is sometimes a numeric
//! string. Both are normalized here, at the boundary, so the rest of the
//! client never sees the raw shapes.

#[cfg(test)]
#[path = "product_test.rs"]
mod product_test;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::consts;

/// Unique identifier for a product, as assigned by the backend.
pub type ProductId = i64;

/// A shallow copy of a product's display fields, captured when the product
/// is added to the cart or wishlist and used to render both without a
/// refetch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Backend product identifier.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// URL slug for the product detail route.
    #[serde(default)]
    pub slug: String,
    /// Unit price. Numeric strings from the backend are accepted.
    #[serde(deserialize_with = "deserialize_price")]
    pub price: f64,
    /// Image paths, already unwrapped from the backend's JSON-in-string form.
    #[serde(default, deserialize_with = "deserialize_images")]
    pub images: Vec<String>,
    /// Brand display name, when the backend provides one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand_name: Option<String>,
    /// Long-form description, only present on detail responses.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Product {
    /// First image path, or the shared placeholder when none survived
    /// normalization.
    #[must_use]
    pub fn primary_image(&self) -> &str {
        self.image_at(0)
    }

    /// Image path at `index`, falling back to the placeholder.
    #[must_use]
    pub fn image_at(&self, index: usize) -> &str {
        self.images
            .get(index)
            .map_or(consts::PLACEHOLDER_IMAGE, String::as_str)
    }
}

/// One row in the cart: a product snapshot plus how many of it the customer
/// wants. Serializes flat, so the persisted shape is
/// `{id, name, price, images, brand_name, slug, quantity}` — the same shape
/// the original storefront wrote.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLineItem {
    /// Snapshot captured at add-time.
    #[serde(flatten)]
    pub product: Product,
    /// How many units of the product. Always at least 1; a line item whose
    /// quantity would reach 0 is deleted instead.
    pub quantity: u32,
}

impl CartLineItem {
    /// Price of this row: unit price times quantity.
    #[must_use]
    pub fn line_total(&self) -> f64 {
        self.product.price * f64::from(self.quantity)
    }
}

/// Accept `images` as an array of strings or as a JSON-encoded string of the
/// same. Anything unparsable becomes an empty list rather than an error.
fn deserialize_images<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(images_from_value(&value))
}

/// Normalize an `images` JSON value into a list of path strings.
#[must_use]
pub fn images_from_value(value: &Value) -> Vec<String> {
    match value {
        Value::Array(items) => items
            .iter()
            .filter_map(|item| item.as_str().map(str::to_owned))
            .collect(),
        Value::String(raw) => match serde_json::from_str::<Vec<String>>(raw) {
            Ok(paths) => paths,
            Err(_) => Vec::new(),
        },
        _ => Vec::new(),
    }
}

/// Accept `price` as a JSON number or as a numeric string. Anything else
/// reads as `0.0` — a missing price renders as free rather than breaking
/// the page.
fn deserialize_price<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(price_from_value(&value))
}

/// Normalize a `price` JSON value into a float.
#[must_use]
pub fn price_from_value(value: &Value) -> f64 {
    match value {
        Value::Number(number) => number.as_f64().unwrap_or(0.0),
        Value::String(raw) => raw.trim().parse().unwrap_or(0.0),
        _ => 0.0,
    }
}
