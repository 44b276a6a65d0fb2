//! Wire-schema DTOs for the storefront REST backend.
//!
//! DESIGN
//! ======
//! List endpoints wrap their payloads in a `{status, data}` envelope;
//! [`ApiEnvelope::into_result`] converts that into ordinary `Result`
//! handling at the call site. The same boundary tolerance the `cart` crate
//! applies to products (JSON-in-string arrays, numeric strings) is applied
//! here to order history rows, which the backend stores the same loose way.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use cart::CartLineItem;
use cart::product::price_from_value;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Standard response envelope for the backend's endpoints.
#[derive(Clone, Debug, Deserialize)]
pub struct ApiEnvelope<T> {
    /// `"success"` on the happy path; anything else is a refusal.
    pub status: String,
    /// Payload, present on success.
    #[serde(default)]
    pub data: Option<T>,
    /// Human-readable refusal reason, sometimes present on failure.
    #[serde(default)]
    pub message: Option<String>,
}

impl<T> ApiEnvelope<T> {
    /// Unwrap the envelope into the payload or a displayable error.
    pub fn into_result(self) -> Result<T, String> {
        if self.status == "success" {
            if let Some(data) = self.data {
                return Ok(data);
            }
        }
        Err(self
            .message
            .unwrap_or_else(|| "request failed".to_owned()))
    }
}

/// A catalog category. Parents carry their children inline.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub children: Vec<Category>,
}

/// A product brand.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Brand {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub slug: String,
}

/// An authenticated user as stored under the `user` key and returned by the
/// login/register endpoints.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    /// `"admin"` marks a back-office session; anything else is a customer.
    #[serde(default)]
    pub role: String,
}

/// One placed order, as returned by the order-history endpoint.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Order {
    pub id: i64,
    #[serde(default, deserialize_with = "deserialize_money")]
    pub total: f64,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub created_at: String,
    /// Line items at purchase time. The backend stores these as a JSON
    /// string column and some deployments return it unparsed.
    #[serde(default, deserialize_with = "deserialize_order_items")]
    pub items: Vec<CartLineItem>,
}

/// Checkout submission. Field casing mirrors the form contract the backend
/// already accepts: camelCase for the shipping form, snake_case for the
/// rest.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct OrderRequest {
    pub email: String,
    #[serde(rename = "firstName")]
    pub first_name: String,
    #[serde(rename = "lastName")]
    pub last_name: String,
    pub address: String,
    pub city: String,
    #[serde(rename = "zipCode")]
    pub zip_code: String,
    pub phone: String,
    #[serde(rename = "paymentMethod")]
    pub payment_method: String,
    pub user_id: Option<i64>,
    pub total: f64,
    pub items: Vec<CartLineItem>,
    /// Capture details from the external payment widget, when one ran.
    pub payment_details: Option<Value>,
}

/// Response to an order submission. Not enveloped like list endpoints —
/// the order id rides at the top level.
#[derive(Clone, Debug, Deserialize)]
pub struct OrderReceipt {
    pub status: String,
    #[serde(default)]
    pub order_id: Option<i64>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Contact-form submission.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// Profile update submission.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ProfileUpdate {
    pub name: String,
    pub email: String,
}

/// Accept order items as an array or as a JSON-encoded string of one.
fn deserialize_order_items<'de, D>(deserializer: D) -> Result<Vec<CartLineItem>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(order_items_from_value(value))
}

/// Normalize an order `items` JSON value into line items.
#[must_use]
pub fn order_items_from_value(value: Value) -> Vec<CartLineItem> {
    let parsed = match value {
        Value::String(raw) => match serde_json::from_str(&raw) {
            Ok(inner) => inner,
            Err(_) => Value::Null,
        },
        other => other,
    };
    match serde_json::from_value(parsed) {
        Ok(items) => items,
        Err(_) => Vec::new(),
    }
}

/// Accept money as a number or numeric string, like product prices.
fn deserialize_money<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(price_from_value(&value))
}
