//! REST API helpers for communicating with the storefront backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning empty/error values since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result<_, String>` outputs instead of panics so catalog and
//! checkout failures degrade to toasts without crashing hydration. Failures
//! are also logged to the console sink for debugging.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use cart::Product;
#[cfg(feature = "hydrate")]
use serde::de::DeserializeOwned;
#[cfg(feature = "hydrate")]
use serde::Serialize;

#[cfg(feature = "hydrate")]
use super::types::{ApiEnvelope, OrderReceipt};
use super::types::{Brand, Category, ContactRequest, Order, OrderRequest, ProfileUpdate, User};

/// Base URL of the storefront backend.
pub const API_BASE_URL: &str = "/api";

// ── Query construction ──────────────────────────────────────────

/// Filters accepted by the products list endpoint.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProductQuery {
    pub search: Option<String>,
    pub category: Option<String>,
    pub brand: Option<String>,
    pub limit: Option<u32>,
}

impl ProductQuery {
    /// Query matching everything, up to `limit` rows.
    #[must_use]
    pub fn all(limit: u32) -> Self {
        Self {
            limit: Some(limit),
            ..Self::default()
        }
    }

    /// Free-text search query.
    #[must_use]
    pub fn search(term: &str, limit: u32) -> Self {
        Self {
            search: Some(term.to_owned()),
            limit: Some(limit),
            ..Self::default()
        }
    }

    /// Serialize into a URL query string (without the leading `?`).
    #[must_use]
    pub fn to_query_string(&self) -> String {
        let mut pairs = Vec::new();
        if let Some(search) = &self.search {
            pairs.push(format!("search={}", percent_encode(search)));
        }
        if let Some(category) = &self.category {
            pairs.push(format!("category={}", percent_encode(category)));
        }
        if let Some(brand) = &self.brand {
            pairs.push(format!("brand={}", percent_encode(brand)));
        }
        if let Some(limit) = self.limit {
            pairs.push(format!("limit={limit}"));
        }
        pairs.join("&")
    }
}

/// Who an order-history lookup is for: the signed-in customer, or a guest
/// identified by the email used at checkout.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OrderIdentity {
    Customer(i64),
    Email(String),
}

impl OrderIdentity {
    /// The identifying query-string pair for the orders endpoint.
    #[must_use]
    pub fn to_query_pair(&self) -> String {
        match self {
            Self::Customer(id) => format!("user_id={id}"),
            Self::Email(email) => format!("email={}", percent_encode(email)),
        }
    }
}

/// Percent-encode a query-string value. Unreserved characters pass through;
/// everything else is escaped byte-wise.
#[must_use]
pub fn percent_encode(input: &str) -> String {
    let mut encoded = String::with_capacity(input.len());
    for byte in input.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                encoded.push(byte as char);
            }
            _ => encoded.push_str(&format!("%{byte:02X}")),
        }
    }
    encoded
}

// ── Endpoint formatting ─────────────────────────────────────────

#[cfg(any(test, feature = "hydrate"))]
fn products_endpoint(query: &ProductQuery) -> String {
    let pairs = query.to_query_string();
    if pairs.is_empty() {
        format!("{API_BASE_URL}/products")
    } else {
        format!("{API_BASE_URL}/products?{pairs}")
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn product_endpoint(slug: &str) -> String {
    format!("{API_BASE_URL}/products/{}", percent_encode(slug))
}

#[cfg(any(test, feature = "hydrate"))]
fn orders_endpoint(identity: &OrderIdentity) -> String {
    format!("{API_BASE_URL}/orders?{}", identity.to_query_pair())
}

#[cfg(any(test, feature = "hydrate"))]
fn user_endpoint(user_id: i64) -> String {
    format!("{API_BASE_URL}/users/{user_id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn request_failed_message(status: u16) -> String {
    format!("request failed: {status}")
}

// ── Transport helpers ───────────────────────────────────────────

#[cfg(feature = "hydrate")]
async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, String> {
    let resp = gloo_net::http::Request::get(url)
        .send()
        .await
        .map_err(|e| {
            log::warn!("GET {url}: {e}");
            e.to_string()
        })?;
    if !resp.ok() {
        log::warn!("GET {url}: status {}", resp.status());
        return Err(request_failed_message(resp.status()));
    }
    resp.json::<T>().await.map_err(|e| e.to_string())
}

#[cfg(feature = "hydrate")]
async fn post_json<B: Serialize, T: DeserializeOwned>(url: &str, body: &B) -> Result<T, String> {
    send_json(gloo_net::http::Request::post(url), url, body).await
}

#[cfg(feature = "hydrate")]
async fn put_json<B: Serialize, T: DeserializeOwned>(url: &str, body: &B) -> Result<T, String> {
    send_json(gloo_net::http::Request::put(url), url, body).await
}

#[cfg(feature = "hydrate")]
async fn send_json<B: Serialize, T: DeserializeOwned>(
    builder: gloo_net::http::RequestBuilder,
    url: &str,
    body: &B,
) -> Result<T, String> {
    let resp = builder
        .json(body)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| {
            log::warn!("{url}: {e}");
            e.to_string()
        })?;
    if !resp.ok() {
        log::warn!("{url}: status {}", resp.status());
        return Err(request_failed_message(resp.status()));
    }
    resp.json::<T>().await.map_err(|e| e.to_string())
}

#[cfg(feature = "hydrate")]
async fn get_enveloped<T: DeserializeOwned>(url: &str) -> Result<T, String> {
    let envelope: ApiEnvelope<T> = get_json(url).await?;
    envelope.into_result()
}

// ── Catalog ─────────────────────────────────────────────────────

/// Fetch products matching `query`.
///
/// # Errors
///
/// Returns a displayable error string when the request or envelope fails.
pub async fn fetch_products(query: &ProductQuery) -> Result<Vec<Product>, String> {
    #[cfg(feature = "hydrate")]
    {
        get_enveloped(&products_endpoint(query)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = query;
        Ok(Vec::new())
    }
}

/// Fetch one product by its URL slug.
///
/// # Errors
///
/// Returns an error string when the product does not exist or the request
/// fails.
pub async fn fetch_product(slug: &str) -> Result<Product, String> {
    #[cfg(feature = "hydrate")]
    {
        get_enveloped(&product_endpoint(slug)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = slug;
        Err("not available on server".to_owned())
    }
}

/// Fetch the category tree.
///
/// # Errors
///
/// Returns a displayable error string when the request or envelope fails.
pub async fn fetch_categories() -> Result<Vec<Category>, String> {
    #[cfg(feature = "hydrate")]
    {
        get_enveloped(&format!("{API_BASE_URL}/categories")).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Ok(Vec::new())
    }
}

/// Fetch all brands.
///
/// # Errors
///
/// Returns a displayable error string when the request or envelope fails.
pub async fn fetch_brands() -> Result<Vec<Brand>, String> {
    #[cfg(feature = "hydrate")]
    {
        get_enveloped(&format!("{API_BASE_URL}/brands")).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Ok(Vec::new())
    }
}

// ── Auth ────────────────────────────────────────────────────────

/// Log in with email and password, returning the authenticated user.
///
/// # Errors
///
/// Returns the backend's refusal message or a transport error string.
pub async fn login(email: &str, password: &str) -> Result<User, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "email": email, "password": password });
        let envelope: ApiEnvelope<User> =
            post_json(&format!("{API_BASE_URL}/login"), &payload).await?;
        envelope.into_result()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err("not available on server".to_owned())
    }
}

/// Register a new account.
///
/// # Errors
///
/// Returns the backend's refusal message or a transport error string.
pub async fn register(name: &str, email: &str, password: &str) -> Result<User, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload =
            serde_json::json!({ "name": name, "email": email, "password": password });
        let envelope: ApiEnvelope<User> =
            post_json(&format!("{API_BASE_URL}/register"), &payload).await?;
        envelope.into_result()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (name, email, password);
        Err("not available on server".to_owned())
    }
}

/// Update a customer's profile, returning the refreshed user record.
///
/// # Errors
///
/// Returns the backend's refusal message or a transport error string.
pub async fn update_profile(user_id: i64, update: &ProfileUpdate) -> Result<User, String> {
    #[cfg(feature = "hydrate")]
    {
        let envelope: ApiEnvelope<User> = put_json(&user_endpoint(user_id), update).await?;
        envelope.into_result()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (user_id, update);
        Err("not available on server".to_owned())
    }
}

// ── Orders ──────────────────────────────────────────────────────

/// Submit an order, returning the new order id.
///
/// # Errors
///
/// Returns the backend's refusal message or a transport error string.
pub async fn place_order(request: &OrderRequest) -> Result<i64, String> {
    #[cfg(feature = "hydrate")]
    {
        let receipt: OrderReceipt = post_json(&format!("{API_BASE_URL}/orders"), request).await?;
        if receipt.status == "success" {
            if let Some(order_id) = receipt.order_id {
                return Ok(order_id);
            }
        }
        Err(receipt
            .message
            .unwrap_or_else(|| "order was not accepted".to_owned()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err("not available on server".to_owned())
    }
}

/// Fetch order history for a customer or guest email.
///
/// # Errors
///
/// Returns a displayable error string when the request or envelope fails.
pub async fn fetch_orders(identity: &OrderIdentity) -> Result<Vec<Order>, String> {
    #[cfg(feature = "hydrate")]
    {
        get_enveloped(&orders_endpoint(identity)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = identity;
        Ok(Vec::new())
    }
}

// ── Contact & newsletter ────────────────────────────────────────

/// Submit the contact form.
///
/// # Errors
///
/// Returns the backend's refusal message or a transport error string.
pub async fn submit_contact(request: &ContactRequest) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let envelope: ApiEnvelope<serde_json::Value> =
            post_json(&format!("{API_BASE_URL}/contacts"), request).await?;
        if envelope.status == "success" {
            Ok(())
        } else {
            Err(envelope
                .message
                .unwrap_or_else(|| "message was not sent".to_owned()))
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err("not available on server".to_owned())
    }
}

/// Subscribe an email address to the newsletter.
///
/// # Errors
///
/// Returns the backend's refusal message or a transport error string.
pub async fn subscribe_newsletter(email: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "email": email });
        let envelope: ApiEnvelope<serde_json::Value> =
            post_json(&format!("{API_BASE_URL}/newsletter"), &payload).await?;
        if envelope.status == "success" {
            Ok(())
        } else {
            Err(envelope
                .message
                .unwrap_or_else(|| "subscription failed".to_owned()))
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = email;
        Err("not available on server".to_owned())
    }
}
