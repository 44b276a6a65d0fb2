//! Catalog hygiene: what the storefront actually lists.
//!
//! DESIGN
//! ======
//! The backend catalog is shared with a sibling operation that also sells
//! laptops; this storefront is printers and consumables only. Listings
//! therefore hide laptop-family products wherever they appear (search
//! suggestions, shop grid, home rails), and the brand rail is limited to
//! the six printer brands the store stocks.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use cart::Product;

use crate::net::types::{Brand, Category};

/// Name fragments that mark a product as outside this storefront's range.
const HIDDEN_NAME_KEYWORDS: [&str; 4] = ["laptop", "macbook", "notebook", "chromebook"];

/// Brands the storefront stocks, lowercase.
const STOCKED_BRANDS: [&str; 6] = ["brother", "canon", "epson", "hp", "lexmark", "xerox"];

/// Whether a product belongs in storefront listings.
#[must_use]
pub fn is_listed_product(product: &Product) -> bool {
    let name = product.name.to_lowercase();
    !HIDDEN_NAME_KEYWORDS
        .iter()
        .any(|keyword| name.contains(keyword))
}

/// Drop products that are outside the storefront's range.
#[must_use]
pub fn filter_listed(products: Vec<Product>) -> Vec<Product> {
    products.into_iter().filter(is_listed_product).collect()
}

/// Whether a category belongs in the navigation menus.
#[must_use]
pub fn is_listed_category(category: &Category) -> bool {
    let name = category.name.to_lowercase();
    let slug = category.slug.to_lowercase();
    !HIDDEN_NAME_KEYWORDS
        .iter()
        .any(|keyword| name.contains(keyword) || slug.contains(keyword))
}

/// Whether a brand is stocked by the storefront.
#[must_use]
pub fn is_stocked_brand(brand: &Brand) -> bool {
    let name = brand.name.trim().to_lowercase();
    STOCKED_BRANDS.contains(&name.as_str())
}
