#![allow(clippy::float_cmp)]

use serde_json::json;

use super::*;

fn parse_product(value: serde_json::Value) -> Product {
    serde_json::from_value(value).unwrap()
}

// =============================================================
// images normalization
// =============================================================

#[test]
fn images_accepts_plain_array() {
    let product = parse_product(json!({
        "id": 1, "name": "Printer A", "slug": "printer-a", "price": 100.0,
        "images": ["products/a-front.jpg", "products/a-side.jpg"]
    }));
    assert_eq!(
        product.images,
        vec!["products/a-front.jpg".to_owned(), "products/a-side.jpg".to_owned()]
    );
}

#[test]
fn images_accepts_json_encoded_string() {
    let product = parse_product(json!({
        "id": 1, "name": "Printer A", "slug": "printer-a", "price": 100.0,
        "images": "[\"products/a-front.jpg\"]"
    }));
    assert_eq!(product.images, vec!["products/a-front.jpg".to_owned()]);
}

#[test]
fn images_unparsable_string_becomes_empty() {
    let product = parse_product(json!({
        "id": 1, "name": "Printer A", "slug": "printer-a", "price": 100.0,
        "images": "not json at all"
    }));
    assert!(product.images.is_empty());
}

#[test]
fn images_absent_becomes_empty() {
    let product = parse_product(json!({
        "id": 1, "name": "Printer A", "slug": "printer-a", "price": 100.0
    }));
    assert!(product.images.is_empty());
}

#[test]
fn images_null_becomes_empty() {
    let product = parse_product(json!({
        "id": 1, "name": "Printer A", "slug": "printer-a", "price": 100.0,
        "images": null
    }));
    assert!(product.images.is_empty());
}

#[test]
fn images_array_skips_non_strings() {
    let value = json!(["products/a.jpg", 7, null, "products/b.jpg"]);
    assert_eq!(
        images_from_value(&value),
        vec!["products/a.jpg".to_owned(), "products/b.jpg".to_owned()]
    );
}

// =============================================================
// price normalization
// =============================================================

#[test]
fn price_accepts_number() {
    let product = parse_product(json!({
        "id": 1, "name": "Printer A", "slug": "printer-a", "price": 199.99
    }));
    assert_eq!(product.price, 199.99);
}

#[test]
fn price_accepts_numeric_string() {
    let product = parse_product(json!({
        "id": 1, "name": "Printer A", "slug": "printer-a", "price": "199.99"
    }));
    assert_eq!(product.price, 199.99);
}

#[test]
fn price_garbage_reads_as_zero() {
    assert_eq!(price_from_value(&json!("call us")), 0.0);
    assert_eq!(price_from_value(&json!(null)), 0.0);
    assert_eq!(price_from_value(&json!([1.0])), 0.0);
}

#[test]
fn price_string_tolerates_whitespace() {
    assert_eq!(price_from_value(&json!("  42.5 ")), 42.5);
}

// =============================================================
// image accessors
// =============================================================

#[test]
fn primary_image_returns_first_path() {
    let product = parse_product(json!({
        "id": 1, "name": "Printer A", "slug": "printer-a", "price": 100.0,
        "images": ["products/a-front.jpg", "products/a-side.jpg"]
    }));
    assert_eq!(product.primary_image(), "products/a-front.jpg");
}

#[test]
fn primary_image_falls_back_to_placeholder() {
    let product = parse_product(json!({
        "id": 1, "name": "Printer A", "slug": "printer-a", "price": 100.0
    }));
    assert_eq!(product.primary_image(), crate::consts::PLACEHOLDER_IMAGE);
}

#[test]
fn image_at_out_of_range_falls_back() {
    let product = parse_product(json!({
        "id": 1, "name": "Printer A", "slug": "printer-a", "price": 100.0,
        "images": ["products/a-front.jpg"]
    }));
    assert_eq!(product.image_at(0), "products/a-front.jpg");
    assert_eq!(product.image_at(3), crate::consts::PLACEHOLDER_IMAGE);
}

// =============================================================
// line items
// =============================================================

#[test]
fn line_total_multiplies_price_by_quantity() {
    let item = CartLineItem {
        product: parse_product(json!({
            "id": 1, "name": "Printer A", "slug": "printer-a", "price": 100.5
        })),
        quantity: 3,
    };
    assert_eq!(item.line_total(), 301.5);
}

#[test]
fn line_item_roundtrips_through_flat_json() {
    let item = CartLineItem {
        product: parse_product(json!({
            "id": 1, "name": "Printer A", "slug": "printer-a", "price": 100.0,
            "images": ["products/a.jpg"], "brand_name": "Epson"
        })),
        quantity: 2,
    };
    let raw = serde_json::to_string(&item).unwrap();
    let back: CartLineItem = serde_json::from_str(&raw).unwrap();
    assert_eq!(back, item);
}

#[test]
fn line_item_parses_legacy_stringly_images() {
    let raw = "{\"id\":1,\"name\":\"Printer A\",\"slug\":\"printer-a\",\
               \"price\":\"100\",\"images\":\"[\\\"products/a.jpg\\\"]\",\"quantity\":4}";
    let item: CartLineItem = serde_json::from_str(raw).unwrap();
    assert_eq!(item.quantity, 4);
    assert_eq!(item.product.price, 100.0);
    assert_eq!(item.product.images, vec!["products/a.jpg".to_owned()]);
}
