use super::*;

// =============================================================
// percent_encode
// =============================================================

#[test]
fn encode_passes_unreserved() {
    assert_eq!(percent_encode("abc-XYZ_0.9~"), "abc-XYZ_0.9~");
}

#[test]
fn encode_escapes_spaces_and_punctuation() {
    assert_eq!(percent_encode("ink & toner"), "ink%20%26%20toner");
}

#[test]
fn encode_escapes_utf8_bytewise() {
    assert_eq!(percent_encode("café"), "caf%C3%A9");
}

// =============================================================
// ProductQuery
// =============================================================

#[test]
fn empty_query_serializes_empty() {
    assert_eq!(ProductQuery::default().to_query_string(), "");
}

#[test]
fn all_query_sets_only_limit() {
    assert_eq!(ProductQuery::all(1000).to_query_string(), "limit=1000");
}

#[test]
fn search_query_encodes_term() {
    let query = ProductQuery::search("laser printer", 6);
    assert_eq!(query.to_query_string(), "search=laser%20printer&limit=6");
}

#[test]
fn full_query_orders_pairs_stably() {
    let query = ProductQuery {
        search: Some("mono".to_owned()),
        category: Some("printers".to_owned()),
        brand: Some("HP".to_owned()),
        limit: Some(12),
    };
    assert_eq!(
        query.to_query_string(),
        "search=mono&category=printers&brand=HP&limit=12"
    );
}

// =============================================================
// Endpoints
// =============================================================

#[test]
fn products_endpoint_without_filters() {
    assert_eq!(products_endpoint(&ProductQuery::default()), "/api/products");
}

#[test]
fn products_endpoint_with_filters() {
    assert_eq!(
        products_endpoint(&ProductQuery::all(1000)),
        "/api/products?limit=1000"
    );
}

#[test]
fn product_endpoint_encodes_slug() {
    assert_eq!(
        product_endpoint("laserjet pro"),
        "/api/products/laserjet%20pro"
    );
}

#[test]
fn orders_endpoint_for_customer() {
    assert_eq!(
        orders_endpoint(&OrderIdentity::Customer(42)),
        "/api/orders?user_id=42"
    );
}

#[test]
fn orders_endpoint_for_guest_email() {
    assert_eq!(
        orders_endpoint(&OrderIdentity::Email("pat@example.com".to_owned())),
        "/api/orders?email=pat%40example.com"
    );
}

#[test]
fn user_endpoint_formats_id() {
    assert_eq!(user_endpoint(7), "/api/users/7");
}

#[test]
fn request_failed_message_formats_status() {
    assert_eq!(request_failed_message(503), "request failed: 503");
}
