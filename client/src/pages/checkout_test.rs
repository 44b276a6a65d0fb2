use super::*;

fn complete_form() -> ShippingForm {
    ShippingForm {
        email: "pat@example.com".to_owned(),
        first_name: "Pat".to_owned(),
        last_name: "Lee".to_owned(),
        address: "1 Main St".to_owned(),
        city: "Springfield".to_owned(),
        zip_code: "01101".to_owned(),
        phone: "555-0100".to_owned(),
    }
}

fn line_item(id: i64, price: f64, quantity: u32) -> CartLineItem {
    CartLineItem {
        product: cart::Product {
            id,
            name: "Printer".to_owned(),
            slug: "printer".to_owned(),
            price,
            images: Vec::new(),
            brand_name: None,
            description: None,
        },
        quantity,
    }
}

// =============================================================
// split_name
// =============================================================

#[test]
fn split_name_on_first_space() {
    assert_eq!(split_name("Pat Lee"), ("Pat".to_owned(), "Lee".to_owned()));
}

#[test]
fn split_name_keeps_remainder_together() {
    assert_eq!(
        split_name("Mary Jane Watson"),
        ("Mary".to_owned(), "Jane Watson".to_owned())
    );
}

#[test]
fn split_single_name_has_empty_last() {
    assert_eq!(split_name("Cher"), ("Cher".to_owned(), String::new()));
}

// =============================================================
// ShippingForm
// =============================================================

#[test]
fn complete_form_validates() {
    assert_eq!(complete_form().validate(), None);
}

#[test]
fn missing_fields_complain_in_order() {
    let mut form = complete_form();
    form.email = String::new();
    assert_eq!(form.validate(), Some("Enter your email"));

    let mut form = complete_form();
    form.last_name = "  ".to_owned();
    assert_eq!(form.validate(), Some("Enter your full name"));

    let mut form = complete_form();
    form.address = String::new();
    assert_eq!(form.validate(), Some("Enter your shipping address"));

    let mut form = complete_form();
    form.zip_code = String::new();
    assert_eq!(form.validate(), Some("Enter your ZIP code"));

    let mut form = complete_form();
    form.phone = String::new();
    assert_eq!(form.validate(), Some("Enter a phone number"));
}

#[test]
fn prefill_splits_session_name() {
    let user = User {
        id: 4,
        name: "Pat Lee".to_owned(),
        email: "pat@example.com".to_owned(),
        role: "customer".to_owned(),
    };
    let form = ShippingForm::prefilled(&user);
    assert_eq!(form.email, "pat@example.com");
    assert_eq!(form.first_name, "Pat");
    assert_eq!(form.last_name, "Lee");
    assert!(form.address.is_empty());
}

// =============================================================
// Order assembly
// =============================================================

#[test]
fn order_request_stamps_origin_host() {
    let request = build_order_request(
        &complete_form(),
        PaymentMethod::CashOnDelivery,
        "shop.example.com",
        Some(4),
        vec![line_item(1, 100.0, 2)],
        200.0,
        None,
    );
    assert_eq!(request.address, "1 Main St (From: shop.example.com)");
    assert_eq!(request.payment_method, "cod");
    assert_eq!(request.user_id, Some(4));
    assert_eq!(request.items.len(), 1);
}

#[test]
fn order_request_carries_capture_details() {
    let capture = serde_json::json!({"capture_id": "CAP-123"});
    let request = build_order_request(
        &complete_form(),
        PaymentMethod::PayPal,
        "shop.example.com",
        None,
        Vec::new(),
        0.0,
        Some(capture.clone()),
    );
    assert_eq!(request.payment_method, "paypal");
    assert_eq!(request.payment_details, Some(capture));
}

#[test]
fn payment_methods_map_to_request_values() {
    assert_eq!(PaymentMethod::CashOnDelivery.as_request_value(), "cod");
    assert_eq!(PaymentMethod::PayPal.as_request_value(), "paypal");
}

// =============================================================
// Order reference
// =============================================================

#[test]
fn reference_formats_backend_id() {
    assert_eq!(order_reference(1042), "#PM-1042");
}
