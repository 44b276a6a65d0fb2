use super::*;

// =============================================================
// format_price
// =============================================================

#[test]
fn price_formats_two_decimals() {
    assert_eq!(format_price(100.0), "$100.00");
}

#[test]
fn price_rounds_to_cents() {
    assert_eq!(format_price(19.995), "$20.00");
    assert_eq!(format_price(19.994), "$19.99");
}

#[test]
fn price_groups_thousands() {
    assert_eq!(format_price(1234.5), "$1,234.50");
    assert_eq!(format_price(1_234_567.89), "$1,234,567.89");
}

#[test]
fn price_zero() {
    assert_eq!(format_price(0.0), "$0.00");
}

#[test]
fn price_clamps_negatives() {
    assert_eq!(format_price(-5.0), "$0.00");
}

// =============================================================
// format_order_date
// =============================================================

#[test]
fn date_strips_time_with_space() {
    assert_eq!(format_order_date("2026-05-03 10:22:11"), "2026-05-03");
}

#[test]
fn date_strips_iso_time() {
    assert_eq!(format_order_date("2026-05-03T10:22:11Z"), "2026-05-03");
}

#[test]
fn date_passes_through_bare_date() {
    assert_eq!(format_order_date("2026-05-03"), "2026-05-03");
}

#[test]
fn date_passes_through_garbage() {
    assert_eq!(format_order_date("pending"), "pending");
}
