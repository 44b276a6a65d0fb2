use super::*;

fn product(name: &str) -> Product {
    Product {
        id: 1,
        name: name.to_owned(),
        slug: String::new(),
        price: 10.0,
        images: Vec::new(),
        brand_name: None,
        description: None,
    }
}

fn brand(name: &str) -> Brand {
    Brand {
        id: 1,
        name: name.to_owned(),
        slug: String::new(),
    }
}

fn category(name: &str, slug: &str) -> Category {
    Category {
        id: 1,
        name: name.to_owned(),
        slug: slug.to_owned(),
        children: Vec::new(),
    }
}

// =============================================================
// Products
// =============================================================

#[test]
fn printers_are_listed() {
    assert!(is_listed_product(&product("LaserJet Pro M404")));
}

#[test]
fn laptop_family_products_are_hidden() {
    assert!(!is_listed_product(&product("Gaming Laptop 15\"")));
    assert!(!is_listed_product(&product("MacBook Air M2")));
    assert!(!is_listed_product(&product("Chromebook Duet")));
    assert!(!is_listed_product(&product("Business Notebook")));
}

#[test]
fn keyword_match_is_case_insensitive() {
    assert!(!is_listed_product(&product("LAPTOP Stand")));
}

#[test]
fn filter_listed_drops_only_hidden() {
    let products = vec![product("Ink Tank"), product("Ultra Laptop"), product("Toner")];
    let listed = filter_listed(products);
    let names: Vec<&str> = listed.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Ink Tank", "Toner"]);
}

// =============================================================
// Categories
// =============================================================

#[test]
fn category_hidden_by_slug_too() {
    assert!(!is_listed_category(&category("Portables", "laptops")));
    assert!(is_listed_category(&category("Ink & Toner", "ink-toner")));
}

// =============================================================
// Brands
// =============================================================

#[test]
fn stocked_brands_pass() {
    assert!(is_stocked_brand(&brand("Brother")));
    assert!(is_stocked_brand(&brand("  epson ")));
    assert!(is_stocked_brand(&brand("HP")));
}

#[test]
fn unstocked_brands_are_dropped() {
    assert!(!is_stocked_brand(&brand("Dell")));
    assert!(!is_stocked_brand(&brand("Samsung")));
}
