use super::*;

fn product(id: i64, name: &str, price: f64) -> Product {
    Product {
        id,
        name: name.to_owned(),
        slug: String::new(),
        price,
        images: Vec::new(),
        brand_name: None,
        description: None,
    }
}

fn filters() -> ShopFilters {
    ShopFilters::default()
}

// =============================================================
// SortOrder params
// =============================================================

#[test]
fn sort_param_roundtrip() {
    for sort in [
        SortOrder::PriceAscending,
        SortOrder::PriceDescending,
        SortOrder::NameAscending,
    ] {
        assert_eq!(SortOrder::from_param(sort.to_param()), sort);
    }
}

#[test]
fn unknown_sort_param_is_featured() {
    assert_eq!(SortOrder::from_param("weird"), SortOrder::Featured);
    assert_eq!(SortOrder::from_param(""), SortOrder::Featured);
}

// =============================================================
// ShopFilters parsing
// =============================================================

#[test]
fn from_params_defaults() {
    let parsed = ShopFilters::from_params(None, None, None, None, None);
    assert_eq!(parsed, filters());
    assert_eq!(parsed.page, 1);
}

#[test]
fn from_params_ignores_blank_values() {
    let parsed = ShopFilters::from_params(Some("  ".to_owned()), None, None, None, None);
    assert!(parsed.search.is_none());
}

#[test]
fn from_params_parses_page() {
    let parsed = ShopFilters::from_params(None, None, None, None, Some("3".to_owned()));
    assert_eq!(parsed.page, 3);
}

#[test]
fn from_params_rejects_bad_page() {
    let parsed = ShopFilters::from_params(None, None, None, None, Some("abc".to_owned()));
    assert_eq!(parsed.page, 1);
    let parsed = ShopFilters::from_params(None, None, None, None, Some("0".to_owned()));
    assert_eq!(parsed.page, 1);
}

// =============================================================
// ShopFilters hrefs
// =============================================================

#[test]
fn href_for_defaults_is_bare() {
    assert_eq!(filters().to_href(), "/shop");
}

#[test]
fn href_encodes_search_and_drops_defaults() {
    let current = ShopFilters {
        search: Some("laser printer".to_owned()),
        ..filters()
    };
    assert_eq!(current.to_href(), "/shop?search=laser%20printer");
}

#[test]
fn href_includes_sort_and_page_when_set() {
    let current = ShopFilters {
        brand: Some("HP".to_owned()),
        sort: SortOrder::PriceDescending,
        page: 2,
        ..filters()
    };
    assert_eq!(current.to_href(), "/shop?brand=HP&sort=price-desc&page=2");
}

// =============================================================
// Sorting
// =============================================================

#[test]
fn sort_price_ascending() {
    let mut list = vec![product(1, "A", 30.0), product(2, "B", 10.0), product(3, "C", 20.0)];
    apply_sort(&mut list, SortOrder::PriceAscending);
    let ids: Vec<i64> = list.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![2, 3, 1]);
}

#[test]
fn sort_price_descending() {
    let mut list = vec![product(1, "A", 30.0), product(2, "B", 10.0)];
    apply_sort(&mut list, SortOrder::PriceDescending);
    let ids: Vec<i64> = list.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![1, 2]);
}

#[test]
fn sort_name_is_case_insensitive() {
    let mut list = vec![product(1, "zeta", 1.0), product(2, "Alpha", 1.0)];
    apply_sort(&mut list, SortOrder::NameAscending);
    let ids: Vec<i64> = list.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![2, 1]);
}

#[test]
fn sort_featured_preserves_order() {
    let mut list = vec![product(3, "C", 5.0), product(1, "A", 50.0)];
    apply_sort(&mut list, SortOrder::Featured);
    let ids: Vec<i64> = list.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![3, 1]);
}

// =============================================================
// Pagination
// =============================================================

#[test]
fn one_page_for_empty_results() {
    assert_eq!(total_pages(0), 1);
}

#[test]
fn pages_round_up() {
    assert_eq!(total_pages(PAGE_SIZE), 1);
    assert_eq!(total_pages(PAGE_SIZE + 1), 2);
}

#[test]
fn page_slice_windows_results() {
    let list: Vec<Product> = (1..=30).map(|id| product(id, "P", 1.0)).collect();
    assert_eq!(page_slice(&list, 1).len(), PAGE_SIZE);
    assert_eq!(page_slice(&list, 3).len(), 30 - 2 * PAGE_SIZE);
    assert_eq!(page_slice(&list, 1)[0].id, 1);
    assert_eq!(page_slice(&list, 2)[0].id, 13);
}

#[test]
fn page_slice_past_the_end_is_empty() {
    let list: Vec<Product> = (1..=5).map(|id| product(id, "P", 1.0)).collect();
    assert!(page_slice(&list, 4).is_empty());
}
