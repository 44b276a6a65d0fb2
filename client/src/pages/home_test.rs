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

#[test]
fn best_sellers_sorts_priciest_first() {
    let picks = best_sellers(
        vec![
            product(1, "Paper", 8.0),
            product(2, "Laser Printer", 400.0),
            product(3, "Toner", 60.0),
        ],
        3,
    );
    let ids: Vec<i64> = picks.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![2, 3, 1]);
}

#[test]
fn best_sellers_truncates_to_count() {
    let picks = best_sellers(
        (1..=10).map(|id| product(id, "Printer", 100.0)).collect(),
        4,
    );
    assert_eq!(picks.len(), 4);
}

#[test]
fn best_sellers_hides_unlisted_products() {
    let picks = best_sellers(
        vec![product(1, "Gaming Laptop", 900.0), product(2, "Printer", 100.0)],
        8,
    );
    let ids: Vec<i64> = picks.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![2]);
}
