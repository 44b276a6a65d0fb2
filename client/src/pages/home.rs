//! Landing page: hero, best-seller rail, category tiles, brand rail.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use cart::Product;
use leptos::prelude::*;

use crate::components::product_card::ProductCard;
use crate::net::api;
use crate::net::types::{Brand, Category};
use crate::util::catalog;

/// How many products the best-seller rail shows.
const BEST_SELLER_COUNT: usize = 8;

/// Pick the best-seller rail from the full catalog: listed products only,
/// priciest first — flagship hardware sells the page better than paper.
fn best_sellers(products: Vec<Product>, count: usize) -> Vec<Product> {
    let mut listed = catalog::filter_listed(products);
    listed.sort_by(|a, b| b.price.total_cmp(&a.price));
    listed.truncate(count);
    listed
}

#[component]
pub fn HomePage() -> impl IntoView {
    let products = RwSignal::new(Vec::<Product>::new());
    let categories = RwSignal::new(Vec::<Category>::new());
    let brands = RwSignal::new(Vec::<Brand>::new());
    let loading = RwSignal::new(true);

    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            if let Ok(fetched) = api::fetch_products(&api::ProductQuery::all(1000)).await {
                products.set(best_sellers(fetched, BEST_SELLER_COUNT));
            }
            if let Ok(fetched) = api::fetch_categories().await {
                categories.set(
                    fetched
                        .into_iter()
                        .filter(catalog::is_listed_category)
                        .collect(),
                );
            }
            if let Ok(fetched) = api::fetch_brands().await {
                brands.set(fetched.into_iter().filter(catalog::is_stocked_brand).collect());
            }
            loading.set(false);
        });
    }
    #[cfg(not(feature = "hydrate"))]
    loading.set(false);

    let best_seller_cards = move || {
        products
            .get()
            .into_iter()
            .map(|product| view! { <ProductCard product=product/> })
            .collect_view()
    };

    let category_tiles = move || {
        categories
            .get()
            .into_iter()
            .map(|category| {
                let href = format!("/shop?category={}", category.slug);
                view! {
                    <a class="home-category" href=href>
                        <span class="home-category__name">{category.name.clone()}</span>
                        <span class="home-category__cta">"Shop now"</span>
                    </a>
                }
            })
            .collect_view()
    };

    let brand_tiles = move || {
        brands
            .get()
            .into_iter()
            .map(|brand| {
                let href = format!("/shop?brand={}", api::percent_encode(&brand.name));
                view! { <a class="home-brand" href=href>{brand.name.clone()}</a> }
            })
            .collect_view()
    };

    view! {
        <div class="home-page">
            <section class="home-hero">
                <div class="home-hero__copy">
                    <span class="home-hero__kicker">"Office printing, solved"</span>
                    <h1>"Printers and consumables, without the guesswork."</h1>
                    <p>
                        "Six brands, one warehouse, free shipping. Find the machine, "
                        "then never run out of ink for it."
                    </p>
                    <a class="home-hero__cta" href="/shop">"Shop the catalog"</a>
                </div>
            </section>

            <section class="home-section">
                <div class="home-section__header">
                    <h2>"Best Sellers"</h2>
                    <a href="/shop">"View all"</a>
                </div>
                <Show
                    when=move || !loading.get()
                    fallback=|| view! { <p class="home-section__loading">"Loading products..."</p> }
                >
                    <div class="home-section__grid">{best_seller_cards}</div>
                </Show>
            </section>

            <section class="home-section">
                <div class="home-section__header">
                    <h2>"Shop by Category"</h2>
                </div>
                <div class="home-section__tiles">{category_tiles}</div>
            </section>

            <section class="home-section">
                <div class="home-section__header">
                    <h2>"Stocked Brands"</h2>
                </div>
                <div class="home-section__brands">{brand_tiles}</div>
            </section>

            <section class="home-features">
                <div class="home-features__item">
                    <h3>"Free shipping"</h3>
                    <p>"On every order, no minimum."</p>
                </div>
                <div class="home-features__item">
                    <h3>"Original stock"</h3>
                    <p>"Manufacturer cartridges only."</p>
                </div>
                <div class="home-features__item">
                    <h3>"30-day returns"</h3>
                    <p>"Unopened consumables, no questions."</p>
                </div>
            </section>
        </div>
    }
}
