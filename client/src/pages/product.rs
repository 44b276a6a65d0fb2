//! Product detail page: gallery, quantity picker, add to cart, wishlist,
//! and a related-products rail.

#[cfg(test)]
#[path = "product_test.rs"]
mod product_test;

use cart::Product;
use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::product_card::ProductCard;
#[cfg(feature = "hydrate")]
use crate::net::api;
use crate::state::cart::{StoreSignal, add_to_cart, toggle_wishlist};
use crate::state::ui::UiState;
#[cfg(feature = "hydrate")]
use crate::state::ui::{ToastKind, show_toast};
use crate::util::catalog;
use crate::util::format::format_price;

/// How many related products the rail shows.
const RELATED_COUNT: usize = 4;

/// Pick related products: same brand first, then anything else listed,
/// never the product being viewed.
fn related_picks(pool: Vec<Product>, current: &Product, count: usize) -> Vec<Product> {
    let listed: Vec<Product> = catalog::filter_listed(pool)
        .into_iter()
        .filter(|candidate| candidate.id != current.id)
        .collect();
    let mut picks: Vec<Product> = listed
        .iter()
        .filter(|candidate| {
            candidate.brand_name.is_some() && candidate.brand_name == current.brand_name
        })
        .cloned()
        .collect();
    for candidate in listed {
        if picks.len() >= count {
            break;
        }
        if picks.iter().all(|picked| picked.id != candidate.id) {
            picks.push(candidate);
        }
    }
    picks.truncate(count);
    picks
}

#[component]
pub fn ProductPage() -> impl IntoView {
    let store = expect_context::<StoreSignal>();
    let ui = expect_context::<RwSignal<UiState>>();
    let params = use_params_map();

    let product = RwSignal::new(None::<Product>);
    let related = RwSignal::new(Vec::<Product>::new());
    let loading = RwSignal::new(true);
    let quantity = RwSignal::new(1i64);
    let active_image = RwSignal::new(0usize);

    // Fetch on every slug change; the page is reused when navigating
    // between related products.
    Effect::new(move || {
        let Some(slug) = params.get().get("slug") else {
            return;
        };
        loading.set(true);
        product.set(None);
        related.set(Vec::new());
        quantity.set(1);
        active_image.set(0);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match api::fetch_product(&slug).await {
                Ok(fetched) => {
                    let pool_request = api::ProductQuery::all(100);
                    if let Ok(pool) = api::fetch_products(&pool_request).await {
                        related.set(related_picks(pool, &fetched, RELATED_COUNT));
                    }
                    product.set(Some(fetched));
                }
                Err(e) => {
                    show_toast(ui, format!("Could not load product: {e}"), ToastKind::Error);
                }
            }
            loading.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (slug, ui);
            loading.set(false);
        }
    });

    let detail = move || {
        product.get().map(|current| {
            let in_wishlist = {
                let id = current.id;
                move || store.with(|state| state.is_in_wishlist(id))
            };

            let gallery_len = current.images.len();
            let gallery = current.images.clone();
            let thumbs = move || {
                gallery
                    .iter()
                    .enumerate()
                    .map(|(index, path)| {
                        let path = path.clone();
                        view! {
                            <button
                                class="product-detail__thumb"
                                class=("product-detail__thumb--active", move || {
                                    active_image.get() == index
                                })
                                on:click=move |_| active_image.set(index)
                            >
                                <img src=path.clone() alt=""/>
                            </button>
                        }
                    })
                    .collect_view()
            };

            let main_image = {
                let current = current.clone();
                move || current.image_at(active_image.get()).to_owned()
            };

            let add_product = current.clone();
            let on_add = move |_| {
                add_to_cart(store, ui, add_product.clone(), quantity.get_untracked());
                ui.update(UiState::open_cart_drawer);
            };

            let wish_product = current.clone();
            let on_wishlist = move |_| {
                toggle_wishlist(store, ui, wish_product.clone());
            };

            view! {
                <div class="product-detail">
                    <div class="product-detail__gallery">
                        <div class="product-detail__main">
                            <img src=main_image alt=current.name.clone()/>
                        </div>
                        <Show when=move || (gallery_len > 1)>
                            <div class="product-detail__thumbs">{thumbs.clone()}</div>
                        </Show>
                    </div>
                    <div class="product-detail__info">
                        <span class="product-detail__brand">
                            {current.brand_name.clone().unwrap_or_default()}
                        </span>
                        <h1>{current.name.clone()}</h1>
                        <span class="product-detail__price">{format_price(current.price)}</span>
                        <p class="product-detail__description">
                            {current.description.clone().unwrap_or_default()}
                        </p>
                        <div class="product-detail__actions">
                            <div class="quantity-stepper">
                                <button on:click=move |_| {
                                    quantity.update(|q| *q = (*q - 1).max(1));
                                }>
                                    "−"
                                </button>
                                <span>{move || quantity.get()}</span>
                                <button on:click=move |_| quantity.update(|q| *q += 1)>
                                    "+"
                                </button>
                            </div>
                            <button class="product-detail__add" on:click=on_add>
                                "Add to Bag"
                            </button>
                            <button
                                class="product-detail__wishlist"
                                class=("product-detail__wishlist--active", in_wishlist)
                                on:click=on_wishlist
                            >
                                "♥"
                            </button>
                        </div>
                        <ul class="product-detail__assurances">
                            <li>"Free shipping, no minimum"</li>
                            <li>"Original manufacturer stock"</li>
                            <li>"30-day returns on unopened items"</li>
                        </ul>
                    </div>
                </div>
            }
        })
    };

    let related_cards = move || {
        related
            .get()
            .into_iter()
            .map(|candidate| view! { <ProductCard product=candidate/> })
            .collect_view()
    };

    view! {
        <div class="product-page">
            <Show
                when=move || !loading.get()
                fallback=|| view! { <p class="product-page__loading">"Loading product..."</p> }
            >
                <Show
                    when=move || product.get().is_some()
                    fallback=|| {
                        view! {
                            <div class="product-page__missing">
                                <h2>"Product not found."</h2>
                                <a href="/shop">"Back to the shop"</a>
                            </div>
                        }
                    }
                >
                    {detail}
                </Show>
            </Show>

            <Show when=move || !related.get().is_empty()>
                <section class="product-page__related">
                    <h2>"You might also need"</h2>
                    <div class="product-page__related-grid">{related_cards}</div>
                </section>
            </Show>
        </div>
    }
}
