//! Shop listing page, driven entirely by its URL query parameters.
//!
//! ARCHITECTURE
//! ============
//! `?search=`, `?category=`, and `?brand=` go to the backend; sorting and
//! paging happen client-side over the (filtered) result, matching how the
//! backend is actually deployed — it returns the whole matching set and
//! the storefront slices it. Changing any filter navigates to a new URL,
//! so the browser back button walks filter history for free.

#[cfg(test)]
#[path = "shop_test.rs"]
mod shop_test;

use cart::Product;
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::components::product_card::ProductCard;
use crate::net::api;
use crate::state::ui::UiState;
#[cfg(feature = "hydrate")]
use crate::state::ui::{ToastKind, show_toast};
use crate::util::catalog;

/// Products shown per page.
const PAGE_SIZE: usize = 12;

/// Client-side sort orders for the listing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum SortOrder {
    /// Backend order, whatever it is.
    #[default]
    Featured,
    PriceAscending,
    PriceDescending,
    NameAscending,
}

impl SortOrder {
    fn from_param(param: &str) -> Self {
        match param {
            "price-asc" => Self::PriceAscending,
            "price-desc" => Self::PriceDescending,
            "name" => Self::NameAscending,
            _ => Self::Featured,
        }
    }

    fn to_param(self) -> &'static str {
        match self {
            Self::Featured => "",
            Self::PriceAscending => "price-asc",
            Self::PriceDescending => "price-desc",
            Self::NameAscending => "name",
        }
    }
}

/// Filters as read from the URL.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
struct ShopFilters {
    search: Option<String>,
    category: Option<String>,
    brand: Option<String>,
    sort: SortOrder,
    page: usize,
}

impl ShopFilters {
    /// Parse from query parameters. Absent or malformed values fall back
    /// to defaults; page numbers are 1-based in the URL.
    fn from_params(
        search: Option<String>,
        category: Option<String>,
        brand: Option<String>,
        sort: Option<String>,
        page: Option<String>,
    ) -> Self {
        let nonempty = |value: Option<String>| value.filter(|v| !v.trim().is_empty());
        Self {
            search: nonempty(search),
            category: nonempty(category),
            brand: nonempty(brand),
            sort: SortOrder::from_param(sort.as_deref().unwrap_or_default()),
            page: page
                .and_then(|raw| raw.parse::<usize>().ok())
                .map_or(1, |p| p.max(1)),
        }
    }

    /// The backend query for these filters.
    fn to_product_query(&self) -> api::ProductQuery {
        api::ProductQuery {
            search: self.search.clone(),
            category: self.category.clone(),
            brand: self.brand.clone(),
            limit: Some(1000),
        }
    }

    /// The shop URL for these filters. Page 1 and featured sort are left
    /// implicit to keep URLs short and shareable.
    fn to_href(&self) -> String {
        let mut pairs = Vec::new();
        if let Some(search) = &self.search {
            pairs.push(format!("search={}", api::percent_encode(search)));
        }
        if let Some(category) = &self.category {
            pairs.push(format!("category={}", api::percent_encode(category)));
        }
        if let Some(brand) = &self.brand {
            pairs.push(format!("brand={}", api::percent_encode(brand)));
        }
        if self.sort != SortOrder::Featured {
            pairs.push(format!("sort={}", self.sort.to_param()));
        }
        if self.page > 1 {
            pairs.push(format!("page={}", self.page));
        }
        if pairs.is_empty() {
            "/shop".to_owned()
        } else {
            format!("/shop?{}", pairs.join("&"))
        }
    }
}

/// Apply a sort order in place.
fn apply_sort(products: &mut [Product], sort: SortOrder) {
    match sort {
        SortOrder::Featured => {}
        SortOrder::PriceAscending => products.sort_by(|a, b| a.price.total_cmp(&b.price)),
        SortOrder::PriceDescending => products.sort_by(|a, b| b.price.total_cmp(&a.price)),
        SortOrder::NameAscending => {
            products.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
        }
    }
}

/// Number of pages needed for `count` products.
fn total_pages(count: usize) -> usize {
    count.div_ceil(PAGE_SIZE).max(1)
}

/// The slice of `products` visible on 1-based `page`.
fn page_slice(products: &[Product], page: usize) -> &[Product] {
    let start = (page.max(1) - 1) * PAGE_SIZE;
    if start >= products.len() {
        return &[];
    }
    let end = (start + PAGE_SIZE).min(products.len());
    &products[start..end]
}

#[component]
pub fn ShopPage() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let navigate = use_navigate();
    let query_map = use_query_map();

    let filters = Memo::new(move |_| {
        let map = query_map.get();
        ShopFilters::from_params(
            map.get("search"),
            map.get("category"),
            map.get("brand"),
            map.get("sort"),
            map.get("page"),
        )
    });

    let products = RwSignal::new(Vec::<Product>::new());
    let loading = RwSignal::new(true);
    let fetch_seq = RwSignal::new(0u64);

    // Refetch whenever the backend-relevant filters change. Sorting and
    // paging are client-side and do not hit the network.
    Effect::new(move || {
        let request = filters.get().to_product_query();
        let issued = fetch_seq.get_untracked() + 1;
        fetch_seq.set(issued);
        loading.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match api::fetch_products(&request).await {
                Ok(fetched) => {
                    if fetch_seq.get_untracked() == issued {
                        products.set(catalog::filter_listed(fetched));
                    }
                }
                Err(e) => {
                    show_toast(ui, format!("Could not load products: {e}"), ToastKind::Error);
                }
            }
            if fetch_seq.get_untracked() == issued {
                loading.set(false);
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (request, issued, ui);
            loading.set(false);
        }
    });

    let sorted = Memo::new(move |_| {
        let mut list = products.get();
        apply_sort(&mut list, filters.get().sort);
        list
    });

    let result_count = move || sorted.get().len();
    let pages = move || total_pages(result_count());
    let current_page = move || filters.get().page.min(pages());

    let visible_cards = move || {
        page_slice(&sorted.get(), current_page())
            .iter()
            .cloned()
            .map(|product| view! { <ProductCard product=product/> })
            .collect_view()
    };

    let on_sort_change = {
        let navigate = navigate.clone();
        move |ev: leptos::ev::Event| {
            let mut updated = filters.get_untracked();
            updated.sort = SortOrder::from_param(&event_target_value(&ev));
            updated.page = 1;
            navigate(&updated.to_href(), NavigateOptions::default());
        }
    };

    let heading = move || {
        let current = filters.get();
        if let Some(search) = current.search {
            format!("Results for \"{search}\"")
        } else if let Some(category) = current.category {
            format!("Category: {category}")
        } else if let Some(brand) = current.brand {
            format!("Brand: {brand}")
        } else {
            "All Products".to_owned()
        }
    };

    let pagination = move || {
        let page_count = pages();
        let current = current_page();
        (1..=page_count)
            .map(|page| {
                let mut target = filters.get_untracked();
                target.page = page;
                let href = target.to_href();
                view! {
                    <a
                        class="shop-page__page-link"
                        class=("shop-page__page-link--current", page == current)
                        href=href
                    >
                        {page}
                    </a>
                }
            })
            .collect_view()
    };

    view! {
        <div class="shop-page">
            <div class="shop-page__hero">
                <h1>{heading}</h1>
                <span class="shop-page__count">{result_count} " products"</span>
            </div>

            <div class="shop-page__toolbar">
                <a class="shop-page__clear" href="/shop">"Clear filters"</a>
                <label class="shop-page__sort">
                    "Sort by"
                    <select
                        prop:value=move || filters.get().sort.to_param().to_owned()
                        on:change=on_sort_change
                    >
                        <option value="">"Featured"</option>
                        <option value="price-asc">"Price: low to high"</option>
                        <option value="price-desc">"Price: high to low"</option>
                        <option value="name">"Name"</option>
                    </select>
                </label>
            </div>

            <Show
                when=move || !loading.get()
                fallback=|| view! { <p class="shop-page__loading">"Loading products..."</p> }
            >
                <Show
                    when=move || (result_count() > 0)
                    fallback=|| {
                        view! {
                            <div class="shop-page__empty">
                                <h2>"Nothing matched."</h2>
                                <a href="/shop">"Reset the filters"</a>
                            </div>
                        }
                    }
                >
                    <div class="shop-page__grid">{visible_cards}</div>
                    <Show when=move || (pages() > 1)>
                        <div class="shop-page__pagination">{pagination}</div>
                    </Show>
                </Show>
            </Show>
        </div>
    }
}
