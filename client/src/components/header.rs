//! Site header: navigation, catalog menus, search, and session chrome.
//!
//! SYSTEM CONTEXT
//! ==============
//! The header is mounted once above the router outlet and stays alive for
//! the whole session, so it owns the debounced search-suggestion flow and
//! the recent-search history. Cart and wishlist badges read the shared
//! store; the account chip reads the auth session that `app` keeps in sync
//! across tabs.

#[cfg(test)]
#[path = "header_test.rs"]
mod header_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use cart::Product;

use crate::net::api;
use crate::net::types::{Brand, Category};
use crate::state::auth::AuthState;
use crate::state::cart::StoreSignal;
use crate::state::ui::UiState;
use crate::util::format::format_price;
use crate::util::search;
use crate::util::session;

/// Delay between the last keystroke and the suggestion request.
const SUGGESTION_DEBOUNCE_MS: u64 = 300;

/// How many product suggestions the dropdown shows.
const SUGGESTION_LIMIT: u32 = 6;

/// Categories whose name matches `term`, searched across parents and
/// children, capped at 4 like the product dropdown's category strip.
fn matching_categories(categories: &[Category], term: &str) -> Vec<Category> {
    let term = term.to_lowercase();
    categories
        .iter()
        .flat_map(|parent| std::iter::once(parent).chain(parent.children.iter()))
        .filter(|category| category.name.to_lowercase().contains(&term))
        .take(4)
        .cloned()
        .collect()
}

/// Shop route for a free-text search.
fn search_href(term: &str) -> String {
    format!("/shop?search={}", api::percent_encode(term))
}

/// Fixed site header.
#[component]
pub fn Header() -> impl IntoView {
    let store = expect_context::<StoreSignal>();
    let ui = expect_context::<RwSignal<UiState>>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    let categories = RwSignal::new(Vec::<Category>::new());
    let brands = RwSignal::new(Vec::<Brand>::new());

    // One-shot catalog fetch for the menus. Menu data failing to load is
    // not worth a toast; the links below still work.
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            if let Ok(fetched) = api::fetch_categories().await {
                categories.set(
                    fetched
                        .into_iter()
                        .filter(crate::util::catalog::is_listed_category)
                        .collect(),
                );
            }
            if let Ok(fetched) = api::fetch_brands().await {
                brands.set(
                    fetched
                        .into_iter()
                        .filter(crate::util::catalog::is_stocked_brand)
                        .collect(),
                );
            }
        });
    }

    // Search box state.
    let query = RwSignal::new(String::new());
    let suggestions = RwSignal::new(Vec::<Product>::new());
    let suggested_categories = RwSignal::new(Vec::<Category>::new());
    let recent = RwSignal::new(search::load_recent());
    let debounce_seq = RwSignal::new(0u64);

    // Debounced suggestion fetch: each keystroke arms a timer; only the
    // newest timer's fetch lands.
    Effect::new(move || {
        let term = query.get();
        let issued = debounce_seq.get_untracked() + 1;
        debounce_seq.set(issued);

        if term.trim().is_empty() {
            suggestions.set(Vec::new());
            suggested_categories.set(Vec::new());
            return;
        }

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(std::time::Duration::from_millis(
                SUGGESTION_DEBOUNCE_MS,
            ))
            .await;
            if debounce_seq.get_untracked() != issued {
                return;
            }
            let request = api::ProductQuery::search(term.trim(), SUGGESTION_LIMIT);
            if let Ok(products) = api::fetch_products(&request).await {
                if debounce_seq.get_untracked() == issued {
                    suggestions.set(crate::util::catalog::filter_listed(products));
                    suggested_categories
                        .set(matching_categories(&categories.get_untracked(), term.trim()));
                }
            }
        });
    });

    let run_search = {
        let navigate = navigate.clone();
        move || {
            let term = query.get_untracked().trim().to_owned();
            if term.is_empty() {
                return;
            }
            recent.set(search::remember(&recent.get_untracked(), &term));
            navigate(&search_href(&term), NavigateOptions::default());
            query.set(String::new());
            ui.update(UiState::close_search);
        }
    };

    let on_search_submit = {
        let run_search = run_search.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            run_search();
        }
    };

    // Session chrome.
    let logout = {
        let navigate = navigate.clone();
        move |_| {
            session::clear_user();
            auth.update(|state| state.user = None);
            navigate("/login", NavigateOptions::default());
        }
    };

    let cart_count = move || store.with(cart::CartStore::cart_count);
    let wishlist_count = move || store.with(cart::CartStore::wishlist_count);

    let suggestion_rows = move || {
        suggestions
            .get()
            .into_iter()
            .map(|product| {
                let href = format!("/product/{}", product.slug);
                view! {
                    <a class="header-search__suggestion" href=href on:click=move |_| query.set(String::new())>
                        <img src=product.primary_image().to_owned() alt=product.name.clone()/>
                        <span class="header-search__suggestion-name">{product.name.clone()}</span>
                        <span class="header-search__suggestion-price">
                            {format_price(product.price)}
                        </span>
                    </a>
                }
            })
            .collect_view()
    };

    let category_rows = move || {
        suggested_categories
            .get()
            .into_iter()
            .map(|category| {
                let href = format!("/shop?category={}", category.slug);
                view! {
                    <a class="header-search__suggestion header-search__suggestion--category"
                        href=href
                        on:click=move |_| query.set(String::new())
                    >
                        <span>"in " {category.name.clone()}</span>
                    </a>
                }
            })
            .collect_view()
    };

    let category_menu = move || {
        categories
            .get()
            .into_iter()
            .map(|parent| {
                let parent_href = format!("/shop?category={}", parent.slug);
                let children = parent
                    .children
                    .iter()
                    .map(|child| {
                        let href = format!("/shop?category={}", child.slug);
                        view! { <a class="header-menu__child" href=href>{child.name.clone()}</a> }
                    })
                    .collect_view();
                view! {
                    <div class="header-menu__group">
                        <a class="header-menu__parent" href=parent_href>{parent.name.clone()}</a>
                        <div class="header-menu__children">{children}</div>
                    </div>
                }
            })
            .collect_view()
    };

    let brand_menu = move || {
        brands
            .get()
            .into_iter()
            .map(|brand| {
                let href = format!("/shop?brand={}", api::percent_encode(&brand.name));
                view! { <a class="header-menu__child" href=href>{brand.name.clone()}</a> }
            })
            .collect_view()
    };

    view! {
        <header class="site-header">
            <div class="site-header__top">
                <a class="site-header__logo" href="/">
                    <span class="site-header__wordmark">"PRINTMART"</span>
                    <span class="site-header__tagline">"Printer & Ink Hardware"</span>
                </a>

                <div class="header-search">
                    <form class="header-search__form" on:submit=on_search_submit>
                        <input
                            type="text"
                            placeholder="Search printers, ink, toner..."
                            prop:value=move || query.get()
                            on:input=move |ev| query.set(event_target_value(&ev))
                        />
                        <button type="submit">"Search"</button>
                    </form>
                    <Show when=move || !query.get().trim().is_empty() && !suggestions.get().is_empty()>
                        <div class="header-search__dropdown">
                            {suggestion_rows}
                            {category_rows}
                        </div>
                    </Show>
                    <Show when=move || {
                        query.get().trim().is_empty() && !recent.get().is_empty()
                    }>
                        <div class="header-search__recent">
                            {move || {
                                recent
                                    .get()
                                    .into_iter()
                                    .map(|term| {
                                        let href = search_href(&term);
                                        view! { <a href=href>{term.clone()}</a> }
                                    })
                                    .collect_view()
                            }}
                        </div>
                    </Show>
                </div>

                <div class="site-header__actions">
                    <button
                        class="site-header__action site-header__action--search"
                        aria-label="Open search"
                        on:click=move |_| ui.update(UiState::open_search)
                    >
                        "Search"
                    </button>
                    <a class="site-header__action" href="/wishlist" aria-label="Wishlist">
                        "♥"
                        <Show when=move || (wishlist_count() > 0)>
                            <span class="site-header__badge">{wishlist_count}</span>
                        </Show>
                    </a>
                    <button
                        class="site-header__action"
                        aria-label="Open cart"
                        on:click=move |_| ui.update(UiState::open_cart_drawer)
                    >
                        "Bag"
                        <span class="site-header__badge">{cart_count}</span>
                    </button>
                    <Show
                        when=move || auth.get().is_logged_in()
                        fallback=|| {
                            view! {
                                <a class="site-header__action" href="/login" aria-label="Sign in">
                                    "Sign In"
                                </a>
                            }
                        }
                    >
                        <div class="header-account">
                            <span class="header-account__avatar">
                                {move || auth.get().avatar_letter()}
                            </span>
                            <div class="header-account__menu">
                                <a href="/profile">"My Profile"</a>
                                <a href="/orders">"My Orders"</a>
                                <button on:click=logout.clone()>"Sign Out"</button>
                            </div>
                        </div>
                    </Show>
                </div>
            </div>

            <nav class="site-header__nav">
                <a href="/">"Home"</a>
                <div class="header-menu">
                    <a href="/shop">"Shop"</a>
                    <div class="header-menu__dropdown">{category_menu}</div>
                </div>
                <div class="header-menu">
                    <span class="header-menu__label">"Brands"</span>
                    <div class="header-menu__dropdown">{brand_menu}</div>
                </div>
                <a href="/about">"About"</a>
                <a href="/contact">"Contact"</a>
                <a href="/faq">"FAQ"</a>
            </nav>
        </header>
    }
}
