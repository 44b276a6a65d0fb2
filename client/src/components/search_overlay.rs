//! Full-screen search overlay for small viewports.
//!
//! The header's inline search box is hidden on narrow screens; this overlay
//! is the same flow — type, submit, land on `/shop?search=…` — with recent
//! searches offered while the box is empty.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::api;
use crate::state::ui::UiState;
use crate::util::search;

/// Modal search overlay. Hidden unless `UiState::search_open`.
#[component]
pub fn SearchOverlay() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let navigate = use_navigate();

    let query = RwSignal::new(String::new());
    let recent = RwSignal::new(Vec::<String>::new());

    // Refresh history every time the overlay opens; the header may have
    // added entries since the last look.
    Effect::new(move || {
        if ui.get().search_open {
            recent.set(search::load_recent());
        }
    });

    let close = move |_| ui.update(UiState::close_search);

    let on_submit = {
        let navigate = navigate.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            let term = query.get_untracked().trim().to_owned();
            if term.is_empty() {
                return;
            }
            recent.set(search::remember(&recent.get_untracked(), &term));
            navigate(
                &format!("/shop?search={}", api::percent_encode(&term)),
                NavigateOptions::default(),
            );
            query.set(String::new());
            ui.update(UiState::close_search);
        }
    };

    view! {
        <Show when=move || ui.get().search_open>
            <div class="search-overlay">
                <div class="search-overlay__backdrop" on:click=close></div>
                <div class="search-overlay__panel">
                    <button class="search-overlay__close" aria-label="Close search" on:click=close>
                        "×"
                    </button>
                    <form on:submit=on_submit.clone()>
                        <input
                            type="text"
                            placeholder="Search the catalog..."
                            prop:value=move || query.get()
                            on:input=move |ev| query.set(event_target_value(&ev))
                        />
                        <button type="submit">"Search"</button>
                    </form>
                    <Show when=move || !recent.get().is_empty()>
                        <div class="search-overlay__recent">
                            <h4>"Recent searches"</h4>
                            {move || {
                                recent
                                    .get()
                                    .into_iter()
                                    .map(|term| {
                                        let fill = term.clone();
                                        view! {
                                            <button on:click=move |_| query.set(fill.clone())>
                                                {term.clone()}
                                            </button>
                                        }
                                    })
                                    .collect_view()
                            }}
                        </div>
                    </Show>
                </div>
            </div>
        </Show>
    }
}
