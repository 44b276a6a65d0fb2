//! Site footer: navigation links and the newsletter signup form.

use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use crate::net::api;
use crate::state::ui::{ToastKind, UiState, show_toast};

/// Fixed site footer.
#[component]
pub fn Footer() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let email = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_subscribe = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let address = email.get_untracked().trim().to_owned();
        if address.is_empty() {
            show_toast(ui, "Enter an email address first", ToastKind::Error);
            return;
        }
        busy.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match api::subscribe_newsletter(&address).await {
                Ok(()) => {
                    email.set(String::new());
                    show_toast(ui, "Subscribed — see you in the inbox", ToastKind::Success);
                }
                Err(e) => show_toast(ui, format!("Subscription failed: {e}"), ToastKind::Error),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = address;
            busy.set(false);
        }
    };

    view! {
        <footer class="site-footer">
            <div class="site-footer__columns">
                <div class="site-footer__column">
                    <span class="site-footer__wordmark">"PRINTMART"</span>
                    <p class="site-footer__blurb">
                        "Printers, ink, and toner from the brands your office already runs on."
                    </p>
                </div>
                <div class="site-footer__column">
                    <h4>"Shop"</h4>
                    <a href="/shop">"All Products"</a>
                    <a href="/wishlist">"Wishlist"</a>
                    <a href="/orders">"Track Orders"</a>
                </div>
                <div class="site-footer__column">
                    <h4>"Company"</h4>
                    <a href="/about">"About Us"</a>
                    <a href="/contact">"Contact Us"</a>
                    <a href="/faq">"FAQ"</a>
                </div>
                <div class="site-footer__column">
                    <h4>"Newsletter"</h4>
                    <p>"Restock reminders and launch pricing, monthly."</p>
                    <form class="site-footer__newsletter" on:submit=on_subscribe>
                        <input
                            type="email"
                            placeholder="you@example.com"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                        <button type="submit" disabled=move || busy.get()>
                            "Subscribe"
                        </button>
                    </form>
                </div>
            </div>
            <div class="site-footer__legal">
                <span>"© Printmart. All rights reserved."</span>
            </div>
        </footer>
    }
}
