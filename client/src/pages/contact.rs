//! Contact page posting to the backend's `/contacts` endpoint.

use leptos::prelude::*;

use crate::net::types::ContactRequest;
use crate::state::ui::{ToastKind, UiState, show_toast};

#[component]
pub fn ContactPage() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let subject = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let request = ContactRequest {
            name: name.get_untracked().trim().to_owned(),
            email: email.get_untracked().trim().to_owned(),
            subject: subject.get_untracked().trim().to_owned(),
            message: message.get_untracked().trim().to_owned(),
        };
        if request.name.is_empty() || request.email.is_empty() || request.message.is_empty() {
            show_toast(ui, "Name, email, and message are required", ToastKind::Error);
            return;
        }
        busy.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::submit_contact(&request).await {
                Ok(()) => {
                    name.set(String::new());
                    email.set(String::new());
                    subject.set(String::new());
                    message.set(String::new());
                    show_toast(ui, "Message sent — we reply within a day", ToastKind::Success);
                }
                Err(e) => show_toast(ui, format!("Send failed: {e}"), ToastKind::Error),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            busy.set(false);
        }
    };

    view! {
        <div class="content-page">
            <div class="content-page__hero">
                <h1>"Contact Us"</h1>
                <p>"Questions about stock, compatibility, or an order in flight."</p>
            </div>
            <div class="content-page__body">
                <form class="contact-form" on:submit=on_submit>
                    <div class="contact-form__row">
                        <input
                            type="text"
                            placeholder="Your name"
                            prop:value=move || name.get()
                            on:input=move |ev| name.set(event_target_value(&ev))
                        />
                        <input
                            type="email"
                            placeholder="you@example.com"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </div>
                    <input
                        type="text"
                        placeholder="Subject"
                        prop:value=move || subject.get()
                        on:input=move |ev| subject.set(event_target_value(&ev))
                    />
                    <textarea
                        rows="6"
                        placeholder="How can we help?"
                        prop:value=move || message.get()
                        on:input=move |ev| message.set(event_target_value(&ev))
                    ></textarea>
                    <button type="submit" disabled=move || busy.get()>
                        "Send Message"
                    </button>
                </form>
            </div>
        </div>
    }
}
