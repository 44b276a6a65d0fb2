//! Account page: profile details, profile update, and sign-out.
//!
//! Requires a customer session; anyone else is redirected to `/login`.
//! Saving re-persists the `user` key and fires the storage signal so other
//! tabs render the new name without a reload.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;
use crate::state::ui::{ToastKind, UiState, show_toast};
use crate::util::session;

#[component]
pub fn ProfilePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let navigate = use_navigate();

    // Redirect to login when no customer session is active.
    {
        let navigate = navigate.clone();
        Effect::new(move || {
            if !auth.get().is_logged_in() {
                navigate("/login", NavigateOptions::default());
            }
        });
    }

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    // Prefill the form from the session once it is present.
    Effect::new(move || {
        if let Some(user) = auth.get().user {
            name.set(user.name);
            email.set(user.email);
        }
    });

    let on_save = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let Some(user) = auth.get_untracked().user else {
            return;
        };
        let update = crate::net::types::ProfileUpdate {
            name: name.get_untracked().trim().to_owned(),
            email: email.get_untracked().trim().to_owned(),
        };
        if update.name.is_empty() || update.email.is_empty() {
            show_toast(ui, "Name and email are required", ToastKind::Error);
            return;
        }
        busy.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::update_profile(user.id, &update).await {
                Ok(updated) => {
                    session::store_user(&updated);
                    auth.update(|state| {
                        state.user = session::customer_only(Some(updated));
                    });
                    show_toast(ui, "Profile updated", ToastKind::Success);
                }
                Err(e) => show_toast(ui, format!("Update failed: {e}"), ToastKind::Error),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (user, update);
            busy.set(false);
        }
    };

    let on_logout = {
        let navigate = navigate.clone();
        move |_| {
            session::clear_user();
            auth.update(|state| state.user = None);
            navigate("/login", NavigateOptions::default());
        }
    };

    view! {
        <div class="profile-page">
            <div class="profile-page__hero">
                <h1>"Your Account"</h1>
                <p>{move || auth.get().user.map(|user| user.email).unwrap_or_default()}</p>
            </div>
            <div class="profile-page__body">
                <form class="profile-form" on:submit=on_save>
                    <h2>"Details"</h2>
                    <label>
                        "Full name"
                        <input
                            type="text"
                            prop:value=move || name.get()
                            on:input=move |ev| name.set(event_target_value(&ev))
                        />
                    </label>
                    <label>
                        "Email"
                        <input
                            type="email"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>
                    <button type="submit" disabled=move || busy.get()>
                        "Save Changes"
                    </button>
                </form>
                <div class="profile-page__links">
                    <a href="/orders">"View order history"</a>
                    <a href="/wishlist">"View wishlist"</a>
                    <button class="profile-page__logout" on:click=on_logout>
                        "Sign Out"
                    </button>
                </div>
            </div>
        </div>
    }
}
