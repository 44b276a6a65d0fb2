//! Login page: email + password against the backend session endpoint.
//!
//! On success the user blob is persisted under the `user` key and the
//! storage signal fires so sibling tabs pick the session up. Admin
//! accounts authenticate fine but read as logged out on the storefront;
//! they are sent home like everyone else and simply see no account chrome.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;
use crate::state::ui::{ToastKind, UiState, show_toast};
#[cfg(feature = "hydrate")]
use crate::util::session;

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = {
        let navigate = navigate.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            if busy.get_untracked() {
                return;
            }
            let email_value = email.get_untracked().trim().to_owned();
            let password_value = password.get_untracked();
            if email_value.is_empty() || password_value.is_empty() {
                show_toast(ui, "Enter your email and password", ToastKind::Error);
                return;
            }
            busy.set(true);

            #[cfg(feature = "hydrate")]
            {
                let navigate = navigate.clone();
                leptos::task::spawn_local(async move {
                    match crate::net::api::login(&email_value, &password_value).await {
                        Ok(user) => {
                            session::store_user(&user);
                            auth.update(|state| {
                                state.user = session::customer_only(Some(user));
                            });
                            show_toast(ui, "Welcome back", ToastKind::Success);
                            navigate("/", NavigateOptions::default());
                        }
                        Err(e) => {
                            show_toast(ui, format!("Sign-in failed: {e}"), ToastKind::Error);
                            busy.set(false);
                        }
                    }
                });
            }
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = (email_value, password_value, &navigate, auth);
                busy.set(false);
            }
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Sign In"</h1>
                <p class="auth-card__subtitle">"Access orders, faster checkout, and your wishlist."</p>
                <form class="auth-form" on:submit=on_submit>
                    <input
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button type="submit" disabled=move || busy.get()>
                        "Sign In"
                    </button>
                </form>
                <p class="auth-card__switch">
                    "New here? " <a href="/signup">"Create an account"</a>
                </p>
            </div>
        </div>
    }
}
