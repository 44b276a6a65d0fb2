//! Signup page: create an account, then hand off to the login form.

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::ui::{ToastKind, UiState, show_toast};

/// Validate the signup form before it goes anywhere near the network.
/// Returns a user-facing complaint, or `None` when the form is acceptable.
fn validate_signup(name: &str, email: &str, password: &str, confirm: &str) -> Option<&'static str> {
    if name.trim().is_empty() || email.trim().is_empty() || password.is_empty() {
        return Some("Fill in every field");
    }
    if password.len() < 6 {
        return Some("Password must be at least 6 characters");
    }
    if password != confirm {
        return Some("Passwords do not match");
    }
    None
}

#[component]
pub fn SignupPage() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let navigate = use_navigate();

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = {
        let navigate = navigate.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            if busy.get_untracked() {
                return;
            }
            let name_value = name.get_untracked().trim().to_owned();
            let email_value = email.get_untracked().trim().to_owned();
            let password_value = password.get_untracked();
            if let Some(complaint) = validate_signup(
                &name_value,
                &email_value,
                &password_value,
                &confirm.get_untracked(),
            ) {
                show_toast(ui, complaint, ToastKind::Error);
                return;
            }
            busy.set(true);

            #[cfg(feature = "hydrate")]
            {
                let navigate = navigate.clone();
                leptos::task::spawn_local(async move {
                    match crate::net::api::register(&name_value, &email_value, &password_value)
                        .await
                    {
                        Ok(_) => {
                            show_toast(ui, "Account created — sign in", ToastKind::Success);
                            navigate("/login", NavigateOptions::default());
                        }
                        Err(e) => {
                            show_toast(ui, format!("Signup failed: {e}"), ToastKind::Error);
                            busy.set(false);
                        }
                    }
                });
            }
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = (name_value, email_value, password_value, &navigate);
                busy.set(false);
            }
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Create Account"</h1>
                <form class="auth-form" on:submit=on_submit>
                    <input
                        type="text"
                        placeholder="Full name"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
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
                    <input
                        type="password"
                        placeholder="Confirm password"
                        prop:value=move || confirm.get()
                        on:input=move |ev| confirm.set(event_target_value(&ev))
                    />
                    <button type="submit" disabled=move || busy.get()>
                        "Create Account"
                    </button>
                </form>
                <p class="auth-card__switch">
                    "Already registered? " <a href="/login">"Sign in"</a>
                </p>
            </div>
        </div>
    }
}
