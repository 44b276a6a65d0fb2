//! Single-toast notification host.
//!
//! Renders whatever toast is current in `UiState`. Display lifetime is
//! owned by `state::ui::show_toast`; this component only draws.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

use leptos::prelude::*;

use crate::state::ui::{Toast, ToastKind, UiState};

/// CSS class for a toast of the given kind.
fn toast_class(kind: ToastKind) -> &'static str {
    match kind {
        ToastKind::Success => "toast toast--success",
        ToastKind::Error => "toast toast--error",
    }
}

/// Fixed-position toast area. At most one toast is ever visible.
#[component]
pub fn ToastHost() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let current = move || ui.get().toast;

    view! {
        <div class="toast-host" aria-live="polite">
            {move || {
                current().map(|Toast { message, kind }| {
                    view! { <div class=toast_class(kind)>{message}</div> }
                })
            }}
        </div>
    }
}
