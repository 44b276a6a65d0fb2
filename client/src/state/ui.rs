//! Local UI chrome state (cart drawer, search overlay, toast).
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of the persisted cart state so
//! the drawer and overlay can open and close without touching durable
//! storage. Toast display is last-writer-wins: a new toast replaces the
//! current one and restarts the dismissal window, enforced by a sequence
//! number the timer has to present when it tries to clear.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use leptos::prelude::*;

/// How long a toast stays on screen before it dismisses itself.
pub const TOAST_DISMISS_MS: u64 = 3000;

/// Visual category of a toast.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToastKind {
    /// Confirmation of a completed action.
    #[default]
    Success,
    /// A failure the user should know about (network errors, rejections).
    Error,
}

/// A transient notification. At most one is visible at a time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
}

/// UI state for the cart drawer, search overlay, and toast channel.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub cart_drawer_open: bool,
    pub search_open: bool,
    pub toast: Option<Toast>,
    toast_seq: u64,
}

impl UiState {
    /// Open the slide-over cart drawer.
    pub fn open_cart_drawer(&mut self) {
        self.cart_drawer_open = true;
    }

    /// Close the slide-over cart drawer.
    pub fn close_cart_drawer(&mut self) {
        self.cart_drawer_open = false;
    }

    /// Open the search overlay.
    pub fn open_search(&mut self) {
        self.search_open = true;
    }

    /// Close the search overlay.
    pub fn close_search(&mut self) {
        self.search_open = false;
    }

    /// Replace the visible toast and return the sequence number that the
    /// auto-dismiss timer must present to [`UiState::clear_toast`].
    pub fn show_toast(&mut self, message: String, kind: ToastKind) -> u64 {
        self.toast_seq += 1;
        self.toast = Some(Toast { message, kind });
        self.toast_seq
    }

    /// Clear the toast, but only if `seq` still identifies it. A timer for
    /// a superseded toast finds a newer sequence number and backs off, which
    /// is what resets the dismissal window on replacement.
    pub fn clear_toast(&mut self, seq: u64) {
        if self.toast_seq == seq {
            self.toast = None;
        }
    }
}

/// Show `message` as a toast and schedule its auto-dismissal.
///
/// Fire-and-forget: callers never learn whether the toast was replaced
/// before its window elapsed, and they do not need to.
pub fn show_toast(ui: RwSignal<UiState>, message: impl Into<String>, kind: ToastKind) {
    let message = message.into();
    let mut issued = 0;
    ui.update(|state| issued = state.show_toast(message, kind));

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(std::time::Duration::from_millis(TOAST_DISMISS_MS)).await;
        ui.update(|state| state.clear_toast(issued));
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = issued;
}
