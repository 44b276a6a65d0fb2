//! Customer session persistence and the cross-tab storage signal.
//!
//! SYSTEM CONTEXT
//! ==============
//! The `user` key is written at login/signup and cleared at logout. The
//! browser only fires `storage` events in *other* tabs, so every write here
//! also dispatches a synthetic `storage` event locally — the same listener
//! then refreshes this tab and its siblings alike. Admin sessions are
//! stored by the shared auth flow but are not storefront customers; they
//! are filtered out at read time rather than at write time so an admin can
//! still reach the back office from the same browser.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::types::User;
use crate::util::storage;

/// Storage key holding the authenticated user, owned by the auth flow.
pub const USER_KEY: &str = "user";

/// Role string that marks a session as back-office rather than storefront.
const ADMIN_ROLE: &str = "admin";

/// Keep `user` only if it is a storefront customer session.
#[must_use]
pub fn customer_only(user: Option<User>) -> Option<User> {
    user.filter(|user| user.role != ADMIN_ROLE)
}

/// Read the current customer session from storage. `None` when logged out,
/// when the stored blob is unparsable, or when the session is an admin's.
#[must_use]
pub fn load_customer() -> Option<User> {
    customer_only(storage::load_json(USER_KEY))
}

/// Persist `user` as the current session and notify all tabs.
pub fn store_user(user: &User) {
    storage::save_json(USER_KEY, user);
    dispatch_storage_signal();
}

/// Clear the current session and notify all tabs.
pub fn clear_user() {
    storage::remove_key(USER_KEY);
    dispatch_storage_signal();
}

/// Fire the cross-tab signal in this tab. Other tabs get the browser's own
/// `storage` event; this synthetic one keeps the current tab consistent.
pub fn dispatch_storage_signal() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(event) = web_sys::Event::new("storage") {
                let _ = window.dispatch_event(&event);
            }
        }
    }
}
