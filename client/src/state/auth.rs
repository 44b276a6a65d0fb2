//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session itself is owned by the login/signup flow and persisted under
//! the `user` storage key; this model is the in-memory view the header,
//! checkout prefill, and account pages read. It is refreshed from storage
//! whenever the cross-tab storage signal fires (see `app`). Admin accounts
//! exist in the same backend table but are not storefront customers, so a
//! stored admin session reads as logged out here.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::User;

/// Authentication state tracking the current storefront customer.
#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub user: Option<User>,
}

impl AuthState {
    /// Whether a customer session is active.
    #[must_use]
    pub fn is_logged_in(&self) -> bool {
        self.user.is_some()
    }

    /// Initial letter of the customer's name for the avatar chip.
    #[must_use]
    pub fn avatar_letter(&self) -> char {
        self.user
            .as_ref()
            .and_then(|user| user.name.chars().next())
            .map_or('U', |letter| letter.to_ascii_uppercase())
    }
}
