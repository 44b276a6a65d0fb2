//! Recent-search history maintenance.
//!
//! The header persists the customer's last few storefront searches under
//! their own storage key and offers them back when the search box is empty.
//! The list is most-recent-first, deduplicated, and capped.

#[cfg(test)]
#[path = "search_test.rs"]
mod search_test;

use crate::util::storage;

/// Storage key holding the recent-search list.
pub const RECENT_SEARCHES_KEY: &str = "recent_searches";

/// Maximum number of remembered searches.
pub const RECENT_SEARCH_LIMIT: usize = 5;

/// Return `existing` with `query` promoted to the front.
///
/// Blank queries leave the list untouched. A query already in the list
/// moves to the front rather than duplicating, and the result never exceeds
/// [`RECENT_SEARCH_LIMIT`] entries.
#[must_use]
pub fn push_recent(existing: &[String], query: &str) -> Vec<String> {
    let query = query.trim();
    if query.is_empty() {
        return existing.to_vec();
    }
    let mut updated = Vec::with_capacity(RECENT_SEARCH_LIMIT);
    updated.push(query.to_owned());
    updated.extend(
        existing
            .iter()
            .filter(|entry| entry.as_str() != query)
            .cloned(),
    );
    updated.truncate(RECENT_SEARCH_LIMIT);
    updated
}

/// Load the persisted recent-search list, or empty.
#[must_use]
pub fn load_recent() -> Vec<String> {
    storage::load_json(RECENT_SEARCHES_KEY).unwrap_or_default()
}

/// Remember `query` and return the updated list for immediate rendering.
pub fn remember(existing: &[String], query: &str) -> Vec<String> {
    let updated = push_recent(existing, query);
    storage::save_json(RECENT_SEARCHES_KEY, &updated);
    updated
}
