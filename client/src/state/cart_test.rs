use super::*;

#[test]
fn wishlist_toast_copy_differs_by_outcome() {
    assert_eq!(wishlist_toast_message(true), "Saved to your wishlist");
    assert_eq!(wishlist_toast_message(false), "Removed from your wishlist");
}

#[test]
fn native_hydration_starts_empty() {
    // Outside the browser the LocalStorage backend reads nothing, so the
    // store must come up empty rather than fail.
    let store = hydrate_store();
    assert_eq!(store.cart_count(), 0);
    assert_eq!(store.wishlist_count(), 0);
}
