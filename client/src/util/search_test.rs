use super::*;

fn list(entries: &[&str]) -> Vec<String> {
    entries.iter().map(|entry| (*entry).to_owned()).collect()
}

#[test]
fn push_onto_empty_list() {
    assert_eq!(push_recent(&[], "toner"), list(&["toner"]));
}

#[test]
fn push_prepends_newest() {
    let existing = list(&["drum", "ink"]);
    assert_eq!(push_recent(&existing, "toner"), list(&["toner", "drum", "ink"]));
}

#[test]
fn push_moves_duplicate_to_front() {
    let existing = list(&["drum", "ink", "toner"]);
    assert_eq!(push_recent(&existing, "ink"), list(&["ink", "drum", "toner"]));
}

#[test]
fn push_trims_whitespace() {
    assert_eq!(push_recent(&[], "  toner  "), list(&["toner"]));
}

#[test]
fn blank_query_is_ignored() {
    let existing = list(&["drum"]);
    assert_eq!(push_recent(&existing, "   "), existing);
}

#[test]
fn list_caps_at_limit() {
    let existing = list(&["a", "b", "c", "d", "e"]);
    let updated = push_recent(&existing, "f");
    assert_eq!(updated.len(), RECENT_SEARCH_LIMIT);
    assert_eq!(updated, list(&["f", "a", "b", "c", "d"]));
}
