use super::*;

#[test]
fn read_of_missing_key_is_none() {
    let storage = MemoryStorage::new();
    assert_eq!(storage.read("cart"), None);
}

#[test]
fn write_then_read_roundtrips() {
    let storage = MemoryStorage::new();
    storage.write("cart", "[]");
    assert_eq!(storage.read("cart"), Some("[]".to_owned()));
}

#[test]
fn write_replaces_previous_value() {
    let storage = MemoryStorage::new();
    storage.write("cart", "[]");
    storage.write("cart", "[1]");
    assert_eq!(storage.read("cart"), Some("[1]".to_owned()));
}

#[test]
fn remove_deletes_key() {
    let storage = MemoryStorage::new();
    storage.write("user", "{}");
    storage.remove("user");
    assert_eq!(storage.read("user"), None);
}

#[test]
fn remove_of_missing_key_is_noop() {
    let storage = MemoryStorage::new();
    storage.remove("user");
    assert_eq!(storage.read("user"), None);
}

#[test]
fn clones_share_the_same_map() {
    let storage = MemoryStorage::new();
    let handle = storage.clone();
    storage.write("cart", "[]");
    assert_eq!(handle.read("cart"), Some("[]".to_owned()));
}
