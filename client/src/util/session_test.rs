use super::*;

fn user_with_role(role: &str) -> User {
    User {
        id: 3,
        name: "Pat".to_owned(),
        email: "pat@example.com".to_owned(),
        role: role.to_owned(),
    }
}

#[test]
fn customer_sessions_pass_through() {
    let session = customer_only(Some(user_with_role("customer")));
    assert_eq!(session.map(|user| user.id), Some(3));
}

#[test]
fn admin_sessions_read_as_logged_out() {
    assert!(customer_only(Some(user_with_role("admin"))).is_none());
}

#[test]
fn absent_sessions_stay_absent() {
    assert!(customer_only(None).is_none());
}

#[test]
fn empty_role_is_a_customer() {
    // Older backends omit the role field entirely; serde defaults it to "".
    assert!(customer_only(Some(user_with_role(""))).is_some());
}

#[test]
fn native_load_is_logged_out() {
    assert!(load_customer().is_none());
}
