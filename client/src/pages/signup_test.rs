use super::*;

#[test]
fn complete_form_passes() {
    assert_eq!(
        validate_signup("Pat Lee", "pat@example.com", "hunter22", "hunter22"),
        None
    );
}

#[test]
fn blank_fields_are_rejected() {
    assert_eq!(
        validate_signup("", "pat@example.com", "hunter22", "hunter22"),
        Some("Fill in every field")
    );
    assert_eq!(
        validate_signup("Pat", "  ", "hunter22", "hunter22"),
        Some("Fill in every field")
    );
    assert_eq!(
        validate_signup("Pat", "pat@example.com", "", ""),
        Some("Fill in every field")
    );
}

#[test]
fn short_password_is_rejected() {
    assert_eq!(
        validate_signup("Pat", "pat@example.com", "abc", "abc"),
        Some("Password must be at least 6 characters")
    );
}

#[test]
fn mismatched_confirmation_is_rejected() {
    assert_eq!(
        validate_signup("Pat", "pat@example.com", "hunter22", "hunter23"),
        Some("Passwords do not match")
    );
}
