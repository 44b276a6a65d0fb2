use super::*;

#[test]
fn success_and_error_render_distinct_classes() {
    assert_eq!(toast_class(ToastKind::Success), "toast toast--success");
    assert_eq!(toast_class(ToastKind::Error), "toast toast--error");
}
