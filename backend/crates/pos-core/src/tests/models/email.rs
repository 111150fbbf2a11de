use crate::normalize_email;

#[test]
fn test_normalize_email_lowercases_domain_only() {
    assert_eq!(normalize_email("John.Doe@Example.COM"), "John.Doe@example.com");
}

#[test]
fn test_normalize_email_splits_on_last_at() {
    assert_eq!(normalize_email("\"a@b\"@EXAMPLE.org"), "\"a@b\"@example.org");
}

#[test]
fn test_normalize_email_trims_whitespace() {
    assert_eq!(normalize_email("  user@Shop.IO \n"), "user@shop.io");
}

#[test]
fn test_normalize_email_without_at_is_unchanged() {
    assert_eq!(normalize_email("NotAnEmail"), "NotAnEmail");
    assert_eq!(normalize_email(""), "");
}
