use crate::{CoreError, MOBILE_MAX_LENGTH, validate_mobile};

#[test]
fn test_validate_mobile_accepts_ten_digits() {
    assert!(validate_mobile("9876543210").is_ok());
    assert!(validate_mobile("0000000000").is_ok());
}

#[test]
fn test_validate_mobile_rejects_wrong_length() {
    assert!(validate_mobile("987654321").is_err());
    assert!(validate_mobile("98765432101").is_err());
    assert!(validate_mobile("").is_err());
}

#[test]
fn test_validate_mobile_rejects_non_digits() {
    let result = validate_mobile("98765-4321");

    assert!(matches!(result, Err(CoreError::InvalidMobile { ref value, .. }) if value == "98765-4321"));
    assert!(validate_mobile("+919876543").is_err());
    assert!(validate_mobile("98765 4321").is_err());
}

#[test]
fn test_validate_mobile_length_bound() {
    assert!(validate_mobile(&"7".repeat(MOBILE_MAX_LENGTH)).is_ok());
    assert!(validate_mobile(&"7".repeat(MOBILE_MAX_LENGTH + 1)).is_err());
}
