use crate::{CoreError, UserType};

use std::str::FromStr;

#[test]
fn test_user_type_as_code() {
    assert_eq!(UserType::Customer.as_code(), "C");
    assert_eq!(UserType::Employee.as_code(), "E");
    assert_eq!(UserType::Merchant.as_code(), "M");
    assert_eq!(UserType::Unregistered.as_code(), "U");
}

#[test]
fn test_user_type_from_str() {
    for user_type in UserType::all() {
        assert_eq!(UserType::from_str(user_type.as_code()).unwrap(), user_type);
    }
}

#[test]
fn test_user_type_from_str_rejects_unknown_code() {
    let result = UserType::from_str("X");

    assert!(matches!(result, Err(CoreError::InvalidUserType { ref value, .. }) if value == "X"));
    assert!(UserType::from_str("c").is_err());
    assert!(UserType::from_str("").is_err());
}

#[test]
fn test_user_type_default() {
    assert_eq!(UserType::default(), UserType::Customer);
}

#[test]
fn test_only_unregistered_skips_email_requirement() {
    assert!(UserType::Customer.requires_email());
    assert!(UserType::Employee.requires_email());
    assert!(UserType::Merchant.requires_email());
    assert!(!UserType::Unregistered.requires_email());
}
