use crate::models::account::{EMAIL_MAX_LENGTH, NAME_MAX_LENGTH};
use crate::{Account, CoreError, NewAccount, UserType};

use serde_json::json;

#[test]
fn test_account_new_defaults() {
    let account = Account::new(UserType::Customer);

    assert_eq!(account.user_type, UserType::Customer);
    assert!(account.is_active);
    assert!(!account.is_admin);
    assert!(!account.is_staff);
    assert!(!account.is_superuser);
    assert!(account.email.is_none());
    assert!(account.mobile.is_none());
    assert!(account.last_login.is_none());
    assert!(!account.has_usable_password());
    assert_eq!(account.timestamps.created_on, account.timestamps.updated_on);
}

#[test]
fn test_account_from_fields_applies_overrides() {
    let fields = NewAccount {
        user_type: Some(UserType::Employee),
        mobile: Some("9876543210".to_string()),
        first_name: Some("Asha".to_string()),
        last_name: Some("Rao".to_string()),
        is_active: Some(false),
        is_staff: Some(true),
        is_superuser: None,
        extra_data: Some(json!({"store": 12})),
    };

    let account = Account::from_fields(fields);

    assert_eq!(account.user_type, UserType::Employee);
    assert_eq!(account.mobile.as_deref(), Some("9876543210"));
    assert!(!account.is_active);
    assert!(account.is_staff);
    assert!(!account.is_superuser);
    assert_eq!(account.extra_data, Some(json!({"store": 12})));
}

#[test]
fn test_account_display_prefers_email() {
    let mut account = Account::new(UserType::Customer);
    account.email = Some("shopper@example.com".to_string());
    account.mobile = Some("9876543210".to_string());

    assert_eq!(account.to_string(), "shopper@example.com");
}

#[test]
fn test_account_display_falls_back_to_mobile() {
    let mut account = Account::new(UserType::Unregistered);
    account.mobile = Some("9876543210".to_string());

    assert_eq!(account.to_string(), "9876543210");
}

#[test]
fn test_account_display_without_email_or_mobile_is_empty() {
    let account = Account::new(UserType::Unregistered);

    assert_eq!(account.to_string(), "");
}

#[test]
fn test_account_full_name() {
    let mut account = Account::new(UserType::Customer);
    assert_eq!(account.full_name(), "");

    account.first_name = Some("Asha".to_string());
    assert_eq!(account.full_name(), "Asha ");

    account.last_name = Some("Rao".to_string());
    assert_eq!(account.full_name(), "Asha Rao");

    account.first_name = None;
    assert_eq!(account.full_name(), " Rao");
}

#[test]
fn test_account_password_round_trip() {
    let mut account = Account::new(UserType::Customer);

    account.set_password(Some("correct horse")).unwrap();

    assert!(account.has_usable_password());
    assert!(account.password.starts_with("$argon2"));
    assert!(account.check_password("correct horse"));
    assert!(!account.check_password("wrong horse"));
}

#[test]
fn test_account_set_password_none_is_unusable() {
    let mut account = Account::new(UserType::Customer);
    account.set_password(Some("secret")).unwrap();

    account.set_password(None).unwrap();

    assert!(!account.has_usable_password());
    assert!(!account.check_password("secret"));
}

#[test]
fn test_account_record_login() {
    let mut account = Account::new(UserType::Customer);

    account.record_login();

    assert!(account.last_login.is_some());
}

#[test]
fn test_account_validate_accepts_defaults() {
    let account = Account::new(UserType::Customer);

    assert!(account.validate().is_ok());
}

#[test]
fn test_account_validate_rejects_bad_mobile() {
    let mut account = Account::new(UserType::Customer);
    account.mobile = Some("12345".to_string());

    assert!(matches!(
        account.validate(),
        Err(CoreError::InvalidMobile { .. })
    ));
}

#[test]
fn test_account_validate_rejects_long_names() {
    let mut account = Account::new(UserType::Customer);
    account.first_name = Some("a".repeat(NAME_MAX_LENGTH));
    assert!(account.validate().is_ok());

    account.first_name = Some("a".repeat(NAME_MAX_LENGTH + 1));
    assert!(matches!(
        account.validate(),
        Err(CoreError::Validation { .. })
    ));
}

#[test]
fn test_account_validate_rejects_long_or_empty_email() {
    let mut account = Account::new(UserType::Customer);
    let domain = "@example.com";
    account.email = Some(format!("{}{}", "a".repeat(EMAIL_MAX_LENGTH + 1 - domain.len()), domain));
    assert!(account.validate().is_err());

    account.email = Some(String::new());
    assert!(account.validate().is_err());
}

#[test]
fn test_account_serialization_omits_password() {
    let mut account = Account::new(UserType::Customer);
    account.set_password(Some("secret")).unwrap();

    let value = serde_json::to_value(&account).unwrap();

    assert!(value.get("password").is_none());
    assert_eq!(value["identity"], json!(account.uuid().to_string()));
    assert_eq!(value["user_type"], json!("customer"));
    assert!(value.get("created_on").is_some());
}
