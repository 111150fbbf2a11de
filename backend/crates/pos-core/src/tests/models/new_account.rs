use crate::{NewAccount, UserType};

#[test]
fn test_set_default_flags_fills_unset_flags() {
    let mut fields = NewAccount::default();

    fields.set_default_flags(true, true);

    assert_eq!(fields.is_staff, Some(true));
    assert_eq!(fields.is_superuser, Some(true));
}

#[test]
fn test_set_default_flags_keeps_explicit_values() {
    let mut fields = NewAccount::default().staff(false);

    fields.set_default_flags(true, true);

    assert_eq!(fields.is_staff, Some(false));
    assert_eq!(fields.is_superuser, Some(true));
}

#[test]
fn test_resolved_user_type_defaults_to_customer() {
    assert_eq!(NewAccount::default().resolved_user_type(), UserType::Customer);
    assert_eq!(
        NewAccount::with_user_type(UserType::Merchant).resolved_user_type(),
        UserType::Merchant
    );
}
