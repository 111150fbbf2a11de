use pos_core::{Account, UserType};

/// Creates a customer account with an email and mobile
pub fn create_test_customer(email: &str, mobile: &str) -> Account {
    let mut account = Account::new(UserType::Customer);
    account.email = Some(email.to_string());
    account.mobile = Some(mobile.to_string());
    account.first_name = Some("Test".to_string());
    account.last_name = Some("Customer".to_string());
    account
}

/// Creates an account of the given type holding only a mobile number
pub fn create_test_mobile_account(user_type: UserType, mobile: &str) -> Account {
    let mut account = Account::new(user_type);
    account.mobile = Some(mobile.to_string());
    account
}
