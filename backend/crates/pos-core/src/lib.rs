pub mod error;
pub mod models;
pub mod password;

#[cfg(test)]
mod tests;

pub use error::{CoreError, CoreResult};
pub use error_location::ErrorLocation;
pub use models::account::Account;
pub use models::email::normalize_email;
pub use models::mobile::{MOBILE_MAX_LENGTH, validate_mobile};
pub use models::new_account::NewAccount;
pub use models::timestamps::Timestamps;
pub use models::user_type::UserType;
pub use models::uuid_identity::UuidIdentity;
