pub mod account;
pub mod email;
pub mod mobile;
pub mod new_account;
pub mod timestamps;
pub mod user_type;
pub mod uuid_identity;
