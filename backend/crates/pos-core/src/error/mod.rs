use crate::ErrorLocation;

use std::result::Result as StdResult;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Validation error: {message} {location}")]
    Validation {
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid user type: {value} {location}")]
    InvalidUserType {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid mobile number: {value} {location}")]
    InvalidMobile {
        value: String,
        location: ErrorLocation,
    },

    #[error("Users must have an email address {location}")]
    MissingEmail { location: ErrorLocation },

    #[error("Superuser must have {flag}=True. {location}")]
    SuperuserFlag {
        flag: &'static str,
        location: ErrorLocation,
    },

    #[error("Password hashing failed: {message} {location}")]
    PasswordHash {
        message: String,
        location: ErrorLocation,
    },
}

pub type CoreResult<T> = StdResult<T, CoreError>;
