//! Argon2id password hashing for account credentials.

use crate::{CoreError, CoreResult};

use std::panic::Location;

use argon2::Argon2;
use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use error_location::ErrorLocation;
use uuid::Uuid;

/// Stored passwords starting with this prefix never verify.
pub const UNUSABLE_PASSWORD_PREFIX: char = '!';

/// Hash a raw password into a PHC string with a fresh random salt.
#[track_caller]
pub fn hash_password(raw: &str) -> CoreResult<String> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(raw.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| CoreError::PasswordHash {
            message: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })
}

/// Verify a raw password against a stored hash.
///
/// Unusable markers and malformed hashes yield `false` rather than an error.
pub fn verify_password(raw: &str, stored: &str) -> bool {
    if !is_usable(stored) {
        return false;
    }

    match PasswordHash::new(stored) {
        Ok(parsed) => Argon2::default()
            .verify_password(raw.as_bytes(), &parsed)
            .is_ok(),
        Err(_) => false,
    }
}

/// A marker stored in place of a hash when an account has no password.
pub fn unusable_password() -> String {
    format!("{}{}", UNUSABLE_PASSWORD_PREFIX, Uuid::new_v4().simple())
}

pub fn is_usable(stored: &str) -> bool {
    !stored.is_empty() && !stored.starts_with(UNUSABLE_PASSWORD_PREFIX)
}
