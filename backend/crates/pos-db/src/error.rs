use pos_core::{CoreError, ErrorLocation};

use std::panic::Location;

use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum DbError {
    #[error("SQLx error: {source} {location}")]
    Sqlx {
        source: sqlx::Error,
        location: ErrorLocation,
    },

    #[error("Integrity error: {message} {location}")]
    Integrity {
        message: String,
        location: ErrorLocation,
    },

    #[error("Account not found: {uuid} {location}")]
    NotFound {
        uuid: Uuid,
        location: ErrorLocation,
    },

    #[error("Migration error: {message} {location}")]
    Migration {
        message: String,
        location: ErrorLocation,
    },

    #[error("Database initialization failed: {message} {location}")]
    Initialization {
        message: String,
        location: ErrorLocation,
    },

    #[error("{source}")]
    Core {
        #[source]
        source: CoreError,
    },
}

impl DbError {
    /// True for errors raised by the account validation rules rather than storage.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Core { .. })
    }

    pub fn is_integrity(&self) -> bool {
        matches!(self, Self::Integrity { .. })
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

impl From<sqlx::Error> for DbError {
    #[track_caller]
    fn from(source: sqlx::Error) -> Self {
        let location = ErrorLocation::from(Location::caller());

        if let sqlx::Error::Database(ref db_error) = source
            && (db_error.is_unique_violation() || db_error.is_check_violation())
        {
            return Self::Integrity {
                message: db_error.message().to_string(),
                location,
            };
        }

        Self::Sqlx { source, location }
    }
}

impl From<CoreError> for DbError {
    fn from(source: CoreError) -> Self {
        Self::Core { source }
    }
}

pub type Result<T> = std::result::Result<T, DbError>;
