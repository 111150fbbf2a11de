use crate::{CoreError, CoreResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Account classification, stored as a single-character code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum UserType {
    /// Shopper placing orders
    #[default]
    Customer,
    /// Store operator working a till
    Employee,
    /// Store owner
    Merchant,
    /// Anonymous/local account created without an email address
    Unregistered,
}

impl UserType {
    /// Convert to database code
    pub fn as_code(&self) -> &'static str {
        match self {
            Self::Customer => "C",
            Self::Employee => "E",
            Self::Merchant => "M",
            Self::Unregistered => "U",
        }
    }

    pub fn requires_email(&self) -> bool {
        !matches!(self, Self::Unregistered)
    }

    pub fn all() -> [UserType; 4] {
        [
            Self::Customer,
            Self::Employee,
            Self::Merchant,
            Self::Unregistered,
        ]
    }
}

impl FromStr for UserType {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreResult<Self> {
        match s {
            "C" => Ok(Self::Customer),
            "E" => Ok(Self::Employee),
            "M" => Ok(Self::Merchant),
            "U" => Ok(Self::Unregistered),
            _ => Err(CoreError::InvalidUserType {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for UserType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_code())
    }
}
