//! Account entity - the persisted user identity record.

use crate::models::timestamps::current_instant;
use crate::password::{self, is_usable};
use crate::{
    CoreError, CoreResult, NewAccount, Timestamps, UserType, UuidIdentity, validate_mobile,
};

use std::panic::Location;

use chrono::{DateTime, Utc};
use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const EMAIL_MAX_LENGTH: usize = 255;
pub const NAME_MAX_LENGTH: usize = 50;

/// A user account identified by email and/or mobile number.
///
/// Email is unique when present. Mobile is unique per `user_type`, so the
/// same number may back both a customer and an employee account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    pub identity: UuidIdentity,
    pub email: Option<String>,
    /// PHC hash, or an unusable marker. Never serialized.
    #[serde(default, skip_serializing)]
    pub password: String,
    pub last_login: Option<DateTime<Utc>>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub is_active: bool,
    /// Administrator flag, separate from the staff/superuser flags
    pub is_admin: bool,
    pub is_staff: bool,
    pub is_superuser: bool,
    pub mobile: Option<String>,
    pub user_type: UserType,
    pub extra_data: Option<serde_json::Value>,
    #[serde(flatten)]
    pub timestamps: Timestamps,
}

impl Account {
    /// Create a new account with default values
    pub fn new(user_type: UserType) -> Self {
        Self {
            identity: UuidIdentity::generate(),
            email: None,
            password: password::unusable_password(),
            last_login: None,
            first_name: None,
            last_name: None,
            is_active: true,
            is_admin: false,
            is_staff: false,
            is_superuser: false,
            mobile: None,
            user_type,
            extra_data: None,
            timestamps: Timestamps::now(),
        }
    }

    /// Build an account from caller-supplied fields; unset fields keep the
    /// model defaults.
    pub fn from_fields(fields: NewAccount) -> Self {
        let mut account = Self::new(fields.resolved_user_type());
        account.mobile = fields.mobile;
        account.first_name = fields.first_name;
        account.last_name = fields.last_name;
        account.extra_data = fields.extra_data;
        if let Some(is_active) = fields.is_active {
            account.is_active = is_active;
        }
        if let Some(is_staff) = fields.is_staff {
            account.is_staff = is_staff;
        }
        if let Some(is_superuser) = fields.is_superuser {
            account.is_superuser = is_superuser;
        }
        account
    }

    pub fn uuid(&self) -> Uuid {
        self.identity.uuid()
    }

    /// "first last" when either name is set, otherwise empty.
    pub fn full_name(&self) -> String {
        if self.first_name.is_some() || self.last_name.is_some() {
            format!(
                "{} {}",
                self.first_name.as_deref().unwrap_or_default(),
                self.last_name.as_deref().unwrap_or_default()
            )
        } else {
            String::new()
        }
    }

    /// Hash and store a password. `None` stores an unusable marker.
    pub fn set_password(&mut self, raw: Option<&str>) -> CoreResult<()> {
        self.password = match raw {
            Some(raw) => password::hash_password(raw)?,
            None => password::unusable_password(),
        };
        Ok(())
    }

    pub fn check_password(&self, raw: &str) -> bool {
        password::verify_password(raw, &self.password)
    }

    pub fn has_usable_password(&self) -> bool {
        is_usable(&self.password)
    }

    pub fn record_login(&mut self) {
        self.last_login = Some(current_instant());
    }

    /// Field-level checks applied before every write.
    #[track_caller]
    pub fn validate(&self) -> CoreResult<()> {
        if let Some(ref mobile) = self.mobile {
            validate_mobile(mobile)?;
        }

        if let Some(ref email) = self.email {
            if email.is_empty() {
                return Err(CoreError::Validation {
                    message: "email must not be empty when set".to_string(),
                    location: ErrorLocation::from(Location::caller()),
                });
            }
            Self::check_length("email", email, EMAIL_MAX_LENGTH)?;
        }

        if let Some(ref first_name) = self.first_name {
            Self::check_length("first_name", first_name, NAME_MAX_LENGTH)?;
        }
        if let Some(ref last_name) = self.last_name {
            Self::check_length("last_name", last_name, NAME_MAX_LENGTH)?;
        }

        Ok(())
    }

    #[track_caller]
    fn check_length(field: &str, value: &str, max: usize) -> CoreResult<()> {
        let length = value.chars().count();
        if length > max {
            return Err(CoreError::Validation {
                message: format!("{field} must be at most {max} characters, got {length}"),
                location: ErrorLocation::from(Location::caller()),
            });
        }
        Ok(())
    }
}

impl std::fmt::Display for Account {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = self
            .email
            .as_deref()
            .or(self.mobile.as_deref())
            .unwrap_or_default();
        write!(f, "{}", label)
    }
}
