use crate::UserType;

use serde::{Deserialize, Serialize};

/// Caller-supplied fields for constructing an account.
///
/// Flags left as `None` take the default of whichever constructor is used:
/// `create_user` resolves staff/superuser to `false`, `create_superuser`
/// to `true`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewAccount {
    pub user_type: Option<UserType>,
    pub mobile: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub is_active: Option<bool>,
    pub is_staff: Option<bool>,
    pub is_superuser: Option<bool>,
    pub extra_data: Option<serde_json::Value>,
}

impl NewAccount {
    pub fn with_user_type(user_type: UserType) -> Self {
        Self {
            user_type: Some(user_type),
            ..Self::default()
        }
    }

    pub fn mobile(mut self, mobile: impl Into<String>) -> Self {
        self.mobile = Some(mobile.into());
        self
    }

    pub fn name(mut self, first: impl Into<String>, last: impl Into<String>) -> Self {
        self.first_name = Some(first.into());
        self.last_name = Some(last.into());
        self
    }

    pub fn staff(mut self, is_staff: bool) -> Self {
        self.is_staff = Some(is_staff);
        self
    }

    pub fn superuser(mut self, is_superuser: bool) -> Self {
        self.is_superuser = Some(is_superuser);
        self
    }

    /// Fill in staff/superuser flags the caller left unset.
    pub fn set_default_flags(&mut self, is_staff: bool, is_superuser: bool) {
        self.is_staff.get_or_insert(is_staff);
        self.is_superuser.get_or_insert(is_superuser);
    }

    pub fn resolved_user_type(&self) -> UserType {
        self.user_type.unwrap_or_default()
    }
}
