//! Account construction policies.
//!
//! Two entry points share one construction routine:
//! - `create_user` - ordinary accounts, staff/superuser default to `false`
//! - `create_superuser` - privileged accounts, staff/superuser must be `true`,
//!   and the administrator flag is set with a second write
//!
//! Unregistered accounts are built straight from the supplied fields and do
//! not need an email address; every other type does.

use crate::{AccountRepository, Result as DbErrorResult};

use pos_core::{Account, CoreError, ErrorLocation, NewAccount, normalize_email};

use std::panic::Location;

use log::{info, warn};
use sqlx::SqlitePool;

pub struct AccountManager {
    repository: AccountRepository,
}

impl AccountManager {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            repository: AccountRepository::new(pool),
        }
    }

    pub fn repository(&self) -> &AccountRepository {
        &self.repository
    }

    pub async fn create_user(
        &self,
        email: Option<&str>,
        password: Option<&str>,
        mut fields: NewAccount,
    ) -> DbErrorResult<Account> {
        fields.set_default_flags(false, false);

        self.create_account(email, password, fields).await
    }

    pub async fn create_superuser(
        &self,
        email: Option<&str>,
        password: Option<&str>,
        mut fields: NewAccount,
    ) -> DbErrorResult<Account> {
        fields.set_default_flags(true, true);

        if fields.is_staff != Some(true) {
            warn!("Rejected superuser without is_staff");
            return Err(CoreError::SuperuserFlag {
                flag: "is_staff",
                location: ErrorLocation::from(Location::caller()),
            }
            .into());
        }
        if fields.is_superuser != Some(true) {
            warn!("Rejected superuser without is_superuser");
            return Err(CoreError::SuperuserFlag {
                flag: "is_superuser",
                location: ErrorLocation::from(Location::caller()),
            }
            .into());
        }

        let mut account = self.create_account(email, password, fields).await?;

        account.is_admin = true;
        self.repository.save(&mut account).await?;

        info!("Created superuser {}", account.uuid());

        Ok(account)
    }

    /// Look up an account by email, normalizing the input the same way
    /// `create_user` normalizes before storing.
    pub async fn get_by_email(&self, email: &str) -> DbErrorResult<Option<Account>> {
        self.repository.find_by_email(&normalize_email(email)).await
    }

    async fn create_account(
        &self,
        email: Option<&str>,
        password: Option<&str>,
        fields: NewAccount,
    ) -> DbErrorResult<Account> {
        let user_type = fields.resolved_user_type();

        let mut account = if user_type.requires_email() {
            let email = email.filter(|e| !e.is_empty()).ok_or_else(|| {
                warn!("Rejected {} account without email", user_type);
                CoreError::MissingEmail {
                    location: ErrorLocation::from(Location::caller()),
                }
            })?;

            let mut account = Account::from_fields(fields);
            account.email = Some(normalize_email(email));
            account
        } else {
            // Unregistered accounts are built from the fields alone.
            Account::from_fields(fields)
        };

        account.set_password(password)?;
        self.repository.create(&account).await?;

        info!("Created {} account {}", user_type, account.uuid());

        Ok(account)
    }
}
