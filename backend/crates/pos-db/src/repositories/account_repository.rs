//! Account repository for persisting and loading accounts.
//!
//! Every write runs `Account::validate` first, so malformed mobiles and
//! oversized fields are rejected before reaching SQLite. Uniqueness of
//! `email` and of `(mobile, user_type)` is left to the table constraints and
//! surfaces as `DbError::Integrity`.

use crate::{DbError, Result as DbErrorResult};

use pos_core::{Account, ErrorLocation, Timestamps, UserType, UuidIdentity};

use std::panic::Location;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use log::{debug, warn};
use sqlx::{FromRow, SqlitePool};
use uuid::Uuid;

const SELECT_COLUMNS: &str = r#"
    SELECT uuid, email, password, last_login, first_name, last_name,
        is_active, is_admin, is_staff, is_superuser, mobile, user_type,
        extra_data, created_on, updated_on
    FROM pos_accounts
"#;

pub struct AccountRepository {
    pool: SqlitePool,
}

impl AccountRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, account: &Account) -> DbErrorResult<()> {
        validate_for_write(account)?;

        let uuid = account.uuid().to_string();
        let extra_data = encode_extra_data(account)?;

        sqlx::query(
            r#"
                INSERT INTO pos_accounts (
                    uuid, email, password, last_login, first_name, last_name,
                    is_active, is_admin, is_staff, is_superuser, mobile, user_type,
                    extra_data, created_on, updated_on
                ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&uuid)
        .bind(&account.email)
        .bind(&account.password)
        .bind(account.last_login.map(|dt| dt.timestamp_millis()))
        .bind(&account.first_name)
        .bind(&account.last_name)
        .bind(account.is_active)
        .bind(account.is_admin)
        .bind(account.is_staff)
        .bind(account.is_superuser)
        .bind(&account.mobile)
        .bind(account.user_type.as_code())
        .bind(extra_data)
        .bind(account.timestamps.created_on.timestamp_millis())
        .bind(account.timestamps.updated_on.timestamp_millis())
        .execute(&self.pool)
        .await?;

        debug!("Inserted account {} ({})", uuid, account.user_type);

        Ok(())
    }

    /// Persist changes to an existing account, refreshing `updated_on`.
    ///
    /// `created_on` and the identity are never written after insert. On error
    /// the account is left untouched.
    pub async fn save(&self, account: &mut Account) -> DbErrorResult<()> {
        validate_for_write(account)?;

        let mut timestamps = account.timestamps;
        timestamps.touch();

        let uuid = account.uuid().to_string();
        let extra_data = encode_extra_data(account)?;

        let result = sqlx::query(
            r#"
                UPDATE pos_accounts
                SET email = ?, password = ?, last_login = ?, first_name = ?,
                    last_name = ?, is_active = ?, is_admin = ?, is_staff = ?,
                    is_superuser = ?, mobile = ?, user_type = ?, extra_data = ?,
                    updated_on = ?
                WHERE uuid = ?
            "#,
        )
        .bind(&account.email)
        .bind(&account.password)
        .bind(account.last_login.map(|dt| dt.timestamp_millis()))
        .bind(&account.first_name)
        .bind(&account.last_name)
        .bind(account.is_active)
        .bind(account.is_admin)
        .bind(account.is_staff)
        .bind(account.is_superuser)
        .bind(&account.mobile)
        .bind(account.user_type.as_code())
        .bind(extra_data)
        .bind(timestamps.updated_on.timestamp_millis())
        .bind(&uuid)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::NotFound {
                uuid: account.uuid(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        account.timestamps = timestamps;

        debug!("Saved account {}", uuid);

        Ok(())
    }

    pub async fn find_by_uuid(&self, uuid: Uuid) -> DbErrorResult<Option<Account>> {
        let sql = format!("{SELECT_COLUMNS} WHERE uuid = ?");

        let row = sqlx::query_as::<_, AccountRow>(&sql)
            .bind(uuid.to_string())
            .fetch_optional(&self.pool)
            .await?;

        row.map(AccountRow::into_account).transpose()
    }

    /// Exact match on the stored (already normalized) email.
    pub async fn find_by_email(&self, email: &str) -> DbErrorResult<Option<Account>> {
        let sql = format!("{SELECT_COLUMNS} WHERE email = ?");

        let row = sqlx::query_as::<_, AccountRow>(&sql)
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;

        row.map(AccountRow::into_account).transpose()
    }

    pub async fn find_by_mobile(
        &self,
        mobile: &str,
        user_type: UserType,
    ) -> DbErrorResult<Option<Account>> {
        let sql = format!("{SELECT_COLUMNS} WHERE mobile = ? AND user_type = ?");

        let row = sqlx::query_as::<_, AccountRow>(&sql)
            .bind(mobile)
            .bind(user_type.as_code())
            .fetch_optional(&self.pool)
            .await?;

        row.map(AccountRow::into_account).transpose()
    }

    pub async fn find_all(&self) -> DbErrorResult<Vec<Account>> {
        let sql = format!("{SELECT_COLUMNS} ORDER BY created_on, uuid");

        let rows = sqlx::query_as::<_, AccountRow>(&sql)
            .fetch_all(&self.pool)
            .await?;

        rows.into_iter()
            .map(AccountRow::into_account)
            .collect::<DbErrorResult<Vec<_>>>()
    }

    pub async fn count(&self) -> DbErrorResult<i64> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM pos_accounts")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

fn validate_for_write(account: &Account) -> DbErrorResult<()> {
    account.validate().map_err(|e| {
        warn!("Rejected write for account {}: {}", account.uuid(), e);
        DbError::from(e)
    })
}

#[track_caller]
fn encode_extra_data(account: &Account) -> DbErrorResult<Option<String>> {
    account
        .extra_data
        .as_ref()
        .map(serde_json::to_string)
        .transpose()
        .map_err(|e| DbError::Initialization {
            message: format!("Failed to encode account.extra_data: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })
}

#[derive(FromRow)]
struct AccountRow {
    uuid: String,
    email: Option<String>,
    password: String,
    last_login: Option<i64>,
    first_name: Option<String>,
    last_name: Option<String>,
    is_active: bool,
    is_admin: bool,
    is_staff: bool,
    is_superuser: bool,
    mobile: Option<String>,
    user_type: String,
    extra_data: Option<String>,
    created_on: i64,
    updated_on: i64,
}

impl AccountRow {
    fn into_account(self) -> DbErrorResult<Account> {
        let uuid = Uuid::parse_str(&self.uuid).map_err(|e| DbError::Initialization {
            message: format!("Invalid UUID in account.uuid: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        let user_type = UserType::from_str(&self.user_type).map_err(|e| DbError::Initialization {
            message: format!("Invalid UserType in account.user_type: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        let extra_data: Option<serde_json::Value> = self
            .extra_data
            .as_deref()
            .map(serde_json::from_str)
            .transpose()
            .map_err(|e| DbError::Initialization {
                message: format!("Invalid JSON in account.extra_data: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        Ok(Account {
            identity: UuidIdentity::from_stored(uuid),
            email: self.email,
            password: self.password,
            last_login: self.last_login.and_then(DateTime::<Utc>::from_timestamp_millis),
            first_name: self.first_name,
            last_name: self.last_name,
            is_active: self.is_active,
            is_admin: self.is_admin,
            is_staff: self.is_staff,
            is_superuser: self.is_superuser,
            mobile: self.mobile,
            user_type,
            extra_data,
            timestamps: Timestamps {
                created_on: parse_timestamp(self.created_on, "created_on")?,
                updated_on: parse_timestamp(self.updated_on, "updated_on")?,
            },
        })
    }
}

#[track_caller]
fn parse_timestamp(millis: i64, column: &str) -> DbErrorResult<DateTime<Utc>> {
    DateTime::from_timestamp_millis(millis).ok_or_else(|| DbError::Initialization {
        message: format!("Invalid timestamp in account.{}", column),
        location: ErrorLocation::from(Location::caller()),
    })
}
