use crate::error::{AdminError, Result as AdminResult};

use pos_core::{NewAccount, UserType};

use std::str::FromStr;

use clap::{Args, Subcommand};

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create an ordinary account
    CreateUser {
        #[command(flatten)]
        account: AccountArgs,

        /// Account type code: C (customer), E (employee), M (merchant), U (unregistered)
        #[arg(long = "type", default_value = "C")]
        user_type: String,

        /// Grant staff status
        #[arg(long)]
        staff: bool,
    },
    /// Create a superuser with the administrator flag set
    CreateSuperuser {
        #[command(flatten)]
        account: AccountArgs,
    },
    /// Show one account
    Show {
        /// Look up by email
        #[arg(long, conflicts_with = "uuid", required_unless_present = "uuid")]
        email: Option<String>,

        /// Look up by account UUID
        #[arg(long)]
        uuid: Option<String>,
    },
    /// List all accounts
    List,
}

#[derive(Args, Debug, Default)]
pub struct AccountArgs {
    #[arg(long)]
    pub email: Option<String>,

    #[arg(long)]
    pub password: Option<String>,

    /// Ten-digit mobile number
    #[arg(long)]
    pub mobile: Option<String>,

    #[arg(long)]
    pub first_name: Option<String>,

    #[arg(long)]
    pub last_name: Option<String>,

    /// Free-form JSON metadata
    #[arg(long)]
    pub extra_data: Option<String>,
}

impl AccountArgs {
    /// Build manager input; flags the operator did not pass stay unset so
    /// the manager applies its own defaults.
    pub fn to_new_account(&self, user_type: UserType) -> AdminResult<NewAccount> {
        let extra_data: Option<serde_json::Value> = self
            .extra_data
            .as_deref()
            .map(serde_json::from_str)
            .transpose()
            .map_err(|e| AdminError::Argument {
                message: format!("--extra-data is not valid JSON: {}", e),
            })?;

        Ok(NewAccount {
            user_type: Some(user_type),
            mobile: self.mobile.clone(),
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            extra_data,
            ..NewAccount::default()
        })
    }
}

pub fn parse_user_type(code: &str) -> AdminResult<UserType> {
    Ok(UserType::from_str(&code.to_uppercase())?)
}
