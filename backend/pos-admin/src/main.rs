//! pos-admin - account administration for the POS backend
//!
//! # Examples
//!
//! ```bash
//! # Create a customer
//! pos-admin create-user --email shopper@example.com --password secret --mobile 9876543210
//!
//! # Create a walk-in account with no email
//! pos-admin create-user --type U --mobile 9876543210
//!
//! # Create a superuser
//! pos-admin create-superuser --email root@example.com --password secret
//!
//! # Inspect
//! pos-admin show --email root@example.com --pretty
//! ```

mod cli;
mod commands;
mod error;
mod logger;


use crate::{
    cli::Cli,
    commands::{Commands, parse_user_type},
    error::{AdminError, Result as AdminResult},
};

use pos_db::AccountManager;

use std::process::ExitCode;
use std::str::FromStr;

use clap::Parser;
use log::info;
use uuid::Uuid;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = run(cli.command).await;

    match result {
        Ok(value) => {
            let output = if cli.pretty {
                serde_json::to_string_pretty(&value)
            } else {
                serde_json::to_string(&value)
            };

            match output {
                Ok(json) => {
                    println!("{}", json);
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    eprintln!("Error serializing response: {}", e);
                    ExitCode::FAILURE
                }
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(command: Commands) -> AdminResult<serde_json::Value> {
    let config = pos_config::Config::load()?;
    config.validate()?;

    logger::initialize(
        config.logging.level,
        config.log_file_path()?,
        config.logging.colored,
    )?;
    info!("Starting pos-admin v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    let pool = pos_db::open_database(config.database_path()?).await?;
    let manager = AccountManager::new(pool);

    let value = match command {
        Commands::CreateUser {
            account,
            user_type,
            staff,
        } => {
            let mut fields = account.to_new_account(parse_user_type(&user_type)?)?;
            if staff {
                fields.is_staff = Some(true);
            }
            let created = manager
                .create_user(account.email.as_deref(), account.password.as_deref(), fields)
                .await?;
            serde_json::to_value(&created)?
        }
        Commands::CreateSuperuser { account } => {
            let fields = account.to_new_account(Default::default())?;
            let created = manager
                .create_superuser(account.email.as_deref(), account.password.as_deref(), fields)
                .await?;
            serde_json::to_value(&created)?
        }
        Commands::Show { email, uuid } => {
            let found = match (email, uuid) {
                (Some(email), _) => manager
                    .get_by_email(&email)
                    .await?
                    .ok_or_else(|| AdminError::NotFound { key: email.clone() })?,
                (None, Some(uuid)) => {
                    let parsed = Uuid::from_str(&uuid).map_err(|e| AdminError::Argument {
                        message: format!("--uuid is not a valid UUID: {}", e),
                    })?;
                    manager
                        .repository()
                        .find_by_uuid(parsed)
                        .await?
                        .ok_or(AdminError::NotFound { key: uuid })?
                }
                (None, None) => {
                    return Err(AdminError::Argument {
                        message: "either --email or --uuid is required".to_string(),
                    });
                }
            };
            serde_json::to_value(&found)?
        }
        Commands::List => {
            let accounts = manager.repository().find_all().await?;
            serde_json::to_value(&accounts)?
        }
    };

    Ok(value)
}
