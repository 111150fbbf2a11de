mod config;
mod database_config;
mod error;
mod log_level;
mod logging_config;

#[cfg(test)]
mod tests;

pub use config::Config;
pub use database_config::DatabaseConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;

const CONFIG_DIR_ENV: &str = "POS_CONFIG_DIR";
const DEFAULT_CONFIG_DIR: &str = ".pos";
const CONFIG_FILENAME: &str = "config.toml";
const DEFAULT_DATABASE_FILENAME: &str = "accounts.db";
const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const DEFAULT_LOG_COLORED: bool = true;
