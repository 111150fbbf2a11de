use thiserror::Error;

#[derive(Error, Debug)]
pub enum AdminError {
    #[error("Config error: {0}")]
    Config(#[from] pos_config::ConfigError),

    #[error("{0}")]
    Db(#[from] pos_db::DbError),

    #[error("{0}")]
    Core(#[from] pos_core::CoreError),

    #[error("Invalid argument: {message}")]
    Argument { message: String },

    #[error("Logger error: {message}")]
    Logger { message: String },

    #[error("Account not found: {key}")]
    NotFound { key: String },

    #[error("Output error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, AdminError>;
