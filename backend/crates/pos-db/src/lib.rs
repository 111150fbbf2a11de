pub mod connection;
pub mod error;
pub mod manager;
pub mod repositories;

pub use connection::database::{open_database, run_migrations};
pub use error::{DbError, Result};
pub use manager::account_manager::AccountManager;
pub use repositories::account_repository::AccountRepository;
