pub mod account_manager;
