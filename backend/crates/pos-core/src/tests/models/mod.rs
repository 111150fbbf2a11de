mod account;
mod email;
mod mobile;
mod new_account;
mod timestamps;
mod user_type;
