use crate::commands::Commands;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "pos-admin")]
#[command(about = "Create and inspect POS accounts")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub(crate) command: Commands,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub(crate) pretty: bool,
}
