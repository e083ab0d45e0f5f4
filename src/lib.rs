pub mod cli;
pub mod commands;
pub mod models;
pub mod services;
pub mod utils;

use std::time::Duration;

use anyhow::Result;

use cli::{Cli, Commands};
use services::lookup::LookupClient;

/// Dispatch a parsed CLI invocation. Every subcommand is a single lookup
/// against the catalog; the client lives for the length of the process.
pub async fn run(cli: Cli) -> Result<()> {
    let client = LookupClient::new(Duration::from_secs(cli.timeout_secs))?;

    match cli.command {
        Commands::Add(args) => commands::add::run(args),
        Commands::Info(args) => commands::info::run(args, &client).await,
        Commands::Lookup(args) => commands::lookup::run(args, &client).await,
        Commands::Rename(args) => commands::rename::run(args, &client).await,
    }
}
