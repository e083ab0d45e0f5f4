use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;

use book_lookup::cli::Cli;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("book_lookup=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = book_lookup::run(cli).await {
        error!("{}", e);
        std::process::exit(1);
    }
}
