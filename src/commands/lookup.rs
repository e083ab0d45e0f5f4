use anyhow::Result;
use tracing::info;

use crate::cli::LookupArgs;
use crate::commands::print_results;
use crate::services::lookup::{format_results, LookupClient};

pub async fn run(args: LookupArgs, client: &LookupClient) -> Result<()> {
    let phrase = args.phrase.join(" ");
    info!("Looking up '{}'", phrase);

    let records = client.lookup(&phrase).await?;
    let mut results = format_results(&records);
    if let Some(limit) = args.limit {
        results.truncate(limit);
    }

    print_results(&results);
    Ok(())
}
