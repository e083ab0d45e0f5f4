use anyhow::{bail, Result};
use tracing::info;

use crate::cli::InfoArgs;
use crate::commands::print_results;
use crate::services::lookup::{format_results, LookupClient};
use crate::utils::filename::parse_filename;

pub async fn run(args: InfoArgs, client: &LookupClient) -> Result<()> {
    let (title, author, year) = match &args.file {
        Some(path) => {
            let parsed = parse_filename(path)?;
            info!(
                "derived query from {}: '{}' by {}",
                path.display(),
                parsed.title,
                parsed.author
            );
            (parsed.title, Some(parsed.author), Some(parsed.year))
        }
        None => (
            args.title.clone().unwrap_or_default(),
            args.author.clone(),
            args.year.clone(),
        ),
    };

    let records = client
        .info(&title, author.as_deref(), year.as_deref())
        .await?;

    if args.commit_msg {
        let valid = match records.iter().find_map(|r| r.validate().ok()) {
            Some(valid) => valid,
            None => bail!("no usable catalog record for '{}'", title),
        };
        println!("Add '{}' by {}", valid.title, valid.authors.join(", "));
        return Ok(());
    }

    print_results(&format_results(&records));
    Ok(())
}
