use anyhow::{bail, Result};

use crate::cli::RenameArgs;
use crate::services::lookup::LookupClient;
use crate::utils::filename::{file_extension, normalized_name, parse_filename};

pub async fn run(args: RenameArgs, client: &LookupClient) -> Result<()> {
    let (title, author, year, extension) = match &args.file {
        Some(path) => {
            let parsed = parse_filename(path)?;
            (
                parsed.title,
                Some(parsed.author),
                Some(parsed.year),
                file_extension(path),
            )
        }
        None => {
            let extension = match &args.ext {
                Some(ext) if ext.starts_with('.') => ext.clone(),
                Some(ext) => format!(".{}", ext),
                None => String::new(),
            };
            (
                args.title.clone().unwrap_or_default(),
                args.author.clone(),
                args.year.clone(),
                extension,
            )
        }
    };

    let records = client
        .info(&title, author.as_deref(), year.as_deref())
        .await?;

    // The catalog's publish year wins over any year passed on the command
    // line; the year argument only narrows error messages.
    let record = match records.iter().find_map(|r| r.validate().ok()) {
        Some(record) => record,
        None => bail!("no usable catalog record for '{}'", title),
    };

    println!("{}", normalized_name(&record, &extension));
    Ok(())
}
