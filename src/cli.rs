use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::services::lookup::DEFAULT_TIMEOUT_SECS;

/// Top-level CLI definition for book-lookup.
#[derive(Parser, Debug)]
#[command(name = "book-lookup")]
#[command(about = "Look up book metadata from the Open Library catalog", long_about = None)]
pub struct Cli {
    /// Timeout applied to the catalog request (seconds).
    #[arg(long, global = true, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_secs: u64,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a book to the library (not implemented yet).
    Add(AddArgs),
    /// Show full metadata for a book given a file or explicit fields.
    Info(InfoArgs),
    /// Free-text search against the catalog.
    Lookup(LookupArgs),
    /// Print the normalized filename for a book.
    Rename(RenameArgs),
}

/// Arguments for the `add` subcommand.
#[derive(clap::Args, Debug)]
pub struct AddArgs {
    /// File that would be added to the library.
    pub file: PathBuf,
}

/// Arguments for the `info` subcommand.
#[derive(clap::Args, Debug)]
pub struct InfoArgs {
    /// Derive title/author/year from an existing <title>_<author>_<year>.<ext> file.
    #[arg(long, conflicts_with_all = ["title", "author", "year"])]
    pub file: Option<PathBuf>,

    /// Book title to search for.
    #[arg(long, required_unless_present = "file")]
    pub title: Option<String>,

    /// Author name to narrow the search.
    #[arg(long)]
    pub author: Option<String>,

    /// Publication year; used in error messages, never sent to the catalog.
    #[arg(long)]
    pub year: Option<String>,

    /// Print a one-line commit message for the first match instead of the listing.
    #[arg(long, default_value_t = false)]
    pub commit_msg: bool,
}

/// Arguments for the `lookup` subcommand.
#[derive(clap::Args, Debug)]
pub struct LookupArgs {
    /// Free-text search phrase.
    #[arg(required = true)]
    pub phrase: Vec<String>,

    /// Maximum number of results to print.
    #[arg(long)]
    pub limit: Option<usize>,
}

/// Arguments for the `rename` subcommand.
#[derive(clap::Args, Debug)]
pub struct RenameArgs {
    /// Existing file providing the lookup terms and the target extension.
    #[arg(long, conflicts_with_all = ["title", "author", "year", "ext"])]
    pub file: Option<PathBuf>,

    /// Book title to search for.
    #[arg(long, required_unless_present = "file")]
    pub title: Option<String>,

    /// Author name to narrow the search.
    #[arg(long)]
    pub author: Option<String>,

    /// Accepted for symmetry; the printed name always uses the catalog's year.
    #[arg(long)]
    pub year: Option<String>,

    /// Extension for the normalized name, with or without the leading dot.
    #[arg(long)]
    pub ext: Option<String>,
}
