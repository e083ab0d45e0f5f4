use std::collections::HashMap;
use std::fmt;

use serde::Deserialize;
use serde_json::Value;

/// Column the description labels are right-aligned to ("publisher" is the
/// widest label).
const LABEL_WIDTH: usize = 9;

/// One document as returned by the catalog search endpoint. The fields the
/// tool cares about are typed; everything else the server sends is kept in
/// `extra` so raw records lose nothing.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogRecord {
    #[serde(default)]
    pub title_suggest: Option<String>,
    #[serde(default)]
    pub author_name: Option<Vec<String>>,
    #[serde(default)]
    pub isbn: Option<Vec<String>>,
    #[serde(default)]
    pub publish_year: Option<Vec<YearValue>>,
    #[serde(default)]
    pub publisher: Option<Vec<String>>,
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

/// The service mixes integer and string publish years across records.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum YearValue {
    Number(i64),
    Text(String),
}

impl fmt::Display for YearValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            YearValue::Number(year) => write!(f, "{}", year),
            YearValue::Text(year) => write!(f, "{}", year),
        }
    }
}

/// A record that passed validation, with the index-0 picks already resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidRecord {
    pub title: String,
    pub authors: Vec<String>,
    pub publisher: String,
    pub isbn: String,
    pub year: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FormattedResult {
    pub title: String,
    pub description: String,
}

impl CatalogRecord {
    /// A record is usable only when title plus all four metadata lists are
    /// present and non-empty. Returns the names of the missing or empty
    /// fields otherwise.
    pub fn validate(&self) -> Result<ValidRecord, Vec<&'static str>> {
        let mut missing = Vec::new();

        let title = self.title_suggest.as_deref().filter(|t| !t.is_empty());
        if title.is_none() {
            missing.push("title_suggest");
        }
        let authors = self.author_name.as_deref().filter(|a| !a.is_empty());
        if authors.is_none() {
            missing.push("author_name");
        }
        let isbns = self.isbn.as_deref().filter(|i| !i.is_empty());
        if isbns.is_none() {
            missing.push("isbn");
        }
        let years = self.publish_year.as_deref().filter(|y| !y.is_empty());
        if years.is_none() {
            missing.push("publish_year");
        }
        let publishers = self.publisher.as_deref().filter(|p| !p.is_empty());
        if publishers.is_none() {
            missing.push("publisher");
        }

        match (title, authors, isbns, years, publishers) {
            (Some(title), Some(authors), Some(isbns), Some(years), Some(publishers)) => {
                Ok(ValidRecord {
                    title: title.to_string(),
                    authors: authors.to_vec(),
                    publisher: publishers[0].clone(),
                    isbn: isbns[0].clone(),
                    year: years[0].to_string(),
                })
            }
            _ => Err(missing),
        }
    }
}

impl ValidRecord {
    /// Human-readable form: the title plus a four-line description with the
    /// labels right-aligned so the colons line up.
    pub fn formatted(&self) -> FormattedResult {
        let fields = [
            ("author", self.authors.join(", ")),
            ("publisher", self.publisher.clone()),
            ("ISBN", self.isbn.clone()),
            ("year", self.year.clone()),
        ];

        let description = fields
            .iter()
            .map(|(label, value)| format!("{:>width$}: {}", label, value, width = LABEL_WIDTH))
            .collect::<Vec<_>>()
            .join("\n");

        FormattedResult {
            title: self.title.clone(),
            description,
        }
    }
}
