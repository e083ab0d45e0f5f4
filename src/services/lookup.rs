use std::time::Duration;

use reqwest::{Client, StatusCode};
use thiserror::Error;
use tracing::{debug, info};

use crate::models::record::{CatalogRecord, FormattedResult};
use crate::models::responses::SearchResponse;

pub const SEARCH_ENDPOINT: &str = "https://openlibrary.org/search.json";

pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// One catalog search, either a free-text phrase or explicit fields.
#[derive(Debug, Clone, PartialEq)]
pub enum Query {
    Phrase(String),
    Fields {
        title: String,
        author: Option<String>,
        year: Option<String>,
    },
}

impl Query {
    /// Query-string pairs for the outgoing request. `year` is carried for
    /// error reporting only and is never sent to the server.
    pub fn params(&self) -> Vec<(&'static str, String)> {
        match self {
            Query::Phrase(phrase) => vec![("q", phrase.clone())],
            Query::Fields { title, author, .. } => {
                let mut params = vec![("title", title.clone())];
                if let Some(author) = author {
                    params.push(("author", author.clone()));
                }
                params
            }
        }
    }

    fn not_found(&self) -> LookupError {
        match self {
            Query::Phrase(phrase) => LookupError::NotFound {
                title: phrase.clone(),
                author: None,
                year: None,
            },
            Query::Fields {
                title,
                author,
                year,
            } => LookupError::NotFound {
                title: title.clone(),
                author: author.clone(),
                year: year.clone(),
            },
        }
    }
}

#[derive(Error, Debug)]
pub enum LookupError {
    #[error("{}", not_found_message(.title, .author))]
    NotFound {
        title: String,
        author: Option<String>,
        year: Option<String>,
    },
    #[error("request to catalog endpoint failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("catalog endpoint returned status {0}")]
    Status(StatusCode),
    #[error("unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),
}

fn not_found_message(title: &str, author: &Option<String>) -> String {
    match author {
        Some(author) => format!("No books found for '{}' (author: {})", title, author),
        None => format!("No books found for '{}'", title),
    }
}

/// Thin client over the catalog search endpoint. One GET per call, no
/// retries, explicit timeout.
pub struct LookupClient {
    client: Client,
    endpoint: String,
}

impl LookupClient {
    pub fn new(timeout: Duration) -> Result<Self, LookupError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint: SEARCH_ENDPOINT.to_string(),
        })
    }

    /// Raw mode: every record the server returned for the first page, in
    /// server order, unvalidated. Zero matches is an error carrying the
    /// original query terms.
    pub async fn search(&self, query: &Query) -> Result<Vec<CatalogRecord>, LookupError> {
        let params = query.params();
        debug!("GET {} {:?}", self.endpoint, params);

        let response = self
            .client
            .get(&self.endpoint)
            .query(&params)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(LookupError::Status(status));
        }

        let body = response.text().await?;
        let parsed: SearchResponse = serde_json::from_str(&body)?;

        if parsed.num_found == 0 {
            return Err(query.not_found());
        }

        info!(
            "{} matches, {} on first page",
            parsed.num_found,
            parsed.docs.len()
        );
        Ok(parsed.docs)
    }

    pub async fn lookup(&self, phrase: &str) -> Result<Vec<CatalogRecord>, LookupError> {
        self.search(&Query::Phrase(phrase.to_string())).await
    }

    pub async fn info(
        &self,
        title: &str,
        author: Option<&str>,
        year: Option<&str>,
    ) -> Result<Vec<CatalogRecord>, LookupError> {
        self.search(&Query::Fields {
            title: title.to_string(),
            author: author.map(str::to_string),
            year: year.map(str::to_string),
        })
        .await
    }
}

/// Curated mode: records missing any required field are dropped, the rest
/// become (title, description) pairs.
pub fn format_results(records: &[CatalogRecord]) -> Vec<FormattedResult> {
    records
        .iter()
        .filter_map(|record| match record.validate() {
            Ok(valid) => Some(valid.formatted()),
            Err(missing) => {
                debug!("dropping record missing {:?}", missing);
                None
            }
        })
        .collect()
}
