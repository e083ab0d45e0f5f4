use serde::Deserialize;

use crate::models::record::CatalogRecord;

/// Body of the catalog search endpoint. Older deployments spell the count
/// `numFound`, newer ones `num_found`; both are accepted.
#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    #[serde(alias = "numFound")]
    pub num_found: u64,
    #[serde(default)]
    pub docs: Vec<CatalogRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_camel_case_count() {
        let response: SearchResponse =
            serde_json::from_str(r#"{"numFound": 3, "docs": []}"#).expect("should decode");
        assert_eq!(response.num_found, 3);
        assert!(response.docs.is_empty());
    }

    #[test]
    fn missing_docs_defaults_to_empty() {
        let response: SearchResponse =
            serde_json::from_str(r#"{"num_found": 0}"#).expect("should decode");
        assert_eq!(response.num_found, 0);
        assert!(response.docs.is_empty());
    }
}
