// file: src/retrieval/entrez.rs
// description: NCBI E-utilities client for esearch, efetch and esummary
// reference: https://www.ncbi.nlm.nih.gov/books/NBK25501/

use crate::config::EntrezConfig;
use crate::error::{PipelineError, Result};
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

#[derive(Debug, Deserialize)]
struct EsearchResponse {
    #[serde(rename = "esearchresult")]
    esearch_result: EsearchResult,
}

#[derive(Debug, Deserialize)]
struct EsearchResult {
    #[serde(rename = "idlist", default)]
    id_list: Vec<String>,
}

/// Thin transport over the two-step E-utilities shape: an ID search
/// followed by one batch detail fetch.
#[derive(Clone)]
pub struct EntrezClient {
    client: Client,
    config: EntrezConfig,
}

impl EntrezClient {
    pub fn new(config: EntrezConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    /// Ordered ID list for a free-text term, capped at `retmax`.
    pub async fn esearch(&self, db: &str, term: &str, retmax: usize) -> Result<Vec<String>> {
        let url = format!("{}/esearch.fcgi", self.config.base_url);
        let mut params = vec![
            ("db".to_string(), db.to_string()),
            ("term".to_string(), term.to_string()),
            ("retmax".to_string(), retmax.to_string()),
            ("retmode".to_string(), "json".to_string()),
        ];
        self.append_api_key(&mut params);

        debug!("esearch db={} term={}", db, term);

        let response = self.client.get(&url).query(&params).send().await?;

        if !response.status().is_success() {
            return Err(PipelineError::Search {
                db: db.to_string(),
                message: format!("esearch returned status {}", response.status()),
            });
        }

        let body: EsearchResponse =
            response.json().await.map_err(|e| PipelineError::Search {
                db: db.to_string(),
                message: format!("failed to parse esearch response: {e}"),
            })?;

        debug!("esearch db={} returned {} ids", db, body.esearch_result.id_list.len());

        Ok(body.esearch_result.id_list)
    }

    /// Batch detail fetch returning the raw XML document collection.
    pub async fn efetch_xml(&self, db: &str, ids: &[String]) -> Result<String> {
        let url = format!("{}/efetch.fcgi", self.config.base_url);
        let mut params = vec![
            ("db".to_string(), db.to_string()),
            ("id".to_string(), ids.join(",")),
            ("retmode".to_string(), "xml".to_string()),
        ];
        self.append_api_key(&mut params);

        debug!("efetch db={} ids={}", db, ids.len());

        let response = self.client.get(&url).query(&params).send().await?;

        if !response.status().is_success() {
            return Err(PipelineError::Search {
                db: db.to_string(),
                message: format!("efetch returned status {}", response.status()),
            });
        }

        Ok(response.text().await?)
    }

    /// Batch detail fetch returning the JSON summary document collection,
    /// keyed by ID under the top-level `result` object.
    pub async fn esummary(&self, db: &str, ids: &[String]) -> Result<serde_json::Value> {
        let url = format!("{}/esummary.fcgi", self.config.base_url);
        let mut params = vec![
            ("db".to_string(), db.to_string()),
            ("id".to_string(), ids.join(",")),
            ("retmode".to_string(), "json".to_string()),
        ];
        self.append_api_key(&mut params);

        debug!("esummary db={} ids={}", db, ids.len());

        let response = self.client.get(&url).query(&params).send().await?;

        if !response.status().is_success() {
            return Err(PipelineError::Search {
                db: db.to_string(),
                message: format!("esummary returned status {}", response.status()),
            });
        }

        response.json().await.map_err(|e| PipelineError::Search {
            db: db.to_string(),
            message: format!("failed to parse esummary response: {e}"),
        })
    }

    fn append_api_key(&self, params: &mut Vec<(String, String)>) {
        if let Some(key) = &self.config.api_key {
            params.push(("api_key".to_string(), key.clone()));
        }
    }
}
