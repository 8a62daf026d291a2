//! Open Library search client.

use std::time::Duration;

use serde::Deserialize;
use shelf_config::CatalogConfig;

use crate::{CatalogDoc, CatalogSource, error::CatalogError, http::check_response};

#[derive(Deserialize)]
struct SearchResponse {
    docs: Vec<SearchDoc>,
}

#[derive(Deserialize)]
struct SearchDoc {
    title: Option<String>,
    #[serde(default)]
    author_name: Vec<String>,
    first_publish_year: Option<i32>,
}

impl From<SearchDoc> for CatalogDoc {
    fn from(doc: SearchDoc) -> Self {
        Self {
            title: doc.title,
            authors: doc.author_name,
            first_publish_year: doc.first_publish_year,
        }
    }
}

/// Parse a `search.json` body into normalized documents.
fn parse_search_response(body: &str) -> Result<Vec<CatalogDoc>, CatalogError> {
    let data: SearchResponse =
        serde_json::from_str(body).map_err(|e| CatalogError::Parse(e.to_string()))?;
    Ok(data.docs.into_iter().map(CatalogDoc::from).collect())
}

/// HTTP client for the Open Library search API.
#[derive(Debug, Clone)]
pub struct OpenLibraryClient {
    http: reqwest::Client,
    base_url: String,
}

impl OpenLibraryClient {
    /// Build a client from the catalog section of the config.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Http`] if the underlying `reqwest::Client`
    /// fails to build (e.g. the TLS backend cannot initialize).
    pub fn new(config: &CatalogConfig) -> Result<Self, CatalogError> {
        let http = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Search URL for an author query.
    #[must_use]
    pub fn search_url(&self, author: &str, limit: u32) -> String {
        format!(
            "{}/search.json?author={}&limit={limit}",
            self.base_url,
            urlencoding::encode(author)
        )
    }
}

impl CatalogSource for OpenLibraryClient {
    async fn search_by_author(
        &self,
        author: &str,
        limit: u32,
    ) -> Result<Vec<CatalogDoc>, CatalogError> {
        let url = self.search_url(author, limit);
        tracing::debug!(%url, "querying catalog");

        let resp = check_response(self.http.get(&url).send().await?).await?;
        let body = resp.text().await?;
        let docs = parse_search_response(&body)?;

        tracing::debug!(count = docs.len(), "catalog search returned");
        Ok(docs)
    }
}
