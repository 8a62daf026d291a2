//! Remote catalog lookup used to seed the store at startup.

use serde::{Deserialize, Serialize};

fn default_base_url() -> String {
    "https://openlibrary.org".to_string()
}

fn default_author() -> String {
    "tolkien".to_string()
}

const fn default_limit() -> u32 {
    5
}

const fn default_timeout_secs() -> u64 {
    10
}

fn default_user_agent() -> String {
    "shelf/0.1".to_string()
}

const fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CatalogConfig {
    /// Whether to query the catalog at all. When false, seeding goes straight
    /// to the fallback list.
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Base URL of the Open Library compatible search API.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Author filter for the seed search.
    #[serde(default = "default_author")]
    pub author: String,

    /// Maximum number of documents requested.
    #[serde(default = "default_limit")]
    pub limit: u32,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            enabled: default_true(),
            base_url: default_base_url(),
            author: default_author(),
            limit: default_limit(),
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}
