//! Catalog error types.

use thiserror::Error;

/// Errors that can occur when querying the remote catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// HTTP transport error (connect, timeout, TLS).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Catalog API returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the catalog.
        status: u16,
        /// Error message or response body.
        message: String,
    },

    /// The response body was not the expected JSON shape.
    #[error("parse error: {0}")]
    Parse(String),

    /// The catalog returned a 429 Too Many Requests response.
    #[error("rate limited, retry after {retry_after_secs}s")]
    RateLimited {
        /// Seconds to wait before retrying.
        retry_after_secs: u64,
    },
}
