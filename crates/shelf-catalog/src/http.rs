//! Shared HTTP response checks for the catalog client.
//!
//! 429 becomes [`CatalogError::RateLimited`] (with `Retry-After` parsing) and
//! any other non-success status becomes [`CatalogError::Api`].

use crate::error::CatalogError;

/// Seconds assumed when a 429 carries no usable `Retry-After` header.
const DEFAULT_RETRY_AFTER_SECS: u64 = 60;

/// Check an HTTP response for error statuses, returning it unchanged on success.
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, CatalogError> {
    if resp.status() == reqwest::StatusCode::TOO_MANY_REQUESTS {
        return Err(CatalogError::RateLimited {
            retry_after_secs: parse_retry_after(&resp),
        });
    }
    if !resp.status().is_success() {
        return Err(CatalogError::Api {
            status: resp.status().as_u16(),
            message: resp.text().await.unwrap_or_default(),
        });
    }
    Ok(resp)
}

fn parse_retry_after(resp: &reqwest::Response) -> u64 {
    resp.headers()
        .get(reqwest::header::RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(DEFAULT_RETRY_AFTER_SECS)
}
