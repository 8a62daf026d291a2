//! # shelf-catalog
//!
//! Remote book catalog lookup for Shelf.
//!
//! The seed loader talks to the catalog through the [`CatalogSource`] trait so
//! tests can swap in a stub. [`OpenLibraryClient`] is the production
//! implementation backed by `https://openlibrary.org/search.json`.

mod error;
mod http;
mod open_library;

pub use error::CatalogError;
pub use open_library::OpenLibraryClient;

use std::future::Future;

use serde::{Deserialize, Serialize};

/// A single search hit, normalized from the catalog's wire format.
///
/// Every field is optional on the wire; mapping to a `Book` decides how to
/// fill the gaps.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogDoc {
    pub title: Option<String>,
    /// Contributor names in the order the catalog lists them.
    pub authors: Vec<String>,
    pub first_publish_year: Option<i32>,
}

/// A searchable source of book records.
pub trait CatalogSource {
    /// Search for up to `limit` documents by `author`.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] if the request fails, the catalog returns a
    /// non-success status, or the response cannot be parsed.
    fn search_by_author(
        &self,
        author: &str,
        limit: u32,
    ) -> impl Future<Output = Result<Vec<CatalogDoc>, CatalogError>> + Send;
}
