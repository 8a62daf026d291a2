//! One-shot startup seeding.
//!
//! The catalog is queried once. A non-empty result becomes the store; an
//! empty result or any failure substitutes the fallback list (unless the
//! policy disables it, in which case the store starts empty). Nothing here
//! returns an error: failures are logged and the caller always gets a store.

use std::fmt;

use shelf_catalog::{CatalogDoc, CatalogSource};
use shelf_config::ShelfConfig;
use shelf_core::Book;
use shelf_core::ids::generate_book_id;

use crate::error::{SeedError, StoreError};
use crate::fallback::fallback_books;
use crate::store::BookStore;

/// Author name used when a catalog document lists no contributors.
pub const UNKNOWN_AUTHOR: &str = "Unknown";

/// How seeding should behave.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedPolicy {
    pub author: String,
    pub limit: u32,
    /// Query the catalog at all.
    pub catalog_enabled: bool,
    /// Substitute the fallback list on failure or empty result.
    pub fallback_enabled: bool,
}

impl Default for SeedPolicy {
    fn default() -> Self {
        Self::from_config(&ShelfConfig::default())
    }
}

impl SeedPolicy {
    #[must_use]
    pub fn from_config(config: &ShelfConfig) -> Self {
        Self {
            author: config.catalog.author.clone(),
            limit: config.catalog.limit,
            catalog_enabled: config.catalog.enabled,
            fallback_enabled: config.seed.fallback,
        }
    }
}

/// Why the catalog did not seed the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FallbackReason {
    /// Catalog lookup turned off by configuration.
    CatalogDisabled,
    /// The catalog answered with no usable documents.
    EmptyResult,
    /// The lookup or the store build failed.
    Failed(String),
}

impl fmt::Display for FallbackReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CatalogDisabled => f.write_str("catalog disabled"),
            Self::EmptyResult => f.write_str("catalog returned no books"),
            Self::Failed(msg) => write!(f, "catalog lookup failed: {msg}"),
        }
    }
}

/// Which path seeding took.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeedOutcome {
    /// Store holds `count` records mapped from the catalog.
    Catalog { count: usize },
    /// Store holds the built-in fallback list.
    Fallback { reason: FallbackReason },
    /// Store is empty (fallback disabled).
    Empty { reason: FallbackReason },
}

/// Map a catalog document to a book with a fresh ID.
///
/// Documents without a title yield `None`; a missing contributor list maps to
/// [`UNKNOWN_AUTHOR`].
///
/// # Errors
///
/// Returns [`StoreError::Core`] if ID generation fails.
pub fn book_from_doc(doc: CatalogDoc) -> Result<Option<Book>, StoreError> {
    let Some(title) = doc.title.filter(|t| !t.trim().is_empty()) else {
        return Ok(None);
    };
    let author = doc
        .authors
        .into_iter()
        .next()
        .unwrap_or_else(|| UNKNOWN_AUTHOR.to_string());
    Ok(Some(Book::new(
        generate_book_id()?,
        title,
        author,
        doc.first_publish_year,
    )))
}

/// Seed a store from `source` according to `policy`.
pub async fn seed_store<S: CatalogSource>(
    source: &S,
    policy: &SeedPolicy,
) -> (BookStore, SeedOutcome) {
    if !policy.catalog_enabled {
        tracing::info!("catalog lookup disabled, skipping fetch");
        return fallback_store(policy, FallbackReason::CatalogDisabled);
    }

    tracing::info!(author = %policy.author, limit = policy.limit, "fetching initial data from catalog");
    match load_from_catalog(source, policy).await {
        Ok(store) if store.is_empty() => fallback_store(policy, FallbackReason::EmptyResult),
        Ok(store) => {
            log_seeded(&store);
            let count = store.len();
            (store, SeedOutcome::Catalog { count })
        }
        Err(error) => {
            tracing::warn!(%error, "failed to fetch initial data");
            fallback_store(policy, FallbackReason::Failed(error.to_string()))
        }
    }
}

/// Build the store used when the catalog did not deliver.
///
/// Public so the server can take this path directly when the catalog client
/// itself cannot be constructed.
#[must_use]
pub fn fallback_store(policy: &SeedPolicy, reason: FallbackReason) -> (BookStore, SeedOutcome) {
    if !policy.fallback_enabled {
        tracing::warn!(%reason, "fallback disabled, starting with an empty store");
        return (BookStore::new(), SeedOutcome::Empty { reason });
    }

    match BookStore::from_books(fallback_books()) {
        Ok(store) => {
            tracing::info!(%reason, "using built-in fallback books");
            log_seeded(&store);
            (store, SeedOutcome::Fallback { reason })
        }
        Err(error) => {
            tracing::error!(%error, "fallback list is invalid, starting with an empty store");
            (BookStore::new(), SeedOutcome::Empty { reason })
        }
    }
}

async fn load_from_catalog<S: CatalogSource>(
    source: &S,
    policy: &SeedPolicy,
) -> Result<BookStore, SeedError> {
    let docs = source.search_by_author(&policy.author, policy.limit).await?;
    let mut store = BookStore::new();
    for doc in docs {
        if let Some(book) = book_from_doc(doc)? {
            store.insert(book)?;
        }
    }
    Ok(store)
}

fn log_seeded(store: &BookStore) {
    tracing::info!(count = store.len(), "seeded books");
    for book in store.list() {
        tracing::debug!(
            id = %book.id,
            title = %book.title,
            author = %book.author,
            published_year = ?book.published_year,
            "seeded book"
        );
    }
}
