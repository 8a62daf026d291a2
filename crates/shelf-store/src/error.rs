//! Store and seeding error types.

use shelf_catalog::CatalogError;
use shelf_core::CoreError;
use thiserror::Error;

/// Errors from book store mutations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A record with this ID is already in the store.
    #[error("Duplicate book id: {0}")]
    DuplicateId(String),

    /// A fresh ID could not be generated.
    #[error(transparent)]
    Core(#[from] CoreError),
}

/// Reasons a catalog-backed seed attempt did not produce a store.
///
/// Never escapes the seed loader; it is logged and turned into a fallback.
#[derive(Debug, Error)]
pub enum SeedError {
    #[error("catalog lookup failed: {0}")]
    Catalog(#[from] CatalogError),

    #[error("could not build seeded store: {0}")]
    Store(#[from] StoreError),
}
