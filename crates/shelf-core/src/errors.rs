//! Cross-cutting error types for Shelf.
//!
//! Domain-specific errors (`StoreError`, `CatalogError`, `ConfigError`) live in
//! their own crates. The server binary folds everything into `anyhow`.

use thiserror::Error;

/// Errors that can be raised by any Shelf crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The operating system random source was unavailable.
    #[error("ID generation failed: {0}")]
    IdGeneration(String),
}
