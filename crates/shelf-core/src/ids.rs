//! Book ID generation.
//!
//! IDs are short opaque tokens: a fixed prefix, a dash, and 8 lowercase hex
//! characters drawn from 4 random bytes. Collisions are not checked here; the
//! store rejects a duplicate on insert.

use crate::errors::CoreError;

/// Prefix for generated book IDs.
pub const PREFIX_BOOK: &str = "bk";

/// Number of random bytes behind each generated ID.
const RANDOM_BYTES: usize = 4;

/// Generate a fresh book ID such as `bk-3fa92c01`.
///
/// # Errors
///
/// Returns [`CoreError::IdGeneration`] if the OS random source fails.
pub fn generate_book_id() -> Result<String, CoreError> {
    let mut bytes = [0u8; RANDOM_BYTES];
    getrandom::fill(&mut bytes).map_err(|e| CoreError::IdGeneration(e.to_string()))?;
    let hex: String = bytes.iter().map(|b| format!("{b:02x}")).collect();
    Ok(format!("{PREFIX_BOOK}-{hex}"))
}
