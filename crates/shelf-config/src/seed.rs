//! Startup seeding policy.

use serde::{Deserialize, Serialize};

const fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SeedConfig {
    /// Substitute the built-in book list when the catalog lookup fails or
    /// comes back empty. When false the store starts empty instead.
    #[serde(default = "default_true")]
    pub fallback: bool,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            fallback: default_true(),
        }
    }
}
