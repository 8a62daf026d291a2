//! # shelf-store
//!
//! In-memory book store and the startup seed loader.
//!
//! The store is an owned value; the server wraps it in a [`SharedStore`] and
//! hands it to the GraphQL schema. Seeding produces a fresh store, which keeps
//! every test independent of every other.

pub mod error;
pub mod fallback;
pub mod seed;
pub mod store;
pub mod updates;

pub use error::{SeedError, StoreError};
pub use seed::{FallbackReason, SeedOutcome, SeedPolicy, seed_store};
pub use store::{BookStore, SharedStore};
pub use updates::{BookUpdate, BookUpdateBuilder};
