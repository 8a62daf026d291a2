//! # shelf-core
//!
//! Core types, ID generation, and error types for Shelf.
//!
//! This crate provides the foundational types shared across all Shelf crates:
//! - The `Book` entity served by the GraphQL API
//! - Book ID generation
//! - Cross-cutting error types

pub mod entities;
pub mod errors;
pub mod ids;

pub use entities::Book;
pub use errors::CoreError;
