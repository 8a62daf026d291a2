//! Entity structs for Shelf domain objects.
//!
//! Entities derive `Serialize` and `Deserialize` so they can be logged as JSON
//! and fed to fixtures. The GraphQL layer maps them onto its own output types.

mod book;

pub use book::Book;
