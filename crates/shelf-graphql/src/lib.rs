//! # shelf-graphql
//!
//! GraphQL schema for the Shelf book API.
//!
//! ```graphql
//! type Query {
//!   books: [Book!]!
//!   book(id: ID!): Book
//! }
//!
//! type Mutation {
//!   addBook(title: String!, author: String!, publishedYear: Int): Book!
//!   updateBook(id: ID!, title: String, author: String, publishedYear: Int): Book
//!   deleteBook(id: ID!): String!
//! }
//! ```
//!
//! Resolvers operate directly on the [`SharedStore`] handed to
//! [`build_schema`]. Queries take a read lock and mutations a write lock; no
//! resolver awaits anything else while holding it.

mod mutation;
mod query;
mod types;

pub use mutation::{MutationRoot, deleted_message, not_found_message};
pub use query::QueryRoot;
pub use types::BookNode;

use async_graphql::{EmptySubscription, Schema};
use shelf_store::SharedStore;

pub type BookSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Build the executable schema over `store`.
#[must_use]
pub fn build_schema(store: SharedStore) -> BookSchema {
    Schema::build(
        QueryRoot::new(store.clone()),
        MutationRoot::new(store),
        EmptySubscription,
    )
    .finish()
}
