//! GraphQL output types.

use async_graphql::{ID, SimpleObject};
use shelf_core::Book;

/// A book as exposed over GraphQL.
#[derive(Debug, Clone, PartialEq, Eq, SimpleObject)]
#[graphql(name = "Book")]
pub struct BookNode {
    pub id: ID,
    pub title: String,
    pub author: String,
    pub published_year: Option<i32>,
}

impl From<Book> for BookNode {
    fn from(book: Book) -> Self {
        Self {
            id: ID(book.id),
            title: book.title,
            author: book.author,
            published_year: book.published_year,
        }
    }
}

impl From<&Book> for BookNode {
    fn from(book: &Book) -> Self {
        Self::from(book.clone())
    }
}
