use async_graphql::{ID, MaybeUndefined, Object, Result};
use shelf_store::{BookUpdate, SharedStore};

use crate::types::BookNode;

/// Confirmation returned by `deleteBook` on success.
#[must_use]
pub fn deleted_message(id: &str) -> String {
    format!("Book with id {id} deleted.")
}

/// Message returned by `deleteBook` when the id is unknown.
#[must_use]
pub fn not_found_message(id: &str) -> String {
    format!("Book with id {id} not found.")
}

pub struct MutationRoot {
    store: SharedStore,
}

impl MutationRoot {
    #[must_use]
    pub const fn new(store: SharedStore) -> Self {
        Self { store }
    }
}

#[Object(name = "Mutation")]
impl MutationRoot {
    /// Create a book under a freshly generated id.
    async fn add_book(
        &self,
        title: String,
        author: String,
        published_year: Option<i32>,
    ) -> Result<BookNode> {
        let book = self.store.write().await.create(title, author, published_year)?;
        Ok(book.into())
    }

    /// Change only the supplied fields. Passing `publishedYear: null` clears
    /// the year. Returns null if the id is unknown.
    async fn update_book(
        &self,
        id: ID,
        title: Option<String>,
        author: Option<String>,
        published_year: MaybeUndefined<i32>,
    ) -> Option<BookNode> {
        let update = BookUpdate {
            title,
            author,
            published_year: match published_year {
                MaybeUndefined::Undefined => None,
                MaybeUndefined::Null => Some(None),
                MaybeUndefined::Value(year) => Some(Some(year)),
            },
        };
        self.store
            .write()
            .await
            .update_fields(&id, &update)
            .map(BookNode::from)
    }

    /// Remove a book. Never fails: an unknown id yields a not-found message.
    async fn delete_book(&self, id: ID) -> String {
        if self.store.write().await.remove_by_id(&id).is_some() {
            deleted_message(&id)
        } else {
            tracing::debug!(id = %id.as_str(), "delete of unknown book");
            not_found_message(&id)
        }
    }
}
