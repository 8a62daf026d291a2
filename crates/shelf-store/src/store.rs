//! The in-memory book store.
//!
//! Records are kept in insertion order and looked up by linear scan. IDs are
//! unique across the store: [`BookStore::insert`] refuses a duplicate.

use std::sync::Arc;

use shelf_core::Book;
use shelf_core::ids::generate_book_id;
use tokio::sync::RwLock;

use crate::error::StoreError;
use crate::updates::BookUpdate;

/// Store handle shared between request handlers.
pub type SharedStore = Arc<RwLock<BookStore>>;

#[derive(Debug, Clone, Default)]
pub struct BookStore {
    books: Vec<Book>,
}

impl BookStore {
    #[must_use]
    pub const fn new() -> Self {
        Self { books: Vec::new() }
    }

    /// Build a store from records in order.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::DuplicateId`] if two records share an ID.
    pub fn from_books(books: impl IntoIterator<Item = Book>) -> Result<Self, StoreError> {
        let mut store = Self::new();
        for book in books {
            store.insert(book)?;
        }
        Ok(store)
    }

    /// Wrap the store for sharing across handlers.
    #[must_use]
    pub fn into_shared(self) -> SharedStore {
        Arc::new(RwLock::new(self))
    }

    /// All records in insertion order.
    #[must_use]
    pub fn list(&self) -> &[Book] {
        &self.books
    }

    #[must_use]
    pub fn find_by_id(&self, id: &str) -> Option<&Book> {
        self.books.iter().find(|b| b.id == id)
    }

    /// Append a record.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::DuplicateId`] if the ID is already present.
    pub fn insert(&mut self, book: Book) -> Result<(), StoreError> {
        if self.find_by_id(&book.id).is_some() {
            return Err(StoreError::DuplicateId(book.id));
        }
        self.books.push(book);
        Ok(())
    }

    /// Create a record under a freshly generated ID and return it.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if ID generation fails or the generated ID
    /// collides with an existing record.
    pub fn create(
        &mut self,
        title: impl Into<String>,
        author: impl Into<String>,
        published_year: Option<i32>,
    ) -> Result<Book, StoreError> {
        let book = Book::new(generate_book_id()?, title, author, published_year);
        self.insert(book.clone())?;
        tracing::debug!(id = %book.id, "book created");
        Ok(book)
    }

    /// Apply the fields present in `update` to the record with `id`.
    ///
    /// Returns `None` when no record has that ID; the store is untouched.
    pub fn update_fields(&mut self, id: &str, update: &BookUpdate) -> Option<&Book> {
        let book = self.books.iter_mut().find(|b| b.id == id)?;
        if let Some(title) = &update.title {
            book.title.clone_from(title);
        }
        if let Some(author) = &update.author {
            book.author.clone_from(author);
        }
        if let Some(year) = update.published_year {
            book.published_year = year;
        }
        if !update.is_empty() {
            tracing::debug!(id, ?update, "book updated");
        }
        Some(&*book)
    }

    /// Remove the record with `id`, returning it if it existed.
    pub fn remove_by_id(&mut self, id: &str) -> Option<Book> {
        let index = self.books.iter().position(|b| b.id == id)?;
        let removed = self.books.remove(index);
        tracing::debug!(id, "book removed");
        Some(removed)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.books.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}
