use async_graphql::{ID, Object};
use shelf_store::SharedStore;

use crate::types::BookNode;

pub struct QueryRoot {
    store: SharedStore,
}

impl QueryRoot {
    #[must_use]
    pub const fn new(store: SharedStore) -> Self {
        Self { store }
    }
}

#[Object(name = "Query")]
impl QueryRoot {
    /// Every book in the store, in insertion order.
    async fn books(&self) -> Vec<BookNode> {
        self.store.read().await.list().iter().map(BookNode::from).collect()
    }

    /// The book with the given id, or null.
    async fn book(&self, id: ID) -> Option<BookNode> {
        self.store.read().await.find_by_id(&id).map(BookNode::from)
    }
}
