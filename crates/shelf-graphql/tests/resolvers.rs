//! Resolver tests executed against a real schema over a fresh store.

use async_graphql::{Request, Variables};
use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use shelf_catalog::{CatalogDoc, CatalogError, CatalogSource};
use shelf_core::Book;
use shelf_graphql::{BookSchema, build_schema};
use shelf_store::{BookStore, SeedPolicy, SharedStore, seed_store};

const ADD: &str = r"
    mutation Add($title: String!, $author: String!, $year: Int) {
        addBook(title: $title, author: $author, publishedYear: $year) {
            id title author publishedYear
        }
    }";

const GET: &str = r"
    query Get($id: ID!) {
        book(id: $id) { id title author publishedYear }
    }";

const DELETE: &str = r"
    mutation Delete($id: ID!) { deleteBook(id: $id) }";

const COUNT: &str = "{ books { id } }";

fn sample_schema() -> (BookSchema, SharedStore) {
    let store = BookStore::from_books([
        Book::new("1", "The Hobbit", "J.R.R. Tolkien", Some(1937)),
        Book::new("2", "1984", "George Orwell", Some(1949)),
    ])
    .unwrap()
    .into_shared();
    (build_schema(store.clone()), store)
}

async fn run(schema: &BookSchema, query: &str, vars: Value) -> Value {
    let response = schema
        .execute(Request::new(query).variables(Variables::from_json(vars)))
        .await;
    assert!(response.errors.is_empty(), "errors: {:?}", response.errors);
    response.data.into_json().unwrap()
}

async fn book_count(schema: &BookSchema) -> usize {
    run(schema, COUNT, json!({}))
        .await["books"]
        .as_array()
        .map_or(0, Vec::len)
}

#[tokio::test]
async fn books_lists_in_insertion_order() {
    let (schema, _) = sample_schema();
    let data = run(&schema, "{ books { id title author publishedYear } }", json!({})).await;
    assert_eq!(
        data,
        json!({ "books": [
            { "id": "1", "title": "The Hobbit", "author": "J.R.R. Tolkien", "publishedYear": 1937 },
            { "id": "2", "title": "1984", "author": "George Orwell", "publishedYear": 1949 },
        ]})
    );
}

#[tokio::test]
async fn book_by_unknown_id_is_null() {
    let (schema, _) = sample_schema();
    let data = run(&schema, GET, json!({ "id": "nope" })).await;
    assert_eq!(data, json!({ "book": null }));
}

#[tokio::test]
async fn add_then_get_returns_equal_record() {
    let (schema, store) = sample_schema();
    let added = run(
        &schema,
        ADD,
        json!({ "title": "Dune", "author": "Frank Herbert", "year": 1965 }),
    )
    .await["addBook"]
        .clone();

    let id = added["id"].as_str().unwrap().to_string();
    let fetched = run(&schema, GET, json!({ "id": id })).await["book"].clone();
    assert_eq!(fetched, added);
    assert_eq!(store.read().await.len(), 3);
}

#[tokio::test]
async fn add_without_year_leaves_it_null() {
    let (schema, _) = sample_schema();
    let data = run(&schema, ADD, json!({ "title": "Untitled", "author": "Anon" })).await;
    assert_eq!(data["addBook"]["publishedYear"], Value::Null);
}

#[tokio::test]
async fn repeated_adds_get_unique_ids() {
    let (schema, _) = sample_schema();
    let mut ids = std::collections::HashSet::new();
    for _ in 0..20 {
        let data = run(&schema, ADD, json!({ "title": "Same", "author": "Same" })).await;
        let id = data["addBook"]["id"].as_str().unwrap().to_string();
        assert!(ids.insert(id), "duplicate id returned by addBook");
    }
    assert_eq!(book_count(&schema).await, 22);
}

#[tokio::test]
async fn update_changes_only_supplied_fields() {
    let (schema, _) = sample_schema();
    let data = run(
        &schema,
        r#"mutation { updateBook(id: "2", title: "Nineteen Eighty-Four") { id title author publishedYear } }"#,
        json!({}),
    )
    .await;
    assert_eq!(
        data["updateBook"],
        json!({ "id": "2", "title": "Nineteen Eighty-Four", "author": "George Orwell", "publishedYear": 1949 })
    );
}

#[tokio::test]
async fn update_with_no_fields_returns_record_unchanged() {
    let (schema, _) = sample_schema();
    let before = run(&schema, GET, json!({ "id": "1" })).await["book"].clone();
    let data = run(
        &schema,
        r#"mutation { updateBook(id: "1") { id title author publishedYear } }"#,
        json!({}),
    )
    .await;
    assert_eq!(data["updateBook"], before);
}

#[tokio::test]
async fn update_with_explicit_null_year_clears_it() {
    let (schema, store) = sample_schema();
    run(
        &schema,
        r#"mutation { updateBook(id: "1", publishedYear: null) { id } }"#,
        json!({}),
    )
    .await;
    assert_eq!(store.read().await.find_by_id("1").unwrap().published_year, None);
}

#[tokio::test]
async fn update_unknown_id_is_null_and_size_unchanged() {
    let (schema, _) = sample_schema();
    let data = run(
        &schema,
        r#"mutation { updateBook(id: "missing", title: "X") { id } }"#,
        json!({}),
    )
    .await;
    assert_eq!(data, json!({ "updateBook": null }));
    assert_eq!(book_count(&schema).await, 2);
}

#[tokio::test]
async fn delete_known_and_unknown() {
    let (schema, _) = sample_schema();

    let data = run(&schema, DELETE, json!({ "id": "1" })).await;
    assert_eq!(data["deleteBook"], "Book with id 1 deleted.");
    assert_eq!(book_count(&schema).await, 1);

    let data = run(&schema, DELETE, json!({ "id": "1" })).await;
    assert_eq!(data["deleteBook"], "Book with id 1 not found.");
    assert_eq!(book_count(&schema).await, 1);
}

#[tokio::test]
async fn missing_required_argument_is_rejected_by_schema() {
    let (schema, store) = sample_schema();
    let response = schema
        .execute(r#"mutation { addBook(title: "No author") { id } }"#)
        .await;
    assert!(!response.errors.is_empty());
    assert_eq!(store.read().await.len(), 2);
}

struct EmptyCatalog;

impl CatalogSource for EmptyCatalog {
    async fn search_by_author(
        &self,
        _author: &str,
        _limit: u32,
    ) -> Result<Vec<CatalogDoc>, CatalogError> {
        Ok(Vec::new())
    }
}

#[tokio::test]
async fn fallback_seed_add_and_delete_roundtrip() {
    let (store, _) = seed_store(&EmptyCatalog, &SeedPolicy::default()).await;
    let schema = build_schema(store.into_shared());
    assert_eq!(book_count(&schema).await, 25);

    let added = run(
        &schema,
        ADD,
        json!({ "title": "Test", "author": "Author", "year": 2020 }),
    )
    .await;
    let id = added["addBook"]["id"].as_str().unwrap().to_string();
    assert_eq!(book_count(&schema).await, 26);

    let deleted = run(&schema, DELETE, json!({ "id": id })).await;
    let message = deleted["deleteBook"].as_str().unwrap();
    assert!(message.contains(&id), "confirmation should name {id}: {message}");
    assert!(message.ends_with("deleted."));
    assert_eq!(book_count(&schema).await, 25);
}
