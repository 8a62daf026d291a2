//! HTTP surface: GraphQL on `POST /`, the GraphiQL IDE on `GET /`, and a
//! plain-text health check.

use anyhow::Context;
use async_graphql::http::GraphiQLSource;
use async_graphql_axum::GraphQL;
use axum::Router;
use axum::response::{Html, IntoResponse};
use axum::routing::get;
use shelf_config::ServerConfig;
use shelf_graphql::BookSchema;
use tokio::net::TcpListener;

/// Path the GraphQL endpoint is mounted on.
const GRAPHQL_PATH: &str = "/";

pub fn router(schema: BookSchema) -> Router {
    Router::new()
        .route(GRAPHQL_PATH, get(graphiql).post_service(GraphQL::new(schema)))
        .route("/health", get(health))
}

async fn graphiql() -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint(GRAPHQL_PATH).finish())
}

async fn health() -> &'static str {
    "ok"
}

/// Bind and serve until Ctrl-C.
///
/// A bind failure (port in use, bad host) is returned to the caller and ends
/// the process.
pub async fn serve(config: &ServerConfig, schema: BookSchema) -> anyhow::Result<()> {
    let addr = config.bind_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    let local = listener.local_addr().context("failed to read bound address")?;
    tracing::info!("server ready at http://{local}{GRAPHQL_PATH}");

    axum::serve(listener, router(schema))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server terminated unexpectedly")?;

    tracing::info!("shutdown");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(?e, "failed to install Ctrl-C handler");
        std::future::pending::<()>().await;
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::{Value, json};
    use shelf_graphql::build_schema;
    use shelf_store::BookStore;
    use shelf_store::fallback::fallback_books;

    use super::*;

    async fn spawn_server() -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let store = BookStore::from_books(fallback_books()).unwrap().into_shared();
        tokio::spawn(async move {
            axum::serve(listener, router(build_schema(store))).await.unwrap();
        });
        format!("http://{addr}")
    }

    async fn post(base: &str, query: &str) -> Value {
        reqwest::Client::new()
            .post(format!("{base}/"))
            .json(&json!({ "query": query }))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn graphql_post_lists_books() {
        let base = spawn_server().await;
        let body = post(&base, "{ books { id title } }").await;
        let books = body["data"]["books"].as_array().unwrap();
        assert_eq!(books.len(), 25);
        assert_eq!(books[0], json!({ "id": "1", "title": "The Hobbit" }));
    }

    #[tokio::test]
    async fn graphql_post_mutates_shared_store() {
        let base = spawn_server().await;
        let body = post(&base, r#"mutation { deleteBook(id: "25") }"#).await;
        assert_eq!(body["data"]["deleteBook"], "Book with id 25 deleted.");

        let body = post(&base, "{ books { id } }").await;
        assert_eq!(body["data"]["books"].as_array().unwrap().len(), 24);
    }

    #[tokio::test]
    async fn get_root_serves_graphiql() {
        let base = spawn_server().await;
        let resp = reqwest::get(format!("{base}/")).await.unwrap();
        assert!(resp.status().is_success());
        let content_type = resp
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();
        assert!(content_type.starts_with("text/html"), "got {content_type}");
    }

    #[tokio::test]
    async fn health_check() {
        let base = spawn_server().await;
        let body = reqwest::get(format!("{base}/health"))
            .await
            .unwrap()
            .text()
            .await
            .unwrap();
        assert_eq!(body, "ok");
    }

    #[tokio::test]
    async fn bind_conflict_is_an_error() {
        let taken = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let config = ServerConfig {
            host: "127.0.0.1".to_string(),
            port: taken.local_addr().unwrap().port(),
        };
        let store = BookStore::new().into_shared();
        let err = serve(&config, build_schema(store)).await.unwrap_err();
        assert!(format!("{err:#}").contains("failed to bind"), "got {err:#}");
    }
}
