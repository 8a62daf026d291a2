//! Startup steps that run before the listener is bound.

use anyhow::Context;
use shelf_catalog::OpenLibraryClient;
use shelf_config::ShelfConfig;
use shelf_store::seed::fallback_store;
use shelf_store::{BookStore, FallbackReason, SeedOutcome, SeedPolicy, seed_store};

use crate::cli::Cli;

/// Load layered config and apply command-line overrides.
pub fn load_config(cli: &Cli) -> anyhow::Result<ShelfConfig> {
    let mut config = ShelfConfig::load_with_dotenv().context("failed to load configuration")?;
    apply_overrides(&mut config, cli);
    Ok(config)
}

fn apply_overrides(config: &mut ShelfConfig, cli: &Cli) {
    if let Some(port) = cli.port {
        config.server.port = port;
    }
    if let Some(host) = &cli.host {
        config.server.host.clone_from(host);
    }
    if cli.no_catalog {
        config.catalog.enabled = false;
    }
}

/// Seed the store once. Never fails; see `shelf_store::seed`.
pub async fn seed(config: &ShelfConfig) -> (BookStore, SeedOutcome) {
    let policy = SeedPolicy::from_config(config);
    match OpenLibraryClient::new(&config.catalog) {
        Ok(client) => seed_store(&client, &policy).await,
        Err(error) if policy.catalog_enabled => {
            tracing::warn!(%error, "failed to build catalog client");
            fallback_store(&policy, FallbackReason::Failed(error.to_string()))
        }
        Err(_) => fallback_store(&policy, FallbackReason::CatalogDisabled),
    }
}
