//! shelfd: GraphQL book API server.
//!
//! Startup order is fixed: tracing, configuration, seeding, then listening.
//! The listener is not bound until seeding has finished.

use clap::Parser;
use shelf_graphql::build_schema;
use shelf_store::BookStore;

mod bootstrap;
mod cli;
mod server;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("shelfd error: {error:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    if cli.print_schema {
        print!("{}", build_schema(BookStore::new().into_shared()).sdl());
        return Ok(());
    }

    let config = bootstrap::load_config(&cli)?;
    tracing::debug!(?config, "configuration loaded");

    let (store, outcome) = bootstrap::seed(&config).await;
    tracing::info!(?outcome, books = store.len(), "seeding complete");

    server::serve(&config.server, build_schema(store.into_shared())).await
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "info"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("SHELF_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
