use clap::Parser;

/// Command-line flags for `shelfd`. Every flag is optional; with none given
/// the server runs from configuration defaults.
#[derive(Debug, Parser)]
#[command(name = "shelfd", version, about = "Shelf - GraphQL book API")]
pub struct Cli {
    /// Port to listen on (overrides `server.port`)
    #[arg(long)]
    pub port: Option<u16>,

    /// Interface to bind (overrides `server.host`)
    #[arg(long)]
    pub host: Option<String>,

    /// Skip the catalog lookup and seed from the built-in list
    #[arg(long)]
    pub no_catalog: bool,

    /// Print the GraphQL schema (SDL) and exit
    #[arg(long)]
    pub print_schema: bool,

    /// Quiet mode (errors only)
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long)]
    pub verbose: bool,
}
