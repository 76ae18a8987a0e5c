//! CLI entry point for the librarian tool.

use anyhow::Result;
use clap::Parser;
use librarian_core::ApiClient;
use librarian_core::client::resolve_api_url;
use tracing::debug;

mod cli;
mod commands;

use cli::{Args, Command};

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments first (before tracing, so --help works without logs)
    let args = Args::parse();

    // Determine log level based on verbose/quiet flags
    // Priority: RUST_LOG env var > quiet flag > verbose flag > default (warn)
    let default_level = if args.quiet {
        "error"
    } else {
        match args.verbose {
            0 => "warn",
            1 => "debug",
            _ => "trace",
        }
    };

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));

    tracing_subscriber::fmt().with_env_filter(filter).init();

    debug!(?args, "CLI arguments parsed");

    let api_url = resolve_api_url(args.api_url.as_deref());
    debug!(%api_url, "backend base URL resolved");
    let client = ApiClient::with_base_url(api_url)?;

    match &args.command {
        Command::Library => commands::run_library_command(client).await,
        Command::Search(search_args) => commands::run_search_command(client, search_args).await,
        Command::Add(add_args) => commands::run_add_command(client, add_args).await,
        Command::Status(status_args) => commands::run_status_command(client, status_args).await,
        Command::Remove(remove_args) => commands::run_remove_command(client, remove_args).await,
        Command::Quote => commands::run_quote_command(client).await,
        Command::Author(author_args) => commands::run_author_command(client, author_args).await,
        Command::Summary(summary_args) => commands::run_summary_command(client, summary_args).await,
    }
}
