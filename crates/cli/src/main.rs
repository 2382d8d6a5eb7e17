use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use linksaver_core::{env_non_empty, SortOrder};
use linksaver_fetch::FetchConfig;
use linksaver_service::BookmarkService;
use linksaver_storage::StorageBackend;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "linksaver")]
#[command(about = "Save links with fetched titles, favicons and summaries", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP API
    Serve {
        #[arg(short, long, default_value = "3000")]
        port: u16,
        #[arg(short = 'H', long, default_value = "127.0.0.1")]
        host: String,
    },
    /// Create or update the PostgreSQL schema (requires DATABASE_URL)
    Migrate,
    /// Ingest one URL for a user and print the stored bookmark
    Add {
        url: String,
        #[arg(short, long)]
        user: String,
        #[arg(short, long = "tag")]
        tags: Vec<String>,
    },
    /// Print a user's bookmarks
    List {
        #[arg(short, long)]
        user: String,
        #[arg(short, long)]
        query: Option<String>,
        #[arg(short, long = "tag")]
        tags: Vec<String>,
        #[arg(short, long, default_value = "position", value_parser = parse_sort)]
        sort: SortOrder,
    },
}

fn parse_sort(raw: &str) -> Result<SortOrder, String> {
    raw.parse()
}

/// PostgreSQL when `DATABASE_URL` is set, otherwise the in-process backend.
pub(crate) async fn open_storage() -> Result<Arc<StorageBackend>> {
    match env_non_empty("DATABASE_URL") {
        Some(url) => {
            let storage = StorageBackend::new_postgres(&url).await?;
            tracing::info!("Connected to PostgreSQL");
            Ok(Arc::new(storage))
        },
        None => {
            tracing::warn!("DATABASE_URL not set, bookmarks are kept in memory and lost on exit");
            Ok(Arc::new(StorageBackend::new_memory()))
        },
    }
}

pub(crate) async fn open_service() -> Result<Arc<BookmarkService>> {
    let storage = open_storage().await?;
    let config = FetchConfig::from_env();
    tracing::debug!(reader_url = %config.reader_url, "fetch configuration loaded");
    Ok(Arc::new(BookmarkService::from_config(storage, &config)?))
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { port, host } => commands::serve::run(port, host).await?,
        Commands::Migrate => commands::migrate::run().await?,
        Commands::Add { url, user, tags } => commands::bookmarks::run_add(&user, &url, &tags).await?,
        Commands::List { user, query, tags, sort } => {
            commands::bookmarks::run_list(&user, query, &tags, sort).await?;
        },
    }

    Ok(())
}
