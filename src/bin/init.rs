//! folio_init - One-time database initialization tool
//!
//! Creates a fresh portfolio database, optionally importing portfolios.

use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::Parser;
use folio::portfolio::Portfolio;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Folio database initialization tool
#[derive(Parser, Debug)]
#[command(
    name = "folio_init",
    version,
    about = "Initialize a new folio database"
)]
struct Args {
    /// Path to SQLite database file to create (must not exist)
    #[arg(short, long)]
    database: PathBuf,

    /// Portfolio JSON files to import (can be specified multiple times)
    #[arg(long = "portfolio")]
    portfolios: Vec<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "folio=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Parse CLI arguments
    let args = Args::parse();

    // Load portfolio files
    let mut portfolios = Vec::with_capacity(args.portfolios.len());
    for path in &args.portfolios {
        if !path.exists() {
            bail!("Portfolio file not found: {}", path.display());
        }

        let source = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", path.display(), e))?;
        let portfolio: Portfolio = serde_json::from_str(&source)
            .map_err(|e| anyhow::anyhow!("Invalid portfolio {}: {}", path.display(), e))?;

        portfolios.push(portfolio);
    }

    // Initialize the database
    folio::init::init_database(&args.database, &portfolios).await?;

    Ok(())
}
