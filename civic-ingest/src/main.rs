//! civic-ingest - fills the civic tracker database
//!
//! - `setup`: create the schema and insert the ZIP 11354 sample rows
//! - `scrape`: clear all rows and rebuild them from the House lookup site,
//!   using Gemini to read representative names off each page

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use civic_common::build_info::startup_banner;
use civic_common::config::{load_config, resolve_database_path};
use civic_common::db::{init_database, seed_sample_data, table_counts};
use civic_ingest::config::{load_dotenv, resolve_gemini_api_key};
use civic_ingest::services::{GeminiClient, HttpPageFetcher};
use civic_ingest::{IngestPipeline, PipelineSettings, ZipStatus};

/// Command-line arguments for civic-ingest
#[derive(Parser, Debug)]
#[command(name = "civic-ingest")]
#[command(about = "Populate the civic tracker database")]
#[command(version)]
struct Cli {
    /// SQLite database file
    #[arg(short, long, global = true)]
    database: Option<PathBuf>,

    /// TOML config file
    #[arg(short, long, global = true, env = "CIVIC_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Create the schema and insert sample data for ZIP 11354
    Setup,

    /// Delete all rows and scrape every configured ZIP code
    Scrape {
        /// ZIP code to scrape (repeatable; replaces the configured list)
        #[arg(long = "zip", value_name = "ZIP")]
        zips: Vec<String>,

        /// Delay between page fetches in milliseconds
        #[arg(long)]
        delay_ms: Option<u64>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Before argument parsing so env-backed options see .env values
    let dotenv = load_dotenv();

    let cli = Cli::parse();
    let (config, config_source) =
        load_config(cli.config.as_deref()).context("Failed to load configuration")?;

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.logging.level)),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    dotenv.log();
    config_source.log();

    info!("{}", startup_banner("civic-ingest", env!("CARGO_PKG_VERSION")));

    let db_path = resolve_database_path(cli.database.as_deref(), &config);
    info!("Database: {}", db_path.display());

    let pool = init_database(&db_path)
        .await
        .with_context(|| format!("Failed to open database {}", db_path.display()))?;

    match cli.command {
        Command::Setup => {
            if seed_sample_data(&pool).await? {
                info!("Database setup complete. Tables created and sample data inserted");
            } else {
                info!("Database setup complete. Sample data was already present");
            }
        }
        Command::Scrape { zips, delay_ms } => {
            let api_key = resolve_gemini_api_key(&config.ingest)?;
            let extractor = GeminiClient::new(api_key, config.ingest.gemini_model.clone())?;
            info!("Using Gemini model {}", extractor.model());
            let fetcher = HttpPageFetcher::new()?;

            let mut settings = PipelineSettings::from(&config.ingest);
            if !zips.is_empty() {
                settings.zip_codes = zips;
            }
            if let Some(ms) = delay_ms {
                settings.request_delay = Duration::from_millis(ms);
            }

            let pipeline =
                IngestPipeline::new(pool.clone(), Arc::new(fetcher), Arc::new(extractor), settings);
            let report = pipeline.run().await.context("Scrape run failed")?;

            for outcome in &report.outcomes {
                match &outcome.status {
                    ZipStatus::Stored { representatives } => {
                        info!("{}: {}", outcome.zip_code, representatives.join(", "))
                    }
                    ZipStatus::NoContent => info!("{}: page could not be fetched", outcome.zip_code),
                    ZipStatus::NoNames => info!("{}: no representatives found", outcome.zip_code),
                    ZipStatus::DatabaseError(e) => info!("{}: not stored ({})", outcome.zip_code, e),
                }
            }
        }
    }

    let counts = table_counts(&pool).await?;
    info!(
        geography = counts.geography,
        representatives = counts.representatives,
        links = counts.links,
        "Database row counts"
    );

    pool.close().await;
    Ok(())
}
