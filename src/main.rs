use crate::config::resolve_config;
use crate::pipeline::RunReport;
use crate::sources::{collect_listings, CuratedSource, JsonFileSource, ListingSource};
use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::PathBuf;

mod config;
mod domain;
mod errors;
mod geos;
mod pipeline;
mod sources;


#[derive(Parser)]
#[command(
    name = "fsbo-leads",
    about = "Rank for-sale-by-owner business listings as sales leads"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Normalize, filter and score listings, then print the ranked leads as JSON
    Run {
        /// Config file (falls back to ./config.json, /app/config.json, then built-in defaults)
        #[arg(short, long, env = "FSBO_CONFIG")]
        config: Option<PathBuf>,
        /// JSON file with an array of raw listings; repeatable
        #[arg(short, long)]
        input: Vec<PathBuf>,
        /// Include the curated listings (always on when no --input is given)
        #[arg(long)]
        curated: bool,
        /// Override scraper_settings.max_leads_per_run
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },
    /// Show, listing by listing, the filter verdict and how each score was built
    Explain {
        #[arg(short, long, env = "FSBO_CONFIG")]
        config: Option<PathBuf>,
        #[arg(short, long)]
        input: Vec<PathBuf>,
        #[arg(long)]
        curated: bool,
    },
    /// Print the effective configuration as JSON
    Config {
        #[arg(short, long, env = "FSBO_CONFIG")]
        config: Option<PathBuf>,
    },
}

/// What `run` prints: the report plus the success flag callers key on.
#[derive(Serialize)]
struct RunResponse<'a> {
    success: bool,
    #[serde(flatten)]
    report: &'a RunReport,
}

/// JSON files from `--input`, plus the curated listings when asked for or
/// when there is nothing else to read.
fn build_sources(input: Vec<PathBuf>, curated: bool) -> Vec<Box<dyn ListingSource>> {
    let mut sources: Vec<Box<dyn ListingSource>> = input
        .into_iter()
        .map(|path| Box::new(JsonFileSource::new(path)) as Box<dyn ListingSource>)
        .collect();
    if curated || sources.is_empty() {
        sources.push(Box::new(CuratedSource::new()));
    }
    sources
}

fn main() -> Result<()> {
    // stdout carries the JSON result, so logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            config,
            input,
            curated,
            limit,
        } => {
            let mut config = resolve_config(config.as_deref());
            if let Some(limit) = limit {
                if limit == 0 {
                    bail!("--limit must be at least 1");
                }
                config.scraper_settings.max_leads_per_run = limit;
            }

            let listings = collect_listings(&build_sources(input, curated));
            let report = pipeline::run(&listings, &config);

            let body = serde_json::to_string_pretty(&RunResponse {
                success: true,
                report: &report,
            })
            .context("failed to serialize leads")?;
            println!("{body}");
        }
        Commands::Explain {
            config,
            input,
            curated,
        } => {
            let config = resolve_config(config.as_deref());
            let listings = collect_listings(&build_sources(input, curated));
            let explanations = pipeline::explain(&listings, &config);

            let body = serde_json::to_string_pretty(&explanations)
                .context("failed to serialize explanations")?;
            println!("{body}");
        }
        Commands::Config { config } => {
            let config = resolve_config(config.as_deref());
            let body =
                serde_json::to_string_pretty(&config).context("failed to serialize config")?;
            println!("{body}");
        }
    }

    Ok(())
}
