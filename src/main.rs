//! Playlet Finder - hot ranking to share-link matcher

use anyhow::{Context, Result};
use clap::Parser;
use playlet_finder::config::Config;
use playlet_finder::pipeline;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// JSON config file (defaults to the per-user config if present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Ranking API endpoint
    #[arg(long)]
    base_url: Option<String>,

    /// Ranking page number
    #[arg(long, alias = "pageId")]
    page_id: Option<u32>,

    /// Ranking page size
    #[arg(long, alias = "pageSize")]
    page_size: Option<u32>,

    /// Ranking month, YYYY-MM
    #[arg(long)]
    month: Option<String>,

    /// CSV dataset of labels and share links
    #[arg(short, long)]
    dataset: Option<PathBuf>,

    /// Where to write the JSON report
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Host substring a share link must contain
    #[arg(long)]
    link_domain: Option<String>,

    /// Request timeout in seconds
    #[arg(long)]
    timeout: Option<u64>,

    /// Retries after a failed ranking request
    #[arg(long)]
    retries: Option<usize>,

    /// Write the effective config to this file and exit
    #[arg(long, value_name = "PATH")]
    save_config: Option<PathBuf>,
}

impl Args {
    fn apply(self, mut config: Config) -> Config {
        if let Some(v) = self.base_url {
            config.base_url = v;
        }
        if let Some(v) = self.page_id {
            config.page_id = v;
        }
        if let Some(v) = self.page_size {
            config.page_size = v;
        }
        if let Some(v) = self.month {
            config.month = v;
        }
        if let Some(v) = self.dataset {
            config.dataset_path = v;
        }
        if let Some(v) = self.output {
            config.output_path = v;
        }
        if let Some(v) = self.link_domain {
            config.link_domain = v;
        }
        if let Some(v) = self.timeout {
            config.request_timeout_secs = v;
        }
        if let Some(v) = self.retries {
            config.max_retries = v;
        }
        config
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Setup logging
    let default_level = if args.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    info!("🎬 Playlet Finder v{} starting...", env!("CARGO_PKG_VERSION"));

    let base = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::load_or_default()?,
    };
    let save_to = args.save_config.clone();
    let config = args.apply(base);

    if let Some(path) = save_to {
        config.validate()?;
        config.save(&path)?;
        info!("💾 Config saved to {}", path.display());
        return Ok(());
    }

    info!(
        "Using page {} (size {}) for {}",
        config.page_id, config.page_size, config.month
    );

    pipeline::run(&config).await.context("Run failed")?;

    Ok(())
}
