//! Command-line interface for playdash.
//!
//! Provides commands for building the dashboard for an account and for
//! inspecting the resolved configuration.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::adapters::steam::fingerprint_key;
use crate::adapters::{HltbClient, SteamClient};
use crate::config::{self, ResolvedConfig};
use crate::core::{Pipeline, PipelineEvent};
use crate::domain::{AccountHandle, Dataset};
use crate::error::DashboardError;
use crate::render::{export_csv, render_chart, render_table, ProgressBar};

/// playdash - Steam library dashboard with HowLongToBeat estimates
#[derive(Parser, Debug)]
#[command(name = "playdash")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build the dashboard for a Steam vanity handle
    Dashboard {
        /// Vanity handle (the <name> in steamcommunity.com/id/<name>/)
        handle: String,

        /// Steam Web API key
        #[arg(long, env = "STEAM_API_KEY", hide_env_values = true)]
        api_key: Option<String>,

        /// Export the dataset as CSV (to the configured file name if no path given)
        #[arg(short, long)]
        export: Option<Option<PathBuf>>,

        /// Number of games in the chart (defaults to the configured value)
        #[arg(short, long)]
        top: Option<usize>,

        /// Skip the bar chart
        #[arg(long)]
        no_chart: bool,
    },

    /// Show resolved configuration (debug)
    Config {
        /// Steam Web API key
        #[arg(long, env = "STEAM_API_KEY", hide_env_values = true)]
        api_key: Option<String>,
    },
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(self) -> Result<()> {
        match self.command {
            Commands::Dashboard {
                handle,
                api_key,
                export,
                top,
                no_chart,
            } => run_dashboard(&handle, api_key, export, top, no_chart).await,
            Commands::Config { api_key } => show_config(api_key.as_deref()),
        }
    }
}

/// Build the pipeline against the live services
fn build_pipeline(cfg: &ResolvedConfig, api_key: String) -> Result<Pipeline> {
    let timeout = Some(cfg.http_timeout);
    let directory = SteamClient::with_base(cfg.steam_api_base.clone(), api_key, timeout)?;
    let source = HltbClient::with_base(cfg.hltb_base.clone(), timeout)?;

    Ok(Pipeline::new(
        Box::new(directory),
        Box::new(source),
        cfg.pipeline_options(),
    ))
}

/// Resolve, fetch, enrich and present
async fn run_dashboard(
    handle: &str,
    api_key: Option<String>,
    export: Option<Option<PathBuf>>,
    top: Option<usize>,
    no_chart: bool,
) -> Result<()> {
    let cfg = config::config()?;

    let api_key = api_key
        .filter(|k| !k.trim().is_empty())
        .ok_or(DashboardError::MissingCredential)?;
    let handle = AccountHandle::new(handle)?;

    let mut pipeline = build_pipeline(cfg, api_key)?;
    let mut bar = ProgressBar::stderr();
    let mut drew_progress = false;

    eprintln!("Resolving SteamID64 for {}...", handle);
    let result = pipeline
        .run(&handle, |event| match event {
            PipelineEvent::Resolved { account_id } => {
                eprintln!("Your SteamID64: {}", account_id);
            }
            PipelineEvent::Fetched { count } => {
                eprintln!("Found {} games in your library.", count);
            }
            PipelineEvent::Progress(progress) => {
                bar.update(progress);
                drew_progress = true;
            }
        })
        .await;

    if drew_progress {
        bar.finish();
    }

    let dataset = match result {
        Ok(dataset) => dataset,
        Err(DashboardError::Resolution { profile_url, .. }) => {
            eprintln!("\nCould not resolve vanity URL: {}", profile_url);
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("\n{}", e);
            std::process::exit(1);
        }
    };

    present(cfg, &dataset, export, top, no_chart)
}

/// Print the table and chart, and export when asked
fn present(
    cfg: &ResolvedConfig,
    dataset: &Dataset,
    export: Option<Option<PathBuf>>,
    top: Option<usize>,
    no_chart: bool,
) -> Result<()> {
    println!("{}", render_table(dataset));

    if !no_chart {
        let top_n = top.unwrap_or(cfg.chart.top_n);
        println!("{}", render_chart(dataset, top_n, cfg.chart.width));
    }

    if let Some(path) = export {
        let path = path.unwrap_or_else(|| PathBuf::from(&cfg.export_file));
        export_csv(dataset, &path)?;
        eprintln!("Exported {} rows to {}", dataset.len(), path.display());
    }

    Ok(())
}

/// Show the resolved configuration (for debugging)
fn show_config(api_key: Option<&str>) -> Result<()> {
    let cfg = config::config()?;

    println!("playdash configuration");
    println!();
    println!(
        "Config file: {}",
        cfg.config_file
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "(none - using defaults)".to_string())
    );
    println!();
    println!("Services:");
    println!("  Steam API:     {}", cfg.steam_api_base);
    println!("  HowLongToBeat: {}", cfg.hltb_base);
    println!("  Timeout:       {}s", cfg.http_timeout.as_secs());
    match api_key.filter(|k| !k.trim().is_empty()) {
        Some(key) => println!("  API key:       set (fingerprint {})", fingerprint_key(key)),
        None => println!("  API key:       (not set)"),
    }
    println!();
    println!("Caches:");
    println!("  Libraries:     {} entries", cfg.cache.library_capacity);
    println!("  Titles:        {} entries", cfg.cache.title_capacity);
    match cfg.cache.ttl_seconds {
        Some(ttl) => println!("  TTL:           {}s", ttl),
        None => println!("  TTL:           (none)"),
    }
    println!();
    println!("Retry:");
    println!("  Max attempts:  {}", cfg.retry.max_attempts);
    println!("  Initial delay: {}ms", cfg.retry.initial_delay_ms);
    println!();
    println!("Output:");
    println!("  Chart rows:    {}", cfg.chart.top_n);
    println!("  Export file:   {}", cfg.export_file);

    Ok(())
}
