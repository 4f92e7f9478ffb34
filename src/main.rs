//! graftf - export Grafana folders and dashboards to Terraform.
//!
//! Fetches folder and dashboard definitions from a Grafana instance and
//! writes `grafana.tf` plus `dashboards/<uid>.json` files to the working
//! directory.
//!
//! # Usage
//!
//! ```bash
//! graftf --url https://grafana.example.com --api-key xxx
//!
//! # Restrict to specific folders, skip individual dashboard resources
//! graftf --url https://grafana.example.com --api-key xxx \
//!     --folder-names "Team A" --skip-resources d_abc123
//! ```
//!
//! `--url` and `--api-key` also read from the `GRAFANA_URL` and
//! `GRAFANA_API_KEY` environment variables (or a `.env` file).

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use graftf::{cli::Cli, config::Config, export};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (ignore errors if not found)
    dotenvy::dotenv().ok();

    // Logging goes to stderr so output redirection stays clean
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("graftf=info")),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    let cli = Cli::parse();

    tracing::info!("Starting graftf v{}", env!("CARGO_PKG_VERSION"));

    let config = Config::from_cli(cli).context("Failed to load configuration")?;

    tracing::debug!("Configuration loaded, base_url: {}", config.base_url);

    let summary = export::run(&config)
        .await
        .context("Export failed")?;

    tracing::info!(
        folders = summary.folders,
        dashboards = summary.dashboards,
        skipped = summary.skipped,
        "Generated Terraform config"
    );
    tracing::info!("Dashboard JSON files are stored in the 'dashboards' directory");

    Ok(())
}
