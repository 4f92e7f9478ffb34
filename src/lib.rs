//! # graftf
//!
//! graftf exports folders and dashboards from a running Grafana instance as
//! Terraform configuration, so the live state can be re-applied through the
//! `grafana/grafana` provider.
//!
//! A run is a single sequential pass: authenticate, list folders, list
//! dashboards per folder, fetch each dashboard body, normalize it, write
//! `dashboards/<uid>.json` files, and render a `grafana.tf` manifest
//! referencing them. There is no concurrency, no retry, and no state kept
//! between runs; re-running against an unchanged instance reproduces the
//! same files.
//!
//! ## Architecture
//!
//! - [`cli`] - Command-line flag definitions
//! - [`config`] - Validated run configuration built from the CLI
//! - [`error`] - Error types with API-key sanitization
//! - [`client`] - HTTP client for the Grafana API
//! - [`models`] - Data models for API responses
//! - [`normalize`] - The dashboard body normalization transform
//! - [`export`] - The export pipeline
//! - [`writer`] - JSON and manifest file output
//! - [`terraform`] - Terraform manifest rendering
//!
//! ## Usage
//!
//! ```bash
//! graftf --url https://grafana.example.com --api-key "$GRAFANA_API_KEY" \
//!     --folder-names "Team A" "Team B" \
//!     --skip-resources d_legacy_overview
//! ```
//!
//! ## Security Considerations
//!
//! The API key is stored only in memory and is:
//! - Never logged at any log level
//! - Sanitized from all error messages
//! - Present in the generated `grafana.tf` only as the provider `auth`
//!   argument, which the manifest needs to be applyable

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod export;
pub mod models;
pub mod normalize;
pub mod terraform;
pub mod writer;
