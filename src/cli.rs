//! Command-line interface for the graftf binary.
//!
//! The flags mirror what operators already pass to ad-hoc Grafana export
//! scripts: instance URL, API key, an optional folder allow-list, an optional
//! skip-list of Terraform resource names, and a per-request timeout.

use clap::Parser;

/// Export Grafana folders and dashboards as Terraform configuration.
#[derive(Debug, Parser)]
#[command(
    name = "graftf",
    version,
    about = "Export Grafana folders and dashboards to Terraform"
)]
pub struct Cli {
    /// Grafana instance URL (e.g. https://grafana.example.com).
    #[arg(long, value_name = "URL", env = "GRAFANA_URL")]
    pub url: String,

    /// Admin API key used as a bearer credential.
    #[arg(long = "api-key", value_name = "KEY", env = "GRAFANA_API_KEY")]
    pub api_key: String,

    /// Folder titles to include. When omitted, all folders are exported.
    #[arg(long = "folder-names", value_name = "NAME", num_args = 1..)]
    pub folder_names: Vec<String>,

    /// Comma-delimited Terraform resource names to skip
    /// (e.g. d_cardinality_management,d_cardinality_management_metrics_detail).
    #[arg(long = "skip-resources", value_name = "NAMES")]
    pub skip_resources: Option<String>,

    /// Timeout in seconds for API requests.
    #[arg(long, value_name = "SECONDS", default_value_t = 300)]
    pub timeout: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_required_flags() {
        let cli = Cli::try_parse_from([
            "graftf",
            "--url",
            "https://grafana.example.com",
            "--api-key",
            "abc123",
        ])
        .unwrap();
        assert_eq!(cli.url, "https://grafana.example.com");
        assert_eq!(cli.api_key, "abc123");
        assert!(cli.folder_names.is_empty());
        assert!(cli.skip_resources.is_none());
        assert_eq!(cli.timeout, 300);
    }

    #[test]
    fn test_parses_folder_names_multiple_values() {
        let cli = Cli::try_parse_from([
            "graftf",
            "--url",
            "https://grafana.example.com",
            "--api-key",
            "abc123",
            "--folder-names",
            "Team A",
            "Team B",
        ])
        .unwrap();
        assert_eq!(cli.folder_names, vec!["Team A", "Team B"]);
    }

    #[test]
    fn test_parses_skip_resources_and_timeout() {
        let cli = Cli::try_parse_from([
            "graftf",
            "--url",
            "https://grafana.example.com",
            "--api-key",
            "abc123",
            "--skip-resources",
            "d_abc123,d_def456",
            "--timeout",
            "30",
        ])
        .unwrap();
        assert_eq!(cli.skip_resources.as_deref(), Some("d_abc123,d_def456"));
        assert_eq!(cli.timeout, 30);
    }

    #[test]
    fn test_missing_url_is_an_error() {
        // Guard against env leakage from the surrounding shell.
        if std::env::var_os("GRAFANA_URL").is_some() {
            return;
        }
        let result = Cli::try_parse_from(["graftf", "--api-key", "abc123"]);
        assert!(result.is_err());
    }
}
