//! Configuration for an export run.
//!
//! This module turns parsed command-line arguments into a validated
//! [`Config`] value, with all checks performed before any network call.

use std::collections::HashSet;
use std::path::PathBuf;
use std::time::Duration;

use url::Url;

use crate::cli::Cli;
use crate::error::ExportError;

/// Configuration for connecting to Grafana and shaping the export.
///
/// All validation happens in [`Config::from_cli`]; the rest of the program
/// treats these values as trusted. The API key is stored but never logged.
#[derive(Clone)]
pub struct Config {
    /// Base URL for the Grafana instance, without a trailing slash.
    pub base_url: String,

    /// Admin API key used for bearer authentication.
    /// This value must never be logged or included in error messages.
    pub api_key: String,

    /// Folder titles to include; `None` means export every folder.
    pub folder_names: Option<Vec<String>>,

    /// Terraform resource names excluded from both file output and manifest.
    pub skip_resources: HashSet<String>,

    /// Per-request timeout.
    pub timeout: Duration,

    /// Root directory for `grafana.tf` and `dashboards/`. Defaults to the
    /// working directory; overridable for tests.
    pub out_dir: PathBuf,
}

impl Config {
    /// Builds a validated configuration from parsed command-line arguments.
    ///
    /// # Errors
    ///
    /// Returns `ExportError::Config` if the URL does not parse or uses a
    /// non-HTTP scheme, or if the API key is empty or a placeholder.
    pub fn from_cli(cli: Cli) -> Result<Self, ExportError> {
        let base_url = Self::validate_base_url(cli.url)?;
        Self::validate_api_key(&cli.api_key)?;

        let folder_names = if cli.folder_names.is_empty() {
            None
        } else {
            Some(cli.folder_names)
        };

        Ok(Config {
            base_url,
            api_key: cli.api_key,
            folder_names,
            skip_resources: parse_skip_resources(cli.skip_resources.as_deref()),
            timeout: Duration::from_secs(cli.timeout),
            out_dir: PathBuf::from("."),
        })
    }

    /// Validates and normalizes the base URL.
    fn validate_base_url(url: String) -> Result<String, ExportError> {
        let url = url.trim().trim_end_matches('/').to_string();

        let parsed = Url::parse(&url)
            .map_err(|e| ExportError::invalid_config(format!("--url is not a valid URL: {}", e)))?;

        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            return Err(ExportError::invalid_config(
                "--url must start with http:// or https://",
            ));
        }

        Ok(url)
    }

    /// Validates the API key is not empty or a placeholder value.
    fn validate_api_key(key: &str) -> Result<(), ExportError> {
        if key.trim().is_empty() {
            return Err(ExportError::invalid_config("--api-key must not be empty"));
        }

        let key_lower = key.to_lowercase();
        let placeholder_patterns = [
            "your_api_key",
            "your_key",
            "placeholder",
            "xxx",
            "changeme",
        ];

        for pattern in placeholder_patterns {
            if key_lower.contains(pattern) {
                return Err(ExportError::invalid_config(
                    "--api-key appears to be a placeholder value",
                ));
            }
        }

        Ok(())
    }
}

/// Parses the comma-delimited `--skip-resources` value into a set.
///
/// Entries are trimmed and empty entries dropped, so `"a, b,,c"` yields
/// `{a, b, c}`.
fn parse_skip_resources(raw: Option<&str>) -> HashSet<String> {
    raw.map(|s| {
        s.split(',')
            .map(str::trim)
            .filter(|entry| !entry.is_empty())
            .map(str::to_string)
            .collect()
    })
    .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli(url: &str, api_key: &str) -> Cli {
        use clap::Parser;
        Cli::try_parse_from(["graftf", "--url", url, "--api-key", api_key]).unwrap()
    }

    #[test]
    fn test_validate_base_url_removes_trailing_slash() {
        let result = Config::validate_base_url("https://grafana.example.com/".to_string()).unwrap();
        assert_eq!(result, "https://grafana.example.com");
    }

    #[test]
    fn test_validate_base_url_requires_scheme() {
        let result = Config::validate_base_url("grafana.example.com".to_string());
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_base_url_rejects_non_http_scheme() {
        let result = Config::validate_base_url("ftp://grafana.example.com".to_string());
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_api_key_rejects_placeholder() {
        let result = Config::validate_api_key("your_api_key_here");
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_api_key_rejects_empty() {
        let result = Config::validate_api_key("   ");
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_api_key_accepts_real_key() {
        let result = Config::validate_api_key("abc123def456");
        assert!(result.is_ok());
    }

    #[test]
    fn test_parse_skip_resources_trims_and_drops_empty() {
        let skip = parse_skip_resources(Some("d_abc123, d_def456,,d_ghi789 "));
        assert_eq!(skip.len(), 3);
        assert!(skip.contains("d_abc123"));
        assert!(skip.contains("d_def456"));
        assert!(skip.contains("d_ghi789"));
    }

    #[test]
    fn test_parse_skip_resources_none() {
        assert!(parse_skip_resources(None).is_empty());
    }

    #[test]
    fn test_from_cli_defaults() {
        let config = Config::from_cli(cli("https://grafana.example.com/", "abc123")).unwrap();
        assert_eq!(config.base_url, "https://grafana.example.com");
        assert!(config.folder_names.is_none());
        assert!(config.skip_resources.is_empty());
        assert_eq!(config.timeout, Duration::from_secs(300));
        assert_eq!(config.out_dir, PathBuf::from("."));
    }
}
