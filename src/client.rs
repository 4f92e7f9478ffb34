//! HTTP client for the Grafana API.
//!
//! This module provides the `GrafanaClient` struct for making authenticated
//! requests against the handful of endpoints the export needs: folder
//! listing, dashboard search, and dashboard retrieval.
//!
//! Requests are not retried; each carries the caller-configured timeout and a
//! failure surfaces immediately as an [`ExportError`].
//!
//! # Security
//!
//! The API key is never logged. All error messages are sanitized before
//! being returned.

use std::time::Duration;

use reqwest::{Client, StatusCode};

use crate::config::Config;
use crate::error::ExportError;
use crate::models::{DashboardEnvelope, DashboardHit, Folder};

/// Maximum number of search rows requested per folder. The API returns at
/// most one page; there is no pagination loop.
const SEARCH_PAGE_LIMIT: u32 = 1000;

/// Maximum length for HTTP error response bodies kept in error messages.
const MAX_ERROR_BODY_LEN: usize = 500;

/// HTTP client for the Grafana API.
///
/// Handles bearer authentication, request formatting, and response parsing
/// for all endpoints the exporter touches.
///
/// # Example
///
/// ```ignore
/// let config = Config::from_cli(cli)?;
/// let client = GrafanaClient::new(&config)?;
///
/// let folders = client.list_folders().await?;
/// ```
#[derive(Clone)]
pub struct GrafanaClient {
    /// The underlying HTTP client (cloning is cheap).
    http: Client,

    /// Base URL of the Grafana instance, without a trailing slash.
    base_url: String,

    /// API key for bearer authentication.
    /// SECURITY: Never log this value!
    api_key: String,

    /// Per-request timeout, used for error reporting.
    timeout: Duration,
}

impl GrafanaClient {
    /// Creates a new Grafana client from configuration.
    ///
    /// # Errors
    ///
    /// Returns `ExportError::HttpClient` if the HTTP client fails to
    /// initialize.
    pub fn new(config: &Config) -> Result<Self, ExportError> {
        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(ExportError::HttpClient)?;

        Ok(Self {
            http,
            base_url: config.base_url.clone(),
            api_key: config.api_key.clone(),
            timeout: config.timeout,
        })
    }

    /// Lists all top-level folders.
    pub async fn list_folders(&self) -> Result<Vec<Folder>, ExportError> {
        self.get("/api/folders", &[]).await
    }

    /// Lists the direct subfolders of a folder.
    pub async fn list_subfolders(&self, parent_uid: &str) -> Result<Vec<Folder>, ExportError> {
        self.get("/api/folders", &[("parentUid", parent_uid)]).await
    }

    /// Searches for dashboards contained in a folder.
    ///
    /// Returns one page of results; an empty list is valid (a folder with no
    /// dashboards is not an error).
    pub async fn search_dashboards(
        &self,
        folder_uid: &str,
    ) -> Result<Vec<DashboardHit>, ExportError> {
        let limit = SEARCH_PAGE_LIMIT.to_string();
        self.get(
            "/api/search",
            &[
                ("type", "dash-db"),
                ("limit", &limit),
                ("folderUIDs", folder_uid),
            ],
        )
        .await
    }

    /// Fetches the full dashboard document by uid.
    pub async fn get_dashboard(&self, uid: &str) -> Result<DashboardEnvelope, ExportError> {
        Self::validate_uid(uid)?;
        let path = format!("/api/dashboards/uid/{}", uid);
        self.get(&path, &[]).await
    }

    /// Validates that a uid is safe to interpolate into a URL path.
    ///
    /// Grafana uids are alphanumeric with `-` and `_`. This prevents path
    /// traversal via a malformed uid echoed back by the search endpoint.
    fn validate_uid(uid: &str) -> Result<(), ExportError> {
        if uid.is_empty()
            || !uid
                .bytes()
                .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_')
        {
            return Err(ExportError::validation(format!(
                "uid must be alphanumeric with '-' or '_', got: {:?}",
                uid.chars().take(50).collect::<String>()
            )));
        }
        Ok(())
    }

    /// Makes an authenticated GET request and parses the JSON response.
    ///
    /// # Arguments
    ///
    /// * `path` - API endpoint path (e.g. "/api/folders")
    /// * `query` - Query parameters, encoded by reqwest
    ///
    /// # Type Parameters
    ///
    /// * `T` - The expected response data type
    async fn get<T>(&self, path: &str, query: &[(&str, &str)]) -> Result<T, ExportError>
    where
        T: serde::de::DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, path);

        tracing::debug!(path = %path, "Making Grafana API request");

        let mut req = self
            .http
            .get(&url)
            .header("Authorization", format!("Bearer {}", self.api_key));

        if !query.is_empty() {
            req = req.query(query);
        }

        let response = req.send().await.map_err(|e| {
            if e.is_timeout() {
                return ExportError::timeout(self.timeout, format!("GET {}", path));
            }
            ExportError::Http(e)
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(self.handle_http_error(status, path, response).await);
        }

        let body = response.text().await.map_err(ExportError::Http)?;

        tracing::trace!(body = %body, "Grafana API response");

        serde_json::from_str(&body).map_err(ExportError::Serialization)
    }

    /// Handles HTTP-level errors and converts them to `ExportError`.
    async fn handle_http_error(
        &self,
        status: StatusCode,
        path: &str,
        response: reqwest::Response,
    ) -> ExportError {
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return ExportError::Authentication { status };
        }

        let body = response.text().await.unwrap_or_default();
        // Sanitize the body to ensure no API key leakage
        let body = ExportError::sanitize_message(&body, &self.api_key);
        // Truncate to avoid carrying verbose Grafana internals around.
        // The cut must land on a char boundary; byte 500 may fall inside a
        // multi-byte UTF-8 character.
        let body = if body.len() > MAX_ERROR_BODY_LEN {
            let mut end = MAX_ERROR_BODY_LEN;
            while !body.is_char_boundary(end) {
                end -= 1;
            }
            format!("{}...[truncated]", &body[..end])
        } else {
            body
        };

        ExportError::HttpStatus {
            status,
            endpoint: path.to_string(),
            body,
        }
    }
}
