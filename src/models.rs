//! Data models for the Grafana HTTP API.
//!
//! Only the fields the exporter consumes are modeled; everything else in the
//! API responses is ignored. Dashboard bodies stay as opaque
//! [`serde_json::Value`] documents because Terraform re-serializes them
//! verbatim.

use serde::Deserialize;

/// A Grafana folder as returned by `/api/folders` and `/api/folders/{uid}`.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Folder {
    /// Stable unique identifier.
    pub uid: String,

    /// Human-readable folder title.
    pub title: String,

    /// Parent folder uid, present for nested folders.
    #[serde(rename = "parentUid", default)]
    pub parent_uid: Option<String>,
}

/// One row from the `/api/search?type=dash-db` endpoint.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct DashboardHit {
    /// Stable unique identifier of the dashboard.
    pub uid: String,

    /// Dashboard title as shown in the Grafana UI.
    pub title: String,

    /// Uid of the folder containing the dashboard, absent for the
    /// General folder.
    #[serde(rename = "folderUid", default)]
    pub folder_uid: Option<String>,
}

/// Response envelope of `/api/dashboards/uid/{uid}`.
///
/// The `meta` sibling object is intentionally not modeled; the exporter only
/// needs the dashboard body.
#[derive(Debug, Clone, Deserialize)]
pub struct DashboardEnvelope {
    /// The full dashboard JSON document.
    pub dashboard: serde_json::Value,
}

/// A dashboard selected for export: its search row plus the normalized body.
#[derive(Debug, Clone)]
pub struct ExportedDashboard {
    /// Stable unique identifier of the dashboard.
    pub uid: String,

    /// Dashboard title, used in log messages.
    pub title: String,

    /// Uid of the folder the dashboard belongs to.
    pub folder_uid: String,

    /// Normalized dashboard body, ready for serialization.
    pub body: serde_json::Value,
}
