//! Output file writing.
//!
//! Persists normalized dashboard bodies as pretty-printed JSON under
//! `dashboards/` and writes the rendered manifest to `grafana.tf`. Existing
//! files are overwritten, so a run is idempotent.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::error::ExportError;

/// Directory (relative to the output root) holding dashboard JSON files.
pub const DASHBOARDS_DIR: &str = "dashboards";

/// Filename of the generated Terraform manifest.
pub const MANIFEST_FILE: &str = "grafana.tf";

/// Writes one normalized dashboard body to `dashboards/<uid>.json`.
///
/// Creates the directory if absent and overwrites any existing file of the
/// same name. Returns the path written, relative to `out_dir`.
///
/// # Errors
///
/// Returns `ExportError::Io` when the directory or file cannot be written,
/// or `ExportError::Serialization` if the body fails to serialize.
pub fn write_dashboard(out_dir: &Path, uid: &str, body: &Value) -> Result<PathBuf, ExportError> {
    let dir = out_dir.join(DASHBOARDS_DIR);
    fs::create_dir_all(&dir).map_err(|e| ExportError::io(dir.clone(), e))?;

    let path = dir.join(format!("{}.json", uid));
    let mut rendered = serde_json::to_string_pretty(body)?;
    rendered.push('\n');
    fs::write(&path, rendered).map_err(|e| ExportError::io(path.clone(), e))?;

    Ok(PathBuf::from(DASHBOARDS_DIR).join(format!("{}.json", uid)))
}

/// Writes the rendered Terraform manifest to `grafana.tf`.
///
/// # Errors
///
/// Returns `ExportError::Io` when the file cannot be written.
pub fn write_manifest(out_dir: &Path, manifest: &str) -> Result<(), ExportError> {
    let path = out_dir.join(MANIFEST_FILE);
    fs::write(&path, manifest).map_err(|e| ExportError::io(path, e))
}
