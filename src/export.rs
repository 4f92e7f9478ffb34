//! The export pipeline.
//!
//! A single pass: enumerate folders, enumerate dashboards per folder, fetch
//! and normalize each dashboard body, write files, render the manifest.
//! Everything runs strictly sequentially; the only state carried between
//! steps is the accumulated folder and dashboard lists the manifest is
//! rendered from.
//!
//! Failure policy follows two tiers: folder and dashboard *listing* failures
//! abort the run (a partial list would silently produce an incomplete
//! manifest), while a fetch failure for one dashboard body is logged with
//! identifying context and that dashboard is omitted, with the run
//! continuing.

use std::collections::{HashSet, VecDeque};

use crate::client::GrafanaClient;
use crate::config::Config;
use crate::error::ExportError;
use crate::models::{ExportedDashboard, Folder};
use crate::normalize::normalize_dashboard;
use crate::terraform::{dashboard_resource_name, render_manifest};
use crate::writer::{write_dashboard, write_manifest};

/// Folder title that is never exported, regardless of `--folder-names`.
/// Grafana Cloud instances ship this managed folder and re-importing it
/// conflicts with the platform's own provisioning.
const EXCLUDED_FOLDER_TITLE: &str = "GrafanaCloud";

/// Counts reported after a successful run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportSummary {
    /// Folders emitted to the manifest.
    pub folders: usize,

    /// Dashboards written and emitted to the manifest.
    pub dashboards: usize,

    /// Dashboards excluded by `--skip-resources`.
    pub skipped: usize,
}

/// Runs the full export against a live instance.
///
/// # Errors
///
/// Fatal errors (authentication, folder/dashboard listing failures, output
/// I/O) abort the run. Per-dashboard fetch failures are logged and skipped.
pub async fn run(config: &Config) -> Result<ExportSummary, ExportError> {
    let client = GrafanaClient::new(config)?;

    let folders = select_folders(&client, config).await?;
    tracing::info!(count = folders.len(), "Found folders");

    let dashboards = collect_dashboards(&client, &folders).await?;
    tracing::info!(count = dashboards.len(), "Found dashboards in target folders");

    // Apply the skip-set: a skipped dashboard gets neither a file nor a
    // manifest block.
    let mut surviving = Vec::with_capacity(dashboards.len());
    let mut skipped = 0usize;
    for dashboard in dashboards {
        let resource_name = dashboard_resource_name(&dashboard.uid);
        if config.skip_resources.contains(&resource_name) {
            tracing::info!(resource = %resource_name, title = %dashboard.title, "Skipping dashboard resource");
            skipped += 1;
            continue;
        }
        surviving.push(dashboard);
    }

    for dashboard in &surviving {
        let path = write_dashboard(&config.out_dir, &dashboard.uid, &dashboard.body)?;
        tracing::debug!(path = %path.display(), "Wrote dashboard");
    }

    let manifest = render_manifest(&config.base_url, &config.api_key, &folders, &surviving);
    write_manifest(&config.out_dir, &manifest)?;

    Ok(ExportSummary {
        folders: folders.len(),
        dashboards: surviving.len(),
        skipped,
    })
}

/// Enumerates the folders to export.
///
/// Fetches all top-level folders, applies the `--folder-names` allow-list
/// (warning for each requested title that was not found), and walks into
/// subfolders so nested hierarchies are exported too. The `GrafanaCloud`
/// folder is always dropped, wherever it appears. Order is preserved as the
/// API returned it, parents before their children.
///
/// # Errors
///
/// Any listing failure is fatal: a partial folder list would produce an
/// incomplete manifest without any signal to the operator.
pub async fn select_folders(
    client: &GrafanaClient,
    config: &Config,
) -> Result<Vec<Folder>, ExportError> {
    let top_level = client.list_folders().await?;

    if top_level.is_empty() {
        tracing::warn!("No folders found in the Grafana instance");
        return Ok(Vec::new());
    }

    let seeds: Vec<Folder> = match &config.folder_names {
        None => {
            tracing::info!("No folder names specified, processing all folders");
            top_level
        }
        Some(names) => {
            let mut selected = Vec::new();
            for name in names {
                match top_level.iter().find(|f| &f.title == name) {
                    Some(folder) => selected.push(folder.clone()),
                    None => tracing::warn!(folder = %name, "Requested folder not found"),
                }
            }
            selected
        }
    };

    let mut result = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();
    let mut queue: VecDeque<Folder> = seeds.into();

    while let Some(folder) = queue.pop_front() {
        if !seen.insert(folder.uid.clone()) {
            continue;
        }
        if folder.title == EXCLUDED_FOLDER_TITLE {
            tracing::info!(uid = %folder.uid, "Skipping GrafanaCloud folder");
            continue;
        }

        let subfolders = client.list_subfolders(&folder.uid).await?;
        result.push(folder);
        queue.extend(subfolders);
    }

    Ok(result)
}

/// Enumerates, fetches, and normalizes the dashboards in the given folders.
///
/// Listing failures abort the run; a fetch failure for one dashboard body is
/// logged with its uid and title and the dashboard is omitted.
pub async fn collect_dashboards(
    client: &GrafanaClient,
    folders: &[Folder],
) -> Result<Vec<ExportedDashboard>, ExportError> {
    let mut dashboards = Vec::new();

    for folder in folders {
        let hits = client.search_dashboards(&folder.uid).await?;
        tracing::debug!(folder = %folder.title, count = hits.len(), "Listed dashboards");

        for hit in hits {
            match client.get_dashboard(&hit.uid).await {
                Ok(envelope) => {
                    dashboards.push(ExportedDashboard {
                        uid: hit.uid,
                        title: hit.title,
                        folder_uid: folder.uid.clone(),
                        body: normalize_dashboard(&envelope.dashboard),
                    });
                }
                Err(e) => {
                    tracing::warn!(
                        uid = %hit.uid,
                        title = %hit.title,
                        error = %e,
                        "Failed to fetch dashboard, omitting it from the export"
                    );
                }
            }
        }
    }

    Ok(dashboards)
}
