//! Terraform manifest generation.
//!
//! Renders `grafana.tf` from already-materialized folder and dashboard
//! lists: one provider block, one `grafana_folder` resource per folder, one
//! `grafana_dashboard` resource per dashboard. Pure string generation, no
//! I/O, so it can be tested without touching the network or the filesystem.
//!
//! Ordering in the output follows enumeration order: folders first, then
//! dashboards.

use crate::models::{ExportedDashboard, Folder};

/// Derives the Terraform resource name for a folder from its uid.
///
/// Terraform identifiers cannot contain `-`, which Grafana uids routinely
/// do.
#[must_use]
pub fn folder_resource_name(uid: &str) -> String {
    uid.replace('-', "_")
}

/// Derives the Terraform resource name for a dashboard from its uid.
///
/// Uids are unique within an instance, so the derived names are too. The
/// uid is used verbatim; this is the name matched against
/// `--skip-resources`.
#[must_use]
pub fn dashboard_resource_name(uid: &str) -> String {
    format!("d_{}", uid)
}

/// Escapes a string for use inside an HCL double-quoted literal.
fn hcl_escape(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Renders the complete `grafana.tf` document.
///
/// The provider block is parameterized by the instance URL and API key so
/// the generated configuration is applyable standalone. Folder resources
/// come first (nested folders reference their parent via
/// `parent_folder_uid` and `depends_on`), then dashboard resources, each
/// referencing its folder resource and the JSON file written for it.
#[must_use]
pub fn render_manifest(
    base_url: &str,
    api_key: &str,
    folders: &[Folder],
    dashboards: &[ExportedDashboard],
) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        r#"terraform {{
  required_providers {{
    grafana = {{
      source = "grafana/grafana"
    }}
  }}
}}

provider "grafana" {{
  url  = "{}"
  auth = "{}"
}}

"#,
        hcl_escape(base_url),
        hcl_escape(api_key)
    ));

    for folder in folders {
        let name = folder_resource_name(&folder.uid);
        out.push_str(&format!(
            "resource \"grafana_folder\" \"{}\" {{\n  title = \"{}\"\n  uid   = \"{}\"\n",
            name,
            hcl_escape(&folder.title),
            hcl_escape(&folder.uid)
        ));

        if let Some(parent_uid) = &folder.parent_uid {
            let parent_name = folder_resource_name(parent_uid);
            out.push_str(&format!(
                "  parent_folder_uid = \"{}\"\n  depends_on = [grafana_folder.{}]\n",
                hcl_escape(parent_uid),
                parent_name
            ));
        }

        out.push_str("}\n\n");
    }

    for dashboard in dashboards {
        let name = dashboard_resource_name(&dashboard.uid);
        let folder_name = folder_resource_name(&dashboard.folder_uid);
        out.push_str(&format!(
            r#"resource "grafana_dashboard" "{name}" {{
  folder = grafana_folder.{folder_name}.uid
  config_json = jsonencode(jsondecode(file("dashboards/{uid}.json")))
  overwrite = true
  depends_on = [grafana_folder.{folder_name}]
}}

"#,
            name = name,
            folder_name = folder_name,
            uid = dashboard.uid
        ));
    }

    out
}
