//! Dashboard normalization.
//!
//! Dashboard bodies fetched from a live instance carry environment-specific
//! fields that conflict on re-import: the numeric `id`, the `version`
//! counter, and the `gnetId` import marker. This module strips them and
//! forces `editable` so the exported dashboards can be applied anywhere.

use serde_json::Value;

/// Fields removed from every exported dashboard body.
const STRIPPED_FIELDS: [&str; 3] = ["version", "id", "gnetId"];

/// Returns a normalized copy of a dashboard body.
///
/// Removes `version`, `id`, and `gnetId` if present (absence is not an
/// error) and sets `editable` to `true` unconditionally. The input is not
/// modified. A non-object input is returned as-is; dashboard bodies are
/// always JSON objects in practice, but the transform stays total.
#[must_use]
pub fn normalize_dashboard(body: &Value) -> Value {
    let mut normalized = body.clone();

    if let Some(map) = normalized.as_object_mut() {
        for field in STRIPPED_FIELDS {
            map.remove(field);
        }
        map.insert("editable".to_string(), Value::Bool(true));
    }

    normalized
}
