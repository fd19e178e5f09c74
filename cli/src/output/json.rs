//! JSON output helpers for `--json` code paths.

use anyhow::{Context, Result};

use crate::domain::Inventory;

/// Format the inventory as a pretty-printed JSON array of
/// `{"name", "zone", "status"?}` objects.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn format_inventory(inventory: &Inventory) -> Result<String> {
    serde_json::to_string_pretty(inventory).context("JSON serialization failed")
}

/// Format `{"version": "..."}`.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn format_version(version: &str) -> Result<String> {
    let obj = serde_json::json!({ "version": version });
    serde_json::to_string_pretty(&obj).context("JSON serialization failed")
}

/// Format a JSON error object.
///
/// Output (pretty-printed):
/// ```json
/// {
///   "error": true,
///   "message": "...",
///   "code": "..."
/// }
/// ```
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn format_error(message: &str, code: &str) -> Result<String> {
    let obj = serde_json::json!({
        "error": true,
        "message": message,
        "code": code,
    });
    serde_json::to_string_pretty(&obj).context("JSON serialization failed")
}
