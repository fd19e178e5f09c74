//! Domain types and validators for gcp-rider configuration.
//!
//! Pure functions only: no I/O, no async, no filesystem access.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::domain::error::ConfigError;

// ── Constants ────────────────────────────────────────────────────────────────

pub const DEFAULT_ENDPOINT: &str = "https://compute.googleapis.com";
/// Compute Engine caps `maxResults` at 500.
pub const MAX_PAGE_SIZE: u32 = 500;
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_GCLOUD: &str = "gcloud";

// ── Config schema ────────────────────────────────────────────────────────────

/// Top-level configuration stored in `~/.gcp-rider/config.yaml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct RiderConfig {
    /// Default project when neither `--project` nor `GCP_PROJECT_ID` is set.
    pub project: Option<String>,
    pub api: ApiConfig,
    pub ssh: SshConfig,
}

/// Compute API settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ApiConfig {
    pub endpoint: String,
    pub page_size: u32,
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            page_size: MAX_PAGE_SIZE,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

/// Session launch settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SshConfig {
    /// Path or name of the `gcloud` binary.
    pub gcloud_path: String,
    /// Pass `--tunnel-through-iap` (for VMs without an external IP).
    pub tunnel_through_iap: bool,
    /// Extra arguments handed to ssh after `--`.
    pub extra_args: Vec<String>,
}

impl Default for SshConfig {
    fn default() -> Self {
        Self {
            gcloud_path: DEFAULT_GCLOUD.to_string(),
            tunnel_through_iap: false,
            extra_args: Vec::new(),
        }
    }
}

// ── Resolved settings ────────────────────────────────────────────────────────

/// Values supplied on the command line or via environment. `None` falls
/// through to the config file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub project: Option<String>,
}

/// Validated settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub project: String,
    pub endpoint: String,
    pub page_size: u32,
    pub timeout: Duration,
    pub ssh: SshConfig,
}

impl Settings {
    /// Merge overrides over the file config and validate the result.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when no project is available or an API
    /// setting is out of range.
    pub fn resolve(overrides: Overrides, file: RiderConfig) -> Result<Self, ConfigError> {
        let project = overrides
            .project
            .or(file.project)
            .map(|p| p.trim().to_string())
            .filter(|p| !p.is_empty())
            .ok_or(ConfigError::MissingProject)?;

        let api = file.api;
        if api.page_size == 0 || api.page_size > MAX_PAGE_SIZE {
            return Err(ConfigError::InvalidPageSize(api.page_size));
        }
        if !(api.endpoint.starts_with("http://") || api.endpoint.starts_with("https://")) {
            return Err(ConfigError::InvalidEndpoint(api.endpoint));
        }
        if api.timeout_secs == 0 {
            return Err(ConfigError::ZeroTimeout);
        }

        Ok(Self {
            project,
            endpoint: api.endpoint.trim_end_matches('/').to_string(),
            page_size: api.page_size,
            timeout: Duration::from_secs(api.timeout_secs),
            ssh: file.ssh,
        })
    }
}

// ── Unit tests ───────────────────────────────────────────────────────────────
