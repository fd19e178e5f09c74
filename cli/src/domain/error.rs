//! Typed domain error enums.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, `std::fs`, `std::process`, or `std::net`.
//! All error types implement `thiserror::Error` and convert to `anyhow::Error`
//! via the `?` operator.

use thiserror::Error;

// ── Fetch errors ──────────────────────────────────────────────────────────────

/// The inventory fetch did not complete. Any variant means no inventory was
/// produced: partial results are discarded, never surfaced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("authentication failed: {0}")]
    Auth(String),

    #[error("request failed: {0}")]
    Transport(String),

    #[error("request timed out after {secs}s")]
    Timeout { secs: u64 },

    #[error("Compute API returned HTTP {status}: {message}")]
    Api { status: u16, message: String },

    #[error("malformed inventory response: {0}")]
    Malformed(String),

    #[error("{} zone(s) unreachable: {}", .0.len(), .0.join(", "))]
    Unreachable(Vec<String>),
}

impl FetchError {
    /// Stable machine-readable code for JSON error output.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::Auth(_) => "AUTH_FAILED",
            Self::Transport(_) => "TRANSPORT_ERROR",
            Self::Timeout { .. } => "TIMEOUT",
            Self::Api { .. } => "API_ERROR",
            Self::Malformed(_) => "MALFORMED_RESPONSE",
            Self::Unreachable(_) => "ZONES_UNREACHABLE",
        }
    }
}

// ── Config errors ─────────────────────────────────────────────────────────────

/// Errors raised while resolving configuration at startup.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("GCP_PROJECT_ID environment variable not set (or pass --project)")]
    MissingProject,

    #[error("Invalid api.page_size {0}: must be between 1 and 500")]
    InvalidPageSize(u32),

    #[error("Invalid api.endpoint '{0}': must start with http:// or https://")]
    InvalidEndpoint(String),

    #[error("Invalid api.timeout_secs: must be greater than zero")]
    ZeroTimeout,
}
