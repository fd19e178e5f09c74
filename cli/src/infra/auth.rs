//! Access tokens for the Compute API.
//!
//! `CLOUDSDK_AUTH_ACCESS_TOKEN` wins when set (the same override `gcloud`
//! itself honours); otherwise the token comes from
//! `gcloud auth print-access-token`.

use crate::application::ports::CommandRunner;
use crate::domain::FetchError;
use crate::infra::command_runner::DEFAULT_CMD_TIMEOUT;

pub const TOKEN_ENV: &str = "CLOUDSDK_AUTH_ACCESS_TOKEN";

/// Where bearer tokens come from.
pub enum TokenSource<R> {
    /// A fixed token, typically from the environment.
    Static(String),
    /// Ask `gcloud` on every call.
    Gcloud { runner: R, gcloud: String },
}

impl<R: CommandRunner + Sync> TokenSource<R> {
    /// Prefer the environment override, fall back to `gcloud`.
    pub fn from_env(runner: R, gcloud: impl Into<String>) -> Self {
        match std::env::var(TOKEN_ENV) {
            Ok(token) if !token.trim().is_empty() => Self::Static(token.trim().to_string()),
            _ => Self::Gcloud {
                runner,
                gcloud: gcloud.into(),
            },
        }
    }

    /// Produce a bearer token.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Auth`] if `gcloud` cannot be run, exits non-zero,
    /// or prints nothing.
    pub async fn access_token(&self) -> Result<String, FetchError> {
        match self {
            Self::Static(token) => Ok(token.clone()),
            Self::Gcloud { runner, gcloud } => {
                let output = runner
                    .run_with_timeout(gcloud, &["auth", "print-access-token"], DEFAULT_CMD_TIMEOUT)
                    .await
                    .map_err(|e| FetchError::Auth(format!("{e:#}")))?;
                if !output.status.success() {
                    let stderr = String::from_utf8_lossy(&output.stderr);
                    return Err(FetchError::Auth(format!(
                        "{gcloud} auth print-access-token failed: {}",
                        stderr.trim()
                    )));
                }
                let token = String::from_utf8_lossy(&output.stdout).trim().to_string();
                if token.is_empty() {
                    return Err(FetchError::Auth(format!(
                        "{gcloud} auth print-access-token returned no token"
                    )));
                }
                Ok(token)
            }
        }
    }
}
