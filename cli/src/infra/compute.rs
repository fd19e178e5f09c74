//! Compute Engine REST client implementing the `ComputeApi` port.
//!
//! Calls `GET /compute/v1/projects/{project}/aggregated/instances` and maps
//! every failure to a [`FetchError`] at this boundary.

use std::collections::BTreeMap;
use std::time::Duration;

use anyhow::bail;
use reqwest::{Client, StatusCode, Url};
use serde::Deserialize;

use crate::application::ports::{CommandRunner, ComputeApi, InstancePage, RawInstance};
use crate::domain::FetchError;
use crate::infra::auth::TokenSource;

/// Error bodies are echoed to the user; keep them short.
const MAX_ERROR_BODY: usize = 300;

// ── Wire types ────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AggregatedList {
    #[serde(default)]
    items: BTreeMap<String, ScopedList>,
    next_page_token: Option<String>,
    #[serde(default)]
    unreachables: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ScopedList {
    instances: Vec<WireInstance>,
}

#[derive(Debug, Deserialize)]
struct WireInstance {
    #[serde(default)]
    name: String,
    #[serde(default)]
    zone: String,
    status: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: String,
}

// ── Client ────────────────────────────────────────────────────────────────────

/// `ComputeApi` over HTTPS.
pub struct RestComputeApi<R> {
    client: Client,
    endpoint: Url,
    page_size: u32,
    timeout: Duration,
    tokens: TokenSource<R>,
}

impl<R: CommandRunner + Sync> RestComputeApi<R> {
    /// # Errors
    ///
    /// Returns an error if `endpoint` is not an absolute http(s) URL or the
    /// HTTP client cannot be built (TLS backend init).
    pub fn new(
        endpoint: &str,
        page_size: u32,
        timeout: Duration,
        tokens: TokenSource<R>,
    ) -> anyhow::Result<Self> {
        let endpoint = Url::parse(endpoint)?;
        if endpoint.cannot_be_a_base() {
            bail!("endpoint {endpoint} cannot take a path");
        }
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("gcp-rider/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            client,
            endpoint,
            page_size,
            timeout,
            tokens,
        })
    }

    fn transport_error(&self, e: &reqwest::Error) -> FetchError {
        if e.is_timeout() {
            FetchError::Timeout {
                secs: self.timeout.as_secs(),
            }
        } else {
            FetchError::Transport(e.to_string())
        }
    }
}

impl<R: CommandRunner + Sync> ComputeApi for RestComputeApi<R> {
    async fn list_page(
        &self,
        project: &str,
        page_token: Option<&str>,
    ) -> Result<InstancePage, FetchError> {
        let token = self.tokens.access_token().await?;
        let url = instances_url(&self.endpoint, project);
        tracing::debug!(%url, page_token, "GET aggregated instances");

        let mut query = vec![("maxResults", self.page_size.to_string())];
        if let Some(t) = page_token {
            query.push(("pageToken", t.to_string()));
        }

        let response = self
            .client
            .get(url)
            .bearer_auth(token)
            .query(&query)
            .send()
            .await
            .map_err(|e| self.transport_error(&e))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| self.transport_error(&e))?;
        tracing::debug!(%status, bytes = body.len(), "aggregated instances response");

        if !status.is_success() {
            return Err(api_error(status, &body));
        }
        parse_page(&body)
    }
}

/// `{endpoint}/compute/v1/projects/{project}/aggregated/instances`, with the
/// project percent-encoded as one path segment.
fn instances_url(endpoint: &Url, project: &str) -> Url {
    let mut url = endpoint.clone();
    if let Ok(mut segments) = url.path_segments_mut() {
        segments.pop_if_empty().extend([
            "compute",
            "v1",
            "projects",
            project,
            "aggregated",
            "instances",
        ]);
    }
    url
}

/// Decode one successful response body.
///
/// # Errors
///
/// Returns [`FetchError::Malformed`] if the body is not an aggregated list.
pub fn parse_page(body: &str) -> Result<InstancePage, FetchError> {
    let list: AggregatedList =
        serde_json::from_str(body).map_err(|e| FetchError::Malformed(e.to_string()))?;

    let instances = list
        .items
        .into_values()
        .flat_map(|scoped| scoped.instances)
        .map(|w| RawInstance {
            name: w.name,
            zone: w.zone,
            status: w.status,
        })
        .collect();

    Ok(InstancePage {
        instances,
        next_page_token: list.next_page_token.filter(|t| !t.is_empty()),
        unreachable: list.unreachables,
    })
}

/// Map a non-2xx response to [`FetchError::Api`], preferring the API's own message.
#[must_use]
pub fn api_error(status: StatusCode, body: &str) -> FetchError {
    let message = serde_json::from_str::<ErrorEnvelope>(body)
        .ok()
        .map(|env| env.error.message)
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| {
            let trimmed = body.trim();
            if trimmed.is_empty() {
                status
                    .canonical_reason()
                    .unwrap_or("unknown error")
                    .to_string()
            } else {
                trimmed.chars().take(MAX_ERROR_BODY).collect()
            }
        });
    tracing::warn!(status = status.as_u16(), %message, "Compute API error");
    FetchError::Api {
        status: status.as_u16(),
        message,
    }
}
