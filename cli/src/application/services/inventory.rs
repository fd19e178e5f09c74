//! Inventory fetch service.
//!
//! Drains every page of the aggregated instance listing and reports one
//! result. A failure on any page discards what was accumulated.

use std::collections::HashSet;

use crate::application::ports::{ComputeApi, InstancePage, InventorySource, RawInstance};
use crate::domain::{FetchError, InstanceRecord, Inventory};

/// Assembles the full [`Inventory`] from a page-level [`ComputeApi`].
pub struct InventoryFetcher<A> {
    api: A,
}

impl<A: ComputeApi + Sync> InventoryFetcher<A> {
    #[must_use]
    pub fn new(api: A) -> Self {
        Self { api }
    }

    /// Fetch all instances in `project`.
    ///
    /// # Errors
    ///
    /// Returns the first page error, [`FetchError::Unreachable`] if any page
    /// reports unreachable zones, or [`FetchError::Malformed`] for nameless
    /// instances and repeated page tokens.
    pub async fn fetch_all(&self, project: &str) -> Result<Inventory, FetchError> {
        tracing::info!(project, "fetching instance inventory");

        let mut records = Vec::new();
        let mut seen_tokens = HashSet::new();
        let mut token: Option<String> = None;
        let mut pages = 0usize;

        loop {
            let page = self
                .api
                .list_page(project, token.as_deref())
                .await
                .inspect_err(|e| {
                    tracing::warn!(project, pages, error = %e, "inventory fetch failed");
                })?;
            pages += 1;

            let InstancePage {
                instances,
                next_page_token,
                unreachable,
            } = page;

            if !unreachable.is_empty() {
                tracing::warn!(project, ?unreachable, "inventory incomplete");
                return Err(FetchError::Unreachable(unreachable));
            }

            for raw in instances {
                records.push(normalize(raw)?);
            }

            match next_page_token.filter(|t| !t.is_empty()) {
                None => break,
                Some(next) => {
                    if !seen_tokens.insert(next.clone()) {
                        return Err(FetchError::Malformed(format!(
                            "page token '{next}' returned twice"
                        )));
                    }
                    token = Some(next);
                }
            }
        }

        tracing::info!(project, pages, instances = records.len(), "inventory fetched");
        Ok(Inventory::new(records))
    }
}

impl<A: ComputeApi + Sync> InventorySource for InventoryFetcher<A> {
    async fn fetch(&self, project: &str) -> Result<Inventory, FetchError> {
        self.fetch_all(project).await
    }
}

fn normalize(raw: RawInstance) -> Result<InstanceRecord, FetchError> {
    if raw.name.trim().is_empty() {
        return Err(FetchError::Malformed(format!(
            "instance without a name in zone '{}'",
            raw.zone
        )));
    }
    let record = InstanceRecord::new(raw.name, &raw.zone);
    Ok(match raw.status {
        Some(status) => record.with_status(status),
        None => record,
    })
}
