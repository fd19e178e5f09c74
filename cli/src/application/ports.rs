//! Port trait definitions for the Application layer.
//!
//! Ports are the interfaces (contracts) that infrastructure must fulfill.
//! This file imports only from `crate::domain`, never from `crate::infra`,
//! `crate::commands`, `crate::tui`, or `crate::output`.
//!
//! Ports whose futures cross a `tokio::spawn` boundary (the inventory fetch
//! runs on its own task) declare `+ Send` on the returned future.
//! Implementations may still be written as `async fn`.

use std::future::Future;
use std::process::{ExitStatus, Output};
use std::time::Duration;

use anyhow::Result;

use crate::domain::{FetchError, InstanceRecord, Inventory, RiderConfig};

// ── Value Types ───────────────────────────────────────────────────────────────

/// One instance as the Compute API reports it, before normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawInstance {
    pub name: String,
    /// Usually a full resource URL ending in `/zones/<zone>`.
    pub zone: String,
    pub status: Option<String>,
}

/// One page of an aggregated instance listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InstancePage {
    pub instances: Vec<RawInstance>,
    /// `None` when this is the last page.
    pub next_page_token: Option<String>,
    /// Scopes the API could not reach for this page.
    pub unreachable: Vec<String>,
}

// ── Inventory Ports ───────────────────────────────────────────────────────────

/// Page-level access to the Compute Engine instance listing.
pub trait ComputeApi {
    /// Fetch one page of `instances.aggregatedList` for `project`.
    /// `page_token` is `None` for the first page.
    fn list_page(
        &self,
        project: &str,
        page_token: Option<&str>,
    ) -> impl Future<Output = Result<InstancePage, FetchError>> + Send;
}

/// Whole-inventory capability consumed by the picker.
///
/// Atomic: either every instance in the project or a [`FetchError`].
pub trait InventorySource {
    fn fetch(&self, project: &str) -> impl Future<Output = Result<Inventory, FetchError>> + Send;
}

// ── Session Port ──────────────────────────────────────────────────────────────

/// Hands the terminal to an interactive session on one instance and waits
/// for it to end.
#[allow(async_fn_in_trait)]
pub trait SessionLauncher {
    /// Run the session to completion.
    ///
    /// # Errors
    ///
    /// Returns an error if the session process cannot be spawned.
    async fn launch(&self, record: &InstanceRecord, project: &str) -> Result<ExitStatus>;
}

// ── Command Runner Port ───────────────────────────────────────────────────────

/// Abstracts process execution so infrastructure can be swapped or mocked.
pub trait CommandRunner {
    /// Run a program and capture its output, killing it after `timeout`.
    ///
    /// # Errors
    ///
    /// Returns an error if the process cannot be spawned or exceeds `timeout`.
    /// On timeout, the child process must be killed (not left orphaned).
    fn run_with_timeout(
        &self,
        program: &str,
        args: &[&str],
        timeout: Duration,
    ) -> impl Future<Output = Result<Output>> + Send;

    /// Run a program with inherited stdio and return its exit status.
    ///
    /// # Errors
    ///
    /// Returns an error if the process cannot be spawned.
    fn run_status(
        &self,
        program: &str,
        args: &[&str],
    ) -> impl Future<Output = Result<ExitStatus>> + Send;
}

// ── Config Port ───────────────────────────────────────────────────────────────

/// Abstracts loading the on-disk configuration file.
pub trait ConfigStore {
    /// Load the config, returning defaults when no file exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    fn load(&self) -> Result<RiderConfig>;

    /// Path of the config file (may not exist).
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    fn path(&self) -> Result<std::path::PathBuf>;
}
