//! Application context: unified state passed to every command handler.
//!
//! Built once in `Cli::run()` from the global flags and the config file,
//! before any terminal mode changes.

use anyhow::{Context, Result};

use crate::application::ports::ConfigStore;
use crate::application::services::inventory::InventoryFetcher;
use crate::domain::{Overrides, Settings};
use crate::infra::auth::TokenSource;
use crate::infra::command_runner::TokioCommandRunner;
use crate::infra::compute::RestComputeApi;
use crate::infra::ssh::GcloudSshLauncher;
use crate::output::{HumanRenderer, JsonRenderer, OutputContext, Renderer};

/// Output rendering mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Human-readable terminal output (default).
    Human,
    /// Machine-readable JSON output.
    Json,
}

/// Flags passed from the top-level CLI to `AppContext::new`.
#[derive(Debug, Clone, Default)]
pub struct AppFlags {
    /// `--project` / `GCP_PROJECT_ID`.
    pub project: Option<String>,
    /// Disable ANSI color output.
    pub no_color: bool,
    /// Enable JSON output mode.
    pub json: bool,
}

/// Production fetcher type.
pub type RestFetcher = InventoryFetcher<RestComputeApi<TokioCommandRunner>>;

/// Unified application context passed to every command handler.
pub struct AppContext {
    /// Terminal output context (colors).
    pub output: OutputContext,
    /// Output rendering mode (human vs JSON).
    pub mode: OutputMode,
    /// Validated settings for this run.
    pub settings: Settings,
    /// Process runner shared by the token source and the ssh launcher.
    pub runner: TokioCommandRunner,
}

impl AppContext {
    /// Construct an `AppContext` from top-level CLI flags and the config file.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file is unreadable or the merged
    /// settings are invalid (for example, no project anywhere).
    pub fn new(flags: &AppFlags, store: &impl ConfigStore) -> Result<Self> {
        let file = store.load().context("cannot load config")?;
        let settings = Settings::resolve(
            Overrides {
                project: flags.project.clone(),
            },
            file,
        )?;

        let mode = if flags.json {
            OutputMode::Json
        } else {
            OutputMode::Human
        };

        Ok(Self {
            output: OutputContext::new(flags.no_color),
            mode,
            settings,
            runner: TokioCommandRunner,
        })
    }

    /// Returns `true` when JSON output mode is active.
    #[must_use]
    pub fn is_json(&self) -> bool {
        self.mode == OutputMode::Json
    }

    /// Returns the appropriate `Renderer` variant for the current output mode.
    #[must_use]
    pub fn renderer(&self) -> Renderer<'_> {
        match self.mode {
            OutputMode::Human => Renderer::Human(HumanRenderer::new(&self.output)),
            OutputMode::Json => Renderer::Json(JsonRenderer),
        }
    }

    /// Inventory fetcher wired to the Compute REST API.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn inventory_fetcher(&self) -> Result<RestFetcher> {
        let tokens = TokenSource::from_env(self.runner, self.settings.ssh.gcloud_path.clone());
        let api = RestComputeApi::new(
            &self.settings.endpoint,
            self.settings.page_size,
            self.settings.timeout,
            tokens,
        )
        .context("cannot build HTTP client")?;
        Ok(InventoryFetcher::new(api))
    }

    /// Session launcher running `gcloud compute ssh`.
    #[must_use]
    pub fn ssh_launcher(&self) -> GcloudSshLauncher<TokioCommandRunner> {
        GcloudSshLauncher::new(self.runner, self.settings.ssh.clone())
    }
}
