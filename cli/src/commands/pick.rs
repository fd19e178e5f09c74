//! `gcp-rider pick`: the interactive instance selector.

use anyhow::{Context, Result};

use crate::app::AppContext;
use crate::tui::{CrosstermKeys, Picker, TerminalScreen, Theme, spawn_fetch};

/// Run the picker until the user quits.
///
/// The fetch starts before the first frame so the loading view is live at
/// once. The terminal is restored on every exit path.
///
/// # Errors
///
/// Returns an error if the terminal cannot be taken over or drawn to.
pub async fn run(app: &AppContext) -> Result<()> {
    let project = app.settings.project.clone();
    let fetcher = app.inventory_fetcher()?;
    let launcher = app.ssh_launcher();

    // Ctrl+C inside an ssh session belongs to the child.
    #[cfg(unix)]
    let _sigint = tokio::signal::unix::signal(tokio::signal::unix::SignalKind::interrupt())
        .context("cannot install SIGINT handler")?;

    let screen = TerminalScreen::enter(&project, Theme::for_flags(!app.output.colors))?;
    let mut picker = Picker::new(screen, launcher, project.clone());
    tracing::info!(project = %project, "starting inventory fetch");
    let fetch = spawn_fetch(fetcher, project, picker.events());

    let mut keys = CrosstermKeys::new();
    let result = picker.run(&mut keys).await;

    fetch.abort();
    let restored = picker.screen_mut().restore();
    result?;
    restored
}
