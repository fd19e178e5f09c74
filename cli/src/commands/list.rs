//! `gcp-rider list`: print the inventory without the picker.

use anyhow::Result;

use crate::app::AppContext;
use crate::application::ports::InventorySource;
use crate::output::{json, progress};

/// Fetch and print every instance in the project.
///
/// # Errors
///
/// Returns an error if the fetch fails; the process then exits with status 1.
pub async fn run(app: &AppContext) -> Result<()> {
    let project = &app.settings.project;
    let fetcher = app.inventory_fetcher()?;

    let pb = (app.output.show_progress() && !app.is_json())
        .then(|| progress::spinner(&format!("Loading VMs from {project}...")));

    match fetcher.fetch(project).await {
        Ok(inventory) => {
            if let Some(pb) = pb {
                progress::finish_ok(&pb, &format!("{} instance(s) in {project}", inventory.len()));
            }
            app.renderer().render_inventory(project, &inventory)
        }
        Err(e) => {
            if let Some(pb) = pb {
                pb.finish_and_clear();
            }
            if app.is_json() {
                println!("{}", json::format_error(&e.to_string(), e.code())?);
            }
            anyhow::bail!("cannot list instances in {project}: {e}")
        }
    }
}
