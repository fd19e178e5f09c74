//! Version command

use anyhow::Result;

use crate::output::{HumanRenderer, JsonRenderer, OutputContext, Renderer};

/// Run the version command. Needs no project or config.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn run(ctx: &OutputContext, json: bool) -> Result<()> {
    let renderer = if json {
        Renderer::Json(JsonRenderer)
    } else {
        Renderer::Human(HumanRenderer::new(ctx))
    };
    renderer.render_version(env!("CARGO_PKG_VERSION"))
}
