//! Human-readable terminal renderer.

use owo_colors::OwoColorize as _;

use crate::domain::Inventory;
use crate::output::OutputContext;

/// Renders domain types as human-readable terminal output using `OutputContext`.
pub struct HumanRenderer<'a> {
    ctx: &'a OutputContext,
}

impl<'a> HumanRenderer<'a> {
    /// Create a new `HumanRenderer` wrapping the given output context.
    #[must_use]
    pub fn new(ctx: &'a OutputContext) -> Self {
        Self { ctx }
    }

    /// Render the CLI version.
    pub fn render_version(&self, version: &str) {
        println!("gcp-rider {version}");
    }

    /// Render the inventory as a `NAME  ZONE  STATUS` table.
    pub fn render_inventory(&self, project: &str, inventory: &Inventory) {
        if inventory.is_empty() {
            self.ctx.info(&format!("No instances found in {project}."));
            return;
        }
        for line in inventory_table(inventory) {
            match line {
                TableLine::Heading(text) => println!("{}", text.style(self.ctx.styles.header)),
                TableLine::Row { text, status } => match status {
                    Some((pad, status)) => println!(
                        "{text}{pad}{}",
                        status.style(self.ctx.styles.for_status(&status))
                    ),
                    None => println!("{text}"),
                },
            }
        }
    }
}

pub(crate) enum TableLine {
    Heading(String),
    /// `status` carries the column gap and the raw status text, so the caller
    /// can color it without breaking alignment.
    Row {
        text: String,
        status: Option<(&'static str, String)>,
    },
}

const GAP: &str = "  ";

/// Lay the inventory out in aligned columns. The status column only appears
/// when at least one record has a status.
pub(crate) fn inventory_table(inventory: &Inventory) -> Vec<TableLine> {
    let name_w = inventory
        .iter()
        .map(|r| r.name.len())
        .max()
        .unwrap_or(0)
        .max("NAME".len());
    let zone_w = inventory
        .iter()
        .map(|r| r.zone.len())
        .max()
        .unwrap_or(0)
        .max("ZONE".len());
    let with_status = inventory.iter().any(|r| r.status.is_some());

    let mut lines = Vec::with_capacity(inventory.len() + 1);
    let heading = if with_status {
        format!("{:<name_w$}{GAP}{:<zone_w$}{GAP}STATUS", "NAME", "ZONE")
    } else {
        format!("{:<name_w$}{GAP}ZONE", "NAME")
    };
    lines.push(TableLine::Heading(heading));

    for rec in inventory {
        if with_status {
            let text = format!("{:<name_w$}{GAP}{:<zone_w$}", rec.name, rec.zone);
            let status = rec.status.clone().unwrap_or_else(|| "-".to_string());
            lines.push(TableLine::Row {
                text,
                status: Some((GAP, status)),
            });
        } else {
            lines.push(TableLine::Row {
                text: format!("{:<name_w$}{GAP}{}", rec.name, rec.zone),
                status: None,
            });
        }
    }
    lines
}
