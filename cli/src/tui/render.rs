//! Views for the three picker phases.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style, Stylize};
use ratatui::text::{Line, Span};
use ratatui::widgets::{List, ListItem, ListState, Paragraph, Wrap};

use crate::domain::{Phase, SelectionState};

const SPINNER: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub const CURSOR_MARKER: &str = "> ";

/// TUI palette. Default is uncolored.
#[derive(Debug, Clone, Copy, Default)]
pub struct Theme {
    pub accent: Style,
    pub dim: Style,
    pub error: Style,
    pub selected: Style,
}

impl Theme {
    #[must_use]
    pub fn colored() -> Self {
        Self {
            accent: Style::new().cyan().add_modifier(Modifier::BOLD),
            dim: Style::new().dark_gray(),
            error: Style::new().red(),
            selected: Style::new().add_modifier(Modifier::BOLD),
        }
    }

    /// Plain or colored depending on `no_color`.
    #[must_use]
    pub fn for_flags(no_color: bool) -> Self {
        if no_color {
            Self::default()
        } else {
            Self::colored()
        }
    }
}

/// Per-frame inputs that are not part of the selection state.
pub struct ViewContext<'a> {
    pub project: &'a str,
    pub spinner_tick: usize,
    pub theme: Theme,
}

/// Draw the view for the current phase.
pub fn draw(frame: &mut Frame, state: &SelectionState, ctx: &ViewContext<'_>) {
    let [header, body, footer] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Min(1),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    match state.phase() {
        Phase::Loading => draw_loading(frame, body, ctx),
        Phase::Ready => {
            draw_header(frame, header, ctx, state.inventory().len());
            draw_list(frame, body, state, ctx);
        }
        Phase::Failed => draw_error(frame, body, state, ctx),
    }
    draw_footer(frame, footer, state.phase(), ctx);
}

fn draw_header(frame: &mut Frame, area: Rect, ctx: &ViewContext<'_>, count: usize) {
    let line = Line::from(vec![
        Span::styled("GCP VMs", ctx.theme.accent),
        Span::styled(format!("  {}  ({count})", ctx.project), ctx.theme.dim),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn draw_loading(frame: &mut Frame, area: Rect, ctx: &ViewContext<'_>) {
    let spinner = SPINNER[ctx.spinner_tick % SPINNER.len()];
    let line = Line::from(vec![
        Span::styled(format!(" {spinner} "), ctx.theme.accent),
        Span::raw(format!("Loading VMs from {}...", ctx.project)),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn draw_list(frame: &mut Frame, area: Rect, state: &SelectionState, ctx: &ViewContext<'_>) {
    let inventory = state.inventory();
    if inventory.is_empty() {
        let msg = format!("No instances found in {}.", ctx.project);
        frame.render_widget(Paragraph::new(Span::styled(msg, ctx.theme.dim)), area);
        return;
    }

    let name_width = inventory.iter().map(|r| r.name.len()).max().unwrap_or(0);
    let items: Vec<ListItem> = inventory
        .iter()
        .map(|rec| {
            let mut spans = vec![
                Span::raw(format!("{:<name_width$}", rec.name)),
                Span::styled(format!("  {}", rec.zone), ctx.theme.dim),
            ];
            if let Some(status) = &rec.status {
                spans.push(Span::styled(format!("  {status}"), ctx.theme.dim));
            }
            ListItem::new(Line::from(spans))
        })
        .collect();

    let list = List::new(items)
        .highlight_symbol(CURSOR_MARKER)
        .highlight_style(ctx.theme.selected);
    let mut list_state = ListState::default().with_selected(Some(state.cursor()));
    frame.render_stateful_widget(list, area, &mut list_state);
}

fn draw_error(frame: &mut Frame, area: Rect, state: &SelectionState, ctx: &ViewContext<'_>) {
    let reason = state
        .last_error()
        .map_or_else(|| "unknown error".to_string(), ToString::to_string);
    let text = vec![
        Line::from(Span::styled("An error occurred:", ctx.theme.error)),
        Line::from(""),
        Line::from(reason),
    ];
    frame.render_widget(Paragraph::new(text).wrap(Wrap { trim: false }), area);
}

fn draw_footer(frame: &mut Frame, area: Rect, phase: Phase, ctx: &ViewContext<'_>) {
    let hint = match phase {
        Phase::Ready => "↑/k up  ↓/j down  enter ssh  q quit",
        Phase::Loading | Phase::Failed => "Press q to quit.",
    };
    frame.render_widget(Paragraph::new(Span::styled(hint, ctx.theme.dim)), area);
}
