//! Terminal ownership: raw mode, alternate screen and frame drawing.

use std::io::{self, Stdout};

use anyhow::{Context, Result};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::{Backend, CrosstermBackend};

use super::render::{self, Theme, ViewContext};
use crate::domain::SelectionState;

/// What the event loop draws to.
pub trait Screen {
    /// Render the current state.
    ///
    /// # Errors
    ///
    /// Returns an error if the frame cannot be written to the terminal.
    fn draw(&mut self, state: &SelectionState) -> Result<()>;

    /// Advance the loading spinner by one frame.
    fn tick(&mut self);

    /// Give the terminal back to the shell (for a child process).
    ///
    /// # Errors
    ///
    /// Returns an error if terminal modes cannot be changed.
    fn suspend(&mut self) -> Result<()>;

    /// Take the terminal again after [`Screen::suspend`].
    ///
    /// # Errors
    ///
    /// Returns an error if terminal modes cannot be changed.
    fn resume(&mut self) -> Result<()>;
}

/// A ratatui terminal plus the mode bookkeeping around it.
pub struct TerminalScreen<B: Backend> {
    terminal: Terminal<B>,
    project: String,
    theme: Theme,
    tick: usize,
    /// Set when this screen put the real tty in raw/alternate mode.
    owns_tty: bool,
    active: bool,
}

impl TerminalScreen<CrosstermBackend<Stdout>> {
    /// Switch stdout to raw mode and the alternate screen.
    ///
    /// # Errors
    ///
    /// Returns an error if stdout is not a terminal or modes cannot be set.
    pub fn enter(project: &str, theme: Theme) -> Result<Self> {
        enter_tty().context("cannot initialize terminal")?;
        let terminal = match Terminal::new(CrosstermBackend::new(io::stdout())) {
            Ok(t) => t,
            Err(e) => {
                let _ = leave_tty();
                return Err(e).context("cannot initialize terminal");
            }
        };
        let mut screen = Self {
            terminal,
            project: project.to_string(),
            theme,
            tick: 0,
            owns_tty: true,
            active: true,
        };
        screen.terminal.clear().context("cannot clear terminal")?;
        Ok(screen)
    }
}

impl<B: Backend> TerminalScreen<B> {
    /// Wrap a terminal that does not own the real tty (tests).
    pub fn headless(terminal: Terminal<B>, project: &str, theme: Theme) -> Self {
        Self {
            terminal,
            project: project.to_string(),
            theme,
            tick: 0,
            owns_tty: false,
            active: true,
        }
    }

    #[must_use]
    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    /// Leave raw mode and the alternate screen. Idempotent.
    ///
    /// # Errors
    ///
    /// Returns an error if terminal modes cannot be restored.
    pub fn restore(&mut self) -> Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;
        if self.owns_tty {
            leave_tty().context("cannot restore terminal")?;
            self.terminal.show_cursor().context("cannot show cursor")?;
        }
        Ok(())
    }
}

impl<B: Backend> Screen for TerminalScreen<B> {
    fn draw(&mut self, state: &SelectionState) -> Result<()> {
        let ctx = ViewContext {
            project: &self.project,
            spinner_tick: self.tick,
            theme: self.theme,
        };
        self.terminal
            .draw(|frame| render::draw(frame, state, &ctx))
            .context("cannot draw frame")?;
        Ok(())
    }

    fn tick(&mut self) {
        self.tick = self.tick.wrapping_add(1);
    }

    fn suspend(&mut self) -> Result<()> {
        if self.owns_tty && self.active {
            leave_tty().context("cannot release terminal")?;
            self.terminal.show_cursor().context("cannot show cursor")?;
        }
        self.active = false;
        Ok(())
    }

    fn resume(&mut self) -> Result<()> {
        if self.owns_tty && !self.active {
            enter_tty().context("cannot reclaim terminal")?;
        }
        self.active = true;
        // The child may have drawn anything; force a full repaint.
        self.terminal.clear().context("cannot clear terminal")?;
        Ok(())
    }
}

impl<B: Backend> Drop for TerminalScreen<B> {
    fn drop(&mut self) {
        if self.owns_tty && self.active {
            let _ = leave_tty();
        }
    }
}

fn enter_tty() -> io::Result<()> {
    enable_raw_mode()?;
    if let Err(e) = execute!(io::stdout(), EnterAlternateScreen) {
        let _ = disable_raw_mode();
        return Err(e);
    }
    Ok(())
}

fn leave_tty() -> io::Result<()> {
    let raw = disable_raw_mode();
    execute!(io::stdout(), LeaveAlternateScreen)?;
    raw
}
