//! CLI argument parsing with clap derive

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::app::{AppContext, AppFlags};
use crate::commands;
use crate::infra::config::YamlConfigStore;
use crate::logging::{self, LogTarget};
use crate::output::OutputContext;

/// Pick a Compute Engine VM and ssh into it
#[derive(Parser)]
#[command(name = "gcp-rider", version, propagate_version = true)]
pub struct Cli {
    /// GCP project to list instances from
    #[arg(long, global = true, env = "GCP_PROJECT_ID")]
    pub project: Option<String>,

    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Disable colored output
    #[arg(
        long,
        global = true,
        env = "NO_COLOR",
        value_parser = clap::builder::FalseyValueParser::new()
    )]
    pub no_color: bool,

    /// Write logs to this file
    #[arg(long, global = true, env = "GCP_RIDER_LOG_FILE", value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Select an instance interactively and ssh into it (default)
    Pick,

    /// Print the project's instances
    List,

    /// Show version
    Version,
}

impl Command {
    /// Whether this command takes over the terminal.
    #[must_use]
    pub fn is_interactive(self) -> bool {
        matches!(self, Self::Pick)
    }
}

impl Cli {
    /// Execute the CLI command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration is invalid or the command fails.
    pub async fn run(self) -> Result<()> {
        let Cli {
            project,
            json,
            no_color,
            log_file,
            command,
        } = self;
        let command = command.unwrap_or(Command::Pick);
        logging::init(LogTarget::choose(
            log_file.as_deref(),
            command.is_interactive(),
        ))?;

        let flags = AppFlags {
            project,
            no_color,
            json,
        };
        match command {
            Command::Version => commands::version::run(&OutputContext::new(no_color), json),
            Command::List => {
                let app = AppContext::new(&flags, &YamlConfigStore)?;
                commands::list::run(&app).await
            }
            Command::Pick => {
                let app = AppContext::new(&flags, &YamlConfigStore)?;
                commands::pick::run(&app).await
            }
        }
    }
}
