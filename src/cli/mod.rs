//! Command-line interface.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub mod commands;
pub mod output;

pub use output::OutputFormat;

use crate::render::RenderMode;
use crate::sequencer::Sequencing;

#[derive(Parser, Debug)]
#[command(name = "lookup", version, about = "Search a local document index from the terminal")]
pub struct Cli {
    /// Path to a config file (defaults to the user config directory)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Disable logging
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Emit JSON output and JSON logs
    #[arg(long, global = true)]
    pub json: bool,

    /// Search server root URL
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Row rendering: text or link
    #[arg(long, global = true, value_parser = parse_render_mode)]
    pub render: Option<RenderMode>,

    /// Search ordering: queued or concurrent
    #[arg(long, global = true, value_parser = parse_sequencing)]
    pub sequencing: Option<Sequencing>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    #[must_use]
    pub const fn output_format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            OutputFormat::Human
        }
    }

    /// The subcommand to run; the interactive UI when none was given.
    #[must_use]
    pub fn command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Tui)
    }
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Interactive search UI (default)
    Tui,
    /// Run one search and print the results
    Query(commands::query::QueryArgs),
    /// Print the effective configuration
    Config,
    /// Generate shell completions
    Completions(commands::completions::CompletionsArgs),
}

fn parse_render_mode(value: &str) -> Result<RenderMode, String> {
    value.parse().map_err(|err: crate::error::LookupError| err.to_string())
}

fn parse_sequencing(value: &str) -> Result<Sequencing, String> {
    value.parse().map_err(|err: crate::error::LookupError| err.to_string())
}
