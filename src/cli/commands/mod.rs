//! CLI command implementations
//!
//! Each subcommand has its own module with:
//! - Args struct for command-line arguments (where it takes any)
//! - run() function to execute the command

pub mod completions;
pub mod config;
pub mod query;
pub mod tui;

use crate::app::AppContext;
use crate::cli::Commands;
use crate::error::Result;

pub fn run(ctx: &AppContext, command: &Commands) -> Result<()> {
    match command {
        Commands::Tui => tui::run(ctx),
        Commands::Query(args) => query::run(ctx, args),
        Commands::Config => config::run(ctx),
        Commands::Completions(args) => completions::run(args),
    }
}

fn runtime() -> Result<tokio::runtime::Runtime> {
    Ok(tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?)
}
