//! Command-line interface for quorum.

pub mod commands;
pub mod output;

use clap::{Parser, Subcommand};

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "quorum",
    version,
    about = "Swarm decision-aggregation orchestrator"
)]
pub struct Cli {
    /// Emit JSON instead of human-readable tables
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run one swarm decision cycle for a task
    Decide(commands::decide::DecideArgs),
    /// Show engine and collaborator status
    Status(commands::status::StatusArgs),
}

/// Report a fatal CLI error and exit non-zero.
pub fn handle_error(err: &anyhow::Error, json_mode: bool) -> ! {
    if json_mode {
        let payload = serde_json::json!({ "error": format!("{err:#}") });
        eprintln!("{payload}");
    } else {
        eprintln!("Error: {err:#}");
    }
    std::process::exit(1);
}
