//! `quorum decide` - run one decision cycle.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;

use crate::application::DecisionEngine;
use crate::cli::output::TableFormatter;
use crate::domain::models::{Person, Task};
use crate::infrastructure::config::ConfigLoader;

#[derive(Args, Debug)]
pub struct DecideArgs {
    /// Path to the task file (YAML or JSON)
    #[arg(long)]
    pub task: PathBuf,

    /// Path to a candidate pool file; omit to use the default roster
    #[arg(long)]
    pub people: Option<PathBuf>,

    /// Path to a config file; omit for hierarchical project config
    #[arg(long)]
    pub config: Option<PathBuf>,
}

pub async fn execute(args: DecideArgs, json_mode: bool) -> Result<()> {
    let config = match &args.config {
        Some(path) => ConfigLoader::load_from_file(path)?,
        None => ConfigLoader::load()?,
    };

    let task: Task = read_input(&args.task).context("Failed to load task")?;
    let people: Option<Vec<Person>> = match &args.people {
        Some(path) => Some(read_input(path).context("Failed to load candidate pool")?),
        None => None,
    };

    let engine = DecisionEngine::new(&config);
    let decision = engine.make_decision(&task, people.as_deref()).await;

    if json_mode {
        println!("{}", serde_json::to_string_pretty(&decision)?);
    } else {
        println!("{}", TableFormatter::new().format_decision(&decision));
    }

    Ok(())
}

/// Parse a YAML (or JSON, which YAML subsumes) input file.
fn read_input<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_yaml::from_str(&raw).with_context(|| format!("Failed to parse {}", path.display()))
}
