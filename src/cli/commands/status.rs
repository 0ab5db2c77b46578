//! `quorum status` - engine introspection.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use crate::application::DecisionEngine;
use crate::cli::output::TableFormatter;
use crate::infrastructure::config::ConfigLoader;

#[derive(Args, Debug)]
pub struct StatusArgs {
    /// Path to a config file; omit for hierarchical project config
    #[arg(long)]
    pub config: Option<PathBuf>,
}

pub async fn execute(args: StatusArgs, json_mode: bool) -> Result<()> {
    let config = match &args.config {
        Some(path) => ConfigLoader::load_from_file(path)?,
        None => ConfigLoader::load()?,
    };

    let engine = DecisionEngine::new(&config);
    let status = engine.get_engine_status();

    if json_mode {
        println!("{}", serde_json::to_string_pretty(&status)?);
    } else {
        println!("{}", TableFormatter::new().format_status(&status));
    }

    Ok(())
}
