use std::fs::OpenOptions;
use std::path::Path;

use anyhow::Context;
use clap::Parser;

mod analysis;
mod cli;
mod core;
mod error;
mod generators;
mod models;
mod utils;

use crate::cli::{handlers, menu, Args, CliCommand};
use crate::core::config::Config;

fn init_logging(config: &Config) -> anyhow::Result<()> {
    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(config.log_level)
        .format_timestamp_secs()
        .format_module_path(true)
        .format_target(false);

    if let Some(log_file) = &config.log_file {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(log_file)
            .with_context(|| format!("Failed to open log file {}", log_file.display()))?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }

    builder.init();
    Ok(())
}

fn main() -> anyhow::Result<()> {
    // Load environment variables
    let dotenv_loaded = Path::new(".env").exists() && dotenvy::dotenv().is_ok();

    let args = Args::parse();
    let config = Config::load();
    init_logging(&config)?;

    for warning in &config.warnings {
        log::warn!("{}", warning);
    }

    log::debug!("Loaded .env file: {}", dotenv_loaded);
    log::debug!("Loaded config: {:?}", config);

    match args.command {
        Some(CliCommand::Generate { length, classes, count, copy }) => {
            handlers::handle_generate(&config, length, classes, count, copy, args.json)?
        }
        Some(CliCommand::Analyze { password }) => handlers::handle_analyze(password, args.json)?,
        Some(CliCommand::Interactive) | None => menu::run_cli_menu(&config, args.json)?,
    }

    Ok(())
}
