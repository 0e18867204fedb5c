//! assetref - keeps a Flutter project's asset declarations and Dart references
//! in sync with the files on disk.

mod asset;
mod cli;
mod config;
mod generator;
mod logger;
mod manifest;
mod pipeline;
mod utils;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::AssetConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    let root = match cli.root() {
        Some(root) => root.clone(),
        None => std::env::current_dir().context("failed to read current directory")?,
    };
    let config = load_config(&cli, &root)?;

    match &cli.command {
        Commands::Generate { args } => cli::generate::generate_assets(&root, &config, args),
        Commands::Scan { .. } => cli::scan::scan_assets(&root, &config),
    }
}

/// Config file values with the command-line overrides on top.
fn load_config(cli: &Cli, root: &std::path::Path) -> Result<AssetConfig> {
    let path: PathBuf = if cli.config.is_absolute() {
        cli.config.clone()
    } else {
        root.join(&cli.config)
    };

    let mut config = AssetConfig::load(&path)
        .with_context(|| format!("failed to load config from {}", path.display()))?;

    match &cli.command {
        Commands::Generate { args } => config.apply_overrides(
            args.generate_path.as_deref(),
            args.file_name.as_deref(),
            &args.exclude,
        ),
        Commands::Scan { .. } => config.apply_overrides(None, None, cli.exclude()),
    }
    Ok(config)
}
