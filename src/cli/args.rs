//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

use crate::utils::DateUtc;

/// Flutter asset reference generator
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path, relative to the project root (default: assetref.toml)
    #[arg(short = 'C', long, global = true, default_value = crate::config::CONFIG_FILE, value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Update pubspec.yaml and regenerate the Dart reference file
    #[command(visible_alias = "g")]
    Generate {
        #[command(flatten)]
        args: GenerateArgs,
    },

    /// List discovered assets and their identifiers without writing anything
    #[command(visible_alias = "s")]
    Scan {
        #[command(flatten)]
        args: ScanArgs,
    },
}

/// Generate command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct GenerateArgs {
    /// Flutter project root (default: current directory)
    #[arg(value_hint = clap::ValueHint::DirPath)]
    pub root: Option<PathBuf>,

    /// Output directory below lib/
    #[arg(short = 'p', long)]
    pub generate_path: Option<String>,

    /// Output file name without .dart; also names the class
    #[arg(short = 'f', long)]
    pub file_name: Option<String>,

    /// Leave out declarations containing this text (repeatable)
    #[arg(short, long = "exclude", value_name = "PATTERN")]
    pub exclude: Vec<String>,

    /// Date written in the file header (default: today, UTC)
    #[arg(long, value_name = "YYYY-MM-DD")]
    pub date: Option<DateUtc>,
}

/// Scan command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct ScanArgs {
    /// Flutter project root (default: current directory)
    #[arg(value_hint = clap::ValueHint::DirPath)]
    pub root: Option<PathBuf>,

    /// Leave out declarations containing this text (repeatable)
    #[arg(short, long = "exclude", value_name = "PATTERN")]
    pub exclude: Vec<String>,
}

impl Cli {
    /// Project root given on the command line, if any.
    pub fn root(&self) -> Option<&PathBuf> {
        match &self.command {
            Commands::Generate { args } => args.root.as_ref(),
            Commands::Scan { args } => args.root.as_ref(),
        }
    }

    /// Exclude patterns given on the command line.
    pub fn exclude(&self) -> &[String] {
        match &self.command {
            Commands::Generate { args } => &args.exclude,
            Commands::Scan { args } => &args.exclude,
        }
    }
}
