//! Pipeline error types.

use std::path::PathBuf;
use thiserror::Error;

use crate::config::ConfigError;

/// Errors that fail a generation run.
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("IO error when accessing `{}`: {}", .0.display(), .1)]
    Io(PathBuf, #[source] std::io::Error),

    #[error(
        "current directory does not seem to be a valid Flutter project directory, not found:\n{}",
        .0.join("\n")
    )]
    InvalidProject(Vec<String>),

    #[error("no asset directory named {} was found", .0.join(", "))]
    NoAssetDirs(Vec<String>),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl AssetError {
    pub fn io(path: impl Into<PathBuf>, err: std::io::Error) -> Self {
        Self::Io(path.into(), err)
    }
}
