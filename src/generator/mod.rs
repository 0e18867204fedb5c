//! Generated Dart reference file.

pub mod dart;

use std::fs;
use std::path::{Path, PathBuf};

use crate::asset::{AssetDeclaration, ExcludeRules, NameMap};
use crate::config::AssetConfig;
use crate::pipeline::AssetError;
use crate::utils::DateUtc;
use crate::utils::fs::write_if_changed;
use crate::{debug, log};

/// Dart sources live under `lib/`.
const LIB_DIR: &str = "lib";
const DEFAULT_FILE_STEM: &str = "res";
const DEFAULT_CLASS: &str = "Res";

/// Where and how the Dart file is written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DartOptions {
    pub dir: PathBuf,
    pub file_name: String,
    pub class_name: String,
}

impl DartOptions {
    /// `lib/res.dart` with class `Res`, unless overridden by config.
    pub fn from_config(root: &Path, config: &AssetConfig) -> Self {
        let mut dir = root.join(LIB_DIR);
        if let Some(path) = &config.generate_path {
            dir.push(path.trim_matches('/'));
        }

        match &config.generate_file_name {
            Some(stem) => Self {
                dir,
                file_name: format!("{stem}.dart"),
                class_name: capitalize(stem),
            },
            None => Self {
                dir,
                file_name: format!("{DEFAULT_FILE_STEM}.dart"),
                class_name: DEFAULT_CLASS.to_string(),
            },
        }
    }

    pub fn path(&self) -> PathBuf {
        self.dir.join(&self.file_name)
    }
}

/// Upper-case the first character: `assets` -> `Assets`.
fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Outcome of writing the Dart file.
#[derive(Debug)]
pub struct GeneratedFile {
    pub path: PathBuf,
    /// Number of asset constants written.
    pub constants: usize,
    /// Number of package constants written.
    pub packages: usize,
    /// Whether the file content changed.
    pub written: bool,
}

/// Render and write the Dart file, creating its directory when needed.
pub fn generate(
    opts: &DartOptions,
    decls: &[AssetDeclaration],
    names: &NameMap,
    rules: &ExcludeRules,
    date: DateUtc,
) -> Result<GeneratedFile, AssetError> {
    let source = dart::render(&opts.class_name, decls, names, rules, date);

    fs::create_dir_all(&opts.dir).map_err(|e| AssetError::io(&opts.dir, e))?;

    let path = opts.path();
    let written = write_if_changed(&path, &source.text).map_err(|e| AssetError::io(&path, e))?;
    if written {
        log!("generate"; "updated {}", path.display());
    } else {
        debug!("generate"; "{} unchanged", path.display());
    }

    Ok(GeneratedFile {
        path,
        constants: source.constants,
        packages: source.packages,
        written,
    })
}
