//! Pre-flight project checks.
//!
//! Nothing is written unless both checks pass.

use std::path::Path;

use crate::manifest::PUBSPEC;

/// Top-level asset roots, scanned in this order.
pub const ASSET_DIRS: &[&str] = &["asset", "assets", "images"];

/// Entries every Flutter project root has.
const PROJECT_FILES: &[&str] = &[PUBSPEC, "lib"];

/// Outcome of a check, with every missing item listed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckResult {
    pub ok: bool,
    pub missing: Vec<String>,
}

impl CheckResult {
    fn from_missing(missing: Vec<String>) -> Self {
        Self {
            ok: missing.is_empty(),
            missing,
        }
    }
}

/// Whether `root` looks like a Flutter project.
pub fn check_project(root: &Path) -> CheckResult {
    let missing = PROJECT_FILES
        .iter()
        .filter(|name| !root.join(name).exists())
        .map(|name| (*name).to_string())
        .collect();
    CheckResult::from_missing(missing)
}

/// Whether at least one asset root exists. On failure all roots are listed.
pub fn check_assets(root: &Path) -> CheckResult {
    if ASSET_DIRS.iter().any(|name| root.join(name).is_dir()) {
        return CheckResult::from_missing(Vec::new());
    }
    CheckResult::from_missing(ASSET_DIRS.iter().map(|s| (*s).to_string()).collect())
}
