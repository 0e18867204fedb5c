//! The scan → filter → merge → generate run.
//!
//! ```text
//! project root
//!   │  check_project / check_assets
//!   ▼
//! discover (asset, assets, images)
//!   │  exclude rules
//!   ▼
//! pubspec.yaml merge ──(no manifest / no block)──┐
//!   │  final declarations                         │ fresh declarations
//!   ▼                                             ▼
//! lib/res.dart
//! ```

mod check;
mod error;

use check::{ASSET_DIRS, check_assets, check_project};
pub use error::AssetError;

use std::path::{Path, PathBuf};

use crate::asset::{Discovery, ExcludeRules, discover};
use crate::config::AssetConfig;
use crate::generator::{self, DartOptions};
use crate::manifest::{self, PUBSPEC};
use crate::utils::{DateUtc, plural_count};
use crate::{debug, log};

/// What the caller reports to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunResult {
    pub ok: bool,
    /// Files whose content changed during the run.
    pub updated_files: Vec<PathBuf>,
    /// Human-readable failure, empty on success.
    pub error_detail: String,
}

impl RunResult {
    fn success(updated_files: Vec<PathBuf>) -> Self {
        Self {
            ok: true,
            updated_files,
            error_detail: String::new(),
        }
    }

    fn failure(error_detail: String) -> Self {
        Self {
            ok: false,
            updated_files: Vec::new(),
            error_detail,
        }
    }
}

/// Run the whole pipeline for the project at `root`.
///
/// Never panics on project or I/O problems; they are logged and returned as
/// a failed [`RunResult`].
pub fn run(root: &Path, config: &AssetConfig, date: DateUtc) -> RunResult {
    match execute(root, config, date) {
        Ok(updated) => RunResult::success(updated),
        Err(err) => {
            log!("error"; "{}", err);
            RunResult::failure(err.to_string())
        }
    }
}

/// Pre-flight checks shared by every command.
pub fn preflight(root: &Path, config: &AssetConfig) -> Result<(), AssetError> {
    config.validate()?;

    let project = check_project(root);
    if !project.ok {
        return Err(AssetError::InvalidProject(project.missing));
    }

    let assets = check_assets(root);
    if !assets.ok {
        return Err(AssetError::NoAssetDirs(assets.missing));
    }

    Ok(())
}

/// Discover assets under the asset roots and drop excluded ones.
pub fn scan(root: &Path, rules: &ExcludeRules) -> Discovery {
    let mut discovery = discover(root, ASSET_DIRS);
    let found = discovery.declarations.len();

    discovery.declarations = rules.apply(discovery.declarations);
    let excluded = found - discovery.declarations.len();

    if excluded > 0 {
        log!("scan"; "found {} ({} excluded)", plural_count(found, "asset"), excluded);
    } else {
        log!("scan"; "found {}", plural_count(found, "asset"));
    }
    discovery
}

fn execute(root: &Path, config: &AssetConfig, date: DateUtc) -> Result<Vec<PathBuf>, AssetError> {
    preflight(root, config)?;

    let rules = config.exclude_rules();
    if !rules.is_empty() {
        debug!("scan"; "excluding {}", rules.iter().collect::<Vec<_>>().join(", "));
    }
    let Discovery {
        declarations: fresh,
        names,
    } = scan(root, &rules);

    let mut updated = Vec::new();

    let manifest_path = root.join(PUBSPEC);
    let declarations = match manifest::update(&manifest_path, &fresh, &rules)? {
        Some(update) => {
            if update.written {
                updated.push(update.path);
            }
            update.declarations
        }
        None => {
            debug!("manifest"; "generating from scanned assets only");
            fresh
        }
    };

    let opts = DartOptions::from_config(root, config);
    let file = generator::generate(&opts, &declarations, &names, &rules, date)?;
    debug!(
        "generate";
        "{} with {} and {}",
        file.path.display(),
        plural_count(file.constants, "constant"),
        plural_count(file.packages, "package")
    );
    if file.written {
        updated.push(file.path);
    }

    Ok(updated)
}
