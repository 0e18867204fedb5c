//! `pubspec.yaml` asset block maintenance.
//!
//! The manifest is treated as plain lines, not YAML: only the first
//! two-space `assets:` block is rewritten, every other byte is kept.

mod merge;

use merge::merge_lines;

use std::path::{Path, PathBuf};

use crate::asset::{AssetDeclaration, ExcludeRules};
use crate::pipeline::AssetError;
use crate::utils::fs::write_if_changed;
use crate::{debug, log};

/// Manifest file name at the project root.
pub const PUBSPEC: &str = "pubspec.yaml";

/// Result of reconciling the manifest.
#[derive(Debug)]
pub struct ManifestUpdate {
    pub path: PathBuf,
    /// Declarations now in the asset block.
    pub declarations: Vec<AssetDeclaration>,
    /// Whether the file content changed.
    pub written: bool,
}

/// Merge `fresh` into the manifest at `path`.
///
/// Returns `Ok(None)` without touching anything when the file does not exist
/// or has no `assets:` block; the caller falls back to the fresh list.
pub fn update(
    path: &Path,
    fresh: &[AssetDeclaration],
    rules: &ExcludeRules,
) -> Result<Option<ManifestUpdate>, AssetError> {
    if !path.is_file() {
        debug!("manifest"; "`{}` not found, skipping merge", path.display());
        return Ok(None);
    }

    let content = std::fs::read_to_string(path).map_err(|e| AssetError::io(path, e))?;
    let Some(merged) = merge_lines(&content, fresh, rules) else {
        log!("manifest"; "no `  assets:` block in {}, skipping merge", path.display());
        return Ok(None);
    };

    let written = write_if_changed(path, &merged.content).map_err(|e| AssetError::io(path, e))?;
    if written {
        log!("manifest"; "updated {}", path.display());
    } else {
        debug!("manifest"; "{} unchanged", path.display());
    }

    Ok(Some(ManifestUpdate {
        path: path.to_path_buf(),
        declarations: merged.declarations,
        written,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_missing_manifest_is_skipped() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(PUBSPEC);
        let fresh = vec![AssetDeclaration::new("assets/a.png")];

        let update = update(&path, &fresh, &ExcludeRules::default()).unwrap();
        assert!(update.is_none());
        assert!(!path.exists());
    }

    #[test]
    fn test_manifest_without_block_is_untouched() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(PUBSPEC);
        fs::write(&path, "name: app\r\nflutter:\r\n").unwrap();
        let fresh = vec![AssetDeclaration::new("assets/a.png")];

        assert!(update(&path, &fresh, &ExcludeRules::default()).unwrap().is_none());
        assert_eq!(fs::read_to_string(&path).unwrap(), "name: app\r\nflutter:\r\n");
    }

    #[test]
    fn test_manifest_rewritten_once() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(PUBSPEC);
        fs::write(&path, "flutter:\n  assets:\n").unwrap();
        let fresh = vec![AssetDeclaration::new("assets/a.png")];

        let first = update(&path, &fresh, &ExcludeRules::default()).unwrap().unwrap();
        assert!(first.written);
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "flutter:\n  assets:\n    - assets/a.png\n"
        );

        let second = update(&path, &fresh, &ExcludeRules::default()).unwrap().unwrap();
        assert!(!second.written);
        assert_eq!(second.declarations, first.declarations);
    }
}
