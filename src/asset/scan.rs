//! Asset discovery (reads the filesystem, writes nothing).
//!
//! ```text
//! assets/
//! ├── logo.png            -> assets/logo.png        (logo)
//! ├── 2.0x/
//! │   └── logo.png        -> (variant, dropped)
//! ├── icons/
//! │   └── star.png        -> assets/icons/star.png  (star)
//! └── stickers/
//!     └── star.png        -> assets/stickers/star.png (assets_stickers_star)
//! ```
//!
//! Density directories (`1.5x`, `2.0x`) are transparent: their files are
//! declared under the parent prefix, so a copy found there collapses onto the
//! base asset and Flutter picks the resolution at load time.

use regex::Regex;
use rustc_hash::{FxHashMap, FxHashSet};
use std::path::Path;
use std::sync::LazyLock;

use super::AssetDeclaration;
use super::naming::{disambiguate, file_stem};
use crate::debug;

/// macOS Finder metadata, never an asset.
const DS_STORE: &str = ".DS_Store";

/// Density directory: `1.5x`, `2.0x`. A bare `3x` is an ordinary directory.
static RE_DENSITY_DIR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[1-9]\.\dx$").unwrap());

/// Declaration line -> identifier stem.
pub type NameMap = FxHashMap<String, String>;

/// Result of one discovery run.
#[derive(Debug, Default)]
pub struct Discovery {
    /// Declarations in traversal order.
    pub declarations: Vec<AssetDeclaration>,
    /// Identifier stem for every emitted declaration.
    pub names: NameMap,
}

/// Per-run traversal state.
#[derive(Default)]
struct ScanState {
    discovery: Discovery,
    seen: FxHashSet<String>,
}

/// Whether `name` is a density variant directory.
pub fn is_density_dir(name: &str) -> bool {
    RE_DENSITY_DIR.is_match(name)
}

/// Scan the asset roots `dirs` under `root`.
///
/// Missing or unreadable roots contribute nothing.
pub fn discover<S: AsRef<str>>(root: &Path, dirs: &[S]) -> Discovery {
    let mut state = ScanState::default();

    for name in dirs {
        let name = name.as_ref();
        let dir = root.join(name);
        if !dir.is_dir() {
            debug!("scan"; "skipping missing asset dir `{}`", name);
            continue;
        }
        scan_dir(&mut state, &dir, name, false);
    }

    state.discovery
}

/// A directory entry, reduced to what the traversal needs.
struct Entry {
    name: String,
    is_dir: bool,
}

/// List `dir`, files before directories, each group sorted by name.
fn list_entries(dir: &Path) -> Vec<Entry> {
    let Ok(read) = std::fs::read_dir(dir) else {
        return Vec::new();
    };

    let mut entries: Vec<Entry> = read
        .flatten()
        .filter_map(|entry| {
            let is_dir = entry.path().is_dir();
            match entry.file_name().into_string() {
                Ok(name) => Some(Entry { name, is_dir }),
                Err(raw) => {
                    debug!("scan"; "skipping non UTF-8 name {:?}", raw);
                    None
                }
            }
        })
        .filter(|e| e.name != DS_STORE)
        .collect();

    entries.sort_by(|a, b| a.is_dir.cmp(&b.is_dir).then_with(|| a.name.cmp(&b.name)));
    entries
}

/// Recursive helper for discovery.
///
/// `prefix` is the declared path of `dir` (density directories excluded).
/// `in_density` makes files found here count one level deeper when compared
/// against an earlier asset with the same file name.
fn scan_dir(state: &mut ScanState, dir: &Path, prefix: &str, in_density: bool) {
    for entry in list_entries(dir) {
        if entry.is_dir {
            let sub = dir.join(&entry.name);
            if is_density_dir(&entry.name) {
                scan_dir(state, &sub, prefix, true);
            } else {
                scan_dir(state, &sub, &format!("{prefix}/{}", entry.name), false);
            }
        } else {
            visit_file(state, prefix, &entry.name, in_density);
        }
    }
}

fn visit_file(state: &mut ScanState, prefix: &str, file_name: &str, in_density: bool) {
    let decl = AssetDeclaration::new(format!("{prefix}/{file_name}"));
    let stem = file_stem(file_name);
    let discovery = &mut state.discovery;

    if state.seen.insert(file_name.to_string()) {
        discovery
            .names
            .insert(decl.line().to_string(), stem.to_string());
    } else {
        // Same declared path as an earlier file: a variant reached another way
        if discovery.declarations.iter().any(|d| d.line() == decl.line()) {
            debug!("scan"; "variant {}/{} dropped", prefix, file_name);
            return;
        }

        let existing_depth = discovery
            .declarations
            .iter()
            .find(|d| d.file_name() == file_name)
            .map_or(0, AssetDeclaration::depth);
        let new_depth = decl.depth() + usize::from(in_density);

        if new_depth > existing_depth {
            debug!("scan"; "variant {}/{} dropped", prefix, file_name);
            return;
        }

        discovery
            .names
            .insert(decl.line().to_string(), disambiguate(prefix, stem));
    }

    debug!("scan"; "{}", decl.line());
    discovery.declarations.push(decl);
}
