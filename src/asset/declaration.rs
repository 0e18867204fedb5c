//! Asset declaration lines as they appear in `pubspec.yaml`.

use regex::Regex;
use std::cmp::Ordering;
use std::fmt;
use std::sync::LazyLock;

/// Indent written in front of every generated declaration.
pub const DECLARATION_INDENT: &str = "    - ";

/// A manifest list item: `^ {2,}- <path>`.
static RE_LIST_ITEM: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^ {2,}- (.*)$").unwrap());

/// An asset from an external package: `packages/<name>/...`.
static RE_PACKAGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^packages/(?<name>[a-z_]+)/").unwrap());

/// One asset entry of the manifest.
///
/// Identity is the literal `line`, not the path: two distinct assets can share
/// a file name at different depths, and a preserved manifest line keeps
/// whatever indentation it was written with.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AssetDeclaration {
    line: String,
    path: String,
}

impl AssetDeclaration {
    /// Build a declaration for a scanned file. `path` uses `/` separators.
    pub fn new(path: impl Into<String>) -> Self {
        let path = path.into();
        Self {
            line: format!("{DECLARATION_INDENT}{path}"),
            path,
        }
    }

    /// Parse an existing manifest list line, keeping it verbatim.
    pub fn parse(line: &str) -> Option<Self> {
        let caps = RE_LIST_ITEM.captures(line)?;
        Some(Self {
            line: line.to_string(),
            path: caps[1].trim().to_string(),
        })
    }

    /// Whether `line` is a manifest list item (two or more spaces, then `- `).
    pub fn is_list_item(line: &str) -> bool {
        RE_LIST_ITEM.is_match(line)
    }

    pub fn line(&self) -> &str {
        &self.line
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Last path segment (the file name).
    pub fn file_name(&self) -> &str {
        self.path.rsplit('/').next().unwrap_or(&self.path)
    }

    /// Number of `/` in the declaration.
    pub fn depth(&self) -> usize {
        self.path.matches('/').count()
    }

    /// Package this asset comes from, if declared as `packages/<name>/...`.
    pub fn package(&self) -> Option<PackageRef<'_>> {
        RE_PACKAGE
            .captures(&self.path)
            .and_then(|caps| caps.name("name"))
            .map(|name| PackageRef {
                name: name.as_str(),
                prefix_len: name.end() + 1,
            })
    }

    /// Value used for the generated constant.
    ///
    /// Package assets are loaded relative to their package, so the
    /// `packages/<name>/` prefix is stripped.
    pub fn asset_value(&self) -> &str {
        match self.package() {
            Some(pkg) => &self.path[pkg.prefix_len..],
            None => &self.path,
        }
    }
}

impl fmt::Display for AssetDeclaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.line)
    }
}

/// Reference to an external package found in a declaration path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PackageRef<'a> {
    pub name: &'a str,
    prefix_len: usize,
}

/// Case-insensitive ordering used for manifest lines and generated constants.
pub fn compare_ignore_case(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
}

/// Sort declarations by their line, ignoring case.
pub fn sort_declarations(decls: &mut [AssetDeclaration]) {
    decls.sort_by(|a, b| compare_ignore_case(a.line(), b.line()));
}
