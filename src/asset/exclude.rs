//! Exclude rules from configuration.
//!
//! A rule is a plain substring of the declaration line. `font` excludes
//! `assets/font/a.ttf` as well as `assets/fontawesome/b.ttf`.

use super::AssetDeclaration;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExcludeRules(Vec<String>);

impl ExcludeRules {
    /// Build rules from configured paths. Empty strings would match every
    /// line and are dropped.
    pub fn new<I, S>(paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(
            paths
                .into_iter()
                .map(Into::into)
                .filter(|p| !p.is_empty())
                .collect(),
        )
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Whether any rule is contained in `line`.
    pub fn matches(&self, line: &str) -> bool {
        self.0.iter().any(|rule| line.contains(rule.as_str()))
    }

    /// Drop every excluded declaration.
    pub fn apply(&self, decls: Vec<AssetDeclaration>) -> Vec<AssetDeclaration> {
        if self.is_empty() {
            return decls;
        }
        decls
            .into_iter()
            .filter(|d| !self.matches(d.line()))
            .collect()
    }

    /// Like [`apply`](Self::apply), but package assets are always kept.
    pub fn apply_for_source(&self, decls: Vec<AssetDeclaration>) -> Vec<AssetDeclaration> {
        if self.is_empty() {
            return decls;
        }
        decls
            .into_iter()
            .filter(|d| d.package().is_some() || !self.matches(d.line()))
            .collect()
    }
}
