//! Generator configuration from `assetref.toml`.
//!
//! ```toml
//! generate_path = "generated"      # lib/generated/
//! generate_file_name = "assets"    # lib/generated/assets.dart, class Assets
//! exclude_path = ["assets/font/"]  # substrings of declaration lines
//! ```
//!
//! The file is optional; every key has a default. The camelCase keys
//! (`generatePath`, `generateFileName`, `excludePath`) are accepted too.
//! CLI flags are layered on top with [`AssetConfig::apply_overrides`].

mod error;

pub use error::{ConfigDiagnostics, ConfigError};

use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

use crate::asset::ExcludeRules;
use crate::log;

/// Default config filename, looked up in the project root.
pub const CONFIG_FILE: &str = "assetref.toml";

/// Generator settings. Loaded once per run, read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetConfig {
    /// Output directory below `lib/`.
    #[serde(alias = "generatePath")]
    pub generate_path: Option<String>,

    /// Output file name without `.dart`; also names the generated class.
    #[serde(alias = "generateFileName")]
    pub generate_file_name: Option<String>,

    /// Declarations containing any of these substrings are left out of the scan.
    #[serde(alias = "excludePath")]
    pub exclude_path: Vec<String>,
}

impl AssetConfig {
    /// Load configuration from `path`, or defaults when it does not exist.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.is_file() {
            return Ok(Self::default());
        }

        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        let (config, ignored) = Self::parse_with_ignored(&content)?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {field}");
        }
    }

    /// Layer CLI flags over the file values.
    ///
    /// Extra excludes are appended after the configured ones, skipping
    /// duplicates so the order stays stable.
    pub fn apply_overrides(
        &mut self,
        generate_path: Option<&str>,
        generate_file_name: Option<&str>,
        exclude: &[String],
    ) {
        if let Some(path) = generate_path {
            self.generate_path = Some(path.to_string());
        }
        if let Some(name) = generate_file_name {
            self.generate_file_name = Some(name.to_string());
        }
        for rule in exclude {
            if !self.exclude_path.contains(rule) {
                self.exclude_path.push(rule.clone());
            }
        }
    }

    /// Check values that would produce a broken output path or class name.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut diag = ConfigDiagnostics::new();

        if let Some(path) = &self.generate_path
            && path.trim().is_empty()
        {
            diag.error_with_hint(
                "generate_path",
                "must not be empty",
                "remove the key to generate into lib/",
            );
        }

        if let Some(name) = &self.generate_file_name {
            if name.trim().is_empty() {
                diag.error_with_hint(
                    "generate_file_name",
                    "must not be empty",
                    "remove the key to generate lib/res.dart",
                );
            } else if name.contains(['/', '\\']) {
                diag.error_with_hint(
                    "generate_file_name",
                    format!("`{name}` contains a path separator"),
                    "use generate_path for directories",
                );
            } else if name.ends_with(".dart") {
                diag.error_with_hint(
                    "generate_file_name",
                    format!("`{name}` already ends with .dart"),
                    format!("use `{}`", name.trim_end_matches(".dart")),
                );
            }
        }

        diag.into_result()
    }

    /// Exclude rules built from `exclude_path`.
    pub fn exclude_rules(&self) -> ExcludeRules {
        ExcludeRules::new(self.exclude_path.iter().cloned())
    }
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let config = AssetConfig::load(&dir.path().join(CONFIG_FILE)).unwrap();
        assert_eq!(config, AssetConfig::default());
    }

    #[test]
    fn test_load_snake_case() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(
            &path,
            "generate_path = \"generated\"\n\
             generate_file_name = \"assets\"\n\
             exclude_path = [\"assets/font/\", \"raw\"]\n",
        )
        .unwrap();

        let config = AssetConfig::load(&path).unwrap();
        assert_eq!(config.generate_path.as_deref(), Some("generated"));
        assert_eq!(config.generate_file_name.as_deref(), Some("assets"));
        assert_eq!(config.exclude_path, ["assets/font/", "raw"]);
    }

    #[test]
    fn test_load_camel_case_aliases() {
        let (config, ignored) = AssetConfig::parse_with_ignored(
            "generatePath = \"gen\"\ngenerateFileName = \"r\"\nexcludePath = [\"x\"]\n",
        )
        .unwrap();
        assert!(ignored.is_empty());
        assert_eq!(config.generate_path.as_deref(), Some("gen"));
        assert_eq!(config.generate_file_name.as_deref(), Some("r"));
        assert_eq!(config.exclude_path, ["x"]);
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "generate_path = \"gen\"\ncolour = \"red\"\n").unwrap();

        let config = AssetConfig::load(&path).unwrap();
        assert_eq!(config.generate_path.as_deref(), Some("gen"));

        let (_, ignored) = AssetConfig::parse_with_ignored("colour = \"red\"\n").unwrap();
        assert_eq!(ignored, ["colour"]);
    }

    #[test]
    fn test_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "exclude_path = \"not a list\"\n").unwrap();

        assert!(matches!(AssetConfig::load(&path), Err(ConfigError::Toml(_))));
    }

    #[test]
    fn test_apply_overrides() {
        let mut config = AssetConfig {
            exclude_path: vec!["a".into()],
            ..Default::default()
        };
        config.apply_overrides(Some("gen"), None, &["b".into(), "a".into()]);

        assert_eq!(config.generate_path.as_deref(), Some("gen"));
        assert_eq!(config.generate_file_name, None);
        assert_eq!(config.exclude_path, ["a", "b"]);
    }

    #[test]
    fn test_validate() {
        assert!(AssetConfig::default().validate().is_ok());

        let bad = |path: Option<&str>, name: Option<&str>| AssetConfig {
            generate_path: path.map(String::from),
            generate_file_name: name.map(String::from),
            exclude_path: vec![],
        };

        assert!(bad(Some(""), None).validate().is_err());
        assert!(bad(None, Some("  ")).validate().is_err());
        assert!(bad(None, Some("gen/res")).validate().is_err());
        assert!(bad(None, Some("res.dart")).validate().is_err());
        assert!(bad(Some("gen/sub"), Some("assets")).validate().is_ok());

        match bad(Some(""), Some("")).validate() {
            Err(ConfigError::Diagnostics(diag)) => assert_eq!(diag.len(), 2),
            other => panic!("expected diagnostics, got {other:?}"),
        }
    }

    #[test]
    fn test_exclude_rules_skip_empty() {
        let config = AssetConfig {
            exclude_path: vec![String::new(), "font".into()],
            ..Default::default()
        };
        assert_eq!(config.exclude_rules().iter().collect::<Vec<_>>(), ["font"]);
    }
}
