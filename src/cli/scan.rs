//! `assetref scan`

use std::io::{Write, stdout};
use std::path::Path;

use anyhow::{Result, bail};
use owo_colors::OwoColorize;

use crate::asset::naming::{file_stem, to_identifier};
use crate::asset::{AssetDeclaration, NameMap};
use crate::config::AssetConfig;
use crate::logger::status_error;
use crate::pipeline;

/// List the declarations a `generate` run would start from.
pub fn scan_assets(root: &Path, config: &AssetConfig) -> Result<()> {
    if let Err(err) = pipeline::preflight(root, config) {
        status_error("failed to scan assets", &err.to_string());
        bail!("scan failed");
    }

    let discovery = pipeline::scan(root, &config.exclude_rules());

    let mut out = stdout().lock();
    for decl in &discovery.declarations {
        writeln!(
            out,
            "{}  {}",
            decl.path(),
            identifier(decl, &discovery.names).dimmed()
        )?;
    }
    out.flush()?;
    Ok(())
}

fn identifier(decl: &AssetDeclaration, names: &NameMap) -> String {
    let stem = names
        .get(decl.line())
        .map_or_else(|| file_stem(decl.file_name()), String::as_str);
    to_identifier(stem)
}
