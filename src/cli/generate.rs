//! `assetref generate`

use std::path::Path;

use anyhow::{Result, bail};

use super::GenerateArgs;
use crate::config::AssetConfig;
use crate::log;
use crate::logger::{status_error, status_success};
use crate::pipeline;
use crate::utils::DateUtc;

/// Run the full pipeline and report the outcome.
pub fn generate_assets(root: &Path, config: &AssetConfig, args: &GenerateArgs) -> Result<()> {
    let date = args.date.unwrap_or_else(DateUtc::today);
    let result = pipeline::run(root, config, date);

    if !result.ok {
        status_error("failed to generate assets reference", &result.error_detail);
        bail!("generation failed");
    }

    if result.updated_files.is_empty() {
        status_success("assets reference is up to date");
    } else {
        for path in &result.updated_files {
            let shown = path.strip_prefix(root).unwrap_or(path);
            log!("done"; "{}", shown.display());
        }
        status_success("assets reference has been updated");
    }
    Ok(())
}
