//! Line-level merge of the `assets:` block.
//!
//! Only three kinds of lines matter inside the block:
//!
//! ```text
//!   assets:                    <- block start (exactly two spaces)
//!     - assets/logo.png        <- item (two or more spaces, then "- ")
//!                              <- blank
//!   fonts:                     <- anything else ends the block
//! ```
//!
//! Everything outside the block is copied through byte for byte, line
//! endings included. New declarations use the file's own line ending.

use regex::Regex;
use rustc_hash::FxHashSet;
use std::sync::LazyLock;

use crate::asset::{AssetDeclaration, ExcludeRules, sort_declarations};

static RE_BLOCK_START: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^ {2}assets:\s*$").unwrap());

/// Output of a successful merge.
#[derive(Debug)]
pub struct Merged {
    /// Full manifest text.
    pub content: String,
    /// Declarations written into the block, in output order.
    pub declarations: Vec<AssetDeclaration>,
}

#[derive(Clone, Copy)]
enum BlockState {
    Before,
    Inside,
    After,
}

/// Merge `fresh` into the `assets:` block of `content`.
///
/// Items already in the manifest that are no longer scanned are dropped,
/// except package assets and excluded paths, which the scan never sees.
/// Returns `None` when the manifest has no `assets:` block.
pub fn merge_lines(
    content: &str,
    fresh: &[AssetDeclaration],
    rules: &ExcludeRules,
) -> Option<Merged> {
    let fresh_lines: FxHashSet<String> = fresh.iter().map(|d| d.line().to_string()).collect();
    let eol = if content.contains("\r\n") { "\r\n" } else { "\n" };

    let mut out: Vec<&str> = Vec::new();
    let mut candidates: Vec<AssetDeclaration> = Vec::new();
    let mut block: Option<Vec<AssetDeclaration>> = None;
    let mut insert_at = 0;
    let mut state = BlockState::Before;

    for raw in content.split_inclusive('\n') {
        let line = raw.trim_end_matches(['\n', '\r']);
        match state {
            BlockState::Before => {
                out.push(raw);
                if RE_BLOCK_START.is_match(line) {
                    state = BlockState::Inside;
                }
            }
            BlockState::Inside => {
                if AssetDeclaration::is_list_item(line) {
                    if !fresh_lines.contains(line) {
                        candidates.extend(AssetDeclaration::parse(line));
                    }
                } else if !line.trim().is_empty() {
                    insert_at = out.len();
                    block = Some(build_block(fresh, &candidates, rules));
                    out.push(raw);
                    state = BlockState::After;
                }
            }
            BlockState::After => out.push(raw),
        }
    }

    let at_eof = matches!(state, BlockState::Inside);
    let declarations = match state {
        BlockState::Before => return None,
        // Block runs to the end of the file
        BlockState::Inside => {
            insert_at = out.len();
            build_block(fresh, &candidates, rules)
        }
        BlockState::After => block.unwrap_or_default(),
    };

    let mut text = String::with_capacity(content.len() + declarations.len() * 32);
    out[..insert_at].iter().for_each(|raw| text.push_str(raw));

    if at_eof {
        // Keep whether the file ends with a newline
        if !declarations.is_empty() {
            if !text.ends_with('\n') {
                text.push_str(eol);
            }
            let body: Vec<&str> = declarations.iter().map(AssetDeclaration::line).collect();
            text.push_str(&body.join(eol));
            if content.ends_with('\n') {
                text.push_str(eol);
            }
        }
    } else {
        for decl in &declarations {
            text.push_str(decl.line());
            text.push_str(eol);
        }
    }

    out[insert_at..].iter().for_each(|raw| text.push_str(raw));

    Some(Merged {
        content: text,
        declarations,
    })
}

/// Preservation pass plus sorting.
fn build_block(
    fresh: &[AssetDeclaration],
    candidates: &[AssetDeclaration],
    rules: &ExcludeRules,
) -> Vec<AssetDeclaration> {
    let preserved = candidates
        .iter()
        .filter(|c| c.package().is_some() || rules.matches(c.line()));

    let mut seen = FxHashSet::default();
    let mut block: Vec<AssetDeclaration> = fresh
        .iter()
        .chain(preserved)
        .filter(|d| seen.insert(d.line().to_string()))
        .cloned()
        .collect();

    sort_declarations(&mut block);
    block
}
