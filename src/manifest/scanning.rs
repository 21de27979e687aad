//! Directory scanning utilities producing sorted, suffix-filtered listings.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// List the names in `dir` ending with `suffix`, sorted lexicographically.
///
/// The match is a plain name-ending check: case-sensitive, dotfiles included,
/// no file-type distinction. A listing failure (missing or unreadable
/// directory) propagates with the offending path attached; callers treat it
/// as fatal.
pub fn scan_suffix(dir: &Path, suffix: &str) -> Result<Vec<String>> {
    let entries =
        fs::read_dir(dir).with_context(|| format!("failed to read {}", dir.display()))?;

    let mut names = Vec::new();
    for entry in entries {
        let entry = entry.with_context(|| format!("failed to read entry in {}", dir.display()))?;
        let name = entry.file_name().to_string_lossy().into_owned();
        if name.ends_with(suffix) {
            names.push(name);
        }
    }

    names.sort();
    Ok(names)
}

/// Like [`scan_suffix`], but an absent directory yields an empty listing.
///
/// Used for the optional icon buckets only; every other scan is mandatory.
pub fn scan_suffix_optional(dir: &Path, suffix: &str) -> Result<Vec<String>> {
    if !dir.exists() {
        return Ok(Vec::new());
    }
    scan_suffix(dir, suffix)
}
