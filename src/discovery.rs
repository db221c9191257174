//! Deck file discovery: find the sets root, set directories, and deck files.

use crate::types::AuditConfig;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Find the sets root by walking up from CWD.
///
/// Strategy:
/// - Pass 1: Look for a directory containing `config.sets_dir` and return
///   that subdirectory
/// - Pass 2: Fall back to CWD with a warning
pub fn find_root(config: &AuditConfig) -> PathBuf {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));

    let mut dir = cwd.as_path();
    loop {
        let candidate = dir.join(config.sets_dir);
        if candidate.is_dir() {
            return candidate;
        }
        match dir.parent() {
            Some(p) if p != dir => dir = p,
            _ => break,
        }
    }

    eprintln!(
        "Warning: no '{}' directory found, auditing current directory",
        config.sets_dir
    );
    cwd
}

/// List set subdirectories under the root, lexically sorted, excluding the
/// names in `config.skip_dirs`.
pub fn find_set_dirs(root: &Path, config: &AuditConfig) -> Result<Vec<PathBuf>> {
    let entries = std::fs::read_dir(root)
        .with_context(|| format!("reading sets root {}", root.display()))?;

    let mut dirs = Vec::new();
    for entry in entries {
        let path = entry
            .with_context(|| format!("reading entry in {}", root.display()))?
            .path();
        if !path.is_dir() {
            continue;
        }
        if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
            if config.skip_dirs.iter().any(|skip| *skip == name) {
                continue;
            }
        }
        dirs.push(path);
    }
    dirs.sort();
    Ok(dirs)
}

/// List deck files in a set directory, lexically sorted by filename.
pub fn find_deck_files(set_dir: &Path, config: &AuditConfig) -> Vec<PathBuf> {
    let pattern = set_dir
        .join(format!("*.{}", config.deck_extension))
        .to_string_lossy()
        .to_string();

    let mut files = Vec::new();
    if let Ok(entries) = glob::glob(&pattern) {
        for entry in entries.flatten() {
            if entry.is_file() {
                files.push(entry);
            }
        }
    }
    files.sort();
    files
}
