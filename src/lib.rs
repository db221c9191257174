//! Formatting and content audit for plain-text deck list files.
//!
//! Walks a root directory of set subdirectories, applies four checks to each
//! deck file (filename convention, deck-name/filename match, section-header
//! presence, unknown-card entries), and prints a flat report.

mod audit;
mod discovery;
mod types;

pub use audit::{AuditReport, audit_set, audit_tree, check_content, check_filename, render_report};
pub use discovery::{find_deck_files, find_root, find_set_dirs};
pub use types::{
    AuditConfig, ContentCheck, FilenameCheck, Issue, IssueCategory, Stats, UnknownCard,
};

use anyhow::Result;
use std::path::Path;

/// Run the full audit with the given configuration.
///
/// Findings go to stdout and never affect the result; only operational
/// failures (unreadable root or file) return an error.
pub fn run(config: &AuditConfig, root_override: Option<&Path>) -> Result<()> {
    let root = match root_override {
        Some(p) => p.to_path_buf(),
        None => find_root(config),
    };
    let report = audit_tree(&root, config)?;
    print!("{}", render_report(&report));
    Ok(())
}
