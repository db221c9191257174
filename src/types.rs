//! Core types for deck list auditing.

/// Configuration for deck file discovery and auditing.
///
/// The production defaults live in [`AuditConfig::deck_lists`]; tests build
/// variants with different markers and knobs.
#[derive(Debug, Clone)]
pub struct AuditConfig {
    /// Name of the directory holding one subdirectory per set.
    /// Root discovery walks up from CWD until it finds this.
    pub sets_dir: &'static str,

    /// Set-level subdirectory names excluded from scanning
    /// (the tooling scripts live next to the deck sets).
    pub skip_dirs: Vec<&'static str>,

    /// Extension of deck list files, without the dot.
    pub deck_extension: &'static str,

    /// Marker beginning a section-header line (after trimming).
    pub header_marker: &'static str,

    /// Header introducing entries that need manual review.
    pub unknown_header: &'static str,

    /// How many lines after an unknown header to inspect.
    pub unknown_lookahead: usize,

    /// Lowercase substrings marking a placeholder entry under an unknown
    /// header ("Random rare or mythic rare" and friends), not a real card.
    pub placeholder_words: Vec<&'static str>,
}

impl AuditConfig {
    /// Config matching the deck repository layout: sets under `etc/`,
    /// `parsing-scripts` excluded, `//`-style section headers.
    pub fn deck_lists() -> Self {
        Self {
            sets_dir: "etc",
            skip_dirs: vec!["parsing-scripts"],
            deck_extension: "txt",
            header_marker: "//",
            unknown_header: "//Unknown",
            unknown_lookahead: 10,
            placeholder_words: vec!["random", "rare"],
        }
    }
}

/// Issue categories, in report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueCategory {
    Filename,
    DeckName,
    UnknownCard,
}

/// An issue found during auditing.
#[derive(Debug, Clone)]
pub struct Issue {
    pub category: IssueCategory,
    /// `<set>/<filename>` location prefix.
    pub file: String,
    /// 1-based line number, 0 when the issue is not tied to a line.
    pub line: usize,
    pub message: String,
}

impl Issue {
    /// Render as a single report line: `set/file: message` or
    /// `set/file:line: message` when a line number applies.
    pub fn render(&self) -> String {
        if self.line > 0 {
            format!("{}:{}: {}", self.file, self.line, self.message)
        } else {
            format!("{}: {}", self.file, self.message)
        }
    }
}

/// Counters accumulated over one audit run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Stats {
    pub total_files: usize,
    /// Files with at least one section header.
    pub formatted: usize,
    /// Files with no section headers. Empty files count as neither.
    pub raw: usize,
    /// Files with a filename-format violation.
    pub bad_naming: usize,
    /// Flagged unknown-card lines, across all files.
    pub unknown_cards: usize,
}

/// Result of the filename-format check on a file stem.
///
/// At most one of the two violations applies; the hyphen form is checked
/// first, matching the original audit order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilenameCheck {
    Ok,
    /// `NAME-3.txt` where `NAME (3).txt` was meant.
    HyphenForm { suggestion: String },
    /// `NAME(3).txt` missing the space before the parenthesis.
    MissingSpace { suggestion: String },
}

/// A flagged line under an unknown-cards header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCard {
    /// 1-based line number within the deck file.
    pub line: usize,
    /// Trimmed line text.
    pub text: String,
}

/// Result of the content check on one deck file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentCheck {
    Empty,
    Deck {
        /// Mismatch message when the first line differs from the stem.
        name_mismatch: Option<String>,
        has_headers: bool,
        unknown_cards: Vec<UnknownCard>,
    },
}
