//! Audit checks for deck list files.

use crate::discovery::{find_deck_files, find_set_dirs};
use crate::types::{
    AuditConfig, ContentCheck, FilenameCheck, Issue, IssueCategory, Stats, UnknownCard,
};
use anyhow::{Context, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use std::path::Path;

static HYPHEN_FORM_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"-(\d+)$").unwrap());

static MISSING_SPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\w)\((\d+)\)$").unwrap());

/// Check a file stem against the `NAME (N)` naming convention.
///
/// Flags a trailing `-N` (hyphen form) or a trailing `X(N)` with no space
/// before the parenthesis. The correct ` (N)` form, and stems with no copy
/// number at all, pass.
pub fn check_filename(stem: &str) -> FilenameCheck {
    if let Some(caps) = HYPHEN_FORM_RE.captures(stem) {
        let whole = caps.get(0).unwrap();
        let suggestion = format!("{} ({})", &stem[..whole.start()], &caps[1]);
        return FilenameCheck::HyphenForm { suggestion };
    }
    if let Some(caps) = MISSING_SPACE_RE.captures(stem) {
        let before = caps.get(1).unwrap();
        let suggestion = format!("{} ({})", &stem[..before.end()], &caps[2]);
        return FilenameCheck::MissingSpace { suggestion };
    }
    FilenameCheck::Ok
}

/// Check the content of one deck file against its stem.
///
/// An empty file short-circuits: no name comparison, no header detection.
/// The unknown-card scan inspects up to `config.unknown_lookahead` lines
/// after each unknown header; header lines inside the window are skipped
/// without ending it, and placeholder entries are excluded.
pub fn check_content(stem: &str, content: &str, config: &AuditConfig) -> ContentCheck {
    let lines: Vec<&str> = content.lines().collect();
    if lines.is_empty() {
        return ContentCheck::Empty;
    }

    let deck_name = lines[0].trim();
    let name_mismatch = (deck_name != stem).then(|| {
        format!(
            "Deck name '{}' doesn't match filename '{}'",
            deck_name, stem
        )
    });

    let has_headers = lines
        .iter()
        .any(|line| line.trim().starts_with(config.header_marker));

    let mut unknown_cards = Vec::new();
    for (i, line) in lines.iter().enumerate() {
        if !line.trim().starts_with(config.unknown_header) {
            continue;
        }
        let window_end = (i + 1 + config.unknown_lookahead).min(lines.len());
        for (j, card_line) in lines.iter().enumerate().take(window_end).skip(i + 1) {
            let card = card_line.trim();
            if card.is_empty() || card.starts_with(config.header_marker) {
                continue;
            }
            let lowered = card.to_lowercase();
            if config
                .placeholder_words
                .iter()
                .any(|word| lowered.contains(word))
            {
                continue;
            }
            unknown_cards.push(UnknownCard {
                line: j + 1,
                text: card.to_string(),
            });
        }
    }

    ContentCheck::Deck {
        name_mismatch,
        has_headers,
        unknown_cards,
    }
}

/// Accumulated results of one audit run.
#[derive(Debug, Clone, Default)]
pub struct AuditReport {
    pub stats: Stats,
    pub issues: Vec<Issue>,
}

impl AuditReport {
    fn issues_in(&self, category: IssueCategory) -> impl Iterator<Item = &Issue> {
        self.issues.iter().filter(move |i| i.category == category)
    }
}

/// Audit every deck file in one set directory, accumulating into `report`.
pub fn audit_set(set_dir: &Path, config: &AuditConfig, report: &mut AuditReport) -> Result<()> {
    let set_name = set_dir
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();

    for path in find_deck_files(set_dir, config) {
        report.stats.total_files += 1;

        let stem = path
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_default();
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        let file = format!("{}/{}", set_name, file_name);

        let filename_message = match check_filename(&stem) {
            FilenameCheck::Ok => None,
            FilenameCheck::HyphenForm { suggestion } => {
                Some(format!("Uses hyphen format: should be '{}'", suggestion))
            }
            FilenameCheck::MissingSpace { suggestion } => Some(format!(
                "Missing space before parens: should be '{}'",
                suggestion
            )),
        };
        if let Some(message) = filename_message {
            report.stats.bad_naming += 1;
            report.issues.push(Issue {
                category: IssueCategory::Filename,
                file: file.clone(),
                line: 0,
                message,
            });
        }

        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("reading deck file {}", path.display()))?;

        match check_content(&stem, &content, config) {
            ContentCheck::Empty => {
                report.issues.push(Issue {
                    category: IssueCategory::DeckName,
                    file,
                    line: 0,
                    message: "Empty file".to_string(),
                });
            }
            ContentCheck::Deck {
                name_mismatch,
                has_headers,
                unknown_cards,
            } => {
                if let Some(message) = name_mismatch {
                    report.issues.push(Issue {
                        category: IssueCategory::DeckName,
                        file: file.clone(),
                        line: 0,
                        message,
                    });
                }
                if has_headers {
                    report.stats.formatted += 1;
                } else {
                    report.stats.raw += 1;
                }
                for card in unknown_cards {
                    report.stats.unknown_cards += 1;
                    report.issues.push(Issue {
                        category: IssueCategory::UnknownCard,
                        file: file.clone(),
                        line: card.line,
                        message: card.text,
                    });
                }
            }
        }
    }

    Ok(())
}

/// Audit every set directory under the root and return the combined report.
pub fn audit_tree(root: &Path, config: &AuditConfig) -> Result<AuditReport> {
    let mut report = AuditReport::default();
    for set_dir in find_set_dirs(root, config)? {
        audit_set(&set_dir, config, &mut report)?;
    }
    Ok(report)
}

const CATEGORY_TITLES: &[(IssueCategory, &str)] = &[
    (IssueCategory::Filename, "FILENAME FORMAT ISSUES"),
    (IssueCategory::DeckName, "DECK NAME MISMATCHES"),
    (IssueCategory::UnknownCard, "UNKNOWN CARD ENTRIES"),
];

/// Render the full report: header, statistics, then one block per non-empty
/// issue category, or a confirmation line when nothing was flagged.
pub fn render_report(report: &AuditReport) -> String {
    let mut out = String::new();
    out.push_str("=== DECK LIST AUDIT ===\n\n");
    out.push_str(&format!("Total files: {}\n", report.stats.total_files));
    out.push_str(&format!("Formatted: {}\n", report.stats.formatted));
    out.push_str(&format!("Raw: {}\n", report.stats.raw));
    out.push_str(&format!("Bad naming: {}\n", report.stats.bad_naming));
    out.push_str(&format!("Unknown cards: {}\n", report.stats.unknown_cards));
    out.push('\n');

    for (category, title) in CATEGORY_TITLES {
        let mut entries = report.issues_in(*category).peekable();
        if entries.peek().is_none() {
            continue;
        }
        out.push_str(&format!("=== {} ===\n", title));
        for issue in entries {
            out.push_str(&format!("  {}\n", issue.render()));
        }
        out.push('\n');
    }

    if report.issues.is_empty() {
        out.push_str("\u{2713} No issues found!\n");
    }
    out
}
