use anyhow::Result;
use clap::Parser;
use deck_audit::AuditConfig;
use std::path::PathBuf;

/// Audit deck list files for formatting and content issues.
#[derive(Parser)]
#[command(name = "deck-audit", version, about)]
struct Cli {
    /// Audit this sets directory instead of discovering it from CWD.
    #[arg(long)]
    root: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = AuditConfig::deck_lists();
    deck_audit::run(&config, cli.root.as_deref())
}
