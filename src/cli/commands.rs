use std::io::IsTerminal;
use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::indexer::load_index;
use crate::models::{Manual, SearchOutcome};
use crate::navigator::{self, CommandViewer, NavRequest};
use crate::render::{build_records, format_record};
use crate::search::SessionState;
use crate::tui;
use crate::utils::get_manuals_dir;

#[derive(Parser)]
#[command(name = "manual-search")]
#[command(version = "0.1.0")]
#[command(about = "Search the reference manuals and open the matching PDF page", long_about = None)]
pub struct Cli {
    /// Directory holding the index files and manual PDFs
    /// (defaults to $MANUAL_SEARCH_DIR, then the current directory)
    #[arg(long, global = true)]
    pub dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search the indexes and print matching entries
    Search {
        query: String,
        /// Restrict results to one manual (id like "denki" or label like "電気編")
        #[arg(long)]
        part: Option<String>,
    },
    /// Open a manual's PDF at page 1 (kenchiku, denki or kikai)
    Open { manual: String },
    /// Show per-manual index statistics
    Stats,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    let dir = match &cli.dir {
        Some(dir) => dir.clone(),
        None => get_manuals_dir()?,
    };

    match &cli.command {
        Some(Commands::Search { query, part }) => run_search(&dir, query, part.as_deref()),
        Some(Commands::Open { manual }) => run_open(manual),
        Some(Commands::Stats) => show_stats(&dir),
        None => tui::run_interactive(dir),
    }
}

fn run_search(dir: &Path, query: &str, part: Option<&str>) -> Result<()> {
    let part_label = match part {
        Some(part) => Some(resolve_part(part)?),
        None => None,
    };

    let mut session = SessionState::new(load_index(dir));
    match session.search(query, part_label) {
        SearchOutcome::NoQuery => println!("Enter a keyword to search."),
        SearchOutcome::NoMatches => println!("No matching entries."),
        SearchOutcome::Hits(hits) => {
            let color = std::io::stdout().is_terminal();
            for record in build_records(&hits, &session.keyword) {
                println!("{}", format_record(&record, color));
            }
        }
    }

    Ok(())
}

/// Accepts a short id or a part label; unknown values are a user error.
fn resolve_part(input: &str) -> Result<&'static str> {
    match Manual::from_id(input).or_else(|| Manual::from_label(input)) {
        Some(manual) => Ok(manual.label()),
        None => anyhow::bail!("Unknown manual {:?} (expected kenchiku, denki or kikai)", input),
    }
}

fn run_open(manual: &str) -> Result<()> {
    // No keyword is active in one-shot mode; the shortcut opens page 1
    let target = navigator::resolve(&NavRequest::ManualId(manual.to_string()), "")?;
    let mut viewer = CommandViewer::new();
    navigator::navigate(&mut viewer, &target)
}

fn show_stats(dir: &Path) -> Result<()> {
    let items = load_index(dir);

    println!("Manual Index Statistics");
    println!("================================");
    println!("Total entries: {}", items.len());
    for manual in Manual::ALL {
        let count = items.iter().filter(|item| item.part == manual.label()).count();
        println!("  {} ({}): {}", manual.label(), manual.id(), count);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_part_accepts_id_and_label() {
        assert_eq!(resolve_part("denki").unwrap(), "電気編");
        assert_eq!(resolve_part("電気編").unwrap(), "電気編");
    }

    #[test]
    fn test_resolve_part_rejects_unknown() {
        assert!(resolve_part("doboku").is_err());
    }
}
