//! Global search command.
//!
//! Display truncates each group to 5 entries; the ranker itself never
//! truncates, so the total footer reflects the full match count.

use anyhow::Result;
use colored::Colorize;

use crate::fs::RoadmapStore;
use crate::search::{SearchHit, SearchState};

/// Entries shown per group.
const GROUP_DISPLAY_LIMIT: usize = 5;

/// Show the "N total matches" footer above this many matches.
const TOTAL_FOOTER_THRESHOLD: usize = 15;

pub fn execute(query: String) -> Result<()> {
    let store = RoadmapStore::open_current()?;
    let snapshot = store.snapshot()?;

    let mut state = SearchState::new();
    state.set_query(&query, &snapshot);

    if !state.has_results() {
        println!("No matches for '{}'.", query.trim());
        return Ok(());
    }

    let results = state.grouped_results();
    println!();
    print_group("Capabilities", &results.capabilities);
    print_group("Milestones", &results.milestones);
    print_group("Quick wins", &results.quick_wins);

    if state.total_results() > TOTAL_FOOTER_THRESHOLD {
        println!("{}", format!("{} total matches", state.total_results()).dimmed());
        println!();
    }

    Ok(())
}

fn print_group(heading: &str, hits: &[SearchHit]) {
    if hits.is_empty() {
        return;
    }

    println!("{}", heading.bold());
    for hit in hits.iter().take(GROUP_DISPLAY_LIMIT) {
        let status = hit
            .status
            .as_ref()
            .map(|s| format!(" [{s}]"))
            .unwrap_or_default();
        println!(
            "  {}{}  {}",
            hit.name,
            status.dimmed(),
            hit.path.cyan()
        );
    }
    if hits.len() > GROUP_DISPLAY_LIMIT {
        println!("  {}", format!("... and {} more", hits.len() - GROUP_DISPLAY_LIMIT).dimmed());
    }
    println!();
}
