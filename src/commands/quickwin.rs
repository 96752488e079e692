//! Quick win management commands.

use anyhow::{bail, Result};
use colored::Colorize;

use crate::fs::RoadmapStore;
use crate::models::{Priority, QuickWin, QuickWinStatus};

pub fn add(name: String, owner: Option<String>, priority: Option<Priority>) -> Result<()> {
    let store = RoadmapStore::open_current()?;
    let mut quick_wins = store.load_quick_wins()?;

    let mut qw = QuickWin::new(name);
    qw.owner = owner;
    if let Some(priority) = priority {
        qw.priority = priority;
    }
    let id = qw.id.clone();

    quick_wins.push(qw);
    store.save_quick_wins(&quick_wins)?;

    println!("{} created quick win {}", "✓".green(), id.bold());
    Ok(())
}

pub fn list() -> Result<()> {
    let store = RoadmapStore::open_current()?;
    let quick_wins = store.load_quick_wins()?;

    if quick_wins.is_empty() {
        println!("No quick wins yet. Add one with 'cairn quickwin add'.");
        return Ok(());
    }

    println!();
    println!("Quick wins:");
    println!("===========");
    for qw in &quick_wins {
        let marker = match qw.status {
            QuickWinStatus::Planned => "○".white().dimmed(),
            QuickWinStatus::InProgress => "●".blue().bold(),
            QuickWinStatus::Done => "✓".green().bold(),
        };
        let owner = qw
            .owner
            .as_ref()
            .map(|o| format!("  ({o})"))
            .unwrap_or_default();
        println!(
            "  {} {}  {}{}",
            marker,
            qw.id.dimmed(),
            qw.name.bold(),
            owner.dimmed()
        );
    }
    println!();

    Ok(())
}

pub fn set_status(id: String, status: QuickWinStatus) -> Result<()> {
    let store = RoadmapStore::open_current()?;
    let mut quick_wins = store.load_quick_wins()?;

    let Some(qw) = quick_wins.iter_mut().find(|q| q.id == id) else {
        bail!("Quick win not found: {id}");
    };

    qw.set_status(status);

    store.save_quick_wins(&quick_wins)?;

    println!("{} {} is now {}", "✓".green(), id.bold(), status);
    Ok(())
}
