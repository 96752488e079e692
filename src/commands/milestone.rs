//! Milestone management commands.

use anyhow::{bail, Result};
use colored::Colorize;

use crate::fs::RoadmapStore;
use crate::models::{Milestone, MilestoneStatus, Priority};

pub fn add(
    name: String,
    capability: Option<String>,
    depends: Vec<String>,
    notes: Option<String>,
    priority: Option<Priority>,
) -> Result<()> {
    let store = RoadmapStore::open_current()?;
    let mut milestones = store.load_milestones()?;

    if let Some(cap_id) = &capability {
        let capabilities = store.load_capabilities()?;
        if !capabilities.iter().any(|c| &c.id == cap_id) {
            bail!("Capability not found: {cap_id}");
        }
    }

    let mut ms = Milestone::new(name, capability);
    ms.notes = notes;
    if let Some(priority) = priority {
        ms.priority = priority;
    }
    for dep in depends {
        if !milestones.iter().any(|m| m.id == dep) {
            println!(
                "{} dependency '{dep}' does not match any milestone yet",
                "!".yellow()
            );
        }
        ms.add_dependency(dep)?;
    }
    let id = ms.id.clone();

    milestones.push(ms);
    store.save_milestones(&milestones)?;

    println!("{} created milestone {}", "✓".green(), id.bold());
    Ok(())
}

fn status_indicator(status: MilestoneStatus) -> colored::ColoredString {
    match status {
        MilestoneStatus::NotStarted => "○".white().dimmed(),
        MilestoneStatus::InProgress => "●".blue().bold(),
        MilestoneStatus::Completed => "✓".green().bold(),
        MilestoneStatus::Blocked => "✗".red().bold(),
    }
}

pub fn list(status: Option<MilestoneStatus>) -> Result<()> {
    let store = RoadmapStore::open_current()?;
    let milestones = store.load_milestones()?;

    let filtered: Vec<_> = milestones
        .iter()
        .filter(|ms| status.is_none_or(|s| ms.status == s))
        .collect();

    if filtered.is_empty() {
        println!("No milestones found.");
        return Ok(());
    }

    println!();
    println!("Milestones:");
    println!("===========");
    for ms in filtered {
        let deps = if ms.dependencies.is_empty() {
            String::new()
        } else {
            format!("  deps: {}", ms.dependencies.join(", "))
        };
        println!(
            "  {} {}  {}{}",
            status_indicator(ms.status),
            ms.id.dimmed(),
            ms.name.bold(),
            deps.dimmed()
        );
    }
    println!();

    Ok(())
}

pub fn set_status(id: String, status: MilestoneStatus) -> Result<()> {
    let store = RoadmapStore::open_current()?;
    let mut milestones = store.load_milestones()?;

    let Some(ms) = milestones.iter_mut().find(|m| m.id == id) else {
        bail!("Milestone not found: {id}");
    };

    ms.set_status(status);

    store.save_milestones(&milestones)?;

    println!("{} {} is now {}", "✓".green(), id.bold(), status);
    Ok(())
}

pub fn link(id: String, dependency: String) -> Result<()> {
    let store = RoadmapStore::open_current()?;
    let mut milestones = store.load_milestones()?;

    if !milestones.iter().any(|m| m.id == dependency) {
        println!(
            "{} dependency '{dependency}' does not match any milestone yet",
            "!".yellow()
        );
    }

    let Some(ms) = milestones.iter_mut().find(|m| m.id == id) else {
        bail!("Milestone not found: {id}");
    };

    ms.add_dependency(dependency.clone())?;

    store.save_milestones(&milestones)?;

    println!("{} {} now depends on {}", "✓".green(), id.bold(), dependency);
    Ok(())
}

pub fn unlink(id: String, dependency: String) -> Result<()> {
    let store = RoadmapStore::open_current()?;
    let mut milestones = store.load_milestones()?;

    let Some(ms) = milestones.iter_mut().find(|m| m.id == id) else {
        bail!("Milestone not found: {id}");
    };

    ms.remove_dependency(&dependency);

    store.save_milestones(&milestones)?;

    println!("{} removed dependency {} from {}", "✓".green(), dependency, id.bold());
    Ok(())
}
