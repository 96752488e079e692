//! Capability management commands.

use anyhow::{bail, Result};
use colored::Colorize;

use crate::fs::RoadmapStore;
use crate::models::{Capability, MaturityLevel, Priority};

pub fn add(
    name: String,
    current_level: u8,
    target_level: u8,
    owner: Option<String>,
    description: Option<String>,
    priority: Option<Priority>,
) -> Result<()> {
    let store = RoadmapStore::open_current()?;
    let mut capabilities = store.load_capabilities()?;

    let current = MaturityLevel::new(current_level)?;
    let target = MaturityLevel::new(target_level)?;
    if target < current {
        bail!("Target level {target} is below current level {current}");
    }

    let mut cap = Capability::new(name, current, target);
    cap.description = description;
    cap.owner = owner;
    if let Some(priority) = priority {
        cap.priority = priority;
    }
    let id = cap.id.clone();

    capabilities.push(cap);
    store.save_capabilities(&capabilities)?;

    println!("{} created capability {}", "✓".green(), id.bold());
    Ok(())
}

pub fn set_level(id: String, level: u8) -> Result<()> {
    let store = RoadmapStore::open_current()?;
    let mut capabilities = store.load_capabilities()?;

    let Some(cap) = capabilities.iter_mut().find(|c| c.id == id) else {
        bail!("Capability not found: {id}");
    };

    let level = MaturityLevel::new(level)?;
    if level > cap.target_level {
        bail!("Level {level} is above target level {}", cap.target_level);
    }
    cap.set_current_level(level);

    store.save_capabilities(&capabilities)?;

    println!("{} {} is now at L{level}", "✓".green(), id.bold());
    Ok(())
}

pub fn list() -> Result<()> {
    let store = RoadmapStore::open_current()?;
    let capabilities = store.load_capabilities()?;

    if capabilities.is_empty() {
        println!("No capabilities yet. Add one with 'cairn capability add'.");
        return Ok(());
    }

    println!();
    println!("Capabilities:");
    println!("=============");
    for cap in &capabilities {
        let levels = format!("L{} -> L{}", cap.current_level, cap.target_level);
        println!(
            "  {}  {}  {}  [{}]",
            cap.id.dimmed(),
            cap.name.bold(),
            levels.cyan(),
            cap.priority
        );
    }
    println!();

    Ok(())
}

pub fn show(id: String) -> Result<()> {
    let store = RoadmapStore::open_current()?;
    let capabilities = store.load_capabilities()?;

    let Some(cap) = capabilities.iter().find(|c| c.id == id) else {
        bail!("Capability not found: {id}");
    };

    println!();
    println!("{}", cap.name.bold());
    println!("  id:       {}", cap.id);
    println!("  levels:   L{} -> L{}", cap.current_level, cap.target_level);
    println!("  priority: {}", cap.priority);
    if let Some(owner) = &cap.owner {
        println!("  owner:    {owner}");
    }
    if let Some(description) = &cap.description {
        println!("  about:    {description}");
    }

    let milestones = store.load_milestones()?;
    let owned: Vec<_> = milestones
        .iter()
        .filter(|ms| ms.capability_id.as_deref() == Some(cap.id.as_str()))
        .collect();
    if !owned.is_empty() {
        println!();
        println!("  Milestones:");
        for ms in owned {
            println!("    {}  {} [{}]", ms.id.dimmed(), ms.name, ms.status);
        }
    }
    println!();

    Ok(())
}
