//! Dependency report command.

use anyhow::Result;
use colored::Colorize;
use std::collections::HashMap;

use crate::analysis::analyze_dependencies;
use crate::fs::RoadmapStore;

pub fn execute(capability: Option<String>) -> Result<()> {
    let store = RoadmapStore::open_current()?;
    let milestones = store.load_milestones()?;

    let report = analyze_dependencies(&milestones, capability.as_deref());

    let names: HashMap<&str, &str> = milestones
        .iter()
        .map(|ms| (ms.id.as_str(), ms.name.as_str()))
        .collect();

    println!();
    println!("Dependency Report:");
    println!("==================");
    if let Some(cap) = &capability {
        println!("  scope: capability {cap}");
    }
    println!("  milestones: {}", report.total_milestones);
    println!(
        "  blocked:    {}",
        if report.blocked_count > 0 {
            report.blocked_count.to_string().red().bold()
        } else {
            report.blocked_count.to_string().green()
        }
    );
    println!();

    if report.blocked_chains.is_empty() {
        println!("{} no milestones are blocked by incomplete dependencies", "✓".green());
        println!();
        return Ok(());
    }

    for chain in &report.blocked_chains {
        println!("{} {}", "✗".red().bold(), chain.milestone_name.bold());
        for dep_id in &chain.blocked_dependencies {
            let label = names
                .get(dep_id.as_str())
                .map(|name| format!("{name} ({dep_id})"))
                .unwrap_or_else(|| format!("{dep_id} (not in snapshot)"));
            println!("    waiting on {}", label.yellow());
        }
    }

    println!();
    println!("{}", report.summary.dimmed());
    println!();

    Ok(())
}
