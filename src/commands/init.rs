//! Initialize the `.cairn/` data directory, optionally seeding it from a
//! roadmap YAML file.

use anyhow::{Context, Result};
use colored::Colorize;
use std::path::PathBuf;

use crate::fs::{DataDir, RoadmapStore};
use crate::import::{into_entities, load_roadmap_file};

pub fn execute(roadmap_path: Option<PathBuf>, clean: bool) -> Result<()> {
    let cwd = std::env::current_dir().context("Failed to resolve current directory")?;
    let dir = DataDir::new(&cwd);

    if clean && dir.exists() {
        dir.remove()?;
        println!("{} removed existing .cairn/ directory", "✓".yellow());
    }

    dir.initialize()?;
    println!("{} initialized .cairn/ directory", "✓".green());

    if let Some(path) = roadmap_path {
        let file = load_roadmap_file(&path)?;
        let (capabilities, milestones, quick_wins) = into_entities(file);

        let store = RoadmapStore::open(&cwd)?;
        store.save_capabilities(&capabilities)?;
        store.save_milestones(&milestones)?;
        store.save_quick_wins(&quick_wins)?;

        println!(
            "{} imported {} capabilities, {} milestones, {} quick wins from {}",
            "✓".green(),
            capabilities.len(),
            milestones.len(),
            quick_wins.len(),
            path.display()
        );
    }

    Ok(())
}
