//! Roadmap seed file import.
//!
//! `cairn init roadmap.yaml` seeds the collections from a single YAML
//! document. Definitions carry explicit ids so milestones can reference
//! each other's dependencies within the file.

use anyhow::{bail, Context, Result};
use chrono::Utc;
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;

use crate::models::{
    Capability, MaturityLevel, Milestone, MilestoneStatus, Priority, QuickWin, QuickWinStatus,
};
use crate::validation::validate_id;

#[derive(Debug, Deserialize)]
pub struct RoadmapFile {
    #[serde(default)]
    pub capabilities: Vec<CapabilityDefinition>,
    #[serde(default)]
    pub milestones: Vec<MilestoneDefinition>,
    #[serde(default)]
    pub quick_wins: Vec<QuickWinDefinition>,
}

#[derive(Debug, Deserialize)]
pub struct CapabilityDefinition {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub owner: Option<String>,
    pub current_level: MaturityLevel,
    pub target_level: MaturityLevel,
    #[serde(default)]
    pub priority: Priority,
}

#[derive(Debug, Deserialize)]
pub struct MilestoneDefinition {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub capability: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default = "default_milestone_status")]
    pub status: MilestoneStatus,
    #[serde(default)]
    pub dependencies: Vec<String>,
    #[serde(default)]
    pub priority: Priority,
}

fn default_milestone_status() -> MilestoneStatus {
    MilestoneStatus::NotStarted
}

#[derive(Debug, Deserialize)]
pub struct QuickWinDefinition {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub owner: Option<String>,
    #[serde(default = "default_quick_win_status")]
    pub status: QuickWinStatus,
    #[serde(default)]
    pub priority: Priority,
}

fn default_quick_win_status() -> QuickWinStatus {
    QuickWinStatus::Planned
}

/// Parse and validate a roadmap seed file.
pub fn load_roadmap_file(path: &Path) -> Result<RoadmapFile> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read roadmap file: {}", path.display()))?;
    let file: RoadmapFile = serde_yaml::from_str(&content)
        .with_context(|| format!("Failed to parse roadmap file: {}", path.display()))?;
    validate(&file)?;
    Ok(file)
}

/// Structural validation: well-formed unique ids, resolvable capability
/// references, no self-dependencies. Dangling milestone dependency ids are
/// allowed (they are inert at analysis time).
fn validate(file: &RoadmapFile) -> Result<()> {
    let mut seen: HashSet<&str> = HashSet::new();

    let all_ids = file
        .capabilities
        .iter()
        .map(|c| c.id.as_str())
        .chain(file.milestones.iter().map(|m| m.id.as_str()))
        .chain(file.quick_wins.iter().map(|q| q.id.as_str()));

    for id in all_ids {
        validate_id(id)?;
        if !seen.insert(id) {
            bail!("Duplicate id in roadmap file: {id}");
        }
    }

    let capability_ids: HashSet<&str> =
        file.capabilities.iter().map(|c| c.id.as_str()).collect();

    for ms in &file.milestones {
        if let Some(cap) = &ms.capability {
            if !capability_ids.contains(cap.as_str()) {
                bail!(
                    "Milestone '{}' references unknown capability: {cap}",
                    ms.id
                );
            }
        }
        if ms.dependencies.iter().any(|dep| dep == &ms.id) {
            bail!("Milestone '{}' cannot depend on itself", ms.id);
        }
    }

    Ok(())
}

/// Materialize a validated roadmap file into entities.
pub fn into_entities(file: RoadmapFile) -> (Vec<Capability>, Vec<Milestone>, Vec<QuickWin>) {
    let now = Utc::now();

    let capabilities = file
        .capabilities
        .into_iter()
        .map(|def| Capability {
            id: def.id,
            name: def.name,
            description: def.description,
            owner: def.owner,
            current_level: def.current_level,
            target_level: def.target_level,
            priority: def.priority,
            created_at: now,
            updated_at: now,
        })
        .collect();

    let milestones = file
        .milestones
        .into_iter()
        .map(|def| Milestone {
            id: def.id,
            capability_id: def.capability,
            name: def.name,
            description: def.description,
            notes: def.notes,
            status: def.status,
            dependencies: def.dependencies,
            priority: def.priority,
            created_at: now,
            updated_at: now,
            completed_at: if def.status == MilestoneStatus::Completed {
                Some(now)
            } else {
                None
            },
        })
        .collect();

    let quick_wins = file
        .quick_wins
        .into_iter()
        .map(|def| QuickWin {
            id: def.id,
            name: def.name,
            description: def.description,
            owner: def.owner,
            status: def.status,
            priority: def.priority,
            created_at: now,
            updated_at: now,
        })
        .collect();

    (capabilities, milestones, quick_wins)
}
