use anyhow::{bail, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::priority::Priority;

/// Generate a stable entity id from a prefix and display name.
///
/// Slug plus timestamp plus a short uuid suffix so that two items created
/// in the same second with the same name still get distinct ids.
pub fn generate_id(prefix: &str, name: &str) -> String {
    let slug: String = name
        .to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { '-' })
        .collect::<String>()
        .split('-')
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("-");

    let uuid_short = uuid::Uuid::new_v4()
        .to_string()
        .chars()
        .take(8)
        .collect::<String>();

    format!("{prefix}-{slug}-{}-{uuid_short}", Utc::now().timestamp())
}

/// Status of a milestone.
///
/// Milestones are mutated directly by the command surface; there is no
/// transition state machine. `Blocked` is the only status the dependency
/// analyzer cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MilestoneStatus {
    NotStarted,
    InProgress,
    Completed,
    Blocked,
}

impl std::fmt::Display for MilestoneStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MilestoneStatus::NotStarted => write!(f, "not_started"),
            MilestoneStatus::InProgress => write!(f, "in_progress"),
            MilestoneStatus::Completed => write!(f, "completed"),
            MilestoneStatus::Blocked => write!(f, "blocked"),
        }
    }
}

impl std::str::FromStr for MilestoneStatus {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "not_started" => Ok(MilestoneStatus::NotStarted),
            "in_progress" => Ok(MilestoneStatus::InProgress),
            "completed" => Ok(MilestoneStatus::Completed),
            "blocked" => Ok(MilestoneStatus::Blocked),
            _ => anyhow::bail!(
                "Invalid milestone status: {s}. Use: not_started, in_progress, completed, blocked"
            ),
        }
    }
}

/// A deliverable belonging to a capability, with zero or more dependency
/// references to other milestones by id.
///
/// Dependency ids that do not resolve in the current snapshot are inert;
/// the analyzer treats them as never-completed blockers rather than errors.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Milestone {
    pub id: String,
    pub capability_id: Option<String>,
    pub name: String,
    pub description: Option<String>,
    pub notes: Option<String>,
    pub status: MilestoneStatus,
    #[serde(default)]
    pub dependencies: Vec<String>,
    #[serde(default)]
    pub priority: Priority,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
}

impl Milestone {
    pub fn new(name: String, capability_id: Option<String>) -> Self {
        let now = Utc::now();
        let id = generate_id("ms", &name);

        Self {
            id,
            capability_id,
            name,
            description: None,
            notes: None,
            status: MilestoneStatus::NotStarted,
            dependencies: Vec::new(),
            priority: Priority::default(),
            created_at: now,
            updated_at: now,
            completed_at: None,
        }
    }

    /// Add a dependency reference. Rejects self-references; duplicate ids
    /// are ignored.
    pub fn add_dependency(&mut self, milestone_id: String) -> Result<()> {
        if milestone_id == self.id {
            bail!("Milestone '{}' cannot depend on itself", self.id);
        }
        if !self.dependencies.contains(&milestone_id) {
            self.dependencies.push(milestone_id);
            self.updated_at = Utc::now();
        }
        Ok(())
    }

    pub fn remove_dependency(&mut self, milestone_id: &str) {
        if let Some(pos) = self.dependencies.iter().position(|id| id == milestone_id) {
            self.dependencies.remove(pos);
            self.updated_at = Utc::now();
        }
    }

    pub fn set_status(&mut self, status: MilestoneStatus) {
        self.status = status;
        self.completed_at = if status == MilestoneStatus::Completed {
            Some(Utc::now())
        } else {
            None
        };
        self.updated_at = Utc::now();
    }

    pub fn set_notes(&mut self, notes: Option<String>) {
        self.notes = notes;
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_generate_id_slugifies_name() {
        let id = generate_id("ms", "Automate Shift Reports");
        assert!(id.starts_with("ms-automate-shift-reports-"));
    }

    #[test]
    fn test_generate_id_unique_for_same_name() {
        let a = generate_id("ms", "Same Name");
        let b = generate_id("ms", "Same Name");
        assert_ne!(a, b);
    }

    #[test]
    fn test_status_serde_names() {
        let json = serde_json::to_string(&MilestoneStatus::NotStarted).unwrap();
        assert_eq!(json, "\"not_started\"");
        let status: MilestoneStatus = serde_json::from_str("\"blocked\"").unwrap();
        assert_eq!(status, MilestoneStatus::Blocked);
    }

    #[test]
    fn test_status_from_str_accepts_dashes() {
        assert_eq!(
            MilestoneStatus::from_str("in-progress").unwrap(),
            MilestoneStatus::InProgress
        );
    }

    #[test]
    fn test_add_dependency_rejects_self() {
        let mut ms = Milestone::new("Deploy".to_string(), None);
        let own_id = ms.id.clone();
        assert!(ms.add_dependency(own_id).is_err());
        assert!(ms.dependencies.is_empty());
    }

    #[test]
    fn test_add_dependency_ignores_duplicates() {
        let mut ms = Milestone::new("Deploy".to_string(), None);
        ms.add_dependency("ms-other".to_string()).unwrap();
        ms.add_dependency("ms-other".to_string()).unwrap();
        assert_eq!(ms.dependencies, vec!["ms-other".to_string()]);
    }

    #[test]
    fn test_set_status_completed_records_timestamp() {
        let mut ms = Milestone::new("Deploy".to_string(), None);
        ms.set_status(MilestoneStatus::Completed);
        assert!(ms.completed_at.is_some());

        ms.set_status(MilestoneStatus::InProgress);
        assert!(ms.completed_at.is_none());
    }
}
