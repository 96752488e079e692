use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::milestone::generate_id;
use super::priority::Priority;

/// Status of a quick win. Quick wins sit outside the maturity ladder, so
/// they use their own lightweight lifecycle rather than milestone statuses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuickWinStatus {
    Planned,
    InProgress,
    Done,
}

impl std::fmt::Display for QuickWinStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QuickWinStatus::Planned => write!(f, "planned"),
            QuickWinStatus::InProgress => write!(f, "in_progress"),
            QuickWinStatus::Done => write!(f, "done"),
        }
    }
}

impl std::str::FromStr for QuickWinStatus {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "planned" => Ok(QuickWinStatus::Planned),
            "in_progress" => Ok(QuickWinStatus::InProgress),
            "done" => Ok(QuickWinStatus::Done),
            _ => anyhow::bail!("Invalid quick win status: {s}. Use: planned, in_progress, done"),
        }
    }
}

/// A short-horizon improvement item independent of the milestone ladder.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuickWin {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub owner: Option<String>,
    pub status: QuickWinStatus,
    #[serde(default)]
    pub priority: Priority,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl QuickWin {
    pub fn new(name: String) -> Self {
        let now = Utc::now();
        let id = generate_id("qw", &name);

        Self {
            id,
            name,
            description: None,
            owner: None,
            status: QuickWinStatus::Planned,
            priority: Priority::default(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn set_status(&mut self, status: QuickWinStatus) {
        self.status = status;
        self.updated_at = Utc::now();
    }
}
