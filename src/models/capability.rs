use anyhow::{bail, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::priority::Priority;

/// Maturity level on the 1-5 ladder.
///
/// Level 1 is ad-hoc, level 5 is optimizing. Construction outside the
/// 1-5 range is rejected, including during deserialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct MaturityLevel(u8);

impl MaturityLevel {
    pub fn new(level: u8) -> Result<Self> {
        if !(1..=5).contains(&level) {
            bail!("Maturity level must be between 1 and 5, got {level}");
        }
        Ok(Self(level))
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for MaturityLevel {
    type Error = anyhow::Error;

    fn try_from(level: u8) -> Result<Self> {
        Self::new(level)
    }
}

impl From<MaturityLevel> for u8 {
    fn from(level: MaturityLevel) -> u8 {
        level.0
    }
}

impl std::fmt::Display for MaturityLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A tracked transformation area with a current and target maturity level.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Capability {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub owner: Option<String>,
    pub current_level: MaturityLevel,
    pub target_level: MaturityLevel,
    #[serde(default)]
    pub priority: Priority,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Capability {
    pub fn new(name: String, current_level: MaturityLevel, target_level: MaturityLevel) -> Self {
        let now = Utc::now();
        let id = crate::models::milestone::generate_id("cap", &name);

        Self {
            id,
            name,
            description: None,
            owner: None,
            current_level,
            target_level,
            priority: Priority::default(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn set_owner(&mut self, owner: Option<String>) {
        self.owner = owner;
        self.updated_at = Utc::now();
    }

    /// Set the current maturity level. Range checking against the target
    /// happens at the command layer.
    pub fn set_current_level(&mut self, level: MaturityLevel) {
        self.current_level = level;
        self.updated_at = Utc::now();
    }

    /// Progress toward the target level as a fraction in [0, 1].
    pub fn progress(&self) -> f64 {
        let current = self.current_level.value() as f64;
        let target = self.target_level.value() as f64;
        if target <= 1.0 {
            return 1.0;
        }
        ((current - 1.0) / (target - 1.0)).clamp(0.0, 1.0)
    }
}
