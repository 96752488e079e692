//! JSON-backed collection store for the roadmap entities.
//!
//! Each collection is one JSON array file inside `.cairn/`, read and written
//! whole under `fs2` advisory locks. The locks are cooperative - every writer
//! must go through this module for them to be effective.

use anyhow::{Context, Result};
use fs2::FileExt;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs::{File, OpenOptions};
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;
use tracing::debug;

use super::data_dir::DataDir;
use crate::models::{Capability, Milestone, QuickWin};

/// A point-in-time read of all three collections.
///
/// The analyzer and ranker operate on snapshots only; they never see the
/// files. A snapshot taken mid-edit by another process is still a complete,
/// consistent read of each individual collection.
pub struct RoadmapSnapshot {
    pub capabilities: Vec<Capability>,
    pub milestones: Vec<Milestone>,
    pub quick_wins: Vec<QuickWin>,
}

/// Handle to an opened `.cairn/` data directory.
pub struct RoadmapStore {
    dir: DataDir,
}

impl RoadmapStore {
    /// Open the store rooted at `base_path/.cairn`, failing if it has not
    /// been initialized.
    pub fn open<P: AsRef<Path>>(base_path: P) -> Result<Self> {
        let dir = DataDir::new(base_path);
        dir.load()?;
        Ok(Self { dir })
    }

    /// Open the store in the current working directory.
    pub fn open_current() -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to resolve current directory")?;
        Self::open(cwd)
    }

    pub fn data_dir(&self) -> &DataDir {
        &self.dir
    }

    pub fn load_capabilities(&self) -> Result<Vec<Capability>> {
        read_collection(&self.dir.capabilities_file())
    }

    pub fn save_capabilities(&self, capabilities: &[Capability]) -> Result<()> {
        write_collection(&self.dir.capabilities_file(), capabilities)
    }

    pub fn load_milestones(&self) -> Result<Vec<Milestone>> {
        read_collection(&self.dir.milestones_file())
    }

    pub fn save_milestones(&self, milestones: &[Milestone]) -> Result<()> {
        write_collection(&self.dir.milestones_file(), milestones)
    }

    pub fn load_quick_wins(&self) -> Result<Vec<QuickWin>> {
        read_collection(&self.dir.quick_wins_file())
    }

    pub fn save_quick_wins(&self, quick_wins: &[QuickWin]) -> Result<()> {
        write_collection(&self.dir.quick_wins_file(), quick_wins)
    }

    /// Read all three collections. Each file is locked and read
    /// independently; there is no cross-collection transaction.
    pub fn snapshot(&self) -> Result<RoadmapSnapshot> {
        Ok(RoadmapSnapshot {
            capabilities: self.load_capabilities()?,
            milestones: self.load_milestones()?,
            quick_wins: self.load_quick_wins()?,
        })
    }
}

/// Read a JSON array collection with a shared lock. A missing file is an
/// empty collection, not an error.
fn read_collection<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    if !path.exists() {
        return Ok(Vec::new());
    }

    let file =
        File::open(path).with_context(|| format!("Failed to open file: {}", path.display()))?;
    file.lock_shared()
        .with_context(|| format!("Failed to acquire shared lock: {}", path.display()))?;

    let mut content = String::new();
    BufReader::new(&file)
        .read_to_string(&mut content)
        .with_context(|| format!("Failed to read file: {}", path.display()))?;

    debug!(path = %path.display(), bytes = content.len(), "read collection");

    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse collection: {}", path.display()))
}

/// Write a JSON array collection with an exclusive lock.
///
/// The file is truncated only after the lock is held, so a concurrent
/// reader never observes a half-written collection.
fn write_collection<T: Serialize>(path: &Path, items: &[T]) -> Result<()> {
    let content = serde_json::to_string_pretty(items)
        .with_context(|| format!("Failed to serialize collection: {}", path.display()))?;

    #[allow(clippy::suspicious_open_options)]
    let file = OpenOptions::new()
        .write(true)
        .create(true)
        .open(path)
        .with_context(|| format!("Failed to open file for writing: {}", path.display()))?;
    file.lock_exclusive()
        .with_context(|| format!("Failed to acquire exclusive lock: {}", path.display()))?;
    file.set_len(0)
        .with_context(|| format!("Failed to truncate file: {}", path.display()))?;

    let mut writer = BufWriter::new(&file);
    writer
        .write_all(content.as_bytes())
        .with_context(|| format!("Failed to write file: {}", path.display()))?;
    writer
        .flush()
        .with_context(|| format!("Failed to flush file: {}", path.display()))?;

    debug!(path = %path.display(), count = items.len(), "wrote collection");

    Ok(())
}
