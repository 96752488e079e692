use anyhow::{bail, Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Collection files kept inside the data directory.
const COLLECTION_FILES: [&str; 3] = ["capabilities.json", "milestones.json", "quick_wins.json"];

/// The `.cairn/` data directory holding the roadmap collections and the
/// dashboard preferences file.
pub struct DataDir {
    root: PathBuf,
}

impl DataDir {
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            root: base_path.as_ref().join(".cairn"),
        }
    }

    /// Create a fresh data directory with empty collections.
    pub fn initialize(&self) -> Result<()> {
        if self.root.exists() {
            bail!(".cairn directory already exists");
        }

        fs::create_dir_all(&self.root).context("Failed to create .cairn directory")?;

        for file in &COLLECTION_FILES {
            let path = self.root.join(file);
            fs::write(&path, "[]").with_context(|| format!("Failed to create {file}"))?;
        }

        self.create_readme()?;

        Ok(())
    }

    /// Open an existing data directory, recreating any missing collection
    /// files rather than failing.
    pub fn load(&self) -> Result<()> {
        if !self.root.exists() {
            bail!(".cairn directory does not exist. Run 'cairn init' first.");
        }

        for file in &COLLECTION_FILES {
            let path = self.root.join(file);
            if !path.exists() {
                fs::write(&path, "[]")
                    .with_context(|| format!("Failed to recreate missing file: {file}"))?;
            }
        }

        Ok(())
    }

    /// Remove the data directory entirely.
    pub fn remove(&self) -> Result<()> {
        if self.root.exists() {
            fs::remove_dir_all(&self.root).context("Failed to remove .cairn directory")?;
        }
        Ok(())
    }

    fn create_readme(&self) -> Result<()> {
        let readme_content = r#"# cairn Data Directory

This directory is managed by the cairn CLI and contains:

- `capabilities.json` - Tracked transformation areas with maturity levels
- `milestones.json` - Deliverables with statuses and dependency references
- `quick_wins.json` - Short-horizon improvement items
- `preferences.json` - Dashboard theme and widget arrangement

Do not manually edit these files unless you know what you're doing.
"#;

        let readme_path = self.root.join("README.md");
        fs::write(readme_path, readme_content).context("Failed to create README.md")?;

        Ok(())
    }

    pub fn capabilities_file(&self) -> PathBuf {
        self.root.join("capabilities.json")
    }

    pub fn milestones_file(&self) -> PathBuf {
        self.root.join("milestones.json")
    }

    pub fn quick_wins_file(&self) -> PathBuf {
        self.root.join("quick_wins.json")
    }

    pub fn preferences_file(&self) -> PathBuf {
        self.root.join("preferences.json")
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn exists(&self) -> bool {
        self.root.exists()
    }
}
