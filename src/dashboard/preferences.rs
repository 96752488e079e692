//! Dashboard preference record and its persisted mirror.
//!
//! The whole record lives in one JSON document at a fixed path inside the
//! data directory. Every mutation is an atomic in-memory replace followed
//! by a rewrite of the file. A missing or corrupted document rehydrates as
//! the default rather than surfacing an error; individual widget entries
//! with unknown ids are dropped on load.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

use crate::models::{default_widgets, WidgetKind, WidgetPreference};

const DEFAULT_THEME: &str = "system";

/// The persisted preference record: theme plus widget arrangement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Preferences {
    pub theme: String,
    pub widgets: Vec<WidgetPreference>,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            theme: DEFAULT_THEME.to_string(),
            widgets: default_widgets(),
        }
    }
}

/// Tolerant on-disk shape: widget entries are parsed individually so a
/// stale or hand-edited document with unknown ids still loads.
#[derive(Deserialize)]
struct RawPreferences {
    #[serde(default)]
    theme: Option<String>,
    #[serde(default)]
    widgets: Vec<serde_json::Value>,
}

/// Preference container bound to its persisted file.
pub struct PreferenceStore {
    path: PathBuf,
    prefs: Preferences,
}

impl PreferenceStore {
    /// Load preferences from `path`, falling back to the default record on
    /// a missing or unreadable document.
    pub fn load<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref().to_path_buf();
        let prefs = read_preferences(&path);
        Self { path, prefs }
    }

    pub fn preferences(&self) -> &Preferences {
        &self.prefs
    }

    pub fn widgets(&self) -> &[WidgetPreference] {
        &self.prefs.widgets
    }

    pub fn theme(&self) -> &str {
        &self.prefs.theme
    }

    /// Replace the whole record (the bulk-update operation).
    pub fn replace(&mut self, prefs: Preferences) -> Result<()> {
        self.prefs = prefs;
        self.persist()
    }

    pub fn update_theme(&mut self, theme: String) -> Result<()> {
        self.prefs.theme = theme;
        self.persist()
    }

    /// Toggle a single widget's visibility. Every other entry's `visible`
    /// and `order` are untouched.
    pub fn update_widget_visibility(&mut self, kind: WidgetKind, visible: bool) -> Result<()> {
        if let Some(widget) = self.prefs.widgets.iter_mut().find(|w| w.kind == kind) {
            widget.visible = visible;
        }
        self.persist()
    }

    /// Replace the widget list, rewriting every entry's order to its new
    /// list index.
    pub fn update_widget_order(&mut self, mut widgets: Vec<WidgetPreference>) -> Result<()> {
        for (i, widget) in widgets.iter_mut().enumerate() {
            widget.order = i as u32;
        }
        self.prefs.widgets = widgets;
        self.persist()
    }

    /// Restore the frozen default widget list, discarding any custom
    /// arrangement. The theme and the rest of the record are unchanged.
    pub fn reset_widgets(&mut self) -> Result<()> {
        self.prefs.widgets = default_widgets();
        self.persist()
    }

    fn persist(&self) -> Result<()> {
        let content = serde_json::to_string_pretty(&self.prefs)
            .context("Failed to serialize preferences")?;
        fs::write(&self.path, content)
            .with_context(|| format!("Failed to write preferences: {}", self.path.display()))?;
        Ok(())
    }
}

fn read_preferences(path: &Path) -> Preferences {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(_) => return Preferences::default(),
    };

    let raw: RawPreferences = match serde_json::from_str(&content) {
        Ok(raw) => raw,
        Err(err) => {
            warn!(path = %path.display(), %err, "unreadable preferences, using defaults");
            return Preferences::default();
        }
    };

    let widgets: Vec<WidgetPreference> = raw
        .widgets
        .into_iter()
        .filter_map(|value| match serde_json::from_value(value) {
            Ok(widget) => Some(widget),
            Err(err) => {
                warn!(path = %path.display(), %err, "dropping unknown widget entry");
                None
            }
        })
        .collect();

    Preferences {
        theme: raw.theme.unwrap_or_else(|| DEFAULT_THEME.to_string()),
        widgets: if widgets.is_empty() {
            default_widgets()
        } else {
            widgets
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_in(temp: &tempfile::TempDir) -> PreferenceStore {
        PreferenceStore::load(temp.path().join("preferences.json"))
    }

    #[test]
    fn test_missing_file_loads_defaults() {
        let temp = tempfile::tempdir().unwrap();
        let store = store_in(&temp);
        assert_eq!(*store.preferences(), Preferences::default());
    }

    #[test]
    fn test_corrupt_file_loads_defaults() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("preferences.json");
        fs::write(&path, "{not json").unwrap();

        let store = PreferenceStore::load(&path);
        assert_eq!(*store.preferences(), Preferences::default());
    }

    #[test]
    fn test_unknown_widget_entries_dropped() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("preferences.json");
        fs::write(
            &path,
            r#"{
                "theme": "dark",
                "widgets": [
                    {"id": "kpi-capabilities", "visible": true, "order": 0},
                    {"id": "kpi-legacy-widget", "visible": true, "order": 1},
                    {"id": "recent-activity", "visible": false, "order": 2}
                ]
            }"#,
        )
        .unwrap();

        let store = PreferenceStore::load(&path);
        assert_eq!(store.theme(), "dark");
        let kinds: Vec<WidgetKind> = store.widgets().iter().map(|w| w.kind).collect();
        assert_eq!(
            kinds,
            vec![WidgetKind::KpiCapabilities, WidgetKind::RecentActivity]
        );
    }

    #[test]
    fn test_toggle_twice_restores_and_leaves_others_alone() {
        let temp = tempfile::tempdir().unwrap();
        let mut store = store_in(&temp);
        let before = store.widgets().to_vec();

        store
            .update_widget_visibility(WidgetKind::KpiBlocked, false)
            .unwrap();
        assert!(!store
            .widgets()
            .iter()
            .find(|w| w.kind == WidgetKind::KpiBlocked)
            .unwrap()
            .visible);

        store
            .update_widget_visibility(WidgetKind::KpiBlocked, true)
            .unwrap();
        assert_eq!(store.widgets(), before.as_slice());
    }

    #[test]
    fn test_update_order_rewrites_indices() {
        let temp = tempfile::tempdir().unwrap();
        let mut store = store_in(&temp);

        let mut reversed = store.widgets().to_vec();
        reversed.reverse();
        store.update_widget_order(reversed.clone()).unwrap();

        for (i, widget) in store.widgets().iter().enumerate() {
            assert_eq!(widget.order, i as u32);
            assert_eq!(widget.kind, reversed[i].kind);
        }
    }

    #[test]
    fn test_reset_restores_defaults_but_keeps_theme() {
        let temp = tempfile::tempdir().unwrap();
        let mut store = store_in(&temp);

        store.update_theme("dark".to_string()).unwrap();
        store
            .update_widget_visibility(WidgetKind::QolImpact, false)
            .unwrap();
        let mut shuffled = store.widgets().to_vec();
        shuffled.rotate_left(3);
        store.update_widget_order(shuffled).unwrap();

        store.reset_widgets().unwrap();
        assert_eq!(store.widgets(), default_widgets().as_slice());
        assert_eq!(store.theme(), "dark");
    }

    #[test]
    fn test_replace_swaps_the_whole_record() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("preferences.json");

        let mut store = PreferenceStore::load(&path);
        let mut prefs = Preferences::default();
        prefs.theme = "dark".to_string();
        prefs.widgets.retain(|w| w.kind.is_kpi());
        store.replace(prefs.clone()).unwrap();

        assert_eq!(*store.preferences(), prefs);
        let reloaded = PreferenceStore::load(&path);
        assert_eq!(*reloaded.preferences(), prefs);
    }

    #[test]
    fn test_mutations_persist_across_reload() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("preferences.json");

        let mut store = PreferenceStore::load(&path);
        store
            .update_widget_visibility(WidgetKind::RecentActivity, false)
            .unwrap();

        let reloaded = PreferenceStore::load(&path);
        assert!(!reloaded
            .widgets()
            .iter()
            .find(|w| w.kind == WidgetKind::RecentActivity)
            .unwrap()
            .visible);
    }
}
