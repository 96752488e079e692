//! Dashboard commands: render the widget layout and manage preferences.

use anyhow::{bail, Result};
use colored::Colorize;
use std::str::FromStr;

use crate::analysis::analyze_dependencies;
use crate::dashboard::tui::DashboardApp;
use crate::dashboard::{resolve_layout, PreferenceStore};
use crate::fs::RoadmapStore;
use crate::models::WidgetKind;

fn preference_store(store: &RoadmapStore) -> PreferenceStore {
    PreferenceStore::load(store.data_dir().preferences_file())
}

/// Render the terminal dashboard.
pub fn show() -> Result<()> {
    let store = RoadmapStore::open_current()?;
    let snapshot = store.snapshot()?;
    let report = analyze_dependencies(&snapshot.milestones, None);

    let prefs = preference_store(&store);
    let layout = resolve_layout(prefs.widgets());

    let mut app = DashboardApp::new()?;
    app.run(&snapshot, &report, &layout)
}

/// List widget preferences in order.
pub fn widgets() -> Result<()> {
    let store = RoadmapStore::open_current()?;
    let prefs = preference_store(&store);

    println!();
    println!("Dashboard widgets (theme: {}):", prefs.theme());
    println!("==================");
    let mut sorted = prefs.widgets().to_vec();
    sorted.sort_by_key(|w| w.order);
    for widget in &sorted {
        let marker = if widget.visible {
            "●".green().bold()
        } else {
            "○".white().dimmed()
        };
        println!("  {} {:<2} {}", marker, widget.order, widget.kind);
    }
    println!();

    Ok(())
}

/// Flip one widget's visibility.
pub fn toggle(id: String) -> Result<()> {
    let kind = WidgetKind::from_str(&id)?;

    let store = RoadmapStore::open_current()?;
    let mut prefs = preference_store(&store);

    let Some(current) = prefs.widgets().iter().find(|w| w.kind == kind) else {
        bail!("Widget '{id}' is not in the preference list; run 'cairn dashboard reset'");
    };
    let visible = !current.visible;

    prefs.update_widget_visibility(kind, visible)?;
    println!(
        "{} {} is now {}",
        "✓".green(),
        kind,
        if visible { "visible" } else { "hidden" }
    );

    Ok(())
}

/// Move the named widgets to the front, in the given order; unnamed widgets
/// keep their relative order after them. Every order index is rewritten.
pub fn reorder(ids: Vec<String>) -> Result<()> {
    let kinds = ids
        .iter()
        .map(|id| WidgetKind::from_str(id))
        .collect::<Result<Vec<_>>>()?;

    let store = RoadmapStore::open_current()?;
    let mut prefs = preference_store(&store);

    let mut remaining = prefs.widgets().to_vec();
    remaining.sort_by_key(|w| w.order);

    let mut new_list = Vec::with_capacity(remaining.len());
    for kind in &kinds {
        if let Some(pos) = remaining.iter().position(|w| w.kind == *kind) {
            new_list.push(remaining.remove(pos));
        }
    }
    new_list.extend(remaining);

    prefs.update_widget_order(new_list)?;
    println!("{} widget order updated", "✓".green());

    Ok(())
}

/// Restore the default widget arrangement.
pub fn reset() -> Result<()> {
    let store = RoadmapStore::open_current()?;
    let mut prefs = preference_store(&store);

    prefs.reset_widgets()?;
    println!("{} dashboard widgets reset to defaults", "✓".green());

    Ok(())
}

/// Set the dashboard theme.
pub fn theme(name: String) -> Result<()> {
    let store = RoadmapStore::open_current()?;
    let mut prefs = preference_store(&store);

    prefs.update_theme(name.clone())?;
    println!("{} theme set to {}", "✓".green(), name.bold());

    Ok(())
}
