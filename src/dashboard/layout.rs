//! Widget layout resolution.
//!
//! Visible widgets are ordered by their preference order and partitioned
//! into three fixed slots: the KPI row, the main row, and the bottom row.
//! Grid column counts come from fixed lookup tables, not a general formula.
//! The QoL impact widget sits outside the partitions and is rendered (or
//! not) on its own.

use crate::models::{WidgetKind, WidgetPreference};

/// KPI row: the kpi-* widgets in preference order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KpiRow {
    pub widgets: Vec<WidgetKind>,
    pub columns: u16,
}

/// Main row: capability-progress and overall-maturity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainRow {
    /// Neither main widget is visible; the row is omitted.
    Hidden,
    /// Exactly one main widget, full width.
    Single(WidgetKind),
    /// Both main widgets: a three-column grid with capability-progress
    /// spanning two columns and overall-maturity in the third.
    Split,
}

impl MainRow {
    pub fn columns(&self) -> u16 {
        match self {
            MainRow::Hidden => 0,
            MainRow::Single(_) => 1,
            MainRow::Split => 3,
        }
    }
}

/// The resolved dashboard arrangement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardLayout {
    pub kpi_row: Option<KpiRow>,
    pub main_row: MainRow,
    /// recent-activity and critical-items, in preference order.
    pub bottom_row: Vec<WidgetKind>,
    pub show_qol_impact: bool,
}

fn kpi_columns(count: usize) -> u16 {
    match count {
        1 => 1,
        2 => 2,
        3 => 3,
        _ => 4,
    }
}

/// Resolve the dashboard layout from a widget preference list.
pub fn resolve_layout(widgets: &[WidgetPreference]) -> DashboardLayout {
    let mut visible: Vec<&WidgetPreference> = widgets.iter().filter(|w| w.visible).collect();
    // Stable sort: equal orders keep their original list position.
    visible.sort_by_key(|w| w.order);

    let mut kpi_widgets = Vec::new();
    let mut bottom_row = Vec::new();
    let mut has_progress = false;
    let mut has_maturity = false;
    let mut show_qol_impact = false;

    for pref in &visible {
        match pref.kind {
            kind if kind.is_kpi() => kpi_widgets.push(kind),
            WidgetKind::CapabilityProgress => has_progress = true,
            WidgetKind::OverallMaturity => has_maturity = true,
            WidgetKind::RecentActivity | WidgetKind::CriticalItems => {
                bottom_row.push(pref.kind);
            }
            WidgetKind::QolImpact => show_qol_impact = true,
            _ => {}
        }
    }

    let kpi_row = if kpi_widgets.is_empty() {
        None
    } else {
        let columns = kpi_columns(kpi_widgets.len());
        Some(KpiRow {
            widgets: kpi_widgets,
            columns,
        })
    };

    let main_row = match (has_progress, has_maturity) {
        (true, true) => MainRow::Split,
        (true, false) => MainRow::Single(WidgetKind::CapabilityProgress),
        (false, true) => MainRow::Single(WidgetKind::OverallMaturity),
        (false, false) => MainRow::Hidden,
    };

    DashboardLayout {
        kpi_row,
        main_row,
        bottom_row,
        show_qol_impact,
    }
}
