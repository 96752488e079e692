use serde::{Deserialize, Serialize};

/// Closed set of dashboard widget kinds.
///
/// The persisted form uses the stable kebab-case ids; membership tests are
/// exhaustive matches on the enum rather than string prefix checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WidgetKind {
    #[serde(rename = "kpi-capabilities")]
    KpiCapabilities,
    #[serde(rename = "kpi-milestones")]
    KpiMilestones,
    #[serde(rename = "kpi-quick-wins")]
    KpiQuickWins,
    #[serde(rename = "kpi-blocked")]
    KpiBlocked,
    #[serde(rename = "capability-progress")]
    CapabilityProgress,
    #[serde(rename = "overall-maturity")]
    OverallMaturity,
    #[serde(rename = "recent-activity")]
    RecentActivity,
    #[serde(rename = "critical-items")]
    CriticalItems,
    #[serde(rename = "qol-impact")]
    QolImpact,
}

impl WidgetKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            WidgetKind::KpiCapabilities => "kpi-capabilities",
            WidgetKind::KpiMilestones => "kpi-milestones",
            WidgetKind::KpiQuickWins => "kpi-quick-wins",
            WidgetKind::KpiBlocked => "kpi-blocked",
            WidgetKind::CapabilityProgress => "capability-progress",
            WidgetKind::OverallMaturity => "overall-maturity",
            WidgetKind::RecentActivity => "recent-activity",
            WidgetKind::CriticalItems => "critical-items",
            WidgetKind::QolImpact => "qol-impact",
        }
    }

    /// All widget kinds in default display order.
    pub fn all() -> &'static [WidgetKind] {
        &[
            WidgetKind::KpiCapabilities,
            WidgetKind::KpiMilestones,
            WidgetKind::KpiQuickWins,
            WidgetKind::KpiBlocked,
            WidgetKind::CapabilityProgress,
            WidgetKind::OverallMaturity,
            WidgetKind::RecentActivity,
            WidgetKind::CriticalItems,
            WidgetKind::QolImpact,
        ]
    }

    pub fn is_kpi(&self) -> bool {
        matches!(
            self,
            WidgetKind::KpiCapabilities
                | WidgetKind::KpiMilestones
                | WidgetKind::KpiQuickWins
                | WidgetKind::KpiBlocked
        )
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            WidgetKind::KpiCapabilities => "Capabilities",
            WidgetKind::KpiMilestones => "Milestones",
            WidgetKind::KpiQuickWins => "Quick Wins",
            WidgetKind::KpiBlocked => "Blocked",
            WidgetKind::CapabilityProgress => "Capability Progress",
            WidgetKind::OverallMaturity => "Overall Maturity",
            WidgetKind::RecentActivity => "Recent Activity",
            WidgetKind::CriticalItems => "Critical Items",
            WidgetKind::QolImpact => "QoL Impact",
        }
    }
}

impl std::fmt::Display for WidgetKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for WidgetKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        WidgetKind::all()
            .iter()
            .copied()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| anyhow::anyhow!("Unknown widget id: {s}"))
    }
}

/// Per-widget visibility and ordering preference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WidgetPreference {
    #[serde(rename = "id")]
    pub kind: WidgetKind,
    pub visible: bool,
    pub order: u32,
}

/// The frozen default widget list: every kind visible, in declaration order.
pub fn default_widgets() -> Vec<WidgetPreference> {
    WidgetKind::all()
        .iter()
        .enumerate()
        .map(|(i, &kind)| WidgetPreference {
            kind,
            visible: true,
            order: i as u32,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_widget_kind_round_trip() {
        for &kind in WidgetKind::all() {
            assert_eq!(WidgetKind::from_str(kind.as_str()).unwrap(), kind);
        }
    }

    #[test]
    fn test_widget_kind_serde_ids() {
        let json = serde_json::to_string(&WidgetKind::KpiQuickWins).unwrap();
        assert_eq!(json, "\"kpi-quick-wins\"");
    }

    #[test]
    fn test_is_kpi_matches_id_convention() {
        for &kind in WidgetKind::all() {
            assert_eq!(kind.is_kpi(), kind.as_str().starts_with("kpi-"));
        }
    }

    #[test]
    fn test_default_widgets_all_visible_sequential() {
        let widgets = default_widgets();
        assert_eq!(widgets.len(), WidgetKind::all().len());
        for (i, w) in widgets.iter().enumerate() {
            assert!(w.visible);
            assert_eq!(w.order, i as u32);
        }
    }

    #[test]
    fn test_unknown_widget_id_rejected() {
        assert!(WidgetKind::from_str("kpi-unknown").is_err());
    }
}
