//! Scored substring matching with three-tier relevance ordering.
//!
//! A record matches when the normalized query is a substring of its name,
//! description, or per-type extra field (owner for capabilities and quick
//! wins, notes for milestones). Matches are ordered exact-name, then
//! name-prefix, then any-field-contains; original collection order is
//! preserved within a tier. No tokenization, no fuzzy matching.

use serde::Serialize;

use crate::fs::RoadmapSnapshot;
use crate::models::{Capability, Milestone, Priority, QuickWin};

/// Which collection a search hit came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Capability,
    Milestone,
    QuickWin,
}

impl EntityKind {
    /// Deep-link path for a record of this kind. Computed at search time,
    /// never stored.
    pub fn path_for(&self, id: &str) -> String {
        match self {
            EntityKind::Capability => format!("/capabilities/{id}"),
            EntityKind::Milestone => format!("/milestones/{id}"),
            EntityKind::QuickWin => format!("/quick-wins/{id}"),
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            EntityKind::Capability => "Capability",
            EntityKind::Milestone => "Milestone",
            EntityKind::QuickWin => "Quick Win",
        }
    }
}

/// Common projected shape of a matched record.
#[derive(Debug, Clone, Serialize)]
pub struct SearchHit {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: EntityKind,
    pub name: String,
    pub description: Option<String>,
    pub path: String,
    pub priority: Option<Priority>,
    pub status: Option<String>,
}

/// A record that can participate in search.
pub trait Searchable {
    const KIND: EntityKind;

    fn id(&self) -> &str;
    fn name(&self) -> &str;
    fn description(&self) -> Option<&str>;
    /// The per-type extra field: owner or notes. Participates only in the
    /// lowest tier.
    fn extra_field(&self) -> Option<&str>;
    fn priority(&self) -> Option<Priority>;
    fn status_label(&self) -> Option<String>;

    fn to_hit(&self) -> SearchHit {
        SearchHit {
            id: self.id().to_string(),
            kind: Self::KIND,
            name: self.name().to_string(),
            description: self.description().map(|d| d.to_string()),
            path: Self::KIND.path_for(self.id()),
            priority: self.priority(),
            status: self.status_label(),
        }
    }
}

impl Searchable for Capability {
    const KIND: EntityKind = EntityKind::Capability;

    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    fn extra_field(&self) -> Option<&str> {
        self.owner.as_deref()
    }

    fn priority(&self) -> Option<Priority> {
        Some(self.priority)
    }

    fn status_label(&self) -> Option<String> {
        Some(format!(
            "level {} of {}",
            self.current_level, self.target_level
        ))
    }
}

impl Searchable for Milestone {
    const KIND: EntityKind = EntityKind::Milestone;

    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    fn extra_field(&self) -> Option<&str> {
        self.notes.as_deref()
    }

    fn priority(&self) -> Option<Priority> {
        Some(self.priority)
    }

    fn status_label(&self) -> Option<String> {
        Some(self.status.to_string())
    }
}

impl Searchable for QuickWin {
    const KIND: EntityKind = EntityKind::QuickWin;

    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    fn extra_field(&self) -> Option<&str> {
        self.owner.as_deref()
    }

    fn priority(&self) -> Option<Priority> {
        Some(self.priority)
    }

    fn status_label(&self) -> Option<String> {
        Some(self.status.to_string())
    }
}

/// Relevance tier of a match, highest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MatchTier {
    ExactName,
    NamePrefix,
    FieldContains,
}

fn match_tier<T: Searchable>(record: &T, query: &str) -> Option<MatchTier> {
    let name = record.name().to_lowercase();

    if name == query {
        return Some(MatchTier::ExactName);
    }
    if name.starts_with(query) {
        return Some(MatchTier::NamePrefix);
    }

    let contains = name.contains(query)
        || record
            .description()
            .is_some_and(|d| d.to_lowercase().contains(query))
        || record
            .extra_field()
            .is_some_and(|e| e.to_lowercase().contains(query));

    contains.then_some(MatchTier::FieldContains)
}

/// Rank one collection against a query.
///
/// The query is normalized (trimmed, lowercased) here; an empty or
/// whitespace-only query matches nothing regardless of collection contents.
pub fn rank_group<T: Searchable>(records: &[T], query: &str) -> Vec<SearchHit> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return Vec::new();
    }

    let mut exact = Vec::new();
    let mut prefix = Vec::new();
    let mut contains = Vec::new();

    for record in records {
        match match_tier(record, &query) {
            Some(MatchTier::ExactName) => exact.push(record.to_hit()),
            Some(MatchTier::NamePrefix) => prefix.push(record.to_hit()),
            Some(MatchTier::FieldContains) => contains.push(record.to_hit()),
            None => {}
        }
    }

    exact.extend(prefix);
    exact.extend(contains);
    exact
}

/// Grouped results across the three collections.
#[derive(Debug, Clone, Default)]
pub struct GroupedResults {
    pub capabilities: Vec<SearchHit>,
    pub milestones: Vec<SearchHit>,
    pub quick_wins: Vec<SearchHit>,
}

impl GroupedResults {
    /// Sum of matches across all groups, before any display truncation.
    pub fn total_results(&self) -> usize {
        self.capabilities.len() + self.milestones.len() + self.quick_wins.len()
    }

    pub fn has_results(&self) -> bool {
        self.total_results() > 0
    }

    /// Flat view over all groups, capabilities first.
    pub fn results(&self) -> impl Iterator<Item = &SearchHit> {
        self.capabilities
            .iter()
            .chain(self.milestones.iter())
            .chain(self.quick_wins.iter())
    }
}

/// Search all three collections of a snapshot.
pub fn search_snapshot(snapshot: &RoadmapSnapshot, query: &str) -> GroupedResults {
    GroupedResults {
        capabilities: rank_group(&snapshot.capabilities, query),
        milestones: rank_group(&snapshot.milestones, query),
        quick_wins: rank_group(&snapshot.quick_wins, query),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MaturityLevel;

    fn capability(name: &str) -> Capability {
        Capability::new(
            name.to_string(),
            MaturityLevel::new(1).unwrap(),
            MaturityLevel::new(3).unwrap(),
        )
    }

    #[test]
    fn test_exact_before_prefix_before_contains() {
        let caps = vec![
            capability("Planning"),
            capability("Reporting"),
            capability("Report Generator"),
        ];

        let hits = rank_group(&caps, "Reporting");
        let names: Vec<&str> = hits.iter().map(|h| h.name.as_str()).collect();
        assert_eq!(names, vec!["Reporting"]);

        let hits = rank_group(&caps, "Report");
        let names: Vec<&str> = hits.iter().map(|h| h.name.as_str()).collect();
        // Both are prefix matches, original order preserved.
        assert_eq!(names, vec!["Reporting", "Report Generator"]);
    }

    #[test]
    fn test_tier_order_with_all_three_tiers() {
        let mut other = capability("Asset Planning");
        other.description = Some("covers shift reporting too".to_string());
        let caps = vec![other, capability("Reporting Extras"), capability("Reporting")];

        let hits = rank_group(&caps, "reporting");
        let names: Vec<&str> = hits.iter().map(|h| h.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["Reporting", "Reporting Extras", "Asset Planning"]
        );
    }

    #[test]
    fn test_case_insensitive_matching() {
        let caps = vec![capability("Reporting")];
        assert_eq!(rank_group(&caps, "rEpOrTiNg").len(), 1);
    }

    #[test]
    fn test_empty_and_whitespace_query_match_nothing() {
        let caps = vec![capability("Reporting")];
        assert!(rank_group(&caps, "").is_empty());
        assert!(rank_group(&caps, "   ").is_empty());
        assert!(rank_group(&caps, "\t\n").is_empty());
    }

    #[test]
    fn test_owner_participates_in_lowest_tier_only() {
        let mut cap = capability("Reporting");
        cap.owner = Some("Dana".to_string());
        let caps = vec![cap];

        let hits = rank_group(&caps, "dana");
        assert_eq!(hits.len(), 1);
    }

    #[test]
    fn test_missing_fields_never_match() {
        let cap = capability("Reporting");
        assert!(cap.description.is_none() && cap.owner.is_none());
        assert!(rank_group(&[cap], "ghost").is_empty());
    }

    #[test]
    fn test_milestone_notes_match() {
        let mut ms = Milestone::new("Deploy".to_string(), None);
        ms.set_notes(Some("waiting on vendor firmware".to_string()));

        let hits = rank_group(&[ms], "firmware");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].kind, EntityKind::Milestone);
    }

    #[test]
    fn test_hit_path_templates() {
        assert_eq!(EntityKind::Capability.path_for("c1"), "/capabilities/c1");
        assert_eq!(EntityKind::Milestone.path_for("m1"), "/milestones/m1");
        assert_eq!(EntityKind::QuickWin.path_for("q1"), "/quick-wins/q1");
    }

    #[test]
    fn test_no_false_positives() {
        let caps = vec![capability("Planning"), capability("Reporting")];
        let hits = rank_group(&caps, "maintenance");
        assert!(hits.is_empty());
    }

    #[test]
    fn test_grouped_results_total_and_flat() {
        let snapshot = RoadmapSnapshot {
            capabilities: vec![capability("Reporting")],
            milestones: vec![Milestone::new("Reporting rollout".to_string(), None)],
            quick_wins: vec![QuickWin::new("Reporting cheat sheet".to_string())],
        };

        let results = search_snapshot(&snapshot, "reporting");
        assert_eq!(results.total_results(), 3);
        assert!(results.has_results());

        let kinds: Vec<EntityKind> = results.results().map(|h| h.kind).collect();
        assert_eq!(
            kinds,
            vec![
                EntityKind::Capability,
                EntityKind::Milestone,
                EntityKind::QuickWin
            ]
        );
    }
}
