//! Search state container: the query plus its grouped results.
//!
//! Re-evaluation happens eagerly on `set_query`; `clear_search` returns the
//! container to its initial state, so set -> clear -> set is equivalent to a
//! fresh set against the same snapshot.

use crate::fs::RoadmapSnapshot;

use super::ranker::{search_snapshot, GroupedResults};

#[derive(Debug, Default)]
pub struct SearchState {
    query: String,
    results: GroupedResults,
}

impl SearchState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Set the query and re-evaluate against the given snapshot.
    pub fn set_query(&mut self, query: &str, snapshot: &RoadmapSnapshot) {
        self.query = query.to_string();
        self.results = search_snapshot(snapshot, query);
    }

    /// Reset to the initial empty state.
    pub fn clear_search(&mut self) {
        self.query.clear();
        self.results = GroupedResults::default();
    }

    pub fn grouped_results(&self) -> &GroupedResults {
        &self.results
    }

    pub fn total_results(&self) -> usize {
        self.results.total_results()
    }

    pub fn has_results(&self) -> bool {
        self.results.has_results()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Capability, MaturityLevel, Milestone, QuickWin};

    fn snapshot() -> RoadmapSnapshot {
        RoadmapSnapshot {
            capabilities: vec![Capability::new(
                "Reporting".to_string(),
                MaturityLevel::new(1).unwrap(),
                MaturityLevel::new(3).unwrap(),
            )],
            milestones: vec![Milestone::new("Reporting rollout".to_string(), None)],
            quick_wins: vec![QuickWin::new("Whiteboard handover".to_string())],
        }
    }

    #[test]
    fn test_fresh_state_has_no_results() {
        let state = SearchState::new();
        assert_eq!(state.query(), "");
        assert!(!state.has_results());
    }

    #[test]
    fn test_empty_query_over_populated_snapshot() {
        let snap = snapshot();
        let mut state = SearchState::new();
        state.set_query("   ", &snap);
        assert!(!state.has_results());
        assert!(state.grouped_results().capabilities.is_empty());
        assert!(state.grouped_results().milestones.is_empty());
        assert!(state.grouped_results().quick_wins.is_empty());
    }

    #[test]
    fn test_set_clear_set_round_trip() {
        let snap = snapshot();

        let mut fresh = SearchState::new();
        fresh.set_query("reporting", &snap);
        let expected: Vec<String> = fresh.grouped_results().results().map(|h| h.id.clone()).collect();

        let mut state = SearchState::new();
        state.set_query("reporting", &snap);
        state.clear_search();
        assert_eq!(state.query(), "");
        assert!(!state.has_results());

        state.set_query("reporting", &snap);
        let actual: Vec<String> = state.grouped_results().results().map(|h| h.id.clone()).collect();
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_total_results_counts_all_groups() {
        let snap = snapshot();
        let mut state = SearchState::new();
        state.set_query("reporting", &snap);
        assert_eq!(state.total_results(), 2);
    }
}
