//! Dependency-chain analysis over a milestone snapshot.
//!
//! A "blocked chain" is a blocked milestone together with the subset of its
//! declared dependencies that are not yet completed. The analysis is a
//! single pass over the snapshot: it does not recurse into blockers of
//! blockers, and it never touches storage.

use std::collections::HashMap;

use crate::models::{Milestone, MilestoneStatus};

/// One blocked milestone and its unresolved blockers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockedChain {
    pub milestone_id: String,
    pub milestone_name: String,
    /// Dependency ids whose status is anything other than completed.
    /// Ids that do not resolve in the snapshot count as unresolved.
    pub blocked_dependencies: Vec<String>,
}

/// Result of analyzing a milestone snapshot.
#[derive(Debug, Clone)]
pub struct DependencyReport {
    pub total_milestones: usize,
    /// Count of blocked milestones, whether or not they have a chain.
    pub blocked_count: usize,
    /// Blocked milestones with at least one unresolved dependency, in
    /// snapshot order. A blocked milestone with no outstanding dependencies
    /// is counted above but excluded here.
    pub blocked_chains: Vec<BlockedChain>,
    pub summary: String,
}

/// Analyze a milestone snapshot for dependency-attributable blocks.
///
/// `capability_scope` restricts the counted set to milestones belonging to
/// that capability; `None` analyzes everything. Dependency statuses are
/// always resolved against the full snapshot, so a completed milestone in
/// another capability never reads as a blocker.
pub fn analyze_dependencies(
    milestones: &[Milestone],
    capability_scope: Option<&str>,
) -> DependencyReport {
    let status_by_id: HashMap<&str, MilestoneStatus> = milestones
        .iter()
        .map(|ms| (ms.id.as_str(), ms.status))
        .collect();

    let scoped: Vec<&Milestone> = milestones
        .iter()
        .filter(|ms| match capability_scope {
            Some(cap) => ms.capability_id.as_deref() == Some(cap),
            None => true,
        })
        .collect();

    let mut blocked_count = 0;
    let mut blocked_chains = Vec::new();

    for ms in &scoped {
        if ms.status != MilestoneStatus::Blocked {
            continue;
        }
        blocked_count += 1;

        let blocked_dependencies: Vec<String> = ms
            .dependencies
            .iter()
            .filter(|dep_id| {
                status_by_id.get(dep_id.as_str()) != Some(&MilestoneStatus::Completed)
            })
            .cloned()
            .collect();

        if !blocked_dependencies.is_empty() {
            blocked_chains.push(BlockedChain {
                milestone_id: ms.id.clone(),
                milestone_name: ms.name.clone(),
                blocked_dependencies,
            });
        }
    }

    let summary = format!(
        "{} milestone(s) are blocked by incomplete dependencies",
        blocked_chains.len()
    );

    DependencyReport {
        total_milestones: scoped.len(),
        blocked_count,
        blocked_chains,
        summary,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn milestone(id: &str, status: MilestoneStatus, deps: &[&str]) -> Milestone {
        let mut ms = Milestone::new(id.to_string(), None);
        ms.id = id.to_string();
        ms.status = status;
        ms.dependencies = deps.iter().map(|d| d.to_string()).collect();
        ms
    }

    #[test]
    fn test_blocked_count_ignores_dependencies() {
        let milestones = vec![
            milestone("a", MilestoneStatus::Blocked, &[]),
            milestone("b", MilestoneStatus::Blocked, &["a"]),
            milestone("c", MilestoneStatus::InProgress, &["a"]),
        ];

        let report = analyze_dependencies(&milestones, None);
        assert_eq!(report.blocked_count, 2);
        assert_eq!(report.total_milestones, 3);
    }

    #[test]
    fn test_chains_require_unresolved_dependency() {
        let milestones = vec![
            milestone("a", MilestoneStatus::Completed, &[]),
            milestone("b", MilestoneStatus::Blocked, &["a"]),
            milestone("c", MilestoneStatus::Blocked, &[]),
        ];

        let report = analyze_dependencies(&milestones, None);
        // Both count as blocked, neither has an unresolved blocker.
        assert_eq!(report.blocked_count, 2);
        assert!(report.blocked_chains.is_empty());
    }

    #[test]
    fn test_transitive_block_attributes_root_cause_only() {
        let milestones = vec![
            milestone("a", MilestoneStatus::Completed, &[]),
            milestone("b", MilestoneStatus::Blocked, &["a"]),
            milestone("c", MilestoneStatus::Blocked, &["a", "b"]),
        ];

        let report = analyze_dependencies(&milestones, None);
        assert_eq!(report.blocked_count, 2);
        assert_eq!(report.blocked_chains.len(), 1);

        let chain = &report.blocked_chains[0];
        assert_eq!(chain.milestone_id, "c");
        assert_eq!(chain.blocked_dependencies, vec!["b".to_string()]);
    }

    #[test]
    fn test_dangling_dependency_counts_as_unresolved() {
        let milestones = vec![milestone("a", MilestoneStatus::Blocked, &["ghost"])];

        let report = analyze_dependencies(&milestones, None);
        assert_eq!(report.blocked_chains.len(), 1);
        assert_eq!(
            report.blocked_chains[0].blocked_dependencies,
            vec!["ghost".to_string()]
        );
    }

    #[test]
    fn test_chains_preserve_snapshot_order() {
        let milestones = vec![
            milestone("z", MilestoneStatus::Blocked, &["x"]),
            milestone("a", MilestoneStatus::Blocked, &["x"]),
            milestone("m", MilestoneStatus::Blocked, &["x"]),
        ];

        let report = analyze_dependencies(&milestones, None);
        let ids: Vec<&str> = report
            .blocked_chains
            .iter()
            .map(|c| c.milestone_id.as_str())
            .collect();
        assert_eq!(ids, vec!["z", "a", "m"]);
    }

    #[test]
    fn test_capability_scope_restricts_analysis() {
        let mut in_scope = milestone("a", MilestoneStatus::Blocked, &["b"]);
        in_scope.capability_id = Some("cap-1".to_string());
        let mut out_of_scope = milestone("b", MilestoneStatus::Blocked, &["a"]);
        out_of_scope.capability_id = Some("cap-2".to_string());

        let milestones = vec![in_scope, out_of_scope];
        let report = analyze_dependencies(&milestones, Some("cap-1"));

        assert_eq!(report.total_milestones, 1);
        assert_eq!(report.blocked_count, 1);
        // "b" is blocked, not completed, so it is still an unresolved blocker.
        assert_eq!(
            report.blocked_chains[0].blocked_dependencies,
            vec!["b".to_string()]
        );
    }

    #[test]
    fn test_scoped_report_sees_completed_dependencies_elsewhere() {
        let mut blocked = milestone("a", MilestoneStatus::Blocked, &["b"]);
        blocked.capability_id = Some("cap-1".to_string());
        let mut done = milestone("b", MilestoneStatus::Completed, &[]);
        done.capability_id = Some("cap-2".to_string());

        let milestones = vec![blocked, done];

        let unscoped = analyze_dependencies(&milestones, None);
        assert!(unscoped.blocked_chains.is_empty());

        // Scoping must not change how the dependency's status resolves.
        let scoped = analyze_dependencies(&milestones, Some("cap-1"));
        assert_eq!(scoped.total_milestones, 1);
        assert_eq!(scoped.blocked_count, 1);
        assert!(scoped.blocked_chains.is_empty());
    }

    #[test]
    fn test_summary_embeds_chain_count() {
        let milestones = vec![
            milestone("a", MilestoneStatus::Blocked, &["x"]),
            milestone("b", MilestoneStatus::Blocked, &["x"]),
        ];

        let report = analyze_dependencies(&milestones, None);
        assert!(report.summary.starts_with("2 milestone(s)"));
    }

    #[test]
    fn test_empty_snapshot() {
        let report = analyze_dependencies(&[], None);
        assert_eq!(report.total_milestones, 0);
        assert_eq!(report.blocked_count, 0);
        assert!(report.blocked_chains.is_empty());
    }
}
