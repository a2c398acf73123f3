//! Ranked side-by-side policy comparison.
//!
//! Runs every policy against the same request set and orders the outcomes
//! by total head movement. Each policy run is independent, so a caller
//! that wants to parallelize can equally well invoke the engine once per
//! policy itself; this type just packages the common "which policy wins
//! here?" question.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::{SeekPath, SimulationRequest};
use crate::scheduler::{schedule, Policy};

/// Outcome of a single policy within a comparison.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyOutcome {
    /// The policy that produced this path.
    pub policy: Policy,
    /// Its computed seek path.
    pub path: SeekPath,
}

impl PolicyOutcome {
    /// Total head movement for this policy.
    pub fn seek_count(&self) -> u64 {
        self.path.seek_count
    }
}

/// All six policies ranked over one request set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyComparison {
    /// Outcomes ordered best-first (lowest seek count). Ties keep the
    /// canonical order of [`Policy::ALL`].
    pub outcomes: Vec<PolicyOutcome>,
}

impl PolicyComparison {
    /// Runs every policy on `request` and ranks the results.
    pub fn calculate(request: &SimulationRequest) -> Self {
        let mut outcomes: Vec<PolicyOutcome> = Policy::ALL
            .iter()
            .map(|&policy| PolicyOutcome {
                policy,
                path: schedule(policy, request),
            })
            .collect();

        // Stable sort keeps declaration order on equal seek counts.
        outcomes.sort_by_key(|o| o.seek_count());

        if let Some(best) = outcomes.first() {
            debug!(
                policy = best.policy.name(),
                seek_count = best.seek_count(),
                "ranked policies"
            );
        }
        Self { outcomes }
    }

    /// The winning outcome (lowest seek count).
    pub fn best(&self) -> Option<&PolicyOutcome> {
        self.outcomes.first()
    }

    /// Seek count achieved by a specific policy.
    pub fn seek_count_for(&self, policy: Policy) -> Option<u64> {
        self.outcomes
            .iter()
            .find(|o| o.policy == policy)
            .map(|o| o.seek_count())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn textbook() -> SimulationRequest {
        SimulationRequest::new(vec![98, 183, 37, 122, 14, 124, 65, 67], 53)
    }

    #[test]
    fn test_ranking_on_textbook_queue() {
        let comparison = PolicyComparison::calculate(&textbook());
        let order: Vec<Policy> = comparison.outcomes.iter().map(|o| o.policy).collect();
        assert_eq!(
            order,
            vec![
                Policy::Sstf,
                Policy::Look,
                Policy::CLook,
                Policy::Scan,
                Policy::CScan,
                Policy::Fcfs,
            ]
        );
    }

    #[test]
    fn test_seek_counts_match_direct_engine_runs() {
        let request = textbook();
        let comparison = PolicyComparison::calculate(&request);
        for policy in Policy::ALL {
            let direct = schedule(policy, &request);
            assert_eq!(
                comparison.seek_count_for(policy),
                Some(direct.seek_count),
                "{policy}"
            );
        }
    }

    #[test]
    fn test_best_is_lowest() {
        let comparison = PolicyComparison::calculate(&textbook());
        let best = comparison.best().expect("six outcomes");
        assert_eq!(best.policy, Policy::Sstf);
        assert_eq!(best.seek_count(), 236);
        for outcome in &comparison.outcomes {
            assert!(best.seek_count() <= outcome.seek_count());
        }
    }

    #[test]
    fn test_ties_keep_canonical_order() {
        // With no requests every policy scores zero.
        let comparison = PolicyComparison::calculate(&SimulationRequest::new(vec![], 50));
        let order: Vec<Policy> = comparison.outcomes.iter().map(|o| o.policy).collect();
        assert_eq!(order, Policy::ALL.to_vec());
        assert!(comparison.outcomes.iter().all(|o| o.seek_count() == 0));
    }

    #[test]
    fn test_seek_count_for_specific_policy() {
        let comparison = PolicyComparison::calculate(&textbook());
        assert_eq!(comparison.seek_count_for(Policy::CScan), Some(382));
    }
}
