//! Combination strategies: one data test case per element.

use crate::{CandidateMap, TestPlan};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Policy that turns a candidate map into a test plan.
///
/// Both strategies are total: every candidate list is non-empty, so every
/// element of the map receives exactly one case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CombinationStrategy {
    /// The candidate at the index, or the last one when the index is past
    /// the end of the list.
    IndexOfEach(usize),
    /// A uniformly random candidate per element.
    SingleRandomOfEach,
}

impl CombinationStrategy {
    pub fn combine<R: Rng + ?Sized>(&self, candidates: &CandidateMap, rng: &mut R) -> TestPlan {
        let data_test_cases = candidates
            .iter()
            .filter_map(|(variable, plans)| {
                let chosen = match self {
                    CombinationStrategy::IndexOfEach(index) => plans.get((*index).min(plans.len().saturating_sub(1))),
                    CombinationStrategy::SingleRandomOfEach => plans.choose(rng),
                };
                chosen.map(|plan| (variable.clone(), plan.clone()))
            })
            .collect();
        TestPlan { data_test_cases }
    }
}
