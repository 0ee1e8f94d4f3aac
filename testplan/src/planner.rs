//! Test planner.

use crate::{CombinationStrategy, DataTestCaseMix, TestAnalysisMap, TestPlan};
use scenaria_testdata::SeedStream;
use std::collections::BTreeSet;
use tracing::debug;

/// Produces test plans for a mix strategy, a combination strategy and a seed.
#[derive(Debug, Clone, PartialEq)]
pub struct TestPlanner {
    mix: DataTestCaseMix,
    combination: CombinationStrategy,
    seed: String,
}

impl TestPlanner {
    pub fn new(mix: DataTestCaseMix, combination: CombinationStrategy, seed: impl Into<String>) -> Self {
        Self {
            mix,
            combination,
            seed: seed.into(),
        }
    }

    pub fn mix(&self) -> DataTestCaseMix {
        self.mix
    }

    pub fn combination(&self) -> CombinationStrategy {
        self.combination
    }

    pub fn seed(&self) -> &str {
        &self.seed
    }

    /// One test plan per candidate map selected by the mix.
    ///
    /// Candidate map `j` is combined with its own random stream, derived from
    /// the planner's seed and `j`, so plans do not depend on each other.
    pub fn make(&self, map: &TestAnalysisMap, always_valid: &BTreeSet<String>) -> Vec<TestPlan> {
        let stream = SeedStream::new(self.seed.as_str());
        let plans: Vec<TestPlan> = self
            .mix
            .select(map, always_valid)
            .iter()
            .enumerate()
            .map(|(j, candidates)| self.combination.combine(candidates, &mut stream.for_index(j)))
            .collect();
        debug!(
            mix = ?self.mix,
            combination = ?self.combination,
            elements = map.len(),
            plans = plans.len(),
            "made test plans"
        );
        plans
    }
}
