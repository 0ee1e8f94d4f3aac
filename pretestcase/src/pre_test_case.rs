//! Pre-test-cases.

use scenaria_core::Step;
use scenaria_testplan::TestPlan;
use serde::Serialize;

/// Concrete steps and oracles of a scenario under one test plan.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PreTestCase {
    pub test_plan: TestPlan,
    pub steps: Vec<Step>,
    /// Steps that check the outcome of the invalid values of the plan.
    pub oracles: Vec<Step>,
}

impl PreTestCase {
    pub fn new(test_plan: TestPlan, steps: Vec<Step>, oracles: Vec<Step>) -> Self {
        Self {
            test_plan,
            steps,
            oracles,
        }
    }

    /// Whether some UI element receives an invalid value.
    pub fn has_invalid_data(&self) -> bool {
        self.test_plan.has_invalid()
    }

    /// Steps as written to a test case file.
    pub fn lines(&self) -> Vec<String> {
        self.steps.iter().map(Step::render).collect()
    }

    pub fn oracle_lines(&self) -> Vec<String> {
        self.oracles.iter().map(Step::render).collect()
    }
}
