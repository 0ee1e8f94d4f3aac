//! Test plans.

use scenaria_core::Step;
use scenaria_testdata::{DataTestCase, ExpectedResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The data test case chosen for one UI element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UieTestPlan {
    pub dtc: DataTestCase,
    pub result: ExpectedResult,
    /// Oracle steps that apply when the result is invalid.
    #[serde(default)]
    pub otherwise_steps: Vec<Step>,
}

impl UieTestPlan {
    pub fn new(dtc: DataTestCase, result: ExpectedResult, otherwise_steps: Vec<Step>) -> Self {
        Self {
            dtc,
            result,
            otherwise_steps,
        }
    }
}

/// One data test case per UI element, keyed by the element's variable
/// (`Feature:Element` for feature elements).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TestPlan {
    pub data_test_cases: BTreeMap<String, UieTestPlan>,
}

impl TestPlan {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, variable: impl Into<String>, plan: UieTestPlan) -> Self {
        self.data_test_cases.insert(variable.into(), plan);
        self
    }

    pub fn get(&self, variable: &str) -> Option<&UieTestPlan> {
        self.data_test_cases.get(variable)
    }

    pub fn len(&self) -> usize {
        self.data_test_cases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data_test_cases.is_empty()
    }

    /// Whether any element of the plan receives an invalid value.
    pub fn has_invalid(&self) -> bool {
        self.data_test_cases.values().any(|p| p.result.is_invalid())
    }
}
