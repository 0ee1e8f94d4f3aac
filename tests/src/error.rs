//! Scenario test errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("[{scenario}] sentence {line} could not be recognized: {message}")]
    Recognition {
        scenario: String,
        line: usize,
        message: String,
    },

    #[error("[{scenario}] generation reported errors:\n  {}", errors.join("\n  "))]
    Generation { scenario: String, errors: Vec<String> },

    #[error("[{scenario}] expected {expected} pre-test-cases, got {actual}")]
    PreTestCaseCount {
        scenario: String,
        expected: usize,
        actual: usize,
    },

    #[error("[{scenario}] pre-test-case {index}: {message}")]
    AssertionFailed {
        scenario: String,
        index: usize,
        message: String,
    },
}

impl ScenarioError {
    pub fn assertion_failed(scenario: &str, index: usize, message: impl Into<String>) -> Self {
        ScenarioError::AssertionFailed {
            scenario: scenario.to_string(),
            index,
            message: message.into(),
        }
    }
}

pub type ScenarioResult<T> = Result<T, ScenarioError>;
