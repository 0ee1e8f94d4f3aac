//! Configuration for pre-test-case generation

use chrono::Utc;
use scenaria_core::CaseType;
use scenaria_testplan::{CombinationStrategy, DataTestCaseMix, TestPlanner};
use serde::{Deserialize, Serialize};

/// A mix strategy paired with a combination strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlannerConfig {
    pub mix: DataTestCaseMix,
    pub combination: CombinationStrategy,
}

impl PlannerConfig {
    pub fn new(mix: DataTestCaseMix, combination: CombinationStrategy) -> Self {
        Self { mix, combination }
    }
}

/// Configuration for pre-test-case generation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    /// Seed of the run; generated from the current time when absent
    pub seed: Option<String>,
    /// Minimum size of random strings
    pub min_random_string_size: usize,
    /// Maximum size of random strings
    pub max_random_string_size: usize,
    /// Tries to find a value outside a set or a format
    pub random_tries_to_invalid_values: usize,
    /// Case of UI literals derived from UI element names
    pub ui_literal_case: CaseType,
    /// Distance between neighbouring real values, instead of the one
    /// implied by the declared bounds
    pub real_delta: Option<f64>,
    /// Test planners whose plans are concatenated
    pub planners: Vec<PlannerConfig>,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            seed: None,
            min_random_string_size: 0,
            max_random_string_size: 100,
            random_tries_to_invalid_values: 5,
            ui_literal_case: CaseType::Camel,
            real_delta: None,
            planners: vec![
                PlannerConfig::new(DataTestCaseMix::OnlyValid, CombinationStrategy::SingleRandomOfEach),
                PlannerConfig::new(DataTestCaseMix::JustOneInvalid, CombinationStrategy::SingleRandomOfEach),
            ],
        }
    }
}

impl GenerationConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads a configuration from JSON. Missing entries keep their default.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn with_seed(mut self, seed: impl Into<String>) -> Self {
        self.seed = Some(seed.into());
        self
    }

    pub fn with_random_string_size(mut self, min: usize, max: usize) -> Self {
        self.min_random_string_size = min;
        self.max_random_string_size = max.max(min);
        self
    }

    pub fn with_random_tries(mut self, tries: usize) -> Self {
        self.random_tries_to_invalid_values = tries;
        self
    }

    pub fn with_ui_literal_case(mut self, case: CaseType) -> Self {
        self.ui_literal_case = case;
        self
    }

    pub fn with_real_delta(mut self, delta: f64) -> Self {
        self.real_delta = Some(delta);
        self
    }

    pub fn with_planners(mut self, planners: Vec<PlannerConfig>) -> Self {
        self.planners = planners;
        self
    }

    /// Small random strings and a single planner of valid values.
    pub fn minimal() -> Self {
        Self {
            seed: Some("scenaria".to_string()),
            min_random_string_size: 1,
            max_random_string_size: 10,
            random_tries_to_invalid_values: 3,
            ui_literal_case: CaseType::Camel,
            real_delta: None,
            planners: vec![PlannerConfig::new(
                DataTestCaseMix::OnlyValid,
                CombinationStrategy::IndexOfEach(0),
            )],
        }
    }

    /// Whether the run seed has to be generated.
    pub fn is_generated_seed(&self) -> bool {
        self.seed.is_none()
    }

    /// The configured seed, or one made from the current date and time.
    pub fn seed_or_generated(&self) -> String {
        self.seed.clone().unwrap_or_else(|| Utc::now().format("%Y-%m-%d %H:%M:%S").to_string())
    }

    /// One test planner per configured pair, all seeded with `seed`.
    pub fn test_planners(&self, seed: &str) -> Vec<TestPlanner> {
        self.planners
            .iter()
            .map(|p| TestPlanner::new(p.mix, p.combination, seed))
            .collect()
    }
}
