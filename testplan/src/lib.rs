//! Test planning.
//!
//! Turns the UI elements a scenario fills into concrete test plans:
//! 1. [`TestAnalyzer`] classifies every data test case of every element and
//!    attaches the "otherwise" steps of the property each case violates.
//! 2. A [`DataTestCaseMix`] keeps the valid and invalid cases worth exploring.
//! 3. A [`CombinationStrategy`] picks one case per element.
//!
//! [`TestPlanner`] runs the three steps for a mix, a combination and a seed.

mod analysis;
mod combination;
mod mix;
mod plan;
mod planner;

pub use analysis::{ElementAnalysis, TestAnalysisMap, TestAnalyzer};
pub use combination::CombinationStrategy;
pub use mix::{CandidateMap, DataTestCaseMix};
pub use plan::{TestPlan, UieTestPlan};
pub use planner::TestPlanner;
