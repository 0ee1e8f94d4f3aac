//! Scenario test framework.
//!
//! A [`Scenario`] declares documents, the sentences of a scenario, the test
//! planners to use and what each generated pre-test-case must look like:
//!
//! ```ignore
//! Scenario::new("constants")
//!     .document(Document::new("doc1.feature").with_constant(Constant::new("pi", 3.14)))
//!     .sentences(&["When I fill <b> with [pi]"])
//!     .planner(DataTestCaseMix::OnlyValid, CombinationStrategy::IndexOfEach(0))
//!     .expect(0, |a| a.line(0, "When I fill <b> with 3.14 # [pi]"))
//!     .run()
//!     .unwrap();
//! ```

mod assertion;
mod error;
mod runner;
mod scenario;

pub use assertion::Assertion;
pub use error::{ScenarioError, ScenarioResult};
pub use runner::{Outcome, Runner};
pub use scenario::{Scenario, Sentence, DEFAULT_SEED};

pub mod prelude {
    pub use crate::{Assertion, Outcome, Scenario, ScenarioError, ScenarioResult, DEFAULT_SEED};
    pub use scenaria_core::{
        Constant, Document, Feature, KeywordDictionary, Location, NodeType, Spec, Step, UiElement, UiProperty,
        UiPropertyKind, Value,
    };
    pub use scenaria_testdata::{RandomString, SeedStream};
    pub use scenaria_pretestcase::{GenError, GenerationConfig, PreTestCase};
    pub use scenaria_testplan::{CombinationStrategy, DataTestCaseMix};
}
