//! Scenario definitions.

use crate::{Assertion, Outcome, Runner, ScenarioResult};
use scenaria_core::{Document, KeywordDictionary};
use scenaria_pretestcase::{GenerationConfig, PlannerConfig};
use scenaria_testplan::{CombinationStrategy, DataTestCaseMix};

/// A sentence of the scenario, and whether it belongs to an external
/// (precondition) scenario.
#[derive(Debug, Clone)]
pub struct Sentence {
    pub text: String,
    pub external: bool,
}

/// A scenario to generate pre-test-cases for, with its expectations.
#[derive(Debug)]
pub struct Scenario {
    name: String,
    documents: Vec<Document>,
    sentences: Vec<Sentence>,
    dictionary: KeywordDictionary,
    config: GenerationConfig,
    planners: Vec<PlannerConfig>,
    expected_count: Option<usize>,
    allow_errors: bool,
    assertions: Vec<(usize, Assertion)>,
}

pub const DEFAULT_SEED: &str = "scenaria";

impl Scenario {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            documents: Vec::new(),
            sentences: Vec::new(),
            dictionary: KeywordDictionary::english(),
            config: GenerationConfig::new().with_seed(DEFAULT_SEED),
            planners: Vec::new(),
            expected_count: None,
            allow_errors: false,
            assertions: Vec::new(),
        }
    }

    /// Adds a document. The first one is the document under generation.
    pub fn document(mut self, doc: Document) -> Self {
        self.documents.push(doc);
        self
    }

    pub fn sentences(mut self, sentences: &[&str]) -> Self {
        self.sentences.extend(sentences.iter().map(|s| Sentence {
            text: s.to_string(),
            external: false,
        }));
        self
    }

    /// Sentences of a precondition scenario, run before the next ones.
    pub fn external(mut self, sentences: &[&str]) -> Self {
        self.sentences.extend(sentences.iter().map(|s| Sentence {
            text: s.to_string(),
            external: true,
        }));
        self
    }

    pub fn dictionary(mut self, dictionary: KeywordDictionary) -> Self {
        self.dictionary = dictionary;
        self
    }

    pub fn config(mut self, config: GenerationConfig) -> Self {
        self.config = config;
        self
    }

    pub fn seed(mut self, seed: impl Into<String>) -> Self {
        self.config = self.config.with_seed(seed);
        self
    }

    /// Adds a test planner. Without any, the configured ones are used.
    pub fn planner(mut self, mix: DataTestCaseMix, combination: CombinationStrategy) -> Self {
        self.planners.push(PlannerConfig::new(mix, combination));
        self
    }

    /// Number of pre-test-cases the scenario must produce.
    pub fn pre_test_cases(mut self, count: usize) -> Self {
        self.expected_count = Some(count);
        self
    }

    /// Accepts generation errors instead of failing on them.
    pub fn allow_errors(mut self) -> Self {
        self.allow_errors = true;
        self
    }

    /// Adds expectations for the pre-test-case at `index`.
    pub fn expect<F>(mut self, index: usize, f: F) -> Self
    where
        F: FnOnce(Assertion) -> Assertion,
    {
        self.assertions.push((index, f(Assertion::new())));
        self
    }

    pub fn run(&self) -> ScenarioResult<Outcome> {
        Runner::new(self).run()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    pub fn sentence_list(&self) -> &[Sentence] {
        &self.sentences
    }

    pub fn dictionary_ref(&self) -> &KeywordDictionary {
        &self.dictionary
    }

    /// The configuration, with the scenario's planners when it has some.
    pub fn generation_config(&self) -> GenerationConfig {
        if self.planners.is_empty() {
            self.config.clone()
        } else {
            self.config.clone().with_planners(self.planners.clone())
        }
    }

    pub fn expected_count(&self) -> Option<usize> {
        self.expected_count
    }

    pub fn errors_allowed(&self) -> bool {
        self.allow_errors
    }

    pub fn assertions(&self) -> &[(usize, Assertion)] {
        &self.assertions
    }
}
