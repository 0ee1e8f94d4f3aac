//! Scenario runner.

use scenaria_core::{Location, SentenceRecognizer, Spec, Step};
use scenaria_pretestcase::{GenContext, GenError, PreTestCase, PreTestCaseGenerator};

use crate::error::{ScenarioError, ScenarioResult};
use crate::scenario::Scenario;

/// What a scenario run produced.
#[derive(Debug)]
pub struct Outcome {
    pub seed: String,
    pub pre_test_cases: Vec<PreTestCase>,
    pub errors: Vec<GenError>,
    pub warnings: Vec<GenError>,
}

/// Runs a scenario through recognition, planning and assembly.
pub struct Runner<'s> {
    scenario: &'s Scenario,
}

impl<'s> Runner<'s> {
    pub fn new(scenario: &'s Scenario) -> Self {
        Self { scenario }
    }

    pub fn run(&self) -> ScenarioResult<Outcome> {
        let name = self.scenario.name();

        // 1. Recognize the sentences
        let steps = self.steps()?;

        // 2. Generate
        let spec = self
            .scenario
            .documents()
            .iter()
            .cloned()
            .fold(Spec::new(), Spec::with_document);
        let mut ctx = GenContext::new(&spec, spec.documents.first());
        let generator = PreTestCaseGenerator::new(
            self.scenario.dictionary_ref().clone(),
            self.scenario.generation_config(),
        );
        let planners = generator.test_planners();
        let pre_test_cases = generator.generate(&steps, &mut ctx, &planners);

        if !ctx.errors.is_empty() && !self.scenario.errors_allowed() {
            return Err(ScenarioError::Generation {
                scenario: name.to_string(),
                errors: ctx.errors.iter().map(|e| e.to_string()).collect(),
            });
        }

        // 3. Verify
        if let Some(expected) = self.scenario.expected_count() {
            if pre_test_cases.len() != expected {
                return Err(ScenarioError::PreTestCaseCount {
                    scenario: name.to_string(),
                    expected,
                    actual: pre_test_cases.len(),
                });
            }
        }
        for (index, assertion) in self.scenario.assertions() {
            let ptc = pre_test_cases.get(*index).ok_or_else(|| {
                ScenarioError::assertion_failed(name, *index, format!("only {} pre-test-cases", pre_test_cases.len()))
            })?;
            assertion.verify(name, *index, ptc)?;
        }

        Ok(Outcome {
            seed: generator.seed().to_string(),
            pre_test_cases,
            errors: ctx.errors,
            warnings: ctx.warnings,
        })
    }

    fn steps(&self) -> ScenarioResult<Vec<Step>> {
        let dictionary = self.scenario.dictionary_ref();
        let recognizer = SentenceRecognizer::new(dictionary);
        let path = self
            .scenario
            .documents()
            .first()
            .map(|d| d.path.clone());
        self.scenario
            .sentence_list()
            .iter()
            .enumerate()
            .map(|(i, sentence)| {
                let mut location = Location::new(i + 1, 1);
                if let Some(path) = &path {
                    location = location.in_file(path.clone());
                }
                let step = recognizer
                    .recognize(&sentence.text, location)
                    .map_err(|e| ScenarioError::Recognition {
                        scenario: self.scenario.name().to_string(),
                        line: i + 1,
                        message: e.to_string(),
                    })?;
                Ok(if sentence.external { step.external() } else { step })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scenaria_core::Document;
    use scenaria_testplan::{CombinationStrategy, DataTestCaseMix};

    #[test]
    fn test_unrecognized_sentences_fail_the_run() {
        let scenario = Scenario::new("unclosed").sentences(&["When I fill <a> with 1", "Then I see {A"]);
        let err = Runner::new(&scenario).run().unwrap_err();
        assert!(matches!(err, ScenarioError::Recognition { line: 2, .. }));
    }

    #[test]
    fn test_external_sentences_and_counts() {
        let scenario = Scenario::new("external")
            .document(Document::new("doc1.feature"))
            .external(&["Given that I fill <user> with \"bob\""])
            .sentences(&["When I fill <b> with 1"])
            .planner(DataTestCaseMix::OnlyValid, CombinationStrategy::IndexOfEach(0))
            .pre_test_cases(1);

        let outcome = Runner::new(&scenario).run().unwrap();

        let steps = &outcome.pre_test_cases[0].steps;
        assert!(steps[0].external);
        assert!(!steps[1].external);
        assert_eq!(steps[1].location.file_path.as_deref(), Some("doc1.feature"));
        assert_eq!(outcome.seed, crate::DEFAULT_SEED);

        let wrong = scenario.pre_test_cases(3);
        assert!(matches!(
            Runner::new(&wrong).run(),
            Err(ScenarioError::PreTestCaseCount { expected: 3, actual: 1, .. })
        ));
    }
}
