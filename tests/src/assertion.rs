//! Assertion types and builders for verifying pre-test-cases.

use crate::error::{ScenarioError, ScenarioResult};
use scenaria_pretestcase::PreTestCase;

/// Expectations about one pre-test-case.
///
/// Lines are steps as written to a test case file: content, then `# comment`
/// when there is one.
#[derive(Debug, Default)]
pub struct Assertion {
    pub lines: Option<Vec<String>>,
    pub line_at: Vec<(usize, String)>,
    pub line_matching: Vec<(usize, String)>,
    pub oracles: Option<Vec<String>>,
    pub invalid: Option<bool>,
}

impl Assertion {
    pub fn new() -> Self {
        Self::default()
    }

    /// All the lines, in order.
    pub fn lines(mut self, lines: &[&str]) -> Self {
        self.lines = Some(lines.iter().map(|s| s.to_string()).collect());
        self
    }

    pub fn line(mut self, index: usize, line: impl Into<String>) -> Self {
        self.line_at.push((index, line.into()));
        self
    }

    /// A line that matches a regular expression, anchored at both ends.
    pub fn line_matches(mut self, index: usize, pattern: impl Into<String>) -> Self {
        self.line_matching.push((index, pattern.into()));
        self
    }

    /// All the oracle lines, in order.
    pub fn oracles(mut self, lines: &[&str]) -> Self {
        self.oracles = Some(lines.iter().map(|s| s.to_string()).collect());
        self
    }

    pub fn no_oracles(mut self) -> Self {
        self.oracles = Some(Vec::new());
        self
    }

    /// Whether the test plan gives an invalid value to some element.
    pub fn invalid(mut self, invalid: bool) -> Self {
        self.invalid = Some(invalid);
        self
    }

    pub fn verify(&self, scenario: &str, index: usize, ptc: &PreTestCase) -> ScenarioResult<()> {
        let fail = |message: String| ScenarioError::assertion_failed(scenario, index, message);
        let lines = ptc.lines();

        if let Some(ref expected) = self.lines {
            if *expected != lines {
                return Err(fail(format!(
                    "lines mismatch:\n  expected: {:#?}\n  actual:   {:#?}",
                    expected, lines
                )));
            }
        }

        for (i, expected) in &self.line_at {
            match lines.get(*i) {
                Some(actual) if actual == expected => {}
                actual => {
                    return Err(fail(format!(
                        "line {} mismatch:\n  expected: {:?}\n  actual:   {:?}",
                        i, expected, actual
                    )))
                }
            }
        }

        for (i, pattern) in &self.line_matching {
            let re = regex_lite::Regex::new(&format!("^(?:{})$", pattern))
                .map_err(|e| fail(format!("invalid regex pattern: {}", e)))?;
            match lines.get(*i) {
                Some(actual) if re.is_match(actual) => {}
                actual => {
                    return Err(fail(format!(
                        "line {} does not match '{}': {:?}",
                        i, pattern, actual
                    )))
                }
            }
        }

        if let Some(ref expected) = self.oracles {
            let actual = ptc.oracle_lines();
            if *expected != actual {
                return Err(fail(format!(
                    "oracles mismatch:\n  expected: {:#?}\n  actual:   {:#?}",
                    expected, actual
                )));
            }
        }

        if let Some(expected) = self.invalid {
            if ptc.has_invalid_data() != expected {
                return Err(fail(format!(
                    "expected invalid data: {}, plan: {:?}",
                    expected, ptc.test_plan
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scenaria_core::{Location, NodeType, Step};
    use scenaria_testplan::TestPlan;

    fn ptc() -> PreTestCase {
        let step = Step::new("When I fill <b> with 3.14", NodeType::When, Location::new(1, 1)).with_comment("[pi]");
        PreTestCase::new(TestPlan::new(), vec![step], vec![])
    }

    #[test]
    fn test_verifies_lines_and_patterns() {
        let assertion = Assertion::new()
            .lines(&["When I fill <b> with 3.14 # [pi]"])
            .line_matches(0, r"When I fill <b> with \d+\.\d+ # \[pi\]")
            .no_oracles()
            .invalid(false);
        assert!(assertion.verify("t", 0, &ptc()).is_ok());
    }

    #[test]
    fn test_reports_mismatches() {
        let err = Assertion::new().line(0, "When I fill <b>").verify("t", 0, &ptc()).unwrap_err();
        assert!(err.to_string().contains("line 0 mismatch"));
        assert!(Assertion::new().line(3, "x").verify("t", 0, &ptc()).is_err());
    }
}
