//! Mix strategies: which valid and invalid data test cases to explore.

use crate::{TestAnalysisMap, UieTestPlan};
use scenaria_testdata::ExpectedResult;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Candidate data test cases per UI element variable. Every list is
/// non-empty: elements without candidates are left out.
pub type CandidateMap = BTreeMap<String, Vec<UieTestPlan>>;

/// Policy that selects the candidate data test cases of each element.
///
/// Incompatible cases are never selected. Elements listed as "always valid"
/// only ever receive valid cases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DataTestCaseMix {
    /// Valid cases for every element; a single candidate map.
    OnlyValid,
    /// One candidate map per element, in which that element receives invalid
    /// cases and all the others receive valid ones.
    JustOneInvalid,
    /// Invalid cases for every element; a single candidate map.
    OnlyInvalid,
    /// Every compatible case for every element; one candidate map per element.
    Unfiltered,
}

impl DataTestCaseMix {
    pub fn select(&self, map: &TestAnalysisMap, always_valid: &BTreeSet<String>) -> Vec<CandidateMap> {
        let valid_only = |_: &str| Some(ExpectedResult::Valid);
        match self {
            DataTestCaseMix::OnlyValid => vec![candidates(map, valid_only)],
            DataTestCaseMix::JustOneInvalid => map
                .keys()
                .map(|target| {
                    candidates(map, |variable| {
                        if variable == target.as_str() && !always_valid.contains(variable) {
                            Some(ExpectedResult::Invalid)
                        } else {
                            Some(ExpectedResult::Valid)
                        }
                    })
                })
                .collect(),
            DataTestCaseMix::OnlyInvalid => vec![candidates(map, |variable| {
                if always_valid.contains(variable) {
                    Some(ExpectedResult::Valid)
                } else {
                    Some(ExpectedResult::Invalid)
                }
            })],
            DataTestCaseMix::Unfiltered => map.keys().map(|_| candidates(map, |_| None)).collect(),
        }
    }
}

/// Candidates whose result is the one `wanted` asks for the element, or any
/// compatible result when it asks for none.
fn candidates(map: &TestAnalysisMap, wanted: impl Fn(&str) -> Option<ExpectedResult>) -> CandidateMap {
    map.iter()
        .filter_map(|(variable, analysis)| {
            let wanted = wanted(variable);
            let plans: Vec<UieTestPlan> = analysis
                .values()
                .filter(|plan| plan.result != ExpectedResult::Incompatible)
                .filter(|plan| wanted.map(|w| plan.result == w).unwrap_or(true))
                .cloned()
                .collect();
            (!plans.is_empty()).then(|| (variable.clone(), plans))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ElementAnalysis;
    use pretty_assertions::assert_eq;
    use scenaria_testdata::DataTestCase;

    fn analysis(entries: &[(DataTestCase, ExpectedResult)]) -> ElementAnalysis {
        entries
            .iter()
            .map(|(dtc, result)| (*dtc, UieTestPlan::new(*dtc, *result, vec![])))
            .collect()
    }

    fn map() -> TestAnalysisMap {
        use DataTestCase::*;
        use ExpectedResult::*;
        TestAnalysisMap::from([
            (
                "a".to_string(),
                analysis(&[(ValueMin, Valid), (ValueJustBelowMin, Invalid), (LengthMin, Incompatible)]),
            ),
            (
                "b".to_string(),
                analysis(&[(RequiredFilled, Valid), (RequiredNotFilled, Invalid)]),
            ),
            ("c".to_string(), analysis(&[(RequiredFilled, Valid), (RequiredNotFilled, Valid)])),
        ])
    }

    fn cases(candidates: &CandidateMap, variable: &str) -> Vec<DataTestCase> {
        candidates
            .get(variable)
            .map(|plans| plans.iter().map(|p| p.dtc).collect())
            .unwrap_or_default()
    }

    #[test]
    fn test_only_valid() {
        let selected = DataTestCaseMix::OnlyValid.select(&map(), &BTreeSet::new());
        assert_eq!(selected.len(), 1);
        assert_eq!(cases(&selected[0], "a"), vec![DataTestCase::ValueMin]);
        assert_eq!(
            cases(&selected[0], "c"),
            vec![DataTestCase::RequiredFilled, DataTestCase::RequiredNotFilled]
        );
    }

    #[test]
    fn test_just_one_invalid() {
        // GIVEN
        let always_valid = BTreeSet::from(["b".to_string()]);

        // WHEN
        let selected = DataTestCaseMix::JustOneInvalid.select(&map(), &always_valid);

        // THEN
        assert_eq!(selected.len(), 3);
        assert_eq!(cases(&selected[0], "a"), vec![DataTestCase::ValueJustBelowMin]);
        assert_eq!(cases(&selected[0], "b"), vec![DataTestCase::RequiredFilled]);
        // "b" is always valid even when targeted
        assert_eq!(cases(&selected[1], "b"), vec![DataTestCase::RequiredFilled]);
        // "c" has no invalid case, so it is left out of its own map
        assert!(!selected[2].contains_key("c"));
        assert_eq!(cases(&selected[2], "a"), vec![DataTestCase::ValueMin]);
    }

    #[test]
    fn test_only_invalid_and_unfiltered() {
        let selected = DataTestCaseMix::OnlyInvalid.select(&map(), &BTreeSet::new());
        assert_eq!(selected.len(), 1);
        assert_eq!(cases(&selected[0], "b"), vec![DataTestCase::RequiredNotFilled]);
        assert!(!selected[0].contains_key("c"));

        let selected = DataTestCaseMix::Unfiltered.select(&map(), &BTreeSet::new());
        assert_eq!(selected.len(), 3);
        assert_eq!(
            cases(&selected[0], "a"),
            vec![DataTestCase::ValueJustBelowMin, DataTestCase::ValueMin]
        );
    }

    #[test]
    fn test_candidate_lists_are_never_empty() {
        for mix in [
            DataTestCaseMix::OnlyValid,
            DataTestCaseMix::JustOneInvalid,
            DataTestCaseMix::OnlyInvalid,
            DataTestCaseMix::Unfiltered,
        ] {
            for candidates in mix.select(&map(), &BTreeSet::new()) {
                assert!(candidates.values().all(|plans| !plans.is_empty()), "{:?}", mix);
            }
        }
    }
}
