//! Keyword dictionary used to render generated steps in a scenario's language.

use crate::{upper_first, NodeType};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Normalized name of the fill action.
pub const FILL_ACTION: &str = "fill";

/// Localized keywords and descriptors.
///
/// Each keyword list holds the accepted spellings; the first one is used
/// when rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeywordDictionary {
    pub step_given: Vec<String>,
    pub step_when: Vec<String>,
    pub step_then: Vec<String>,
    pub step_and: Vec<String>,
    pub step_otherwise: Vec<String>,
    /// Subject of generated sentences ("I").
    pub i: Vec<String>,
    /// Connective between a target and its value ("with").
    pub with: Vec<String>,
    /// Verbs recognized as the fill action.
    pub fill: Vec<String>,
    pub valid: String,
    pub invalid: String,
    pub random: String,
    /// Introduces the element an oracle step comes from.
    pub from: String,
    /// Descriptor of each data test case, keyed by its identifier
    /// (e.g. `VALUE_LOWEST`).
    pub test_cases: BTreeMap<String, String>,
}

impl Default for KeywordDictionary {
    fn default() -> Self {
        Self::english()
    }
}

impl KeywordDictionary {
    pub fn english() -> Self {
        let words = |items: &[&str]| items.iter().map(|s| s.to_string()).collect::<Vec<_>>();
        Self {
            step_given: words(&["given that", "given"]),
            step_when: words(&["when"]),
            step_then: words(&["then"]),
            step_and: words(&["and"]),
            step_otherwise: words(&["otherwise"]),
            i: words(&["I"]),
            with: words(&["with"]),
            fill: words(&["fill", "inform", "enter", "type"]),
            valid: "valid".to_string(),
            invalid: "invalid".to_string(),
            random: "random".to_string(),
            from: "from".to_string(),
            test_cases: ENGLISH_TEST_CASES
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }

    /// Loads a dictionary from JSON. Missing entries keep their English value.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Keyword that starts a step of the given type, first letter upper-cased.
    pub fn keyword_for(&self, node_type: NodeType) -> String {
        let (list, fallback) = match node_type {
            NodeType::Given => (&self.step_given, "Given that"),
            NodeType::When => (&self.step_when, "When"),
            NodeType::Then => (&self.step_then, "Then"),
            NodeType::And => (&self.step_and, "And"),
            NodeType::Otherwise => (&self.step_otherwise, "Otherwise"),
        };
        upper_first(first_or(list, fallback))
    }

    pub fn i_word(&self) -> &str {
        first_or(&self.i, "I")
    }

    pub fn with_word(&self) -> &str {
        first_or(&self.with, "with")
    }

    /// Descriptor of a data test case; its identifier when not translated.
    pub fn test_case_name<'a>(&'a self, id: &'a str) -> &'a str {
        self.test_cases.get(id).map(String::as_str).unwrap_or(id)
    }

    /// Whether the word is one of the fill verbs.
    pub fn is_fill_verb(&self, word: &str) -> bool {
        self.fill.iter().any(|v| v.eq_ignore_ascii_case(word))
    }
}

fn first_or<'a>(list: &'a [String], fallback: &'a str) -> &'a str {
    list.first().map(String::as_str).unwrap_or(fallback)
}

const ENGLISH_TEST_CASES: &[(&str, &str)] = &[
    ("VALUE_LOWEST", "lowest applicable value"),
    ("VALUE_RANDOM_BELOW_MIN", "random value below the minimum value"),
    ("VALUE_JUST_BELOW_MIN", "value just below the minimum value"),
    ("VALUE_MIN", "minimum value"),
    ("VALUE_JUST_ABOVE_MIN", "value just above the minimum value"),
    ("VALUE_ZERO", "zero value"),
    ("VALUE_MEDIAN", "median value"),
    ("VALUE_RANDOM_BETWEEN_MIN_MAX", "random value between the minimum and the maximum values"),
    ("VALUE_JUST_BELOW_MAX", "value just below the maximum value"),
    ("VALUE_MAX", "maximum value"),
    ("VALUE_JUST_ABOVE_MAX", "value just above the maximum value"),
    ("VALUE_RANDOM_ABOVE_MAX", "random value above the maximum value"),
    ("VALUE_GREATEST", "greatest applicable value"),
    ("LENGTH_LOWEST", "lowest applicable length"),
    ("LENGTH_RANDOM_BELOW_MIN", "random length below the minimum length"),
    ("LENGTH_JUST_BELOW_MIN", "length just below the minimum length"),
    ("LENGTH_MIN", "minimum length"),
    ("LENGTH_JUST_ABOVE_MIN", "length just above the minimum length"),
    ("LENGTH_ZERO", "empty"),
    ("LENGTH_MEDIAN", "median length"),
    ("LENGTH_RANDOM_BETWEEN_MIN_MAX", "random length between the minimum and the maximum lengths"),
    ("LENGTH_JUST_BELOW_MAX", "length just below the maximum length"),
    ("LENGTH_MAX", "maximum length"),
    ("LENGTH_JUST_ABOVE_MAX", "length just above the maximum length"),
    ("LENGTH_RANDOM_ABOVE_MAX", "random length above the maximum length"),
    ("LENGTH_GREATEST", "greatest applicable length"),
    ("FORMAT_VALID", "valid format"),
    ("FORMAT_INVALID", "invalid format"),
    ("SET_FIRST_ELEMENT", "first element of the set"),
    ("SET_RANDOM_ELEMENT", "random element of the set"),
    ("SET_LAST_ELEMENT", "last element of the set"),
    ("SET_NOT_IN_SET", "value not in the set"),
    ("REQUIRED_FILLED", "filled"),
    ("REQUIRED_NOT_FILLED", "not filled"),
    ("COMPUTED", "computed value"),
];
