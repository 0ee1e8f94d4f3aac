//! String case conversion for UI literals derived from element names.

use serde::{Deserialize, Serialize};

/// Case applied to a UI element name when it has to become a UI literal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaseType {
    #[default]
    Camel,
    Pascal,
    Snake,
    Kebab,
    Lower,
    Upper,
}

impl CaseType {
    pub fn convert(&self, text: &str) -> String {
        let words = split_words(text);
        match self {
            CaseType::Camel => words
                .iter()
                .enumerate()
                .map(|(i, w)| {
                    if i == 0 {
                        w.to_lowercase()
                    } else {
                        capitalize(w)
                    }
                })
                .collect(),
            CaseType::Pascal => words.iter().map(|w| capitalize(w)).collect(),
            CaseType::Snake => join_lower(&words, "_"),
            CaseType::Kebab => join_lower(&words, "-"),
            CaseType::Lower => join_lower(&words, " "),
            CaseType::Upper => join_lower(&words, " ").to_uppercase(),
        }
    }
}

/// Splits on anything that is not alphanumeric and on lower-to-upper
/// transitions, so `"userName"`, `"user name"` and `"user-name"` agree.
fn split_words(text: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut prev_lower = false;
    for c in text.chars() {
        if !c.is_alphanumeric() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            prev_lower = false;
            continue;
        }
        if c.is_uppercase() && prev_lower && !current.is_empty() {
            words.push(std::mem::take(&mut current));
        }
        prev_lower = c.is_lowercase() || c.is_numeric();
        current.push(c);
    }
    if !current.is_empty() {
        words.push(current);
    }
    words
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

fn join_lower(words: &[String], separator: &str) -> String {
    words
        .iter()
        .map(|w| w.to_lowercase())
        .collect::<Vec<_>>()
        .join(separator)
}

/// Upper-cases the first character, as done for step keywords.
pub fn upper_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
