//! Minimal sentence recognizer.
//!
//! Tags the reference syntax used by steps (`[constant]`, `<literal>`,
//! `{Element}`, `{Element|property}`, `"value"`, numbers, `~state~`) and
//! the fill verbs of the dictionary. It stands in for the full natural
//! language recognizer of the specification compiler.

use crate::{symbols, Entity, EntityKind, KeywordDictionary, Location, NodeType, Step, FILL_ACTION};
use thiserror::Error;

/// Errors found while recognizing a sentence.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RecognitionError {
    #[error("Unclosed '{open}' at {location}: expected '{close}'")]
    Unclosed {
        open: char,
        close: char,
        location: Location,
    },

    #[error("Empty reference '{text}' at {location}")]
    EmptyReference { text: String, location: Location },

    #[error("Sentence does not start with a step keyword at {location}: {content}")]
    MissingStepKeyword { content: String, location: Location },
}

pub type RecognitionResult<T> = Result<T, RecognitionError>;

/// Recognizes step sentences written with a keyword dictionary.
pub struct SentenceRecognizer<'a> {
    dict: &'a KeywordDictionary,
}

impl<'a> SentenceRecognizer<'a> {
    pub fn new(dict: &'a KeywordDictionary) -> Self {
        Self { dict }
    }

    /// Recognizes a step sentence. Leading and trailing whitespace is removed
    /// and the step type comes from the starting keyword.
    pub fn recognize(&self, sentence: &str, location: Location) -> RecognitionResult<Step> {
        let content = sentence.trim();
        let node_type = self.node_type_of(content).ok_or_else(|| {
            RecognitionError::MissingStepKeyword {
                content: content.to_string(),
                location: location.clone(),
            }
        })?;
        let entities = Scanner::new(content, self.dict, &location).scan()?;
        Ok(Step::new(content, node_type, location).with_entities(entities))
    }

    /// Recognizes several sentences, one per line, starting at `first_line`.
    pub fn recognize_all(&self, sentences: &[&str], first_line: usize) -> RecognitionResult<Vec<Step>> {
        sentences
            .iter()
            .enumerate()
            .map(|(i, s)| {
                let column = s.len() - s.trim_start().len() + 1;
                self.recognize(s, Location::new(first_line + i, column))
            })
            .collect()
    }

    fn node_type_of(&self, content: &str) -> Option<NodeType> {
        let candidates = [
            (NodeType::Given, &self.dict.step_given),
            (NodeType::When, &self.dict.step_when),
            (NodeType::Then, &self.dict.step_then),
            (NodeType::And, &self.dict.step_and),
            (NodeType::Otherwise, &self.dict.step_otherwise),
        ];
        let lower = content.to_lowercase();
        let mut best: Option<(usize, NodeType)> = None;
        for (node_type, keywords) in candidates {
            for keyword in keywords.iter() {
                let keyword = keyword.to_lowercase();
                let at_boundary = lower
                    .strip_prefix(keyword.as_str())
                    .map(|rest| rest.is_empty() || !rest.starts_with(char::is_alphanumeric))
                    .unwrap_or(false);
                if at_boundary && best.map(|(len, _)| keyword.len() > len).unwrap_or(true) {
                    best = Some((keyword.len(), node_type));
                }
            }
        }
        best.map(|(_, node_type)| node_type)
    }
}

struct Scanner<'a> {
    input: &'a str,
    chars: std::iter::Peekable<std::str::CharIndices<'a>>,
    dict: &'a KeywordDictionary,
    location: &'a Location,
}

impl<'a> Scanner<'a> {
    fn new(input: &'a str, dict: &'a KeywordDictionary, location: &'a Location) -> Self {
        Self {
            input,
            chars: input.char_indices().peekable(),
            dict,
            location,
        }
    }

    fn scan(mut self) -> RecognitionResult<Vec<Entity>> {
        let mut entities = Vec::new();
        while let Some((start, c)) = self.chars.next() {
            let entity = match c {
                symbols::VALUE_WRAPPER => Some(self.delimited(start, c, symbols::VALUE_WRAPPER, EntityKind::Value)?),
                symbols::CONSTANT_PREFIX => {
                    Some(self.delimited(start, c, symbols::CONSTANT_SUFFIX, EntityKind::Constant)?)
                }
                symbols::UI_LITERAL_PREFIX => {
                    Some(self.delimited(start, c, symbols::UI_LITERAL_SUFFIX, EntityKind::UiLiteral)?)
                }
                symbols::UI_ELEMENT_PREFIX => Some(self.element(start)?),
                symbols::STATE_WRAPPER => Some(self.delimited(start, c, symbols::STATE_WRAPPER, EntityKind::State)?),
                c if c.is_ascii_digit() || (c == '-' && self.next_is_digit()) => {
                    if self.at_word_start(start) {
                        Some(self.number(start))
                    } else {
                        None
                    }
                }
                c if c.is_alphabetic() => self.word(start),
                _ => None,
            };
            entities.extend(entity);
        }
        Ok(entities)
    }

    fn next_is_digit(&mut self) -> bool {
        self.chars.peek().map(|(_, c)| c.is_ascii_digit()).unwrap_or(false)
    }

    fn at_word_start(&self, start: usize) -> bool {
        self.input[..start]
            .chars()
            .next_back()
            .map(|c| c.is_whitespace() || c == ',' || c == '(')
            .unwrap_or(true)
    }

    /// Consumes up to the closing delimiter, returning the end offset.
    fn close(&mut self, open: char, close: char, start: usize) -> RecognitionResult<usize> {
        let mut escaped = false;
        for (pos, c) in self.chars.by_ref() {
            if escaped {
                escaped = false;
                continue;
            }
            if c == '\\' && open == symbols::VALUE_WRAPPER {
                escaped = true;
                continue;
            }
            if c == close {
                return Ok(pos + c.len_utf8());
            }
        }
        Err(RecognitionError::Unclosed {
            open,
            close,
            location: self.location_at(start),
        })
    }

    fn delimited(&mut self, start: usize, open: char, close: char, kind: EntityKind) -> RecognitionResult<Entity> {
        let end = self.close(open, close, start)?;
        let text = &self.input[start..end];
        let inner = &text[open.len_utf8()..text.len() - close.len_utf8()];
        let value = if kind == EntityKind::Value {
            inner.replace("\\\"", "\"")
        } else {
            inner.trim().to_string()
        };
        if value.is_empty() && kind != EntityKind::Value {
            return Err(RecognitionError::EmptyReference {
                text: text.to_string(),
                location: self.location_at(start),
            });
        }
        Ok(Entity::new(kind, value, text, start))
    }

    fn element(&mut self, start: usize) -> RecognitionResult<Entity> {
        let entity = self.delimited(start, symbols::UI_ELEMENT_PREFIX, symbols::UI_ELEMENT_SUFFIX, EntityKind::UiElement)?;
        match entity.value.split_once(symbols::UI_PROPERTY_REF_SEPARATOR) {
            Some((element, property)) => {
                let (element, property) = (element.trim(), property.trim());
                if element.is_empty() || property.is_empty() {
                    return Err(RecognitionError::EmptyReference {
                        text: entity.text,
                        location: self.location_at(start),
                    });
                }
                Ok(Entity::new(EntityKind::UiPropertyRef, element, entity.text, start)
                    .with_property(property))
            }
            None => Ok(entity),
        }
    }

    fn number(&mut self, start: usize) -> Entity {
        let mut end = start + 1;
        while let Some(&(pos, c)) = self.chars.peek() {
            let continues_fraction = c == '.'
                && self.input[pos + 1..]
                    .chars()
                    .next()
                    .map(|n| n.is_ascii_digit())
                    .unwrap_or(false);
            if !(c.is_ascii_digit() || continues_fraction) {
                break;
            }
            end = pos + c.len_utf8();
            self.chars.next();
        }
        let text = &self.input[start..end];
        Entity::new(EntityKind::Number, text, text, start)
    }

    fn word(&mut self, start: usize) -> Option<Entity> {
        let mut end = start;
        if let Some(c) = self.input[start..].chars().next() {
            end += c.len_utf8();
        }
        while let Some(&(pos, c)) = self.chars.peek() {
            if !c.is_alphanumeric() {
                break;
            }
            end = pos + c.len_utf8();
            self.chars.next();
        }
        let text = &self.input[start..end];
        if self.dict.is_fill_verb(text) {
            Some(Entity::new(EntityKind::UiAction, FILL_ACTION, text, start))
        } else {
            None
        }
    }

    fn location_at(&self, offset: usize) -> Location {
        let mut location = self.location.clone();
        location.column += self.input[..offset].chars().count();
        location
    }
}
