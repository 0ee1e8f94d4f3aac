//! Steps and the entities recognized in them.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Position of a node in a specification file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
    /// File the node was read from, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_path: Option<String>,
    pub line: usize,
    pub column: usize,
}

impl Location {
    pub fn new(line: usize, column: usize) -> Self {
        Self {
            file_path: None,
            line,
            column,
        }
    }

    pub fn in_file(mut self, file_path: impl Into<String>) -> Self {
        self.file_path = Some(file_path.into());
        self
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.file_path {
            Some(path) => write!(f, "{} ({},{})", path, self.line, self.column),
            None => write!(f, "({},{})", self.line, self.column),
        }
    }
}

/// Kind of step, given by its starting keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeType {
    Given,
    When,
    Then,
    And,
    Otherwise,
}

/// Kind of an entity recognized inside a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    /// An action such as "fill"; `value` holds the normalized action.
    UiAction,
    /// A UI literal, e.g. `<username>`.
    UiLiteral,
    /// A UI element reference, e.g. `{Username}` or `{Login:Username}`.
    UiElement,
    /// A UI element property reference, e.g. `{Username|value}`.
    UiPropertyRef,
    /// A constant reference, e.g. `[pi]`.
    Constant,
    /// A quoted value, e.g. `"foo"`.
    Value,
    /// A number, e.g. `3.14`.
    Number,
    /// A state reference, e.g. `~logged in~`.
    State,
}

/// An entity recognized inside a step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    pub kind: EntityKind,
    /// Normalized content: the name inside the delimiters, the unquoted
    /// value, or the normalized action.
    pub value: String,
    /// Text exactly as it appears in the step content, delimiters included.
    pub text: String,
    /// Byte offset of `text` in the step content.
    pub position: usize,
    /// Referenced property, for `UiPropertyRef` entities.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub property: Option<String>,
}

impl Entity {
    pub fn new(
        kind: EntityKind,
        value: impl Into<String>,
        text: impl Into<String>,
        position: usize,
    ) -> Self {
        Self {
            kind,
            value: value.into(),
            text: text.into(),
            position,
            property: None,
        }
    }

    pub fn with_property(mut self, property: impl Into<String>) -> Self {
        self.property = Some(property.into());
        self
    }
}

/// A step of a scenario, variant, precondition or "otherwise" clause.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Step {
    /// Step sentence, without leading indentation.
    pub content: String,
    pub node_type: NodeType,
    pub location: Location,
    /// Entities recognized in `content`, ordered by position.
    #[serde(default, skip_serializing)]
    pub entities: Vec<Entity>,
    /// Whether the step comes from a referenced precondition or state
    /// setting scenario rather than from the scenario under test.
    #[serde(default, skip_serializing)]
    pub external: bool,
    /// Trailing comment added by generation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl Step {
    pub fn new(content: impl Into<String>, node_type: NodeType, location: Location) -> Self {
        Self {
            content: content.into(),
            node_type,
            location,
            entities: Vec::new(),
            external: false,
            comment: None,
        }
    }

    pub fn with_entities(mut self, mut entities: Vec<Entity>) -> Self {
        entities.sort_by_key(|e| e.position);
        self.entities = entities;
        self
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    /// Marks the step as belonging to an external (precondition) scenario.
    pub fn external(mut self) -> Self {
        self.external = true;
        self
    }

    /// Entities of the given kind, in source order.
    pub fn entities_of(&self, kind: EntityKind) -> impl Iterator<Item = &Entity> {
        self.entities.iter().filter(move |e| e.kind == kind)
    }

    pub fn has_entity(&self, kind: EntityKind) -> bool {
        self.entities.iter().any(|e| e.kind == kind)
    }

    /// The fill action of the step, if it has one.
    pub fn fill_action(&self) -> Option<&Entity> {
        self.entities_of(EntityKind::UiAction)
            .find(|e| e.value == crate::FILL_ACTION)
    }

    /// Whether the step carries an explicit value to fill with: a quoted
    /// value, a number, a constant or a property reference.
    pub fn has_value(&self) -> bool {
        self.entities.iter().any(|e| {
            matches!(
                e.kind,
                EntityKind::Value
                    | EntityKind::Number
                    | EntityKind::Constant
                    | EntityKind::UiPropertyRef
            )
        })
    }

    /// Content followed by its comment, as written to a test case file.
    pub fn render(&self) -> String {
        match &self.comment {
            Some(comment) => format!(
                "{} {} {}",
                self.content,
                crate::symbols::COMMENT_PREFIX,
                comment
            ),
            None => self.content.clone(),
        }
    }
}
