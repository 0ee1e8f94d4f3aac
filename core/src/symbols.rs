//! Reference delimiters and separators used in step sentences.
//!
//! These constants keep the recognizer and the step renderers in agreement.

/// Opens a constant reference, e.g. `[pi]`.
pub const CONSTANT_PREFIX: char = '[';

/// Closes a constant reference.
pub const CONSTANT_SUFFIX: char = ']';

/// Opens a UI literal, e.g. `<username>`.
pub const UI_LITERAL_PREFIX: char = '<';

/// Closes a UI literal.
pub const UI_LITERAL_SUFFIX: char = '>';

/// Opens a UI element reference, e.g. `{Username}`.
pub const UI_ELEMENT_PREFIX: char = '{';

/// Closes a UI element reference.
pub const UI_ELEMENT_SUFFIX: char = '}';

/// Separates a UI element from one of its properties, e.g. `{Username|value}`.
pub const UI_PROPERTY_REF_SEPARATOR: char = '|';

/// Separates a feature name from a UI element name, e.g. `{Login:Username}`.
pub const FEATURE_TO_UI_ELEMENT_SEPARATOR: char = ':';

/// Wraps a string value.
pub const VALUE_WRAPPER: char = '"';

/// Wraps a state reference, e.g. `~logged in~`.
pub const STATE_WRAPPER: char = '~';

/// Separates a descriptor from its detail in generated comments, e.g. `valid: random`.
pub const TITLE_SEPARATOR: char = ':';

/// Prefix used when a comment is rendered next to a step.
pub const COMMENT_PREFIX: char = '#';
