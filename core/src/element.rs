//! UI elements, their properties, and constants.

use crate::{symbols, CaseType, Location, Step, Value};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Property a UI element can declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UiPropertyKind {
    /// Identifier used as the element's UI literal.
    Id,
    /// Declared value, or value set when the value is a list.
    Value,
    MinLength,
    MaxLength,
    MinValue,
    MaxValue,
    /// Regular expression the value must match.
    Format,
    Required,
    /// Explicit data type, e.g. `"integer"`.
    DataType,
    /// Value computed elsewhere; the declared value is the one supplied.
    Computed,
}

impl UiPropertyKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            UiPropertyKind::Id => "id",
            UiPropertyKind::Value => "value",
            UiPropertyKind::MinLength => "minlength",
            UiPropertyKind::MaxLength => "maxlength",
            UiPropertyKind::MinValue => "minvalue",
            UiPropertyKind::MaxValue => "maxvalue",
            UiPropertyKind::Format => "format",
            UiPropertyKind::Required => "required",
            UiPropertyKind::DataType => "datatype",
            UiPropertyKind::Computed => "computed",
        }
    }
}

impl fmt::Display for UiPropertyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A property declared by a UI element, with its "otherwise" clauses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiProperty {
    pub kind: UiPropertyKind,
    pub value: Value,
    /// Steps that describe what happens when the property is not satisfied.
    #[serde(default)]
    pub otherwise: Vec<Step>,
    #[serde(default)]
    pub location: Location,
}

impl UiProperty {
    pub fn new(kind: UiPropertyKind, value: impl Into<Value>) -> Self {
        Self {
            kind,
            value: value.into(),
            otherwise: Vec::new(),
            location: Location::default(),
        }
    }

    pub fn with_otherwise(mut self, steps: Vec<Step>) -> Self {
        self.otherwise = steps;
        self
    }

    pub fn at(mut self, location: Location) -> Self {
        self.location = location;
        self
    }
}

/// A UI element declared in a feature or globally in a document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiElement {
    pub name: String,
    /// Feature that declares the element; `None` for global elements.
    #[serde(default)]
    pub feature: Option<String>,
    #[serde(default)]
    pub properties: Vec<UiProperty>,
    #[serde(default)]
    pub location: Location,
}

impl UiElement {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            feature: None,
            properties: Vec::new(),
            location: Location::default(),
        }
    }

    pub fn with_property(mut self, property: UiProperty) -> Self {
        self.properties.push(property);
        self
    }

    /// Variable that identifies the element across the specification:
    /// `Feature:Element` for feature elements, the bare name otherwise.
    pub fn full_variable_name(&self) -> String {
        match &self.feature {
            Some(feature) => format!(
                "{}{}{}",
                feature,
                symbols::FEATURE_TO_UI_ELEMENT_SEPARATOR,
                self.name
            ),
            None => self.name.clone(),
        }
    }

    /// First property of the given kind.
    pub fn property(&self, kind: UiPropertyKind) -> Option<&UiProperty> {
        self.properties.iter().find(|p| p.kind == kind)
    }

    pub fn has_property(&self, kind: UiPropertyKind) -> bool {
        self.property(kind).is_some()
    }

    /// Literal that identifies the element in the UI: its `id` property when
    /// declared, its name converted to the given case otherwise.
    pub fn ui_literal(&self, case: CaseType) -> String {
        match self.property(UiPropertyKind::Id).map(|p| &p.value) {
            Some(Value::String(id)) => id.clone(),
            Some(other) => other.as_text(),
            None => case.convert(&self.name),
        }
    }
}

/// A named constant declared in a document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Constant {
    pub name: String,
    pub value: Value,
}

impl Constant {
    pub fn new(name: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}
