//! Generation context shared by the pre-test-cases of a run.

use crate::GenError;
use scenaria_core::{Constant, Document, Location, Spec, Step, UiElement, Value};
use std::collections::BTreeMap;
use tracing::warn;

/// Steps an external step turned into, with the values it typed.
#[derive(Debug, Clone, PartialEq)]
pub struct ExternalStep {
    pub steps: Vec<Step>,
    /// Values typed into UI elements, keyed by the element's variable.
    pub values: BTreeMap<String, Value>,
}

/// The specification, the document under generation, diagnostics and the
/// external step cache of a generation run.
///
/// Diagnostics are deduplicated by message as they are pushed, so a missing
/// symbol referenced many times is reported once.
#[derive(Debug)]
pub struct GenContext<'a> {
    pub spec: &'a Spec,
    pub doc: Option<&'a Document>,
    pub errors: Vec<GenError>,
    pub warnings: Vec<GenError>,
    external_steps: BTreeMap<String, ExternalStep>,
    external_values: BTreeMap<String, Value>,
}

impl<'a> GenContext<'a> {
    pub fn new(spec: &'a Spec, doc: Option<&'a Document>) -> Self {
        Self {
            spec,
            doc,
            errors: Vec::new(),
            warnings: Vec::new(),
            external_steps: BTreeMap::new(),
            external_values: BTreeMap::new(),
        }
    }

    /// Context of a document of the specification, looked up by path.
    pub fn for_document(spec: &'a Spec, path: &str) -> Self {
        Self::new(spec, spec.document(path))
    }

    /// Resolves a UI element variable from the current document.
    pub fn ui_element(&self, variable: &str) -> Option<&'a UiElement> {
        self.spec.ui_element_by_variable(variable, self.doc)
    }

    pub fn constant(&self, name: &str) -> Option<&'a Constant> {
        self.spec.constant(name, self.doc)
    }

    /// Location of a step, in the current document when it has no file.
    pub fn location_of(&self, step: &Step) -> Location {
        match (&step.location.file_path, self.doc) {
            (None, Some(doc)) => step.location.clone().in_file(doc.file_name()),
            _ => step.location.clone(),
        }
    }

    pub fn push_error(&mut self, err: GenError) {
        if !contains_message(&self.errors, &err) {
            self.errors.push(err);
        }
    }

    pub fn push_warning(&mut self, err: GenError) {
        if !contains_message(&self.warnings, &err) {
            warn!(warning = %err, "generation warning");
            self.warnings.push(err);
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Removes diagnostics whose message was already reported, for lists
    /// that were filled directly.
    pub fn dedup(&mut self) {
        dedup_by_message(&mut self.errors);
        dedup_by_message(&mut self.warnings);
    }

    /// Cached transformation of an external step, by step content.
    pub fn external_step(&self, content: &str) -> Option<&ExternalStep> {
        self.external_steps.get(content)
    }

    pub fn cache_external_step(&mut self, content: impl Into<String>, external: ExternalStep) {
        self.external_values
            .extend(external.values.iter().map(|(k, v)| (k.clone(), v.clone())));
        self.external_steps.insert(content.into(), external);
    }

    /// Values typed by external steps so far, keyed by element variable.
    pub fn external_values(&self) -> &BTreeMap<String, Value> {
        &self.external_values
    }
}

fn contains_message(list: &[GenError], err: &GenError) -> bool {
    let message = err.to_string();
    list.iter().any(|e| e.to_string() == message)
}

fn dedup_by_message(list: &mut Vec<GenError>) {
    let mut seen = std::collections::BTreeSet::new();
    list.retain(|e| seen.insert(e.to_string()));
}
