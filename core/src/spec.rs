//! Documents and the specification-wide resolver.
//!
//! Lookups go from the innermost scope to the outermost one, the way a
//! variable scope does: the current document's feature, the current
//! document's global declarations, then every other document.

use crate::{symbols, Constant, UiElement};
use serde::{Deserialize, Serialize};

/// A feature and the UI elements it declares.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    pub name: String,
    #[serde(default)]
    pub ui_elements: Vec<UiElement>,
}

impl Feature {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ui_elements: Vec::new(),
        }
    }

    /// Adds an element, recording this feature as its owner.
    pub fn with_ui_element(mut self, mut uie: UiElement) -> Self {
        uie.feature = Some(self.name.clone());
        self.ui_elements.push(uie);
        self
    }
}

/// A specification document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub path: String,
    #[serde(default)]
    pub feature: Option<Feature>,
    /// UI elements declared outside any feature.
    #[serde(default)]
    pub ui_elements: Vec<UiElement>,
    #[serde(default)]
    pub constants: Vec<Constant>,
}

impl Document {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            feature: None,
            ui_elements: Vec::new(),
            constants: Vec::new(),
        }
    }

    pub fn with_feature(mut self, feature: Feature) -> Self {
        self.feature = Some(feature);
        self
    }

    pub fn with_ui_element(mut self, uie: UiElement) -> Self {
        self.ui_elements.push(uie);
        self
    }

    pub fn with_constant(mut self, constant: Constant) -> Self {
        self.constants.push(constant);
        self
    }

    /// File name without directories, for diagnostics.
    pub fn file_name(&self) -> &str {
        self.path
            .rsplit(['/', '\\'])
            .next()
            .unwrap_or(self.path.as_str())
    }

    /// All UI elements of the document: feature elements first.
    pub fn all_ui_elements(&self) -> impl Iterator<Item = &UiElement> {
        self.feature
            .iter()
            .flat_map(|f| f.ui_elements.iter())
            .chain(self.ui_elements.iter())
    }

    /// Finds an element by a variable, with or without delimiters and with or
    /// without the feature name.
    pub fn find_ui_element(&self, variable: &str) -> Option<&UiElement> {
        let variable = strip_element_delimiters(variable);
        match split_feature(variable) {
            (Some(feature), name) => self
                .feature
                .as_ref()
                .filter(|f| f.name == feature)
                .and_then(|f| f.ui_elements.iter().find(|e| e.name == name)),
            (None, name) => self.all_ui_elements().find(|e| e.name == name),
        }
    }

    pub fn find_constant(&self, name: &str) -> Option<&Constant> {
        self.constants.iter().find(|c| c.name == name)
    }
}

/// The whole specification: every document of a generation run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Spec {
    pub documents: Vec<Document>,
}

impl Spec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_document(mut self, doc: Document) -> Self {
        self.documents.push(doc);
        self
    }

    pub fn document(&self, path: &str) -> Option<&Document> {
        self.documents.iter().find(|d| d.path == path)
    }

    /// Resolves a UI element variable.
    ///
    /// A fully-qualified variable (`Feature:Element`) is looked up by feature
    /// name across all documents. A bare name is looked up in `doc` first and
    /// then among the global elements of every document.
    pub fn ui_element_by_variable<'a>(&'a self, variable: &str, doc: Option<&'a Document>) -> Option<&'a UiElement> {
        let variable = strip_element_delimiters(variable);
        if let (Some(_), _) = split_feature(variable) {
            return self.documents.iter().find_map(|d| d.find_ui_element(variable));
        }
        if let Some(found) = doc.and_then(|d| d.find_ui_element(variable)) {
            return Some(found);
        }
        self.documents
            .iter()
            .find_map(|d| d.ui_elements.iter().find(|e| e.name == variable))
    }

    /// Resolves a constant, looking in `doc` first.
    pub fn constant<'a>(&'a self, name: &str, doc: Option<&'a Document>) -> Option<&'a Constant> {
        if let Some(found) = doc.and_then(|d| d.find_constant(name)) {
            return Some(found);
        }
        self.documents.iter().find_map(|d| d.find_constant(name))
    }
}

fn strip_element_delimiters(variable: &str) -> &str {
    let variable = variable.trim();
    variable
        .strip_prefix(symbols::UI_ELEMENT_PREFIX)
        .and_then(|v| v.strip_suffix(symbols::UI_ELEMENT_SUFFIX))
        .unwrap_or(variable)
}

/// Splits `Feature:Element` into its parts.
pub fn split_feature(variable: &str) -> (Option<&str>, &str) {
    match variable.split_once(symbols::FEATURE_TO_UI_ELEMENT_SEPARATOR) {
        Some((feature, name)) => (Some(feature.trim()), name.trim()),
        None => (None, variable.trim()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Value;

    fn doc() -> Document {
        Document::new("specs/doc1.feature")
            .with_feature(Feature::new("Feature A").with_ui_element(UiElement::new("foo")))
            .with_ui_element(UiElement::new("bar"))
    }

    #[test]
    fn test_finds_ui_element_of_a_feature() {
        let doc = doc();
        assert!(doc.find_ui_element("{Feature A:foo}").is_some());
        assert!(doc.find_ui_element("{foo}").is_some());
    }

    #[test]
    fn test_finds_global_ui_element() {
        let doc = doc();
        let bar = doc.find_ui_element("{bar}").unwrap();
        assert_eq!(bar.full_variable_name(), "bar");
    }

    #[test]
    fn test_does_not_find_non_existent_ui_element() {
        assert!(doc().find_ui_element("{zoo}").is_none());
        assert!(doc().find_ui_element("{Feature B:foo}").is_none());
    }

    #[test]
    fn test_spec_resolves_across_documents() {
        // GIVEN
        let other = Document::new("doc2.feature")
            .with_ui_element(UiElement::new("shared"))
            .with_constant(Constant::new("pi", 3.14));
        let spec = Spec::new().with_document(doc()).with_document(other);
        let doc1 = spec.document("specs/doc1.feature");

        // THEN
        assert!(spec.ui_element_by_variable("shared", doc1).is_some());
        assert!(spec.ui_element_by_variable("Feature A:foo", None).is_some());
        // feature elements are not visible from other documents without the feature name
        assert!(spec.ui_element_by_variable("foo", spec.document("doc2.feature")).is_none());
        assert!(spec.constant("pi", doc1).is_some());
        assert_eq!(doc1.unwrap().file_name(), "doc1.feature");
    }

    #[test]
    fn test_spec_resolves_from_a_document_it_does_not_own() {
        let spec = Spec::new().with_document(Document::new("doc2.feature").with_constant(Constant::new("pi", 3.14)));
        let local = Document::new("draft.feature")
            .with_ui_element(UiElement::new("local"))
            .with_constant(Constant::new("pi", 3.0));

        let found = spec.ui_element_by_variable("local", Some(&local));
        let pi = spec.constant("pi", Some(&local));

        assert_eq!(found.map(|e| e.name.as_str()), Some("local"));
        assert_eq!(pi.map(|c| &c.value), Some(&Value::Float(3.0)));
    }
}
