//! Properties — the sparse key-value map on nodes and edges.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::Value;

/// The fixed property-field vocabulary shared with every read-side accessor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PropertyField {
    ProjectId,
    BranchId,
    OntologyDocumentId,
    Digest,
    Iri,
    LexicalForm,
    Datatype,
    Language,
    Cardinality,
    Pos,
    NodeId,
    EdgeId,
    Augmented,
}

impl PropertyField {
    pub const ALL: [PropertyField; 13] = [
        PropertyField::ProjectId,
        PropertyField::BranchId,
        PropertyField::OntologyDocumentId,
        PropertyField::Digest,
        PropertyField::Iri,
        PropertyField::LexicalForm,
        PropertyField::Datatype,
        PropertyField::Language,
        PropertyField::Cardinality,
        PropertyField::Pos,
        PropertyField::NodeId,
        PropertyField::EdgeId,
        PropertyField::Augmented,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyField::ProjectId => "projectId",
            PropertyField::BranchId => "branchId",
            PropertyField::OntologyDocumentId => "ontologyDocumentId",
            PropertyField::Digest => "digest",
            PropertyField::Iri => "iri",
            PropertyField::LexicalForm => "lexicalForm",
            PropertyField::Datatype => "datatype",
            PropertyField::Language => "language",
            PropertyField::Cardinality => "cardinality",
            PropertyField::Pos => "pos",
            PropertyField::NodeId => "nodeId",
            PropertyField::EdgeId => "edgeId",
            PropertyField::Augmented => "augmented",
        }
    }
}

impl fmt::Display for PropertyField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Immutable property map. Absent keys are omitted, never stored as null.
///
/// Iteration order is the field order of [`PropertyField`], which keeps
/// rendered statements stable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Properties(BTreeMap<PropertyField, Value>);

impl Properties {
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    pub fn with(mut self, field: PropertyField, value: impl Into<Value>) -> Self {
        self.0.insert(field, value.into());
        self
    }

    /// Adds the field only when a value is present.
    pub fn with_opt<V: Into<Value>>(self, field: PropertyField, value: Option<V>) -> Self {
        match value {
            Some(v) => self.with(field, v),
            None => self,
        }
    }

    pub fn get(&self, field: PropertyField) -> Option<&Value> {
        self.0.get(&field)
    }

    pub fn get_str(&self, field: PropertyField) -> Option<&str> {
        self.get(field).and_then(Value::as_str)
    }

    pub fn contains(&self, field: PropertyField) -> bool {
        self.0.contains_key(&field)
    }

    pub fn iter(&self) -> impl Iterator<Item = (PropertyField, &Value)> {
        self.0.iter().map(|(k, v)| (*k, v))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Copy of this map without `field`.
    pub fn without(&self, field: PropertyField) -> Self {
        let mut map = self.0.clone();
        map.remove(&field);
        Self(map)
    }
}

impl FromIterator<(PropertyField, Value)> for Properties {
    fn from_iter<I: IntoIterator<Item = (PropertyField, Value)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_values_are_omitted() {
        let props = Properties::new()
            .with(PropertyField::LexicalForm, "x")
            .with_opt(PropertyField::Language, None::<String>);
        assert_eq!(props.len(), 1);
        assert!(!props.contains(PropertyField::Language));
    }

    #[test]
    fn test_equality_by_content() {
        let a = Properties::new()
            .with(PropertyField::Iri, "http://ex.org/A")
            .with(PropertyField::Pos, 1);
        let b = Properties::new()
            .with(PropertyField::Pos, 1)
            .with(PropertyField::Iri, "http://ex.org/A");
        assert_eq!(a, b);
    }

    #[test]
    fn test_serializes_with_vocabulary_names() {
        let props = Properties::new().with(PropertyField::OntologyDocumentId, "d1");
        let json = serde_json::to_string(&props).unwrap();
        assert_eq!(json, r#"{"ontologyDocumentId":"d1"}"#);
    }

    #[test]
    fn test_field_names_unique() {
        let mut names: Vec<&str> = PropertyField::ALL.iter().map(|f| f.as_str()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), PropertyField::ALL.len());
    }
}
