//! Node in the property graph.

use std::fmt;

use serde::Serialize;
use smallvec::SmallVec;

use super::{Properties, PropertyField, Value};
use crate::identity::IdFormat;
use crate::owl::{ConstructKind, EntityType};

/// Stable node identifier.
///
/// Digest and per-occurrence ids are hex digests stored under `digest`;
/// keyed ids (project, branch, document) are the caller-supplied identifier
/// stored under their own field.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct NodeId {
    format: IdFormat,
    key: PropertyField,
    value: String,
}

impl NodeId {
    pub(crate) fn hashed(format: IdFormat, hex: String) -> Self {
        Self { format, key: PropertyField::Digest, value: hex }
    }

    pub(crate) fn keyed(key: PropertyField, value: impl Into<String>) -> Self {
        Self { format: IdFormat::Keyed, key, value: value.into() }
    }

    pub fn format(&self) -> IdFormat {
        self.format
    }

    /// Property under which this id is stored and matched.
    pub fn key_field(&self) -> PropertyField {
        self.key
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

/// Ordered, non-empty label set: the most specific label first, then every
/// supertype label.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct NodeLabels(SmallVec<[&'static str; 4]>);

impl NodeLabels {
    pub fn new(primary: &'static str) -> Self {
        let mut labels = SmallVec::new();
        labels.push(primary);
        Self(labels)
    }

    /// Full label set of the node encoding a construct of `kind`.
    pub fn for_kind(kind: ConstructKind) -> Self {
        let labels = Self::new(kind.name());
        match kind {
            ConstructKind::Iri => labels.and("AnnotationSubject").and("AnnotationValue"),
            ConstructKind::Entity(t) => match t {
                EntityType::Class => labels.and("ClassExpression"),
                EntityType::ObjectProperty => labels.and("ObjectPropertyExpression"),
                EntityType::DataProperty => labels.and("DataPropertyExpression"),
                EntityType::NamedIndividual => labels.and("Individual"),
                EntityType::Datatype => labels.and("DataRange"),
                EntityType::AnnotationProperty => labels,
            }
            .and("Entity"),
            ConstructKind::Literal => labels.and("AnnotationValue"),
            ConstructKind::AnonymousIndividual => {
                labels.and("Individual").and("AnnotationSubject").and("AnnotationValue")
            }
            ConstructKind::ClassExpression(t) => {
                let labels = if t.is_restriction() { labels.and("Restriction") } else { labels };
                labels.and("ClassExpression")
            }
            ConstructKind::ObjectInverseOf => labels.and("ObjectPropertyExpression"),
            ConstructKind::DataRange(_) => labels.and("DataRange"),
            ConstructKind::Axiom(t) => match t.category().label() {
                Some(category) => labels.and(category),
                None => labels,
            }
            .and("Axiom"),
            ConstructKind::PropertyChain
            | ConstructKind::FacetRestriction
            | ConstructKind::Facet
            | ConstructKind::Annotation
            | ConstructKind::Project
            | ConstructKind::Branch
            | ConstructKind::OntologyDocument => labels,
        }
    }

    pub fn and(mut self, label: &'static str) -> Self {
        if !self.0.contains(&label) {
            self.0.push(label);
        }
        self
    }

    pub fn primary(&self) -> &'static str {
        self.0[0]
    }

    pub fn contains(&self, label: &str) -> bool {
        self.0.iter().any(|l| *l == label)
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.0.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }
}

/// A node in the property graph. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Node {
    id: NodeId,
    labels: NodeLabels,
    properties: Properties,
}

impl Node {
    /// The id's key field is always written into the properties so a stored
    /// node can be matched back by it.
    pub fn new(id: NodeId, labels: NodeLabels, properties: Properties) -> Self {
        let properties = properties.with(id.key_field(), id.as_str());
        Self { id, labels, properties }
    }

    pub fn id(&self) -> &NodeId {
        &self.id
    }

    pub fn labels(&self) -> &NodeLabels {
        &self.labels
    }

    pub fn properties(&self) -> &Properties {
        &self.properties
    }

    pub fn has_label(&self, label: &str) -> bool {
        self.labels.contains(label)
    }

    pub fn get(&self, field: PropertyField) -> Option<&Value> {
        self.properties.get(field)
    }

    /// `(field, value)` pair used to match-or-create this node.
    pub fn key(&self) -> (PropertyField, Value) {
        (self.id.key_field(), Value::from(self.id.as_str()))
    }
}
