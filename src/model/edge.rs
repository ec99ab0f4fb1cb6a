//! Edge (relationship) in the property graph.

use std::fmt;

use serde::Serialize;

use super::{Node, Properties};

/// Stable edge identifier: a 128-bit digest over start id, end id and label.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct EdgeId(String);

impl EdgeId {
    pub(crate) fn from_hex(hex: String) -> Self {
        Self(hex)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The closed edge-label vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum EdgeLabel {
    // Context chain and document membership
    Branch,
    OntologyDocument,
    AxiomOf,
    InOntologySignature,

    EntityIri,

    AxiomSubject,
    AxiomAnnotation,
    AnnotationProperty,
    AnnotationValue,
    AnnotationAnnotation,

    // Operand roles
    ClassExpression,
    ObjectPropertyExpression,
    DataPropertyExpression,
    Individual,
    DataRange,
    Literal,
    ObjectProperty,
    Datatype,
    FacetRestriction,
    ConstrainingFacet,
    RestrictionValue,

    // Axiom roles
    SubClassExpression,
    SuperClassExpression,
    Class,
    SubObjectPropertyExpression,
    SuperObjectPropertyExpression,
    SubDataPropertyExpression,
    SuperDataPropertyExpression,
    SubAnnotationProperty,
    SuperAnnotationProperty,
    Domain,
    Range,
    Entity,
    Subject,
    Object,

    // Augmented shortcuts
    SubClassOf,
    Type,
    SameIndividual,
    SubObjectPropertyOf,
    SubDataPropertyOf,
    SubAnnotationPropertyOf,
    PropertyDomain,
    PropertyRange,
}

impl EdgeLabel {
    pub const ALL: [EdgeLabel; 43] = [
        EdgeLabel::Branch,
        EdgeLabel::OntologyDocument,
        EdgeLabel::AxiomOf,
        EdgeLabel::InOntologySignature,
        EdgeLabel::EntityIri,
        EdgeLabel::AxiomSubject,
        EdgeLabel::AxiomAnnotation,
        EdgeLabel::AnnotationProperty,
        EdgeLabel::AnnotationValue,
        EdgeLabel::AnnotationAnnotation,
        EdgeLabel::ClassExpression,
        EdgeLabel::ObjectPropertyExpression,
        EdgeLabel::DataPropertyExpression,
        EdgeLabel::Individual,
        EdgeLabel::DataRange,
        EdgeLabel::Literal,
        EdgeLabel::ObjectProperty,
        EdgeLabel::Datatype,
        EdgeLabel::FacetRestriction,
        EdgeLabel::ConstrainingFacet,
        EdgeLabel::RestrictionValue,
        EdgeLabel::SubClassExpression,
        EdgeLabel::SuperClassExpression,
        EdgeLabel::Class,
        EdgeLabel::SubObjectPropertyExpression,
        EdgeLabel::SuperObjectPropertyExpression,
        EdgeLabel::SubDataPropertyExpression,
        EdgeLabel::SuperDataPropertyExpression,
        EdgeLabel::SubAnnotationProperty,
        EdgeLabel::SuperAnnotationProperty,
        EdgeLabel::Domain,
        EdgeLabel::Range,
        EdgeLabel::Entity,
        EdgeLabel::Subject,
        EdgeLabel::Object,
        EdgeLabel::SubClassOf,
        EdgeLabel::Type,
        EdgeLabel::SameIndividual,
        EdgeLabel::SubObjectPropertyOf,
        EdgeLabel::SubDataPropertyOf,
        EdgeLabel::SubAnnotationPropertyOf,
        EdgeLabel::PropertyDomain,
        EdgeLabel::PropertyRange,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EdgeLabel::Branch => "branch",
            EdgeLabel::OntologyDocument => "ontologyDocument",
            EdgeLabel::AxiomOf => "axiomOf",
            EdgeLabel::InOntologySignature => "inOntologySignature",
            EdgeLabel::EntityIri => "entityIri",
            EdgeLabel::AxiomSubject => "axiomSubject",
            EdgeLabel::AxiomAnnotation => "axiomAnnotation",
            EdgeLabel::AnnotationProperty => "annotationProperty",
            EdgeLabel::AnnotationValue => "annotationValue",
            EdgeLabel::AnnotationAnnotation => "annotationAnnotation",
            EdgeLabel::ClassExpression => "classExpression",
            EdgeLabel::ObjectPropertyExpression => "objectPropertyExpression",
            EdgeLabel::DataPropertyExpression => "dataPropertyExpression",
            EdgeLabel::Individual => "individual",
            EdgeLabel::DataRange => "dataRange",
            EdgeLabel::Literal => "literal",
            EdgeLabel::ObjectProperty => "objectProperty",
            EdgeLabel::Datatype => "datatype",
            EdgeLabel::FacetRestriction => "facetRestriction",
            EdgeLabel::ConstrainingFacet => "constrainingFacet",
            EdgeLabel::RestrictionValue => "restrictionValue",
            EdgeLabel::SubClassExpression => "subClassExpression",
            EdgeLabel::SuperClassExpression => "superClassExpression",
            EdgeLabel::Class => "class",
            EdgeLabel::SubObjectPropertyExpression => "subObjectPropertyExpression",
            EdgeLabel::SuperObjectPropertyExpression => "superObjectPropertyExpression",
            EdgeLabel::SubDataPropertyExpression => "subDataPropertyExpression",
            EdgeLabel::SuperDataPropertyExpression => "superDataPropertyExpression",
            EdgeLabel::SubAnnotationProperty => "subAnnotationProperty",
            EdgeLabel::SuperAnnotationProperty => "superAnnotationProperty",
            EdgeLabel::Domain => "domain",
            EdgeLabel::Range => "range",
            EdgeLabel::Entity => "entity",
            EdgeLabel::Subject => "subject",
            EdgeLabel::Object => "object",
            EdgeLabel::SubClassOf => "subClassOf",
            EdgeLabel::Type => "type",
            EdgeLabel::SameIndividual => "sameIndividual",
            EdgeLabel::SubObjectPropertyOf => "subObjectPropertyOf",
            EdgeLabel::SubDataPropertyOf => "subDataPropertyOf",
            EdgeLabel::SubAnnotationPropertyOf => "subAnnotationPropertyOf",
            EdgeLabel::PropertyDomain => "propertyDomain",
            EdgeLabel::PropertyRange => "propertyRange",
        }
    }

    /// Labels that tie encoded structure to the project/branch/document
    /// chain rather than describing ontology content.
    pub fn is_context(&self) -> bool {
        matches!(
            self,
            EdgeLabel::Branch
                | EdgeLabel::OntologyDocument
                | EdgeLabel::AxiomOf
                | EdgeLabel::InOntologySignature
        )
    }
}

impl fmt::Display for EdgeLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A directed, labelled edge between two nodes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Edge {
    id: EdgeId,
    start: Node,
    end: Node,
    label: EdgeLabel,
    properties: Properties,
}

impl Edge {
    pub fn new(id: EdgeId, start: Node, end: Node, label: EdgeLabel, properties: Properties) -> Self {
        Self { id, start, end, label, properties }
    }

    pub fn id(&self) -> &EdgeId {
        &self.id
    }

    pub fn start(&self) -> &Node {
        &self.start
    }

    pub fn end(&self) -> &Node {
        &self.end
    }

    pub fn label(&self) -> EdgeLabel {
        self.label
    }

    pub fn properties(&self) -> &Properties {
        &self.properties
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_label_strings_unique() {
        let names: HashSet<&str> = EdgeLabel::ALL.iter().map(|l| l.as_str()).collect();
        assert_eq!(names.len(), EdgeLabel::ALL.len());
    }

    #[test]
    fn test_serialized_label_matches_as_str() {
        for label in EdgeLabel::ALL {
            let json = serde_json::to_string(&label).unwrap();
            assert_eq!(json, format!("\"{}\"", label.as_str()));
        }
    }
}
