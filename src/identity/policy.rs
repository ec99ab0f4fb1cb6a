//! Identity policies: pure, total tables over construct kinds and edge labels.
//!
//! Every answer here changes how an entire construct family is shared in the
//! stored graph, so each table is a single exhaustive `match` with no
//! wildcard arms.

use serde::Serialize;

use crate::model::EdgeLabel;
use crate::owl::ConstructKind;

/// How a node's id is formed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum IdFormat {
    /// Digest of the canonical bytes. Equal constructs share one node.
    Digest,
    /// Digest of the canonical bytes, the enclosing axiom and an occurrence
    /// counter. Equal constructs in different places get different nodes.
    PerOccurrence,
    /// The identifier the caller supplies (project, branch, document).
    Keyed,
}

pub fn id_format_for(kind: ConstructKind) -> IdFormat {
    match kind {
        ConstructKind::Iri
        | ConstructKind::Entity(_)
        | ConstructKind::Literal
        | ConstructKind::PropertyChain
        | ConstructKind::Facet
        | ConstructKind::Axiom(_) => IdFormat::Digest,
        ConstructKind::AnonymousIndividual
        | ConstructKind::ClassExpression(_)
        | ConstructKind::ObjectInverseOf
        | ConstructKind::DataRange(_)
        | ConstructKind::FacetRestriction
        | ConstructKind::Annotation => IdFormat::PerOccurrence,
        ConstructKind::Project | ConstructKind::Branch | ConstructKind::OntologyDocument => {
            IdFormat::Keyed
        }
    }
}

/// Kinds whose graph role is scoped to one occurrence: they are translated in
/// full every time they are met, never collapsed onto an earlier encounter.
pub fn is_single_encounter(kind: ConstructKind) -> bool {
    match kind {
        ConstructKind::Axiom(_) | ConstructKind::Annotation => true,
        ConstructKind::Iri
        | ConstructKind::Entity(_)
        | ConstructKind::Literal
        | ConstructKind::AnonymousIndividual
        | ConstructKind::ClassExpression(_)
        | ConstructKind::ObjectInverseOf
        | ConstructKind::PropertyChain
        | ConstructKind::DataRange(_)
        | ConstructKind::FacetRestriction
        | ConstructKind::Facet
        | ConstructKind::Project
        | ConstructKind::Branch
        | ConstructKind::OntologyDocument => false,
    }
}

/// Derived shortcut edges. Never authoritative for deletes.
pub fn is_augmented_edge(label: EdgeLabel) -> bool {
    match label {
        EdgeLabel::SubClassOf
        | EdgeLabel::Type
        | EdgeLabel::SameIndividual
        | EdgeLabel::SubObjectPropertyOf
        | EdgeLabel::SubDataPropertyOf
        | EdgeLabel::SubAnnotationPropertyOf
        | EdgeLabel::PropertyDomain
        | EdgeLabel::PropertyRange => true,
        EdgeLabel::Branch
        | EdgeLabel::OntologyDocument
        | EdgeLabel::AxiomOf
        | EdgeLabel::InOntologySignature
        | EdgeLabel::EntityIri
        | EdgeLabel::AxiomSubject
        | EdgeLabel::AxiomAnnotation
        | EdgeLabel::AnnotationProperty
        | EdgeLabel::AnnotationValue
        | EdgeLabel::AnnotationAnnotation
        | EdgeLabel::ClassExpression
        | EdgeLabel::ObjectPropertyExpression
        | EdgeLabel::DataPropertyExpression
        | EdgeLabel::Individual
        | EdgeLabel::DataRange
        | EdgeLabel::Literal
        | EdgeLabel::ObjectProperty
        | EdgeLabel::Datatype
        | EdgeLabel::FacetRestriction
        | EdgeLabel::ConstrainingFacet
        | EdgeLabel::RestrictionValue
        | EdgeLabel::SubClassExpression
        | EdgeLabel::SuperClassExpression
        | EdgeLabel::Class
        | EdgeLabel::SubObjectPropertyExpression
        | EdgeLabel::SuperObjectPropertyExpression
        | EdgeLabel::SubDataPropertyExpression
        | EdgeLabel::SuperDataPropertyExpression
        | EdgeLabel::SubAnnotationProperty
        | EdgeLabel::SuperAnnotationProperty
        | EdgeLabel::Domain
        | EdgeLabel::Range
        | EdgeLabel::Entity
        | EdgeLabel::Subject
        | EdgeLabel::Object => false,
    }
}

/// Edges an axiom reaches its content through: everything that is neither a
/// derived shortcut nor part of the project/branch/document chain.
pub fn is_structural_edge(label: EdgeLabel) -> bool {
    !is_augmented_edge(label) && !label.is_context()
}
