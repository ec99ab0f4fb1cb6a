//! # OWL 2 Structural Model
//!
//! Read-only, already-parsed ontology constructs. Parsing and serialization
//! formats live elsewhere; the encoder only needs the closed set of
//! construct variants to match on.

pub mod annotation;
pub mod axiom;
pub mod data;
pub mod entity;
pub mod expression;
pub mod kind;
pub mod vocab;

pub use annotation::{Annotation, AnnotationSubject, AnnotationValue};
pub use axiom::{AnnotatedAxiom, Axiom, OntologyChange};
pub use data::{DataRange, FacetRestriction, Literal};
pub use entity::{
    AnnotationProperty, AnonymousIndividual, Class, DataProperty, Datatype, Entity, Individual,
    Iri, NamedIndividual, ObjectProperty,
};
pub use expression::{ClassExpression, ObjectPropertyExpression};
pub use kind::{
    AxiomCategory, AxiomType, ClassExpressionType, ConstructKind, DataRangeType, EntityType,
};
pub use vocab::Facet;
