//! Annotations.

use serde::{Deserialize, Serialize};

use super::data::Literal;
use super::entity::{AnnotationProperty, AnonymousIndividual, Iri};
use super::kind::ConstructKind;

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AnnotationValue {
    Iri(Iri),
    Literal(Literal),
    AnonymousIndividual(AnonymousIndividual),
}

impl AnnotationValue {
    pub fn construct_kind(&self) -> ConstructKind {
        match self {
            AnnotationValue::Iri(_) => ConstructKind::Iri,
            AnnotationValue::Literal(_) => ConstructKind::Literal,
            AnnotationValue::AnonymousIndividual(_) => ConstructKind::AnonymousIndividual,
        }
    }
}

impl From<Literal> for AnnotationValue {
    fn from(v: Literal) -> Self { AnnotationValue::Literal(v) }
}

impl From<Iri> for AnnotationValue {
    fn from(v: Iri) -> Self { AnnotationValue::Iri(v) }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AnnotationSubject {
    Iri(Iri),
    AnonymousIndividual(AnonymousIndividual),
}

impl AnnotationSubject {
    pub fn construct_kind(&self) -> ConstructKind {
        match self {
            AnnotationSubject::Iri(_) => ConstructKind::Iri,
            AnnotationSubject::AnonymousIndividual(_) => ConstructKind::AnonymousIndividual,
        }
    }
}

impl From<Iri> for AnnotationSubject {
    fn from(v: Iri) -> Self { AnnotationSubject::Iri(v) }
}

/// `property value` pair, itself optionally annotated.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Annotation {
    pub property: AnnotationProperty,
    pub value: AnnotationValue,
    pub annotations: Vec<Annotation>,
}

impl Annotation {
    pub fn new(property: AnnotationProperty, value: impl Into<AnnotationValue>) -> Self {
        Self { property, value: value.into(), annotations: Vec::new() }
    }

    pub fn with_annotation(mut self, annotation: Annotation) -> Self {
        self.annotations.push(annotation);
        self
    }

    pub fn construct_kind(&self) -> ConstructKind {
        ConstructKind::Annotation
    }
}
