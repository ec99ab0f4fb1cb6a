//! Annotations, annotation values and subjects.

use super::{Translator, fresh};
use crate::Result;
use crate::identity::canonical_order;
use crate::model::{EdgeLabel, Properties, Translation};
use crate::owl::{Annotation, AnnotationSubject, AnnotationValue, ConstructKind};

impl Translator {
    pub fn translate_annotation(&mut self, annotation: &Annotation) -> Result<Translation> {
        let mut b = fresh!(self.visit(ConstructKind::Annotation, annotation, Properties::new())?);

        let property = self.entity_of(annotation.property.clone())?;
        b.child(EdgeLabel::AnnotationProperty, property);
        let value = self.translate_annotation_value(&annotation.value)?;
        b.child(EdgeLabel::AnnotationValue, value);

        for nested in canonical_order(&annotation.annotations)? {
            let nested = self.translate_annotation(nested)?;
            b.child(EdgeLabel::AnnotationAnnotation, nested);
        }
        Ok(b.build())
    }

    pub fn translate_annotation_value(&mut self, value: &AnnotationValue) -> Result<Translation> {
        match value {
            AnnotationValue::Iri(iri) => self.translate_iri(iri),
            AnnotationValue::Literal(literal) => self.translate_literal(literal),
            AnnotationValue::AnonymousIndividual(i) => self.translate_anonymous_individual(i),
        }
    }

    pub fn translate_annotation_subject(&mut self, subject: &AnnotationSubject) -> Result<Translation> {
        match subject {
            AnnotationSubject::Iri(iri) => self.translate_iri(iri),
            AnnotationSubject::AnonymousIndividual(i) => self.translate_anonymous_individual(i),
        }
    }
}
