//! Canonical byte serialization of OWL constructs.
//!
//! The byte stream is the input of every digest, so it is part of the
//! storage compatibility contract: changing it changes every stored id.
//!
//! Layout: each construct starts with its kind name, strings are
//! length-prefixed, unordered operand sets are written as the sorted,
//! de-duplicated list of their members' encodings, ordered sequences keep
//! their order.

use crate::owl::{
    AnnotatedAxiom, Annotation, AnnotationProperty, AnnotationSubject, AnnotationValue,
    AnonymousIndividual, Axiom, Class, ClassExpression, ConstructKind, DataProperty, DataRange,
    Datatype, Entity, EntityType, Facet, FacetRestriction, Individual, Iri, Literal,
    NamedIndividual, ObjectProperty, ObjectPropertyExpression, vocab,
};
use crate::{Error, Result};

/// Buffer that constructs write their canonical form into.
#[derive(Debug, Default)]
pub struct CanonicalWriter {
    buf: Vec<u8>,
}

impl CanonicalWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }

    fn raw(&mut self, bytes: &[u8]) {
        self.buf.extend_from_slice(&(bytes.len() as u32).to_be_bytes());
        self.buf.extend_from_slice(bytes);
    }

    pub fn kind(&mut self, kind: ConstructKind) {
        self.raw(kind.name().as_bytes());
    }

    pub fn str(&mut self, s: &str) {
        self.raw(s.as_bytes());
    }

    pub fn u32(&mut self, v: u32) {
        self.buf.extend_from_slice(&v.to_be_bytes());
    }

    pub fn opt<T: Canonicalize + ?Sized>(&mut self, v: Option<&T>) -> Result<()> {
        match v {
            None => {
                self.buf.push(0);
                Ok(())
            }
            Some(v) => {
                self.buf.push(1);
                v.write_canonical(self)
            }
        }
    }

    pub fn item<T: Canonicalize + ?Sized>(&mut self, v: &T) -> Result<()> {
        v.write_canonical(self)
    }

    /// Ordered sequence: member order is significant.
    pub fn seq<'a, T: Canonicalize + 'a>(
        &mut self,
        owner: ConstructKind,
        items: impl IntoIterator<Item = &'a T>,
    ) -> Result<()> {
        let encoded = items
            .into_iter()
            .map(canonical_bytes)
            .collect::<Result<Vec<_>>>()?;
        if encoded.is_empty() {
            return Err(Error::Canonicalization(format!("{owner} has no operands")));
        }
        self.u32(encoded.len() as u32);
        for e in &encoded {
            self.raw(e);
        }
        Ok(())
    }

    /// Unordered set: written in sorted order with duplicates collapsed.
    pub fn set<'a, T: Canonicalize + 'a>(
        &mut self,
        owner: ConstructKind,
        items: impl IntoIterator<Item = &'a T>,
    ) -> Result<()> {
        let encoded = sorted_encodings(items)?;
        if encoded.is_empty() {
            return Err(Error::Canonicalization(format!("{owner} has no operands")));
        }
        self.u32(encoded.len() as u32);
        for e in &encoded {
            self.raw(e);
        }
        Ok(())
    }

    /// Like [`set`](Self::set) but an empty set is valid.
    pub fn set_or_empty<'a, T: Canonicalize + 'a>(
        &mut self,
        items: impl IntoIterator<Item = &'a T>,
    ) -> Result<()> {
        let encoded = sorted_encodings(items)?;
        self.u32(encoded.len() as u32);
        for e in &encoded {
            self.raw(e);
        }
        Ok(())
    }
}

fn sorted_encodings<'a, T: Canonicalize + 'a>(
    items: impl IntoIterator<Item = &'a T>,
) -> Result<Vec<Vec<u8>>> {
    let mut encoded = items
        .into_iter()
        .map(canonical_bytes)
        .collect::<Result<Vec<_>>>()?;
    encoded.sort();
    encoded.dedup();
    Ok(encoded)
}

/// A construct with a canonical byte form.
pub trait Canonicalize {
    fn write_canonical(&self, w: &mut CanonicalWriter) -> Result<()>;
}

pub fn canonical_bytes<T: Canonicalize + ?Sized>(construct: &T) -> Result<Vec<u8>> {
    let mut w = CanonicalWriter::new();
    construct.write_canonical(&mut w)?;
    Ok(w.into_bytes())
}

/// Orders operands by their canonical form, keeping duplicates.
///
/// Translators walk set operands in this order so that per-occurrence
/// counters, and therefore ids, do not depend on input order.
pub fn canonical_order<T: Canonicalize>(items: &[T]) -> Result<Vec<&T>> {
    let mut keyed = items
        .iter()
        .map(|item| Ok((canonical_bytes(item)?, item)))
        .collect::<Result<Vec<_>>>()?;
    keyed.sort_by(|a, b| a.0.cmp(&b.0));
    Ok(keyed.into_iter().map(|(_, item)| item).collect())
}

/// Maps a facet IRI onto the closed OWL 2 facet vocabulary.
pub fn resolve_facet(iri: &Iri) -> Result<Facet> {
    Facet::from_iri(iri.as_str())
        .ok_or_else(|| Error::UnsupportedConstruct(format!("constraining facet {iri}")))
}

/// An ordered object property chain (`SubPropertyChainOf` left-hand side).
#[derive(Debug, Clone, Copy)]
pub struct PropertyChain<'a>(pub &'a [ObjectPropertyExpression]);

/// The facet of a facet restriction, as its own shared node.
#[derive(Debug, Clone, Copy)]
pub struct FacetNode(pub Facet);

// ============================================================================
// Leaves
// ============================================================================

impl Canonicalize for Iri {
    fn write_canonical(&self, w: &mut CanonicalWriter) -> Result<()> {
        if self.as_str().is_empty() {
            return Err(Error::Canonicalization("empty IRI".into()));
        }
        w.kind(ConstructKind::Iri);
        w.str(self.as_str());
        Ok(())
    }
}

fn write_entity(w: &mut CanonicalWriter, t: EntityType, iri: &Iri) -> Result<()> {
    w.kind(ConstructKind::Entity(t));
    w.item(iri)
}

impl Canonicalize for Entity {
    fn write_canonical(&self, w: &mut CanonicalWriter) -> Result<()> {
        write_entity(w, self.entity_type(), self.iri())
    }
}

macro_rules! canonical_entity {
    ($($name:ident),*) => {
        $(
            impl Canonicalize for $name {
                fn write_canonical(&self, w: &mut CanonicalWriter) -> Result<()> {
                    write_entity(w, EntityType::$name, self.iri())
                }
            }
        )*
    };
}

canonical_entity!(Class, ObjectProperty, DataProperty, AnnotationProperty, NamedIndividual, Datatype);

impl Canonicalize for AnonymousIndividual {
    fn write_canonical(&self, w: &mut CanonicalWriter) -> Result<()> {
        w.kind(ConstructKind::AnonymousIndividual);
        w.str(self.node_id());
        Ok(())
    }
}

impl Canonicalize for Individual {
    fn write_canonical(&self, w: &mut CanonicalWriter) -> Result<()> {
        match self {
            Individual::Named(i) => i.write_canonical(w),
            Individual::Anonymous(i) => i.write_canonical(w),
        }
    }
}

impl Canonicalize for Literal {
    fn write_canonical(&self, w: &mut CanonicalWriter) -> Result<()> {
        let lang_string = self.datatype.iri().as_str() == vocab::RDF_LANG_STRING;
        match (&self.language, lang_string) {
            (Some(lang), false) => {
                return Err(Error::Canonicalization(format!(
                    "language tag @{lang} on literal of type {}",
                    self.datatype.iri()
                )));
            }
            (None, true) => {
                return Err(Error::Canonicalization(
                    "rdf:langString literal without language tag".into(),
                ));
            }
            _ => {}
        }
        w.kind(ConstructKind::Literal);
        w.str(&self.lexical_form);
        w.item(self.datatype.iri())?;
        match &self.language {
            // Language tags are case-insensitive.
            Some(lang) => w.str(&lang.to_ascii_lowercase()),
            None => w.str(""),
        }
        Ok(())
    }
}

// ============================================================================
// Expressions
// ============================================================================

impl Canonicalize for ObjectPropertyExpression {
    fn write_canonical(&self, w: &mut CanonicalWriter) -> Result<()> {
        match self {
            ObjectPropertyExpression::ObjectProperty(p) => p.write_canonical(w),
            ObjectPropertyExpression::InverseOf(p) => {
                w.kind(ConstructKind::ObjectInverseOf);
                p.write_canonical(w)
            }
        }
    }
}

impl Canonicalize for PropertyChain<'_> {
    fn write_canonical(&self, w: &mut CanonicalWriter) -> Result<()> {
        w.kind(ConstructKind::PropertyChain);
        w.seq(ConstructKind::PropertyChain, self.0.iter())
    }
}

fn write_cardinality<F: Canonicalize>(
    w: &mut CanonicalWriter,
    cardinality: u32,
    property: &impl Canonicalize,
    filler: Option<&F>,
) -> Result<()> {
    w.u32(cardinality);
    w.item(property)?;
    w.opt(filler)
}

impl Canonicalize for ClassExpression {
    fn write_canonical(&self, w: &mut CanonicalWriter) -> Result<()> {
        let kind = self.construct_kind();
        if let ClassExpression::Class(c) = self {
            return c.write_canonical(w);
        }
        w.kind(kind);
        match self {
            ClassExpression::Class(_) => Ok(()),
            ClassExpression::ObjectIntersectionOf(ops) | ClassExpression::ObjectUnionOf(ops) => {
                w.set(kind, ops.iter())
            }
            ClassExpression::ObjectComplementOf(op) => w.item(op.as_ref()),
            ClassExpression::ObjectOneOf(individuals) => w.set(kind, individuals.iter()),
            ClassExpression::ObjectSomeValuesFrom { property, filler }
            | ClassExpression::ObjectAllValuesFrom { property, filler } => {
                w.item(property)?;
                w.item(filler.as_ref())
            }
            ClassExpression::ObjectHasValue { property, value } => {
                w.item(property)?;
                w.item(value)
            }
            ClassExpression::ObjectHasSelf(property) => w.item(property),
            ClassExpression::ObjectMinCardinality { cardinality, property, filler }
            | ClassExpression::ObjectMaxCardinality { cardinality, property, filler }
            | ClassExpression::ObjectExactCardinality { cardinality, property, filler } => {
                write_cardinality(w, *cardinality, property, filler.as_deref())
            }
            ClassExpression::DataSomeValuesFrom { property, filler }
            | ClassExpression::DataAllValuesFrom { property, filler } => {
                w.item(property)?;
                w.item(filler)
            }
            ClassExpression::DataHasValue { property, value } => {
                w.item(property)?;
                w.item(value)
            }
            ClassExpression::DataMinCardinality { cardinality, property, filler }
            | ClassExpression::DataMaxCardinality { cardinality, property, filler }
            | ClassExpression::DataExactCardinality { cardinality, property, filler } => {
                write_cardinality(w, *cardinality, property, filler.as_ref())
            }
        }
    }
}

impl Canonicalize for FacetNode {
    fn write_canonical(&self, w: &mut CanonicalWriter) -> Result<()> {
        w.kind(ConstructKind::Facet);
        w.str(&self.0.iri());
        Ok(())
    }
}

impl Canonicalize for FacetRestriction {
    fn write_canonical(&self, w: &mut CanonicalWriter) -> Result<()> {
        let facet = resolve_facet(&self.facet)?;
        w.kind(ConstructKind::FacetRestriction);
        w.item(&FacetNode(facet))?;
        w.item(&self.value)
    }
}

impl Canonicalize for DataRange {
    fn write_canonical(&self, w: &mut CanonicalWriter) -> Result<()> {
        let kind = self.construct_kind();
        if let DataRange::Datatype(d) = self {
            return d.write_canonical(w);
        }
        w.kind(kind);
        match self {
            DataRange::Datatype(_) => Ok(()),
            DataRange::DataIntersectionOf(ops) | DataRange::DataUnionOf(ops) => {
                w.set(kind, ops.iter())
            }
            DataRange::DataComplementOf(op) => w.item(op.as_ref()),
            DataRange::DataOneOf(literals) => w.set(kind, literals.iter()),
            DataRange::DatatypeRestriction { datatype, restrictions } => {
                w.item(datatype)?;
                w.seq(kind, restrictions.iter())
            }
        }
    }
}

// ============================================================================
// Annotations
// ============================================================================

impl Canonicalize for AnnotationValue {
    fn write_canonical(&self, w: &mut CanonicalWriter) -> Result<()> {
        match self {
            AnnotationValue::Iri(iri) => iri.write_canonical(w),
            AnnotationValue::Literal(l) => l.write_canonical(w),
            AnnotationValue::AnonymousIndividual(i) => i.write_canonical(w),
        }
    }
}

impl Canonicalize for AnnotationSubject {
    fn write_canonical(&self, w: &mut CanonicalWriter) -> Result<()> {
        match self {
            AnnotationSubject::Iri(iri) => iri.write_canonical(w),
            AnnotationSubject::AnonymousIndividual(i) => i.write_canonical(w),
        }
    }
}

impl Canonicalize for Annotation {
    fn write_canonical(&self, w: &mut CanonicalWriter) -> Result<()> {
        w.kind(ConstructKind::Annotation);
        w.item(&self.property)?;
        w.item(&self.value)?;
        w.set_or_empty(self.annotations.iter())
    }
}

// ============================================================================
// Axioms
// ============================================================================

impl Canonicalize for Axiom {
    fn write_canonical(&self, w: &mut CanonicalWriter) -> Result<()> {
        let kind = self.construct_kind();
        w.kind(kind);
        match self {
            Axiom::Declaration(entity) => w.item(entity),
            Axiom::SubClassOf { sub, sup } => {
                w.item(sub)?;
                w.item(sup)
            }
            Axiom::EquivalentClasses(ops) | Axiom::DisjointClasses(ops) => w.set(kind, ops.iter()),
            Axiom::DisjointUnion { class, operands } => {
                w.item(class)?;
                w.set(kind, operands.iter())
            }
            Axiom::SubObjectPropertyOf { sub, sup } => {
                w.item(sub)?;
                w.item(sup)
            }
            Axiom::SubPropertyChainOf { chain, sup } => {
                w.item(&PropertyChain(chain))?;
                w.item(sup)
            }
            Axiom::EquivalentObjectProperties(ops) | Axiom::DisjointObjectProperties(ops) => {
                w.set(kind, ops.iter())
            }
            Axiom::InverseObjectProperties(a, b) => w.set(kind, [a, b]),
            Axiom::ObjectPropertyDomain { property, domain: ce }
            | Axiom::ObjectPropertyRange { property, range: ce } => {
                w.item(property)?;
                w.item(ce)
            }
            Axiom::FunctionalObjectProperty(p)
            | Axiom::InverseFunctionalObjectProperty(p)
            | Axiom::ReflexiveObjectProperty(p)
            | Axiom::IrreflexiveObjectProperty(p)
            | Axiom::SymmetricObjectProperty(p)
            | Axiom::AsymmetricObjectProperty(p)
            | Axiom::TransitiveObjectProperty(p) => w.item(p),
            Axiom::SubDataPropertyOf { sub, sup } => {
                w.item(sub)?;
                w.item(sup)
            }
            Axiom::EquivalentDataProperties(ops) | Axiom::DisjointDataProperties(ops) => {
                w.set(kind, ops.iter())
            }
            Axiom::DataPropertyDomain { property, domain } => {
                w.item(property)?;
                w.item(domain)
            }
            Axiom::DataPropertyRange { property, range } => {
                w.item(property)?;
                w.item(range)
            }
            Axiom::FunctionalDataProperty(p) => w.item(p),
            Axiom::DatatypeDefinition { datatype, range } => {
                w.item(datatype)?;
                w.item(range)
            }
            Axiom::HasKey { class, object_properties, data_properties } => {
                if object_properties.is_empty() && data_properties.is_empty() {
                    return Err(Error::Canonicalization("HasKey has no key properties".into()));
                }
                w.item(class)?;
                w.set_or_empty(object_properties.iter())?;
                w.set_or_empty(data_properties.iter())
            }
            Axiom::SameIndividual(ops) | Axiom::DifferentIndividuals(ops) => {
                w.set(kind, ops.iter())
            }
            Axiom::ClassAssertion { class, individual } => {
                w.item(class)?;
                w.item(individual)
            }
            Axiom::ObjectPropertyAssertion { property, subject, object }
            | Axiom::NegativeObjectPropertyAssertion { property, subject, object } => {
                w.item(property)?;
                w.item(subject)?;
                w.item(object)
            }
            Axiom::DataPropertyAssertion { property, subject, object }
            | Axiom::NegativeDataPropertyAssertion { property, subject, object } => {
                w.item(property)?;
                w.item(subject)?;
                w.item(object)
            }
            Axiom::AnnotationAssertion { property, subject, value } => {
                w.item(property)?;
                w.item(subject)?;
                w.item(value)
            }
            Axiom::SubAnnotationPropertyOf { sub, sup } => {
                w.item(sub)?;
                w.item(sup)
            }
            Axiom::AnnotationPropertyDomain { property, domain: iri }
            | Axiom::AnnotationPropertyRange { property, range: iri } => {
                w.item(property)?;
                w.item(iri)
            }
        }
    }
}

impl Canonicalize for AnnotatedAxiom {
    fn write_canonical(&self, w: &mut CanonicalWriter) -> Result<()> {
        w.item(&self.axiom)?;
        w.set_or_empty(self.annotations.iter())
    }
}
