//! The OWL 2 axiom taxonomy.

use serde::{Deserialize, Serialize};

use super::annotation::{Annotation, AnnotationSubject, AnnotationValue};
use super::data::{DataRange, Literal};
use super::entity::{AnnotationProperty, Class, DataProperty, Datatype, Entity, Individual, Iri};
use super::expression::{ClassExpression, ObjectPropertyExpression};
use super::kind::{AxiomType, ConstructKind};

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Axiom {
    Declaration(Entity),

    // Class axioms
    SubClassOf {
        sub: ClassExpression,
        sup: ClassExpression,
    },
    EquivalentClasses(Vec<ClassExpression>),
    DisjointClasses(Vec<ClassExpression>),
    DisjointUnion {
        class: Class,
        operands: Vec<ClassExpression>,
    },

    // Object property axioms
    SubObjectPropertyOf {
        sub: ObjectPropertyExpression,
        sup: ObjectPropertyExpression,
    },
    SubPropertyChainOf {
        chain: Vec<ObjectPropertyExpression>,
        sup: ObjectPropertyExpression,
    },
    EquivalentObjectProperties(Vec<ObjectPropertyExpression>),
    DisjointObjectProperties(Vec<ObjectPropertyExpression>),
    InverseObjectProperties(ObjectPropertyExpression, ObjectPropertyExpression),
    ObjectPropertyDomain {
        property: ObjectPropertyExpression,
        domain: ClassExpression,
    },
    ObjectPropertyRange {
        property: ObjectPropertyExpression,
        range: ClassExpression,
    },
    FunctionalObjectProperty(ObjectPropertyExpression),
    InverseFunctionalObjectProperty(ObjectPropertyExpression),
    ReflexiveObjectProperty(ObjectPropertyExpression),
    IrreflexiveObjectProperty(ObjectPropertyExpression),
    SymmetricObjectProperty(ObjectPropertyExpression),
    AsymmetricObjectProperty(ObjectPropertyExpression),
    TransitiveObjectProperty(ObjectPropertyExpression),

    // Data property axioms
    SubDataPropertyOf {
        sub: DataProperty,
        sup: DataProperty,
    },
    EquivalentDataProperties(Vec<DataProperty>),
    DisjointDataProperties(Vec<DataProperty>),
    DataPropertyDomain {
        property: DataProperty,
        domain: ClassExpression,
    },
    DataPropertyRange {
        property: DataProperty,
        range: DataRange,
    },
    FunctionalDataProperty(DataProperty),

    DatatypeDefinition {
        datatype: Datatype,
        range: DataRange,
    },
    HasKey {
        class: ClassExpression,
        object_properties: Vec<ObjectPropertyExpression>,
        data_properties: Vec<DataProperty>,
    },

    // Assertions
    SameIndividual(Vec<Individual>),
    DifferentIndividuals(Vec<Individual>),
    ClassAssertion {
        class: ClassExpression,
        individual: Individual,
    },
    ObjectPropertyAssertion {
        property: ObjectPropertyExpression,
        subject: Individual,
        object: Individual,
    },
    NegativeObjectPropertyAssertion {
        property: ObjectPropertyExpression,
        subject: Individual,
        object: Individual,
    },
    DataPropertyAssertion {
        property: DataProperty,
        subject: Individual,
        object: Literal,
    },
    NegativeDataPropertyAssertion {
        property: DataProperty,
        subject: Individual,
        object: Literal,
    },

    // Annotation axioms
    AnnotationAssertion {
        property: AnnotationProperty,
        subject: AnnotationSubject,
        value: AnnotationValue,
    },
    SubAnnotationPropertyOf {
        sub: AnnotationProperty,
        sup: AnnotationProperty,
    },
    AnnotationPropertyDomain {
        property: AnnotationProperty,
        domain: Iri,
    },
    AnnotationPropertyRange {
        property: AnnotationProperty,
        range: Iri,
    },
}

impl Axiom {
    pub fn axiom_type(&self) -> AxiomType {
        match self {
            Axiom::Declaration(_) => AxiomType::Declaration,
            Axiom::SubClassOf { .. } => AxiomType::SubClassOf,
            Axiom::EquivalentClasses(_) => AxiomType::EquivalentClasses,
            Axiom::DisjointClasses(_) => AxiomType::DisjointClasses,
            Axiom::DisjointUnion { .. } => AxiomType::DisjointUnion,
            Axiom::SubObjectPropertyOf { .. } => AxiomType::SubObjectPropertyOf,
            Axiom::SubPropertyChainOf { .. } => AxiomType::SubPropertyChainOf,
            Axiom::EquivalentObjectProperties(_) => AxiomType::EquivalentObjectProperties,
            Axiom::DisjointObjectProperties(_) => AxiomType::DisjointObjectProperties,
            Axiom::InverseObjectProperties(..) => AxiomType::InverseObjectProperties,
            Axiom::ObjectPropertyDomain { .. } => AxiomType::ObjectPropertyDomain,
            Axiom::ObjectPropertyRange { .. } => AxiomType::ObjectPropertyRange,
            Axiom::FunctionalObjectProperty(_) => AxiomType::FunctionalObjectProperty,
            Axiom::InverseFunctionalObjectProperty(_) => AxiomType::InverseFunctionalObjectProperty,
            Axiom::ReflexiveObjectProperty(_) => AxiomType::ReflexiveObjectProperty,
            Axiom::IrreflexiveObjectProperty(_) => AxiomType::IrreflexiveObjectProperty,
            Axiom::SymmetricObjectProperty(_) => AxiomType::SymmetricObjectProperty,
            Axiom::AsymmetricObjectProperty(_) => AxiomType::AsymmetricObjectProperty,
            Axiom::TransitiveObjectProperty(_) => AxiomType::TransitiveObjectProperty,
            Axiom::SubDataPropertyOf { .. } => AxiomType::SubDataPropertyOf,
            Axiom::EquivalentDataProperties(_) => AxiomType::EquivalentDataProperties,
            Axiom::DisjointDataProperties(_) => AxiomType::DisjointDataProperties,
            Axiom::DataPropertyDomain { .. } => AxiomType::DataPropertyDomain,
            Axiom::DataPropertyRange { .. } => AxiomType::DataPropertyRange,
            Axiom::FunctionalDataProperty(_) => AxiomType::FunctionalDataProperty,
            Axiom::DatatypeDefinition { .. } => AxiomType::DatatypeDefinition,
            Axiom::HasKey { .. } => AxiomType::HasKey,
            Axiom::SameIndividual(_) => AxiomType::SameIndividual,
            Axiom::DifferentIndividuals(_) => AxiomType::DifferentIndividuals,
            Axiom::ClassAssertion { .. } => AxiomType::ClassAssertion,
            Axiom::ObjectPropertyAssertion { .. } => AxiomType::ObjectPropertyAssertion,
            Axiom::NegativeObjectPropertyAssertion { .. } => {
                AxiomType::NegativeObjectPropertyAssertion
            }
            Axiom::DataPropertyAssertion { .. } => AxiomType::DataPropertyAssertion,
            Axiom::NegativeDataPropertyAssertion { .. } => AxiomType::NegativeDataPropertyAssertion,
            Axiom::AnnotationAssertion { .. } => AxiomType::AnnotationAssertion,
            Axiom::SubAnnotationPropertyOf { .. } => AxiomType::SubAnnotationPropertyOf,
            Axiom::AnnotationPropertyDomain { .. } => AxiomType::AnnotationPropertyDomain,
            Axiom::AnnotationPropertyRange { .. } => AxiomType::AnnotationPropertyRange,
        }
    }

    pub fn construct_kind(&self) -> ConstructKind {
        ConstructKind::Axiom(self.axiom_type())
    }

    pub fn annotated(self, annotations: impl IntoIterator<Item = Annotation>) -> AnnotatedAxiom {
        AnnotatedAxiom { axiom: self, annotations: annotations.into_iter().collect() }
    }
}

/// An axiom together with its axiom annotations.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct AnnotatedAxiom {
    pub axiom: Axiom,
    pub annotations: Vec<Annotation>,
}

impl AnnotatedAxiom {
    pub fn axiom_type(&self) -> AxiomType {
        self.axiom.axiom_type()
    }

    pub fn construct_kind(&self) -> ConstructKind {
        self.axiom.construct_kind()
    }
}

impl From<Axiom> for AnnotatedAxiom {
    fn from(axiom: Axiom) -> Self {
        Self { axiom, annotations: Vec::new() }
    }
}

/// One entry of an ontology change list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum OntologyChange {
    AddAxiom(AnnotatedAxiom),
    RemoveAxiom(AnnotatedAxiom),
}

impl OntologyChange {
    pub fn axiom(&self) -> &AnnotatedAxiom {
        match self {
            OntologyChange::AddAxiom(a) | OntologyChange::RemoveAxiom(a) => a,
        }
    }
}
