//! Construct kinds: the closed taxonomy every identity policy dispatches on.
//!
//! The `name()` of each kind is also the most specific graph label of the
//! node that encodes it, so these strings are part of the stored schema.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum EntityType {
    Class,
    ObjectProperty,
    DataProperty,
    AnnotationProperty,
    NamedIndividual,
    Datatype,
}

impl EntityType {
    pub const ALL: [EntityType; 6] = [
        EntityType::Class,
        EntityType::ObjectProperty,
        EntityType::DataProperty,
        EntityType::AnnotationProperty,
        EntityType::NamedIndividual,
        EntityType::Datatype,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            EntityType::Class => "Class",
            EntityType::ObjectProperty => "ObjectProperty",
            EntityType::DataProperty => "DataProperty",
            EntityType::AnnotationProperty => "AnnotationProperty",
            EntityType::NamedIndividual => "NamedIndividual",
            EntityType::Datatype => "Datatype",
        }
    }
}

/// Anonymous class expression kinds. Named classes are entities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ClassExpressionType {
    ObjectIntersectionOf,
    ObjectUnionOf,
    ObjectComplementOf,
    ObjectOneOf,
    ObjectSomeValuesFrom,
    ObjectAllValuesFrom,
    ObjectHasValue,
    ObjectHasSelf,
    ObjectMinCardinality,
    ObjectMaxCardinality,
    ObjectExactCardinality,
    DataSomeValuesFrom,
    DataAllValuesFrom,
    DataHasValue,
    DataMinCardinality,
    DataMaxCardinality,
    DataExactCardinality,
}

impl ClassExpressionType {
    pub const ALL: [ClassExpressionType; 17] = [
        ClassExpressionType::ObjectIntersectionOf,
        ClassExpressionType::ObjectUnionOf,
        ClassExpressionType::ObjectComplementOf,
        ClassExpressionType::ObjectOneOf,
        ClassExpressionType::ObjectSomeValuesFrom,
        ClassExpressionType::ObjectAllValuesFrom,
        ClassExpressionType::ObjectHasValue,
        ClassExpressionType::ObjectHasSelf,
        ClassExpressionType::ObjectMinCardinality,
        ClassExpressionType::ObjectMaxCardinality,
        ClassExpressionType::ObjectExactCardinality,
        ClassExpressionType::DataSomeValuesFrom,
        ClassExpressionType::DataAllValuesFrom,
        ClassExpressionType::DataHasValue,
        ClassExpressionType::DataMinCardinality,
        ClassExpressionType::DataMaxCardinality,
        ClassExpressionType::DataExactCardinality,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ClassExpressionType::ObjectIntersectionOf => "ObjectIntersectionOf",
            ClassExpressionType::ObjectUnionOf => "ObjectUnionOf",
            ClassExpressionType::ObjectComplementOf => "ObjectComplementOf",
            ClassExpressionType::ObjectOneOf => "ObjectOneOf",
            ClassExpressionType::ObjectSomeValuesFrom => "ObjectSomeValuesFrom",
            ClassExpressionType::ObjectAllValuesFrom => "ObjectAllValuesFrom",
            ClassExpressionType::ObjectHasValue => "ObjectHasValue",
            ClassExpressionType::ObjectHasSelf => "ObjectHasSelf",
            ClassExpressionType::ObjectMinCardinality => "ObjectMinCardinality",
            ClassExpressionType::ObjectMaxCardinality => "ObjectMaxCardinality",
            ClassExpressionType::ObjectExactCardinality => "ObjectExactCardinality",
            ClassExpressionType::DataSomeValuesFrom => "DataSomeValuesFrom",
            ClassExpressionType::DataAllValuesFrom => "DataAllValuesFrom",
            ClassExpressionType::DataHasValue => "DataHasValue",
            ClassExpressionType::DataMinCardinality => "DataMinCardinality",
            ClassExpressionType::DataMaxCardinality => "DataMaxCardinality",
            ClassExpressionType::DataExactCardinality => "DataExactCardinality",
        }
    }

    /// Restrictions additionally carry the `Restriction` label.
    pub fn is_restriction(&self) -> bool {
        !matches!(
            self,
            ClassExpressionType::ObjectIntersectionOf
                | ClassExpressionType::ObjectUnionOf
                | ClassExpressionType::ObjectComplementOf
                | ClassExpressionType::ObjectOneOf
        )
    }
}

/// Composite data range kinds. Named datatypes are entities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum DataRangeType {
    DataIntersectionOf,
    DataUnionOf,
    DataComplementOf,
    DataOneOf,
    DatatypeRestriction,
}

impl DataRangeType {
    pub const ALL: [DataRangeType; 5] = [
        DataRangeType::DataIntersectionOf,
        DataRangeType::DataUnionOf,
        DataRangeType::DataComplementOf,
        DataRangeType::DataOneOf,
        DataRangeType::DatatypeRestriction,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            DataRangeType::DataIntersectionOf => "DataIntersectionOf",
            DataRangeType::DataUnionOf => "DataUnionOf",
            DataRangeType::DataComplementOf => "DataComplementOf",
            DataRangeType::DataOneOf => "DataOneOf",
            DataRangeType::DatatypeRestriction => "DatatypeRestriction",
        }
    }
}

/// Grouping label shared by related axiom kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AxiomCategory {
    Declaration,
    ClassAxiom,
    ObjectPropertyAxiom,
    DataPropertyAxiom,
    DatatypeDefinition,
    HasKey,
    Assertion,
    AnnotationAxiom,
}

impl AxiomCategory {
    /// Category label, or `None` when the axiom kind is its own category.
    pub fn label(&self) -> Option<&'static str> {
        match self {
            AxiomCategory::ClassAxiom => Some("ClassAxiom"),
            AxiomCategory::ObjectPropertyAxiom => Some("ObjectPropertyAxiom"),
            AxiomCategory::DataPropertyAxiom => Some("DataPropertyAxiom"),
            AxiomCategory::Assertion => Some("Assertion"),
            AxiomCategory::AnnotationAxiom => Some("AnnotationAxiom"),
            AxiomCategory::Declaration
            | AxiomCategory::DatatypeDefinition
            | AxiomCategory::HasKey => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AxiomType {
    Declaration,
    SubClassOf,
    EquivalentClasses,
    DisjointClasses,
    DisjointUnion,
    SubObjectPropertyOf,
    SubPropertyChainOf,
    EquivalentObjectProperties,
    DisjointObjectProperties,
    InverseObjectProperties,
    ObjectPropertyDomain,
    ObjectPropertyRange,
    FunctionalObjectProperty,
    InverseFunctionalObjectProperty,
    ReflexiveObjectProperty,
    IrreflexiveObjectProperty,
    SymmetricObjectProperty,
    AsymmetricObjectProperty,
    TransitiveObjectProperty,
    SubDataPropertyOf,
    EquivalentDataProperties,
    DisjointDataProperties,
    DataPropertyDomain,
    DataPropertyRange,
    FunctionalDataProperty,
    DatatypeDefinition,
    HasKey,
    SameIndividual,
    DifferentIndividuals,
    ClassAssertion,
    ObjectPropertyAssertion,
    NegativeObjectPropertyAssertion,
    DataPropertyAssertion,
    NegativeDataPropertyAssertion,
    AnnotationAssertion,
    SubAnnotationPropertyOf,
    AnnotationPropertyDomain,
    AnnotationPropertyRange,
}

impl AxiomType {
    pub const ALL: [AxiomType; 38] = [
        AxiomType::Declaration,
        AxiomType::SubClassOf,
        AxiomType::EquivalentClasses,
        AxiomType::DisjointClasses,
        AxiomType::DisjointUnion,
        AxiomType::SubObjectPropertyOf,
        AxiomType::SubPropertyChainOf,
        AxiomType::EquivalentObjectProperties,
        AxiomType::DisjointObjectProperties,
        AxiomType::InverseObjectProperties,
        AxiomType::ObjectPropertyDomain,
        AxiomType::ObjectPropertyRange,
        AxiomType::FunctionalObjectProperty,
        AxiomType::InverseFunctionalObjectProperty,
        AxiomType::ReflexiveObjectProperty,
        AxiomType::IrreflexiveObjectProperty,
        AxiomType::SymmetricObjectProperty,
        AxiomType::AsymmetricObjectProperty,
        AxiomType::TransitiveObjectProperty,
        AxiomType::SubDataPropertyOf,
        AxiomType::EquivalentDataProperties,
        AxiomType::DisjointDataProperties,
        AxiomType::DataPropertyDomain,
        AxiomType::DataPropertyRange,
        AxiomType::FunctionalDataProperty,
        AxiomType::DatatypeDefinition,
        AxiomType::HasKey,
        AxiomType::SameIndividual,
        AxiomType::DifferentIndividuals,
        AxiomType::ClassAssertion,
        AxiomType::ObjectPropertyAssertion,
        AxiomType::NegativeObjectPropertyAssertion,
        AxiomType::DataPropertyAssertion,
        AxiomType::NegativeDataPropertyAssertion,
        AxiomType::AnnotationAssertion,
        AxiomType::SubAnnotationPropertyOf,
        AxiomType::AnnotationPropertyDomain,
        AxiomType::AnnotationPropertyRange,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            AxiomType::Declaration => "Declaration",
            AxiomType::SubClassOf => "SubClassOf",
            AxiomType::EquivalentClasses => "EquivalentClasses",
            AxiomType::DisjointClasses => "DisjointClasses",
            AxiomType::DisjointUnion => "DisjointUnion",
            AxiomType::SubObjectPropertyOf => "SubObjectPropertyOf",
            AxiomType::SubPropertyChainOf => "SubPropertyChainOf",
            AxiomType::EquivalentObjectProperties => "EquivalentObjectProperties",
            AxiomType::DisjointObjectProperties => "DisjointObjectProperties",
            AxiomType::InverseObjectProperties => "InverseObjectProperties",
            AxiomType::ObjectPropertyDomain => "ObjectPropertyDomain",
            AxiomType::ObjectPropertyRange => "ObjectPropertyRange",
            AxiomType::FunctionalObjectProperty => "FunctionalObjectProperty",
            AxiomType::InverseFunctionalObjectProperty => "InverseFunctionalObjectProperty",
            AxiomType::ReflexiveObjectProperty => "ReflexiveObjectProperty",
            AxiomType::IrreflexiveObjectProperty => "IrreflexiveObjectProperty",
            AxiomType::SymmetricObjectProperty => "SymmetricObjectProperty",
            AxiomType::AsymmetricObjectProperty => "AsymmetricObjectProperty",
            AxiomType::TransitiveObjectProperty => "TransitiveObjectProperty",
            AxiomType::SubDataPropertyOf => "SubDataPropertyOf",
            AxiomType::EquivalentDataProperties => "EquivalentDataProperties",
            AxiomType::DisjointDataProperties => "DisjointDataProperties",
            AxiomType::DataPropertyDomain => "DataPropertyDomain",
            AxiomType::DataPropertyRange => "DataPropertyRange",
            AxiomType::FunctionalDataProperty => "FunctionalDataProperty",
            AxiomType::DatatypeDefinition => "DatatypeDefinition",
            AxiomType::HasKey => "HasKey",
            AxiomType::SameIndividual => "SameIndividual",
            AxiomType::DifferentIndividuals => "DifferentIndividuals",
            AxiomType::ClassAssertion => "ClassAssertion",
            AxiomType::ObjectPropertyAssertion => "ObjectPropertyAssertion",
            AxiomType::NegativeObjectPropertyAssertion => "NegativeObjectPropertyAssertion",
            AxiomType::DataPropertyAssertion => "DataPropertyAssertion",
            AxiomType::NegativeDataPropertyAssertion => "NegativeDataPropertyAssertion",
            AxiomType::AnnotationAssertion => "AnnotationAssertion",
            AxiomType::SubAnnotationPropertyOf => "SubAnnotationPropertyOf",
            AxiomType::AnnotationPropertyDomain => "AnnotationPropertyDomain",
            AxiomType::AnnotationPropertyRange => "AnnotationPropertyRange",
        }
    }

    pub fn category(&self) -> AxiomCategory {
        use AxiomType::*;
        match self {
            Declaration => AxiomCategory::Declaration,
            SubClassOf | EquivalentClasses | DisjointClasses | DisjointUnion => {
                AxiomCategory::ClassAxiom
            }
            SubObjectPropertyOf
            | SubPropertyChainOf
            | EquivalentObjectProperties
            | DisjointObjectProperties
            | InverseObjectProperties
            | ObjectPropertyDomain
            | ObjectPropertyRange
            | FunctionalObjectProperty
            | InverseFunctionalObjectProperty
            | ReflexiveObjectProperty
            | IrreflexiveObjectProperty
            | SymmetricObjectProperty
            | AsymmetricObjectProperty
            | TransitiveObjectProperty => AxiomCategory::ObjectPropertyAxiom,
            SubDataPropertyOf
            | EquivalentDataProperties
            | DisjointDataProperties
            | DataPropertyDomain
            | DataPropertyRange
            | FunctionalDataProperty => AxiomCategory::DataPropertyAxiom,
            DatatypeDefinition => AxiomCategory::DatatypeDefinition,
            HasKey => AxiomCategory::HasKey,
            SameIndividual
            | DifferentIndividuals
            | ClassAssertion
            | ObjectPropertyAssertion
            | NegativeObjectPropertyAssertion
            | DataPropertyAssertion
            | NegativeDataPropertyAssertion => AxiomCategory::Assertion,
            AnnotationAssertion
            | SubAnnotationPropertyOf
            | AnnotationPropertyDomain
            | AnnotationPropertyRange => AxiomCategory::AnnotationAxiom,
        }
    }
}

/// Every kind of construct the encoder can turn into a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ConstructKind {
    Iri,
    Entity(EntityType),
    Literal,
    AnonymousIndividual,
    ClassExpression(ClassExpressionType),
    ObjectInverseOf,
    PropertyChain,
    DataRange(DataRangeType),
    FacetRestriction,
    Facet,
    Annotation,
    Axiom(AxiomType),
    Project,
    Branch,
    OntologyDocument,
}

impl ConstructKind {
    /// Enumerates the whole taxonomy. Used by exhaustive policy tests.
    pub fn all() -> Vec<ConstructKind> {
        let mut kinds = vec![
            ConstructKind::Iri,
            ConstructKind::Literal,
            ConstructKind::AnonymousIndividual,
            ConstructKind::ObjectInverseOf,
            ConstructKind::PropertyChain,
            ConstructKind::FacetRestriction,
            ConstructKind::Facet,
            ConstructKind::Annotation,
            ConstructKind::Project,
            ConstructKind::Branch,
            ConstructKind::OntologyDocument,
        ];
        kinds.extend(EntityType::ALL.into_iter().map(ConstructKind::Entity));
        kinds.extend(ClassExpressionType::ALL.into_iter().map(ConstructKind::ClassExpression));
        kinds.extend(DataRangeType::ALL.into_iter().map(ConstructKind::DataRange));
        kinds.extend(AxiomType::ALL.into_iter().map(ConstructKind::Axiom));
        kinds
    }

    /// Most specific node label for this kind.
    pub fn name(&self) -> &'static str {
        match self {
            ConstructKind::Iri => "IRI",
            ConstructKind::Entity(t) => t.name(),
            ConstructKind::Literal => "Literal",
            ConstructKind::AnonymousIndividual => "AnonymousIndividual",
            ConstructKind::ClassExpression(t) => t.name(),
            ConstructKind::ObjectInverseOf => "ObjectInverseOf",
            ConstructKind::PropertyChain => "ObjectPropertyChain",
            ConstructKind::DataRange(t) => t.name(),
            ConstructKind::FacetRestriction => "FacetRestriction",
            ConstructKind::Facet => "Facet",
            ConstructKind::Annotation => "Annotation",
            ConstructKind::Axiom(t) => t.name(),
            ConstructKind::Project => "Project",
            ConstructKind::Branch => "Branch",
            ConstructKind::OntologyDocument => "OntologyDocument",
        }
    }
}

impl fmt::Display for ConstructKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_names_are_unique() {
        let all = ConstructKind::all();
        let names: HashSet<&str> = all.iter().map(|k| k.name()).collect();
        assert_eq!(names.len(), all.len());
    }

    #[test]
    fn test_taxonomy_size() {
        assert_eq!(ConstructKind::all().len(), 11 + 6 + 17 + 5 + 38);
    }

    #[test]
    fn test_axiom_categories() {
        assert_eq!(AxiomType::SubClassOf.category().label(), Some("ClassAxiom"));
        assert_eq!(AxiomType::ClassAssertion.category().label(), Some("Assertion"));
        assert_eq!(AxiomType::Declaration.category().label(), None);
        assert_eq!(AxiomType::HasKey.category().label(), None);
    }
}
