//! Class expressions and object property expressions.

use serde::{Deserialize, Serialize};

use super::data::{DataRange, Literal};
use super::entity::{Class, DataProperty, Individual, Iri, ObjectProperty};
use super::kind::{ClassExpressionType, ConstructKind, EntityType};

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ObjectPropertyExpression {
    ObjectProperty(ObjectProperty),
    InverseOf(ObjectProperty),
}

impl ObjectPropertyExpression {
    pub fn named(iri: impl Into<Iri>) -> Self {
        ObjectPropertyExpression::ObjectProperty(ObjectProperty::new(iri))
    }

    pub fn inverse(iri: impl Into<Iri>) -> Self {
        ObjectPropertyExpression::InverseOf(ObjectProperty::new(iri))
    }

    pub fn as_named(&self) -> Option<&ObjectProperty> {
        match self {
            ObjectPropertyExpression::ObjectProperty(p) => Some(p),
            ObjectPropertyExpression::InverseOf(_) => None,
        }
    }

    pub fn construct_kind(&self) -> ConstructKind {
        match self {
            ObjectPropertyExpression::ObjectProperty(_) => {
                ConstructKind::Entity(EntityType::ObjectProperty)
            }
            ObjectPropertyExpression::InverseOf(_) => ConstructKind::ObjectInverseOf,
        }
    }
}

impl From<ObjectProperty> for ObjectPropertyExpression {
    fn from(v: ObjectProperty) -> Self { ObjectPropertyExpression::ObjectProperty(v) }
}

/// An OWL 2 class expression.
///
/// Cardinality restrictions are unqualified when `filler` is `None`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ClassExpression {
    Class(Class),
    ObjectIntersectionOf(Vec<ClassExpression>),
    ObjectUnionOf(Vec<ClassExpression>),
    ObjectComplementOf(Box<ClassExpression>),
    ObjectOneOf(Vec<Individual>),
    ObjectSomeValuesFrom {
        property: ObjectPropertyExpression,
        filler: Box<ClassExpression>,
    },
    ObjectAllValuesFrom {
        property: ObjectPropertyExpression,
        filler: Box<ClassExpression>,
    },
    ObjectHasValue {
        property: ObjectPropertyExpression,
        value: Individual,
    },
    ObjectHasSelf(ObjectPropertyExpression),
    ObjectMinCardinality {
        cardinality: u32,
        property: ObjectPropertyExpression,
        filler: Option<Box<ClassExpression>>,
    },
    ObjectMaxCardinality {
        cardinality: u32,
        property: ObjectPropertyExpression,
        filler: Option<Box<ClassExpression>>,
    },
    ObjectExactCardinality {
        cardinality: u32,
        property: ObjectPropertyExpression,
        filler: Option<Box<ClassExpression>>,
    },
    DataSomeValuesFrom {
        property: DataProperty,
        filler: DataRange,
    },
    DataAllValuesFrom {
        property: DataProperty,
        filler: DataRange,
    },
    DataHasValue {
        property: DataProperty,
        value: Literal,
    },
    DataMinCardinality {
        cardinality: u32,
        property: DataProperty,
        filler: Option<DataRange>,
    },
    DataMaxCardinality {
        cardinality: u32,
        property: DataProperty,
        filler: Option<DataRange>,
    },
    DataExactCardinality {
        cardinality: u32,
        property: DataProperty,
        filler: Option<DataRange>,
    },
}

impl ClassExpression {
    pub fn class(iri: impl Into<Iri>) -> Self {
        ClassExpression::Class(Class::new(iri))
    }

    pub fn and(operands: impl IntoIterator<Item = ClassExpression>) -> Self {
        ClassExpression::ObjectIntersectionOf(operands.into_iter().collect())
    }

    pub fn or(operands: impl IntoIterator<Item = ClassExpression>) -> Self {
        ClassExpression::ObjectUnionOf(operands.into_iter().collect())
    }

    pub fn not(operand: ClassExpression) -> Self {
        ClassExpression::ObjectComplementOf(Box::new(operand))
    }

    pub fn some(property: impl Into<ObjectPropertyExpression>, filler: ClassExpression) -> Self {
        ClassExpression::ObjectSomeValuesFrom {
            property: property.into(),
            filler: Box::new(filler),
        }
    }

    pub fn only(property: impl Into<ObjectPropertyExpression>, filler: ClassExpression) -> Self {
        ClassExpression::ObjectAllValuesFrom {
            property: property.into(),
            filler: Box::new(filler),
        }
    }

    pub fn as_class(&self) -> Option<&Class> {
        match self {
            ClassExpression::Class(c) => Some(c),
            _ => None,
        }
    }

    pub fn is_anonymous(&self) -> bool {
        !matches!(self, ClassExpression::Class(_))
    }

    pub fn construct_kind(&self) -> ConstructKind {
        use ClassExpressionType as T;
        let t = match self {
            ClassExpression::Class(_) => return ConstructKind::Entity(EntityType::Class),
            ClassExpression::ObjectIntersectionOf(_) => T::ObjectIntersectionOf,
            ClassExpression::ObjectUnionOf(_) => T::ObjectUnionOf,
            ClassExpression::ObjectComplementOf(_) => T::ObjectComplementOf,
            ClassExpression::ObjectOneOf(_) => T::ObjectOneOf,
            ClassExpression::ObjectSomeValuesFrom { .. } => T::ObjectSomeValuesFrom,
            ClassExpression::ObjectAllValuesFrom { .. } => T::ObjectAllValuesFrom,
            ClassExpression::ObjectHasValue { .. } => T::ObjectHasValue,
            ClassExpression::ObjectHasSelf(_) => T::ObjectHasSelf,
            ClassExpression::ObjectMinCardinality { .. } => T::ObjectMinCardinality,
            ClassExpression::ObjectMaxCardinality { .. } => T::ObjectMaxCardinality,
            ClassExpression::ObjectExactCardinality { .. } => T::ObjectExactCardinality,
            ClassExpression::DataSomeValuesFrom { .. } => T::DataSomeValuesFrom,
            ClassExpression::DataAllValuesFrom { .. } => T::DataAllValuesFrom,
            ClassExpression::DataHasValue { .. } => T::DataHasValue,
            ClassExpression::DataMinCardinality { .. } => T::DataMinCardinality,
            ClassExpression::DataMaxCardinality { .. } => T::DataMaxCardinality,
            ClassExpression::DataExactCardinality { .. } => T::DataExactCardinality,
        };
        ConstructKind::ClassExpression(t)
    }
}

impl From<Class> for ClassExpression {
    fn from(v: Class) -> Self { ClassExpression::Class(v) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_is_entity_kind() {
        let c = ClassExpression::class("http://ex.org/A");
        assert!(!c.is_anonymous());
        assert_eq!(c.construct_kind(), ConstructKind::Entity(EntityType::Class));
    }

    #[test]
    fn test_anonymous_kinds() {
        let e = ClassExpression::some(
            ObjectPropertyExpression::named("http://ex.org/p"),
            ClassExpression::class("http://ex.org/B"),
        );
        assert!(e.is_anonymous());
        assert_eq!(
            e.construct_kind(),
            ConstructKind::ClassExpression(ClassExpressionType::ObjectSomeValuesFrom)
        );
        assert_eq!(
            ObjectPropertyExpression::inverse("http://ex.org/p").construct_kind(),
            ConstructKind::ObjectInverseOf
        );
    }
}
