//! IRIs, named entities and individuals.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::kind::{ConstructKind, EntityType};

/// An internationalized resource identifier.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Iri(String);

impl Iri {
    pub fn new(iri: impl Into<String>) -> Self {
        Self(iri.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn construct_kind(&self) -> ConstructKind {
        ConstructKind::Iri
    }
}

impl fmt::Display for Iri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}>", self.0)
    }
}

impl From<&str> for Iri {
    fn from(v: &str) -> Self { Iri(v.to_owned()) }
}

impl From<String> for Iri {
    fn from(v: String) -> Self { Iri(v) }
}

macro_rules! entity_newtype {
    ($(#[$doc:meta])* $name:ident => $kind:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        pub struct $name(pub Iri);

        impl $name {
            pub fn new(iri: impl Into<Iri>) -> Self {
                Self(iri.into())
            }

            pub fn iri(&self) -> &Iri {
                &self.0
            }
        }

        impl From<$name> for Entity {
            fn from(v: $name) -> Self { Entity::$kind(v) }
        }
    };
}

entity_newtype!(
    /// A named class.
    Class => Class
);
entity_newtype!(ObjectProperty => ObjectProperty);
entity_newtype!(DataProperty => DataProperty);
entity_newtype!(AnnotationProperty => AnnotationProperty);
entity_newtype!(
    /// An individual with a global IRI.
    NamedIndividual => NamedIndividual
);
entity_newtype!(Datatype => Datatype);

impl Class {
    pub fn is_owl_thing(&self) -> bool {
        self.0.as_str() == super::vocab::OWL_THING
    }
}

/// Any of the six OWL 2 entity kinds.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Entity {
    Class(Class),
    ObjectProperty(ObjectProperty),
    DataProperty(DataProperty),
    AnnotationProperty(AnnotationProperty),
    NamedIndividual(NamedIndividual),
    Datatype(Datatype),
}

impl Entity {
    pub fn iri(&self) -> &Iri {
        match self {
            Entity::Class(e) => e.iri(),
            Entity::ObjectProperty(e) => e.iri(),
            Entity::DataProperty(e) => e.iri(),
            Entity::AnnotationProperty(e) => e.iri(),
            Entity::NamedIndividual(e) => e.iri(),
            Entity::Datatype(e) => e.iri(),
        }
    }

    pub fn entity_type(&self) -> EntityType {
        match self {
            Entity::Class(_) => EntityType::Class,
            Entity::ObjectProperty(_) => EntityType::ObjectProperty,
            Entity::DataProperty(_) => EntityType::DataProperty,
            Entity::AnnotationProperty(_) => EntityType::AnnotationProperty,
            Entity::NamedIndividual(_) => EntityType::NamedIndividual,
            Entity::Datatype(_) => EntityType::Datatype,
        }
    }

    pub fn construct_kind(&self) -> ConstructKind {
        ConstructKind::Entity(self.entity_type())
    }
}

/// A blank-node individual, local to the document it occurs in.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct AnonymousIndividual(pub String);

impl AnonymousIndividual {
    pub fn new(node_id: impl Into<String>) -> Self {
        Self(node_id.into())
    }

    pub fn node_id(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Individual {
    Named(NamedIndividual),
    Anonymous(AnonymousIndividual),
}

impl Individual {
    pub fn named(iri: impl Into<Iri>) -> Self {
        Individual::Named(NamedIndividual::new(iri))
    }

    pub fn anonymous(node_id: impl Into<String>) -> Self {
        Individual::Anonymous(AnonymousIndividual::new(node_id))
    }

    pub fn construct_kind(&self) -> ConstructKind {
        match self {
            Individual::Named(_) => ConstructKind::Entity(EntityType::NamedIndividual),
            Individual::Anonymous(_) => ConstructKind::AnonymousIndividual,
        }
    }
}

impl From<NamedIndividual> for Individual {
    fn from(v: NamedIndividual) -> Self { Individual::Named(v) }
}

impl From<AnonymousIndividual> for Individual {
    fn from(v: AnonymousIndividual) -> Self { Individual::Anonymous(v) }
}
