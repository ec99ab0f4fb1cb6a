//! Literals and data ranges.

use serde::{Deserialize, Serialize};

use super::entity::{Datatype, Iri};
use super::kind::{ConstructKind, DataRangeType, EntityType};
use super::vocab;

/// A data value: lexical form, datatype and optional language tag.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Literal {
    pub lexical_form: String,
    pub datatype: Datatype,
    pub language: Option<String>,
}

impl Literal {
    /// Plain `xsd:string` literal.
    pub fn string(lexical_form: impl Into<String>) -> Self {
        Self {
            lexical_form: lexical_form.into(),
            datatype: Datatype::new(vocab::XSD_STRING),
            language: None,
        }
    }

    /// Language-tagged `rdf:langString` literal.
    pub fn lang(lexical_form: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            lexical_form: lexical_form.into(),
            datatype: Datatype::new(vocab::RDF_LANG_STRING),
            language: Some(language.into()),
        }
    }

    pub fn typed(lexical_form: impl Into<String>, datatype: impl Into<Iri>) -> Self {
        Self {
            lexical_form: lexical_form.into(),
            datatype: Datatype::new(datatype),
            language: None,
        }
    }

    pub fn integer(value: i64) -> Self {
        Self::typed(value.to_string(), vocab::XSD_INTEGER)
    }

    pub fn construct_kind(&self) -> ConstructKind {
        ConstructKind::Literal
    }
}

/// `facet value` pair inside a `DatatypeRestriction`.
///
/// The facet is carried as an IRI; mapping it onto the closed OWL 2 facet
/// vocabulary happens at translation time.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct FacetRestriction {
    pub facet: Iri,
    pub value: Literal,
}

impl FacetRestriction {
    pub fn new(facet: vocab::Facet, value: Literal) -> Self {
        Self { facet: Iri::new(facet.iri()), value }
    }

    pub fn construct_kind(&self) -> ConstructKind {
        ConstructKind::FacetRestriction
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum DataRange {
    Datatype(Datatype),
    DataIntersectionOf(Vec<DataRange>),
    DataUnionOf(Vec<DataRange>),
    DataComplementOf(Box<DataRange>),
    DataOneOf(Vec<Literal>),
    DatatypeRestriction {
        datatype: Datatype,
        restrictions: Vec<FacetRestriction>,
    },
}

impl DataRange {
    pub fn datatype(iri: impl Into<Iri>) -> Self {
        DataRange::Datatype(Datatype::new(iri))
    }

    pub fn construct_kind(&self) -> ConstructKind {
        match self {
            DataRange::Datatype(_) => ConstructKind::Entity(EntityType::Datatype),
            DataRange::DataIntersectionOf(_) => {
                ConstructKind::DataRange(DataRangeType::DataIntersectionOf)
            }
            DataRange::DataUnionOf(_) => ConstructKind::DataRange(DataRangeType::DataUnionOf),
            DataRange::DataComplementOf(_) => {
                ConstructKind::DataRange(DataRangeType::DataComplementOf)
            }
            DataRange::DataOneOf(_) => ConstructKind::DataRange(DataRangeType::DataOneOf),
            DataRange::DatatypeRestriction { .. } => {
                ConstructKind::DataRange(DataRangeType::DatatypeRestriction)
            }
        }
    }
}

impl From<Datatype> for DataRange {
    fn from(v: Datatype) -> Self { DataRange::Datatype(v) }
}
