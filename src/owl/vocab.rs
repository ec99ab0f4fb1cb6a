//! Well-known IRIs from the OWL 2, RDF and XSD vocabularies.

pub const OWL_THING: &str = "http://www.w3.org/2002/07/owl#Thing";
pub const OWL_NOTHING: &str = "http://www.w3.org/2002/07/owl#Nothing";
pub const RDFS_LITERAL: &str = "http://www.w3.org/2000/01/rdf-schema#Literal";
pub const RDFS_LABEL: &str = "http://www.w3.org/2000/01/rdf-schema#label";
pub const RDFS_COMMENT: &str = "http://www.w3.org/2000/01/rdf-schema#comment";
pub const RDF_LANG_STRING: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#langString";
pub const XSD_STRING: &str = "http://www.w3.org/2001/XMLSchema#string";
pub const XSD_INTEGER: &str = "http://www.w3.org/2001/XMLSchema#integer";
pub const XSD_BOOLEAN: &str = "http://www.w3.org/2001/XMLSchema#boolean";

const XSD: &str = "http://www.w3.org/2001/XMLSchema#";
const RDF: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";

/// Constraining facets permitted in a `DatatypeRestriction`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Facet {
    Length,
    MinLength,
    MaxLength,
    Pattern,
    MinInclusive,
    MinExclusive,
    MaxInclusive,
    MaxExclusive,
    TotalDigits,
    FractionDigits,
    LangRange,
}

impl Facet {
    pub const ALL: [Facet; 11] = [
        Facet::Length,
        Facet::MinLength,
        Facet::MaxLength,
        Facet::Pattern,
        Facet::MinInclusive,
        Facet::MinExclusive,
        Facet::MaxInclusive,
        Facet::MaxExclusive,
        Facet::TotalDigits,
        Facet::FractionDigits,
        Facet::LangRange,
    ];

    pub fn local_name(&self) -> &'static str {
        match self {
            Facet::Length => "length",
            Facet::MinLength => "minLength",
            Facet::MaxLength => "maxLength",
            Facet::Pattern => "pattern",
            Facet::MinInclusive => "minInclusive",
            Facet::MinExclusive => "minExclusive",
            Facet::MaxInclusive => "maxInclusive",
            Facet::MaxExclusive => "maxExclusive",
            Facet::TotalDigits => "totalDigits",
            Facet::FractionDigits => "fractionDigits",
            Facet::LangRange => "langRange",
        }
    }

    /// Full facet IRI. `langRange` lives in the RDF namespace, the rest in XSD.
    pub fn iri(&self) -> String {
        match self {
            Facet::LangRange => format!("{RDF}{}", self.local_name()),
            _ => format!("{XSD}{}", self.local_name()),
        }
    }

    pub fn from_iri(iri: &str) -> Option<Facet> {
        Facet::ALL.into_iter().find(|f| f.iri() == iri)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_facet_iri_roundtrip() {
        for facet in Facet::ALL {
            assert_eq!(Facet::from_iri(&facet.iri()), Some(facet));
        }
        assert_eq!(Facet::from_iri("http://ex.org/notAFacet"), None);
    }

    #[test]
    fn test_lang_range_namespace() {
        assert!(Facet::LangRange.iri().starts_with(RDF));
        assert!(Facet::MinInclusive.iri().starts_with(XSD));
    }
}
