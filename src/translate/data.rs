//! Literals, data ranges and facet restrictions.

use super::{Translator, fresh};
use crate::Result;
use crate::identity::{FacetNode, canonical_order, resolve_facet};
use crate::model::{EdgeLabel, Properties, PropertyField, Translation};
use crate::owl::{ConstructKind, DataRange, FacetRestriction, Literal};

impl Translator {
    /// Shared `Literal` node carrying its lexical form, datatype and language.
    pub fn translate_literal(&mut self, literal: &Literal) -> Result<Translation> {
        let props = Properties::new()
            .with(PropertyField::LexicalForm, literal.lexical_form.as_str())
            .with(PropertyField::Datatype, literal.datatype.iri().as_str())
            .with_opt(
                PropertyField::Language,
                literal.language.as_ref().map(|l| l.to_ascii_lowercase()),
            );
        let mut b = fresh!(self.visit(ConstructKind::Literal, literal, props)?);
        let datatype = self.entity_of(literal.datatype.clone())?;
        b.child(EdgeLabel::Datatype, datatype);
        Ok(b.build())
    }

    pub fn translate_data_range(&mut self, range: &DataRange) -> Result<Translation> {
        if let DataRange::Datatype(d) = range {
            return self.entity_of(d.clone());
        }
        let mut b = fresh!(self.visit(range.construct_kind(), range, Properties::new())?);
        match range {
            DataRange::Datatype(_) => {}
            DataRange::DataIntersectionOf(ops) | DataRange::DataUnionOf(ops) => {
                for op in canonical_order(ops)? {
                    let op = self.translate_data_range(op)?;
                    b.child(EdgeLabel::DataRange, op);
                }
            }
            DataRange::DataComplementOf(op) => {
                let op = self.translate_data_range(op)?;
                b.child(EdgeLabel::DataRange, op);
            }
            DataRange::DataOneOf(literals) => {
                for literal in canonical_order(literals)? {
                    let literal = self.translate_literal(literal)?;
                    b.child(EdgeLabel::Literal, literal);
                }
            }
            DataRange::DatatypeRestriction { datatype, restrictions } => {
                let datatype = self.entity_of(datatype.clone())?;
                b.child(EdgeLabel::Datatype, datatype);
                for (pos, restriction) in restrictions.iter().enumerate() {
                    let restriction = self.translate_facet_restriction(restriction)?;
                    b.positional(EdgeLabel::FacetRestriction, pos, restriction);
                }
            }
        }
        Ok(b.build())
    }

    pub fn translate_facet_restriction(&mut self, restriction: &FacetRestriction) -> Result<Translation> {
        let facet = resolve_facet(&restriction.facet)?;
        let mut b = fresh!(self.visit(ConstructKind::FacetRestriction, restriction, Properties::new())?);

        let facet_props = Properties::new().with(PropertyField::Iri, facet.iri());
        let facet_node = match self.visit(ConstructKind::Facet, &FacetNode(facet), facet_props)? {
            super::Visit::Fresh(fb) => fb.build(),
            super::Visit::Seen(leaf) => leaf,
        };
        b.child(EdgeLabel::ConstrainingFacet, facet_node);

        let value = self.translate_literal(&restriction.value)?;
        b.child(EdgeLabel::RestrictionValue, value);
        Ok(b.build())
    }
}
