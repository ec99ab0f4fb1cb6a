//! Object property expressions and property chains.

use super::{Translator, fresh};
use crate::Result;
use crate::identity::PropertyChain;
use crate::model::{EdgeLabel, Properties, Translation};
use crate::owl::{ConstructKind, ObjectPropertyExpression};

impl Translator {
    pub fn translate_object_property_expression(
        &mut self,
        expr: &ObjectPropertyExpression,
    ) -> Result<Translation> {
        match expr {
            ObjectPropertyExpression::ObjectProperty(p) => self.entity_of(p.clone()),
            ObjectPropertyExpression::InverseOf(p) => {
                let mut b = fresh!(self.visit(ConstructKind::ObjectInverseOf, expr, Properties::new())?);
                let property = self.entity_of(p.clone())?;
                b.child(EdgeLabel::ObjectProperty, property);
                Ok(b.build())
            }
        }
    }

    /// `ObjectPropertyChain` node; member order is kept in `pos`.
    pub fn translate_property_chain(
        &mut self,
        chain: &[ObjectPropertyExpression],
    ) -> Result<Translation> {
        let mut b = fresh!(self.visit(ConstructKind::PropertyChain, &PropertyChain(chain), Properties::new())?);
        for (pos, member) in chain.iter().enumerate() {
            let member = self.translate_object_property_expression(member)?;
            b.positional(EdgeLabel::ObjectPropertyExpression, pos, member);
        }
        Ok(b.build())
    }
}
