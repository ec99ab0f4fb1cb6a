//! Class expressions.

use super::{Translator, fresh};
use crate::Result;
use crate::identity::canonical_order;
use crate::model::{EdgeLabel, Properties, PropertyField, Translation};
use crate::owl::ClassExpression;

impl Translator {
    pub fn translate_class_expression(&mut self, expr: &ClassExpression) -> Result<Translation> {
        let cardinality = match expr {
            ClassExpression::Class(c) => return self.entity_of(c.clone()),
            ClassExpression::ObjectMinCardinality { cardinality, .. }
            | ClassExpression::ObjectMaxCardinality { cardinality, .. }
            | ClassExpression::ObjectExactCardinality { cardinality, .. }
            | ClassExpression::DataMinCardinality { cardinality, .. }
            | ClassExpression::DataMaxCardinality { cardinality, .. }
            | ClassExpression::DataExactCardinality { cardinality, .. } => Some(*cardinality),
            _ => None,
        };
        let props = Properties::new().with_opt(PropertyField::Cardinality, cardinality);
        let mut b = fresh!(self.visit(expr.construct_kind(), expr, props)?);

        match expr {
            ClassExpression::Class(_) => {}
            ClassExpression::ObjectIntersectionOf(ops) | ClassExpression::ObjectUnionOf(ops) => {
                for op in canonical_order(ops)? {
                    let op = self.translate_class_expression(op)?;
                    b.child(EdgeLabel::ClassExpression, op);
                }
            }
            ClassExpression::ObjectComplementOf(op) => {
                let op = self.translate_class_expression(op)?;
                b.child(EdgeLabel::ClassExpression, op);
            }
            ClassExpression::ObjectOneOf(individuals) => {
                for individual in canonical_order(individuals)? {
                    let individual = self.translate_individual(individual)?;
                    b.child(EdgeLabel::Individual, individual);
                }
            }
            ClassExpression::ObjectSomeValuesFrom { property, filler }
            | ClassExpression::ObjectAllValuesFrom { property, filler } => {
                let property = self.translate_object_property_expression(property)?;
                b.child(EdgeLabel::ObjectPropertyExpression, property);
                let filler = self.translate_class_expression(filler)?;
                b.child(EdgeLabel::ClassExpression, filler);
            }
            ClassExpression::ObjectHasValue { property, value } => {
                let property = self.translate_object_property_expression(property)?;
                b.child(EdgeLabel::ObjectPropertyExpression, property);
                let value = self.translate_individual(value)?;
                b.child(EdgeLabel::Individual, value);
            }
            ClassExpression::ObjectHasSelf(property) => {
                let property = self.translate_object_property_expression(property)?;
                b.child(EdgeLabel::ObjectPropertyExpression, property);
            }
            ClassExpression::ObjectMinCardinality { property, filler, .. }
            | ClassExpression::ObjectMaxCardinality { property, filler, .. }
            | ClassExpression::ObjectExactCardinality { property, filler, .. } => {
                let property = self.translate_object_property_expression(property)?;
                b.child(EdgeLabel::ObjectPropertyExpression, property);
                if let Some(filler) = filler {
                    let filler = self.translate_class_expression(filler)?;
                    b.child(EdgeLabel::ClassExpression, filler);
                }
            }
            ClassExpression::DataSomeValuesFrom { property, filler }
            | ClassExpression::DataAllValuesFrom { property, filler } => {
                let property = self.entity_of(property.clone())?;
                b.child(EdgeLabel::DataPropertyExpression, property);
                let filler = self.translate_data_range(filler)?;
                b.child(EdgeLabel::DataRange, filler);
            }
            ClassExpression::DataHasValue { property, value } => {
                let property = self.entity_of(property.clone())?;
                b.child(EdgeLabel::DataPropertyExpression, property);
                let value = self.translate_literal(value)?;
                b.child(EdgeLabel::Literal, value);
            }
            ClassExpression::DataMinCardinality { property, filler, .. }
            | ClassExpression::DataMaxCardinality { property, filler, .. }
            | ClassExpression::DataExactCardinality { property, filler, .. } => {
                let property = self.entity_of(property.clone())?;
                b.child(EdgeLabel::DataPropertyExpression, property);
                if let Some(filler) = filler {
                    let filler = self.translate_data_range(filler)?;
                    b.child(EdgeLabel::DataRange, filler);
                }
            }
        }
        Ok(b.build())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identity::IdFormat;
    use crate::model::Value;
    use crate::owl::{DataProperty, DataRange, Individual, ObjectPropertyExpression, vocab};
    use pretty_assertions::assert_eq;

    fn class(name: &str) -> ClassExpression {
        ClassExpression::class(format!("http://ex.org/{name}"))
    }

    fn p() -> ObjectPropertyExpression {
        ObjectPropertyExpression::named("http://ex.org/p")
    }

    #[test]
    fn test_some_values_from_layout() {
        let mut t = Translator::default();
        let tr = t.translate_class_expression(&ClassExpression::some(p(), class("B"))).unwrap();
        let node = tr.main_node();
        assert_eq!(
            node.labels().iter().collect::<Vec<_>>(),
            vec!["ObjectSomeValuesFrom", "Restriction", "ClassExpression"]
        );
        assert_eq!(node.id().format(), IdFormat::PerOccurrence);
        let labels: Vec<EdgeLabel> = tr.direct_edges().iter().map(|e| e.label()).collect();
        assert_eq!(labels, vec![EdgeLabel::ObjectPropertyExpression, EdgeLabel::ClassExpression]);
    }

    #[test]
    fn test_intersection_is_permutation_invariant() {
        let abc = ClassExpression::and([class("A"), class("B"), class("C")]);
        let cab = ClassExpression::and([class("C"), class("A"), class("B")]);
        let x = Translator::default().translate_class_expression(&abc).unwrap();
        let y = Translator::default().translate_class_expression(&cab).unwrap();
        assert_eq!(x, y);
    }

    #[test]
    fn test_duplicate_operands_keep_both_edges() {
        let aa = ClassExpression::or([class("A"), class("A")]);
        let tr = Translator::default().translate_class_expression(&aa).unwrap();
        let edges = tr.direct_edges();
        assert_eq!(edges.len(), 2);
        assert_eq!(edges[0].end().id(), edges[1].end().id());
        assert_ne!(edges[0].id(), edges[1].id());
    }

    #[test]
    fn test_equal_anonymous_operands_get_distinct_nodes() {
        let nested = ClassExpression::and([
            ClassExpression::some(p(), class("B")),
            ClassExpression::some(p(), class("B")),
        ]);
        let tr = Translator::default().translate_class_expression(&nested).unwrap();
        let edges = tr.direct_edges();
        assert_ne!(edges[0].end().id(), edges[1].end().id());
    }

    #[test]
    fn test_cardinality_property() {
        let expr = ClassExpression::DataMaxCardinality {
            cardinality: 2,
            property: DataProperty::new("http://ex.org/d"),
            filler: Some(DataRange::datatype(vocab::XSD_STRING)),
        };
        let tr = Translator::default().translate_class_expression(&expr).unwrap();
        assert_eq!(tr.main_node().get(PropertyField::Cardinality), Some(&Value::Int(2)));
        let labels: Vec<EdgeLabel> = tr.direct_edges().iter().map(|e| e.label()).collect();
        assert_eq!(labels, vec![EdgeLabel::DataPropertyExpression, EdgeLabel::DataRange]);
    }

    #[test]
    fn test_unqualified_cardinality_has_no_filler() {
        let expr = ClassExpression::ObjectMinCardinality { cardinality: 1, property: p(), filler: None };
        let tr = Translator::default().translate_class_expression(&expr).unwrap();
        assert_eq!(tr.direct_edges().len(), 1);
    }

    #[test]
    fn test_one_of_links_individuals() {
        let expr = ClassExpression::ObjectOneOf(vec![
            Individual::named("http://ex.org/i"),
            Individual::anonymous("_:b1"),
        ]);
        let tr = Translator::default().translate_class_expression(&expr).unwrap();
        assert!(tr.direct_edges().iter().all(|e| e.label() == EdgeLabel::Individual));
        assert!(tr.direct_edges().iter().any(|e| e.end().has_label("AnonymousIndividual")));
    }
}
