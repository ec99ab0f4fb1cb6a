//! Axioms.
//!
//! An axiom node links to its operands through role edges. On top of that,
//! depending on [`TranslatorConfig`](crate::config::TranslatorConfig):
//! `axiomAnnotation` edges to its annotations, `axiomSubject` edges to the
//! named entities it is about, and augmented shortcut edges between its
//! named participants.

use tracing::debug;

use super::{Translator, TranslationBuilder, fresh, is_named};
use crate::Result;
use crate::identity::canonical_order;
use crate::model::{EdgeLabel, Node, Properties, Translation};
use crate::owl::{AnnotatedAxiom, Axiom};

/// What an axiom says about its participants beyond the role edges.
#[derive(Default)]
struct Participants {
    subjects: Vec<Node>,
    shortcuts: Vec<(Node, Node, EdgeLabel)>,
}

impl Participants {
    fn subject(&mut self, node: Node) {
        if !self.subjects.iter().any(|s| s.id() == node.id()) {
            self.subjects.push(node);
        }
    }

    fn shortcut(&mut self, start: &Node, end: &Node, label: EdgeLabel) {
        self.shortcuts.push((start.clone(), end.clone(), label));
    }
}

impl Translator {
    /// Translates an axiom. Per-occurrence ids below the axiom node are
    /// scoped to the axiom's digest, so the same axiom always encodes to the
    /// same ids.
    pub fn translate_axiom(&mut self, axiom: &AnnotatedAxiom) -> Result<Translation> {
        let scope = self.session.digest_of(axiom)?;
        self.session.begin_scope(scope);

        let mut b = fresh!(self.visit(axiom.construct_kind(), axiom, Properties::new())?);
        let participants = self.axiom_roles(&mut b, &axiom.axiom)?;

        if self.config.annotation_edges {
            for annotation in canonical_order(&axiom.annotations)? {
                let annotation = self.translate_annotation(annotation)?;
                b.child(EdgeLabel::AxiomAnnotation, annotation);
            }
        }
        if self.config.subject_edges {
            for subject in participants.subjects.iter().filter(|n| is_named(n)) {
                b.link(EdgeLabel::AxiomSubject, subject);
            }
        }
        if self.config.augmented_edges {
            for (start, end, label) in &participants.shortcuts {
                let reflexive_same = *label == EdgeLabel::SameIndividual && start.id() == end.id();
                if is_named(start) && is_named(end) && !reflexive_same {
                    b.shortcut(start, end, *label);
                }
            }
        }

        let translation = b.build();
        debug!(
            axiom = %axiom.axiom_type().name(),
            digest = %scope,
            edges = translation.edge_count(),
            "translated axiom"
        );
        Ok(translation)
    }

    fn axiom_roles(&mut self, b: &mut TranslationBuilder, axiom: &Axiom) -> Result<Participants> {
        let mut p = Participants::default();
        match axiom {
            Axiom::Declaration(entity) => {
                let e = b.child(EdgeLabel::Entity, self.translate_entity(entity)?);
                p.subject(e);
            }

            // Class axioms
            Axiom::SubClassOf { sub, sup } => {
                let s = b.child(EdgeLabel::SubClassExpression, self.translate_class_expression(sub)?);
                let o = b.child(EdgeLabel::SuperClassExpression, self.translate_class_expression(sup)?);
                p.shortcut(&s, &o, EdgeLabel::SubClassOf);
                p.subject(s);
            }
            Axiom::EquivalentClasses(ops) | Axiom::DisjointClasses(ops) => {
                for op in canonical_order(ops)? {
                    let n = b.child(EdgeLabel::ClassExpression, self.translate_class_expression(op)?);
                    p.subject(n);
                }
            }
            Axiom::DisjointUnion { class, operands } => {
                let c = b.child(EdgeLabel::Class, self.entity_of(class.clone())?);
                p.subject(c);
                for op in canonical_order(operands)? {
                    b.child(EdgeLabel::ClassExpression, self.translate_class_expression(op)?);
                }
            }

            // Object property axioms
            Axiom::SubObjectPropertyOf { sub, sup } => {
                let s = b.child(
                    EdgeLabel::SubObjectPropertyExpression,
                    self.translate_object_property_expression(sub)?,
                );
                let o = b.child(
                    EdgeLabel::SuperObjectPropertyExpression,
                    self.translate_object_property_expression(sup)?,
                );
                p.shortcut(&s, &o, EdgeLabel::SubObjectPropertyOf);
                p.subject(s);
            }
            Axiom::SubPropertyChainOf { chain, sup } => {
                b.child(EdgeLabel::SubObjectPropertyExpression, self.translate_property_chain(chain)?);
                let o = b.child(
                    EdgeLabel::SuperObjectPropertyExpression,
                    self.translate_object_property_expression(sup)?,
                );
                p.subject(o);
            }
            Axiom::EquivalentObjectProperties(ops) | Axiom::DisjointObjectProperties(ops) => {
                for op in canonical_order(ops)? {
                    let n = b.child(
                        EdgeLabel::ObjectPropertyExpression,
                        self.translate_object_property_expression(op)?,
                    );
                    p.subject(n);
                }
            }
            Axiom::InverseObjectProperties(first, second) => {
                let pair = [first.clone(), second.clone()];
                for op in canonical_order(&pair)? {
                    let n = b.child(
                        EdgeLabel::ObjectPropertyExpression,
                        self.translate_object_property_expression(op)?,
                    );
                    p.subject(n);
                }
            }
            Axiom::ObjectPropertyDomain { property, domain } => {
                let prop = b.child(
                    EdgeLabel::ObjectPropertyExpression,
                    self.translate_object_property_expression(property)?,
                );
                let d = b.child(EdgeLabel::Domain, self.translate_class_expression(domain)?);
                p.shortcut(&prop, &d, EdgeLabel::PropertyDomain);
                p.subject(prop);
            }
            Axiom::ObjectPropertyRange { property, range } => {
                let prop = b.child(
                    EdgeLabel::ObjectPropertyExpression,
                    self.translate_object_property_expression(property)?,
                );
                let r = b.child(EdgeLabel::Range, self.translate_class_expression(range)?);
                p.shortcut(&prop, &r, EdgeLabel::PropertyRange);
                p.subject(prop);
            }
            Axiom::FunctionalObjectProperty(property)
            | Axiom::InverseFunctionalObjectProperty(property)
            | Axiom::ReflexiveObjectProperty(property)
            | Axiom::IrreflexiveObjectProperty(property)
            | Axiom::SymmetricObjectProperty(property)
            | Axiom::AsymmetricObjectProperty(property)
            | Axiom::TransitiveObjectProperty(property) => {
                let prop = b.child(
                    EdgeLabel::ObjectPropertyExpression,
                    self.translate_object_property_expression(property)?,
                );
                p.subject(prop);
            }

            // Data property axioms
            Axiom::SubDataPropertyOf { sub, sup } => {
                let s = b.child(EdgeLabel::SubDataPropertyExpression, self.entity_of(sub.clone())?);
                let o = b.child(EdgeLabel::SuperDataPropertyExpression, self.entity_of(sup.clone())?);
                p.shortcut(&s, &o, EdgeLabel::SubDataPropertyOf);
                p.subject(s);
            }
            Axiom::EquivalentDataProperties(ops) | Axiom::DisjointDataProperties(ops) => {
                for op in canonical_order(ops)? {
                    let n = b.child(EdgeLabel::DataPropertyExpression, self.entity_of(op.clone())?);
                    p.subject(n);
                }
            }
            Axiom::DataPropertyDomain { property, domain } => {
                let prop = b.child(EdgeLabel::DataPropertyExpression, self.entity_of(property.clone())?);
                let d = b.child(EdgeLabel::Domain, self.translate_class_expression(domain)?);
                p.shortcut(&prop, &d, EdgeLabel::PropertyDomain);
                p.subject(prop);
            }
            Axiom::DataPropertyRange { property, range } => {
                let prop = b.child(EdgeLabel::DataPropertyExpression, self.entity_of(property.clone())?);
                let r = b.child(EdgeLabel::Range, self.translate_data_range(range)?);
                p.shortcut(&prop, &r, EdgeLabel::PropertyRange);
                p.subject(prop);
            }
            Axiom::FunctionalDataProperty(property) => {
                let prop = b.child(EdgeLabel::DataPropertyExpression, self.entity_of(property.clone())?);
                p.subject(prop);
            }

            Axiom::DatatypeDefinition { datatype, range } => {
                let d = b.child(EdgeLabel::Datatype, self.entity_of(datatype.clone())?);
                b.child(EdgeLabel::DataRange, self.translate_data_range(range)?);
                p.subject(d);
            }
            Axiom::HasKey { class, object_properties, data_properties } => {
                let c = b.child(EdgeLabel::ClassExpression, self.translate_class_expression(class)?);
                p.subject(c);
                for op in canonical_order(object_properties)? {
                    b.child(
                        EdgeLabel::ObjectPropertyExpression,
                        self.translate_object_property_expression(op)?,
                    );
                }
                for dp in canonical_order(data_properties)? {
                    b.child(EdgeLabel::DataPropertyExpression, self.entity_of(dp.clone())?);
                }
            }

            // Assertions
            Axiom::SameIndividual(ops) => {
                let mut members = Vec::with_capacity(ops.len());
                for op in canonical_order(ops)? {
                    members.push(b.child(EdgeLabel::Individual, self.translate_individual(op)?));
                }
                for (i, a) in members.iter().enumerate() {
                    for other in &members[i + 1..] {
                        p.shortcut(a, other, EdgeLabel::SameIndividual);
                    }
                }
                for m in members {
                    p.subject(m);
                }
            }
            Axiom::DifferentIndividuals(ops) => {
                for op in canonical_order(ops)? {
                    let n = b.child(EdgeLabel::Individual, self.translate_individual(op)?);
                    p.subject(n);
                }
            }
            Axiom::ClassAssertion { class, individual } => {
                let c = b.child(EdgeLabel::ClassExpression, self.translate_class_expression(class)?);
                let i = b.child(EdgeLabel::Individual, self.translate_individual(individual)?);
                p.shortcut(&i, &c, EdgeLabel::Type);
                p.subject(i);
            }
            Axiom::ObjectPropertyAssertion { property, subject, object }
            | Axiom::NegativeObjectPropertyAssertion { property, subject, object } => {
                b.child(
                    EdgeLabel::ObjectPropertyExpression,
                    self.translate_object_property_expression(property)?,
                );
                let s = b.child(EdgeLabel::Subject, self.translate_individual(subject)?);
                b.child(EdgeLabel::Object, self.translate_individual(object)?);
                p.subject(s);
            }
            Axiom::DataPropertyAssertion { property, subject, object }
            | Axiom::NegativeDataPropertyAssertion { property, subject, object } => {
                b.child(EdgeLabel::DataPropertyExpression, self.entity_of(property.clone())?);
                let s = b.child(EdgeLabel::Subject, self.translate_individual(subject)?);
                b.child(EdgeLabel::Object, self.translate_literal(object)?);
                p.subject(s);
            }

            // Annotation axioms
            Axiom::AnnotationAssertion { property, subject, value } => {
                b.child(EdgeLabel::AnnotationProperty, self.entity_of(property.clone())?);
                let s = b.child(EdgeLabel::Subject, self.translate_annotation_subject(subject)?);
                b.child(EdgeLabel::AnnotationValue, self.translate_annotation_value(value)?);
                p.subject(s);
            }
            Axiom::SubAnnotationPropertyOf { sub, sup } => {
                let s = b.child(EdgeLabel::SubAnnotationProperty, self.entity_of(sub.clone())?);
                let o = b.child(EdgeLabel::SuperAnnotationProperty, self.entity_of(sup.clone())?);
                p.shortcut(&s, &o, EdgeLabel::SubAnnotationPropertyOf);
                p.subject(s);
            }
            Axiom::AnnotationPropertyDomain { property, domain } => {
                let prop = b.child(EdgeLabel::AnnotationProperty, self.entity_of(property.clone())?);
                let d = b.child(EdgeLabel::Domain, self.translate_iri(domain)?);
                p.shortcut(&prop, &d, EdgeLabel::PropertyDomain);
                p.subject(prop);
            }
            Axiom::AnnotationPropertyRange { property, range } => {
                let prop = b.child(EdgeLabel::AnnotationProperty, self.entity_of(property.clone())?);
                let r = b.child(EdgeLabel::Range, self.translate_iri(range)?);
                p.shortcut(&prop, &r, EdgeLabel::PropertyRange);
                p.subject(prop);
            }
        }
        Ok(p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TranslatorConfig;
    use crate::identity::IdFormat;
    use crate::model::{PropertyField, Value};
    use crate::owl::{
        Annotation, AnnotationProperty, ClassExpression, Individual, Literal,
        ObjectPropertyExpression, vocab,
    };
    use pretty_assertions::assert_eq;

    fn class(name: &str) -> ClassExpression {
        ClassExpression::class(format!("http://ex.org/{name}"))
    }

    fn labels(t: &Translation) -> Vec<EdgeLabel> {
        t.direct_edges().iter().map(|e| e.label()).collect()
    }

    #[test]
    fn test_sub_class_of_layout() {
        let axiom = Axiom::SubClassOf { sub: class("A"), sup: class("B") };
        let tr = Translator::default().translate_axiom(&axiom.into()).unwrap();

        let node = tr.main_node();
        assert_eq!(node.labels().iter().collect::<Vec<_>>(), vec!["SubClassOf", "ClassAxiom", "Axiom"]);
        assert_eq!(node.id().format(), IdFormat::Digest);
        assert_eq!(
            labels(&tr),
            vec![
                EdgeLabel::SubClassExpression,
                EdgeLabel::SuperClassExpression,
                EdgeLabel::AxiomSubject,
                EdgeLabel::SubClassOf,
            ]
        );

        let shortcut = &tr.direct_edges()[3];
        assert_eq!(shortcut.start().get(PropertyField::Iri), Some(&Value::from("http://ex.org/A")));
        assert_eq!(shortcut.end().get(PropertyField::Iri), Some(&Value::from("http://ex.org/B")));
        assert_eq!(shortcut.properties().get(PropertyField::Augmented), Some(&Value::Bool(true)));
    }

    #[test]
    fn test_minimal_config_emits_roles_only() {
        let axiom = Axiom::SubClassOf { sub: class("A"), sup: class("B") }.annotated([Annotation::new(
            AnnotationProperty::new(vocab::RDFS_COMMENT),
            Literal::string("c"),
        )]);
        let tr = Translator::new(TranslatorConfig::minimal()).translate_axiom(&axiom).unwrap();
        assert_eq!(labels(&tr), vec![EdgeLabel::SubClassExpression, EdgeLabel::SuperClassExpression]);
    }

    #[test]
    fn test_no_shortcut_through_anonymous_expressions() {
        let axiom = Axiom::SubClassOf {
            sub: class("A"),
            sup: ClassExpression::some(ObjectPropertyExpression::named("http://ex.org/p"), class("B")),
        };
        let tr = Translator::default().translate_axiom(&axiom.into()).unwrap();
        assert!(!labels(&tr).contains(&EdgeLabel::SubClassOf));
    }

    #[test]
    fn test_disjoint_classes_with_repeated_operand() {
        let axiom = Axiom::DisjointClasses(vec![class("A"), class("A")]);
        let tr = Translator::default().translate_axiom(&axiom.into()).unwrap();
        let operands: Vec<_> = tr
            .direct_edges()
            .iter()
            .filter(|e| e.label() == EdgeLabel::ClassExpression)
            .collect();
        assert_eq!(operands.len(), 2);
        assert_eq!(operands[0].end().id(), operands[1].end().id());
        assert_ne!(operands[0].id(), operands[1].id());
    }

    #[test]
    fn test_reflexive_sub_class_of_keeps_its_shortcut() {
        let axiom = Axiom::SubClassOf { sub: class("A"), sup: class("A") };
        let tr = Translator::default().translate_axiom(&axiom.into()).unwrap();
        let shortcut = tr.direct_edges().iter().find(|e| e.label() == EdgeLabel::SubClassOf).unwrap();
        assert_eq!(shortcut.start().id(), shortcut.end().id());

        let axiom = Axiom::SubObjectPropertyOf {
            sub: ObjectPropertyExpression::named("http://ex.org/p"),
            sup: ObjectPropertyExpression::named("http://ex.org/p"),
        };
        let tr = Translator::default().translate_axiom(&axiom.into()).unwrap();
        assert_eq!(labels(&tr).iter().filter(|l| **l == EdgeLabel::SubObjectPropertyOf).count(), 1);
    }

    #[test]
    fn test_same_individual_skips_self_pairs() {
        let i = Individual::named("http://ex.org/i");
        let axiom = Axiom::SameIndividual(vec![i.clone(), i]);
        let tr = Translator::default().translate_axiom(&axiom.into()).unwrap();
        assert!(!labels(&tr).contains(&EdgeLabel::SameIndividual));
    }

    #[test]
    fn test_class_assertion_type_shortcut() {
        let axiom = Axiom::ClassAssertion { class: class("A"), individual: Individual::named("http://ex.org/i") };
        let tr = Translator::default().translate_axiom(&axiom.into()).unwrap();
        let shortcut = tr.direct_edges().iter().find(|e| e.label() == EdgeLabel::Type).unwrap();
        assert!(shortcut.start().has_label("NamedIndividual"));
        assert!(shortcut.end().has_label("Class"));
    }

    #[test]
    fn test_same_individual_pairs() {
        let axiom = Axiom::SameIndividual(vec![
            Individual::named("http://ex.org/c"),
            Individual::named("http://ex.org/a"),
            Individual::named("http://ex.org/b"),
        ]);
        let tr = Translator::default().translate_axiom(&axiom.into()).unwrap();
        let same = tr.direct_edges().iter().filter(|e| e.label() == EdgeLabel::SameIndividual).count();
        assert_eq!(same, 3);
    }

    #[test]
    fn test_annotation_changes_axiom_identity() {
        let plain = Axiom::SubClassOf { sub: class("A"), sup: class("B") };
        let annotated = plain.clone().annotated([Annotation::new(
            AnnotationProperty::new(vocab::RDFS_COMMENT),
            Literal::string("c"),
        )]);
        let x = Translator::default().translate_axiom(&plain.into()).unwrap();
        let y = Translator::default().translate_axiom(&annotated).unwrap();
        assert_ne!(x.main_node().id(), y.main_node().id());
        assert!(labels(&y).contains(&EdgeLabel::AxiomAnnotation));
    }

    #[test]
    fn test_property_chain_positions_through_axiom() {
        let axiom = Axiom::SubPropertyChainOf {
            chain: vec![
                ObjectPropertyExpression::named("http://ex.org/hasParent"),
                ObjectPropertyExpression::named("http://ex.org/hasBrother"),
            ],
            sup: ObjectPropertyExpression::named("http://ex.org/hasUncle"),
        };
        let tr = Translator::default().translate_axiom(&axiom.into()).unwrap();
        let chain = &tr.nested()[0];
        assert_eq!(chain.main_node().labels().primary(), "ObjectPropertyChain");
        assert_eq!(chain.direct_edges().len(), 2);
    }

    #[test]
    fn test_every_axiom_type_translates() {
        use crate::owl::{DataProperty, DataRange, Datatype, Entity, Class};
        let p = ObjectPropertyExpression::named("http://ex.org/p");
        let q = ObjectPropertyExpression::named("http://ex.org/q");
        let d = DataProperty::new("http://ex.org/d");
        let e = DataProperty::new("http://ex.org/e");
        let i = Individual::named("http://ex.org/i");
        let j = Individual::anonymous("_:j");
        let ap = AnnotationProperty::new("http://ex.org/ap");
        let aq = AnnotationProperty::new("http://ex.org/aq");
        let axioms = vec![
            Axiom::Declaration(Entity::Class(Class::new("http://ex.org/A"))),
            Axiom::SubClassOf { sub: class("A"), sup: class("B") },
            Axiom::EquivalentClasses(vec![class("A"), class("B")]),
            Axiom::DisjointClasses(vec![class("A"), class("B")]),
            Axiom::DisjointUnion { class: Class::new("http://ex.org/U"), operands: vec![class("A"), class("B")] },
            Axiom::SubObjectPropertyOf { sub: p.clone(), sup: q.clone() },
            Axiom::SubPropertyChainOf { chain: vec![p.clone(), q.clone()], sup: p.clone() },
            Axiom::EquivalentObjectProperties(vec![p.clone(), q.clone()]),
            Axiom::DisjointObjectProperties(vec![p.clone(), q.clone()]),
            Axiom::InverseObjectProperties(p.clone(), q.clone()),
            Axiom::ObjectPropertyDomain { property: p.clone(), domain: class("A") },
            Axiom::ObjectPropertyRange { property: p.clone(), range: class("B") },
            Axiom::FunctionalObjectProperty(p.clone()),
            Axiom::InverseFunctionalObjectProperty(p.clone()),
            Axiom::ReflexiveObjectProperty(p.clone()),
            Axiom::IrreflexiveObjectProperty(p.clone()),
            Axiom::SymmetricObjectProperty(p.clone()),
            Axiom::AsymmetricObjectProperty(p.clone()),
            Axiom::TransitiveObjectProperty(p.clone()),
            Axiom::SubDataPropertyOf { sub: d.clone(), sup: e.clone() },
            Axiom::EquivalentDataProperties(vec![d.clone(), e.clone()]),
            Axiom::DisjointDataProperties(vec![d.clone(), e.clone()]),
            Axiom::DataPropertyDomain { property: d.clone(), domain: class("A") },
            Axiom::DataPropertyRange { property: d.clone(), range: DataRange::datatype(vocab::XSD_STRING) },
            Axiom::FunctionalDataProperty(d.clone()),
            Axiom::DatatypeDefinition {
                datatype: Datatype::new("http://ex.org/dt"),
                range: DataRange::datatype(vocab::XSD_INTEGER),
            },
            Axiom::HasKey { class: class("A"), object_properties: vec![p.clone()], data_properties: vec![d.clone()] },
            Axiom::SameIndividual(vec![i.clone(), j.clone()]),
            Axiom::DifferentIndividuals(vec![i.clone(), j.clone()]),
            Axiom::ClassAssertion { class: class("A"), individual: i.clone() },
            Axiom::ObjectPropertyAssertion { property: p.clone(), subject: i.clone(), object: j.clone() },
            Axiom::NegativeObjectPropertyAssertion { property: p.clone(), subject: i.clone(), object: j.clone() },
            Axiom::DataPropertyAssertion { property: d.clone(), subject: i.clone(), object: Literal::integer(1) },
            Axiom::NegativeDataPropertyAssertion { property: d.clone(), subject: i.clone(), object: Literal::integer(2) },
            Axiom::AnnotationAssertion {
                property: ap.clone(),
                subject: crate::owl::Iri::new("http://ex.org/A").into(),
                value: Literal::string("A").into(),
            },
            Axiom::SubAnnotationPropertyOf { sub: ap.clone(), sup: aq.clone() },
            Axiom::AnnotationPropertyDomain { property: ap.clone(), domain: "http://ex.org/A".into() },
            Axiom::AnnotationPropertyRange { property: ap.clone(), range: "http://ex.org/B".into() },
        ];
        assert_eq!(axioms.len(), crate::owl::AxiomType::ALL.len());
        for axiom in axioms {
            let ty = axiom.axiom_type();
            let tr = Translator::default().translate_axiom(&axiom.into()).unwrap();
            assert_eq!(tr.main_node().labels().primary(), ty.name());
            assert!(tr.main_node().has_label("Axiom"));
            assert!(tr.edge_count() > 0, "{}", ty.name());
        }
    }
}
