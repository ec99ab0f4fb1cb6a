//! End-to-end tests for the delete path.
//!
//! Create then delete against MemoryBackend and check what survives:
//! digest-identified leaves stay, the axiom and its anonymous structure go,
//! the document signature only loses entities no remaining axiom reaches.

use owl2neo4j::owl::{
    AnnotationProperty, Axiom, ClassExpression, Literal, ObjectPropertyExpression, OntologyChange, vocab,
};
use owl2neo4j::{EdgeLabel, OntologyGraph, PropertyField, WriteContext};
use pretty_assertions::assert_eq;

fn ctx(document: &str) -> WriteContext {
    WriteContext::new("P", "B", document)
}

fn class(name: &str) -> ClassExpression {
    ClassExpression::class(format!("http://ex.org/{name}"))
}

fn some(property: &str, filler: ClassExpression) -> ClassExpression {
    ClassExpression::some(ObjectPropertyExpression::named(format!("http://ex.org/{property}")), filler)
}

// ============================================================================
// 1. Removing the only axiom empties the signature but keeps the leaves
// ============================================================================

#[tokio::test]
async fn test_remove_only_axiom() {
    let graph = OntologyGraph::open_memory();
    let axiom = Axiom::SubClassOf { sub: class("A"), sup: class("B") };
    graph.add_axiom(&ctx("D"), &axiom.clone().into()).await.unwrap();
    let stats = graph.remove_axiom(&ctx("D"), &axiom.into()).await.unwrap();

    assert_eq!(stats.nodes_deleted, 1);
    // axiomOf, subClassOf, three role edges on the axiom, two signature links
    assert_eq!(stats.relationships_deleted, 7);

    let backend = graph.sink();
    assert!(backend.nodes_by_label("Axiom").is_empty());
    assert_eq!(backend.nodes_by_label("Class").len(), 2);
    assert_eq!(backend.nodes_by_label("IRI").len(), 2);
    assert!(backend.signature(&ctx("D")).is_empty());
    assert_eq!(backend.axiom_count(&ctx("D")), 0);
    // context chain and the two entityIri edges
    assert_eq!(backend.relationship_count(), 4);
}

// ============================================================================
// 2. An entity referenced by another axiom stays in the signature
// ============================================================================

#[tokio::test]
async fn test_entity_referenced_elsewhere_stays_in_signature() {
    let graph = OntologyGraph::open_memory();
    let first = Axiom::SubClassOf { sub: class("A"), sup: class("B") };
    let second = Axiom::SubClassOf { sub: class("B"), sup: class("C") };
    graph
        .apply_changes(
            &ctx("D"),
            &[OntologyChange::AddAxiom(first.clone().into()), OntologyChange::AddAxiom(second.into())],
        )
        .await
        .unwrap();

    graph.remove_axiom(&ctx("D"), &first.into()).await.unwrap();

    let backend = graph.sink();
    assert_eq!(backend.signature(&ctx("D")), vec!["http://ex.org/B", "http://ex.org/C"]);
    assert_eq!(backend.axiom_count(&ctx("D")), 1);
    // the surviving axiom keeps its own shortcut
    assert_eq!(backend.relationships_by_type(EdgeLabel::SubClassOf).len(), 1);
}

// ============================================================================
// 3. Anonymous sub-structure is removed with its axiom
// ============================================================================

#[tokio::test]
async fn test_anonymous_structure_is_removed() {
    let graph = OntologyGraph::open_memory();
    let axiom = Axiom::SubClassOf {
        sub: class("A"),
        sup: ClassExpression::and([some("p", class("B")), ClassExpression::not(class("C"))]),
    };
    graph.add_axiom(&ctx("D"), &axiom.clone().into()).await.unwrap();
    assert_eq!(graph.sink().nodes_by_label("Restriction").len(), 1);

    graph.remove_axiom(&ctx("D"), &axiom.into()).await.unwrap();

    let backend = graph.sink();
    for label in ["Axiom", "ObjectIntersectionOf", "ObjectSomeValuesFrom", "ObjectComplementOf"] {
        assert!(backend.nodes_by_label(label).is_empty(), "{label} survived");
    }
    assert_eq!(backend.nodes_by_label("Class").len(), 3);
    assert_eq!(backend.nodes_by_label("ObjectProperty").len(), 1);
    assert!(backend.signature(&ctx("D")).is_empty());
}

// ============================================================================
// 4. Another axiom's anonymous structure is untouched
// ============================================================================

#[tokio::test]
async fn test_other_axioms_structure_survives() {
    let graph = OntologyGraph::open_memory();
    let first = Axiom::SubClassOf { sub: class("A"), sup: some("p", class("B")) };
    let second = Axiom::SubClassOf { sub: class("C"), sup: some("p", class("B")) };
    graph.add_axiom(&ctx("D"), &first.clone().into()).await.unwrap();
    graph.add_axiom(&ctx("D"), &second.into()).await.unwrap();

    graph.remove_axiom(&ctx("D"), &first.into()).await.unwrap();

    let backend = graph.sink();
    assert_eq!(backend.nodes_by_label("ObjectSomeValuesFrom").len(), 1);
    assert_eq!(
        backend.signature(&ctx("D")),
        vec!["http://ex.org/B", "http://ex.org/C", "http://ex.org/p"]
    );
}

// ============================================================================
// 5. An axiom asserted in two documents survives removal from one
// ============================================================================

#[tokio::test]
async fn test_axiom_shared_across_documents() {
    let graph = OntologyGraph::open_memory();
    let axiom = Axiom::SubClassOf { sub: class("A"), sup: some("p", class("B")) };
    graph.add_axiom(&ctx("D1"), &axiom.clone().into()).await.unwrap();
    graph.add_axiom(&ctx("D2"), &axiom.clone().into()).await.unwrap();

    let backend = graph.sink();
    assert_eq!(backend.nodes_by_label("SubClassOf").len(), 1);

    graph.remove_axiom(&ctx("D1"), &axiom.into()).await.unwrap();

    assert_eq!(backend.nodes_by_label("SubClassOf").len(), 1);
    assert_eq!(backend.nodes_by_label("ObjectSomeValuesFrom").len(), 1);
    assert!(backend.signature(&ctx("D1")).is_empty());
    assert_eq!(backend.signature(&ctx("D2")), vec!["http://ex.org/A", "http://ex.org/B", "http://ex.org/p"]);
    assert_eq!(backend.axiom_count(&ctx("D2")), 1);
}

// ============================================================================
// 6. Shortcut edges belong to the axiom that implied them
// ============================================================================

#[tokio::test]
async fn test_shortcut_survives_when_another_axiom_implies_it() {
    let graph = OntologyGraph::open_memory();
    let plain = Axiom::SubClassOf { sub: class("A"), sup: class("B") };
    let commented = plain.clone().annotated([owl2neo4j::owl::Annotation::new(
        AnnotationProperty::new(vocab::RDFS_COMMENT),
        Literal::string("asserted twice"),
    )]);
    graph.add_axiom(&ctx("D"), &plain.clone().into()).await.unwrap();
    graph.add_axiom(&ctx("D"), &commented).await.unwrap();
    assert_eq!(graph.sink().relationships_by_type(EdgeLabel::SubClassOf).len(), 2);

    graph.remove_axiom(&ctx("D"), &plain.into()).await.unwrap();

    let backend = graph.sink();
    assert_eq!(backend.relationships_by_type(EdgeLabel::SubClassOf).len(), 1);
    // the comment's property and its literal's datatype belong to the signature too
    assert_eq!(
        backend.signature(&ctx("D")),
        vec!["http://ex.org/A", "http://ex.org/B", vocab::RDFS_COMMENT, vocab::XSD_STRING]
    );
}

// ============================================================================
// 7. Literals are digest leaves and outlive their annotation axiom
// ============================================================================

#[tokio::test]
async fn test_literal_leaf_outlives_axiom() {
    let graph = OntologyGraph::open_memory();
    let axiom = Axiom::AnnotationAssertion {
        property: AnnotationProperty::new(vocab::RDFS_LABEL),
        subject: owl2neo4j::owl::Iri::new("http://ex.org/A").into(),
        value: Literal::lang("Pizza", "EN").into(),
    };
    graph.add_axiom(&ctx("D"), &axiom.clone().into()).await.unwrap();
    graph.remove_axiom(&ctx("D"), &axiom.into()).await.unwrap();

    let literals = graph.sink().nodes_by_label("Literal");
    assert_eq!(literals.len(), 1);
    assert_eq!(literals[0].get_str(PropertyField::LexicalForm), Some("Pizza"));
    assert_eq!(literals[0].get_str(PropertyField::Language), Some("en"));
}

// ============================================================================
// 8. Removing an axiom that was never added is a no-op
// ============================================================================

#[tokio::test]
async fn test_remove_unknown_axiom_is_noop() {
    let graph = OntologyGraph::open_memory();
    graph
        .add_axiom(&ctx("D"), &Axiom::SubClassOf { sub: class("A"), sup: class("B") }.into())
        .await
        .unwrap();
    let (nodes, rels) = (graph.sink().node_count(), graph.sink().relationship_count());

    let stats = graph
        .remove_axiom(&ctx("D"), &Axiom::SubClassOf { sub: class("X"), sup: class("Y") }.into())
        .await
        .unwrap();

    assert!(stats.is_empty());
    assert_eq!(graph.sink().node_count(), nodes);
    assert_eq!(graph.sink().relationship_count(), rels);
}

// ============================================================================
// 9. Projects sharing branch and document ids stay apart
// ============================================================================

#[tokio::test]
async fn test_projects_with_same_branch_and_document_ids_stay_apart() {
    let graph = OntologyGraph::open_memory();
    let first = WriteContext::new("P1", "main", "pizza.owl");
    let second = WriteContext::new("P2", "main", "pizza.owl");
    let a_b = Axiom::SubClassOf { sub: class("A"), sup: class("B") };
    graph.add_axiom(&first, &a_b.clone().into()).await.unwrap();
    graph
        .add_axiom(&second, &Axiom::SubClassOf { sub: class("X"), sup: class("Y") }.into())
        .await
        .unwrap();

    let backend = graph.sink();
    assert_eq!(backend.nodes_by_label("Project").len(), 2);
    assert_eq!(backend.nodes_by_label("Branch").len(), 2);
    assert_eq!(backend.nodes_by_label("OntologyDocument").len(), 2);

    // the second project never asserted A subClassOf B
    let stats = graph.remove_axiom(&second, &a_b.into()).await.unwrap();
    assert!(stats.is_empty());

    assert_eq!(backend.axiom_count(&first), 1);
    assert_eq!(backend.signature(&first), vec!["http://ex.org/A", "http://ex.org/B"]);
    assert_eq!(backend.axiom_count(&second), 1);
    assert_eq!(backend.signature(&second), vec!["http://ex.org/X", "http://ex.org/Y"]);
}
