//! Write-statement AST.
//!
//! These types are what the query builders produce and what sinks consume.
//! They are pure data; `Display` renders them as Neo4j 5 Cypher.

use std::fmt;

use crate::identity::is_structural_edge;
use crate::model::{EdgeId, EdgeLabel, Node, NodeLabels, Properties, PropertyField, Value};

/// A complete write statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    /// One match-or-create batch: `MERGE ... MERGE ...`.
    Merge(Vec<Clause>),
    /// `MATCH (a)-[r]->(b) [WHERE guard] DELETE r`
    DeleteRelationship { rel: RelRef, guard: Guard },
    /// `MATCH (n) [WHERE guard] DETACH DELETE n`
    DetachDeleteNode { node: NodeRef, guard: Guard },
}

impl Statement {
    pub fn kind(&self) -> &'static str {
        match self {
            Statement::Merge(_) => "merge",
            Statement::DeleteRelationship { .. } => "delete-relationship",
            Statement::DetachDeleteNode { .. } => "detach-delete-node",
        }
    }
}

/// Clause inside a MERGE batch. Variables are bound by earlier clauses of
/// the same batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Clause {
    MergeNode(NodePattern),
    MergeRelationship(RelPattern),
}

/// `(var:Label1:Label2 {key: value}) ON CREATE SET var += {props}`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodePattern {
    pub var: String,
    pub labels: NodeLabels,
    pub key: PropertyField,
    pub value: String,
    /// Everything except the key.
    pub properties: Properties,
}

impl NodePattern {
    pub fn of(var: impl Into<String>, node: &Node) -> Self {
        let (key, value) = (node.id().key_field(), node.id().as_str().to_owned());
        Self {
            var: var.into(),
            labels: node.labels().clone(),
            key,
            properties: node.properties().without(key),
            value,
        }
    }
}

/// `(start)-[var:TYPE {edgeId: id}]->(end) ON CREATE SET var += {props}`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelPattern {
    pub var: String,
    pub start: String,
    pub end: String,
    pub rel_type: EdgeLabel,
    pub edge_id: EdgeId,
    pub properties: Properties,
}

/// A stored node located by its primary label and key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NodeRef {
    pub label: &'static str,
    pub key: PropertyField,
    pub value: String,
}

impl NodeRef {
    pub fn of(node: &Node) -> Self {
        Self {
            label: node.labels().primary(),
            key: node.id().key_field(),
            value: node.id().as_str().to_owned(),
        }
    }
}

/// A stored relationship. Without an `edge_id`, every relationship of the
/// type between the two nodes matches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelRef {
    pub start: NodeRef,
    pub rel_type: EdgeLabel,
    pub edge_id: Option<EdgeId>,
    pub end: NodeRef,
}

/// Condition a delete statement only applies under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Guard {
    Always,
    /// The axiom is no longer part of any ontology document.
    AxiomDetached(NodeRef),
    /// No axiom of `document` still reaches `entity` over structural edges.
    SignatureOrphaned { entity: NodeRef, document: NodeRef },
}

// ============================================================================
// Rendering
// ============================================================================

struct Pattern<'a>(Option<&'a str>, &'a NodeRef);

impl fmt::Display for Pattern<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Pattern(var, node) = self;
        write!(
            f,
            "({}:{} {{{}: {}}})",
            var.unwrap_or(""),
            node.label,
            node.key,
            Value::from(node.value.as_str())
        )
    }
}

struct PropMap<'a>(&'a Properties);

impl fmt::Display for PropMap<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (field, value)) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{field}: {value}")?;
        }
        f.write_str("}")
    }
}

/// Relationship types an axiom reaches its content through.
fn structural_types() -> String {
    EdgeLabel::ALL
        .iter()
        .filter(|l| is_structural_edge(**l))
        .map(|l| l.as_str())
        .collect::<Vec<_>>()
        .join("|")
}

impl fmt::Display for Guard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Guard::Always => Ok(()),
            Guard::AxiomDetached(axiom) => write!(
                f,
                "WHERE NOT EXISTS {{ MATCH {}-[:{}]->(:OntologyDocument) }}",
                Pattern(None, axiom),
                EdgeLabel::AxiomOf
            ),
            Guard::SignatureOrphaned { entity, document } => write!(
                f,
                "WHERE NOT EXISTS {{ MATCH {}<-[:{}]-(:Axiom)-[:{}*]->{} }}",
                Pattern(None, document),
                EdgeLabel::AxiomOf,
                structural_types(),
                Pattern(None, entity)
            ),
        }
    }
}

impl fmt::Display for Clause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Clause::MergeNode(n) => {
                write!(f, "MERGE ({}", n.var)?;
                for label in n.labels.iter() {
                    write!(f, ":{label}")?;
                }
                write!(f, " {{{}: {}}})", n.key, Value::from(n.value.as_str()))?;
                if !n.properties.is_empty() {
                    write!(f, " ON CREATE SET {} += {}", n.var, PropMap(&n.properties))?;
                }
                Ok(())
            }
            Clause::MergeRelationship(r) => {
                write!(
                    f,
                    "MERGE ({})-[{}:{} {{{}: {}}}]->({})",
                    r.start,
                    r.var,
                    r.rel_type,
                    PropertyField::EdgeId,
                    Value::from(r.edge_id.as_str()),
                    r.end
                )?;
                if !r.properties.is_empty() {
                    write!(f, " ON CREATE SET {} += {}", r.var, PropMap(&r.properties))?;
                }
                Ok(())
            }
        }
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Statement::Merge(clauses) => {
                for (i, clause) in clauses.iter().enumerate() {
                    if i > 0 {
                        f.write_str("\n")?;
                    }
                    write!(f, "{clause}")?;
                }
                Ok(())
            }
            Statement::DeleteRelationship { rel, guard } => {
                write!(f, "MATCH {}-[r:{}", Pattern(Some("a"), &rel.start), rel.rel_type)?;
                if let Some(id) = &rel.edge_id {
                    write!(f, " {{{}: {}}}", PropertyField::EdgeId, Value::from(id.as_str()))?;
                }
                write!(f, "]->{}", Pattern(Some("b"), &rel.end))?;
                if *guard != Guard::Always {
                    write!(f, "\n{guard}")?;
                }
                f.write_str("\nDELETE r")
            }
            Statement::DetachDeleteNode { node, guard } => {
                write!(f, "MATCH {}", Pattern(Some("n"), node))?;
                if *guard != Guard::Always {
                    write!(f, "\n{guard}")?;
                }
                f.write_str("\nDETACH DELETE n")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identity::IdFormat;
    use crate::model::NodeId;
    use pretty_assertions::assert_eq;

    fn class_node() -> Node {
        Node::new(
            NodeId::hashed(IdFormat::Digest, "abc".into()),
            NodeLabels::new("Class").and("ClassExpression").and("Entity"),
            Properties::new().with(PropertyField::Iri, "http://ex.org/A"),
        )
    }

    fn doc() -> NodeRef {
        NodeRef { label: "OntologyDocument", key: PropertyField::OntologyDocumentId, value: "D".into() }
    }

    #[test]
    fn test_merge_node_rendering() {
        let clause = Clause::MergeNode(NodePattern::of("n0", &class_node()));
        assert_eq!(
            clause.to_string(),
            "MERGE (n0:Class:ClassExpression:Entity {digest: 'abc'}) ON CREATE SET n0 += {iri: 'http://ex.org/A'}"
        );
    }

    #[test]
    fn test_merge_relationship_rendering() {
        let clause = Clause::MergeRelationship(RelPattern {
            var: "r0".into(),
            start: "n0".into(),
            end: "n1".into(),
            rel_type: EdgeLabel::ObjectPropertyExpression,
            edge_id: EdgeId::from_hex("ff".into()),
            properties: Properties::new().with(PropertyField::Pos, 2),
        });
        assert_eq!(
            clause.to_string(),
            "MERGE (n0)-[r0:objectPropertyExpression {edgeId: 'ff'}]->(n1) ON CREATE SET r0 += {pos: 2}"
        );
    }

    #[test]
    fn test_guarded_detach_delete() {
        let axiom = NodeRef { label: "SubClassOf", key: PropertyField::Digest, value: "x".into() };
        let stmt = Statement::DetachDeleteNode {
            node: NodeRef { label: "ObjectSomeValuesFrom", key: PropertyField::Digest, value: "y".into() },
            guard: Guard::AxiomDetached(axiom),
        };
        assert_eq!(
            stmt.to_string(),
            "MATCH (n:ObjectSomeValuesFrom {digest: 'y'})\n\
             WHERE NOT EXISTS { MATCH (:SubClassOf {digest: 'x'})-[:axiomOf]->(:OntologyDocument) }\n\
             DETACH DELETE n"
        );
    }

    #[test]
    fn test_unguarded_relationship_delete() {
        let stmt = Statement::DeleteRelationship {
            rel: RelRef {
                start: NodeRef { label: "SubClassOf", key: PropertyField::Digest, value: "x".into() },
                rel_type: EdgeLabel::AxiomOf,
                edge_id: None,
                end: doc(),
            },
            guard: Guard::Always,
        };
        assert_eq!(
            stmt.to_string(),
            "MATCH (a:SubClassOf {digest: 'x'})-[r:axiomOf]->(b:OntologyDocument {ontologyDocumentId: 'D'})\nDELETE r"
        );
    }

    #[test]
    fn test_signature_guard_walks_structural_edges_only() {
        let guard = Guard::SignatureOrphaned { entity: NodeRef::of(&class_node()), document: doc() };
        let text = guard.to_string();
        assert!(text.contains("(:OntologyDocument {ontologyDocumentId: 'D'})<-[:axiomOf]-(:Axiom)"));
        assert!(text.contains("subClassExpression"));
        assert!(text.contains("entityIri"));
        assert!(!text.contains("|subClassOf"));
        assert!(!text.contains("inOntologySignature"));
        assert!(text.ends_with("*]->(:Class {digest: 'abc'}) }"));
    }

    #[test]
    fn test_quotes_are_escaped() {
        let node = NodeRef { label: "IRI", key: PropertyField::Digest, value: "o'brien".into() };
        let stmt = Statement::DetachDeleteNode { node, guard: Guard::Always };
        assert!(stmt.to_string().contains(r"{digest: 'o\'brien'}"));
    }
}
