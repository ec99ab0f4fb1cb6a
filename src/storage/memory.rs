//! In-memory statement sink.
//!
//! This is the reference interpreter of the write-statement AST: MERGE
//! matches on labels plus key, delete guards are evaluated against the
//! current graph. It backs the round-trip tests and embedders that do not
//! need a real Neo4j.
//!
//! ## Limitations
//!
//! - **No persistence**: the graph lives as long as the backend.
//! - **Statement-level atomicity only**: each statement runs under one write
//!   lock; a batch that fails half-way leaves the earlier statements applied.
//! - **No property indexes beyond the id key**: label and key lookups are
//!   indexed, everything else scans.

use std::collections::{HashMap, HashSet, VecDeque};
use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::RwLock;
use tracing::trace;

use super::{ExecutionStats, StatementSink};
use crate::cypher::{Clause, Guard, NodePattern, NodeRef, RelPattern, RelRef, Statement};
use crate::identity::is_structural_edge;
use crate::model::{EdgeLabel, NodeId, NodeLabels, Properties, PropertyField, Value};
use crate::translate::WriteContext;
use crate::{Error, Result};

// ============================================================================
// Stored graph elements
// ============================================================================

/// Internal node id, assigned on creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StoreId(pub u64);

impl fmt::Display for StoreId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct RelId(u64);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredNode {
    pub id: StoreId,
    pub labels: NodeLabels,
    /// The identifying property MERGE matched on.
    pub key: PropertyField,
    pub properties: Properties,
}

impl StoredNode {
    pub fn has_label(&self, label: &str) -> bool {
        self.labels.contains(label)
    }

    pub fn get_str(&self, field: PropertyField) -> Option<&str> {
        self.properties.get_str(field)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredRelationship {
    pub start: StoreId,
    pub end: StoreId,
    pub rel_type: EdgeLabel,
    pub properties: Properties,
}

impl StoredRelationship {
    pub fn edge_id(&self) -> Option<&str> {
        self.properties.get_str(PropertyField::EdgeId)
    }
}

// ============================================================================
// MemoryBackend
// ============================================================================

/// In-memory property graph driven by write statements.
#[derive(Clone, Default)]
pub struct MemoryBackend {
    inner: Arc<RwLock<MemoryGraph>>,
}

#[derive(Default)]
struct MemoryGraph {
    nodes: HashMap<StoreId, StoredNode>,
    relationships: HashMap<RelId, StoredRelationship>,
    /// node → incident relationships (both directions)
    adjacency: HashMap<StoreId, Vec<RelId>>,
    /// label → nodes carrying it
    label_index: HashMap<&'static str, HashSet<StoreId>>,
    /// (key field, key value) → nodes; MERGE and MATCH go through this
    key_index: HashMap<(PropertyField, String), Vec<StoreId>>,
    next_node_id: u64,
    next_rel_id: u64,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn node_count(&self) -> usize {
        self.inner.read().nodes.len()
    }

    pub fn relationship_count(&self) -> usize {
        self.inner.read().relationships.len()
    }

    pub fn nodes_by_label(&self, label: &str) -> Vec<StoredNode> {
        let graph = self.inner.read();
        let mut nodes: Vec<StoredNode> = graph
            .label_index
            .get(label)
            .into_iter()
            .flatten()
            .filter_map(|id| graph.nodes.get(id).cloned())
            .collect();
        nodes.sort_by_key(|n| n.id);
        nodes
    }

    /// The stored node carrying a translation node id.
    pub fn find_node(&self, id: &NodeId) -> Option<StoredNode> {
        let graph = self.inner.read();
        graph
            .key_index
            .get(&(id.key_field(), id.as_str().to_owned()))
            .and_then(|ids| ids.first())
            .and_then(|sid| graph.nodes.get(sid).cloned())
    }

    pub fn node(&self, id: StoreId) -> Option<StoredNode> {
        self.inner.read().nodes.get(&id).cloned()
    }

    pub fn relationships_by_type(&self, rel_type: EdgeLabel) -> Vec<StoredRelationship> {
        let graph = self.inner.read();
        let mut rels: Vec<(RelId, StoredRelationship)> = graph
            .relationships
            .iter()
            .filter(|(_, r)| r.rel_type == rel_type)
            .map(|(id, r)| (*id, r.clone()))
            .collect();
        rels.sort_by_key(|(id, _)| id.0);
        rels.into_iter().map(|(_, r)| r).collect()
    }

    /// IRIs of the entities in a document's signature, sorted.
    pub fn signature(&self, ctx: &WriteContext) -> Vec<String> {
        let graph = self.inner.read();
        let Some(doc) = graph.resolve(&NodeRef::of(&ctx.document_node())) else {
            return Vec::new();
        };
        let mut iris: Vec<String> = graph
            .incoming(doc, EdgeLabel::InOntologySignature)
            .filter_map(|r| graph.nodes.get(&r.start))
            .filter_map(|n| n.get_str(PropertyField::Iri).map(str::to_owned))
            .collect();
        iris.sort();
        iris.dedup();
        iris
    }

    /// Number of axioms linked into a document.
    pub fn axiom_count(&self, ctx: &WriteContext) -> usize {
        let graph = self.inner.read();
        graph
            .resolve(&NodeRef::of(&ctx.document_node()))
            .map(|doc| graph.incoming(doc, EdgeLabel::AxiomOf).count())
            .unwrap_or(0)
    }
}

impl fmt::Debug for MemoryBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let graph = self.inner.read();
        f.debug_struct("MemoryBackend")
            .field("nodes", &graph.nodes.len())
            .field("relationships", &graph.relationships.len())
            .finish()
    }
}

// ============================================================================
// Graph primitives
// ============================================================================

impl MemoryGraph {
    fn lookup(&self, key: PropertyField, value: &str, label: &str) -> Option<StoreId> {
        self.key_index
            .get(&(key, value.to_owned()))?
            .iter()
            .copied()
            .find(|id| self.nodes.get(id).is_some_and(|n| n.has_label(label)))
    }

    fn resolve(&self, node: &NodeRef) -> Option<StoreId> {
        self.lookup(node.key, &node.value, node.label)
    }

    fn outgoing(&self, node: StoreId, rel_type: EdgeLabel) -> impl Iterator<Item = &StoredRelationship> {
        self.incident(node).filter(move |r| r.start == node && r.rel_type == rel_type)
    }

    fn incoming(&self, node: StoreId, rel_type: EdgeLabel) -> impl Iterator<Item = &StoredRelationship> {
        self.incident(node).filter(move |r| r.end == node && r.rel_type == rel_type)
    }

    fn incident(&self, node: StoreId) -> impl Iterator<Item = &StoredRelationship> {
        self.adjacency
            .get(&node)
            .into_iter()
            .flatten()
            .filter_map(|rid| self.relationships.get(rid))
    }

    fn create_node(&mut self, pattern: &NodePattern) -> StoreId {
        let id = StoreId(self.next_node_id);
        self.next_node_id += 1;
        let properties = pattern
            .properties
            .iter()
            .map(|(k, v)| (k, v.clone()))
            .chain(std::iter::once((pattern.key, Value::from(pattern.value.as_str()))))
            .collect();
        for label in pattern.labels.iter() {
            self.label_index.entry(label).or_default().insert(id);
        }
        self.key_index.entry((pattern.key, pattern.value.clone())).or_default().push(id);
        self.adjacency.insert(id, Vec::new());
        self.nodes.insert(
            id,
            StoredNode { id, labels: pattern.labels.clone(), key: pattern.key, properties },
        );
        id
    }

    fn merge_node(&mut self, pattern: &NodePattern, stats: &mut ExecutionStats) -> StoreId {
        let existing = self
            .key_index
            .get(&(pattern.key, pattern.value.clone()))
            .into_iter()
            .flatten()
            .copied()
            .find(|id| {
                self.nodes
                    .get(id)
                    .is_some_and(|n| pattern.labels.iter().all(|l| n.has_label(l)))
            });
        match existing {
            Some(id) => id,
            None => {
                stats.nodes_created += 1;
                self.create_node(pattern)
            }
        }
    }

    fn merge_relationship(
        &mut self,
        start: StoreId,
        end: StoreId,
        pattern: &RelPattern,
        stats: &mut ExecutionStats,
    ) {
        let edge_id = pattern.edge_id.as_str();
        let exists = self
            .outgoing(start, pattern.rel_type)
            .any(|r| r.end == end && r.edge_id() == Some(edge_id));
        if exists {
            return;
        }
        let id = RelId(self.next_rel_id);
        self.next_rel_id += 1;
        let properties = pattern.properties.clone().with(PropertyField::EdgeId, edge_id);
        self.relationships.insert(
            id,
            StoredRelationship { start, end, rel_type: pattern.rel_type, properties },
        );
        self.adjacency.entry(start).or_default().push(id);
        if start != end {
            self.adjacency.entry(end).or_default().push(id);
        }
        stats.relationships_created += 1;
    }

    fn delete_relationship(&mut self, id: RelId) -> bool {
        let Some(rel) = self.relationships.remove(&id) else {
            return false;
        };
        for endpoint in [rel.start, rel.end] {
            if let Some(rels) = self.adjacency.get_mut(&endpoint) {
                rels.retain(|rid| *rid != id);
            }
        }
        true
    }

    fn detach_delete(&mut self, id: StoreId, stats: &mut ExecutionStats) {
        let incident = self.adjacency.remove(&id).unwrap_or_default();
        for rid in incident {
            if self.delete_relationship(rid) {
                stats.relationships_deleted += 1;
            }
        }
        if let Some(node) = self.nodes.remove(&id) {
            for label in node.labels.iter() {
                if let Some(ids) = self.label_index.get_mut(label) {
                    ids.remove(&id);
                }
            }
            let value = node.get_str(node.key).unwrap_or_default().to_owned();
            if let Some(ids) = self.key_index.get_mut(&(node.key, value)) {
                ids.retain(|nid| *nid != id);
            }
            stats.nodes_deleted += 1;
        }
    }

    // ========================================================================
    // Guards
    // ========================================================================

    fn holds(&self, guard: &Guard) -> bool {
        match guard {
            Guard::Always => true,
            Guard::AxiomDetached(axiom) => match self.resolve(axiom) {
                None => true,
                Some(ax) => !self.outgoing(ax, EdgeLabel::AxiomOf).any(|r| {
                    self.nodes.get(&r.end).is_some_and(|n| n.has_label("OntologyDocument"))
                }),
            },
            Guard::SignatureOrphaned { entity, document } => {
                match (self.resolve(entity), self.resolve(document)) {
                    (Some(entity), Some(document)) => !self.document_reaches(document, entity),
                    _ => true,
                }
            }
        }
    }

    /// Whether any axiom of `document` reaches `target` over structural edges.
    fn document_reaches(&self, document: StoreId, target: StoreId) -> bool {
        let mut seen: HashSet<StoreId> = HashSet::new();
        let mut queue: VecDeque<StoreId> = self
            .incoming(document, EdgeLabel::AxiomOf)
            .map(|r| r.start)
            .filter(|id| self.nodes.get(id).is_some_and(|n| n.has_label("Axiom")))
            .collect();
        while let Some(node) = queue.pop_front() {
            if !seen.insert(node) {
                continue;
            }
            for rel in self.incident(node).filter(|r| r.start == node && is_structural_edge(r.rel_type)) {
                if rel.end == target {
                    return true;
                }
                queue.push_back(rel.end);
            }
        }
        false
    }

    // ========================================================================
    // Statements
    // ========================================================================

    fn apply(&mut self, statement: &Statement) -> Result<ExecutionStats> {
        let mut stats = ExecutionStats::default();
        match statement {
            Statement::Merge(clauses) => {
                let mut env: HashMap<&str, StoreId> = HashMap::new();
                for clause in clauses {
                    match clause {
                        Clause::MergeNode(pattern) => {
                            let id = self.merge_node(pattern, &mut stats);
                            env.insert(pattern.var.as_str(), id);
                        }
                        Clause::MergeRelationship(pattern) => {
                            let bound = |var: &str| {
                                env.get(var).copied().ok_or_else(|| {
                                    Error::ExecutionError(format!("unbound variable `{var}`"))
                                })
                            };
                            let (start, end) = (bound(&pattern.start)?, bound(&pattern.end)?);
                            self.merge_relationship(start, end, pattern, &mut stats);
                        }
                    }
                }
            }
            Statement::DeleteRelationship { rel, guard } => {
                let matched = self.match_relationships(rel);
                if !matched.is_empty() && self.holds(guard) {
                    for id in matched {
                        if self.delete_relationship(id) {
                            stats.relationships_deleted += 1;
                        }
                    }
                }
            }
            Statement::DetachDeleteNode { node, guard } => {
                if let Some(id) = self.resolve(node) {
                    if self.holds(guard) {
                        self.detach_delete(id, &mut stats);
                    }
                }
            }
        }
        Ok(stats)
    }

    fn match_relationships(&self, rel: &RelRef) -> Vec<RelId> {
        let (Some(start), Some(end)) = (self.resolve(&rel.start), self.resolve(&rel.end)) else {
            return Vec::new();
        };
        self.adjacency
            .get(&start)
            .into_iter()
            .flatten()
            .copied()
            .filter(|rid| {
                self.relationships.get(rid).is_some_and(|r| {
                    r.start == start
                        && r.end == end
                        && r.rel_type == rel.rel_type
                        && rel.edge_id.as_ref().is_none_or(|id| r.edge_id() == Some(id.as_str()))
                })
            })
            .collect()
    }
}

// ============================================================================
// StatementSink impl
// ============================================================================

#[async_trait]
impl StatementSink for MemoryBackend {
    async fn run(&self, statement: &Statement) -> Result<ExecutionStats> {
        let stats = self.inner.write().apply(statement)?;
        trace!(kind = statement.kind(), ?stats, "memory backend applied statement");
        Ok(stats)
    }
}
