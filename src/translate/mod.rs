//! # Construct Translators
//!
//! Turns OWL constructs into [`Translation`]s. One sub-module per construct
//! family, each a closed `match` over its variant enum.
//!
//! A [`Translator`] is good for one top-level call: it owns the identity
//! session (occurrence counter and first-encounter set), so two concurrent
//! translations must use two translators.
//!
//! ```rust
//! use owl2neo4j::owl::{Axiom, ClassExpression};
//! use owl2neo4j::translate::Translator;
//!
//! # fn main() -> owl2neo4j::Result<()> {
//! let axiom = Axiom::SubClassOf {
//!     sub: ClassExpression::class("http://ex.org/A"),
//!     sup: ClassExpression::class("http://ex.org/B"),
//! };
//! let t = Translator::default().translate_axiom(&axiom.into())?;
//! assert!(t.main_node().has_label("SubClassOf"));
//! # Ok(())
//! # }
//! ```

mod annotation;
mod axiom;
mod class_expression;
mod context;
mod data;
mod entity;
mod individual;
mod property;

pub use context::WriteContext;

use hashbrown::HashMap;

use crate::config::TranslatorConfig;
use crate::identity::{Canonicalize, IdentitySession, augmented_edge_id, edge_id};
use crate::model::{Edge, EdgeId, EdgeLabel, Node, NodeId, NodeLabels, Properties, PropertyField, Translation};
use crate::owl::ConstructKind;
use crate::Result;

// ============================================================================
// Translator
// ============================================================================

#[derive(Debug, Default)]
pub struct Translator {
    config: TranslatorConfig,
    session: IdentitySession,
}

impl Translator {
    pub fn new(config: TranslatorConfig) -> Self {
        Self { config, session: IdentitySession::new() }
    }

    pub fn config(&self) -> &TranslatorConfig {
        &self.config
    }

    /// Assigns the node id of a construct and opens its translation.
    ///
    /// A shared node already emitted in this session comes back as
    /// [`Visit::Seen`]: a node-only translation the caller returns as is.
    fn visit<T: Canonicalize + ?Sized>(
        &mut self,
        kind: ConstructKind,
        construct: &T,
        properties: Properties,
    ) -> Result<Visit> {
        let id = self.session.node_id(kind, construct)?;
        let node = Node::new(id, NodeLabels::for_kind(kind), properties);
        if self.session.first_encounter(kind, node.id()) {
            Ok(Visit::Fresh(TranslationBuilder::new(node)))
        } else {
            Ok(Visit::Seen(Translation::leaf(node)))
        }
    }
}

pub(crate) enum Visit {
    Fresh(TranslationBuilder),
    Seen(Translation),
}

/// Unwraps a [`Visit`], returning early with the leaf translation when the
/// node was already emitted.
macro_rules! fresh {
    ($visit:expr) => {
        match $visit {
            $crate::translate::Visit::Fresh(builder) => builder,
            $crate::translate::Visit::Seen(leaf) => return Ok(leaf),
        }
    };
}
pub(crate) use fresh;

// ============================================================================
// TranslationBuilder
// ============================================================================

/// Accumulates one translation: its main node, the edges leaving it, and the
/// child translations those edges point into.
pub(crate) struct TranslationBuilder {
    main: Node,
    edges: Vec<Edge>,
    nested: Vec<Translation>,
    /// Parallel edges seen so far per `(start, end, label)`.
    ordinals: HashMap<(NodeId, NodeId, EdgeLabel), usize>,
}

impl TranslationBuilder {
    pub(crate) fn new(main: Node) -> Self {
        Self { main, edges: Vec::new(), nested: Vec::new(), ordinals: HashMap::new() }
    }

    fn next_ordinal(&mut self, start: &NodeId, end: &NodeId, label: EdgeLabel) -> usize {
        let slot = self.ordinals.entry((start.clone(), end.clone(), label)).or_insert(0);
        let ordinal = *slot;
        *slot += 1;
        ordinal
    }

    /// Next ordinal and id of an edge leaving the main node.
    fn outgoing_edge_id(&mut self, end: &NodeId, label: EdgeLabel) -> EdgeId {
        let start = self.main.id().clone();
        let ordinal = self.next_ordinal(&start, end, label);
        edge_id(&start, end, label, ordinal)
    }

    /// Links the main node to a child translation. Returns the child's main
    /// node.
    pub(crate) fn child(&mut self, label: EdgeLabel, child: Translation) -> Node {
        self.child_with(label, child, Properties::new())
    }

    pub(crate) fn child_with(
        &mut self,
        label: EdgeLabel,
        child: Translation,
        properties: Properties,
    ) -> Node {
        let end = child.main_node().clone();
        let id = self.outgoing_edge_id(end.id(), label);
        self.edges.push(Edge::new(id, self.main.clone(), end.clone(), label, properties));
        self.nested.push(child);
        end
    }

    /// Ordered operand: the edge carries its `pos`.
    pub(crate) fn positional(&mut self, label: EdgeLabel, pos: usize, child: Translation) -> Node {
        self.child_with(label, child, Properties::new().with(PropertyField::Pos, pos))
    }

    /// Edge from the main node to a node whose translation is already part
    /// of this builder.
    pub(crate) fn link(&mut self, label: EdgeLabel, end: &Node) {
        let id = self.outgoing_edge_id(end.id(), label);
        self.edges.push(Edge::new(id, self.main.clone(), end.clone(), label, Properties::new()));
    }

    /// Derived shortcut between two participants of the axiom this builder
    /// encodes.
    pub(crate) fn shortcut(&mut self, start: &Node, end: &Node, label: EdgeLabel) {
        let ordinal = self.next_ordinal(start.id(), end.id(), label);
        let id = augmented_edge_id(start.id(), end.id(), label, self.main.id(), ordinal);
        let properties = Properties::new().with(PropertyField::Augmented, true);
        self.edges.push(Edge::new(id, start.clone(), end.clone(), label, properties));
    }

    pub(crate) fn build(self) -> Translation {
        Translation::new(self.main, self.edges, self.nested)
    }
}

/// Nodes that name something: entities and bare IRIs.
pub(crate) fn is_named(node: &Node) -> bool {
    node.has_label("Entity") || node.has_label("IRI")
}
