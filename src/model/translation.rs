//! Translation — one construct's graph encoding: a main node, the edges
//! leaving it, and the nested translations of its children.

use std::collections::HashSet;

use serde::Serialize;

use super::{Edge, Node, NodeId};
use crate::{Error, Result};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Translation {
    main_node: Node,
    edges: Vec<Edge>,
    nested: Vec<Translation>,
}

impl Translation {
    pub fn new(main_node: Node, edges: Vec<Edge>, nested: Vec<Translation>) -> Self {
        Self { main_node, edges, nested }
    }

    /// Checked constructor for callers holding possibly-absent parts.
    pub fn create(
        main_node: Option<Node>,
        edges: Option<Vec<Edge>>,
        nested: Option<Vec<Translation>>,
    ) -> Result<Self> {
        let main_node = main_node.ok_or_else(|| Error::InvalidArgument("main node".into()))?;
        let edges = edges.ok_or_else(|| Error::InvalidArgument("edges".into()))?;
        let nested = nested.ok_or_else(|| Error::InvalidArgument("nested translations".into()))?;
        Ok(Self::new(main_node, edges, nested))
    }

    /// A translation consisting of the node alone.
    pub fn leaf(main_node: Node) -> Self {
        Self::new(main_node, Vec::new(), Vec::new())
    }

    pub fn main_node(&self) -> &Node {
        &self.main_node
    }

    pub fn direct_edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn nested(&self) -> &[Translation] {
        &self.nested
    }

    /// Depth-first edge stream: direct edges first, then each nested
    /// translation in list order.
    pub fn edges(&self) -> Box<dyn Iterator<Item = &Edge> + '_> {
        Box::new(self.edges.iter().chain(self.nested.iter().flat_map(|t| t.edges())))
    }

    /// Every translation of the sub-tree, this one first.
    pub fn closure(&self) -> Vec<&Translation> {
        let mut out = Vec::new();
        self.collect_closure(&mut out);
        out
    }

    fn collect_closure<'a>(&'a self, out: &mut Vec<&'a Translation>) {
        out.push(self);
        for t in &self.nested {
            t.collect_closure(out);
        }
    }

    /// Distinct nodes in first-seen order (main nodes, then edge endpoints).
    pub fn nodes(&self) -> Vec<&Node> {
        let mut seen: HashSet<&NodeId> = HashSet::new();
        let mut out = Vec::new();
        for t in self.closure() {
            let candidates = std::iter::once(&t.main_node)
                .chain(t.edges.iter().flat_map(|e| [e.start(), e.end()]));
            for node in candidates {
                if seen.insert(node.id()) {
                    out.push(node);
                }
            }
        }
        out
    }

    pub fn edge_count(&self) -> usize {
        self.edges().count()
    }
}
