//! Create path: one idempotent MERGE batch per translation.

use tracing::debug;

use super::ast::{Clause, NodePattern, RelPattern, Statement};
use super::vars::VariableAllocator;
use crate::identity::edge_id;
use crate::model::{Edge, EdgeLabel, Node, Properties, Translation};
use crate::translate::{Translator, WriteContext};
use crate::{Error, Result};

/// Builds the statements that write a translation into one document.
///
/// Batch layout: the context chain, the main node, then for every edge in
/// depth-first order its start node, end node and the edge itself (nodes
/// bound earlier in the batch are referenced by variable). Finally every
/// entity joins the document signature and an axiom main node is linked
/// into the document.
pub struct CreateQueryBuilder<'a> {
    ctx: &'a WriteContext,
    translation: Option<&'a Translation>,
    vars: VariableAllocator,
    clauses: Vec<Clause>,
}

impl<'a> CreateQueryBuilder<'a> {
    pub fn new(ctx: &'a WriteContext) -> Self {
        Self { ctx, translation: None, vars: VariableAllocator::new(), clauses: Vec::new() }
    }

    pub fn translation(mut self, translation: &'a Translation) -> Self {
        self.translation = Some(translation);
        self
    }

    pub fn build(mut self) -> Result<Vec<Statement>> {
        let translation = self
            .translation
            .ok_or_else(|| Error::InvalidArgument("create needs a translation".into()))?;

        let context = Translator::default().translate_context(self.ctx)?;
        self.node(context.main_node());
        for edge in context.edges() {
            self.edge(edge);
        }

        let main = translation.main_node();
        self.node(main);
        for edge in translation.edges() {
            self.edge(edge);
        }

        let document = self.ctx.document_node();
        let doc_var = self.node(&document);
        for node in translation.nodes().into_iter().filter(|n| n.has_label("Entity")) {
            self.link(node, &document, &doc_var, EdgeLabel::InOntologySignature);
        }
        if main.has_label("Axiom") {
            self.link(main, &document, &doc_var, EdgeLabel::AxiomOf);
        }

        debug!(context = %self.ctx, clauses = self.clauses.len(), "built create batch");
        Ok(vec![Statement::Merge(self.clauses)])
    }

    /// Binds `node` if it is not bound yet and returns its variable.
    fn node(&mut self, node: &Node) -> String {
        let (var, fresh) = self.vars.node(node.id());
        if fresh {
            self.clauses.push(Clause::MergeNode(NodePattern::of(var.clone(), node)));
        }
        var
    }

    fn edge(&mut self, edge: &Edge) {
        let start = self.node(edge.start());
        let end = self.node(edge.end());
        let var = self.vars.relationship();
        self.clauses.push(Clause::MergeRelationship(RelPattern {
            var,
            start,
            end,
            rel_type: edge.label(),
            edge_id: edge.id().clone(),
            properties: edge.properties().clone(),
        }));
    }

    fn link(&mut self, node: &Node, document: &Node, doc_var: &str, label: EdgeLabel) {
        let start = self.node(node);
        let var = self.vars.relationship();
        self.clauses.push(Clause::MergeRelationship(RelPattern {
            var,
            start,
            end: doc_var.to_owned(),
            rel_type: label,
            edge_id: edge_id(node.id(), document.id(), label, 0),
            properties: Properties::new(),
        }));
    }
}
