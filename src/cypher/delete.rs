//! Delete path: remove an axiom from one document without disturbing
//! anything another axiom or document still depends on.
//!
//! Statements, in order:
//! 1. unlink the axiom from the document (`axiomOf`);
//! 2. if no document links the axiom any more: its augmented edges, its
//!    per-occurrence sub-structure, then the axiom node itself;
//! 3. for every entity it mentions: unlink the entity from the document
//!    signature unless another axiom of the document still reaches it.
//!
//! Digest-identified leaves (entities, IRIs, literals, chains, facets) are
//! never deleted, only unlinked.

use tracing::debug;

use super::ast::{Guard, NodeRef, RelRef, Statement};
use crate::identity::{IdFormat, is_augmented_edge};
use crate::model::{EdgeLabel, Translation};
use crate::translate::WriteContext;
use crate::{Error, Result};

pub struct DeleteQueryBuilder<'a> {
    ctx: &'a WriteContext,
    translation: Option<&'a Translation>,
}

impl<'a> DeleteQueryBuilder<'a> {
    pub fn new(ctx: &'a WriteContext) -> Self {
        Self { ctx, translation: None }
    }

    pub fn translation(mut self, translation: &'a Translation) -> Self {
        self.translation = Some(translation);
        self
    }

    pub fn build(self) -> Result<Vec<Statement>> {
        let translation = self
            .translation
            .ok_or_else(|| Error::InvalidArgument("delete needs a translation".into()))?;
        self.ctx.validate()?;

        let document = NodeRef::of(&self.ctx.document_node());
        let main = translation.main_node();
        let nodes = translation.nodes();
        let mut stmts = Vec::new();

        if main.has_label("Axiom") {
            let axiom = NodeRef::of(main);
            stmts.push(Statement::DeleteRelationship {
                rel: RelRef {
                    start: axiom.clone(),
                    rel_type: EdgeLabel::AxiomOf,
                    edge_id: None,
                    end: document.clone(),
                },
                guard: Guard::Always,
            });

            let detached = Guard::AxiomDetached(axiom.clone());
            for edge in translation.edges().filter(|e| is_augmented_edge(e.label())) {
                stmts.push(Statement::DeleteRelationship {
                    rel: RelRef {
                        start: NodeRef::of(edge.start()),
                        rel_type: edge.label(),
                        edge_id: Some(edge.id().clone()),
                        end: NodeRef::of(edge.end()),
                    },
                    guard: detached.clone(),
                });
            }
            for node in nodes.iter().filter(|n| n.id().format() == IdFormat::PerOccurrence) {
                stmts.push(Statement::DetachDeleteNode {
                    node: NodeRef::of(node),
                    guard: detached.clone(),
                });
            }
            stmts.push(Statement::DetachDeleteNode { node: axiom, guard: detached });
        }

        for entity in nodes.iter().filter(|n| n.has_label("Entity")) {
            let entity = NodeRef::of(entity);
            stmts.push(Statement::DeleteRelationship {
                rel: RelRef {
                    start: entity.clone(),
                    rel_type: EdgeLabel::InOntologySignature,
                    edge_id: None,
                    end: document.clone(),
                },
                guard: Guard::SignatureOrphaned { entity, document: document.clone() },
            });
        }

        debug!(context = %self.ctx, statements = stmts.len(), "built delete statements");
        Ok(stmts)
    }
}
