//! The write context: which project, branch and ontology document a batch
//! of statements mutates.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{TranslationBuilder, Translator};
use crate::identity::context_node_id;
use crate::model::{EdgeLabel, Node, NodeId, NodeLabels, Properties, PropertyField, Translation};
use crate::owl::ConstructKind;
use crate::{Error, Result};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WriteContext {
    pub project_id: String,
    pub branch_id: String,
    pub document_id: String,
}

impl WriteContext {
    pub fn new(
        project_id: impl Into<String>,
        branch_id: impl Into<String>,
        document_id: impl Into<String>,
    ) -> Self {
        Self {
            project_id: project_id.into(),
            branch_id: branch_id.into(),
            document_id: document_id.into(),
        }
    }

    /// Rejects empty identifiers; they would all collapse onto one node.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("project id", &self.project_id),
            ("branch id", &self.branch_id),
            ("document id", &self.document_id),
        ] {
            if value.is_empty() {
                return Err(Error::InvalidArgument(format!("empty {name}")));
            }
        }
        Ok(())
    }

    /// Projects are the root of every context and keyed by their own id.
    pub fn project_node(&self) -> Node {
        let id = NodeId::keyed(PropertyField::ProjectId, self.project_id.as_str());
        Node::new(id, NodeLabels::for_kind(ConstructKind::Project), Properties::new())
    }

    pub fn branch_node(&self) -> Node {
        let id = context_node_id(
            ConstructKind::Branch.name(),
            &[self.project_id.as_str(), self.branch_id.as_str()],
        );
        let properties = Properties::new()
            .with(PropertyField::ProjectId, self.project_id.as_str())
            .with(PropertyField::BranchId, self.branch_id.as_str());
        Node::new(id, NodeLabels::for_kind(ConstructKind::Branch), properties)
    }

    pub fn document_node(&self) -> Node {
        let id = context_node_id(
            ConstructKind::OntologyDocument.name(),
            &[self.project_id.as_str(), self.branch_id.as_str(), self.document_id.as_str()],
        );
        let properties = Properties::new()
            .with(PropertyField::ProjectId, self.project_id.as_str())
            .with(PropertyField::BranchId, self.branch_id.as_str())
            .with(PropertyField::OntologyDocumentId, self.document_id.as_str());
        Node::new(id, NodeLabels::for_kind(ConstructKind::OntologyDocument), properties)
    }
}

impl fmt::Display for WriteContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.project_id, self.branch_id, self.document_id)
    }
}

impl Translator {
    /// `(Project)-[:branch]->(Branch)-[:ontologyDocument]->(OntologyDocument)`.
    pub fn translate_context(&mut self, ctx: &WriteContext) -> Result<Translation> {
        ctx.validate()?;
        let document = Translation::leaf(ctx.document_node());

        let mut branch = TranslationBuilder::new(ctx.branch_node());
        branch.child(EdgeLabel::OntologyDocument, document);

        let mut project = TranslationBuilder::new(ctx.project_node());
        project.child(EdgeLabel::Branch, branch.build());
        Ok(project.build())
    }
}
