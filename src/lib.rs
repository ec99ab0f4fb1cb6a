//! # owl2neo4j — OWL 2 Ontologies as Labelled Property Graphs
//!
//! A canonical graph encoding of OWL 2 ontologies plus the idempotent Cypher
//! that keeps a Neo4j store in sync with ontology changes.
//!
//! ## Design Principles
//!
//! 1. **Content-addressed identity**: shared constructs (entities, IRIs,
//!    literals, axioms) get a digest id and collapse to one node; anonymous
//!    composites get a per-occurrence id and never merge across axioms
//! 2. **Translators own nothing**: OWL construct → [`Translation`] is a pure
//!    function of the construct and a per-call identity session
//! 3. **Statements are data**: query builders produce a [`cypher::Statement`]
//!    AST that renders to Cypher or runs on the in-memory backend
//! 4. **Sink-agnostic core**: [`StatementSink`] is the only boundary to storage
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use owl2neo4j::owl::{Axiom, ClassExpression};
//! use owl2neo4j::{OntologyGraph, WriteContext};
//!
//! # async fn example() -> owl2neo4j::Result<()> {
//! let graph = OntologyGraph::open_memory();
//! let ctx = WriteContext::new("project", "main", "pizza.owl");
//!
//! let axiom = Axiom::SubClassOf {
//!     sub: ClassExpression::class("http://ex.org/Margherita"),
//!     sup: ClassExpression::class("http://ex.org/Pizza"),
//! };
//! graph.add_axiom(&ctx, &axiom.clone().into()).await?;
//! assert_eq!(graph.sink().axiom_count(&ctx), 1);
//!
//! graph.remove_axiom(&ctx, &axiom.into()).await?;
//! assert!(graph.sink().signature(&ctx).is_empty());
//! # Ok(())
//! # }
//! ```
//!
//! ## Sinks
//!
//! | Sink | Description |
//! |------|-------------|
//! | [`MemoryBackend`] | In-memory graph for testing/embedding |
//! | [`CypherScriptSink`] | `;`-terminated script for `cypher-shell` |

// ============================================================================
// Modules
// ============================================================================

pub mod config;
pub mod cypher;
pub mod identity;
pub mod model;
pub mod owl;
pub mod storage;
pub mod translate;

// ============================================================================
// Re-exports: Model (the DTOs)
// ============================================================================

pub use model::{
    Edge, EdgeId, EdgeLabel, Node, NodeId, NodeLabels, Properties, PropertyField, Translation,
    Value,
};

// ============================================================================
// Re-exports: Translation and synthesis
// ============================================================================

pub use config::TranslatorConfig;
pub use cypher::{CreateQueryBuilder, DeleteQueryBuilder, Statement};
pub use translate::{Translator, WriteContext};

// ============================================================================
// Re-exports: Storage
// ============================================================================

pub use storage::{CypherScriptSink, ExecutionStats, MemoryBackend, StatementSink};

use owl::{AnnotatedAxiom, OntologyChange};
use tracing::debug;

// ============================================================================
// Top-level OntologyGraph handle
// ============================================================================

/// The primary entry point. An `OntologyGraph` wraps a statement sink and
/// turns axiom additions and removals into statement batches.
///
/// Every call translates with a fresh [`Translator`], so calls never share
/// identity-session state.
pub struct OntologyGraph<S: StatementSink> {
    sink: S,
    config: TranslatorConfig,
}

impl<S: StatementSink> OntologyGraph<S> {
    pub fn with_sink(sink: S) -> Self {
        Self { sink, config: TranslatorConfig::default() }
    }

    pub fn with_config(mut self, config: TranslatorConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &TranslatorConfig {
        &self.config
    }

    /// Access the underlying sink (for inspection).
    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Translates an axiom without writing anything.
    pub fn translate(&self, axiom: &AnnotatedAxiom) -> Result<Translation> {
        Translator::new(self.config).translate_axiom(axiom)
    }

    /// Writes an axiom into the document named by `ctx`.
    pub async fn add_axiom(&self, ctx: &WriteContext, axiom: &AnnotatedAxiom) -> Result<ExecutionStats> {
        let translation = self.translate(axiom)?;
        let statements = CreateQueryBuilder::new(ctx).translation(&translation).build()?;
        let stats = self.sink.run_all(&statements).await?;
        debug!(context = %ctx, axiom = %translation.main_node().id(), ?stats, "added axiom");
        Ok(stats)
    }

    /// Removes an axiom from the document named by `ctx`.
    pub async fn remove_axiom(&self, ctx: &WriteContext, axiom: &AnnotatedAxiom) -> Result<ExecutionStats> {
        let translation = self.translate(axiom)?;
        let statements = DeleteQueryBuilder::new(ctx).translation(&translation).build()?;
        let stats = self.sink.run_all(&statements).await?;
        debug!(context = %ctx, axiom = %translation.main_node().id(), ?stats, "removed axiom");
        Ok(stats)
    }

    /// Applies a change list in order, stopping at the first failure.
    pub async fn apply_changes(&self, ctx: &WriteContext, changes: &[OntologyChange]) -> Result<ExecutionStats> {
        let mut total = ExecutionStats::default();
        for change in changes {
            total += match change {
                OntologyChange::AddAxiom(axiom) => self.add_axiom(ctx, axiom).await?,
                OntologyChange::RemoveAxiom(axiom) => self.remove_axiom(ctx, axiom).await?,
            };
        }
        debug!(context = %ctx, changes = changes.len(), ?total, "applied change list");
        Ok(total)
    }
}

/// In-memory graph for testing and embedding.
impl OntologyGraph<MemoryBackend> {
    pub fn open_memory() -> Self {
        Self::with_sink(MemoryBackend::new())
    }
}

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Unsupported construct: {0}")]
    UnsupportedConstruct(String),

    #[error("Canonicalization error: {0}")]
    Canonicalization(String),

    #[error("Statement {index} failed: {message}")]
    StatementFailed { index: usize, message: String },

    #[error("Execution error: {0}")]
    ExecutionError(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
