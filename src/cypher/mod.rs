//! # Cypher Write Path
//!
//! Statement AST, Neo4j rendering and the two query builders.
//! Pure functions of a translation and a write context: no I/O, no state
//! beyond one builder invocation.

pub mod ast;
pub mod create;
pub mod delete;
pub mod vars;

pub use ast::{Clause, Guard, NodePattern, NodeRef, RelPattern, RelRef, Statement};
pub use create::CreateQueryBuilder;
pub use delete::DeleteQueryBuilder;
pub use vars::VariableAllocator;
