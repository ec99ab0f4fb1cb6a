//! # Statement Sinks
//!
//! The boundary to the graph store. The core hands a sink an ordered list
//! of statements; the sink runs them to completion or reports which one
//! failed. No retries: every statement is idempotent, so the caller can
//! re-run a whole batch.
//!
//! ## Implementations
//!
//! | Sink | Module | Description |
//! |------|--------|-------------|
//! | `MemoryBackend` | `memory` | In-memory property graph for testing/embedding |
//! | `CypherScriptSink` | `script` | Writes a `;`-terminated Cypher script |

pub mod memory;
pub mod script;

use std::ops::AddAssign;

use async_trait::async_trait;
use serde::Serialize;
use tracing::{trace, warn};

use crate::cypher::Statement;
use crate::{Error, Result};

pub use memory::{MemoryBackend, StoreId, StoredNode, StoredRelationship};
pub use script::CypherScriptSink;

// ============================================================================
// Execution statistics
// ============================================================================

/// What a statement (or batch) changed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ExecutionStats {
    pub nodes_created: usize,
    pub nodes_deleted: usize,
    pub relationships_created: usize,
    pub relationships_deleted: usize,
}

impl ExecutionStats {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

impl AddAssign for ExecutionStats {
    fn add_assign(&mut self, other: Self) {
        self.nodes_created += other.nodes_created;
        self.nodes_deleted += other.nodes_deleted;
        self.relationships_created += other.relationships_created;
        self.relationships_deleted += other.relationships_deleted;
    }
}

// ============================================================================
// The Sink Trait
// ============================================================================

#[async_trait]
pub trait StatementSink: Send + Sync {
    /// Runs one statement.
    async fn run(&self, statement: &Statement) -> Result<ExecutionStats>;

    /// Runs statements in order, stopping at the first failure.
    async fn run_all(&self, statements: &[Statement]) -> Result<ExecutionStats> {
        let mut total = ExecutionStats::default();
        for (index, statement) in statements.iter().enumerate() {
            match self.run(statement).await {
                Ok(stats) => {
                    trace!(index, kind = statement.kind(), ?stats, "statement applied");
                    total += stats;
                }
                Err(e) => {
                    warn!(index, kind = statement.kind(), error = %e, "statement failed");
                    return Err(Error::StatementFailed { index, message: e.to_string() });
                }
            }
        }
        Ok(total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cypher::{Guard, NodeRef};
    use crate::model::PropertyField;
    use parking_lot::Mutex;

    /// Fails on the statement at `fail_at`, records the rest.
    struct Flaky {
        fail_at: usize,
        seen: Mutex<usize>,
    }

    #[async_trait]
    impl StatementSink for Flaky {
        async fn run(&self, _statement: &Statement) -> Result<ExecutionStats> {
            let mut seen = self.seen.lock();
            let index = *seen;
            *seen += 1;
            if index == self.fail_at {
                return Err(Error::ExecutionError("boom".into()));
            }
            Ok(ExecutionStats { nodes_deleted: 1, ..Default::default() })
        }
    }

    fn stmt() -> Statement {
        Statement::DetachDeleteNode {
            node: NodeRef { label: "IRI", key: PropertyField::Digest, value: "x".into() },
            guard: Guard::Always,
        }
    }

    #[tokio::test]
    async fn test_run_all_stops_at_first_failure() {
        let sink = Flaky { fail_at: 1, seen: Mutex::new(0) };
        let err = sink.run_all(&[stmt(), stmt(), stmt()]).await.unwrap_err();
        match err {
            Error::StatementFailed { index, message } => {
                assert_eq!(index, 1);
                assert!(message.contains("boom"));
            }
            other => panic!("unexpected error {other:?}"),
        }
        assert_eq!(*sink.seen.lock(), 2);
    }

    #[tokio::test]
    async fn test_run_all_sums_stats() {
        let sink = Flaky { fail_at: usize::MAX, seen: Mutex::new(0) };
        let stats = sink.run_all(&[stmt(), stmt()]).await.unwrap();
        assert_eq!(stats.nodes_deleted, 2);
        assert!(!stats.is_empty());
    }
}
