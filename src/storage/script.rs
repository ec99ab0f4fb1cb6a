//! Cypher script export.
//!
//! Serializes statements as a `;`-terminated script that can be piped into
//! `cypher-shell` or pasted into Neo4j Browser:
//!
//! ```text
//! translation → CreateQueryBuilder → CypherScriptSink → file.cypher
//!   → cypher-shell -f file.cypher
//! ```
//!
//! Nothing is executed, so the reported stats are always empty.

use std::io::Write;

use async_trait::async_trait;
use parking_lot::Mutex;

use super::{ExecutionStats, StatementSink};
use crate::cypher::Statement;
use crate::Result;

pub struct CypherScriptSink<W> {
    inner: Mutex<ScriptWriter<W>>,
}

struct ScriptWriter<W> {
    writer: W,
    written: usize,
}

impl<W: Write + Send> CypherScriptSink<W> {
    pub fn new(writer: W) -> Self {
        Self { inner: Mutex::new(ScriptWriter { writer, written: 0 }) }
    }

    /// Writes a `//` comment line, e.g. a header naming the write context.
    pub fn comment(&self, text: &str) -> Result<()> {
        let mut inner = self.inner.lock();
        for line in text.lines() {
            writeln!(inner.writer, "// {line}")?;
        }
        Ok(())
    }

    pub fn statements_written(&self) -> usize {
        self.inner.lock().written
    }

    pub fn into_inner(self) -> W {
        self.inner.into_inner().writer
    }
}

#[async_trait]
impl<W: Write + Send> StatementSink for CypherScriptSink<W> {
    async fn run(&self, statement: &Statement) -> Result<ExecutionStats> {
        let mut inner = self.inner.lock();
        writeln!(inner.writer, "{statement};")?;
        writeln!(inner.writer)?;
        inner.written += 1;
        Ok(ExecutionStats::default())
    }
}
