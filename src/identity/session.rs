//! Per-invocation identity state.
//!
//! One session lives for one top-level translation call. It assigns ids,
//! remembers which shared nodes were already emitted, and counts
//! occurrences inside the current axiom scope.

use hashbrown::HashSet;

use super::canonical::{Canonicalize, canonical_bytes};
use super::digest::{Digest, compute_digest, digest_node_id, occurrence_node_id};
use super::policy::{IdFormat, id_format_for, is_single_encounter};
use crate::Result;
use crate::model::NodeId;
use crate::owl::ConstructKind;

#[derive(Debug)]
pub struct IdentitySession {
    scope: Digest,
    occurrences: u64,
    encountered: HashSet<NodeId>,
}

impl Default for IdentitySession {
    fn default() -> Self {
        Self::new()
    }
}

impl IdentitySession {
    pub fn new() -> Self {
        Self { scope: Digest::ZERO, occurrences: 0, encountered: HashSet::new() }
    }

    /// Enters the scope of one axiom: per-occurrence ids are derived from
    /// `scope` and a counter that restarts here.
    pub fn begin_scope(&mut self, scope: Digest) {
        self.scope = scope;
        self.occurrences = 0;
    }

    pub fn scope(&self) -> Digest {
        self.scope
    }

    /// Digest of a construct's canonical bytes.
    pub fn digest_of<T: Canonicalize + ?Sized>(&self, construct: &T) -> Result<Digest> {
        Ok(compute_digest(&canonical_bytes(construct)?))
    }

    /// Assigns the id of a construct according to the policy of its kind.
    pub fn node_id<T: Canonicalize + ?Sized>(
        &mut self,
        kind: ConstructKind,
        construct: &T,
    ) -> Result<NodeId> {
        let bytes = canonical_bytes(construct)?;
        Ok(match id_format_for(kind) {
            IdFormat::Digest | IdFormat::Keyed => digest_node_id(&bytes),
            IdFormat::PerOccurrence => {
                self.occurrences += 1;
                occurrence_node_id(&bytes, &self.scope, self.occurrences)
            }
        })
    }

    /// Records an encounter. Returns `false` when a shared node with this id
    /// was already emitted in this session and may be referenced as a leaf.
    pub fn first_encounter(&mut self, kind: ConstructKind, id: &NodeId) -> bool {
        if is_single_encounter(kind) || id.format() != IdFormat::Digest {
            return true;
        }
        self.encountered.insert(id.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::owl::{ClassExpression, ClassExpressionType, EntityType};

    fn some_b() -> ClassExpression {
        ClassExpression::some(
            crate::owl::ObjectPropertyExpression::named("http://ex.org/p"),
            ClassExpression::class("http://ex.org/B"),
        )
    }

    const SOME: ConstructKind = ConstructKind::ClassExpression(ClassExpressionType::ObjectSomeValuesFrom);
    const CLASS: ConstructKind = ConstructKind::Entity(EntityType::Class);

    #[test]
    fn test_digest_ids_ignore_scope() {
        let a = ClassExpression::class("http://ex.org/A");
        let mut s = IdentitySession::new();
        let first = s.node_id(CLASS, &a).unwrap();
        s.begin_scope(compute_digest(b"other"));
        assert_eq!(first, s.node_id(CLASS, &a).unwrap());
        assert_eq!(first.format(), IdFormat::Digest);
    }

    #[test]
    fn test_occurrences_are_distinct_within_scope() {
        let mut s = IdentitySession::new();
        s.begin_scope(compute_digest(b"axiom"));
        let one = s.node_id(SOME, &some_b()).unwrap();
        let two = s.node_id(SOME, &some_b()).unwrap();
        assert_ne!(one, two);
        assert_eq!(one.format(), IdFormat::PerOccurrence);
    }

    #[test]
    fn test_occurrences_repeat_after_rescoping() {
        let scope = compute_digest(b"axiom");
        let mut s = IdentitySession::new();
        s.begin_scope(scope);
        let first = s.node_id(SOME, &some_b()).unwrap();
        s.begin_scope(scope);
        assert_eq!(first, s.node_id(SOME, &some_b()).unwrap());
    }

    #[test]
    fn test_first_encounter_only_tracks_shared_nodes() {
        let a = ClassExpression::class("http://ex.org/A");
        let mut s = IdentitySession::new();
        let id = s.node_id(CLASS, &a).unwrap();
        assert!(s.first_encounter(CLASS, &id));
        assert!(!s.first_encounter(CLASS, &id));

        let occ = s.node_id(SOME, &some_b()).unwrap();
        assert!(s.first_encounter(SOME, &occ));
        assert!(s.first_encounter(SOME, &occ));
    }
}
