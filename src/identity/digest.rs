//! Content digests for node and edge identity.
//!
//! Node ids use the full SHA-256 output. Edge ids only disambiguate which
//! relationship exists between two already-identified nodes, so they keep
//! the first 128 bits of the same hash.

use std::fmt;

use sha2::{Digest as _, Sha256};

use super::IdFormat;
use crate::model::{EdgeId, EdgeLabel, NodeId};

const EDGE_ID_BYTES: usize = 16;

/// A 256-bit content digest.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Digest([u8; 32]);

impl Digest {
    pub const ZERO: Digest = Digest([0u8; 32]);

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Debug for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Digest({})", &self.to_hex()[..12])
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

pub fn compute_digest(bytes: &[u8]) -> Digest {
    Digest(Sha256::digest(bytes).into())
}

/// Globally shared identity: the digest of the canonical bytes alone.
pub fn digest_node_id(canonical: &[u8]) -> NodeId {
    NodeId::hashed(IdFormat::Digest, compute_digest(canonical).to_hex())
}

/// Occurrence-scoped identity: canonical bytes plus the enclosing scope and
/// the occurrence counter, so equal sub-structure in two places stays apart.
pub fn occurrence_node_id(canonical: &[u8], scope: &Digest, occurrence: u64) -> NodeId {
    let mut hasher = Sha256::new();
    hasher.update((canonical.len() as u64).to_be_bytes());
    hasher.update(canonical);
    hasher.update(scope.as_bytes());
    hasher.update(occurrence.to_be_bytes());
    let digest = Digest(hasher.finalize().into());
    NodeId::hashed(IdFormat::PerOccurrence, digest.to_hex())
}

/// Identity of a write-context node: the digest of its kind and the ids on
/// its path from the project, so equal branch or document ids under two
/// projects stay two nodes.
pub fn context_node_id(kind: &str, path: &[&str]) -> NodeId {
    let mut hasher = Sha256::new();
    for part in std::iter::once(kind).chain(path.iter().copied()) {
        hasher.update((part.len() as u32).to_be_bytes());
        hasher.update(part.as_bytes());
    }
    let digest = Digest(hasher.finalize().into());
    NodeId::hashed(IdFormat::Keyed, digest.to_hex())
}

/// Edge identity from `(start, end, label)`. `ordinal` separates parallel
/// edges with the same endpoints and label; ordinal 0 leaves the triple as is.
pub fn edge_id(start: &NodeId, end: &NodeId, label: EdgeLabel, ordinal: usize) -> EdgeId {
    let mut hasher = Sha256::new();
    for part in [start.as_str(), end.as_str(), label.as_str()] {
        hasher.update((part.len() as u32).to_be_bytes());
        hasher.update(part.as_bytes());
    }
    if ordinal > 0 {
        hasher.update((ordinal as u64).to_be_bytes());
    }
    let full = hasher.finalize();
    EdgeId::from_hex(hex::encode(&full[..EDGE_ID_BYTES]))
}

/// Id of a derived shortcut edge. The implying axiom is part of the hash, so
/// two axioms implying the same shortcut write two relationships and removing
/// one axiom never takes the other's shortcut with it.
pub fn augmented_edge_id(
    start: &NodeId,
    end: &NodeId,
    label: EdgeLabel,
    axiom: &NodeId,
    ordinal: usize,
) -> EdgeId {
    let mut hasher = Sha256::new();
    for part in [start.as_str(), end.as_str(), label.as_str(), axiom.as_str()] {
        hasher.update((part.len() as u32).to_be_bytes());
        hasher.update(part.as_bytes());
    }
    hasher.update((ordinal as u64).to_be_bytes());
    let full = hasher.finalize();
    EdgeId::from_hex(hex::encode(&full[..EDGE_ID_BYTES]))
}
