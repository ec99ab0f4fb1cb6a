//! # Identity
//!
//! Stable ids for every node and edge the encoder emits.
//!
//! Three formats, chosen per construct kind by [`policy`]:
//! - **Digest**: SHA-256 of the canonical bytes. IRIs, entities, literals,
//!   chains, facets and axioms. Equal content collapses onto one node.
//! - **PerOccurrence**: digest of the canonical bytes, the enclosing axiom
//!   and an occurrence counter. Anonymous structure that must not be shared.
//! - **Keyed**: the write context. Projects are keyed by their id; branches
//!   and documents by a digest of their id path from the project.
//!
//! Re-translating the same axiom always reproduces the same ids, which is
//! what lets a delete find what a create wrote.

pub mod canonical;
pub mod digest;
pub mod policy;
pub mod session;

pub use canonical::{
    CanonicalWriter, Canonicalize, FacetNode, PropertyChain, canonical_bytes, canonical_order,
    resolve_facet,
};
pub use digest::{
    Digest, augmented_edge_id, compute_digest, context_node_id, digest_node_id, edge_id,
    occurrence_node_id,
};
pub use policy::{IdFormat, id_format_for, is_augmented_edge, is_single_encounter, is_structural_edge};
pub use session::IdentitySession;
