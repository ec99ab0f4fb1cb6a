//! # Property Graph Model
//!
//! Immutable DTOs for the encoded graph. These types cross every boundary:
//! translators produce them, query builders and sinks consume them.
//!
//! Design rule: no I/O, no state, no hashing in this module.

pub mod edge;
pub mod node;
pub mod property_map;
pub mod translation;
pub mod value;

pub use edge::{Edge, EdgeId, EdgeLabel};
pub use node::{Node, NodeId, NodeLabels};
pub use property_map::{Properties, PropertyField};
pub use translation::Translation;
pub use value::Value;
