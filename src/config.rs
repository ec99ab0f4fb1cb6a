//! Translator configuration.

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Optional edge families emitted alongside the structural encoding.
///
/// Turning a family off only drops those edges; node identity and the
/// structural edges are unaffected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TranslatorConfig {
    /// Derived shortcut edges (`subClassOf`, `type`, ...) between the named
    /// participants of an axiom.
    pub augmented_edges: bool,
    /// `axiomSubject` edges from an axiom to the entities it is about.
    pub subject_edges: bool,
    /// `axiomAnnotation` edges to the axiom's annotations.
    pub annotation_edges: bool,
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self { augmented_edges: true, subject_edges: true, annotation_edges: true }
    }
}

impl TranslatorConfig {
    /// Structural edges only.
    pub fn minimal() -> Self {
        Self { augmented_edges: false, subject_edges: false, annotation_edges: false }
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::Config(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_enable_everything() {
        let c = TranslatorConfig::default();
        assert!(c.augmented_edges && c.subject_edges && c.annotation_edges);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let c = TranslatorConfig::from_json_str(r#"{"augmented_edges": false}"#).unwrap();
        assert!(!c.augmented_edges);
        assert!(c.subject_edges);
    }

    #[test]
    fn test_unknown_field_is_a_config_error() {
        let err = TranslatorConfig::from_json_str(r#"{"augmented": false}"#).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }
}
