//! Named and anonymous individuals.

use super::{Translator, fresh};
use crate::Result;
use crate::model::{Properties, PropertyField, Translation};
use crate::owl::{AnonymousIndividual, ConstructKind, Individual};

impl Translator {
    pub fn translate_individual(&mut self, individual: &Individual) -> Result<Translation> {
        match individual {
            Individual::Named(i) => self.entity_of(i.clone()),
            Individual::Anonymous(i) => self.translate_anonymous_individual(i),
        }
    }

    /// Anonymous individuals have no global identity: one node per
    /// occurrence, keeping the document-local node id as a property.
    pub fn translate_anonymous_individual(
        &mut self,
        individual: &AnonymousIndividual,
    ) -> Result<Translation> {
        let props = Properties::new().with(PropertyField::NodeId, individual.node_id());
        let b = fresh!(self.visit(ConstructKind::AnonymousIndividual, individual, props)?);
        Ok(b.build())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identity::IdFormat;

    #[test]
    fn test_anonymous_individuals_are_never_shared() {
        let mut t = Translator::default();
        let b0 = Individual::anonymous("_:b0");
        let first = t.translate_individual(&b0).unwrap();
        let second = t.translate_individual(&b0).unwrap();
        assert_ne!(first.main_node().id(), second.main_node().id());
        assert_eq!(first.main_node().id().format(), IdFormat::PerOccurrence);
        assert_eq!(first.main_node().properties().get_str(PropertyField::NodeId), Some("_:b0"));
        assert_eq!(
            first.main_node().labels().iter().collect::<Vec<_>>(),
            vec!["AnonymousIndividual", "Individual", "AnnotationSubject", "AnnotationValue"]
        );
    }

    #[test]
    fn test_named_individual_is_an_entity() {
        let tr = Translator::default().translate_individual(&Individual::named("http://ex.org/i")).unwrap();
        assert!(tr.main_node().has_label("NamedIndividual"));
        assert!(tr.main_node().has_label("Entity"));
    }
}
