//! IRIs and entities.

use super::{Translator, fresh};
use crate::Result;
use crate::model::{EdgeLabel, Properties, PropertyField, Translation};
use crate::owl::{ConstructKind, Entity, Iri};

impl Translator {
    /// Shared `IRI` node.
    pub fn translate_iri(&mut self, iri: &Iri) -> Result<Translation> {
        let props = Properties::new().with(PropertyField::Iri, iri.as_str());
        let b = fresh!(self.visit(ConstructKind::Iri, iri, props)?);
        Ok(b.build())
    }

    /// Entity node with its `entityIri` edge.
    pub fn translate_entity(&mut self, entity: &Entity) -> Result<Translation> {
        let props = Properties::new().with(PropertyField::Iri, entity.iri().as_str());
        let mut b = fresh!(self.visit(entity.construct_kind(), entity, props)?);
        let iri = self.translate_iri(entity.iri())?;
        b.child(EdgeLabel::EntityIri, iri);
        Ok(b.build())
    }

    /// Entity translation from one of the typed entity wrappers.
    pub(crate) fn entity_of(&mut self, entity: impl Into<Entity>) -> Result<Translation> {
        self.translate_entity(&entity.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identity::IdFormat;
    use crate::owl::{Class, NamedIndividual};

    #[test]
    fn test_entity_links_to_shared_iri() {
        let mut t = Translator::default();
        let class = t.translate_entity(&Class::new("http://ex.org/A").into()).unwrap();

        let node = class.main_node();
        assert_eq!(node.labels().iter().collect::<Vec<_>>(), vec!["Class", "ClassExpression", "Entity"]);
        assert_eq!(node.properties().get_str(PropertyField::Iri), Some("http://ex.org/A"));
        assert_eq!(node.id().format(), IdFormat::Digest);

        let edges = class.direct_edges();
        assert_eq!(edges.len(), 1);
        assert_eq!(edges[0].label(), EdgeLabel::EntityIri);
        assert!(edges[0].end().has_label("IRI"));
    }

    #[test]
    fn test_same_iri_different_kinds() {
        let mut t = Translator::default();
        let class = t.translate_entity(&Class::new("http://ex.org/A").into()).unwrap();
        let ind = t.translate_entity(&NamedIndividual::new("http://ex.org/A").into()).unwrap();
        assert_ne!(class.main_node().id(), ind.main_node().id());
        // punned entities share one IRI node
        assert_eq!(
            class.direct_edges()[0].end().id(),
            ind.direct_edges()[0].end().id()
        );
        assert!(ind.nested()[0].direct_edges().is_empty());
    }

    #[test]
    fn test_second_encounter_is_node_only() {
        let mut t = Translator::default();
        let a = Entity::from(Class::new("http://ex.org/A"));
        let first = t.translate_entity(&a).unwrap();
        let second = t.translate_entity(&a).unwrap();
        assert_eq!(first.main_node(), second.main_node());
        assert_eq!(first.edge_count(), 1);
        assert_eq!(second.edge_count(), 0);
    }
}
