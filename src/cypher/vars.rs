//! Variable names for one statement batch.

use hashbrown::HashMap;

use crate::model::NodeId;

/// Hands out `n<k>` / `r<k>` names and remembers which node each node
/// variable is bound to. Lives for one builder invocation.
#[derive(Debug, Default)]
pub struct VariableAllocator {
    nodes: HashMap<NodeId, String>,
    next_node: usize,
    next_rel: usize,
}

impl VariableAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Variable for `id`, and whether it was freshly allocated (the caller
    /// must then bind it with a pattern).
    pub fn node(&mut self, id: &NodeId) -> (String, bool) {
        if let Some(var) = self.nodes.get(id) {
            return (var.clone(), false);
        }
        let var = format!("n{}", self.next_node);
        self.next_node += 1;
        self.nodes.insert(id.clone(), var.clone());
        (var, true)
    }

    pub fn bound(&self, id: &NodeId) -> Option<&str> {
        self.nodes.get(id).map(String::as_str)
    }

    pub fn relationship(&mut self) -> String {
        let var = format!("r{}", self.next_rel);
        self.next_rel += 1;
        var
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identity::digest_node_id;

    #[test]
    fn test_names_are_reused_per_node() {
        let mut vars = VariableAllocator::new();
        let a = digest_node_id(b"a");
        let b = digest_node_id(b"b");
        assert_eq!(vars.node(&a), ("n0".to_string(), true));
        assert_eq!(vars.node(&b), ("n1".to_string(), true));
        assert_eq!(vars.node(&a), ("n0".to_string(), false));
        assert_eq!(vars.bound(&b), Some("n1"));
        assert_eq!(vars.relationship(), "r0");
        assert_eq!(vars.relationship(), "r1");
    }
}
