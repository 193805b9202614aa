// Identifier index over the documentation tree
//
// Built once per session and used for O(1) lookups when an external
// anchor (e.g. a #fragment from a shared link) names a node.

use crate::catalog::DocNode;
use std::collections::HashMap;

/// Flat id-to-node mapping over a documentation tree
///
/// Holds references into the tree it was built from; the catalog stays
/// the single owner. Duplicate identifiers are rejected earlier, at the
/// load boundary; if an unvalidated tree is indexed anyway, the last
/// visited node wins.
#[derive(Debug)]
pub struct TreeIndex<'a> {
    map: HashMap<&'a str, &'a DocNode>,
}

impl<'a> TreeIndex<'a> {
    /// Build the index with a single traversal, root included
    pub fn build(root: &'a DocNode) -> Self {
        let mut map = HashMap::new();
        let mut stack = vec![root];
        while let Some(node) = stack.pop() {
            map.insert(node.id.as_str(), node);
            stack.extend(node.children.iter());
        }
        Self { map }
    }

    /// Look up a node by identifier; unknown ids are a silent miss
    pub fn get(&self, id: &str) -> Option<&'a DocNode> {
        self.map.get(id).copied()
    }

    /// Number of distinct identifiers in the index
    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}
