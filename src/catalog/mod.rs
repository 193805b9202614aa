// Catalog module: the documentation tree and the structures derived from it

pub mod filter;
pub mod index;

pub use filter::*;
pub use index::*;

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// One entry in the documentation hierarchy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocNode {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub brief: String,
    #[serde(default)]
    pub url: String,
    #[serde(default = "default_stability")]
    pub stability: String,
    #[serde(default)]
    pub children: Vec<DocNode>,
}

fn default_stability() -> String {
    "stable".to_string()
}

/// A loaded, validated documentation catalog
///
/// The root node is owned here and never mutated; the index, filtered
/// views, and diagram documents are all rebuilt from it on demand.
#[derive(Debug, Clone)]
pub struct Catalog {
    root: DocNode,
}

impl Catalog {
    /// Load a catalog from a local path or an http(s) URL
    ///
    /// Fetched exactly once per session. A non-success response or an
    /// unreadable file is fatal; there is no retry.
    pub fn load(source: &str) -> Result<Self> {
        let text = if source.starts_with("http://") || source.starts_with("https://") {
            let response = reqwest::blocking::get(source)?;
            let status = response.status();
            if !status.is_success() {
                return Err(Error::load(source, status.as_u16()));
            }
            response.text()?
        } else {
            let path = Path::new(source);
            if !path.exists() {
                return Err(Error::PathNotFound(path.to_path_buf()));
            }
            std::fs::read_to_string(path)?
        };

        Self::from_json(&text)
    }

    /// Parse and validate a catalog from raw JSON text
    pub fn from_json(text: &str) -> Result<Self> {
        let root: DocNode = serde_json::from_str(text)?;
        let catalog = Self { root };
        catalog.validate()?;
        Ok(catalog)
    }

    /// The root of the documentation tree
    pub fn root(&self) -> &DocNode {
        &self.root
    }

    /// Total number of nodes in the tree
    pub fn node_count(&self) -> usize {
        count_nodes(&self.root)
    }

    /// Build the identifier index over this catalog
    pub fn index(&self) -> TreeIndex<'_> {
        TreeIndex::build(&self.root)
    }

    /// Reject catalogs the rest of the pipeline cannot handle
    ///
    /// Identifiers must be non-empty and unique across the whole tree;
    /// duplicates would make index lookups and anchor navigation
    /// ambiguous, so they are refused at the load boundary.
    fn validate(&self) -> Result<()> {
        let mut seen: HashSet<&str> = HashSet::new();
        let mut stack = vec![&self.root];

        while let Some(node) = stack.pop() {
            if node.id.is_empty() {
                return Err(Error::catalog(format!(
                    "node with empty id (title: {:?})",
                    node.title
                )));
            }
            if !seen.insert(node.id.as_str()) {
                return Err(Error::catalog(format!("duplicate node id: {}", node.id)));
            }
            stack.extend(node.children.iter());
        }

        Ok(())
    }
}

/// Count every node in the tree, root included
pub fn count_nodes(node: &DocNode) -> usize {
    1 + node.children.iter().map(count_nodes).sum::<usize>()
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::DocNode;

    pub fn node(id: &str, title: &str, brief: &str, url: &str, children: Vec<DocNode>) -> DocNode {
        DocNode {
            id: id.to_string(),
            title: title.to_string(),
            brief: brief.to_string(),
            url: url.to_string(),
            stability: "stable".to_string(),
            children,
        }
    }

    /// The three-node tree used across the unit tests
    pub fn sample_tree() -> DocNode {
        node(
            "root",
            "Root",
            "intro page",
            "/root",
            vec![
                node("a", "Alpha", "first section here", "/a", vec![]),
                node("b", "Beta", "second section", "/b", vec![]),
            ],
        )
    }
}
