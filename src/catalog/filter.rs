// Query-driven visibility filter
//
// Computes, bottom-up, which nodes should appear for a given query and
// which containers start out expanded. Pure function of the tree and the
// query; the result is a fresh value object every time.

use crate::catalog::DocNode;
use serde::Serialize;

/// One visible node in a filtered rendering of the tree
///
/// Pruned subtrees are absent entirely, not flagged. `expanded` says
/// whether the children container starts open; leaves carry no container
/// and are never expanded.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilteredNode {
    pub id: String,
    pub title: String,
    pub brief: String,
    pub url: String,
    pub stability: String,
    pub expanded: bool,
    pub children: Vec<FilteredNode>,
}

/// Normalize a raw query string: trimmed, lowercased
///
/// The empty result means "match everything".
pub fn normalize_query(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Filter a tree against a normalized query
///
/// A node is visible iff it self-matches or any child is visible.
/// Returns `None` when nothing in the tree matches; the caller renders
/// an explicit "no matches" state rather than an empty tree.
pub fn filter(node: &DocNode, query: &str) -> Option<FilteredNode> {
    let children: Vec<FilteredNode> = node
        .children
        .iter()
        .filter_map(|child| filter(child, query))
        .collect();

    if !self_matches(node, query) && children.is_empty() {
        return None;
    }

    // Auto-expand so matches are reachable without manual toggling
    let expanded = !query.is_empty() && !children.is_empty();

    Some(FilteredNode {
        id: node.id.clone(),
        title: node.title.clone(),
        brief: node.brief.clone(),
        url: node.url.clone(),
        stability: node.stability.clone(),
        expanded,
        children,
    })
}

/// Case-insensitive substring match over title, brief, and url
fn self_matches(node: &DocNode, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let haystack = format!("{} {} {}", node.title, node.brief, node.url).to_lowercase();
    haystack.contains(query)
}

/// Count every node in a filtered view
pub fn count_filtered(node: &FilteredNode) -> usize {
    1 + node.children.iter().map(count_filtered).sum::<usize>()
}
