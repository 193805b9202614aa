// Diagram generation for Wikimap
//
// Compiles the documentation tree into a Mermaid flowchart document.

use crate::catalog::DocNode;

/// Compiler from a documentation tree to Mermaid flowchart text
///
/// Always compiles the entire, unfiltered tree; the active search query
/// never affects the diagram.
pub struct DiagramCompiler {
    /// Layout direction (TD, TB, LR, BT, RL)
    direction: String,
    /// Word cap applied to the brief inside node labels
    max_label_words: usize,
}

impl DiagramCompiler {
    /// Create a new compiler with the default top-down layout
    pub fn new() -> Self {
        Self {
            direction: "TD".to_string(),
            max_label_words: 8,
        }
    }

    /// Set layout direction
    pub fn with_direction(mut self, dir: &str) -> Self {
        self.direction = dir.to_string();
        self
    }

    /// Set the label word cap
    pub fn with_max_label_words(mut self, max: usize) -> Self {
        self.max_label_words = max;
        self
    }

    /// Compile the tree into a flowchart document
    ///
    /// The consuming renderer requires all node declarations first, then
    /// all edges, then all click bindings; declarations appear in
    /// pre-order.
    pub fn compile(&self, root: &DocNode) -> String {
        let mut nodes = Vec::new();
        let mut edges = Vec::new();
        let mut clicks = Vec::new();
        self.walk(root, None, &mut nodes, &mut edges, &mut clicks);

        let mut lines = vec![format!("flowchart {}", self.direction)];
        lines.extend(nodes);
        lines.extend(edges);
        lines.extend(clicks);
        lines.join("\n")
    }

    fn walk(
        &self,
        node: &DocNode,
        parent: Option<&str>,
        nodes: &mut Vec<String>,
        edges: &mut Vec<String>,
        clicks: &mut Vec<String>,
    ) {
        let safe = sanitize_id(&node.id);
        let label = format!(
            "{}\\n{}",
            node.title,
            short_brief(&node.brief, self.max_label_words)
        );
        nodes.push(format!("    {}[\"{}\"]", safe, label.replace('"', "\\\"")));

        if let Some(parent_id) = parent {
            edges.push(format!("    {} --> {}", parent_id, safe));
        }

        clicks.push(format!("    click {} \"{}\" _blank", safe, node.url));

        for child in &node.children {
            self.walk(child, Some(&safe), nodes, edges, clicks);
        }
    }
}

impl Default for DiagramCompiler {
    fn default() -> Self {
        Self::new()
    }
}

/// Sanitize a node identifier for use as a Mermaid token
///
/// Every character outside `[A-Za-z0-9_]` becomes `_`. Collisions after
/// sanitization are an accepted limitation.
pub fn sanitize_id(s: &str) -> String {
    s.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect()
}

/// First words of a brief for use in a node label
///
/// Periods are stripped and the first `max_words` whitespace-separated
/// words are rejoined with single spaces.
pub fn short_brief(brief: &str, max_words: usize) -> String {
    brief
        .replace('.', "")
        .split_whitespace()
        .take(max_words)
        .collect::<Vec<_>>()
        .join(" ")
}
