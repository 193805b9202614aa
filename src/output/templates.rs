// Template engine for generating the catalog page

use crate::catalog::FilteredNode;
use crate::error::Result;
use tera::{Context, Tera};

/// Template engine wrapping Tera with the embedded page template
pub struct TemplateEngine {
    tera: Tera,
}

impl TemplateEngine {
    /// Create a new template engine with embedded templates
    pub fn new() -> Result<Self> {
        let mut tera = Tera::default();
        tera.add_raw_templates(vec![(
            "index.html",
            include_str!("../../templates/index.html.tera"),
        )])?;
        Ok(Self { tera })
    }

    /// Render the catalog index page
    pub fn render_index(
        &self,
        project_name: &str,
        node_count: usize,
        outline: &str,
        diagram_src: &str,
    ) -> Result<String> {
        let mut context = Context::new();
        context.insert("project_name", project_name);
        context.insert("node_count", &node_count);
        context.insert("outline", outline);
        context.insert("diagram_src", diagram_src);

        Ok(self.tera.render("index.html", &context)?)
    }
}

/// Render a filtered view as nested outline markup
///
/// Containers marked expanded in the view start open; everything else is
/// hidden until toggled. The page script drives later re-renders.
pub fn render_outline(view: &FilteredNode) -> String {
    let mut html = String::new();
    write_node(view, &mut html);
    html
}

fn write_node(node: &FilteredNode, out: &mut String) {
    let has_children = !node.children.is_empty();
    let marker = if !has_children {
        "\u{2022}"
    } else if node.expanded {
        "\u{2013}"
    } else {
        "+"
    };

    out.push_str(&format!(
        "<div class=\"node\" data-id=\"{}\">",
        html_escape(&node.id)
    ));
    out.push_str("<div class=\"row\">");
    out.push_str(&format!(
        "<button class=\"toggle\"{}>{}</button>",
        if has_children { "" } else { " disabled" },
        marker
    ));
    out.push_str("<div class=\"content\">");
    out.push_str(&format!(
        "<div class=\"title\">{}</div>",
        html_escape(&node.title)
    ));
    out.push_str(&format!(
        "<div class=\"brief\">{}</div>",
        html_escape(&node.brief)
    ));
    out.push_str(&format!(
        "<div class=\"meta\"><a class=\"link\" href=\"{url}\" target=\"_blank\" rel=\"noreferrer\">open</a><button class=\"copy\" data-url=\"{url}\">copy link</button><span class=\"badge\">{badge}</span></div>",
        url = html_escape(&node.url),
        badge = html_escape(&node.stability)
    ));
    out.push_str("</div></div>");

    if has_children {
        out.push_str(&format!(
            "<div class=\"children\"{}>",
            if node.expanded { "" } else { " hidden" }
        ));
        for child in &node.children {
            write_node(child, out);
        }
        out.push_str("</div>");
    }

    out.push_str("</div>");
}

/// Escape HTML special characters
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::filter;
    use crate::catalog::test_support::sample_tree;

    #[test]
    fn test_html_escape() {
        assert_eq!(html_escape("<div>"), "&lt;div&gt;");
        assert_eq!(html_escape("a & b"), "a &amp; b");
        assert_eq!(html_escape("\"quoted\""), "&quot;quoted&quot;");
    }

    #[test]
    fn test_render_outline_collapsed() {
        let tree = sample_tree();
        let view = filter(&tree, "").unwrap();
        let html = render_outline(&view);

        assert!(html.contains("data-id=\"root\""));
        assert!(html.contains("data-id=\"a\""));
        assert!(html.contains("<div class=\"children\" hidden>"));
        assert!(html.contains("class=\"badge\">stable<"));
    }

    #[test]
    fn test_render_outline_expanded_container_is_open() {
        let tree = sample_tree();
        let view = filter(&tree, "alpha").unwrap();
        let html = render_outline(&view);

        assert!(html.contains("<div class=\"children\">"));
        assert!(!html.contains("data-id=\"b\""));
    }

    #[test]
    fn test_render_outline_leaf_toggle_disabled() {
        let tree = sample_tree();
        let view = filter(&tree, "alpha").unwrap();
        let html = render_outline(&view);
        assert!(html.contains("<button class=\"toggle\" disabled>\u{2022}</button>"));
    }

    #[test]
    fn test_render_outline_escapes_fields() {
        let mut tree = sample_tree();
        tree.title = "<script>".to_string();
        let view = filter(&tree, "").unwrap();
        let html = render_outline(&view);
        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn test_render_index_page() {
        let tree = sample_tree();
        let view = filter(&tree, "").unwrap();
        let outline = render_outline(&view);

        let engine = TemplateEngine::new().unwrap();
        let html = engine
            .render_index("Wiki Hub", 3, &outline, "flowchart TD")
            .unwrap();

        assert!(html.contains("Wiki Hub"));
        assert!(html.contains("3 nodes"));
        assert!(html.contains("data-id=\"root\""));
        assert!(html.contains("flowchart TD"));
    }

    #[test]
    fn test_render_index_without_diagram() {
        let engine = TemplateEngine::new().unwrap();
        let html = engine.render_index("Wiki Hub", 1, "", "").unwrap();
        assert!(!html.contains("mermaid-src"));
    }
}
