// Static site generator
//
// Writes the catalog page to disk: index.html, docs-tree.json,
// diagram.mmd, and the embedded assets.

use crate::catalog::{filter, Catalog};
use crate::error::Result;
use crate::output::diagram::DiagramCompiler;
use crate::output::templates::{render_outline, TemplateEngine};
use std::fs;
use std::path::PathBuf;

/// Configuration for site generation
#[derive(Debug, Clone)]
pub struct SiteConfig {
    /// Output directory
    pub output_dir: PathBuf,
    /// Project name for the page title
    pub project_name: String,
    /// Whether to compile and embed the flowchart
    pub generate_diagram: bool,
    /// Whether to copy assets
    pub copy_assets: bool,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("wikimap-site"),
            project_name: "Documentation".to_string(),
            generate_diagram: true,
            copy_assets: true,
        }
    }
}

/// Static site generator
pub struct SiteGenerator {
    config: SiteConfig,
    template_engine: TemplateEngine,
}

impl SiteGenerator {
    /// Create a new site generator
    pub fn new(config: SiteConfig) -> Result<Self> {
        let template_engine = TemplateEngine::new()?;
        Ok(Self {
            config,
            template_engine,
        })
    }

    /// Generate the complete static site
    pub fn generate(
        &self,
        catalog: &Catalog,
        compiler: &DiagramCompiler,
    ) -> Result<GenerationReport> {
        let mut report = GenerationReport::default();

        fs::create_dir_all(self.config.output_dir.join("assets"))?;

        if self.config.copy_assets {
            self.copy_assets()?;
            report.assets_copied = true;
        }

        // The page script re-fetches the raw tree for live filtering
        let json = serde_json::to_string_pretty(catalog.root())?;
        fs::write(self.config.output_dir.join("docs-tree.json"), json)?;

        // Diagram always covers the full, unfiltered tree
        let diagram_src = if self.config.generate_diagram {
            let src = compiler.compile(catalog.root());
            fs::write(self.config.output_dir.join("diagram.mmd"), &src)?;
            report.diagram_generated = true;
            src
        } else {
            String::new()
        };

        self.generate_index(catalog, &diagram_src)?;
        report.pages_generated += 1;

        Ok(report)
    }

    /// Generate the index page with the server-rendered outline
    fn generate_index(&self, catalog: &Catalog, diagram_src: &str) -> Result<()> {
        // Empty query: every node visible, every container collapsed
        let outline = filter(catalog.root(), "")
            .map(|view| render_outline(&view))
            .unwrap_or_default();

        let html = self.template_engine.render_index(
            &self.config.project_name,
            catalog.node_count(),
            &outline,
            diagram_src,
        )?;

        fs::write(self.config.output_dir.join("index.html"), html)?;
        Ok(())
    }

    /// Copy static assets (CSS, JS)
    fn copy_assets(&self) -> Result<()> {
        let assets_dir = self.config.output_dir.join("assets");
        fs::write(
            assets_dir.join("style.css"),
            include_str!("../../assets/style.css"),
        )?;
        fs::write(
            assets_dir.join("script.js"),
            include_str!("../../assets/script.js"),
        )?;
        Ok(())
    }
}

/// Report of what was generated
#[derive(Debug, Default)]
pub struct GenerationReport {
    pub pages_generated: usize,
    pub assets_copied: bool,
    pub diagram_generated: bool,
}

impl GenerationReport {
    pub fn summary(&self) -> String {
        format!(
            "Generated {} page(s), assets: {}, diagram: {}",
            self.pages_generated,
            if self.assets_copied { "yes" } else { "no" },
            if self.diagram_generated { "yes" } else { "no" }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample_catalog() -> Catalog {
        Catalog::from_json(
            r#"{
                "id": "root", "title": "Root", "brief": "intro page", "url": "/root",
                "children": [
                    {"id": "a", "title": "Alpha", "brief": "first section here", "url": "/a"},
                    {"id": "b", "title": "Beta", "brief": "second section", "url": "/b"}
                ]
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_site_config_default() {
        let config = SiteConfig::default();
        assert_eq!(config.output_dir, PathBuf::from("wikimap-site"));
        assert!(config.generate_diagram);
        assert!(config.copy_assets);
    }

    #[test]
    fn test_generate_writes_all_files() {
        let dir = TempDir::new().unwrap();
        let config = SiteConfig {
            output_dir: dir.path().join("site"),
            ..Default::default()
        };

        let generator = SiteGenerator::new(config).unwrap();
        let report = generator
            .generate(&sample_catalog(), &DiagramCompiler::new())
            .unwrap();

        assert_eq!(report.pages_generated, 1);
        assert!(report.assets_copied);
        assert!(report.diagram_generated);

        let site = dir.path().join("site");
        assert!(site.join("index.html").exists());
        assert!(site.join("docs-tree.json").exists());
        assert!(site.join("diagram.mmd").exists());
        assert!(site.join("assets/style.css").exists());
        assert!(site.join("assets/script.js").exists());
    }

    #[test]
    fn test_generate_index_contains_outline_and_diagram() {
        let dir = TempDir::new().unwrap();
        let config = SiteConfig {
            output_dir: dir.path().to_path_buf(),
            project_name: "Wiki Hub".to_string(),
            ..Default::default()
        };

        let generator = SiteGenerator::new(config).unwrap();
        generator
            .generate(&sample_catalog(), &DiagramCompiler::new())
            .unwrap();

        let html = fs::read_to_string(dir.path().join("index.html")).unwrap();
        assert!(html.contains("Wiki Hub"));
        assert!(html.contains("3 nodes"));
        assert!(html.contains("data-id=\"a\""));
        assert!(html.contains("flowchart TD"));
    }

    #[test]
    fn test_generate_without_diagram() {
        let dir = TempDir::new().unwrap();
        let config = SiteConfig {
            output_dir: dir.path().to_path_buf(),
            generate_diagram: false,
            ..Default::default()
        };

        let generator = SiteGenerator::new(config).unwrap();
        let report = generator
            .generate(&sample_catalog(), &DiagramCompiler::new())
            .unwrap();

        assert!(!report.diagram_generated);
        assert!(!dir.path().join("diagram.mmd").exists());
    }

    #[test]
    fn test_written_tree_json_roundtrips() {
        let dir = TempDir::new().unwrap();
        let config = SiteConfig {
            output_dir: dir.path().to_path_buf(),
            ..Default::default()
        };

        let catalog = sample_catalog();
        let generator = SiteGenerator::new(config).unwrap();
        generator.generate(&catalog, &DiagramCompiler::new()).unwrap();

        let json = fs::read_to_string(dir.path().join("docs-tree.json")).unwrap();
        let reloaded = Catalog::from_json(&json).unwrap();
        assert_eq!(reloaded.root(), catalog.root());
    }
}
