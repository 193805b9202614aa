//! Wikimap - render a documentation catalog as a searchable outline and
//! Mermaid map
//!
//! Loads a JSON catalog tree, indexes it for anchor lookups, filters it
//! against a live query, and compiles it into a Mermaid flowchart plus a
//! static HTML site.

pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod output;

// Re-export main types
pub use catalog::{count_nodes, filter, normalize_query, Catalog, DocNode, FilteredNode, TreeIndex};
pub use config::Config;
pub use error::{Error, Result};
pub use output::{DiagramCompiler, GenerationReport, SiteConfig, SiteGenerator};
