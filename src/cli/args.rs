//! CLI argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Render a documentation catalog as a searchable outline and Mermaid map
#[derive(Parser, Debug)]
#[command(name = "wikimap")]
#[command(about = "Render a documentation catalog as a searchable outline and Mermaid map")]
#[command(version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

impl Args {
    pub fn parse_args() -> Self {
        Parser::parse()
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Load a catalog and generate the static site
    Build {
        /// Catalog source: a JSON file path or an http(s) URL
        catalog: String,

        /// Output directory (overrides the config file; defaults to ./wikimap-site)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Config file path
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Flowchart layout direction (TD, TB, LR, RL, BT)
        #[arg(long)]
        direction: Option<String>,

        /// Skip diagram generation
        #[arg(long)]
        no_diagram: bool,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Filter the catalog and print the matching outline
    Search {
        /// Catalog source: a JSON file path or an http(s) URL
        catalog: String,

        /// Query string (case-insensitive substring)
        query: String,

        /// Output format (text, json)
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// Print the Mermaid flowchart for the catalog
    Diagram {
        /// Catalog source: a JSON file path or an http(s) URL
        catalog: String,

        /// Flowchart layout direction (TD, TB, LR, RL, BT)
        #[arg(long, default_value = "TD")]
        direction: String,
    },

    /// Look up a single node by identifier
    Lookup {
        /// Catalog source: a JSON file path or an http(s) URL
        catalog: String,

        /// Node identifier
        id: String,
    },

    /// Serve a generated site locally
    Serve {
        /// Path to the generated site
        path: PathBuf,

        /// Port to serve on
        #[arg(short, long, default_value = "8080")]
        port: u16,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_defaults() {
        let args = Args::try_parse_from(["wikimap", "build", "docs-tree.json"]).unwrap();
        match args.command {
            Command::Build {
                catalog,
                output,
                direction,
                no_diagram,
                ..
            } => {
                assert_eq!(catalog, "docs-tree.json");
                assert_eq!(output, None);
                assert_eq!(direction, None);
                assert!(!no_diagram);
            }
            _ => panic!("Expected Build command"),
        }
    }

    #[test]
    fn test_build_with_options() {
        let args = Args::try_parse_from([
            "wikimap",
            "build",
            "https://docs.example.com/docs-tree.json",
            "--output",
            "/tmp/site",
            "--config",
            "wikimap.toml",
            "--direction",
            "LR",
            "--no-diagram",
            "--verbose",
        ])
        .unwrap();

        match args.command {
            Command::Build {
                catalog,
                output,
                config,
                direction,
                no_diagram,
                verbose,
            } => {
                assert_eq!(catalog, "https://docs.example.com/docs-tree.json");
                assert_eq!(output, Some(PathBuf::from("/tmp/site")));
                assert_eq!(config, Some(PathBuf::from("wikimap.toml")));
                assert_eq!(direction, Some("LR".to_string()));
                assert!(no_diagram);
                assert!(verbose);
            }
            _ => panic!("Expected Build command"),
        }
    }

    #[test]
    fn test_search_defaults_to_text() {
        let args =
            Args::try_parse_from(["wikimap", "search", "docs-tree.json", "etl"]).unwrap();
        match args.command {
            Command::Search { query, format, .. } => {
                assert_eq!(query, "etl");
                assert_eq!(format, "text");
            }
            _ => panic!("Expected Search command"),
        }
    }

    #[test]
    fn test_diagram_direction() {
        let args = Args::try_parse_from([
            "wikimap",
            "diagram",
            "docs-tree.json",
            "--direction",
            "BT",
        ])
        .unwrap();
        match args.command {
            Command::Diagram { direction, .. } => assert_eq!(direction, "BT"),
            _ => panic!("Expected Diagram command"),
        }
    }

    #[test]
    fn test_lookup() {
        let args = Args::try_parse_from(["wikimap", "lookup", "docs-tree.json", "etl"]).unwrap();
        match args.command {
            Command::Lookup { id, .. } => assert_eq!(id, "etl"),
            _ => panic!("Expected Lookup command"),
        }
    }

    #[test]
    fn test_serve_defaults() {
        let args = Args::try_parse_from(["wikimap", "serve", "./site"]).unwrap();
        match args.command {
            Command::Serve { path, port } => {
                assert_eq!(path, PathBuf::from("./site"));
                assert_eq!(port, 8080);
            }
            _ => panic!("Expected Serve command"),
        }
    }

    #[test]
    fn test_serve_with_port() {
        let args =
            Args::try_parse_from(["wikimap", "serve", "./site", "--port", "3000"]).unwrap();
        match args.command {
            Command::Serve { port, .. } => assert_eq!(port, 3000),
            _ => panic!("Expected Serve command"),
        }
    }
}
