//! CLI module for Wikimap

mod args;

pub use args::{Args, Command};

use crate::catalog::{filter, normalize_query, Catalog, FilteredNode};
use crate::config::Config;
use crate::error::{Error, Result};
use crate::output::{DiagramCompiler, SiteConfig, SiteGenerator};
use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::path::Path;
use std::process::ExitCode;

/// Run the CLI application
pub fn run() -> ExitCode {
    let args = Args::parse_args();

    match execute(args) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn execute(args: Args) -> Result<()> {
    match args.command {
        Command::Build {
            catalog,
            output,
            config,
            direction,
            no_diagram,
            verbose,
        } => {
            let mut cfg = if let Some(config_path) = &config {
                Config::load_or_default(config_path)
            } else {
                Config::load_or_default(Path::new("wikimap.toml"))
            };

            // CLI takes precedence over the config file
            cfg.merge_cli(output, direction, no_diagram);
            cfg.validate()?;

            if verbose {
                println!("Catalog: {}", catalog);
                println!("Output: {}", cfg.output.directory.display());
                println!("Diagram: {}", cfg.diagram.enabled);
                println!("Direction: {}", cfg.diagram.direction);
            }

            let loaded = Catalog::load(&catalog)?;
            println!("Loaded {} nodes", loaded.node_count());

            let compiler = DiagramCompiler::new()
                .with_direction(&cfg.diagram.direction)
                .with_max_label_words(cfg.diagram.max_label_words);

            let site_config = SiteConfig {
                output_dir: cfg.output.directory.clone(),
                project_name: cfg.project.name.clone(),
                generate_diagram: cfg.diagram.enabled,
                copy_assets: true,
            };

            let generator = SiteGenerator::new(site_config)?;
            let report = generator.generate(&loaded, &compiler)?;

            println!("{}", report.summary());
            println!("Site written to: {}", cfg.output.directory.display());
            Ok(())
        }

        Command::Search {
            catalog,
            query,
            format,
        } => {
            let loaded = Catalog::load(&catalog)?;
            let normalized = normalize_query(&query);

            match filter(loaded.root(), &normalized) {
                Some(view) => match format.as_str() {
                    "json" => println!("{}", serde_json::to_string_pretty(&view)?),
                    "text" => print!("{}", format_outline(&view)),
                    _ => return Err(Error::other(format!("Unknown format: {}", format))),
                },
                None => println!("No matches."),
            }
            Ok(())
        }

        Command::Diagram { catalog, direction } => {
            let mut cfg = Config::default();
            cfg.merge_cli(None, Some(direction), false);
            cfg.validate()?;

            let loaded = Catalog::load(&catalog)?;
            let doc = DiagramCompiler::new()
                .with_direction(&cfg.diagram.direction)
                .compile(loaded.root());
            println!("{}", doc);
            Ok(())
        }

        Command::Lookup { catalog, id } => {
            let loaded = Catalog::load(&catalog)?;
            let index = loaded.index();

            // Unknown identifiers are a silent no-op, like an unknown
            // anchor in the rendered page.
            if let Some(node) = index.get(&id) {
                println!("{}\t{}\t{}", node.id, node.title, node.url);
            }
            Ok(())
        }

        Command::Serve { path, port } => {
            if !path.exists() {
                return Err(Error::PathNotFound(path));
            }

            println!("Serving {} on http://localhost:{}", path.display(), port);
            println!("Press Ctrl+C to stop");

            serve_site(&path, port)
        }
    }
}

/// Format a filtered view as an indented text outline
///
/// Containers carry the same markers as the rendered page: `+` closed,
/// `–` open, `•` leaf.
fn format_outline(view: &FilteredNode) -> String {
    let mut out = String::new();
    write_outline(view, 0, &mut out);
    out
}

fn write_outline(node: &FilteredNode, depth: usize, out: &mut String) {
    let marker = if node.children.is_empty() {
        "\u{2022}"
    } else if node.expanded {
        "\u{2013}"
    } else {
        "+"
    };
    out.push_str(&"  ".repeat(depth));
    out.push_str(&format!(
        "{} {} [{}] {}\n",
        marker, node.title, node.stability, node.url
    ));
    for child in &node.children {
        write_outline(child, depth + 1, out);
    }
}

/// Minimal static-file server for a generated site
fn serve_site(root: &Path, port: u16) -> Result<()> {
    let listener = TcpListener::bind(("127.0.0.1", port))
        .map_err(|e| Error::other(format!("Failed to bind to port {}: {}", port, e)))?;

    for stream in listener.incoming() {
        match stream {
            Ok(stream) => {
                let root = root.to_path_buf();
                std::thread::spawn(move || {
                    if let Err(e) = handle_request(stream, &root) {
                        eprintln!("Request error: {}", e);
                    }
                });
            }
            Err(e) => eprintln!("Connection error: {}", e),
        }
    }

    Ok(())
}

fn handle_request(mut stream: TcpStream, root: &Path) -> Result<()> {
    let mut buffer = [0; 4096];
    let n = stream.read(&mut buffer)?;
    let request = String::from_utf8_lossy(&buffer[..n]);

    let request_line = request.lines().next().unwrap_or("");
    let mut parts = request_line.split_whitespace();
    let (method, target) = match (parts.next(), parts.next()) {
        (Some(m), Some(t)) => (m, t),
        _ => return respond(&mut stream, 400, "Bad Request", "text/plain", b"Bad Request"),
    };

    if method != "GET" {
        return respond(
            &mut stream,
            405,
            "Method Not Allowed",
            "text/plain",
            b"Method Not Allowed",
        );
    }

    // Query strings and fragments are irrelevant for static files
    let url_path = target.split(['?', '#']).next().unwrap_or(target);
    let requested = if url_path == "/" {
        root.join("index.html")
    } else {
        root.join(url_path.trim_start_matches('/'))
    };

    // Refuse anything that escapes the site root
    let canonical = match requested.canonicalize() {
        Ok(p) => p,
        Err(_) => return respond(&mut stream, 404, "Not Found", "text/plain", b"Not Found"),
    };
    let root_canonical = root.canonicalize().unwrap_or_else(|_| root.to_path_buf());
    if !canonical.starts_with(&root_canonical) {
        return respond(&mut stream, 403, "Forbidden", "text/plain", b"Forbidden");
    }

    let file_path = if canonical.is_dir() {
        canonical.join("index.html")
    } else {
        canonical
    };

    match std::fs::read(&file_path) {
        Ok(content) => {
            respond(&mut stream, 200, "OK", content_type(&file_path), &content)?;
            println!("200 GET {}", url_path);
        }
        Err(_) => {
            respond(&mut stream, 404, "Not Found", "text/plain", b"Not Found")?;
            println!("404 GET {}", url_path);
        }
    }

    Ok(())
}

fn respond(
    stream: &mut TcpStream,
    status_code: u16,
    status_text: &str,
    content_type: &str,
    body: &[u8],
) -> Result<()> {
    let header = format!(
        "HTTP/1.1 {} {}\r\nContent-Type: {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
        status_code,
        status_text,
        content_type,
        body.len()
    );

    stream.write_all(header.as_bytes())?;
    stream.write_all(body)?;
    stream.flush()?;

    Ok(())
}

/// Content type for the file kinds the generated site contains
fn content_type(path: &Path) -> &'static str {
    match path.extension().and_then(|e| e.to_str()) {
        Some("html") | Some("htm") => "text/html; charset=utf-8",
        Some("css") => "text/css; charset=utf-8",
        Some("js") => "application/javascript; charset=utf-8",
        Some("json") => "application/json; charset=utf-8",
        Some("mmd") => "text/plain; charset=utf-8",
        Some("svg") => "image/svg+xml",
        Some("ico") => "image/x-icon",
        _ => "application/octet-stream",
    }
}
