//! Edges command
use serde::Serialize;

use crate::cli::{Cli, OutputFormat};
use rota_core::error::Result;
use rota_core::graph::Graph;
use rota_core::records::{format_edge_line, format_listing_header};

#[derive(Debug, Serialize)]
struct EdgeEntry<'a> {
    a: &'a str,
    b: &'a str,
}

/// Execute the edges command
pub fn execute(cli: &Cli, graph: &Graph) -> Result<()> {
    let entries: Vec<EdgeEntry> = graph
        .undirected_edges()
        .into_iter()
        .map(|(a, b)| EdgeEntry {
            a: graph.name(a),
            b: graph.name(b),
        })
        .collect();

    match cli.format {
        OutputFormat::Human => {
            if entries.is_empty() && !cli.quiet {
                println!("No edges");
            }
            for entry in &entries {
                println!("{} -- {}", entry.a, entry.b);
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&entries)?);
        }
        OutputFormat::Records => {
            println!("{}", format_listing_header("edges", entries.len()));
            for entry in &entries {
                println!("{}", format_edge_line(entry.a, entry.b));
            }
        }
    }

    Ok(())
}
