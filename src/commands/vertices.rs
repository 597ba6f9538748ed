//! Vertices command
use std::collections::HashMap;

use serde::Serialize;

use crate::cli::{Cli, OutputFormat};
use rota_core::error::Result;
use rota_core::graph::Graph;
use rota_core::loader::Location;
use rota_core::records::{format_listing_header, format_vertex_line};

#[derive(Debug, Serialize)]
struct VertexEntry<'a> {
    id: &'a str,
    out_degree: usize,
    in_degree: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    x: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    y: Option<f64>,
}

/// Execute the vertices command
pub fn execute(cli: &Cli, graph: &Graph, locations: &[Location]) -> Result<()> {
    let by_id: HashMap<&str, &Location> = locations.iter().map(|l| (l.id.as_str(), l)).collect();

    match cli.format {
        OutputFormat::Human => {
            if graph.vertex_count() == 0 && !cli.quiet {
                println!("No vertices");
            }
            for (id, name) in graph.vertices() {
                let coords = by_id
                    .get(name)
                    .map(|l| format!("  ({}, {})", l.x, l.y))
                    .unwrap_or_default();
                println!(
                    "{}  out={} in={}{}",
                    name,
                    graph.neighbors(id).len(),
                    graph.incoming(id).len(),
                    coords
                );
            }
        }
        OutputFormat::Json => {
            let entries: Vec<VertexEntry> = graph
                .vertices()
                .map(|(id, name)| {
                    let location = by_id.get(name);
                    VertexEntry {
                        id: name,
                        out_degree: graph.neighbors(id).len(),
                        in_degree: graph.incoming(id).len(),
                        x: location.map(|l| l.x),
                        y: location.map(|l| l.y),
                    }
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&entries)?);
        }
        OutputFormat::Records => {
            println!("{}", format_listing_header("vertices", graph.vertex_count()));
            for (id, name) in graph.vertices() {
                println!(
                    "{}",
                    format_vertex_line(
                        name,
                        graph.neighbors(id).len(),
                        graph.incoming(id).len(),
                        by_id.get(name).copied()
                    )
                );
            }
        }
    }

    Ok(())
}
