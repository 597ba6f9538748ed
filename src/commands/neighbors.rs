//! Neighbors command
use serde::Serialize;

use crate::cli::{Cli, OutputFormat};
use rota_core::error::{Result, RotaError};
use rota_core::format::format_cost;
use rota_core::graph::Graph;
use rota_core::records::{format_listing_header, format_neighbor_line};

#[derive(Debug, Serialize)]
struct NeighborEntry<'a> {
    id: &'a str,
    weight: f64,
}

/// Execute the neighbors command
pub fn execute(cli: &Cli, graph: &Graph, id: &str) -> Result<()> {
    let vertex = graph
        .vertex_id(id)
        .ok_or_else(|| RotaError::unknown_vertex(id))?;
    let entries: Vec<NeighborEntry> = graph
        .neighbors(vertex)
        .iter()
        .map(|n| NeighborEntry {
            id: graph.name(n.vertex),
            weight: n.weight,
        })
        .collect();

    match cli.format {
        OutputFormat::Human => {
            if entries.is_empty() && !cli.quiet {
                println!("No edges leave {}", id);
            }
            for entry in &entries {
                println!("{} -> {} ({})", id, entry.id, format_cost(entry.weight));
            }
        }
        OutputFormat::Json => {
            let output = serde_json::json!({
                "id": id,
                "neighbors": entries,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Records => {
            println!("{}", format_listing_header("neighbors", entries.len()));
            for entry in &entries {
                println!("{}", format_neighbor_line(id, entry.id, entry.weight));
            }
        }
    }

    Ok(())
}
