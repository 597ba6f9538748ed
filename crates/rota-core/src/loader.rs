//! CSV loading for edge and location tables
//!
//! Both tables are read by column position; header names are ignored.

use std::collections::HashSet;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::time::Instant;

use crate::error::{Result, RotaError};
use crate::graph::{EdgeMode, Graph, RawEdgeRow};
use crate::trace_time;

/// A named location with planar coordinates, used for display only
#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    pub id: String,
    pub x: f64,
    pub y: f64,
}

fn reader<R: Read>(input: R, has_header: bool) -> csv::Reader<R> {
    csv::ReaderBuilder::new()
        .has_headers(has_header)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(input)
}

fn field(record: &csv::StringRecord, i: usize) -> Option<String> {
    record
        .get(i)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}

fn open(path: &Path) -> Result<File> {
    File::open(path).map_err(|e| RotaError::io_operation("open", path.display(), e))
}

/// Read raw `origin,neighbor,weight` rows from any reader
pub fn read_edge_rows<R: Read>(input: R, has_header: bool) -> Result<Vec<RawEdgeRow>> {
    let mut rows = Vec::new();
    for record in reader(input, has_header).records() {
        let record = record?;
        rows.push(RawEdgeRow {
            origin: field(&record, 0),
            neighbor: field(&record, 1),
            weight: field(&record, 2),
        });
    }
    Ok(rows)
}

/// Load an edge table and build the graph from it
#[tracing::instrument(fields(path = %path.display(), mode = %mode))]
pub fn load_edges(path: &Path, has_header: bool, mode: EdgeMode) -> Result<Graph> {
    let start = Instant::now();
    let rows = read_edge_rows(open(path)?, has_header)?;
    trace_time!(start, "read_edges", rows = rows.len());
    Graph::build_from_rows(rows, mode)
}

/// Read `id,x,y` rows from any reader
pub fn read_locations<R: Read>(input: R, has_header: bool) -> Result<Vec<Location>> {
    let mut locations = Vec::new();
    for (i, record) in reader(input, has_header).records().enumerate() {
        let record = record?;
        locations.push(parse_location(i + 1, &record)?);
    }
    Ok(locations)
}

fn parse_location(record_no: usize, record: &csv::StringRecord) -> Result<Location> {
    let malformed = |reason: String| RotaError::MalformedLocation {
        record: record_no,
        reason,
    };

    let id = field(record, 0).ok_or_else(|| malformed("missing id".to_string()))?;
    let coord = |i: usize, name: &str| -> Result<f64> {
        let raw = field(record, i).ok_or_else(|| malformed(format!("missing {name}")))?;
        raw.parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| malformed(format!("{name} is not a number: \"{raw}\"")))
    };
    let x = coord(1, "x")?;
    let y = coord(2, "y")?;

    Ok(Location { id, x, y })
}

/// Load a location table
#[tracing::instrument(fields(path = %path.display()))]
pub fn load_locations(path: &Path, has_header: bool) -> Result<Vec<Location>> {
    let locations = read_locations(open(path)?, has_header)?;
    tracing::debug!(count = locations.len(), "locations_loaded");
    Ok(locations)
}

/// Vertices of `graph` that have no entry in `locations`, in vertex order.
///
/// Each one is reported with a warning; a missing location is never an error.
pub fn missing_locations(graph: &Graph, locations: &[Location]) -> Vec<String> {
    let known: HashSet<&str> = locations.iter().map(|l| l.id.as_str()).collect();
    let missing: Vec<String> = graph
        .vertices()
        .filter(|(_, name)| !known.contains(name))
        .map(|(_, name)| name.to_string())
        .collect();

    for name in &missing {
        tracing::warn!(vertex = %name, "no location for vertex");
    }
    missing
}
