//! Adjacency construction from edge triples

use std::collections::{HashMap, HashSet};
use std::time::Instant;

use crate::error::Result;
use crate::graph::types::{EdgeMode, EdgeRecord, Neighbor, RawEdgeRow, VertexId};
use crate::{bail_malformed, trace_time};

/// Immutable adjacency structure built once from an edge table.
///
/// Vertices live in an arena indexed by [`VertexId`], in the order they first
/// appear in the input. Each vertex keeps its outgoing entries in input order
/// and its incoming entries (used by backward searches) in the same order.
#[derive(Debug, Clone)]
pub struct Graph {
    mode: EdgeMode,
    names: Vec<String>,
    index: HashMap<String, VertexId>,
    outgoing: Vec<Vec<Neighbor>>,
    incoming: Vec<Vec<Neighbor>>,
    edge_count: usize,
}

impl EdgeRecord {
    /// Validate a raw table row. `record` is the 1-based row number used in errors.
    pub fn parse(record: usize, row: &RawEdgeRow) -> Result<EdgeRecord> {
        let origin = required_field(record, "origin", row.origin.as_deref())?;
        let neighbor = required_field(record, "neighbor", row.neighbor.as_deref())?;
        let raw_weight = required_field(record, "weight", row.weight.as_deref())?;

        let Ok(weight) = raw_weight.parse::<f64>() else {
            bail_malformed!(record, "weight is not a number: \"{}\"", raw_weight);
        };

        let edge = EdgeRecord::new(origin, neighbor, weight);
        edge.validate(record)?;
        Ok(edge)
    }

    fn validate(&self, record: usize) -> Result<()> {
        if self.origin.trim().is_empty() {
            bail_malformed!(record, "missing origin");
        }
        if self.neighbor.trim().is_empty() {
            bail_malformed!(record, "missing neighbor");
        }
        if !self.weight.is_finite() {
            bail_malformed!(record, "weight must be finite, got {}", self.weight);
        }
        if self.weight < 0.0 {
            bail_malformed!(record, "negative weight {}", self.weight);
        }
        Ok(())
    }
}

fn required_field<'a>(record: usize, field: &str, value: Option<&'a str>) -> Result<&'a str> {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v),
        _ => bail_malformed!(record, "missing {}", field),
    }
}

impl Graph {
    /// Build a graph from validated edge triples.
    ///
    /// Fails on the first record with an empty identifier or a negative,
    /// NaN or infinite weight; no partial graph is returned.
    #[tracing::instrument(skip(edges), fields(mode = %mode))]
    pub fn build(edges: impl IntoIterator<Item = EdgeRecord>, mode: EdgeMode) -> Result<Graph> {
        let start = Instant::now();
        let mut graph = Graph::empty(mode);

        for (i, edge) in edges.into_iter().enumerate() {
            edge.validate(i + 1)?;
            graph.insert(&edge);
        }

        trace_time!(
            start,
            "build_graph",
            vertices = graph.vertex_count(),
            edges = graph.edge_count()
        );
        tracing::debug!(
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
            "graph_built"
        );
        Ok(graph)
    }

    /// Parse raw table rows and build the graph from them
    pub fn build_from_rows(
        rows: impl IntoIterator<Item = RawEdgeRow>,
        mode: EdgeMode,
    ) -> Result<Graph> {
        let edges = rows
            .into_iter()
            .enumerate()
            .map(|(i, row)| EdgeRecord::parse(i + 1, &row))
            .collect::<Result<Vec<_>>>()?;
        Graph::build(edges, mode)
    }

    fn empty(mode: EdgeMode) -> Self {
        Self {
            mode,
            names: Vec::new(),
            index: HashMap::new(),
            outgoing: Vec::new(),
            incoming: Vec::new(),
            edge_count: 0,
        }
    }

    fn intern(&mut self, name: &str) -> VertexId {
        if let Some(&id) = self.index.get(name) {
            return id;
        }
        let id = VertexId(self.names.len());
        self.names.push(name.to_string());
        self.index.insert(name.to_string(), id);
        self.outgoing.push(Vec::new());
        self.incoming.push(Vec::new());
        id
    }

    fn link(&mut self, from: VertexId, to: VertexId, weight: f64) {
        self.outgoing[from.0].push(Neighbor { vertex: to, weight });
        self.incoming[to.0].push(Neighbor {
            vertex: from,
            weight,
        });
        self.edge_count += 1;
    }

    fn insert(&mut self, edge: &EdgeRecord) {
        let origin = self.intern(edge.origin.trim());
        let neighbor = self.intern(edge.neighbor.trim());
        self.link(origin, neighbor, edge.weight);
        if self.mode == EdgeMode::Undirected {
            self.link(neighbor, origin, edge.weight);
        }
    }

    pub fn mode(&self) -> EdgeMode {
        self.mode
    }

    pub fn vertex_count(&self) -> usize {
        self.names.len()
    }

    /// Number of adjacency entries (reverse entries included in undirected mode)
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn vertex_id(&self, name: &str) -> Option<VertexId> {
        self.index.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Name of a vertex. Panics if `id` did not come from this graph.
    pub fn name(&self, id: VertexId) -> &str {
        &self.names[id.0]
    }

    /// Outgoing adjacency in input order
    pub fn neighbors(&self, id: VertexId) -> &[Neighbor] {
        &self.outgoing[id.0]
    }

    /// Incoming adjacency in input order
    pub fn incoming(&self, id: VertexId) -> &[Neighbor] {
        &self.incoming[id.0]
    }

    /// Vertex ids and names in insertion order
    pub fn vertices(&self) -> impl Iterator<Item = (VertexId, &str)> + '_ {
        self.names
            .iter()
            .enumerate()
            .map(|(i, name)| (VertexId(i), name.as_str()))
    }

    /// Unique unordered vertex pairs joined by at least one edge, in first-seen order
    pub fn undirected_edges(&self) -> Vec<(VertexId, VertexId)> {
        let mut seen = HashSet::new();
        let mut pairs = Vec::new();
        for (from, neighbors) in self.outgoing.iter().enumerate() {
            for n in neighbors {
                let key = (from.min(n.vertex.0), from.max(n.vertex.0));
                if seen.insert(key) {
                    pairs.push((VertexId(from), n.vertex));
                }
            }
        }
        pairs
    }
}
