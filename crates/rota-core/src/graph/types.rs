//! Graph and search result type definitions

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::RotaError;

/// Default step limit for depth-limited and iterative-deepening searches
pub const DEFAULT_STEP_LIMIT: usize = 10;

/// Index of a vertex in a [`Graph`](super::Graph)'s vertex table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexId(pub(crate) usize);

impl VertexId {
    /// Position of the vertex in insertion order
    pub fn index(self) -> usize {
        self.0
    }
}

/// One entry of a vertex's adjacency sequence
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Neighbor {
    pub vertex: VertexId,
    pub weight: f64,
}

/// A validated edge triple `(origin, neighbor, weight)`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeRecord {
    pub origin: String,
    pub neighbor: String,
    pub weight: f64,
}

impl EdgeRecord {
    pub fn new(origin: impl Into<String>, neighbor: impl Into<String>, weight: f64) -> Self {
        Self {
            origin: origin.into(),
            neighbor: neighbor.into(),
            weight,
        }
    }
}

/// An unvalidated edge row as read from a table; any field may be missing
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RawEdgeRow {
    pub origin: Option<String>,
    pub neighbor: Option<String>,
    pub weight: Option<String>,
}

impl RawEdgeRow {
    pub fn new(origin: &str, neighbor: &str, weight: &str) -> Self {
        Self {
            origin: Some(origin.to_string()),
            neighbor: Some(neighbor.to_string()),
            weight: Some(weight.to_string()),
        }
    }
}

/// How edge records are turned into adjacency
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeMode {
    /// Each record adds exactly one adjacency entry, as supplied
    #[default]
    Directed,
    /// Each record also adds the reverse entry under its neighbor
    Undirected,
}

impl fmt::Display for EdgeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EdgeMode::Directed => write!(f, "directed"),
            EdgeMode::Undirected => write!(f, "undirected"),
        }
    }
}

/// Search strategy selectable by a route query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Strategy {
    /// Breadth-first search, shortest by hop count
    #[default]
    Bfs,
    /// Depth-first search, any path
    Dfs,
    /// Depth-first search bounded by a step limit
    DepthLimited,
    /// Depth-limited search repeated with growing limits
    IterativeDeepening,
    /// Breadth-first search from both endpoints
    Bidirectional,
    /// Cheapest-first search without visited pruning
    UniformCost,
    /// Dijkstra's shortest path
    Dijkstra,
}

impl Strategy {
    /// All strategies in declaration order
    pub const ALL: [Strategy; 7] = [
        Strategy::Bfs,
        Strategy::Dfs,
        Strategy::DepthLimited,
        Strategy::IterativeDeepening,
        Strategy::Bidirectional,
        Strategy::UniformCost,
        Strategy::Dijkstra,
    ];

    /// Canonical identifier
    pub fn as_str(self) -> &'static str {
        match self {
            Strategy::Bfs => "bfs",
            Strategy::Dfs => "dfs",
            Strategy::DepthLimited => "depth-limited",
            Strategy::IterativeDeepening => "iterative-deepening",
            Strategy::Bidirectional => "bidirectional",
            Strategy::UniformCost => "uniform-cost",
            Strategy::Dijkstra => "dijkstra",
        }
    }

    /// Display name for human output
    pub fn label(self) -> &'static str {
        match self {
            Strategy::Bfs => "Breadth-first",
            Strategy::Dfs => "Depth-first",
            Strategy::DepthLimited => "Depth-limited",
            Strategy::IterativeDeepening => "Iterative deepening",
            Strategy::Bidirectional => "Bidirectional",
            Strategy::UniformCost => "Uniform cost",
            Strategy::Dijkstra => "Dijkstra",
        }
    }

    /// Whether the strategy accumulates edge weights and reports a cost
    pub fn is_weighted(self) -> bool {
        matches!(self, Strategy::UniformCost | Strategy::Dijkstra)
    }
}

impl FromStr for Strategy {
    type Err = RotaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "bfs" | "breadth-first" => Ok(Strategy::Bfs),
            "dfs" | "depth-first" => Ok(Strategy::Dfs),
            "dls" | "depth-limited" => Ok(Strategy::DepthLimited),
            "ids" | "iddfs" | "iterative-deepening" => Ok(Strategy::IterativeDeepening),
            "bidi" | "bidirectional" => Ok(Strategy::Bidirectional),
            "ucs" | "uniform-cost" => Ok(Strategy::UniformCost),
            "dijkstra" => Ok(Strategy::Dijkstra),
            _ => Err(RotaError::UnknownStrategy(s.to_string())),
        }
    }
}

impl TryFrom<String> for Strategy {
    type Error = RotaError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Strategy> for String {
    fn from(strategy: Strategy) -> Self {
        strategy.as_str().to_string()
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a search ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchOutcome {
    /// A path from origin to goal was found
    Found,
    /// The reachable part of the graph was exhausted without reaching the goal
    NoPath,
    /// The configured step limit ran out before the goal was reached
    LimitExhausted,
}

impl fmt::Display for SearchOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchOutcome::Found => write!(f, "found"),
            SearchOutcome::NoPath => write!(f, "no_path"),
            SearchOutcome::LimitExhausted => write!(f, "limit_exhausted"),
        }
    }
}

/// Result of one route query, owned by the caller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub strategy: Strategy,
    pub origin: String,
    pub goal: String,
    pub outcome: SearchOutcome,
    /// Path from origin to goal inclusive; empty when no path was found
    pub path: Vec<String>,
    /// Total path weight, reported by weighted strategies when a path exists
    pub cost: Option<f64>,
    /// Vertices in first-visit order
    pub visited: Vec<String>,
    /// Number of vertices whose adjacency was scanned
    pub expanded: usize,
    /// Number of search passes (one per limit for iterative deepening)
    pub rounds: usize,
    /// Vertex where the two halves of a bidirectional search met
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub meeting_point: Option<String>,
}

impl SearchResult {
    pub fn found(&self) -> bool {
        self.outcome == SearchOutcome::Found
    }

    /// Hop count of the path (0 for no path or a trivial path)
    pub fn steps(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

/// A run of vertices reached while one vertex was being expanded
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExpansionGroup {
    pub vertex: String,
    pub reached: Vec<String>,
}
