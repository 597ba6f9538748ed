//! Route query façade
//!
//! Maps a [`Strategy`] to its implementation and converts the raw traversal
//! into a caller-owned [`SearchResult`] keyed by vertex names.

use std::time::Instant;

use crate::error::{Result, RotaError};
use crate::graph::algos::{bfs, bidirectional, dfs, dijkstra, limited, ucs, Traversal};
use crate::graph::store::Graph;
use crate::graph::types::{
    ExpansionGroup, SearchResult, Strategy, VertexId, DEFAULT_STEP_LIMIT,
};
use crate::trace_time;

/// Per-query parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrategyParams {
    /// Step limit for depth-limited search; starting limit for iterative deepening
    pub limit: usize,
}

impl Default for StrategyParams {
    fn default() -> Self {
        Self {
            limit: DEFAULT_STEP_LIMIT,
        }
    }
}

impl StrategyParams {
    pub fn with_limit(limit: usize) -> Self {
        Self { limit }
    }

    /// Build params from a signed limit, clamping negative values to zero
    pub fn from_signed(limit: i64) -> Self {
        Self {
            limit: usize::try_from(limit.max(0)).unwrap_or(usize::MAX),
        }
    }
}

fn resolve(graph: &Graph, id: &str) -> Result<VertexId> {
    graph
        .vertex_id(id)
        .ok_or_else(|| RotaError::unknown_vertex(id))
}

fn dispatch(
    graph: &Graph,
    origin: VertexId,
    goal: VertexId,
    strategy: Strategy,
    params: StrategyParams,
) -> Traversal {
    match strategy {
        Strategy::Bfs => bfs::search(graph, origin, goal),
        Strategy::Dfs => dfs::search(graph, origin, goal),
        Strategy::DepthLimited => limited::depth_limited(graph, origin, goal, params.limit),
        Strategy::IterativeDeepening => {
            limited::iterative_deepening(graph, origin, goal, params.limit)
        }
        Strategy::Bidirectional => bidirectional::search(graph, origin, goal),
        Strategy::UniformCost => ucs::search(graph, origin, goal),
        Strategy::Dijkstra => dijkstra::search(graph, origin, goal),
    }
}

fn to_names(graph: &Graph, ids: &[VertexId]) -> Vec<String> {
    ids.iter().map(|&id| graph.name(id).to_string()).collect()
}

/// Run one route query.
///
/// Fails with [`RotaError::UnknownVertex`] when either endpoint is not a
/// vertex of `graph`. Not finding a path is not an error: the result then has
/// an empty path and an outcome of `NoPath` or `LimitExhausted`.
#[tracing::instrument(skip(graph, params), fields(origin = %origin, goal = %goal, strategy = %strategy, limit = params.limit))]
pub fn execute(
    graph: &Graph,
    origin: &str,
    goal: &str,
    strategy: Strategy,
    params: StrategyParams,
) -> Result<SearchResult> {
    let start = Instant::now();
    let origin_id = resolve(graph, origin)?;
    let goal_id = resolve(graph, goal)?;

    let traversal = dispatch(graph, origin_id, goal_id, strategy, params);
    trace_time!(start, "search", expanded = traversal.expanded);

    tracing::debug!(
        outcome = %traversal.outcome,
        visited = traversal.visited.len(),
        expanded = traversal.expanded,
        steps = traversal.path.len().saturating_sub(1),
        "search_complete"
    );

    Ok(SearchResult {
        strategy,
        origin: origin.to_string(),
        goal: goal.to_string(),
        outcome: traversal.outcome,
        path: to_names(graph, &traversal.path),
        cost: traversal.cost,
        visited: to_names(graph, &traversal.visited),
        expanded: traversal.expanded,
        rounds: traversal.rounds,
        meeting_point: traversal
            .meeting_point
            .map(|id| graph.name(id).to_string()),
    })
}

/// Run every strategy on the same endpoints, in [`Strategy::ALL`] order
pub fn compare(
    graph: &Graph,
    origin: &str,
    goal: &str,
    params: StrategyParams,
) -> Result<Vec<SearchResult>> {
    Strategy::ALL
        .iter()
        .map(|&strategy| execute(graph, origin, goal, strategy, params))
        .collect()
}

/// Group a result's visited sequence by the vertex each run was reached from.
///
/// Walks the visited list keeping a current group: a vertex reachable by an
/// outgoing edge of the current group's vertex joins that group, any other
/// vertex opens a group of its own (or reopens and clears an earlier one with
/// the same vertex).
pub fn expansion_groups(graph: &Graph, result: &SearchResult) -> Vec<ExpansionGroup> {
    let mut groups = vec![ExpansionGroup {
        vertex: result.origin.clone(),
        reached: Vec::new(),
    }];
    let mut current = 0;

    for name in &result.visited {
        let adjacent = match (graph.vertex_id(&groups[current].vertex), graph.vertex_id(name)) {
            (Some(from), Some(to)) => graph.neighbors(from).iter().any(|n| n.vertex == to),
            _ => false,
        };

        if adjacent {
            groups[current].reached.push(name.clone());
            continue;
        }

        current = match groups.iter().position(|g| &g.vertex == name) {
            Some(existing) => {
                groups[existing].reached.clear();
                existing
            }
            None => {
                groups.push(ExpansionGroup {
                    vertex: name.clone(),
                    reached: Vec::new(),
                });
                groups.len() - 1
            }
        };
    }

    groups
}

impl SearchResult {
    /// See [`expansion_groups`]
    pub fn expansion_groups(&self, graph: &Graph) -> Vec<ExpansionGroup> {
        expansion_groups(graph, self)
    }
}
