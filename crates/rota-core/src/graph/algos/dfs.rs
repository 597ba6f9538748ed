use crate::graph::algos::shared::{Traversal, VisitedSet};
use crate::graph::path::unwind_parents;
use crate::graph::types::VertexId;
use crate::graph::GraphProvider;

/// Depth-first search from `origin` to `goal`.
///
/// Same bookkeeping as breadth-first search with a stack in place of the
/// queue. The path returned is *a* path, usually not the shortest one.
pub fn search(provider: &dyn GraphProvider, origin: VertexId, goal: VertexId) -> Traversal {
    search_limited(provider, origin, goal, None)
}

/// Depth-first search that expands at most `limit` vertices.
///
/// The bound is on expansions; `visited` also holds the neighbors pushed by
/// those expansions and may be longer than `limit`.
///
/// Each pop counts one step. Once `limit` steps were taken the search stops
/// and reports [`LimitExhausted`](crate::graph::SearchOutcome::LimitExhausted)
/// with the vertices visited so far.
pub fn search_limited(
    provider: &dyn GraphProvider,
    origin: VertexId,
    goal: VertexId,
    limit: Option<usize>,
) -> Traversal {
    if origin == goal {
        return Traversal::trivial(origin, false);
    }

    let mut visited = VisitedSet::new(provider.vertex_count());
    let mut parents: Vec<Option<VertexId>> = vec![None; provider.vertex_count()];
    let mut stack: Vec<VertexId> = vec![origin];
    let mut expanded = 0;

    visited.insert(origin);

    while let Some(current) = stack.pop() {
        if limit.is_some_and(|max| expanded >= max) {
            return Traversal::limit_exhausted(visited, expanded);
        }
        expanded += 1;

        for neighbor in provider.outgoing(current) {
            if neighbor.vertex == goal {
                let mut path = unwind_parents(&parents, origin, current);
                path.push(goal);
                return Traversal::found(visited, path, expanded);
            }

            if visited.insert(neighbor.vertex) {
                parents[neighbor.vertex.index()] = Some(current);
                stack.push(neighbor.vertex);
            }
        }
    }

    Traversal::no_path(visited, expanded)
}
