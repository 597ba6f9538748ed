use std::collections::VecDeque;

use crate::graph::algos::shared::{Traversal, VisitedSet};
use crate::graph::path::unwind_parents;
use crate::graph::types::VertexId;
use crate::graph::GraphProvider;

/// Breadth-first search from `origin` to `goal`.
///
/// Vertices are marked visited when enqueued. The goal is never enqueued:
/// the search returns as soon as it appears among the neighbors of the vertex
/// being expanded, so the first path found has the fewest hops.
pub fn search(provider: &dyn GraphProvider, origin: VertexId, goal: VertexId) -> Traversal {
    if origin == goal {
        return Traversal::trivial(origin, false);
    }

    let mut visited = VisitedSet::new(provider.vertex_count());
    let mut parents: Vec<Option<VertexId>> = vec![None; provider.vertex_count()];
    let mut queue: VecDeque<VertexId> = VecDeque::new();
    let mut expanded = 0;

    visited.insert(origin);
    queue.push_back(origin);

    while let Some(current) = queue.pop_front() {
        expanded += 1;

        for neighbor in provider.outgoing(current) {
            if neighbor.vertex == goal {
                let mut path = unwind_parents(&parents, origin, current);
                path.push(goal);
                return Traversal::found(visited, path, expanded);
            }

            if visited.insert(neighbor.vertex) {
                parents[neighbor.vertex.index()] = Some(current);
                queue.push_back(neighbor.vertex);
            }
        }
    }

    Traversal::no_path(visited, expanded)
}
