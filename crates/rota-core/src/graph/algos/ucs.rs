use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::graph::algos::shared::{HeapEntry, Sequence, Traversal, VisitedSet};
use crate::graph::path::TrailArena;
use crate::graph::types::VertexId;
use crate::graph::GraphProvider;

/// Uniform-cost search from `origin` to `goal`.
///
/// Entries are popped cheapest first (ties in insertion order). There is no
/// visited pruning: every popped entry pushes all of its neighbors, so a
/// vertex may be queued many times along different paths. A neighbor already
/// on the popped entry's own path is skipped, which keeps the search finite
/// on cyclic graphs.
pub fn search(provider: &dyn GraphProvider, origin: VertexId, goal: VertexId) -> Traversal {
    if origin == goal {
        return Traversal::trivial(origin, true);
    }

    let mut visited = VisitedSet::new(provider.vertex_count());
    let mut arena = TrailArena::new();
    let mut seq = Sequence::default();
    let mut heap: BinaryHeap<Reverse<HeapEntry>> = BinaryHeap::new();
    let mut expanded = 0;

    heap.push(Reverse(HeapEntry {
        cost: 0.0,
        seq: seq.next(),
        trail: arena.push(origin, None),
    }));

    while let Some(Reverse(entry)) = heap.pop() {
        let current = arena.vertex(entry.trail);
        visited.insert(current);

        if current == goal {
            let path = arena.flatten(entry.trail);
            return Traversal::found(visited, path, expanded).with_cost(entry.cost);
        }
        expanded += 1;

        for neighbor in provider.outgoing(current) {
            if arena.contains(entry.trail, neighbor.vertex) {
                continue;
            }
            heap.push(Reverse(HeapEntry {
                cost: entry.cost + neighbor.weight,
                seq: seq.next(),
                trail: arena.push(neighbor.vertex, Some(entry.trail)),
            }));
        }
    }

    tracing::trace!(trails = arena.len(), "uniform_cost_exhausted");
    Traversal::no_path(visited, expanded)
}
