use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::graph::algos::shared::{HeapEntry, Sequence, Traversal, VisitedSet};
use crate::graph::path::{TrailArena, TrailIndex};
use crate::graph::types::VertexId;
use crate::graph::GraphProvider;

/// State tracked during a Dijkstra search
struct DijkstraState {
    seen: VisitedSet,
    mins: Vec<Option<f64>>,
    heap: BinaryHeap<Reverse<HeapEntry>>,
    arena: TrailArena,
    seq: Sequence,
}

impl DijkstraState {
    fn new(vertex_count: usize) -> Self {
        Self {
            seen: VisitedSet::new(vertex_count),
            mins: vec![None; vertex_count],
            heap: BinaryHeap::new(),
            arena: TrailArena::new(),
            seq: Sequence::default(),
        }
    }

    /// Queue `vertex` at `cost` if that improves on the best known cost
    fn relax(&mut self, vertex: VertexId, cost: f64, prev: Option<TrailIndex>) {
        let best = &mut self.mins[vertex.index()];
        if best.is_some_and(|known| cost >= known) {
            return;
        }
        *best = Some(cost);
        let trail = self.arena.push(vertex, prev);
        self.heap.push(Reverse(HeapEntry {
            cost,
            seq: self.seq.next(),
            trail,
        }));
    }
}

/// Dijkstra's shortest path from `origin` to `goal`.
///
/// The first time a vertex is popped its cost is final (weights are
/// non-negative, enforced when the graph is built). A neighbor is queued only
/// when it improves on its best known cost. Returns no cost when the goal is
/// unreachable.
pub fn search(provider: &dyn GraphProvider, origin: VertexId, goal: VertexId) -> Traversal {
    if origin == goal {
        return Traversal::trivial(origin, true);
    }

    let mut state = DijkstraState::new(provider.vertex_count());
    let mut expanded = 0;
    state.relax(origin, 0.0, None);

    while let Some(Reverse(entry)) = state.heap.pop() {
        let current = state.arena.vertex(entry.trail);
        if !state.seen.insert(current) {
            continue;
        }

        if current == goal {
            let path = state.arena.flatten(entry.trail);
            return Traversal::found(state.seen, path, expanded).with_cost(entry.cost);
        }
        expanded += 1;

        for neighbor in provider.outgoing(current) {
            if state.seen.contains(neighbor.vertex) {
                continue;
            }
            state.relax(
                neighbor.vertex,
                entry.cost + neighbor.weight,
                Some(entry.trail),
            );
        }
    }

    Traversal::no_path(state.seen, expanded)
}
