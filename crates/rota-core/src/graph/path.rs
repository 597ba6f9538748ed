//! Path reconstruction utilities for graph traversal
//!
//! Two representations are supported. Strategies that discover each vertex
//! once keep a came-from table and unwind it with [`unwind_parents`].
//! Strategies that may reach a vertex along several competing paths keep a
//! [`TrailArena`]: every queue entry owns an index into the arena and each
//! arena node points at the node it was extended from.

use crate::graph::types::VertexId;

/// Index of a node in a [`TrailArena`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrailIndex(usize);

#[derive(Debug, Clone, Copy)]
struct TrailNode {
    vertex: VertexId,
    prev: Option<TrailIndex>,
}

/// Append-only arena of path prefixes
#[derive(Debug, Default)]
pub struct TrailArena {
    nodes: Vec<TrailNode>,
}

impl TrailArena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Extend the trail ending at `prev` (or start a new one) with `vertex`
    pub fn push(&mut self, vertex: VertexId, prev: Option<TrailIndex>) -> TrailIndex {
        let idx = TrailIndex(self.nodes.len());
        self.nodes.push(TrailNode { vertex, prev });
        idx
    }

    /// Last vertex of the trail
    pub fn vertex(&self, idx: TrailIndex) -> VertexId {
        self.nodes[idx.0].vertex
    }

    /// Whether `vertex` occurs anywhere on the trail ending at `idx`
    pub fn contains(&self, idx: TrailIndex, vertex: VertexId) -> bool {
        self.walk(idx).any(|v| v == vertex)
    }

    /// Flatten the trail ending at `idx` into an origin-first vertex sequence
    pub fn flatten(&self, idx: TrailIndex) -> Vec<VertexId> {
        let mut path: Vec<VertexId> = self.walk(idx).collect();
        path.reverse();
        path
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn walk(&self, idx: TrailIndex) -> impl Iterator<Item = VertexId> + '_ {
        let mut cursor = Some(idx);
        std::iter::from_fn(move || {
            let node = self.nodes[cursor?.0];
            cursor = node.prev;
            Some(node.vertex)
        })
    }
}

/// Unwind a came-from table from `target` back to `origin`.
///
/// Returns the origin-first path. The walk stops early if the chain is broken,
/// in which case the returned path starts at the last reachable ancestor.
pub fn unwind_parents(
    parents: &[Option<VertexId>],
    origin: VertexId,
    target: VertexId,
) -> Vec<VertexId> {
    let mut path = vec![target];
    let mut current = target;

    while current != origin {
        match parents[current.index()] {
            Some(prev) => {
                path.push(prev);
                current = prev;
            }
            None => break,
        }
    }

    path.reverse();
    path
}
