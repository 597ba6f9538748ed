use crate::graph::algos::shared::{Traversal, VisitedSet};
use crate::graph::path::unwind_parents;
use crate::graph::types::{Neighbor, VertexId};
use crate::graph::GraphProvider;

/// Which way a half-search walks the edges
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Heading {
    /// From the origin along outgoing edges
    Forward,
    /// From the goal along incoming edges
    Backward,
}

/// One half of a bidirectional search, rooted at its own endpoint
struct HalfSearch {
    root: VertexId,
    heading: Heading,
    reached: Vec<bool>,
    parents: Vec<Option<VertexId>>,
    frontier: Vec<VertexId>,
}

impl HalfSearch {
    fn new(vertex_count: usize, root: VertexId, heading: Heading) -> Self {
        let mut reached = vec![false; vertex_count];
        reached[root.index()] = true;
        Self {
            root,
            heading,
            reached,
            parents: vec![None; vertex_count],
            frontier: vec![root],
        }
    }

    fn has_reached(&self, v: VertexId) -> bool {
        self.reached[v.index()]
    }

    fn edges<'a>(&self, provider: &'a dyn GraphProvider, v: VertexId) -> &'a [Neighbor] {
        match self.heading {
            Heading::Forward => provider.outgoing(v),
            Heading::Backward => provider.incoming(v),
        }
    }

    /// Chain from this half's root to `v`, root first
    fn chain_to(&self, v: VertexId) -> Vec<VertexId> {
        unwind_parents(&self.parents, self.root, v)
    }

    /// Expand every vertex of the active frontier by one hop.
    ///
    /// Expanded vertices are retired; newly reached ones form the next
    /// frontier. Returns the meeting vertex as soon as a neighbor is found
    /// that the other half has already reached.
    fn expand(
        &mut self,
        provider: &dyn GraphProvider,
        other: &HalfSearch,
        visited: &mut VisitedSet,
        expanded: &mut usize,
    ) -> Option<VertexId> {
        let frontier = std::mem::take(&mut self.frontier);
        let mut next = Vec::new();

        for current in frontier {
            *expanded += 1;

            for neighbor in self.edges(provider, current) {
                let n = neighbor.vertex;
                if self.has_reached(n) {
                    continue;
                }
                self.reached[n.index()] = true;
                self.parents[n.index()] = Some(current);
                visited.insert(n);

                if other.has_reached(n) {
                    return Some(n);
                }
                next.push(n);
            }
        }

        self.frontier = next;
        None
    }
}

/// Breadth-first search run simultaneously from `origin` and from `goal`.
///
/// The backward half follows incoming edges so that directed graphs are
/// searched correctly. Each round expands the whole forward frontier, then the
/// whole backward frontier. When one half reaches a vertex the other half
/// already owns, the forward chain to that vertex and the reversed backward
/// chain from it are joined; the meeting vertex appears once in the path.
pub fn search(provider: &dyn GraphProvider, origin: VertexId, goal: VertexId) -> Traversal {
    if origin == goal {
        return Traversal::trivial(origin, false);
    }

    let vertex_count = provider.vertex_count();
    let mut visited = VisitedSet::new(vertex_count);
    let mut forward = HalfSearch::new(vertex_count, origin, Heading::Forward);
    let mut backward = HalfSearch::new(vertex_count, goal, Heading::Backward);
    let mut expanded = 0;

    visited.insert(origin);
    visited.insert(goal);

    while !forward.frontier.is_empty() && !backward.frontier.is_empty() {
        if let Some(meet) = forward.expand(provider, &backward, &mut visited, &mut expanded) {
            return joined(&forward, &backward, meet, visited, expanded);
        }
        if let Some(meet) = backward.expand(provider, &forward, &mut visited, &mut expanded) {
            return joined(&forward, &backward, meet, visited, expanded);
        }
    }

    Traversal::no_path(visited, expanded)
}

fn joined(
    forward: &HalfSearch,
    backward: &HalfSearch,
    meet: VertexId,
    visited: VisitedSet,
    expanded: usize,
) -> Traversal {
    let mut path = forward.chain_to(meet);
    let mut tail = backward.chain_to(meet);
    tail.reverse();
    // `tail` starts at the meeting vertex, which `path` already ends with
    path.extend(tail.into_iter().skip(1));

    let mut traversal = Traversal::found(visited, path, expanded);
    traversal.meeting_point = Some(meet);
    traversal
}
