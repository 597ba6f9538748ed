use std::cmp::Ordering;

use crate::graph::path::TrailIndex;
use crate::graph::types::{SearchOutcome, VertexId};

/// Visited vertices in first-visit order
#[derive(Debug, Clone)]
pub struct VisitedSet {
    order: Vec<VertexId>,
    seen: Vec<bool>,
}

impl VisitedSet {
    pub fn new(vertex_count: usize) -> Self {
        Self {
            order: Vec::new(),
            seen: vec![false; vertex_count],
        }
    }

    /// Mark `v` visited. Returns false if it already was.
    pub fn insert(&mut self, v: VertexId) -> bool {
        if self.seen[v.index()] {
            return false;
        }
        self.seen[v.index()] = true;
        self.order.push(v);
        true
    }

    pub fn contains(&self, v: VertexId) -> bool {
        self.seen[v.index()]
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn into_order(self) -> Vec<VertexId> {
        self.order
    }
}

/// Raw outcome of a strategy, in vertex ids
#[derive(Debug, Clone, PartialEq)]
pub struct Traversal {
    pub outcome: SearchOutcome,
    pub visited: Vec<VertexId>,
    pub path: Vec<VertexId>,
    pub cost: Option<f64>,
    pub expanded: usize,
    pub rounds: usize,
    pub meeting_point: Option<VertexId>,
}

impl Traversal {
    /// Result for `origin == goal`
    pub fn trivial(origin: VertexId, weighted: bool) -> Self {
        Self {
            outcome: SearchOutcome::Found,
            visited: vec![origin],
            path: vec![origin],
            cost: weighted.then_some(0.0),
            expanded: 0,
            rounds: 1,
            meeting_point: None,
        }
    }

    pub fn found(visited: VisitedSet, path: Vec<VertexId>, expanded: usize) -> Self {
        Self {
            outcome: SearchOutcome::Found,
            visited: visited.into_order(),
            path,
            cost: None,
            expanded,
            rounds: 1,
            meeting_point: None,
        }
    }

    pub fn no_path(visited: VisitedSet, expanded: usize) -> Self {
        Self::unfinished(SearchOutcome::NoPath, visited, expanded)
    }

    pub fn limit_exhausted(visited: VisitedSet, expanded: usize) -> Self {
        Self::unfinished(SearchOutcome::LimitExhausted, visited, expanded)
    }

    fn unfinished(outcome: SearchOutcome, visited: VisitedSet, expanded: usize) -> Self {
        Self {
            outcome,
            visited: visited.into_order(),
            path: Vec::new(),
            cost: None,
            expanded,
            rounds: 1,
            meeting_point: None,
        }
    }

    pub fn with_cost(mut self, cost: f64) -> Self {
        self.cost = Some(cost);
        self
    }
}

/// Priority queue entry ordered by cost, then by insertion sequence.
///
/// `BinaryHeap` is a max-heap; wrap entries in `Reverse` to pop the cheapest
/// (and among equal costs, the earliest inserted) first.
#[derive(Debug, Clone, Copy)]
pub struct HeapEntry {
    pub cost: f64,
    pub seq: u64,
    pub trail: TrailIndex,
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for HeapEntry {}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cost
            .total_cmp(&other.cost)
            .then_with(|| self.seq.cmp(&other.seq))
    }
}

/// Monotonic insertion counter for stable heap ordering
#[derive(Debug, Default)]
pub struct Sequence(u64);

impl Sequence {
    pub fn next(&mut self) -> u64 {
        let n = self.0;
        self.0 += 1;
        n
    }
}
