use crate::graph::store::Graph;
use crate::graph::types::{Neighbor, VertexId};

/// Trait for providing adjacency to the search strategies
pub trait GraphProvider {
    fn vertex_count(&self) -> usize;
    fn outgoing(&self, id: VertexId) -> &[Neighbor];
    fn incoming(&self, id: VertexId) -> &[Neighbor];
}

impl GraphProvider for Graph {
    fn vertex_count(&self) -> usize {
        self.vertex_count()
    }

    fn outgoing(&self, id: VertexId) -> &[Neighbor] {
        self.neighbors(id)
    }

    fn incoming(&self, id: VertexId) -> &[Neighbor] {
        self.incoming(id)
    }
}
