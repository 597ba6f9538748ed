//! Graph construction and route search
//!
//! Provides the building blocks of a route query:
//! - `store`: adjacency construction from edge triples
//! - `algos`: one module per search strategy
//! - `path`: path reconstruction from trails and parent tables
//! - `query`: strategy dispatch returning a normalized `SearchResult`

pub mod algos;
pub mod path;
pub mod provider;
pub mod query;
pub mod store;
pub mod types;

pub use provider::GraphProvider;
pub use query::{compare, execute, expansion_groups, StrategyParams};
pub use store::Graph;
pub use types::{
    EdgeMode, EdgeRecord, ExpansionGroup, Neighbor, RawEdgeRow, SearchOutcome, SearchResult,
    Strategy, VertexId, DEFAULT_STEP_LIMIT,
};
