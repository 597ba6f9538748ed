//! Search strategy implementations
//!
//! Contains one module per strategy:
//! - `bfs`: Breadth-first search, shortest by hop count
//! - `dfs`: Depth-first search, optionally bounded by a step limit
//! - `limited`: Depth-limited and iterative-deepening search
//! - `bidirectional`: Breadth-first search from both endpoints
//! - `ucs`: Uniform-cost search without visited pruning
//! - `dijkstra`: Dijkstra's shortest path
//! - `shared`: Common utilities used by multiple strategies

pub mod bfs;
pub mod bidirectional;
pub mod dfs;
pub mod dijkstra;
pub mod limited;
pub mod shared;
pub mod ucs;

pub use shared::{Traversal, VisitedSet};
