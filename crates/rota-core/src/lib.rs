//! Rota Core Library
//!
//! Graph construction and route search for the Rota route finder.

pub mod config;
pub mod error;
pub mod format;
pub mod graph;
pub mod loader;
pub mod logging;
pub mod records;
