//! CLI argument parsing for rota
//!
//! Uses clap for argument parsing.
//! Supports global flags: --config, --edges, --locations, --format, --quiet, --verbose

pub mod output;
pub mod parse;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use output::OutputFormat;
use output::parse_format;
use parse::parse_strategy;
use rota_core::config::ConfigOverrides;
use rota_core::graph::Strategy;

/// Rota - route finder over weighted location graphs
#[derive(Parser, Debug)]
#[command(name = "rota")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Configuration file (default: ./rota.toml if present)
    #[arg(long, global = true, env = "ROTA_CONFIG")]
    pub config: Option<PathBuf>,

    /// Edge table (origin,neighbor,weight)
    #[arg(long, global = true)]
    pub edges: Option<PathBuf>,

    /// Location table (id,x,y)
    #[arg(long, global = true)]
    pub locations: Option<PathBuf>,

    /// Also add the reverse of every edge (cannot turn off `undirected = true` from rota.toml)
    #[arg(long, global = true)]
    pub undirected: bool,

    /// Tables have no header row
    #[arg(long, global = true)]
    pub no_header: bool,

    /// Output format
    #[arg(long, global = true, value_parser = parse_format, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directive (e.g. `debug`, `rota_core=trace`)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Table settings given on the command line
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            edges: self.edges.clone(),
            locations: self.locations.clone(),
            undirected: self.undirected,
            no_header: self.no_header,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Find a route between two locations
    Route {
        /// Origin location
        from: String,

        /// Destination location
        to: String,

        /// Search strategy (bfs, dfs, dls, ids, bidi, ucs, dijkstra)
        #[arg(long, short, value_parser = parse_strategy)]
        strategy: Option<Strategy>,

        /// Step limit for depth-limited and iterative-deepening searches
        #[arg(long, short, allow_negative_numbers = true)]
        limit: Option<i64>,

        /// Show the visited sequence grouped by expanded vertex
        #[arg(long)]
        groups: bool,
    },

    /// Run every strategy between two locations and compare the results
    Compare {
        /// Origin location
        from: String,

        /// Destination location
        to: String,

        /// Step limit for depth-limited and iterative-deepening searches
        #[arg(long, short, allow_negative_numbers = true)]
        limit: Option<i64>,
    },

    /// List locations with their degree and coordinates
    Vertices,

    /// List the edges leaving a location, in stored order
    Neighbors {
        /// Location to inspect
        id: String,
    },

    /// List each connected pair of locations once, ignoring direction
    Edges,

    /// Show the effective configuration
    Config,

    /// Write a rota.toml in the current directory
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}
