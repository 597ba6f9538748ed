//! Command trait and context for dispatching commands

use std::env;
use std::path::PathBuf;
use std::time::Instant;

use crate::cli::Cli;
use rota_core::config::RouteConfig;
use rota_core::error::Result;
use rota_core::graph::Graph;
use rota_core::loader::{self, Location};

use super::{trace_command, trace_command_always};

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub cwd: PathBuf,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, start: Instant) -> Result<Self> {
        Ok(Self {
            cli,
            cwd: env::current_dir()?,
            start,
        })
    }

    /// Discover the configuration file and apply command-line overrides
    pub fn config(&self) -> Result<RouteConfig> {
        let mut config = RouteConfig::discover(self.cli.config.as_deref(), &self.cwd)?;
        config.apply(&self.cli.overrides());
        trace_command!(self.cli, self.start, "load_config");
        Ok(config)
    }

    /// Load the edge table named by `config` and build the graph
    pub fn load_graph(&self, config: &RouteConfig) -> Result<Graph> {
        let graph =
            loader::load_edges(config.edge_table()?, config.has_header, config.edge_mode())?;
        trace_command_always!(self.start, "load_graph");
        Ok(graph)
    }

    /// Load the location table, if one is configured.
    ///
    /// Graph vertices without a location are logged as warnings.
    pub fn load_locations(&self, config: &RouteConfig, graph: &Graph) -> Result<Vec<Location>> {
        let Some(path) = &config.locations else {
            return Ok(Vec::new());
        };
        let locations = loader::load_locations(path, config.has_header)?;
        loader::missing_locations(graph, &locations);
        Ok(locations)
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// No-op command (when no subcommand is provided)
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        println!("rota {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Route finder over weighted location graphs.");
        println!();
        println!("Run `rota --help` for usage information.");
        Ok(())
    }
}
