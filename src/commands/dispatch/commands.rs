//! Command implementations for all rota commands

use crate::cli::Commands;
use crate::commands::dispatch::command::{Command, CommandContext};
use crate::commands::{compare, config, edges, init, neighbors, route, vertices};
use rota_core::error::Result;
use rota_core::graph::StrategyParams;

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Commands::Route {
                from,
                to,
                strategy,
                limit,
                groups,
            } => {
                let config = ctx.config()?;
                let graph = ctx.load_graph(&config)?;
                let options = route::RouteOptions {
                    strategy: strategy.unwrap_or(config.default_strategy),
                    params: limit.map_or_else(|| config.params(), StrategyParams::from_signed),
                    groups: *groups,
                };
                route::execute(ctx.cli, &graph, from, to, options)
            }
            Commands::Compare { from, to, limit } => {
                let config = ctx.config()?;
                let graph = ctx.load_graph(&config)?;
                let params = limit.map_or_else(|| config.params(), StrategyParams::from_signed);
                compare::execute(ctx.cli, &graph, from, to, params)
            }
            Commands::Vertices => {
                let config = ctx.config()?;
                let graph = ctx.load_graph(&config)?;
                let locations = ctx.load_locations(&config, &graph)?;
                vertices::execute(ctx.cli, &graph, &locations)
            }
            Commands::Neighbors { id } => {
                let config = ctx.config()?;
                let graph = ctx.load_graph(&config)?;
                neighbors::execute(ctx.cli, &graph, id)
            }
            Commands::Edges => {
                let config = ctx.config()?;
                let graph = ctx.load_graph(&config)?;
                edges::execute(ctx.cli, &graph)
            }
            Commands::Config => config::execute(ctx.cli, &ctx.config()?),
            Commands::Init { force } => init::execute(ctx.cli, &ctx.cwd, *force),
        }
    }
}
