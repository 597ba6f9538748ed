//! Route command
use crate::cli::{Cli, OutputFormat};
use rota_core::error::Result;
use rota_core::format::format_cost;
use rota_core::graph::{
    execute as find_route, Graph, SearchOutcome, SearchResult, Strategy, StrategyParams,
};
use rota_core::records::{format_group_line, format_route_header, format_route_lines};

/// Options for a single route query
#[derive(Debug, Clone, Copy)]
pub struct RouteOptions {
    pub strategy: Strategy,
    pub params: StrategyParams,
    pub groups: bool,
}

/// Execute the route command
pub fn execute(cli: &Cli, graph: &Graph, from: &str, to: &str, opts: RouteOptions) -> Result<()> {
    let result = find_route(graph, from, to, opts.strategy, opts.params)?;

    match cli.format {
        OutputFormat::Human => output_human(cli, graph, &result, opts),
        OutputFormat::Json => output_json(graph, &result, opts)?,
        OutputFormat::Records => output_records(graph, &result, opts),
    }

    Ok(())
}

fn plural(n: usize, word: &str) -> String {
    if n == 1 {
        format!("{n} {word}")
    } else {
        format!("{n} {word}s")
    }
}

fn output_human(cli: &Cli, graph: &Graph, result: &SearchResult, opts: RouteOptions) {
    println!(
        "Route: {} -> {} ({})",
        result.origin,
        result.goal,
        result.strategy.label()
    );

    match result.outcome {
        SearchOutcome::Found => println!(
            "Path found: {}: {}",
            plural(result.steps(), "step"),
            result.path.join(" -> ")
        ),
        SearchOutcome::NoPath => {
            println!("No path found from {} to {}", result.origin, result.goal)
        }
        SearchOutcome::LimitExhausted => println!(
            "Step limit {} reached before {} was found",
            opts.params.limit, result.goal
        ),
    }

    if let Some(cost) = result.cost {
        println!("Cost: {}", format_cost(cost));
    }
    if let Some(meeting) = &result.meeting_point {
        println!("Met at: {}", meeting);
    }

    if cli.quiet {
        return;
    }

    println!(
        "Visited ({}): {}",
        result.visited.len(),
        result.visited.join(", ")
    );
    println!("Expanded: {}", result.expanded);
    if result.strategy == Strategy::IterativeDeepening {
        println!("Rounds: {}", result.rounds);
    }

    if opts.groups {
        println!("Expansion:");
        for group in result.expansion_groups(graph) {
            println!("  {} -> {}", group.vertex, group.reached.join(", "));
        }
    }
}

fn output_json(graph: &Graph, result: &SearchResult, opts: RouteOptions) -> Result<()> {
    let mut output = serde_json::to_value(result)?;
    if opts.groups {
        output["groups"] = serde_json::to_value(result.expansion_groups(graph))?;
    }
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn output_records(graph: &Graph, result: &SearchResult, opts: RouteOptions) {
    println!("{}", format_route_header(result));
    for line in format_route_lines(result) {
        println!("{}", line);
    }
    if opts.groups {
        for group in result.expansion_groups(graph) {
            println!("{}", format_group_line(&group));
        }
    }
}
