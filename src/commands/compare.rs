//! Compare command: every strategy on the same endpoints
use crate::cli::{Cli, OutputFormat};
use rota_core::error::Result;
use rota_core::format::format_cost;
use rota_core::graph::{compare as compare_strategies, Graph, SearchResult, StrategyParams};
use rota_core::records::{format_compare_header, format_compare_line};

/// Execute the compare command
pub fn execute(
    cli: &Cli,
    graph: &Graph,
    from: &str,
    to: &str,
    params: StrategyParams,
) -> Result<()> {
    let results = compare_strategies(graph, from, to, params)?;

    match cli.format {
        OutputFormat::Human => output_human(cli, from, to, &results),
        OutputFormat::Json => {
            let output = serde_json::json!({
                "from": from,
                "to": to,
                "limit": params.limit,
                "results": results,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Records => {
            println!("{}", format_compare_header(from, to, results.len()));
            for result in &results {
                println!("{}", format_compare_line(result));
            }
        }
    }

    Ok(())
}

fn output_human(cli: &Cli, from: &str, to: &str, results: &[SearchResult]) {
    if !cli.quiet {
        println!("Route: {} -> {}", from, to);
        println!();
    }
    println!(
        "{:<22} {:<16} {:>5} {:>7} {:>8} {:>8}",
        "Strategy", "Outcome", "Steps", "Visited", "Expanded", "Cost"
    );
    for result in results {
        let cost = result.cost.map(format_cost).unwrap_or_else(|| "-".to_string());
        println!(
            "{:<22} {:<16} {:>5} {:>7} {:>8} {:>8}",
            result.strategy.label(),
            result.outcome.to_string(),
            result.steps(),
            result.visited.len(),
            result.expanded,
            cost
        );
    }
}
