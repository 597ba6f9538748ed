//! Config command: print the effective configuration
use crate::cli::{Cli, OutputFormat};
use rota_core::config::RouteConfig;
use rota_core::error::Result;

fn display_path(path: Option<&std::path::Path>) -> String {
    path.map(|p| p.display().to_string())
        .unwrap_or_else(|| "(none)".to_string())
}

/// Execute the config command
pub fn execute(cli: &Cli, config: &RouteConfig) -> Result<()> {
    match cli.format {
        OutputFormat::Human => {
            println!("edges = {}", display_path(config.edges.as_deref()));
            println!("locations = {}", display_path(config.locations.as_deref()));
            println!("has_header = {}", config.has_header);
            println!("undirected = {}", config.undirected);
            println!("default_strategy = {}", config.default_strategy);
            println!("step_limit = {}", config.step_limit);
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(config)?);
        }
        OutputFormat::Records => {
            println!(
                "H rota={} records=1 mode=config",
                env!("CARGO_PKG_VERSION")
            );
            println!(
                "C edges=\"{}\" locations=\"{}\" has_header={} undirected={} default_strategy={} step_limit={}",
                display_path(config.edges.as_deref()),
                display_path(config.locations.as_deref()),
                config.has_header,
                config.undirected,
                config.default_strategy,
                config.step_limit
            );
        }
    }
    Ok(())
}
