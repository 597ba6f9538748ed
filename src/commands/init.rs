//! Init command: write a starter rota.toml
use std::path::Path;

use crate::cli::{Cli, OutputFormat};
use rota_core::bail_usage;
use rota_core::config::{RouteConfig, CONFIG_FILE_NAME};
use rota_core::error::Result;

/// Execute the init command
pub fn execute(cli: &Cli, cwd: &Path, force: bool) -> Result<()> {
    let path = cwd.join(CONFIG_FILE_NAME);
    if path.exists() && !force {
        bail_usage!(format!(
            "{} already exists (use --force to overwrite)",
            path.display()
        ));
    }

    let mut config = RouteConfig::default();
    config.apply(&cli.overrides());
    config.save(&path)?;
    tracing::debug!(path = %path.display(), "config_written");

    match cli.format {
        OutputFormat::Human => {
            if !cli.quiet {
                println!("Wrote {}", path.display());
            }
        }
        OutputFormat::Json => {
            let output = serde_json::json!({ "path": path.display().to_string() });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Records => {
            println!(
                "H rota={} records=1 mode=init path=\"{}\"",
                env!("CARGO_PKG_VERSION"),
                path.display()
            );
        }
    }
    Ok(())
}
