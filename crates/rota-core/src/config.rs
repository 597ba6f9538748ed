//! Configuration for rota
//!
//! Configuration is stored in `rota.toml`. Paths inside the file are relative
//! to the directory containing it.

pub mod types;

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, RotaError};
use crate::graph::{EdgeMode, StrategyParams};

pub use types::{ConfigOverrides, RouteConfig, CONFIG_FILE_NAME};

impl RouteConfig {
    /// Load configuration from a file, resolving table paths against its directory
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| RotaError::io_operation("read config", path.display(), e))?;
        let mut config: RouteConfig = toml::from_str(&content)?;

        if let Some(base) = path.parent() {
            config.edges = config.edges.map(|p| resolve(base, p));
            config.locations = config.locations.map(|p| resolve(base, p));
        }

        tracing::debug!(path = %path.display(), "config_loaded");
        Ok(config)
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)
            .map_err(|e| RotaError::io_operation("write config", path.display(), e))?;
        Ok(())
    }

    /// Find the configuration to use.
    ///
    /// An explicit path must exist. Otherwise `rota.toml` in `cwd` is used when
    /// present, and defaults when not.
    pub fn discover(explicit: Option<&Path>, cwd: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        let candidate = cwd.join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            return Self::load(&candidate);
        }

        tracing::debug!(cwd = %cwd.display(), "no config file, using defaults");
        Ok(Self::default())
    }

    /// Apply command-line values; any value given wins over the file
    pub fn apply(&mut self, overrides: &ConfigOverrides) {
        if let Some(edges) = &overrides.edges {
            self.edges = Some(edges.clone());
        }
        if let Some(locations) = &overrides.locations {
            self.locations = Some(locations.clone());
        }
        if overrides.undirected {
            self.undirected = true;
        }
        if overrides.no_header {
            self.has_header = false;
        }
    }

    pub fn edge_mode(&self) -> EdgeMode {
        if self.undirected {
            EdgeMode::Undirected
        } else {
            EdgeMode::Directed
        }
    }

    pub fn params(&self) -> StrategyParams {
        StrategyParams::from_signed(self.step_limit)
    }

    /// Path of the edge table, or an error if none is configured
    pub fn edge_table(&self) -> Result<&Path> {
        self.edges.as_deref().ok_or(RotaError::MissingEdgeTable)
    }
}

fn resolve(base: &Path, path: PathBuf) -> PathBuf {
    if path.is_absolute() {
        path
    } else {
        base.join(path)
    }
}
