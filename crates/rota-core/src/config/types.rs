//! Configuration type definitions

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::graph::{Strategy, DEFAULT_STEP_LIMIT};

/// File name looked up in the working directory when no `--config` is given
pub const CONFIG_FILE_NAME: &str = "rota.toml";

/// Route finder configuration, read from `rota.toml`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteConfig {
    /// Edge table (`origin,neighbor,weight`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edges: Option<PathBuf>,

    /// Location table (`id,x,y`), optional
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locations: Option<PathBuf>,

    /// Whether both tables start with a header row (default true)
    #[serde(default = "default_has_header")]
    pub has_header: bool,

    /// Mirror every edge record into its reverse entry
    #[serde(default)]
    pub undirected: bool,

    /// Strategy used by `route` when none is given
    #[serde(default)]
    pub default_strategy: Strategy,

    /// Step limit for depth-limited searches; negative values clamp to zero
    #[serde(default = "default_step_limit")]
    pub step_limit: i64,
}

impl Default for RouteConfig {
    fn default() -> Self {
        Self {
            edges: None,
            locations: None,
            has_header: default_has_header(),
            undirected: false,
            default_strategy: Strategy::default(),
            step_limit: default_step_limit(),
        }
    }
}

/// Values given on the command line, applied on top of the file
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigOverrides {
    pub edges: Option<PathBuf>,
    pub locations: Option<PathBuf>,
    pub undirected: bool,
    pub no_header: bool,
}

fn default_has_header() -> bool {
    true
}

fn default_step_limit() -> i64 {
    DEFAULT_STEP_LIMIT as i64
}
