//! Engine tuning configuration
//!
//! An optional TOML file the driver can load; every field has a default so a
//! missing file or a partial file is fine. CLI flags take precedence over
//! anything loaded here.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::graph::NODE_RADIUS;

/// Tunable engine and driver defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Pointer hit-test radius around each node, in world units
    pub hit_radius: f32,
    /// Weight used when an edge omits one
    pub default_edge_weight: f32,
    /// Milliseconds between paced steps (0 = as fast as possible)
    pub step_delay_ms: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            hit_radius: NODE_RADIUS,
            default_edge_weight: 1.0,
            step_delay_ms: 100,
        }
    }
}

impl EngineConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }
}
