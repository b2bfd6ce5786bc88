//! Configuration module
//!
//! Handles CLI argument parsing, TOML configuration files, interactive
//! prompts, and validation.

pub mod cli;
pub mod cli_convert;
pub mod interactive;
pub mod toml;
pub mod validator;

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::metrics::DiskParams;
use crate::workload::PatternType;

pub use cli::Cli;

fn default_queue_count() -> usize {
    20
}

fn default_clusters() -> usize {
    4
}

/// Complete simulation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub geometry: GeometryConfig,
    #[serde(default)]
    pub disk: DiskParams,
    #[serde(default)]
    pub queue: QueueConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Disk geometry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeometryConfig {
    /// Cylinder the head starts on
    pub start_head: u32,
    /// Highest addressable cylinder
    pub max_cylinder: u32,
}

/// Where the request queue comes from
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueueConfig {
    /// Explicit request list; takes precedence over generation
    pub requests: Option<Vec<u32>>,
    /// Pattern used when generating a queue
    #[serde(default)]
    pub pattern: PatternType,
    /// How many requests to generate
    #[serde(default = "default_queue_count")]
    pub count: usize,
    /// Cluster count for the clustered pattern
    #[serde(default = "default_clusters")]
    pub clusters: usize,
    /// RNG seed for reproducible queues
    pub seed: Option<u64>,
}

impl Default for QueueConfig {
    fn default() -> Self {
        QueueConfig {
            requests: None,
            pattern: PatternType::default(),
            count: default_queue_count(),
            clusters: default_clusters(),
            seed: None,
        }
    }
}

/// Report and export settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Write a JSON run summary to this path
    pub json_output: Option<PathBuf>,
    /// Write per-policy CSV rows to this path
    pub csv_output: Option<PathBuf>,
    /// Print the full visit sequence for every policy
    #[serde(default)]
    pub show_sequences: bool,
    /// Skip the ASCII queue plot for generated queues
    #[serde(default)]
    pub no_plot: bool,
}
