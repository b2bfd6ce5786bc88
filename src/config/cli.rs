//! CLI argument parsing using clap

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Queue pattern choices exposed on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PatternArg {
    /// Every cylinder equally likely
    Uniform,
    /// Small steps that bounce off the disk edges
    Sequential,
    /// Hot spots around a few cluster centers
    Clustered,
    /// 60% uniform background plus 40% clustered
    Mixed,
}

/// seeksim - Disk head-scheduling simulator
#[derive(Parser, Debug)]
#[command(name = "seeksim")]
#[command(version, about, long_about = None)]
pub struct Cli {
    // === Geometry ===
    /// Cylinder the head starts on
    #[arg(long)]
    pub start_head: Option<u32>,

    /// Highest addressable cylinder
    #[arg(long)]
    pub max_cylinder: Option<u32>,

    // === Request queue ===
    /// Comma-separated request queue (e.g. "98,183,37,122")
    #[arg(short = 'q', long)]
    pub queue: Option<String>,

    /// Pattern for generated queues (default: uniform)
    #[arg(long, value_enum)]
    pub pattern: Option<PatternArg>,

    /// Number of requests to generate (default: 20)
    #[arg(short = 'n', long = "requests")]
    pub requests: Option<usize>,

    /// Cluster count for the clustered pattern (default: 4)
    #[arg(long)]
    pub clusters: Option<usize>,

    /// RNG seed for reproducible generated queues
    #[arg(long)]
    pub seed: Option<u64>,

    // === Disk timing ===
    /// Seek time per cylinder in milliseconds (default: 0.1)
    #[arg(long)]
    pub seek_time_ms: Option<f64>,

    /// Rotational latency per request in milliseconds
    #[arg(long)]
    pub rotational_latency_ms: Option<f64>,

    /// Transfer time per request in milliseconds
    #[arg(long)]
    pub transfer_time_ms: Option<f64>,

    /// Spindle speed; rotational latency is derived as half a revolution
    #[arg(long)]
    pub rpm: Option<f64>,

    /// Sustained transfer rate in MB/s; transfer time is derived from it
    #[arg(long)]
    pub transfer_rate_mbps: Option<f64>,

    /// Request size in KB, used together with --transfer-rate-mbps
    #[arg(long, default_value = "4.0")]
    pub request_size_kb: f64,

    // === Input modes ===
    /// Load configuration from a TOML file
    #[arg(short = 'c', long)]
    pub config: Option<PathBuf>,

    /// Prompt for all parameters interactively
    #[arg(short = 'i', long)]
    pub interactive: bool,

    // === Output ===
    /// Write a JSON run summary to this path
    #[arg(long)]
    pub json_output: Option<PathBuf>,

    /// Write per-policy CSV rows to this path
    #[arg(long)]
    pub csv_output: Option<PathBuf>,

    /// Print the full visit sequence for every policy
    #[arg(long)]
    pub show_sequences: bool,

    /// Skip the ASCII queue plot for generated queues
    #[arg(long)]
    pub no_plot: bool,

    /// Validate configuration and exit without simulating
    #[arg(long)]
    pub dry_run: bool,
}

impl Cli {
    /// Parse CLI arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate CLI arguments
    pub fn validate(&self) -> anyhow::Result<()> {
        // Interactive and file-based runs collect geometry later
        if !self.interactive && self.config.is_none() {
            if self.start_head.is_none() {
                anyhow::bail!("--start-head is required (or use --config / --interactive)");
            }
            if self.max_cylinder.is_none() {
                anyhow::bail!("--max-cylinder is required (or use --config / --interactive)");
            }
        }

        // Derived and explicit timing flags are mutually exclusive
        if self.rpm.is_some() && self.rotational_latency_ms.is_some() {
            anyhow::bail!("--rpm and --rotational-latency-ms cannot be combined");
        }
        if self.transfer_rate_mbps.is_some() && self.transfer_time_ms.is_some() {
            anyhow::bail!("--transfer-rate-mbps and --transfer-time-ms cannot be combined");
        }

        // Validate timing values
        if let Some(seek) = self.seek_time_ms {
            if seek < 0.0 {
                anyhow::bail!("seek time must not be negative");
            }
        }
        if let Some(rpm) = self.rpm {
            if rpm <= 0.0 {
                anyhow::bail!("rpm must be positive");
            }
        }
        if let Some(rate) = self.transfer_rate_mbps {
            if rate <= 0.0 {
                anyhow::bail!("transfer rate must be positive");
            }
        }
        if self.request_size_kb <= 0.0 {
            anyhow::bail!("request size must be positive");
        }

        // Validate queue generation parameters
        if self.requests == Some(0) {
            anyhow::bail!("request count must be at least 1");
        }
        if self.clusters == Some(0) {
            anyhow::bail!("cluster count must be at least 1");
        }

        Ok(())
    }
}
