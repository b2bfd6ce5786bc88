//! seeksim - Disk head-scheduling simulator
//!
//! seeksim replays a queue of cylinder requests through the classic disk
//! head-scheduling policies and compares the head movement and service
//! times each one produces.
//!
//! # Architecture
//!
//! - **Scheduling policies**: FCFS, SSTF, SCAN, C-SCAN, LOOK, C-LOOK, HDSA
//! - **Synthetic workloads**: uniform, sequential, clustered, mixed queue patterns
//! - **Seek metrics**: total movement, per-seek statistics, estimated service times
//! - **Flexible input**: CLI flags, TOML config files, interactive prompts
//! - **Export**: summary tables, ASCII plots, JSON and CSV reports

pub mod config;
pub mod metrics;
pub mod output;
pub mod runner;
pub mod sched;
pub mod workload;

// Re-export commonly used types
pub use config::Config;
pub use metrics::{DiskParams, PolicyReport};
pub use sched::Policy;

/// Result type used throughout seeksim
pub type Result<T> = anyhow::Result<T>;
