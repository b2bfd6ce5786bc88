//! CLI to Config conversion utilities

use anyhow::{Context, Result};

use crate::config::cli::{Cli, PatternArg};
use crate::metrics::DiskParams;
use crate::workload::PatternType;

/// Parse a comma-separated cylinder list (e.g., "98, 183,37,122").
///
/// Empty segments are skipped, so trailing commas are harmless.
pub fn parse_queue(s: &str) -> Result<Vec<u32>> {
    let mut requests = Vec::new();
    for segment in s.split(',') {
        let segment = segment.trim();
        if segment.is_empty() {
            continue;
        }
        let value: u32 = segment
            .parse()
            .with_context(|| format!("Invalid cylinder number in queue: {}", segment))?;
        requests.push(value);
    }
    Ok(requests)
}

/// Half a revolution at the given spindle speed, in milliseconds
pub fn rotational_latency_from_rpm(rpm: f64) -> f64 {
    30000.0 / rpm
}

/// Time to move one request's worth of data, in milliseconds
pub fn transfer_time_from_rate(rate_mbps: f64, request_size_kb: f64) -> f64 {
    let rate_kb_per_ms = rate_mbps * 1024.0 / 1000.0;
    request_size_kb / rate_kb_per_ms
}

/// Convert CLI PatternArg to workload PatternType
pub fn convert_pattern(pattern: PatternArg) -> PatternType {
    match pattern {
        PatternArg::Uniform => PatternType::Uniform,
        PatternArg::Sequential => PatternType::Sequential,
        PatternArg::Clustered => PatternType::Clustered,
        PatternArg::Mixed => PatternType::Mixed,
    }
}

/// Resolve the disk timing parameters from CLI flags, deriving from
/// physical specs where those were given instead of direct times.
pub fn disk_params_from_cli(cli: &Cli) -> DiskParams {
    let defaults = DiskParams::default();

    let rotational_latency_ms = match (cli.rotational_latency_ms, cli.rpm) {
        (Some(ms), _) => ms,
        (None, Some(rpm)) => rotational_latency_from_rpm(rpm),
        (None, None) => defaults.rotational_latency_ms,
    };
    let transfer_time_per_request_ms = match (cli.transfer_time_ms, cli.transfer_rate_mbps) {
        (Some(ms), _) => ms,
        (None, Some(rate)) => transfer_time_from_rate(rate, cli.request_size_kb),
        (None, None) => defaults.transfer_time_per_request_ms,
    };

    DiskParams {
        seek_time_per_cylinder_ms: cli
            .seek_time_ms
            .unwrap_or(defaults.seek_time_per_cylinder_ms),
        rotational_latency_ms,
        transfer_time_per_request_ms,
    }
}
