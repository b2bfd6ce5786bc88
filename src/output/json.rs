//! JSON output formatting
//!
//! This module serializes a full comparison run with support for:
//! - Run metadata (version, timestamp, geometry, disk timings)
//! - Per-policy results including the visit sequence
//! - Machine-safe throughput (serde_json renders non-finite floats as null)

use crate::config::Config;
use crate::metrics::PolicyReport;
use crate::Result;
use anyhow::Context;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::path::Path;

/// Throughput with a numeric field and a human-readable format
///
/// The numeric field is omitted when the run had zero head movement,
/// where throughput is unbounded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonThroughput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requests_per_cylinder: Option<f64>,
    pub human: String,
}

impl JsonThroughput {
    pub fn new(throughput: f64) -> Self {
        if throughput.is_finite() {
            Self {
                requests_per_cylinder: Some(throughput),
                human: format!("{:.4}", throughput),
            }
        } else {
            Self {
                requests_per_cylinder: None,
                human: "Inf".to_string(),
            }
        }
    }
}

/// Per-policy results for one comparison run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonPolicyReport {
    pub algorithm: String,
    pub total_movement: u64,
    pub avg_seek: f64,
    pub max_seek: u32,
    pub std_dev_seek: f64,
    pub throughput: JsonThroughput,
    pub avg_response_time_ms: f64,
    pub visit_sequence: Vec<u32>,
}

impl From<&PolicyReport> for JsonPolicyReport {
    fn from(report: &PolicyReport) -> Self {
        Self {
            algorithm: report.policy.name().to_string(),
            total_movement: report.total_movement,
            avg_seek: report.avg_seek,
            max_seek: report.max_seek,
            std_dev_seek: report.std_dev_seek,
            throughput: JsonThroughput::new(report.throughput),
            avg_response_time_ms: report.avg_response_time_ms,
            visit_sequence: report.sequence.clone(),
        }
    }
}

/// Complete run summary written by `--json-output`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRunSummary {
    pub version: String,
    pub timestamp: String,
    pub start_head: u32,
    pub max_cylinder: u32,
    pub seek_time_ms: f64,
    pub rotational_latency_ms: f64,
    pub transfer_time_ms: f64,
    pub request_count: usize,
    pub requests: Vec<u32>,
    pub results: Vec<JsonPolicyReport>,
}

impl JsonRunSummary {
    pub fn new(config: &Config, requests: &[u32], reports: &[PolicyReport]) -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            timestamp: Utc::now().to_rfc3339(),
            start_head: config.geometry.start_head,
            max_cylinder: config.geometry.max_cylinder,
            seek_time_ms: config.disk.seek_time_per_cylinder_ms,
            rotational_latency_ms: config.disk.rotational_latency_ms,
            transfer_time_ms: config.disk.transfer_time_per_request_ms,
            request_count: requests.len(),
            requests: requests.to_vec(),
            results: reports.iter().map(JsonPolicyReport::from).collect(),
        }
    }
}

/// Write the run summary to a file as pretty-printed JSON
pub fn write_json_summary(output_path: &Path, summary: &JsonRunSummary) -> Result<()> {
    let file = File::create(output_path)
        .with_context(|| format!("Failed to create JSON output file: {}", output_path.display()))?;
    serde_json::to_writer_pretty(file, summary)
        .with_context(|| format!("Failed to write JSON output: {}", output_path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{GeometryConfig, OutputConfig, QueueConfig};
    use crate::metrics::{evaluate, DiskParams};
    use crate::sched::Policy;
    use std::fs;

    fn sample_config() -> Config {
        Config {
            geometry: GeometryConfig {
                start_head: 50,
                max_cylinder: 199,
            },
            disk: DiskParams::default(),
            queue: QueueConfig::default(),
            output: OutputConfig::default(),
        }
    }

    #[test]
    fn test_finite_throughput_keeps_numeric_field() {
        let throughput = JsonThroughput::new(0.017);
        assert_eq!(throughput.requests_per_cylinder, Some(0.017));
        assert_eq!(throughput.human, "0.0170");
    }

    #[test]
    fn test_infinite_throughput_drops_numeric_field() {
        let throughput = JsonThroughput::new(f64::INFINITY);
        assert_eq!(throughput.requests_per_cylinder, None);
        assert_eq!(throughput.human, "Inf");

        let json = serde_json::to_string(&throughput).unwrap();
        assert!(!json.contains("requests_per_cylinder"));
        assert!(json.contains("\"Inf\""));
    }

    #[test]
    fn test_policy_report_conversion() {
        let params = DiskParams::default();
        let report = evaluate(Policy::Fcfs, vec![50, 95, 10], 2, &params);
        let json_report = JsonPolicyReport::from(&report);

        assert_eq!(json_report.algorithm, "FCFS");
        assert_eq!(json_report.total_movement, 130);
        assert_eq!(json_report.visit_sequence, vec![50, 95, 10]);
    }

    #[test]
    fn test_run_summary_round_trip() {
        let config = sample_config();
        let requests = vec![95, 10, 70];
        let params = DiskParams::default();
        let reports: Vec<PolicyReport> = Policy::ALL
            .iter()
            .map(|policy| {
                evaluate(
                    *policy,
                    policy.sequence(50, 199, &requests),
                    requests.len(),
                    &params,
                )
            })
            .collect();

        let summary = JsonRunSummary::new(&config, &requests, &reports);
        assert_eq!(summary.version, env!("CARGO_PKG_VERSION"));
        assert_eq!(summary.request_count, 3);
        assert_eq!(summary.results.len(), Policy::ALL.len());

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("summary.json");
        write_json_summary(&path, &summary).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        let parsed: JsonRunSummary = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed.start_head, 50);
        assert_eq!(parsed.max_cylinder, 199);
        assert_eq!(parsed.requests, requests);
        assert_eq!(parsed.results[0].algorithm, "FCFS");
    }

    #[test]
    fn test_write_fails_for_missing_directory() {
        let config = sample_config();
        let summary = JsonRunSummary::new(&config, &[], &[]);
        let result = write_json_summary(Path::new("/nonexistent/dir/out.json"), &summary);
        assert!(result.is_err());
        let message = format!("{:#}", result.unwrap_err());
        assert!(message.contains("/nonexistent/dir/out.json"));
    }
}
