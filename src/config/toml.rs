//! TOML configuration file parsing

use super::*;
use crate::config::cli::Cli;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Parse TOML configuration file
pub fn parse_toml_file(path: &Path) -> Result<Config> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    parse_toml_string(&contents)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

/// Parse TOML configuration from string
pub fn parse_toml_string(contents: &str) -> Result<Config> {
    let config: Config = ::toml::from_str(contents)
        .context("Failed to parse TOML configuration")?;

    Ok(config)
}

/// Merge CLI arguments with TOML configuration (CLI takes precedence)
pub fn merge_cli_with_config(cli: &Cli, mut config: Config) -> Result<Config> {
    // Override geometry
    if let Some(start_head) = cli.start_head {
        config.geometry.start_head = start_head;
    }
    if let Some(max_cylinder) = cli.max_cylinder {
        config.geometry.max_cylinder = max_cylinder;
    }

    // Override queue settings
    if let Some(queue) = &cli.queue {
        config.queue.requests = Some(cli_convert::parse_queue(queue)?);
    }
    if let Some(pattern) = cli.pattern {
        config.queue.pattern = cli_convert::convert_pattern(pattern);
    }
    if let Some(count) = cli.requests {
        config.queue.count = count;
    }
    if let Some(clusters) = cli.clusters {
        config.queue.clusters = clusters;
    }
    if let Some(seed) = cli.seed {
        config.queue.seed = Some(seed);
    }

    // Override disk timing
    if let Some(seek) = cli.seek_time_ms {
        config.disk.seek_time_per_cylinder_ms = seek;
    }
    if let Some(ms) = cli.rotational_latency_ms {
        config.disk.rotational_latency_ms = ms;
    } else if let Some(rpm) = cli.rpm {
        config.disk.rotational_latency_ms = cli_convert::rotational_latency_from_rpm(rpm);
    }
    if let Some(ms) = cli.transfer_time_ms {
        config.disk.transfer_time_per_request_ms = ms;
    } else if let Some(rate) = cli.transfer_rate_mbps {
        config.disk.transfer_time_per_request_ms =
            cli_convert::transfer_time_from_rate(rate, cli.request_size_kb);
    }

    // Override output settings
    if let Some(path) = &cli.json_output {
        config.output.json_output = Some(path.clone());
    }
    if let Some(path) = &cli.csv_output {
        config.output.csv_output = Some(path.clone());
    }
    if cli.show_sequences {
        config.output.show_sequences = true;
    }
    if cli.no_plot {
        config.output.no_plot = true;
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workload::PatternType;
    use clap::Parser;

    #[test]
    fn test_parse_toml_basic() {
        let toml = r#"
[geometry]
start_head = 53
max_cylinder = 199

[queue]
requests = [98, 183, 37, 122, 14, 124, 65, 67]
"#;
        let config = parse_toml_string(toml).unwrap();
        assert_eq!(config.geometry.start_head, 53);
        assert_eq!(config.geometry.max_cylinder, 199);
        assert_eq!(
            config.queue.requests,
            Some(vec![98, 183, 37, 122, 14, 124, 65, 67])
        );
        // Omitted sections fall back to defaults.
        assert_eq!(config.disk.rotational_latency_ms, 4.0);
        assert_eq!(config.queue.count, 20);
        assert!(!config.output.show_sequences);
    }

    #[test]
    fn test_parse_toml_generated_queue() {
        let toml = r#"
[geometry]
start_head = 0
max_cylinder = 999

[queue]
pattern = "clustered"
count = 50
clusters = 3
seed = 42

[disk]
seek_time_per_cylinder_ms = 0.05

[output]
show_sequences = true
"#;
        let config = parse_toml_string(toml).unwrap();
        assert_eq!(config.queue.pattern, PatternType::Clustered);
        assert_eq!(config.queue.count, 50);
        assert_eq!(config.queue.clusters, 3);
        assert_eq!(config.queue.seed, Some(42));
        assert_eq!(config.disk.seek_time_per_cylinder_ms, 0.05);
        assert!(config.output.show_sequences);
    }

    #[test]
    fn test_parse_toml_missing_geometry_fails() {
        let toml = r#"
[queue]
count = 10
"#;
        assert!(parse_toml_string(toml).is_err());
    }

    #[test]
    fn test_merge_cli_overrides_file_values() {
        let toml = r#"
[geometry]
start_head = 53
max_cylinder = 199

[queue]
pattern = "sequential"
count = 30
"#;
        let config = parse_toml_string(toml).unwrap();
        let cli = Cli::try_parse_from([
            "seeksim",
            "--start-head",
            "100",
            "--queue",
            "1,2,3",
            "--seed",
            "7",
        ])
        .unwrap();
        let merged = merge_cli_with_config(&cli, config).unwrap();
        assert_eq!(merged.geometry.start_head, 100);
        assert_eq!(merged.geometry.max_cylinder, 199);
        assert_eq!(merged.queue.requests, Some(vec![1, 2, 3]));
        assert_eq!(merged.queue.seed, Some(7));
        // Flags that were not passed leave the file's values alone.
        assert_eq!(merged.queue.pattern, PatternType::Sequential);
        assert_eq!(merged.queue.count, 30);
    }

    #[test]
    fn test_merge_explicitly_passed_default_overrides_file() {
        let toml = r#"
[geometry]
start_head = 53
max_cylinder = 199

[queue]
pattern = "clustered"
count = 64
clusters = 8

[disk]
seek_time_per_cylinder_ms = 0.05
"#;
        let config = parse_toml_string(toml).unwrap();
        let cli = Cli::try_parse_from([
            "seeksim",
            "--pattern",
            "uniform",
            "--requests",
            "20",
            "--clusters",
            "4",
            "--seek-time-ms",
            "0.1",
        ])
        .unwrap();
        let merged = merge_cli_with_config(&cli, config).unwrap();
        // Passing a flag always wins, even when the value matches the
        // built-in default.
        assert_eq!(merged.queue.pattern, PatternType::Uniform);
        assert_eq!(merged.queue.count, 20);
        assert_eq!(merged.queue.clusters, 4);
        assert_eq!(merged.disk.seek_time_per_cylinder_ms, 0.1);
    }

    #[test]
    fn test_merge_derives_latency_from_rpm() {
        let toml = r#"
[geometry]
start_head = 0
max_cylinder = 99
"#;
        let config = parse_toml_string(toml).unwrap();
        let cli = Cli::try_parse_from(["seeksim", "--rpm", "15000"]).unwrap();
        let merged = merge_cli_with_config(&cli, config).unwrap();
        assert_eq!(merged.disk.rotational_latency_ms, 2.0);
    }

    #[test]
    fn test_parse_toml_file_missing_path() {
        let result = parse_toml_file(Path::new("/nonexistent/seeksim.toml"));
        assert!(result.is_err());
    }
}
