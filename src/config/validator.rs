//! Configuration validation

use thiserror::Error;

use super::Config;
use crate::metrics::DiskParams;
use crate::workload::PatternType;

/// Rejected simulation inputs
#[derive(Debug, Error, PartialEq)]
pub enum InputError {
    #[error("start head {head} is beyond the last cylinder {max}")]
    HeadOutOfRange { head: u32, max: u32 },

    #[error("request {request} is beyond the last cylinder {max}")]
    RequestOutOfRange { request: u32, max: u32 },

    #[error("request queue is empty")]
    EmptyQueue,

    #[error("generated queue length must be at least 1")]
    ZeroCount,

    #[error("cluster count must be at least 1")]
    ZeroClusters,

    #[error("{name} must be a non-negative finite number, got {value}")]
    BadTiming { name: &'static str, value: f64 },
}

/// Validate complete configuration
pub fn validate_config(config: &Config) -> Result<(), InputError> {
    validate_geometry(config.geometry.start_head, config.geometry.max_cylinder)?;
    validate_disk_params(&config.disk)?;

    match &config.queue.requests {
        Some(requests) => validate_queue(requests, config.geometry.max_cylinder)?,
        None => {
            if config.queue.count == 0 {
                return Err(InputError::ZeroCount);
            }
            if config.queue.clusters == 0 {
                return Err(InputError::ZeroClusters);
            }
            if config.queue.pattern == PatternType::Clustered
                && config.queue.clusters > config.queue.count
            {
                eprintln!(
                    "Warning: {} clusters requested but only {} requests, using {} clusters",
                    config.queue.clusters, config.queue.count, config.queue.count
                );
            }
        }
    }

    Ok(())
}

/// The head must start on an addressable cylinder
pub fn validate_geometry(start_head: u32, max_cylinder: u32) -> Result<(), InputError> {
    if start_head > max_cylinder {
        return Err(InputError::HeadOutOfRange {
            head: start_head,
            max: max_cylinder,
        });
    }
    Ok(())
}

/// An explicit queue must be non-empty with every request on the disk
pub fn validate_queue(requests: &[u32], max_cylinder: u32) -> Result<(), InputError> {
    if requests.is_empty() {
        return Err(InputError::EmptyQueue);
    }
    for &request in requests {
        if request > max_cylinder {
            return Err(InputError::RequestOutOfRange {
                request,
                max: max_cylinder,
            });
        }
    }
    Ok(())
}

/// Timing parameters must be non-negative and finite
pub fn validate_disk_params(params: &DiskParams) -> Result<(), InputError> {
    let checks = [
        ("seek time", params.seek_time_per_cylinder_ms),
        ("rotational latency", params.rotational_latency_ms),
        ("transfer time", params.transfer_time_per_request_ms),
    ];
    for (name, value) in checks {
        if !value.is_finite() || value < 0.0 {
            return Err(InputError::BadTiming { name, value });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{GeometryConfig, OutputConfig, QueueConfig};

    fn base_config() -> Config {
        Config {
            geometry: GeometryConfig {
                start_head: 50,
                max_cylinder: 199,
            },
            disk: DiskParams::default(),
            queue: QueueConfig {
                requests: Some(vec![98, 183, 37]),
                ..QueueConfig::default()
            },
            output: OutputConfig::default(),
        }
    }

    #[test]
    fn test_valid_config_passes() {
        assert!(validate_config(&base_config()).is_ok());
    }

    #[test]
    fn test_head_beyond_the_disk_is_rejected() {
        let mut config = base_config();
        config.geometry.start_head = 200;
        assert_eq!(
            validate_config(&config),
            Err(InputError::HeadOutOfRange { head: 200, max: 199 })
        );
    }

    #[test]
    fn test_request_beyond_the_disk_is_rejected() {
        let mut config = base_config();
        config.queue.requests = Some(vec![10, 500]);
        assert_eq!(
            validate_config(&config),
            Err(InputError::RequestOutOfRange { request: 500, max: 199 })
        );
    }

    #[test]
    fn test_empty_explicit_queue_is_rejected() {
        let mut config = base_config();
        config.queue.requests = Some(Vec::new());
        assert_eq!(validate_config(&config), Err(InputError::EmptyQueue));
    }

    #[test]
    fn test_generated_queue_needs_a_count_and_clusters() {
        let mut config = base_config();
        config.queue.requests = None;
        config.queue.count = 0;
        assert_eq!(validate_config(&config), Err(InputError::ZeroCount));

        config.queue.count = 10;
        config.queue.clusters = 0;
        assert_eq!(validate_config(&config), Err(InputError::ZeroClusters));

        config.queue.clusters = 4;
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_negative_or_non_finite_timing_is_rejected() {
        let mut config = base_config();
        config.disk.seek_time_per_cylinder_ms = -0.1;
        assert!(matches!(
            validate_config(&config),
            Err(InputError::BadTiming { name: "seek time", .. })
        ));

        let mut config = base_config();
        config.disk.rotational_latency_ms = f64::NAN;
        assert!(matches!(
            validate_config(&config),
            Err(InputError::BadTiming { .. })
        ));
    }

    #[test]
    fn test_head_on_the_last_cylinder_is_allowed() {
        let mut config = base_config();
        config.geometry.start_head = 199;
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_error_messages_name_the_offender() {
        let err = InputError::RequestOutOfRange { request: 500, max: 199 };
        assert_eq!(
            err.to_string(),
            "request 500 is beyond the last cylinder 199"
        );
    }
}
