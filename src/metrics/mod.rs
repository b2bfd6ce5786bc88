//! Seek and service-time metrics
//!
//! Turns a visit sequence into the numbers the comparison table shows:
//! total head movement, per-seek statistics and an estimated service
//! time derived from the physical disk parameters.

use serde::{Deserialize, Serialize};

use crate::sched::Policy;

fn default_seek_time() -> f64 {
    0.1
}

fn default_rotational_latency() -> f64 {
    4.0
}

fn default_transfer_time() -> f64 {
    1.0
}

/// Physical timing characteristics of the simulated disk
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiskParams {
    /// Time to move the head across one cylinder, in milliseconds
    #[serde(default = "default_seek_time")]
    pub seek_time_per_cylinder_ms: f64,
    /// Average rotational delay per request, in milliseconds
    #[serde(default = "default_rotational_latency")]
    pub rotational_latency_ms: f64,
    /// Data transfer time per request, in milliseconds
    #[serde(default = "default_transfer_time")]
    pub transfer_time_per_request_ms: f64,
}

impl Default for DiskParams {
    fn default() -> Self {
        DiskParams {
            seek_time_per_cylinder_ms: default_seek_time(),
            rotational_latency_ms: default_rotational_latency(),
            transfer_time_per_request_ms: default_transfer_time(),
        }
    }
}

/// Everything measured for one policy over one queue
#[derive(Debug, Clone)]
pub struct PolicyReport {
    pub policy: Policy,
    /// Cylinders visited, starting with the initial head position
    pub sequence: Vec<u32>,
    /// Total head movement in cylinders
    pub total_movement: u64,
    /// Mean movement per serviced request, in cylinders
    pub avg_seek: f64,
    /// Longest single seek, in cylinders
    pub max_seek: u32,
    /// Population standard deviation over the actual (non-zero) seeks
    pub std_dev_seek: f64,
    /// Requests serviced per cylinder of movement; infinite when the
    /// head never moves
    pub throughput: f64,
    /// Mean estimated service time per visit, in milliseconds
    pub avg_response_time_ms: f64,
}

/// Score a visit sequence.
///
/// `request_count` is the number of real requests behind the sequence.
/// Edge stops inserted by SCAN and C-SCAN lengthen the sequence but are
/// not requests, so the per-request averages divide by this count.
pub fn evaluate(
    policy: Policy,
    sequence: Vec<u32>,
    request_count: usize,
    params: &DiskParams,
) -> PolicyReport {
    if sequence.len() < 2 || request_count == 0 {
        return PolicyReport {
            policy,
            sequence,
            total_movement: 0,
            avg_seek: 0.0,
            max_seek: 0,
            std_dev_seek: 0.0,
            throughput: 0.0,
            avg_response_time_ms: 0.0,
        };
    }

    let mut total_movement: u64 = 0;
    let mut max_seek: u32 = 0;
    let mut distances: Vec<u32> = Vec::with_capacity(sequence.len() - 1);
    let mut total_service_ms = 0.0;

    for pair in sequence.windows(2) {
        let dist = pair[0].abs_diff(pair[1]);
        total_movement += u64::from(dist);
        max_seek = max_seek.max(dist);
        if dist > 0 {
            distances.push(dist);
        }
        total_service_ms += f64::from(dist) * params.seek_time_per_cylinder_ms
            + params.rotational_latency_ms
            + params.transfer_time_per_request_ms;
    }
    // A head that never moved still made one zero-length seek.
    if total_movement == 0 {
        distances.push(0);
    }

    let mean_dist = total_movement as f64 / distances.len() as f64;
    let variance = distances
        .iter()
        .map(|&d| {
            let diff = f64::from(d) - mean_dist;
            diff * diff
        })
        .sum::<f64>()
        / distances.len() as f64;

    let throughput = if total_movement > 0 {
        request_count as f64 / total_movement as f64
    } else {
        f64::INFINITY
    };

    let avg_response_time_ms = total_service_ms / (sequence.len() - 1) as f64;

    PolicyReport {
        policy,
        sequence,
        total_movement,
        avg_seek: total_movement as f64 / request_count as f64,
        max_seek,
        std_dev_seek: variance.sqrt(),
        throughput,
        avg_response_time_ms,
    }
}
