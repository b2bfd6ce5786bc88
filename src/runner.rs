//! Runs every policy over the same queue

use rayon::prelude::*;

use crate::metrics::{self, DiskParams, PolicyReport};
use crate::sched::Policy;

/// Evaluate all scheduling policies against one request queue.
///
/// The policies are independent, so they run in parallel; reports come
/// back in `Policy::ALL` order regardless of which finishes first.
pub fn compare_all(
    start_head: u32,
    max_cylinder: u32,
    requests: &[u32],
    params: &DiskParams,
) -> Vec<PolicyReport> {
    Policy::ALL
        .par_iter()
        .map(|&policy| {
            let sequence = policy.sequence(start_head, max_cylinder, requests);
            metrics::evaluate(policy, sequence, requests.len(), params)
        })
        .collect()
}
