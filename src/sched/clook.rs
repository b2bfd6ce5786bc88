//! C-LOOK (circular LOOK)
//!
//! Sweeps up through the pending requests, then jumps from the highest
//! one straight to the lowest and continues ascending, without touching
//! either disk edge.

use super::partition_requests;

pub fn sequence(start_head: u32, requests: &[u32]) -> Vec<u32> {
    let (lower, upper) = partition_requests(start_head, requests);

    let mut sequence = Vec::with_capacity(requests.len() + 1);
    sequence.push(start_head);
    sequence.extend_from_slice(&upper);
    sequence.extend_from_slice(&lower);
    sequence
}
