//! SCAN (elevator)
//!
//! Sweeps toward cylinder 0 first, servicing every request passed on the
//! way down, touches the inner edge, then reverses and services the
//! remaining requests on the way up. Requests sitting on the starting
//! cylinder are handled by the upward sweep.

use super::partition_requests;

pub fn sequence(start_head: u32, requests: &[u32]) -> Vec<u32> {
    let (lower, upper) = partition_requests(start_head, requests);

    let mut sequence = Vec::with_capacity(requests.len() + 2);
    sequence.push(start_head);

    let mut head = start_head;
    for &request in lower.iter().rev() {
        head = request;
        sequence.push(request);
    }
    // The head rides down to cylinder 0 before reversing, unless it is
    // already there.
    if !requests.is_empty() && head != 0 {
        sequence.push(0);
    }
    sequence.extend_from_slice(&upper);
    sequence
}
