//! C-SCAN (circular SCAN)
//!
//! Services upward only. After the highest pending request the head runs
//! on to the last cylinder, wraps around to cylinder 0 and services the
//! remaining requests in ascending order, keeping service times uniform
//! across the disk.

use super::partition_requests;

pub fn sequence(start_head: u32, max_cylinder: u32, requests: &[u32]) -> Vec<u32> {
    let (lower, upper) = partition_requests(start_head, requests);

    let mut sequence = Vec::with_capacity(requests.len() + 3);
    sequence.push(start_head);

    let mut head = start_head;
    for &request in &upper {
        head = request;
        sequence.push(request);
    }
    if !requests.is_empty() && head != max_cylinder {
        sequence.push(max_cylinder);
    }
    if !lower.is_empty() {
        sequence.push(0);
        sequence.extend_from_slice(&lower);
    }
    sequence
}
