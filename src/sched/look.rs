//! LOOK
//!
//! SCAN without the edge stops: sweeps up through the pending requests,
//! reverses at the highest one and sweeps back down to the lowest. The
//! head never travels past the outermost pending request.

use super::partition_requests;

pub fn sequence(start_head: u32, requests: &[u32]) -> Vec<u32> {
    let (lower, upper) = partition_requests(start_head, requests);

    let mut sequence = Vec::with_capacity(requests.len() + 1);
    sequence.push(start_head);
    sequence.extend_from_slice(&upper);
    sequence.extend(lower.iter().rev());
    sequence
}
