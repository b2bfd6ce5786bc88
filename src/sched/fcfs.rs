//! First-Come First-Served
//!
//! Services requests in arrival order. No reordering at all, so it is
//! the fairness baseline the other policies are measured against.

/// Visit the requests exactly as they arrived.
pub fn sequence(start_head: u32, requests: &[u32]) -> Vec<u32> {
    let mut sequence = Vec::with_capacity(requests.len() + 1);
    sequence.push(start_head);
    sequence.extend_from_slice(requests);
    sequence
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visits_in_arrival_order() {
        assert_eq!(sequence(50, &[10, 70, 120, 35]), vec![50, 10, 70, 120, 35]);
    }

    #[test]
    fn test_empty_queue_is_just_the_head() {
        assert_eq!(sequence(42, &[]), vec![42]);
    }

    #[test]
    fn test_duplicate_requests_are_kept() {
        assert_eq!(sequence(0, &[5, 5, 5]), vec![0, 5, 5, 5]);
    }
}
