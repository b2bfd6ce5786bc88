//! Shortest Seek Time First
//!
//! Greedy selection: always service the pending request closest to the
//! current head position. Ties go to the request that arrived first.
//! Minimizes each individual seek but can starve far-away requests.

use super::service_nearest_first;

pub fn sequence(start_head: u32, requests: &[u32]) -> Vec<u32> {
    let mut pending = requests.to_vec();
    let mut sequence = Vec::with_capacity(requests.len() + 1);
    sequence.push(start_head);
    service_nearest_first(start_head, &mut pending, &mut sequence);
    sequence
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_always_picks_the_closest_request() {
        assert_eq!(sequence(50, &[10, 70, 120, 35]), vec![50, 35, 10, 70, 120]);
    }

    #[test]
    fn test_ties_go_to_the_earlier_request() {
        assert_eq!(sequence(50, &[55, 45]), vec![50, 55, 45]);
        assert_eq!(sequence(50, &[45, 55]), vec![50, 45, 55]);
    }

    #[test]
    fn test_request_under_the_head_is_serviced_first() {
        assert_eq!(sequence(50, &[50, 30]), vec![50, 50, 30]);
    }

    #[test]
    fn test_empty_queue_is_just_the_head() {
        assert_eq!(sequence(7, &[]), vec![7]);
    }
}
