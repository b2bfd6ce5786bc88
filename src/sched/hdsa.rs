//! HDSA (hybrid)
//!
//! Splits the pending requests into the group below the head and the
//! group above it, compares how far each group reaches away from the
//! head, and fully services the shorter-reaching side first, nearest
//! request first within each side. Requests already under the head are
//! dropped without a visit. An empty side counts as infinitely far, so
//! the other side always goes first.

use super::service_nearest_first;

pub fn sequence(start_head: u32, requests: &[u32]) -> Vec<u32> {
    let mut lower: Vec<u32> = requests.iter().copied().filter(|&r| r < start_head).collect();
    let mut upper: Vec<u32> = requests.iter().copied().filter(|&r| r > start_head).collect();

    let lower_span = lower.iter().min().map(|&r| start_head - r);
    let upper_span = upper.iter().max().map(|&r| r - start_head);

    let mut sequence = Vec::with_capacity(lower.len() + upper.len() + 1);
    sequence.push(start_head);

    let upper_first = match (lower_span, upper_span) {
        (None, Some(_)) => true,
        (Some(x), Some(y)) => x > y,
        _ => false,
    };

    if upper_first {
        let head = service_nearest_first(start_head, &mut upper, &mut sequence);
        service_nearest_first(head, &mut lower, &mut sequence);
    } else {
        let head = service_nearest_first(start_head, &mut lower, &mut sequence);
        service_nearest_first(head, &mut upper, &mut sequence);
    }
    sequence
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_services_the_shorter_reaching_side_first() {
        // Upper side reaches 30 cylinders away, lower side 90.
        assert_eq!(sequence(100, &[10, 110, 130]), vec![100, 110, 130, 10]);
    }

    #[test]
    fn test_lower_side_wins_when_it_reaches_less_far() {
        assert_eq!(sequence(50, &[40, 120]), vec![50, 40, 120]);
    }

    #[test]
    fn test_equal_spans_prefer_the_lower_side() {
        assert_eq!(sequence(50, &[40, 60]), vec![50, 40, 60]);
    }

    #[test]
    fn test_requests_under_the_head_are_dropped() {
        assert_eq!(sequence(50, &[50, 50]), vec![50]);
    }

    #[test]
    fn test_one_sided_queue_is_serviced_nearest_first() {
        assert_eq!(sequence(10, &[20, 30]), vec![10, 20, 30]);
        assert_eq!(sequence(90, &[20, 70]), vec![90, 70, 20]);
    }

    #[test]
    fn test_empty_queue_never_moves() {
        assert_eq!(sequence(50, &[]), vec![50]);
    }
}
