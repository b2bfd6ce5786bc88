//! Disk head-scheduling policies
//!
//! Every policy consumes the same inputs (starting head position, disk
//! geometry, pending request queue) and produces a visit sequence: the
//! cylinders the head stops at, in order, beginning with the head's
//! initial position. Synthetic edge stops inserted by the sweeping
//! policies appear in the sequence like any other visit.

use std::fmt;

pub mod clook;
pub mod cscan;
pub mod fcfs;
pub mod hdsa;
pub mod look;
pub mod scan;
pub mod sstf;

/// Scheduling policy selector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Policy {
    Fcfs,
    Sstf,
    Scan,
    Cscan,
    Look,
    Clook,
    Hdsa,
}

impl Policy {
    /// Every policy, in reporting order
    pub const ALL: [Policy; 7] = [
        Policy::Fcfs,
        Policy::Sstf,
        Policy::Scan,
        Policy::Cscan,
        Policy::Look,
        Policy::Clook,
        Policy::Hdsa,
    ];

    /// Conventional display name
    pub fn name(&self) -> &'static str {
        match self {
            Policy::Fcfs => "FCFS",
            Policy::Sstf => "SSTF",
            Policy::Scan => "SCAN",
            Policy::Cscan => "C-SCAN",
            Policy::Look => "LOOK",
            Policy::Clook => "C-LOOK",
            Policy::Hdsa => "HDSA",
        }
    }

    /// Build the visit sequence for this policy.
    ///
    /// `max_cylinder` only matters to the policies that sweep to the disk
    /// edge (SCAN turns around at cylinder 0, C-SCAN wraps at the last
    /// cylinder); the rest ignore it.
    pub fn sequence(&self, start_head: u32, max_cylinder: u32, requests: &[u32]) -> Vec<u32> {
        match self {
            Policy::Fcfs => fcfs::sequence(start_head, requests),
            Policy::Sstf => sstf::sequence(start_head, requests),
            Policy::Scan => scan::sequence(start_head, requests),
            Policy::Cscan => cscan::sequence(start_head, max_cylinder, requests),
            Policy::Look => look::sequence(start_head, requests),
            Policy::Clook => clook::sequence(start_head, requests),
            Policy::Hdsa => hdsa::sequence(start_head, requests),
        }
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Split `requests` into the cylinders strictly below the head and the
/// cylinders at or above it. Both halves come back sorted ascending.
pub(crate) fn partition_requests(start_head: u32, requests: &[u32]) -> (Vec<u32>, Vec<u32>) {
    let mut sorted = requests.to_vec();
    sorted.sort_unstable();
    let split = sorted.partition_point(|&r| r < start_head);
    let upper = sorted.split_off(split);
    (sorted, upper)
}

/// Repeatedly pick the pending request closest to the head, append it to
/// `sequence` and move the head there. Ties go to the request that
/// arrived first. Returns the final head position.
pub(crate) fn service_nearest_first(
    mut head: u32,
    pending: &mut Vec<u32>,
    sequence: &mut Vec<u32>,
) -> u32 {
    while !pending.is_empty() {
        let mut best = 0;
        for (i, &request) in pending.iter().enumerate() {
            if request.abs_diff(head) < pending[best].abs_diff(head) {
                best = i;
            }
        }
        head = pending.remove(best);
        sequence.push(head);
    }
    head
}
