//! Sequential queue pattern
//!
//! Emits a run that starts at a random cylinder and walks in small
//! steps, bouncing back when it hits either disk edge. Models streaming
//! access with occasional direction changes.

use rand::Rng;
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;

use super::QueuePattern;

pub struct SequentialPattern {
    rng: Xoshiro256PlusPlus,
}

impl SequentialPattern {
    pub fn new() -> Self {
        SequentialPattern {
            rng: Xoshiro256PlusPlus::from_entropy(),
        }
    }

    /// Create with a fixed seed for reproducible queues
    pub fn with_seed(seed: u64) -> Self {
        SequentialPattern {
            rng: Xoshiro256PlusPlus::seed_from_u64(seed),
        }
    }
}

impl Default for SequentialPattern {
    fn default() -> Self {
        Self::new()
    }
}

impl QueuePattern for SequentialPattern {
    fn generate(&mut self, max_cylinder: u32, count: usize) -> Vec<u32> {
        if max_cylinder == 0 {
            return vec![0; count];
        }
        let max = i64::from(max_cylinder);
        // Step size scales with the disk but stays small.
        let max_step = i64::from((max_cylinder / 10).clamp(1, 5));

        let mut current = i64::from(self.rng.gen_range(0..=max_cylinder));
        let mut increasing = self.rng.gen_bool(0.5);

        let mut queue = Vec::with_capacity(count);
        for i in 0..count {
            queue.push(current as u32);
            if i + 1 == count {
                break;
            }
            let mut next;
            let mut attempts = 0;
            // The head has to move; retry when a step lands back on the
            // current cylinder after edge clamping.
            loop {
                let step = self.rng.gen_range(1..=max_step);
                let mut candidate = if increasing {
                    current + step
                } else {
                    current - step
                };
                if candidate >= max {
                    candidate = max;
                    if increasing {
                        increasing = false;
                    }
                } else if candidate <= 0 {
                    candidate = 0;
                    if !increasing {
                        increasing = true;
                    }
                }
                next = candidate;
                attempts += 1;
                if next != current || attempts >= 5 {
                    break;
                }
            }
            current = next;
        }
        queue
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_steps_are_small_and_never_stall() {
        let mut pattern = SequentialPattern::with_seed(42);
        let queue = pattern.generate(200, 200);
        assert_eq!(queue.len(), 200);
        assert!(queue.iter().all(|&r| r <= 200));
        for pair in queue.windows(2) {
            let step = pair[0].abs_diff(pair[1]);
            assert!(step >= 1 && step <= 5, "step of {} cylinders", step);
        }
    }

    #[test]
    fn test_same_seed_reproduces_the_queue() {
        let a = SequentialPattern::with_seed(9).generate(500, 100);
        let b = SequentialPattern::with_seed(9).generate(500, 100);
        assert_eq!(a, b);
    }

    #[test]
    fn test_single_cylinder_disk_pins_the_head() {
        let queue = SequentialPattern::with_seed(5).generate(0, 8);
        assert_eq!(queue, vec![0; 8]);
    }

    #[test]
    fn test_tiny_disk_bounces_between_the_edges() {
        let mut pattern = SequentialPattern::with_seed(2);
        let queue = pattern.generate(1, 50);
        assert!(queue.iter().all(|&r| r <= 1));
        for pair in queue.windows(2) {
            assert_ne!(pair[0], pair[1]);
        }
    }
}
