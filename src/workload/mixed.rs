//! Mixed queue pattern
//!
//! Roughly 60% uniform background traffic blended with 40% clustered
//! hot-spot traffic, shuffled together so neither part arrives as a
//! block.

use rand::seq::SliceRandom;
use rand::Rng;
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;

use super::{ClusteredPattern, QueuePattern, UniformPattern};

pub struct MixedPattern {
    rng: Xoshiro256PlusPlus,
}

impl MixedPattern {
    pub fn new() -> Self {
        MixedPattern {
            rng: Xoshiro256PlusPlus::from_entropy(),
        }
    }

    /// Create with a fixed seed for reproducible queues
    pub fn with_seed(seed: u64) -> Self {
        MixedPattern {
            rng: Xoshiro256PlusPlus::seed_from_u64(seed),
        }
    }
}

impl Default for MixedPattern {
    fn default() -> Self {
        Self::new()
    }
}

impl QueuePattern for MixedPattern {
    fn generate(&mut self, max_cylinder: u32, count: usize) -> Vec<u32> {
        let uniform_count = count * 6 / 10;
        let clustered_count = count - uniform_count;

        let mut queue = Vec::with_capacity(count);
        if uniform_count > 0 {
            let mut uniform = UniformPattern::with_seed(self.rng.gen());
            queue.extend(uniform.generate(max_cylinder, uniform_count));
        }
        if clustered_count > 0 {
            let clusters = (clustered_count / 5 + 1).min(clustered_count);
            let mut clustered = ClusteredPattern::with_seed(clusters, self.rng.gen());
            queue.extend(clustered.generate(max_cylinder, clustered_count));
        }

        while queue.len() < count {
            queue.push(self.rng.gen_range(0..=max_cylinder));
        }
        queue.truncate(count);
        queue.shuffle(&mut self.rng);
        queue
    }
}
