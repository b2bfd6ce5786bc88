//! Uniform random queue pattern

use rand::Rng;
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;

use super::QueuePattern;

/// Every cylinder is equally likely
pub struct UniformPattern {
    rng: Xoshiro256PlusPlus,
}

impl UniformPattern {
    pub fn new() -> Self {
        UniformPattern {
            rng: Xoshiro256PlusPlus::from_entropy(),
        }
    }

    /// Create with a fixed seed for reproducible queues
    pub fn with_seed(seed: u64) -> Self {
        UniformPattern {
            rng: Xoshiro256PlusPlus::seed_from_u64(seed),
        }
    }
}

impl Default for UniformPattern {
    fn default() -> Self {
        Self::new()
    }
}

impl QueuePattern for UniformPattern {
    fn generate(&mut self, max_cylinder: u32, count: usize) -> Vec<u32> {
        (0..count)
            .map(|_| self.rng.gen_range(0..=max_cylinder))
            .collect()
    }
}
