//! Clustered queue pattern
//!
//! Requests pile up around a handful of hot spots, like a filesystem
//! with a few busy directories. Cluster centers are spread evenly
//! across the disk with a little jitter, and requests scatter around
//! each center with a normal distribution.

use rand::Rng;
use rand::SeedableRng;
use rand_distr::{Distribution, Normal};
use rand_xoshiro::Xoshiro256PlusPlus;

use super::QueuePattern;

pub struct ClusteredPattern {
    clusters: usize,
    rng: Xoshiro256PlusPlus,
}

impl ClusteredPattern {
    pub fn new(clusters: usize) -> Self {
        assert!(clusters > 0, "cluster count must be positive");
        ClusteredPattern {
            clusters,
            rng: Xoshiro256PlusPlus::from_entropy(),
        }
    }

    /// Create with a fixed seed for reproducible queues
    pub fn with_seed(clusters: usize, seed: u64) -> Self {
        assert!(clusters > 0, "cluster count must be positive");
        ClusteredPattern {
            clusters,
            rng: Xoshiro256PlusPlus::seed_from_u64(seed),
        }
    }
}

impl QueuePattern for ClusteredPattern {
    fn generate(&mut self, max_cylinder: u32, count: usize) -> Vec<u32> {
        if count == 0 {
            return Vec::new();
        }
        let max = i64::from(max_cylinder);
        // More clusters than requests makes no sense.
        let clusters = self.clusters.min(count);
        let per_cluster = count / clusters;
        let remainder = count % clusters;
        let segment = (f64::from(max_cylinder) + 1.0) / clusters as f64;

        let mut centers = Vec::with_capacity(clusters);
        for i in 0..clusters {
            let ideal = ((i as f64 + 0.5) * segment).round() as i64;
            let jitter_range = ((segment * 0.10).round() as i64).max(0);
            let jitter = self.rng.gen_range(-jitter_range..=jitter_range);
            centers.push((ideal + jitter).clamp(0, max));
        }

        let std_dev = (segment / 6.0).max(1.0);
        let spread = Normal::new(0.0, std_dev).expect("standard deviation is positive");

        let mut queue = Vec::with_capacity(count);
        for (i, &center) in centers.iter().enumerate() {
            let cluster_size = per_cluster + usize::from(i < remainder);
            for _ in 0..cluster_size {
                let offset = spread.sample(&mut self.rng);
                let cylinder = (center as f64 + offset).round() as i64;
                queue.push(cylinder.clamp(0, max) as u32);
            }
        }

        // Keep the exact request count even if rounding drifts.
        while queue.len() < count {
            queue.push(self.rng.gen_range(0..=max_cylinder));
        }
        queue.truncate(count);
        queue
    }
}
