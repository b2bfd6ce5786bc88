//! Synthetic request-queue generators
//!
//! Four patterns mirror common disk access shapes: uniformly random,
//! sequential runs that bounce off the disk edges, hot spots clustered
//! around a few centers, and a mixed blend of uniform and clustered
//! traffic.

mod clustered;
mod mixed;
mod sequential;
mod uniform;

pub use clustered::ClusteredPattern;
pub use mixed::MixedPattern;
pub use sequential::SequentialPattern;
pub use uniform::UniformPattern;

use serde::{Deserialize, Serialize};

/// Generates cylinder request queues
pub trait QueuePattern: Send {
    /// Produce `count` requests, each in `0..=max_cylinder`.
    fn generate(&mut self, max_cylinder: u32, count: usize) -> Vec<u32>;
}

/// Pattern selector used by config files and the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PatternType {
    Uniform,
    Sequential,
    Clustered,
    Mixed,
}

impl Default for PatternType {
    fn default() -> Self {
        PatternType::Uniform
    }
}

/// Create a pattern generator from config values.
///
/// `clusters` only matters for the clustered pattern; a seed makes the
/// queue reproducible.
pub fn create_pattern(
    pattern: PatternType,
    clusters: usize,
    seed: Option<u64>,
) -> Box<dyn QueuePattern> {
    match (pattern, seed) {
        (PatternType::Uniform, None) => Box::new(UniformPattern::new()),
        (PatternType::Uniform, Some(seed)) => Box::new(UniformPattern::with_seed(seed)),
        (PatternType::Sequential, None) => Box::new(SequentialPattern::new()),
        (PatternType::Sequential, Some(seed)) => Box::new(SequentialPattern::with_seed(seed)),
        (PatternType::Clustered, None) => Box::new(ClusteredPattern::new(clusters)),
        (PatternType::Clustered, Some(seed)) => Box::new(ClusteredPattern::with_seed(clusters, seed)),
        (PatternType::Mixed, None) => Box::new(MixedPattern::new()),
        (PatternType::Mixed, Some(seed)) => Box::new(MixedPattern::with_seed(seed)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory_covers_every_pattern() {
        let patterns = [
            PatternType::Uniform,
            PatternType::Sequential,
            PatternType::Clustered,
            PatternType::Mixed,
        ];
        for pattern in patterns {
            let mut generator = create_pattern(pattern, 4, Some(11));
            let queue = generator.generate(199, 25);
            assert_eq!(queue.len(), 25);
            assert!(queue.iter().all(|&r| r <= 199));
        }
    }

    #[test]
    fn test_pattern_type_serde_names() {
        let parsed: PatternType = serde_json::from_str("\"sequential\"").unwrap();
        assert_eq!(parsed, PatternType::Sequential);
        assert_eq!(
            serde_json::to_string(&PatternType::Mixed).unwrap(),
            "\"mixed\""
        );
    }

    #[test]
    fn test_default_pattern_is_uniform() {
        assert_eq!(PatternType::default(), PatternType::Uniform);
    }
}
