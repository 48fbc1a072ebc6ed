// Relation score — how strongly a chapter leans toward one topic.
//
//   score = total_count + (constant - density)
//
// A topic scores higher when its terms appear more often and sit closer
// together. The result is truncated toward zero to an integer.
//
// When density is the undefined sentinel (-1.0) the formula is still
// applied as-is, which adds `constant + 1` to the count. Existing results
// depend on that, so it is kept.

use serde::{Deserialize, Serialize};

use super::grouping::{total_count, TermFrequency};

/// Default value of the relation constant.
pub const DEFAULT_RELATION_CONSTANT: f64 = 1000.0;

/// Tunable parameters of the relation score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RelationWeights {
    /// The constant density is subtracted from (default 1000.0).
    pub constant: f64,
}

impl Default for RelationWeights {
    fn default() -> Self {
        Self {
            constant: DEFAULT_RELATION_CONSTANT,
        }
    }
}

impl RelationWeights {
    pub fn with_constant(constant: f64) -> Self {
        Self { constant }
    }
}

/// Combine term counts and density into a single comparable score.
pub fn relation_score(
    frequencies: &[TermFrequency],
    density: f64,
    weights: &RelationWeights,
) -> i64 {
    let count = total_count(frequencies) as f64;
    (count + (weights.constant - density)) as i64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::density::UNDEFINED_DENSITY;

    fn freqs(counts: &[usize]) -> Vec<TermFrequency> {
        counts
            .iter()
            .enumerate()
            .map(|(i, &count)| TermFrequency {
                term: format!("term{i}"),
                count,
            })
            .collect()
    }

    #[test]
    fn test_score_with_small_constant() {
        let weights = RelationWeights::with_constant(200.0);
        assert_eq!(relation_score(&freqs(&[2, 1, 2, 1, 1, 3]), 7.0, &weights), 203);
    }

    #[test]
    fn test_default_constant() {
        let weights = RelationWeights::default();
        assert_eq!(weights.constant, 1000.0);
        // 4 + (1000 - 12.5) = 991.5 -> 991
        assert_eq!(relation_score(&freqs(&[3, 1]), 12.5, &weights), 991);
    }

    #[test]
    fn test_undefined_density_inflates_score() {
        let weights = RelationWeights::with_constant(200.0);
        // 1 + (200 - -1) = 202
        assert_eq!(
            relation_score(&freqs(&[1]), UNDEFINED_DENSITY, &weights),
            202
        );
        assert_eq!(relation_score(&[], UNDEFINED_DENSITY, &weights), 201);
    }

    #[test]
    fn test_truncates_toward_zero() {
        let weights = RelationWeights::with_constant(0.0);
        // 2 + (0 - 2.5) = -0.5 -> 0
        assert_eq!(relation_score(&freqs(&[2]), 2.5, &weights), 0);
    }
}
