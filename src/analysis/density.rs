// Density — mean character gap between consecutive tracked occurrences.
//
// Lower values mean the tracked terms sit closer together. The occurrences
// are expected in offset order, which tokenizing and filtering preserve.

use crate::text::tokenizer::WordOccurrence;

/// Returned when fewer than two occurrences are available.
pub const UNDEFINED_DENSITY: f64 = -1.0;

/// Mean gap between consecutive occurrence offsets, or [`UNDEFINED_DENSITY`].
pub fn density(occurrences: &[WordOccurrence]) -> f64 {
    if occurrences.len() < 2 {
        return UNDEFINED_DENSITY;
    }

    let gap_sum: f64 = occurrences
        .windows(2)
        .map(|pair| pair[1].offset as f64 - pair[0].offset as f64)
        .sum();

    gap_sum / (occurrences.len() - 1) as f64
}

/// Whether a density value is a real measurement rather than the sentinel.
pub fn is_defined(density: f64) -> bool {
    density != UNDEFINED_DENSITY
}
