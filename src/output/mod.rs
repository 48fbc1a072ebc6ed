// Output formatting — terminal display and report generation.

pub mod markdown;
pub mod terminal;

use crate::analysis::density::is_defined;

/// Format a density for display, showing "n/a" for the undefined sentinel.
pub fn format_density(density: f64) -> String {
    if is_defined(density) {
        format!("{density:.2}")
    } else {
        "n/a".to_string()
    }
}
