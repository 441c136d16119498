//! Formatting helpers shared across the report binaries.

use crate::types::ScoreScale;

/// Format a score against its scale maximum (e.g., "12/15").
pub fn format_score(score: i32, scale: ScoreScale) -> String {
    format!("{}/{}", score, scale.max)
}

/// Render a fixed-width bar for a score (e.g., "████████░░").
///
/// The fill is the score's share of the scale maximum, clamped to the bar.
pub fn score_bar(score: i32, scale: ScoreScale, width: usize) -> String {
    let fraction = (scale.percent_of_max(score) / 100.0).clamp(0.0, 1.0);
    let filled = ((fraction * width as f64).round() as usize).min(width);
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format a list as "a, b and c".
pub fn join_natural(items: &[String]) -> String {
    match items {
        [] => String::new(),
        [only] => only.clone(),
        [init @ .., last] => format!("{} and {}", init.join(", "), last),
    }
}
