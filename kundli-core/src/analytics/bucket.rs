//! Score buckets
//!
//! Raw scores map onto three ordinal buckets with fixed thresholds:
//! `<= 6` is Low, `7..=10` is Medium and `>= 11` is High. Any integer is
//! accepted; out-of-range scores fall into the nearest end bucket.

use serde::Serialize;

/// Highest score that still counts as Low.
pub const LOW_MAX: i32 = 6;

/// Lowest score that counts as High.
pub const HIGH_MIN: i32 = 11;

/// Ordinal classification of a raw score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Bucket {
    Low,
    Medium,
    High,
}

impl Bucket {
    pub fn as_str(&self) -> &'static str {
        match self {
            Bucket::Low => "Low",
            Bucket::Medium => "Medium",
            Bucket::High => "High",
        }
    }

    /// Bucket-level prose, shared by every archetype.
    pub fn description(&self) -> &'static str {
        match self {
            Bucket::Low => {
                "Under-expressed. This energy may feel deficient, or is something you tend to avoid."
            }
            Bucket::Medium => "Balanced expression. This energy is present without dominating.",
            Bucket::High => {
                "Dominant theme. A defining part of who you are, with a risk of over-identification."
            }
        }
    }
}

impl std::fmt::Display for Bucket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify a raw score.
pub fn bucket(score: i32) -> Bucket {
    if score <= LOW_MAX {
        Bucket::Low
    } else if score < HIGH_MIN {
        Bucket::Medium
    } else {
        Bucket::High
    }
}

/// Score falls in the High bucket.
pub fn is_high(score: i32) -> bool {
    score >= HIGH_MIN
}

/// Score falls in the Low bucket.
pub fn is_low(score: i32) -> bool {
    score <= LOW_MAX
}
