//! Scoring engine for kundli
//!
//! Every function here is pure: it reads a caller-owned profile and the
//! shared read-only catalog and insight table, and returns a fresh value.
//!
//! - [`bucket`] maps a raw score onto Low/Medium/High
//! - [`profile`] builds the per-archetype analysis, highlights and dominant traits
//! - [`compatibility`] compares two profiles and derives relational details
//!
//! Results are never cached; they are recomputed from raw scores on demand.

pub mod bucket;
pub mod compatibility;
pub mod profile;

pub use bucket::{bucket, is_high, is_low, Bucket, HIGH_MIN, LOW_MAX};
pub use compatibility::{
    compare, relational_details, similarity_percentage, CompatibilityResult, MatchTier,
    RelationalDetails,
};
pub use profile::{analyze, dominant_traits, ArchetypeAnalysis, ProfileAnalysis};

/// Default number of dominant traits shown in reports.
pub const DEFAULT_DOMINANT_TRAITS: usize = 3;
