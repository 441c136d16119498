//! # kundli-core
//!
//! Core library for kundli - a self-assessment that scores a person against
//! twelve Houses and nine Grahas and compares two people's profiles.
//!
//! This library provides:
//! - Domain types for archetypes and profiles
//! - The static archetype catalog and insight table
//! - The scoring engine: buckets, profile analysis, dominant traits and compatibility
//! - Rating aggregation for the assessment
//! - Profile share codes
//! - Configuration management
//! - Logging infrastructure
//!
//! ## Example
//!
//! ```rust
//! use kundli_core::analytics::{analyze, compare, MatchTier};
//! use kundli_core::{Catalog, InsightTable, UserProfile};
//!
//! let catalog = Catalog::standard();
//! let mut asha = UserProfile::new("Asha", "1990-01-01", "Female");
//! asha.scores.insert("g1", 12);
//!
//! let analysis = analyze(&asha, catalog, InsightTable::standard()).unwrap();
//! assert_eq!(analysis.energetic.len(), 9);
//!
//! let result = compare(&asha, &asha.clone(), catalog);
//! assert_eq!(result.match_tier, MatchTier::Soulmate);
//! ```

// Re-export commonly used items at the crate root
pub use catalog::Catalog;
pub use config::Config;
pub use error::{Error, Result};
pub use insights::{Insight, InsightBundle, InsightTable};
pub use types::*;

// Public modules
pub mod analytics;
pub mod assessment;
pub mod catalog;
pub mod config;
pub mod error;
pub mod format;
pub mod insights;
pub mod logging;
pub mod share;
pub mod types;
