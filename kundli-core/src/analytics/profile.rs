//! Single-profile analysis
//!
//! Turns a profile's raw scores into a per-archetype breakdown with
//! bucket prose and insights, picks highlight archetypes, and ranks
//! dominant traits.

use super::bucket::{bucket, Bucket};
use crate::catalog::Catalog;
use crate::error::Result;
use crate::insights::InsightTable;
use crate::types::{Category, UserProfile};
use serde::Serialize;

/// Analysis of one archetype for one profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArchetypeAnalysis {
    /// Archetype id
    pub id: String,
    /// Canonical archetype name ("4th House", "Mars")
    pub title: String,
    /// Theme label from the catalog
    pub theme: String,
    pub category: Category,
    /// Raw score, 0 when unrated
    pub score: i32,
    pub bucket: Bucket,
    /// Bucket-level prose
    pub description: String,
    pub insight: String,
    pub psychology: String,
}

/// Full analysis of one profile.
///
/// Highlights are `None` only when the relevant slice of the catalog is
/// empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileAnalysis {
    /// Houses, in catalog order
    pub structural: Vec<ArchetypeAnalysis>,
    /// Grahas, in catalog order
    pub energetic: Vec<ArchetypeAnalysis>,
    pub top_structural: Option<ArchetypeAnalysis>,
    pub top_energetic: Option<ArchetypeAnalysis>,
    pub top_overall_strength: Option<ArchetypeAnalysis>,
    pub top_overall_weakness: Option<ArchetypeAnalysis>,
}

impl ProfileAnalysis {
    /// Structural then energetic entries.
    pub fn all(&self) -> impl Iterator<Item = &ArchetypeAnalysis> + '_ {
        self.structural.iter().chain(self.energetic.iter())
    }

    /// Number of archetypes in each bucket, as (low, medium, high).
    pub fn bucket_counts(&self) -> (usize, usize, usize) {
        self.all().fold((0, 0, 0), |(low, medium, high), entry| match entry.bucket {
            Bucket::Low => (low + 1, medium, high),
            Bucket::Medium => (low, medium + 1, high),
            Bucket::High => (low, medium, high + 1),
        })
    }
}

/// Analyze a profile against a catalog and insight table.
///
/// Fails with [`crate::Error::MissingInsight`] if any catalog archetype has
/// no insight bundle; no partial analysis is returned.
pub fn analyze(
    profile: &UserProfile,
    catalog: &Catalog,
    insights: &InsightTable,
) -> Result<ProfileAnalysis> {
    let mut structural = Vec::new();
    let mut energetic = Vec::new();

    for archetype in catalog {
        let score = profile.score(&archetype.id);
        let bucket = bucket(score);
        let bundle = insights.require(&archetype.id)?;
        // Medium reads the high-expression variant too.
        let variant = match bucket {
            Bucket::Low => &bundle.low,
            Bucket::Medium | Bucket::High => &bundle.high,
        };

        let entry = ArchetypeAnalysis {
            id: archetype.id.clone(),
            title: archetype.name.as_str().to_string(),
            theme: archetype.title.clone(),
            category: archetype.category(),
            score,
            bucket,
            description: bucket.description().to_string(),
            insight: variant.insight.clone(),
            psychology: variant.psychology.clone(),
        };

        match entry.category {
            Category::Structural => structural.push(entry),
            Category::Energetic => energetic.push(entry),
        }
    }

    let top_structural = leftmost_max(&structural).cloned();
    let top_energetic = leftmost_max(&energetic).cloned();
    let top_overall_strength = leftmost_max(structural.iter().chain(energetic.iter())).cloned();
    let top_overall_weakness = leftmost_min(structural.iter().chain(energetic.iter())).cloned();

    tracing::debug!(
        profile = %profile.name,
        rated = profile.scores.len(),
        structural = structural.len(),
        energetic = energetic.len(),
        "Analyzed profile"
    );

    Ok(ProfileAnalysis {
        structural,
        energetic,
        top_structural,
        top_energetic,
        top_overall_strength,
        top_overall_weakness,
    })
}

/// Highest score; the earliest entry wins ties.
fn leftmost_max<'a, I>(entries: I) -> Option<&'a ArchetypeAnalysis>
where
    I: IntoIterator<Item = &'a ArchetypeAnalysis>,
{
    entries.into_iter().fold(None, |best, entry| match best {
        Some(current) if entry.score <= current.score => Some(current),
        _ => Some(entry),
    })
}

/// Lowest score; the earliest entry wins ties.
fn leftmost_min<'a, I>(entries: I) -> Option<&'a ArchetypeAnalysis>
where
    I: IntoIterator<Item = &'a ArchetypeAnalysis>,
{
    entries.into_iter().fold(None, |best, entry| match best {
        Some(current) if entry.score >= current.score => Some(current),
        _ => Some(entry),
    })
}

/// Theme titles of the `n` highest-scoring rated archetypes.
///
/// Only archetypes present in the profile's scores are ranked; unrated
/// ones are skipped rather than treated as 0. Equal scores keep the order
/// they were rated in. Ids missing from the catalog are dropped.
pub fn dominant_traits(profile: &UserProfile, catalog: &Catalog, n: usize) -> Vec<String> {
    let mut rated: Vec<(&str, i32)> = profile.scores.iter().collect();
    // sort_by is stable
    rated.sort_by(|a, b| b.1.cmp(&a.1));

    rated
        .into_iter()
        .filter_map(|(id, _)| catalog.get(id))
        .map(|archetype| archetype.title.clone())
        .take(n)
        .collect()
}
