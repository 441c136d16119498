//! Rating aggregation for the self-assessment.
//!
//! Each archetype card carries three statements rated on a 1-5 agreement
//! scale. The three ratings are summed into the card's raw score, giving the
//! 3-15 range the scoring engine works with.

use crate::catalog::Catalog;
use crate::error::{Error, Result};
use crate::types::UserProfile;

/// Statements shown per archetype card.
pub const STATEMENTS_PER_CARD: usize = 3;

/// Lowest statement rating (strongly disagree).
pub const MIN_RATING: u8 = 1;

/// Highest statement rating (strongly agree).
pub const MAX_RATING: u8 = 5;

/// Validated ratings for one archetype card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardRating {
    ratings: [u8; STATEMENTS_PER_CARD],
}

impl CardRating {
    pub fn new(ratings: [u8; STATEMENTS_PER_CARD]) -> Result<Self> {
        if let Some(bad) = ratings
            .iter()
            .find(|r| !(MIN_RATING..=MAX_RATING).contains(*r))
        {
            return Err(Error::InvalidRating(*bad));
        }
        Ok(Self { ratings })
    }

    /// Build from a slice, which must hold exactly three ratings.
    pub fn from_slice(ratings: &[u8]) -> Result<Self> {
        let ratings: [u8; STATEMENTS_PER_CARD] = ratings
            .try_into()
            .map_err(|_| Error::RatingCount(ratings.len()))?;
        Self::new(ratings)
    }

    pub fn ratings(&self) -> [u8; STATEMENTS_PER_CARD] {
        self.ratings
    }

    /// Raw score for the card.
    pub fn score(&self) -> i32 {
        self.ratings.iter().map(|r| i32::from(*r)).sum()
    }
}

/// Builds a profile one rated card at a time.
#[derive(Debug, Clone)]
pub struct Assessment {
    profile: UserProfile,
}

impl Assessment {
    /// Start from onboarding details; scores begin empty.
    pub fn new(
        name: impl Into<String>,
        date_of_birth: impl Into<String>,
        gender: impl Into<String>,
    ) -> Self {
        Self {
            profile: UserProfile::new(name, date_of_birth, gender),
        }
    }

    /// Continue an existing profile (e.g. to re-rate a card).
    pub fn resume(profile: UserProfile) -> Self {
        Self { profile }
    }

    /// Record a card's ratings. Re-rating replaces the earlier score.
    pub fn rate(&mut self, catalog: &Catalog, id: &str, rating: CardRating) -> Result<i32> {
        if catalog.get(id).is_none() {
            return Err(Error::UnknownArchetype(id.to_string()));
        }
        let score = rating.score();
        if let Some(previous) = self.profile.scores.insert(id, score) {
            tracing::debug!(archetype = id, previous, score, "Re-rated archetype");
        }
        Ok(score)
    }

    /// Catalog ids not yet rated, in catalog order.
    pub fn remaining<'a>(&self, catalog: &'a Catalog) -> Vec<&'a str> {
        catalog
            .iter()
            .filter(|a| !self.profile.scores.contains(&a.id))
            .map(|a| a.id.as_str())
            .collect()
    }

    pub fn is_complete(&self, catalog: &Catalog) -> bool {
        self.remaining(catalog).is_empty()
    }

    pub fn profile(&self) -> &UserProfile {
        &self.profile
    }

    pub fn finish(self) -> UserProfile {
        self.profile
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_rating_sums() {
        assert_eq!(CardRating::new([1, 1, 1]).unwrap().score(), 3);
        assert_eq!(CardRating::new([5, 5, 5]).unwrap().score(), 15);
        assert_eq!(CardRating::new([4, 2, 5]).unwrap().score(), 11);
    }

    #[test]
    fn test_card_rating_rejects_out_of_scale() {
        assert!(matches!(
            CardRating::new([0, 3, 3]),
            Err(Error::InvalidRating(0))
        ));
        assert!(matches!(
            CardRating::new([3, 3, 6]),
            Err(Error::InvalidRating(6))
        ));
    }

    #[test]
    fn test_card_rating_from_slice_length() {
        assert!(CardRating::from_slice(&[3, 4]).is_err());
        assert!(CardRating::from_slice(&[3, 4, 5, 1]).is_err());
        assert_eq!(CardRating::from_slice(&[3, 4, 5]).unwrap().score(), 12);
    }

    #[test]
    fn test_assessment_flow() {
        let catalog = Catalog::standard();
        let mut assessment = Assessment::new("Asha", "1990-01-01", "Female");
        assert_eq!(assessment.remaining(catalog).len(), 21);
        assert!(assessment.profile().scores.is_empty());

        assessment
            .rate(catalog, "g3", CardRating::new([5, 5, 4]).unwrap())
            .unwrap();
        assessment
            .rate(catalog, "h1", CardRating::new([2, 2, 2]).unwrap())
            .unwrap();
        assessment
            .rate(catalog, "g3", CardRating::new([1, 2, 3]).unwrap())
            .unwrap();

        let remaining = assessment.remaining(catalog);
        assert_eq!(remaining.len(), 19);
        assert_eq!(remaining[0], "h2");
        assert!(!assessment.is_complete(catalog));

        let profile = assessment.finish();
        let order: Vec<_> = profile.scores.iter().collect();
        assert_eq!(order, vec![("g3", 6), ("h1", 6)]);
    }

    #[test]
    fn test_resume_rerates_in_place() {
        let catalog = Catalog::standard();
        let mut profile = UserProfile::new("Ravi", "1988-07-14", "Male");
        profile.id = Some("local-7".to_string());
        profile.scores.insert("h2", 9);
        profile.scores.insert("g1", 12);

        let mut assessment = Assessment::resume(profile);
        assessment
            .rate(catalog, "h2", CardRating::new([5, 5, 5]).unwrap())
            .unwrap();

        let profile = assessment.finish();
        assert_eq!(profile.id.as_deref(), Some("local-7"));
        let order: Vec<_> = profile.scores.iter().collect();
        assert_eq!(order, vec![("h2", 15), ("g1", 12)]);
    }

    #[test]
    fn test_assessment_rejects_unknown_archetype() {
        let mut assessment = Assessment::new("Asha", "1990-01-01", "Female");
        let err = assessment
            .rate(
                Catalog::standard(),
                "x9",
                CardRating::new([3, 3, 3]).unwrap(),
            )
            .unwrap_err();
        assert!(matches!(err, Error::UnknownArchetype(ref id) if id == "x9"));
    }

    #[test]
    fn test_complete_assessment() {
        let catalog = Catalog::standard();
        let mut assessment = Assessment::new("Ravi", "1988-07-14", "Male");
        for archetype in catalog {
            assessment
                .rate(catalog, &archetype.id, CardRating::new([3, 3, 3]).unwrap())
                .unwrap();
        }
        assert!(assessment.is_complete(catalog));
        assert_eq!(assessment.finish().scores.len(), 21);
    }
}
