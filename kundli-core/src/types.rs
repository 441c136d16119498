//! Core domain types for kundli
//!
//! These types describe the fixed archetype vocabulary and the caller-owned
//! profile data the scoring engine reads.
//!
//! ## Terminology
//!
//! | Term | Definition |
//! |------|------------|
//! | **Archetype** | One of 21 fixed psychological categories a person is rated against |
//! | **House** | A structural archetype; one of 12 life domains (e.g. "4th House") |
//! | **Graha** | An energetic archetype; one of 9 drives or temperaments (e.g. "Mars") |
//! | **Raw score** | The summed ratings for one archetype (3-15 on the standard scale) |
//! | **Profile** | A person's details plus their raw scores, keyed by archetype id |
//!
//! Houses and Grahas are static labels. Nothing here is derived from the
//! date of birth, which is carried as an opaque string.

use crate::error::Result;
use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::path::Path;

// ============================================
// Archetypes
// ============================================

/// The two kinds of archetype.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Life-domain archetypes (Houses)
    Structural,
    /// Drive/temperament archetypes (Grahas)
    Energetic,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Structural => "structural",
            Category::Energetic => "energetic",
        }
    }

    /// Traditional label for archetypes of this category.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Structural => "House",
            Category::Energetic => "Graha",
        }
    }
}

/// The twelve structural archetypes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HouseName {
    First,
    Second,
    Third,
    Fourth,
    Fifth,
    Sixth,
    Seventh,
    Eighth,
    Ninth,
    Tenth,
    Eleventh,
    Twelfth,
}

impl HouseName {
    pub const ALL: [HouseName; 12] = [
        HouseName::First,
        HouseName::Second,
        HouseName::Third,
        HouseName::Fourth,
        HouseName::Fifth,
        HouseName::Sixth,
        HouseName::Seventh,
        HouseName::Eighth,
        HouseName::Ninth,
        HouseName::Tenth,
        HouseName::Eleventh,
        HouseName::Twelfth,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            HouseName::First => "1st House",
            HouseName::Second => "2nd House",
            HouseName::Third => "3rd House",
            HouseName::Fourth => "4th House",
            HouseName::Fifth => "5th House",
            HouseName::Sixth => "6th House",
            HouseName::Seventh => "7th House",
            HouseName::Eighth => "8th House",
            HouseName::Ninth => "9th House",
            HouseName::Tenth => "10th House",
            HouseName::Eleventh => "11th House",
            HouseName::Twelfth => "12th House",
        }
    }
}

/// The nine energetic archetypes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GrahaName {
    Sun,
    Moon,
    Mars,
    Mercury,
    Jupiter,
    Venus,
    Saturn,
    Rahu,
    Ketu,
}

impl GrahaName {
    pub const ALL: [GrahaName; 9] = [
        GrahaName::Sun,
        GrahaName::Moon,
        GrahaName::Mars,
        GrahaName::Mercury,
        GrahaName::Jupiter,
        GrahaName::Venus,
        GrahaName::Saturn,
        GrahaName::Rahu,
        GrahaName::Ketu,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            GrahaName::Sun => "Sun",
            GrahaName::Moon => "Moon",
            GrahaName::Mars => "Mars",
            GrahaName::Mercury => "Mercury",
            GrahaName::Jupiter => "Jupiter",
            GrahaName::Venus => "Venus",
            GrahaName::Saturn => "Saturn",
            GrahaName::Rahu => "Rahu",
            GrahaName::Ketu => "Ketu",
        }
    }
}

/// Canonical name of an archetype. The category follows from the name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArchetypeName {
    House(HouseName),
    Graha(GrahaName),
}

impl ArchetypeName {
    pub fn category(&self) -> Category {
        match self {
            ArchetypeName::House(_) => Category::Structural,
            ArchetypeName::Graha(_) => Category::Energetic,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ArchetypeName::House(house) => house.as_str(),
            ArchetypeName::Graha(graha) => graha.as_str(),
        }
    }
}

impl From<HouseName> for ArchetypeName {
    fn from(house: HouseName) -> Self {
        ArchetypeName::House(house)
    }
}

impl From<GrahaName> for ArchetypeName {
    fn from(graha: GrahaName) -> Self {
        ArchetypeName::Graha(graha)
    }
}

impl fmt::Display for ArchetypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ArchetypeName {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        if let Some(house) = HouseName::ALL.iter().find(|h| h.as_str() == s) {
            return Ok(ArchetypeName::House(*house));
        }
        if let Some(graha) = GrahaName::ALL.iter().find(|g| g.as_str() == s) {
            return Ok(ArchetypeName::Graha(*graha));
        }
        Err(format!("unknown archetype name: {}", s))
    }
}

impl Serialize for ArchetypeName {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ArchetypeName {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

/// An immutable catalog entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Archetype {
    /// Stable key used in score maps (e.g. "h4", "g3")
    pub id: String,
    /// Canonical name ("4th House", "Mars")
    pub name: ArchetypeName,
    /// Short theme label ("Emotional Foundations")
    pub title: String,
    /// Descriptive prose
    pub description: String,
    /// Opaque icon key, resolved by whatever renders the card
    pub icon: String,
}

impl Archetype {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<ArchetypeName>,
        title: impl Into<String>,
        description: impl Into<String>,
        icon: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            title: title.into(),
            description: description.into(),
            icon: icon.into(),
        }
    }

    pub fn category(&self) -> Category {
        self.name.category()
    }
}

// ============================================
// Scores
// ============================================

/// Closed interval of valid raw scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreScale {
    pub min: i32,
    pub max: i32,
}

impl ScoreScale {
    /// Three statements per archetype, each rated 1-5, summed.
    pub const STANDARD: ScoreScale = ScoreScale { min: 3, max: 15 };

    /// Largest possible difference between two scores on this scale.
    pub fn range(&self) -> i32 {
        self.max - self.min
    }

    pub fn contains(&self, score: i32) -> bool {
        (self.min..=self.max).contains(&score)
    }

    /// Score as a percentage of the scale maximum (used for report bars).
    pub fn percent_of_max(&self, score: i32) -> f64 {
        if self.max == 0 {
            0.0
        } else {
            (score as f64 / self.max as f64) * 100.0
        }
    }
}

/// Raw scores keyed by archetype id.
///
/// Entries keep insertion order. Re-inserting an id replaces its score in
/// place without moving it, so ranking ties resolve in the order the
/// archetypes were first rated. JSON round-trips keep the document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawScoreMap {
    entries: Vec<(String, i32)>,
}

impl RawScoreMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Score for `id`, if it was rated.
    pub fn get(&self, id: &str) -> Option<i32> {
        self.entries
            .iter()
            .find(|(key, _)| key == id)
            .map(|(_, score)| *score)
    }

    /// Score for `id`, or 0 when it was never rated.
    pub fn score(&self, id: &str) -> i32 {
        self.get(id).unwrap_or(0)
    }

    /// Set the score for `id`, returning the previous score if there was one.
    pub fn insert(&mut self, id: impl Into<String>, score: i32) -> Option<i32> {
        let id = id.into();
        match self.entries.iter_mut().find(|(key, _)| *key == id) {
            Some((_, existing)) => Some(std::mem::replace(existing, score)),
            None => {
                self.entries.push((id, score));
                None
            }
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entries.iter().any(|(key, _)| key == id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Rated entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, i32)> + '_ {
        self.entries
            .iter()
            .map(|(key, score)| (key.as_str(), *score))
    }
}

impl<S: Into<String>> FromIterator<(S, i32)> for RawScoreMap {
    fn from_iter<I: IntoIterator<Item = (S, i32)>>(iter: I) -> Self {
        let mut map = RawScoreMap::new();
        for (id, score) in iter {
            map.insert(id, score);
        }
        map
    }
}

impl Serialize for RawScoreMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (id, score) in &self.entries {
            map.serialize_entry(id, score)?;
        }
        map.end()
    }
}

struct RawScoreMapVisitor;

impl<'de> Visitor<'de> for RawScoreMapVisitor {
    type Value = RawScoreMap;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map of archetype ids to integer scores")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> std::result::Result<RawScoreMap, A::Error> {
        let mut map = RawScoreMap::new();
        while let Some((id, score)) = access.next_entry::<String, i32>()? {
            map.insert(id, score);
        }
        Ok(map)
    }
}

impl<'de> Deserialize<'de> for RawScoreMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        deserializer.deserialize_map(RawScoreMapVisitor)
    }
}

// ============================================
// Profiles
// ============================================

/// A person's details and raw scores.
///
/// Owned by the assessment flow. The engine only reads it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Storage id assigned outside the engine, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    /// Opaque; never parsed
    #[serde(rename = "dob")]
    pub date_of_birth: String,
    /// Free text
    pub gender: String,
    #[serde(default)]
    pub scores: RawScoreMap,
}

impl UserProfile {
    /// A freshly onboarded profile with no scores yet.
    pub fn new(
        name: impl Into<String>,
        date_of_birth: impl Into<String>,
        gender: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            name: name.into(),
            date_of_birth: date_of_birth.into(),
            gender: gender.into(),
            scores: RawScoreMap::new(),
        }
    }

    /// Score for an archetype id, defaulting to 0.
    pub fn score(&self, id: &str) -> i32 {
        self.scores.score(id)
    }

    /// Load a profile from a JSON file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Write the profile as pretty-printed JSON.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}
