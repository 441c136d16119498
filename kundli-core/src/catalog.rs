//! The archetype catalog
//!
//! Twelve Houses followed by nine Grahas. The standard catalog is built once
//! from embedded data and shared read-only; the engine takes a `&Catalog`
//! parameter so tests can supply synthetic catalogs.

use crate::types::{Archetype, ArchetypeName, Category, GrahaName, HouseName};
use std::sync::OnceLock;

/// Ordered, immutable list of archetypes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    archetypes: Vec<Archetype>,
}

impl Catalog {
    pub fn new(archetypes: Vec<Archetype>) -> Self {
        Self { archetypes }
    }

    /// The built-in 21-archetype catalog.
    pub fn standard() -> &'static Catalog {
        static STANDARD: OnceLock<Catalog> = OnceLock::new();
        STANDARD.get_or_init(|| {
            let catalog = Catalog::new(
                STANDARD_ARCHETYPES
                    .iter()
                    .map(|(id, name, title, description, icon)| {
                        Archetype::new(*id, *name, *title, *description, *icon)
                    })
                    .collect(),
            );
            tracing::debug!(archetypes = catalog.len(), "Loaded standard catalog");
            catalog
        })
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Archetype> {
        self.archetypes.iter()
    }

    pub fn len(&self) -> usize {
        self.archetypes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.archetypes.is_empty()
    }

    /// Look up an archetype by id.
    pub fn get(&self, id: &str) -> Option<&Archetype> {
        self.archetypes.iter().find(|a| a.id == id)
    }

    /// Look up an archetype by canonical name.
    pub fn find_by_name(&self, name: ArchetypeName) -> Option<&Archetype> {
        self.archetypes.iter().find(|a| a.name == name)
    }

    /// Archetypes of one category, in catalog order.
    pub fn of_category(&self, category: Category) -> impl Iterator<Item = &Archetype> + '_ {
        self.archetypes
            .iter()
            .filter(move |a| a.category() == category)
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Archetype;
    type IntoIter = std::slice::Iter<'a, Archetype>;

    fn into_iter(self) -> Self::IntoIter {
        self.archetypes.iter()
    }
}

type ArchetypeRow = (
    &'static str,
    ArchetypeName,
    &'static str,
    &'static str,
    &'static str,
);

const STANDARD_ARCHETYPES: [ArchetypeRow; 21] = [
    // Houses
    (
        "h1",
        ArchetypeName::House(HouseName::First),
        "Self & Identity",
        "How you show up in the world: your sense of self, presence and the way you assert who you are.",
        "user",
    ),
    (
        "h2",
        ArchetypeName::House(HouseName::Second),
        "Values & Security",
        "What you hold on to: resources, self-worth and the things that make you feel safe.",
        "gem",
    ),
    (
        "h3",
        ArchetypeName::House(HouseName::Third),
        "Expression & Courage",
        "How you speak up, take initiative and share your thinking with the people around you.",
        "message-circle",
    ),
    (
        "h4",
        ArchetypeName::House(HouseName::Fourth),
        "Emotional Foundations",
        "Your roots: home, family patterns and the inner sense of belonging you return to.",
        "home",
    ),
    (
        "h5",
        ArchetypeName::House(HouseName::Fifth),
        "Creativity & Play",
        "Joy, romance and self-expression for its own sake. The inner child at play.",
        "palette",
    ),
    (
        "h6",
        ArchetypeName::House(HouseName::Sixth),
        "Discipline & Mastery",
        "Daily routines, health and the craft of getting better at what you do.",
        "hammer",
    ),
    (
        "h7",
        ArchetypeName::House(HouseName::Seventh),
        "Partnership & Bonding",
        "How you relate one-on-one: commitment, attachment and what you seek in a partner.",
        "heart-handshake",
    ),
    (
        "h8",
        ArchetypeName::House(HouseName::Eighth),
        "Depth & Shadow",
        "Intimacy, transformation and your relationship with what is hidden or feared.",
        "moon-star",
    ),
    (
        "h9",
        ArchetypeName::House(HouseName::Ninth),
        "Belief & Exploration",
        "Meaning, philosophy and the urge to travel beyond the familiar.",
        "compass",
    ),
    (
        "h10",
        ArchetypeName::House(HouseName::Tenth),
        "Purpose & Achievement",
        "Career, reputation and the legacy you want to build in public.",
        "mountain",
    ),
    (
        "h11",
        ArchetypeName::House(HouseName::Eleventh),
        "Aspirations & Social Vision",
        "Friendships, communities and the future you hope to create with others.",
        "users",
    ),
    (
        "h12",
        ArchetypeName::House(HouseName::Twelfth),
        "Subconscious & Release",
        "Dreams, solitude and the patterns that run beneath conscious awareness.",
        "waves",
    ),
    // Grahas
    (
        "g1",
        ArchetypeName::Graha(GrahaName::Sun),
        "Purpose & Ego Strength",
        "Your core vitality and sense of purpose; the light you bring into a room.",
        "sun",
    ),
    (
        "g2",
        ArchetypeName::Graha(GrahaName::Moon),
        "Emotion & Sensitivity",
        "How you feel, nurture and respond to the emotional weather around you.",
        "moon",
    ),
    (
        "g3",
        ArchetypeName::Graha(GrahaName::Mars),
        "Drive & Conflict Response",
        "Energy, courage and the way you act when challenged.",
        "flame",
    ),
    (
        "g4",
        ArchetypeName::Graha(GrahaName::Mercury),
        "Thinking & Expression",
        "How you process information, reason and communicate ideas.",
        "brain",
    ),
    (
        "g5",
        ArchetypeName::Graha(GrahaName::Jupiter),
        "Growth & Wisdom",
        "Optimism, generosity and the search for a bigger picture.",
        "sparkles",
    ),
    (
        "g6",
        ArchetypeName::Graha(GrahaName::Venus),
        "Love & Pleasure",
        "Affection, beauty and what you find delightful and worth savouring.",
        "heart",
    ),
    (
        "g7",
        ArchetypeName::Graha(GrahaName::Saturn),
        "Discipline & Boundaries",
        "Responsibility, patience and the structures you build to last.",
        "shield",
    ),
    (
        "g8",
        ArchetypeName::Graha(GrahaName::Rahu),
        "Ambition & Obsession",
        "Hunger for the new and the unconventional; where desire pulls you forward.",
        "rocket",
    ),
    (
        "g9",
        ArchetypeName::Graha(GrahaName::Ketu),
        "Detachment & Intuition",
        "Letting go, inner knowing and the pull toward the spiritual.",
        "eye",
    ),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_catalog_shape() {
        let catalog = Catalog::standard();
        assert_eq!(catalog.len(), 21);
        assert_eq!(catalog.of_category(Category::Structural).count(), 12);
        assert_eq!(catalog.of_category(Category::Energetic).count(), 9);
    }

    #[test]
    fn test_standard_catalog_ids_are_unique() {
        let catalog = Catalog::standard();
        for (i, a) in catalog.iter().enumerate() {
            assert!(
                catalog.iter().skip(i + 1).all(|b| b.id != a.id),
                "duplicate id {}",
                a.id
            );
        }
    }

    #[test]
    fn test_every_canonical_name_appears_once() {
        let catalog = Catalog::standard();
        for house in HouseName::ALL {
            assert!(catalog.find_by_name(house.into()).is_some());
        }
        for graha in GrahaName::ALL {
            assert!(catalog.find_by_name(graha.into()).is_some());
        }
    }

    #[test]
    fn test_lookup() {
        let catalog = Catalog::standard();
        let mars = catalog.get("g3").unwrap();
        assert_eq!(mars.name, ArchetypeName::Graha(GrahaName::Mars));
        assert_eq!(mars.title, "Drive & Conflict Response");
        assert!(catalog.get("x1").is_none());
        assert!(Catalog::default()
            .find_by_name(GrahaName::Sun.into())
            .is_none());
    }
}
