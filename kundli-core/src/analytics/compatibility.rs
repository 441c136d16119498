//! Two-profile compatibility
//!
//! The similarity percentage compares raw scores archetype by archetype.
//! The relational details come from a fixed table of named Graha pairs and
//! House zones, evaluated independently of the percentage.

use super::bucket::is_high;
use crate::catalog::Catalog;
use crate::types::{ArchetypeName, GrahaName, HouseName, ScoreScale, UserProfile};
use serde::Serialize;

/// Qualitative label for a compatibility percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum MatchTier {
    Soulmate,
    #[serde(rename = "Deep Connection")]
    DeepConnection,
    Balanced,
    Challenging,
    #[serde(rename = "Karmic Lesson")]
    KarmicLesson,
}

impl MatchTier {
    /// Tier for a percentage, checked from the top down.
    pub fn from_score(score: u8) -> Self {
        match score {
            90.. => MatchTier::Soulmate,
            75..=89 => MatchTier::DeepConnection,
            50..=74 => MatchTier::Balanced,
            30..=49 => MatchTier::Challenging,
            _ => MatchTier::KarmicLesson,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MatchTier::Soulmate => "Soulmate",
            MatchTier::DeepConnection => "Deep Connection",
            MatchTier::Balanced => "Balanced",
            MatchTier::Challenging => "Challenging",
            MatchTier::KarmicLesson => "Karmic Lesson",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            MatchTier::Soulmate => {
                "A rare and profound alignment. You mirror each other's deepest truths."
            }
            MatchTier::DeepConnection => {
                "Strong emotional and psychological resonance. You understand each other well."
            }
            MatchTier::Balanced => {
                "A healthy mix of similarities and differences. Growth comes from understanding."
            }
            MatchTier::Challenging => {
                "Significant differences in worldview. Requires patience and open communication."
            }
            MatchTier::KarmicLesson => {
                "Opposing forces. This relationship is a powerful teacher for both of you."
            }
        }
    }
}

impl std::fmt::Display for MatchTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Relational observations, each list in rule order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RelationalDetails {
    pub complementary: Vec<String>,
    pub tensions: Vec<String>,
    pub conflict_zones: Vec<String>,
}

impl RelationalDetails {
    pub fn is_empty(&self) -> bool {
        self.complementary.is_empty() && self.tensions.is_empty() && self.conflict_zones.is_empty()
    }
}

/// Result of comparing two profiles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompatibilityResult {
    /// Similarity percentage, 0-100
    pub score: u8,
    pub match_tier: MatchTier,
    pub description: String,
    pub details: RelationalDetails,
}

/// A pair of Grahas that produces a message when one profile is high in
/// one and the other profile is high in the other, in either direction.
struct PairRule {
    first: GrahaName,
    second: GrahaName,
    message: &'static str,
}

/// A House that is a potential flashpoint when both profiles are high in it.
struct ZoneRule {
    house: HouseName,
    label: &'static str,
}

const COMPLEMENTARY_RULES: [PairRule; 5] = [
    PairRule {
        first: GrahaName::Sun,
        second: GrahaName::Jupiter,
        message: "Sun & Jupiter: Purpose meets wisdom. One sets the direction, the other widens the horizon.",
    },
    PairRule {
        first: GrahaName::Moon,
        second: GrahaName::Venus,
        message: "Moon & Venus: Emotional nurturing meets affection. A naturally tender, caring bond.",
    },
    PairRule {
        first: GrahaName::Mars,
        second: GrahaName::Mercury,
        message: "Mars & Mercury: Drive meets strategy. Ideas turn into action quickly.",
    },
    PairRule {
        first: GrahaName::Saturn,
        second: GrahaName::Sun,
        message: "Saturn & Sun: Structure supports purpose. Ambitions get the discipline they need to last.",
    },
    PairRule {
        first: GrahaName::Rahu,
        second: GrahaName::Mars,
        message: "Rahu & Mars: A shared hunger for the new. A bold, adventurous partnership.",
    },
];

const TENSION_RULES: [PairRule; 5] = [
    PairRule {
        first: GrahaName::Mars,
        second: GrahaName::Moon,
        message: "Mars vs Moon: Directness can feel harsh to emotional sensitivity. Slow down in heated moments.",
    },
    PairRule {
        first: GrahaName::Venus,
        second: GrahaName::Saturn,
        message: "Venus vs Saturn: Pleasure meets restraint. One seeks enjoyment while the other puts duty first.",
    },
    PairRule {
        first: GrahaName::Rahu,
        second: GrahaName::Saturn,
        message: "Rahu vs Saturn: Restless ambition strains against caution and routine.",
    },
    PairRule {
        first: GrahaName::Sun,
        second: GrahaName::Ketu,
        message: "Sun vs Ketu: The need to be seen clashes with the urge to withdraw.",
    },
    PairRule {
        first: GrahaName::Mercury,
        second: GrahaName::Moon,
        message: "Mercury vs Moon: Logic versus feeling. Analysis can leave emotional needs unheard.",
    },
];

const KETU_STABILIZER: &str =
    "Ketu stabilizes emotional intensity: calm detachment gives deep feelings room to settle.";

const CONFLICT_ZONES: [ZoneRule; 4] = [
    ZoneRule {
        house: HouseName::Fourth,
        label: "Emotional Security & Home",
    },
    ZoneRule {
        house: HouseName::Seventh,
        label: "Relationships & Intimacy",
    },
    ZoneRule {
        house: HouseName::Tenth,
        label: "Career & Public Image",
    },
    ZoneRule {
        house: HouseName::Twelfth,
        label: "Unconscious Patterns",
    },
];

/// Compare two profiles on the standard scale.
pub fn compare(a: &UserProfile, b: &UserProfile, catalog: &Catalog) -> CompatibilityResult {
    let score = similarity_percentage(a, b, catalog, ScoreScale::STANDARD);
    let match_tier = MatchTier::from_score(score);
    let details = relational_details(a, b, catalog);

    tracing::debug!(
        a = %a.name,
        b = %b.name,
        score,
        tier = match_tier.as_str(),
        complementary = details.complementary.len(),
        tensions = details.tensions.len(),
        conflict_zones = details.conflict_zones.len(),
        "Computed compatibility"
    );

    CompatibilityResult {
        score,
        match_tier,
        description: match_tier.description().to_string(),
        details,
    }
}

/// Normalized similarity of two profiles over every catalog archetype.
///
/// Unrated archetypes read as 0. An empty catalog yields 0. Scores outside
/// `scale` can push the raw value below 0, so the result is clamped to
/// 0-100.
pub fn similarity_percentage(
    a: &UserProfile,
    b: &UserProfile,
    catalog: &Catalog,
    scale: ScoreScale,
) -> u8 {
    let (total_diff, max_diff) = catalog.iter().fold((0i64, 0i64), |(total, max), archetype| {
        let diff = (i64::from(a.score(&archetype.id)) - i64::from(b.score(&archetype.id))).abs();
        (total + diff, max + i64::from(scale.range()))
    });

    if max_diff == 0 {
        return 0;
    }

    let ratio = (max_diff - total_diff) as f64 / max_diff as f64;
    // Half-up rounding
    let percentage = (ratio * 100.0 + 0.5).floor();
    percentage.clamp(0.0, 100.0) as u8
}

/// Evaluate the named pair and zone rules for `a` against `b`.
pub fn relational_details(a: &UserProfile, b: &UserProfile, catalog: &Catalog) -> RelationalDetails {
    let high = |profile: &UserProfile, name: ArchetypeName| is_high(score_by_name(profile, catalog, name));

    let pair_fires = |rule: &PairRule| {
        let (x, y) = (ArchetypeName::Graha(rule.first), ArchetypeName::Graha(rule.second));
        (high(a, x) && high(b, y)) || (high(a, y) && high(b, x))
    };

    let mut complementary: Vec<String> = COMPLEMENTARY_RULES
        .iter()
        .filter(|rule| pair_fires(*rule))
        .map(|rule| rule.message.to_string())
        .collect();

    // One direction only: a's Ketu against b's Moon or Venus.
    if high(a, GrahaName::Ketu.into())
        && (high(b, GrahaName::Moon.into()) || high(b, GrahaName::Venus.into()))
    {
        complementary.push(KETU_STABILIZER.to_string());
    }

    let tensions = TENSION_RULES
        .iter()
        .filter(|rule| pair_fires(*rule))
        .map(|rule| rule.message.to_string())
        .collect();

    let conflict_zones = CONFLICT_ZONES
        .iter()
        .filter(|zone| high(a, zone.house.into()) && high(b, zone.house.into()))
        .map(|zone| zone.label.to_string())
        .collect();

    RelationalDetails {
        complementary,
        tensions,
        conflict_zones,
    }
}

/// Score for a named archetype, 0 if the catalog has no such archetype.
fn score_by_name(profile: &UserProfile, catalog: &Catalog, name: ArchetypeName) -> i32 {
    catalog
        .find_by_name(name)
        .map(|archetype| profile.score(&archetype.id))
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Archetype;

    fn profile(scores: &[(&str, i32)]) -> UserProfile {
        let mut p = UserProfile::new("P", "", "");
        for (id, score) in scores {
            p.scores.insert(*id, *score);
        }
        p
    }

    #[test]
    fn test_tier_thresholds() {
        assert_eq!(MatchTier::from_score(100), MatchTier::Soulmate);
        assert_eq!(MatchTier::from_score(90), MatchTier::Soulmate);
        assert_eq!(MatchTier::from_score(89), MatchTier::DeepConnection);
        assert_eq!(MatchTier::from_score(75), MatchTier::DeepConnection);
        assert_eq!(MatchTier::from_score(74), MatchTier::Balanced);
        assert_eq!(MatchTier::from_score(50), MatchTier::Balanced);
        assert_eq!(MatchTier::from_score(49), MatchTier::Challenging);
        assert_eq!(MatchTier::from_score(30), MatchTier::Challenging);
        assert_eq!(MatchTier::from_score(29), MatchTier::KarmicLesson);
        assert_eq!(MatchTier::from_score(0), MatchTier::KarmicLesson);
    }

    #[test]
    fn test_similarity_rounds_half_up() {
        // One archetype: diff 6 of 12 -> exactly 50%
        let catalog = Catalog::new(vec![Archetype::new("g1", GrahaName::Sun, "", "", "")]);
        let a = profile(&[("g1", 15)]);
        let b = profile(&[("g1", 9)]);
        assert_eq!(similarity_percentage(&a, &b, &catalog, ScoreScale::STANDARD), 50);

        // Eight archetypes, total diff 1 of 96 -> 98.958 -> 99
        let catalog = Catalog::new(
            GrahaName::ALL[..8]
                .iter()
                .enumerate()
                .map(|(i, g)| Archetype::new(format!("g{}", i + 1), *g, "", "", ""))
                .collect(),
        );
        let a = profile(&[("g1", 10)]);
        let b = profile(&[("g1", 11)]);
        assert_eq!(similarity_percentage(&a, &b, &catalog, ScoreScale::STANDARD), 99);
    }

    #[test]
    fn test_similarity_empty_catalog_is_zero() {
        let a = profile(&[("g1", 12)]);
        let result = compare(&a, &a, &Catalog::default());
        assert_eq!(result.score, 0);
        assert_eq!(result.match_tier, MatchTier::KarmicLesson);
        assert!(result.details.is_empty());
    }

    #[test]
    fn test_similarity_clamps_out_of_range_scores() {
        let catalog = Catalog::new(vec![Archetype::new("g1", GrahaName::Sun, "", "", "")]);
        let a = profile(&[("g1", 40)]);
        let b = profile(&[("g1", -5)]);
        assert_eq!(similarity_percentage(&a, &b, &catalog, ScoreScale::STANDARD), 0);
    }

    #[test]
    fn test_ketu_rule_is_one_directional() {
        let catalog = Catalog::standard();
        let ketu = catalog.find_by_name(GrahaName::Ketu.into()).unwrap();
        let moon = catalog.find_by_name(GrahaName::Moon.into()).unwrap();
        let a = profile(&[(ketu.id.as_str(), 12)]);
        let b = profile(&[(moon.id.as_str(), 12)]);

        let forward = relational_details(&a, &b, catalog);
        assert!(forward
            .complementary
            .iter()
            .any(|m| m.starts_with("Ketu stabilizes emotional intensity")));

        let backward = relational_details(&b, &a, catalog);
        assert!(backward.complementary.is_empty());
    }

    #[test]
    fn test_pair_rules_fire_in_both_directions() {
        let catalog = Catalog::standard();
        let mars = &catalog.find_by_name(GrahaName::Mars.into()).unwrap().id;
        let mercury = &catalog.find_by_name(GrahaName::Mercury.into()).unwrap().id;
        let a = profile(&[(mars.as_str(), 11)]);
        let b = profile(&[(mercury.as_str(), 11)]);

        let ab = relational_details(&a, &b, catalog);
        let ba = relational_details(&b, &a, catalog);
        assert_eq!(ab.complementary.len(), 1);
        assert!(ab.complementary[0].starts_with("Mars & Mercury"));
        assert_eq!(ab.complementary, ba.complementary);
    }

    #[test]
    fn test_pair_rule_needs_high_on_both_sides() {
        let catalog = Catalog::standard();
        let sun = &catalog.find_by_name(GrahaName::Sun.into()).unwrap().id;
        let jupiter = &catalog.find_by_name(GrahaName::Jupiter.into()).unwrap().id;
        let a = profile(&[(sun.as_str(), 15)]);
        let b = profile(&[(jupiter.as_str(), 10)]);
        assert!(relational_details(&a, &b, catalog).complementary.is_empty());
    }

    #[test]
    fn test_rules_keep_table_order() {
        let catalog = Catalog::standard();
        let all_high: Vec<(&str, i32)> = catalog.iter().map(|a| (a.id.as_str(), 15)).collect();
        let a = profile(&all_high);
        let b = profile(&all_high);
        let details = relational_details(&a, &b, catalog);

        let complementary_heads: Vec<_> = details
            .complementary
            .iter()
            .map(|m| m.split(':').next().unwrap_or_default())
            .collect();
        assert_eq!(
            complementary_heads,
            vec![
                "Sun & Jupiter",
                "Moon & Venus",
                "Mars & Mercury",
                "Saturn & Sun",
                "Rahu & Mars",
                "Ketu stabilizes emotional intensity",
            ]
        );
        assert_eq!(details.tensions.len(), 5);
        assert!(details.tensions[0].starts_with("Mars vs Moon"));
        assert!(details.tensions[4].starts_with("Mercury vs Moon"));
        assert_eq!(
            details.conflict_zones,
            vec![
                "Emotional Security & Home",
                "Relationships & Intimacy",
                "Career & Public Image",
                "Unconscious Patterns",
            ]
        );
    }

    #[test]
    fn test_named_rules_default_to_zero_when_catalog_lacks_names() {
        // Catalog without any Grahas: named lookups read 0 and nothing fires.
        let catalog = Catalog::new(vec![Archetype::new("h4", HouseName::Fourth, "", "", "")]);
        let a = profile(&[("g1", 15), ("g5", 15), ("h4", 12)]);
        let b = profile(&[("g1", 15), ("g5", 15), ("h4", 12)]);
        let details = relational_details(&a, &b, &catalog);
        assert!(details.complementary.is_empty());
        assert!(details.tensions.is_empty());
        assert_eq!(details.conflict_zones, vec!["Emotional Security & Home"]);
    }
}
