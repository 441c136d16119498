//! Narrative insights per archetype
//!
//! Each archetype carries two variants: one read when the archetype is
//! strongly expressed and one read when it is under-expressed.

use crate::catalog::Catalog;
use crate::error::{Error, Result};
use serde::Serialize;
use std::collections::HashMap;
use std::sync::OnceLock;

/// Actionable advice plus the psychology behind it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Insight {
    pub insight: String,
    pub psychology: String,
}

impl Insight {
    pub fn new(insight: impl Into<String>, psychology: impl Into<String>) -> Self {
        Self {
            insight: insight.into(),
            psychology: psychology.into(),
        }
    }
}

/// High- and low-expression insights for one archetype.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InsightBundle {
    pub high: Insight,
    pub low: Insight,
}

impl InsightBundle {
    pub fn new(high: Insight, low: Insight) -> Self {
        Self { high, low }
    }
}

/// Insight bundles keyed by archetype id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InsightTable {
    bundles: HashMap<String, InsightBundle>,
}

impl InsightTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insights for the standard catalog.
    pub fn standard() -> &'static InsightTable {
        static STANDARD: OnceLock<InsightTable> = OnceLock::new();
        STANDARD.get_or_init(|| {
            let mut table = InsightTable::new();
            for (id, high_insight, high_psychology, low_insight, low_psychology) in
                STANDARD_INSIGHTS.iter()
            {
                table.insert(
                    *id,
                    InsightBundle::new(
                        Insight::new(*high_insight, *high_psychology),
                        Insight::new(*low_insight, *low_psychology),
                    ),
                );
            }
            table
        })
    }

    pub fn insert(&mut self, id: impl Into<String>, bundle: InsightBundle) -> Option<InsightBundle> {
        self.bundles.insert(id.into(), bundle)
    }

    pub fn get(&self, id: &str) -> Option<&InsightBundle> {
        self.bundles.get(id)
    }

    /// Bundle for `id`, or [`Error::MissingInsight`].
    pub fn require(&self, id: &str) -> Result<&InsightBundle> {
        self.get(id)
            .ok_or_else(|| Error::MissingInsight(id.to_string()))
    }

    pub fn len(&self) -> usize {
        self.bundles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bundles.is_empty()
    }

    /// Check that every catalog archetype has a bundle.
    pub fn validate(&self, catalog: &Catalog) -> Result<()> {
        for archetype in catalog {
            self.require(&archetype.id)?;
        }
        Ok(())
    }
}

type InsightRow = (
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    &'static str,
);

// (id, high insight, high psychology, low insight, low psychology)
const STANDARD_INSIGHTS: [InsightRow; 21] = [
    (
        "h1",
        "Channel your strong presence into leadership roles, but practice active listening to avoid dominating others.",
        "High self-assertion indicates a strong ego structure, essential for resilience but potentially leading to narcissism if unchecked.",
        "Practice daily affirmations and take small risks to build confidence. Your voice matters.",
        "Low self-assertion often stems from conditional self-worth, where validation is sought externally rather than internally.",
    ),
    (
        "h2",
        "You have a gift for stability. Use it to build long-term wealth, but don't let material security replace emotional connection.",
        "A strong drive for security reflects a survival-based attachment style, prioritizing safety over spontaneity.",
        "Define your core values clearly. Financial instability often mirrors internal uncertainty about what truly matters.",
        "Low security needs can indicate a 'scarcity mindset' or a rejection of the material world as a defense mechanism.",
    ),
    (
        "h3",
        "Your voice is powerful. Use it to advocate for others, but ensure you are communicating, not just broadcasting.",
        "High expression suggests a need for external validation of internal thoughts, often linked to a desire to be 'heard' and 'seen'.",
        "Challenge yourself to speak up in meetings or groups. Your perspective is unique and valuable.",
        "Reluctance to express often comes from a fear of judgment or a learned behavior that silence equals safety.",
    ),
    (
        "h4",
        "Your emotional depth is a superpower. Create a sanctuary at home, but ensure you don't retreat from the world entirely.",
        "Deep emotional roots indicate high sensitivity and a strong attachment to the past, often serving as a protective shell.",
        "Connect with your roots. Healing family patterns can unlock a new level of emotional freedom for you.",
        "Detachment from emotional foundations can be a defense against past trauma or a way to avoid vulnerability.",
    ),
    (
        "h5",
        "You are a natural creator. Dedicate time to 'useless' play; it's where your genius lies.",
        "A high need for play and expression reflects a strong 'Inner Child' that seeks joy and validation through creation.",
        "Schedule fun. You may be taking life too seriously, stifling your natural spark.",
        "Suppressed creativity often points to a belief that productivity is the only measure of worth.",
    ),
    (
        "h6",
        "Your discipline is admirable. Watch out for burnout; rest is also a productive activity.",
        "High discipline can be a coping mechanism for anxiety, using control and order to manage internal chaos.",
        "Start small. Build one healthy habit at a time to regain a sense of control over your life.",
        "Resistance to routine often stems from a rebellion against authority or a fear of failure if standards aren't met.",
    ),
    (
        "h7",
        "You thrive in connection. Ensure you maintain your own identity within relationships to avoid codependency.",
        "A strong focus on partnership suggests an 'Anxious Attachment' style, where safety is found in connection with others.",
        "Open yourself to collaboration. Independence is strength, but isolation limits your growth.",
        "Avoidance of partnership often reflects an 'Avoidant Attachment' style, prioritizing autonomy to prevent potential hurt.",
    ),
    (
        "h8",
        "You are a transformer. Use your ability to navigate darkness to help others heal, but protect your energy.",
        "Comfort with the shadow suggests a history of navigating intense emotional landscapes, leading to high resilience.",
        "Don't fear the deep end. Vulnerability is not weakness; it's the gateway to true intimacy.",
        "Avoidance of depth usually masks a fear of loss of control or being overwhelmed by intense emotions.",
    ),
    (
        "h9",
        "You are a seeker. Share your wisdom, but remain open to the fact that truth has many faces.",
        "A strong quest for meaning reflects a need to transcend the mundane, often driven by existential curiosity.",
        "Expand your horizons. Read a book on a new topic or travel somewhere new to spark your curiosity.",
        "A narrowed worldview can be a defense against the uncertainty and complexity of the larger world.",
    ),
    (
        "h10",
        "You are built for success. Ensure your ladder is leaning against the right wall: does this path truly fulfill you?",
        "High ambition often compensates for feelings of inadequacy, using external achievement to build internal worth.",
        "Set one long-term goal. A sense of direction can reduce anxiety and give your days meaning.",
        "Lack of ambition may stem from a fear of failure or a belief that success is not 'for people like me'.",
    ),
    (
        "h11",
        "You are a connector. Use your network to create positive change, but don't lose yourself in the crowd.",
        "A focus on the collective suggests a need for belonging and a desire to be part of something greater than oneself.",
        "Reach out to a friend today. Community is a buffer against life's stressors.",
        "Social withdrawal often reflects social anxiety or a belief that one does not fit in with the group.",
    ),
    (
        "h12",
        "Trust your intuition. Your sensitivity is a gift; ensure you have enough solitude to recharge.",
        "High access to the subconscious indicates a porous boundary between self and other, leading to high empathy but potential overwhelm.",
        "Pay attention to your dreams. Your subconscious is trying to speak to you; don't ignore it.",
        "Disconnect from the subconscious suggests a repression of intuition in favor of hyper-rationality as a defense.",
    ),
    (
        "g1",
        "Lead with humility. Your light is bright enough to shine without dimming others.",
        "A strong Sun indicates a solid ego-ideal, but can slip into narcissism if the need for admiration overtakes genuine self-worth.",
        "Step into the spotlight. You have a unique purpose; hiding it serves no one.",
        "A weak Sun often points to a 'Father Wound' or a lack of early mirroring, leading to a diminished sense of self.",
    ),
    (
        "g2",
        "Your empathy is world-class. Practice emotional boundaries so you don't carry everyone else's burdens.",
        "High lunar energy reflects deep emotional intelligence but can lead to emotional flooding if regulation skills are low.",
        "Check in with your feelings. Ignoring emotions doesn't make them go away; it makes them somatic.",
        "Suppressed lunar energy is often a learned response to an environment where emotions were seen as weakness.",
    ),
    (
        "g3",
        "You are a warrior. Pick your battles wisely; not everything requires a full-force response.",
        "High Martian energy indicates a strong 'Fight' response, useful for survival but potentially destructive in relationships.",
        "Stand your ground. Healthy aggression is necessary for setting boundaries and achieving goals.",
        "Low Mars energy often reflects a 'Fawn' response, prioritizing appeasement over self-protection.",
    ),
    (
        "g4",
        "Your mind is a supercomputer. Practice mindfulness to give your racing thoughts a break.",
        "High Mercurial energy suggests high cognitive processing speed, but can lead to anxiety and analysis paralysis.",
        "Write it down. Journaling can help clarify your thoughts and improve your communication.",
        "Difficulty with Mercury often stems from a fear of being misunderstood or 'sounding stupid'.",
    ),
    (
        "g5",
        "Your optimism is magnetic. Ensure your grand plans are grounded in reality to avoid over-promising.",
        "Strong Jupiterian energy reflects a 'Growth Mindset', but can lead to spiritual bypassing or ignoring necessary details.",
        "Look for the silver lining. Cultivating gratitude can shift your entire perspective.",
        "Low Jupiter energy often indicates learned helplessness or a cynical worldview developed as a defense against disappointment.",
    ),
    (
        "g6",
        "You are an artist of life. Enjoy the beauty, but remember that true connection goes deeper than aesthetics.",
        "High Venusian energy prioritizes harmony and pleasure, sometimes at the expense of addressing difficult truths.",
        "Treat yourself. You deserve pleasure and beauty; it's not frivolous, it's nourishing.",
        "Blocking Venus often comes from a belief that one is unworthy of love or that pleasure must be 'earned' through suffering.",
    ),
    (
        "g7",
        "You are the rock. Your reliability is unmatched, but don't let duty crush your joy.",
        "Strong Saturnian energy reflects a high capacity for delayed gratification, but can lead to rigidity and depression.",
        "Commit to one thing. Discipline is freedom; it builds the structure your dreams need to survive.",
        "Avoiding Saturn is often a rebellion against the 'Father' archetype or a fear of the weight of responsibility.",
    ),
    (
        "g8",
        "You are a visionary. Your hunger for the new is powerful; just ensure you aren't running from yourself.",
        "High Rahu energy indicates a drive to break patterns, often fueled by a deep-seated feeling of 'not enoughness'.",
        "Step out of your comfort zone. Growth happens at the edge of the unknown.",
        "Low Rahu energy suggests a preference for the known and safe, potentially leading to stagnation.",
    ),
    (
        "g9",
        "You are a mystic. Your detachment is a strength, but stay connected enough to function in the world.",
        "High Ketu energy reflects a natural ability to dissociate or transcend, which can be spiritual or escapist.",
        "Let go. Holding on to the past prevents your hands from receiving the future.",
        "Low Ketu energy indicates a strong attachment to the material world or past identity, fearing the void of the unknown.",
    ),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_table_covers_standard_catalog() {
        let table = InsightTable::standard();
        assert_eq!(table.len(), 21);
        assert!(table.validate(Catalog::standard()).is_ok());
    }

    #[test]
    fn test_require_missing_bundle() {
        let table = InsightTable::new();
        match table.require("h1") {
            Err(Error::MissingInsight(id)) => assert_eq!(id, "h1"),
            other => panic!("expected MissingInsight, got {:?}", other),
        }
    }

    #[test]
    fn test_high_and_low_variants_differ() {
        let bundle = InsightTable::standard().get("g3").unwrap();
        assert!(bundle.high.insight.starts_with("You are a warrior"));
        assert!(bundle.low.insight.starts_with("Stand your ground"));
    }
}
