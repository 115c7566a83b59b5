//! Threshold rule table

use crate::inputs::fields::SemanticField;

/// Condition under which a field reads as negative
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Threshold {
    /// Negative when strictly below the bound
    Below(f64),
    /// Negative when strictly above the bound
    Above(f64),
}

impl Threshold {
    /// True if `value` falls on the negative side (boundary is not negative)
    pub fn is_negative(&self, value: f64) -> bool {
        match *self {
            Threshold::Below(bound) => value < bound,
            Threshold::Above(bound) => value > bound,
        }
    }
}

/// One per-field commentary rule
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExplanationRule {
    /// Field the rule reads
    pub field: SemanticField,
    /// Negative-side condition
    pub threshold: Threshold,
    /// Message when the condition holds
    pub negative: &'static str,
    /// Message otherwise
    pub positive: &'static str,
}

/// Commentary rules, in display order
pub const RULES: [ExplanationRule; 6] = [
    ExplanationRule {
        field: SemanticField::GdpPerCapita,
        threshold: Threshold::Below(0.6),
        negative: "💰 Low GDP per capita may reduce happiness.",
        positive: "💰 Higher GDP per capita contributes positively.",
    },
    ExplanationRule {
        field: SemanticField::HealthyLifeExpectancy,
        threshold: Threshold::Below(0.6),
        negative: "🏥 Shorter healthy life expectancy lowers happiness.",
        positive: "🏥 Longer healthy life expectancy boosts happiness.",
    },
    ExplanationRule {
        field: SemanticField::FreedomToMakeLifeChoices,
        threshold: Threshold::Below(0.4),
        negative: "🗽 Limited freedom reduces well-being.",
        positive: "🗽 Strong freedom of choice increases well-being.",
    },
    ExplanationRule {
        field: SemanticField::SocialSupport,
        threshold: Threshold::Below(0.6),
        negative: "👥 Weak social support lowers happiness.",
        positive: "👥 Strong social support increases happiness.",
    },
    ExplanationRule {
        field: SemanticField::Generosity,
        threshold: Threshold::Below(0.2),
        negative: "🎁 Low generosity has little positive impact.",
        positive: "🎁 High generosity supports social trust.",
    },
    ExplanationRule {
        field: SemanticField::PerceptionsOfCorruption,
        threshold: Threshold::Above(0.7),
        negative: "⚖️ High corruption perception reduces happiness.",
        positive: "⚖️ Lower corruption perception supports happiness.",
    },
];
