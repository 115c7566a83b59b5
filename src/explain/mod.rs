//! Rule-based commentary
//!
//! Each recognized field present in an input row yields one short message,
//! chosen by an independent threshold rule. There is no weighting or
//! aggregation across fields.

pub mod rules;

use crate::features::FeatureVector;
use crate::inputs::fields::SemanticField;
use rules::{ExplanationRule, RULES};
use serde::{Deserialize, Serialize};

/// Whether a field reads as helping or hurting the score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sentiment {
    /// Field supports happiness
    Positive,
    /// Field weighs on happiness
    Negative,
}

/// One line of commentary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Explanation {
    /// Field the line is about
    pub field: SemanticField,
    /// Direction of the comment
    pub sentiment: Sentiment,
    /// Display text
    pub message: String,
}

impl ExplanationRule {
    /// Apply this rule to a value
    pub fn apply(&self, value: f64) -> Explanation {
        let (sentiment, message) = if self.threshold.is_negative(value) {
            (Sentiment::Negative, self.negative)
        } else {
            (Sentiment::Positive, self.positive)
        };
        Explanation {
            field: self.field,
            sentiment,
            message: message.to_string(),
        }
    }
}

/// Explain one input row with the built-in rule table
///
/// Rules run in fixed order; a field whose column is absent from the row is
/// skipped silently.
pub fn explain(vector: &FeatureVector) -> Vec<Explanation> {
    explain_with(&RULES, vector)
}

/// Explain one input row with a caller-supplied rule table
pub fn explain_with(rules: &[ExplanationRule], vector: &FeatureVector) -> Vec<Explanation> {
    rules
        .iter()
        .filter_map(|rule| {
            vector
                .get(rule.field.column_name())
                .map(|value| rule.apply(value))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sentiment_of(explanations: &[Explanation], field: SemanticField) -> Option<Sentiment> {
        explanations
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.sentiment)
    }

    fn row(pairs: &[(SemanticField, f64)]) -> FeatureVector {
        FeatureVector::from_pairs(pairs.iter().map(|(f, v)| (f.column_name(), *v)))
    }

    #[test]
    fn test_boundary_values_are_positive() {
        let explanations = explain(&row(&[
            (SemanticField::GdpPerCapita, 0.6),
            (SemanticField::Generosity, 0.2),
            (SemanticField::PerceptionsOfCorruption, 0.7),
        ]));

        assert_eq!(explanations.len(), 3);
        assert!(explanations.iter().all(|e| e.sentiment == Sentiment::Positive));
        assert_eq!(
            explanations[2].message,
            "⚖️ Lower corruption perception supports happiness."
        );
    }

    #[test]
    fn test_absent_fields_skipped() {
        let explanations = explain(&row(&[(SemanticField::SocialSupport, 0.3)]));
        assert_eq!(explanations.len(), 1);
        assert_eq!(explanations[0].field, SemanticField::SocialSupport);
        assert_eq!(explanations[0].sentiment, Sentiment::Negative);
    }

    #[test]
    fn test_order_follows_rules_not_row() {
        let explanations = explain(&row(&[
            (SemanticField::PerceptionsOfCorruption, 0.9),
            (SemanticField::Year, 2020.0),
            (SemanticField::GdpPerCapita, 0.1),
        ]));

        let fields: Vec<SemanticField> = explanations.iter().map(|e| e.field).collect();
        assert_eq!(
            fields,
            vec![SemanticField::GdpPerCapita, SemanticField::PerceptionsOfCorruption]
        );
        assert_eq!(
            sentiment_of(&explanations, SemanticField::GdpPerCapita),
            Some(Sentiment::Negative)
        );
        assert_eq!(sentiment_of(&explanations, SemanticField::Year), None);
    }

    #[test]
    fn test_sub_saharan_row() {
        let explanations = explain(&row(&[
            (SemanticField::GdpPerCapita, 0.7),
            (SemanticField::HealthyLifeExpectancy, 0.5),
            (SemanticField::FreedomToMakeLifeChoices, 0.45),
            (SemanticField::SocialSupport, 0.8),
            (SemanticField::Generosity, 0.2),
            (SemanticField::PerceptionsOfCorruption, 0.85),
        ]));

        let sentiments: Vec<Sentiment> =
            explanations.iter().map(|e| e.sentiment).collect();
        assert_eq!(
            sentiments,
            vec![
                Sentiment::Positive,
                Sentiment::Negative,
                Sentiment::Positive,
                Sentiment::Positive,
                Sentiment::Positive,
                Sentiment::Negative,
            ]
        );
    }
}
