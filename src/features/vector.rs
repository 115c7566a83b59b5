//! Schema-ordered feature vector

use serde::{Deserialize, Serialize};

/// One model input column and its value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureValue {
    /// Schema column name
    pub column: String,
    /// Numeric value fed to the model
    pub value: f64,
}

/// A single model input row
///
/// Positions correspond one-to-one with the feature schema the vector was
/// built from; each value travels with its column name so alignment can be
/// checked rather than assumed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    entries: Vec<FeatureValue>,
}

impl FeatureVector {
    /// Build a vector from (column, value) pairs, keeping their order
    pub fn from_pairs<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        Self {
            entries: pairs
                .into_iter()
                .map(|(column, value)| FeatureValue {
                    column: column.into(),
                    value,
                })
                .collect(),
        }
    }

    /// Number of columns
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if the vector has no columns
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in schema order
    pub fn entries(&self) -> &[FeatureValue] {
        &self.entries
    }

    /// Column names in order
    pub fn columns(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|e| e.column.as_str())
    }

    /// Bare values in order, as a model consumes them
    pub fn values(&self) -> Vec<f64> {
        self.entries.iter().map(|e| e.value).collect()
    }

    /// Value of `column`, if present
    pub fn get(&self, column: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|e| e.column == column)
            .map(|e| e.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_pairs_keeps_order() {
        let vector = FeatureVector::from_pairs([("year", 2020.0), ("generosity", 0.2)]);
        assert_eq!(vector.columns().collect::<Vec<_>>(), vec!["year", "generosity"]);
        assert_eq!(vector.values(), vec![2020.0, 0.2]);
        assert_eq!(vector.get("generosity"), Some(0.2));
        assert_eq!(vector.get("social_support"), None);
    }
}
