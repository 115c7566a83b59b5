//! Linear regression model loading and inference

use super::Predictor;
use crate::error::PredictionError;
use crate::features::FeatureVector;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Linear regression model: `intercept + Σ coefficient_i · x_i`
///
/// Serialized as `{ "feature_names": [...], "coefficients": [...], "intercept": f64 }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearModel {
    feature_names: Vec<String>,
    coefficients: Vec<f64>,
    intercept: f64,
}

impl LinearModel {
    /// Create a model from its parameters
    ///
    /// # Errors
    ///
    /// Returns `PredictionError::ArtifactError` if the name and coefficient
    /// counts differ, the model has no features, or any parameter is not
    /// finite.
    pub fn new(
        feature_names: Vec<String>,
        coefficients: Vec<f64>,
        intercept: f64,
    ) -> Result<Self, PredictionError> {
        let model = Self {
            feature_names,
            coefficients,
            intercept,
        };
        model.validate()?;
        Ok(model)
    }

    /// Parse a model from its JSON artifact text
    pub fn from_json(text: &str) -> Result<Self, PredictionError> {
        let model: LinearModel = serde_json::from_str(text)?;
        model.validate()?;
        Ok(model)
    }

    /// Model intercept
    pub fn intercept(&self) -> f64 {
        self.intercept
    }

    /// Coefficients in feature order
    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    fn validate(&self) -> Result<(), PredictionError> {
        if self.feature_names.is_empty() {
            return Err(PredictionError::ArtifactError(
                "Model has no features".to_string(),
            ));
        }
        if self.feature_names.len() != self.coefficients.len() {
            return Err(PredictionError::ArtifactError(format!(
                "Model has {} feature names but {} coefficients",
                self.feature_names.len(),
                self.coefficients.len()
            )));
        }
        if !self.intercept.is_finite() || self.coefficients.iter().any(|c| !c.is_finite()) {
            return Err(PredictionError::ArtifactError(
                "Model parameters must be finite".to_string(),
            ));
        }
        Ok(())
    }
}

impl Predictor for LinearModel {
    fn predict(&self, vector: &FeatureVector) -> Result<f64, PredictionError> {
        log::debug!("Running linear inference on {} features", vector.len());

        if vector.len() != self.feature_names.len() {
            return Err(PredictionError::ModelError(format!(
                "Expected {} features, got {}",
                self.feature_names.len(),
                vector.len()
            )));
        }

        let mut score = self.intercept;
        for ((entry, name), coefficient) in vector
            .entries()
            .iter()
            .zip(&self.feature_names)
            .zip(&self.coefficients)
        {
            if &entry.column != name {
                return Err(PredictionError::ModelError(format!(
                    "Feature '{}' found where model expects '{}'",
                    entry.column, name
                )));
            }
            score += coefficient * entry.value;
        }

        if !score.is_finite() {
            return Err(PredictionError::ModelError(
                "Prediction is not a finite number".to_string(),
            ));
        }
        Ok(score)
    }

    fn feature_names(&self) -> Option<&[String]> {
        Some(&self.feature_names)
    }
}

/// Load a linear model from a JSON artifact
///
/// # Errors
///
/// Returns `PredictionError::ArtifactError` if the file cannot be read or the
/// model is malformed.
pub fn load_model(path: impl AsRef<Path>) -> Result<LinearModel, PredictionError> {
    let path = path.as_ref();
    log::debug!("Loading model from: {}", path.display());

    let text = fs::read_to_string(path).map_err(|e| {
        PredictionError::ArtifactError(format!("{}: {}", path.display(), e))
    })?;
    let model = LinearModel::from_json(&text)?;

    log::info!("Loaded linear model with {} features", model.feature_names.len());
    Ok(model)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_predict_weighted_sum() {
        let model = LinearModel::new(
            names(&["gdp_per_capita", "generosity"]),
            vec![2.0, 1.0],
            3.0,
        )
        .unwrap();
        let vector =
            FeatureVector::from_pairs([("gdp_per_capita", 0.5), ("generosity", 0.25)]);
        let score = model.predict(&vector).unwrap();
        assert!((score - 4.25).abs() < 1e-12);
    }

    #[test]
    fn test_predict_rejects_misaligned_vector() {
        let model = LinearModel::new(
            names(&["gdp_per_capita", "generosity"]),
            vec![2.0, 1.0],
            3.0,
        )
        .unwrap();
        let swapped =
            FeatureVector::from_pairs([("generosity", 0.25), ("gdp_per_capita", 0.5)]);
        assert!(matches!(
            model.predict(&swapped),
            Err(PredictionError::ModelError(_))
        ));

        let short = FeatureVector::from_pairs([("gdp_per_capita", 0.5)]);
        assert!(matches!(
            model.predict(&short),
            Err(PredictionError::ModelError(_))
        ));
    }

    #[test]
    fn test_new_rejects_length_mismatch() {
        let result = LinearModel::new(names(&["year"]), vec![0.1, 0.2], 0.0);
        assert!(matches!(result, Err(PredictionError::ArtifactError(_))));
    }

    #[test]
    fn test_from_json() {
        let model = LinearModel::from_json(
            r#"{"feature_names": ["year"], "coefficients": [0.001], "intercept": 3.5}"#,
        )
        .unwrap();
        assert_eq!(model.intercept(), 3.5);
        assert_eq!(model.feature_names(), Some(&names(&["year"])[..]));
        assert!(LinearModel::from_json(r#"{"feature_names": []}"#).is_err());
    }

    #[test]
    fn test_load_missing_file() {
        assert!(matches!(
            load_model("/nonexistent/final_model.json"),
            Err(PredictionError::ArtifactError(_))
        ));
    }
}
