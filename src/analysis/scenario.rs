//! Single-scenario pipeline

use crate::error::PredictionError;
use crate::explain::{explain, Explanation};
use crate::features::{build_feature_vector, FeatureVector};
use crate::inputs::RawInputs;
use crate::model::Predictor;
use crate::schema::SchemaMapping;
use serde::Serialize;

/// One complete set of inputs and everything derived from it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scenario {
    /// Display name ("Scenario A", "Single Prediction", ...)
    pub name: String,
    /// Collected inputs
    pub inputs: RawInputs,
    /// Model input row
    pub features: FeatureVector,
    /// Predicted happiness score
    pub prediction: f64,
    /// Commentary lines, in rule order
    pub explanations: Vec<Explanation>,
}

/// Run Builder → Predictor → Explainer for one set of inputs
///
/// # Arguments
///
/// * `name` - Display name for the scenario
/// * `inputs` - Collected inputs
/// * `mapping` - Resolved schema mapping
/// * `model` - Scoring function
///
/// # Errors
///
/// Propagates builder errors and predictor failures unchanged. Returns
/// `PredictionError::ModelError` if the predictor yields a non-finite score.
pub fn run_scenario<P: Predictor + ?Sized>(
    name: impl Into<String>,
    inputs: RawInputs,
    mapping: &SchemaMapping,
    model: &P,
) -> Result<Scenario, PredictionError> {
    let name = name.into();

    let features = build_feature_vector(&inputs, mapping)?;
    let prediction = model.predict(&features)?;
    if !prediction.is_finite() {
        return Err(PredictionError::ModelError(format!(
            "{}: model returned non-finite score {}",
            name, prediction
        )));
    }
    let explanations = explain(&features);

    log::debug!(
        "{}: prediction={:.4}, {} explanation lines",
        name,
        prediction,
        explanations.len()
    );

    Ok(Scenario {
        name,
        inputs,
        features,
        prediction,
        explanations,
    })
}
