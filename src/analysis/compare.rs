//! Scenario comparison
//!
//! Two scenarios are run independently; the result is the signed difference
//! `prediction_b - prediction_a` and which side, if any, comes out happier.

use super::scenario::{run_scenario, Scenario};
use crate::engine::{SCENARIO_A, SCENARIO_B};
use crate::error::PredictionError;
use crate::inputs::RawInputs;
use crate::model::Predictor;
use crate::schema::SchemaMapping;
use serde::Serialize;

/// Outcome of comparing B against A
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Relation {
    /// B scored higher
    BHappier,
    /// A scored higher
    AHappier,
    /// Scores are exactly equal
    Equal,
}

/// Classify a pair of predictions
///
/// # Returns
///
/// `(difference, relation)` where `difference = b - a`. The equality case is
/// exact: any non-zero difference, however small, picks a side. Scores are
/// expected to be finite; [`run_scenario`] rejects anything else.
pub fn classify(prediction_a: f64, prediction_b: f64) -> (f64, Relation) {
    let difference = prediction_b - prediction_a;
    let relation = if difference == 0.0 {
        Relation::Equal
    } else if difference > 0.0 {
        Relation::BHappier
    } else {
        Relation::AHappier
    };
    (difference, relation)
}

/// Two scenarios and how they relate
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Comparison {
    /// Baseline scenario
    pub scenario_a: Scenario,
    /// Alternative scenario
    pub scenario_b: Scenario,
    /// `scenario_b.prediction - scenario_a.prediction`
    pub difference: f64,
    /// Sign of the difference
    pub relation: Relation,
}

impl Comparison {
    /// Pair two finished scenarios
    pub fn new(scenario_a: Scenario, scenario_b: Scenario) -> Self {
        let (difference, relation) = classify(scenario_a.prediction, scenario_b.prediction);
        Self {
            scenario_a,
            scenario_b,
            difference,
            relation,
        }
    }
}

/// Run both scenarios and compare them
///
/// # Errors
///
/// Returns the first error from either scenario's pipeline.
pub fn compare_scenarios<P: Predictor + ?Sized>(
    inputs_a: RawInputs,
    inputs_b: RawInputs,
    mapping: &SchemaMapping,
    model: &P,
) -> Result<Comparison, PredictionError> {
    let scenario_a = run_scenario(SCENARIO_A, inputs_a, mapping, model)?;
    let scenario_b = run_scenario(SCENARIO_B, inputs_b, mapping, model)?;
    let comparison = Comparison::new(scenario_a, scenario_b);

    log::debug!(
        "Comparison: difference={:.4} ({:?})",
        comparison.difference,
        comparison.relation
    );
    Ok(comparison)
}
