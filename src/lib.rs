//! # Happiness Predictor
//!
//! Prepares user inputs for a pre-trained happiness regression model, scores
//! them, and explains the result with simple per-field commentary.
//!
//! ## Features
//!
//! - **Schema-aligned features**: every model column is resolved once to the
//!   input that produces it; unmapped columns are rejected up front
//! - **One-hot regions**: the region selector is derived from the schema
//! - **Rule-based commentary**: a flat table of per-field threshold rules
//! - **Scenario comparison**: two independent pipelines and a signed difference
//!
//! ## Quick Start
//!
//! ```no_run
//! use happiness_predictor::{Engine, FormValues, PredictorConfig};
//!
//! let engine = Engine::from_artifacts(
//!     "training_columns.json",
//!     "final_model.json",
//!     PredictorConfig::default(),
//! )?;
//!
//! let mut form = FormValues::default();
//! form.set("gdp_per_capita", "1.35")?;
//! form.set("region", "Western Europe")?;
//!
//! let scenario = engine.predict(&form)?;
//! println!("Score: {:.2}", scenario.prediction);
//! for line in &scenario.explanations {
//!     println!("{}", line.message);
//! }
//! # Ok::<(), happiness_predictor::PredictionError>(())
//! ```
//!
//! ## Architecture
//!
//! ```text
//! Input Collector → Feature Vector Builder → Predictor → Explainer → Report
//! ```
//!
//! Comparison runs two independent instances of this pipeline.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod analysis;
pub mod config;
pub mod engine;
pub mod error;
pub mod explain;
pub mod features;
pub mod inputs;
pub mod model;
pub mod schema;

// Re-export main types
pub use analysis::compare::{classify, Comparison, Relation};
pub use analysis::scenario::Scenario;
pub use config::PredictorConfig;
pub use engine::{Engine, Mode, Request, Response};
pub use error::PredictionError;
pub use explain::{Explanation, Sentiment};
pub use features::{FeatureValue, FeatureVector};
pub use inputs::fields::SemanticField;
pub use inputs::{FormValues, RawInputs};
pub use model::{LinearModel, Predictor};
pub use schema::{FeatureSchema, SchemaMapping};

/// Score one set of collected inputs
///
/// Runs Feature Vector Builder → Predictor → Explainer against an already
/// resolved schema mapping. Use [`Engine`] to also collect inputs from a form.
///
/// # Arguments
///
/// * `inputs` - Collected inputs covering every direct schema column
/// * `mapping` - Resolved schema mapping
/// * `model` - Scoring function
///
/// # Errors
///
/// Returns `PredictionError` if the inputs do not cover the schema or the
/// model fails.
///
/// # Example
///
/// ```
/// use happiness_predictor::{predict_scenario, FeatureSchema, FeatureVector};
/// use happiness_predictor::{PredictionError, RawInputs, SchemaMapping, SemanticField};
///
/// let schema = FeatureSchema::new(vec!["gdp_per_capita".to_string()])?;
/// let mapping = SchemaMapping::build(&schema, "region_")?;
/// let model = |v: &FeatureVector| Ok::<f64, PredictionError>(3.0 + v.values()[0]);
///
/// let inputs = RawInputs::new().with_value(SemanticField::GdpPerCapita, 1.25);
/// let scenario = predict_scenario(inputs, &mapping, &model)?;
/// assert_eq!(scenario.prediction, 4.25);
/// # Ok::<(), PredictionError>(())
/// ```
pub fn predict_scenario<P: Predictor + ?Sized>(
    inputs: RawInputs,
    mapping: &SchemaMapping,
    model: &P,
) -> Result<Scenario, PredictionError> {
    analysis::scenario::run_scenario(engine::SINGLE_SCENARIO, inputs, mapping, model)
}

/// Score two sets of collected inputs and compare them
///
/// # Errors
///
/// Returns the first `PredictionError` from either scenario.
///
/// # Example
///
/// ```
/// use happiness_predictor::{compare_predictions, FeatureSchema, FeatureVector, Relation};
/// use happiness_predictor::{PredictionError, RawInputs, SchemaMapping, SemanticField};
///
/// let schema = FeatureSchema::new(vec!["social_support".to_string()])?;
/// let mapping = SchemaMapping::build(&schema, "region_")?;
/// let model = |v: &FeatureVector| Ok::<f64, PredictionError>(4.0 * v.values()[0]);
///
/// let a = RawInputs::new().with_value(SemanticField::SocialSupport, 1.0);
/// let b = RawInputs::new().with_value(SemanticField::SocialSupport, 0.5);
/// let comparison = compare_predictions(a, b, &mapping, &model)?;
/// assert_eq!(comparison.difference, -2.0);
/// assert_eq!(comparison.relation, Relation::AHappier);
/// # Ok::<(), PredictionError>(())
/// ```
pub fn compare_predictions<P: Predictor + ?Sized>(
    inputs_a: RawInputs,
    inputs_b: RawInputs,
    mapping: &SchemaMapping,
    model: &P,
) -> Result<Comparison, PredictionError> {
    analysis::compare::compare_scenarios(inputs_a, inputs_b, mapping, model)
}
