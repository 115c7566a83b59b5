//! Process-wide prediction engine
//!
//! Holds the schema, its resolved mapping, the model and the configuration.
//! All of it is loaded once and read-only afterwards, so an engine is cheap to
//! clone and safe to share between threads. Each request runs the full
//! pipeline synchronously; nothing is kept between requests.

use crate::analysis::compare::Comparison;
use crate::analysis::report;
use crate::analysis::scenario::{run_scenario, Scenario};
use crate::config::PredictorConfig;
use crate::error::PredictionError;
use crate::inputs::{presets, FormValues, InputCollector};
use crate::model::{load_model, LinearModel, Predictor};
use crate::schema::{load_schema, FeatureSchema, SchemaMapping};
use serde::Serialize;
use std::path::Path;
use std::sync::Arc;

/// Display name of the scenario in single mode
pub const SINGLE_SCENARIO: &str = "Single Prediction";
/// Display name of the baseline scenario in compare mode
pub const SCENARIO_A: &str = "Scenario A";
/// Display name of the alternative scenario in compare mode
pub const SCENARIO_B: &str = "Scenario B";

/// Form mode toggle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    /// One form, "Predict"
    #[default]
    Single,
    /// Two forms, "Compare Predictions"
    Compare,
}

/// A user-triggered request
#[derive(Debug, Clone, PartialEq)]
pub enum Request {
    /// Score one form
    Predict {
        /// Submitted form
        inputs: FormValues,
    },
    /// Score two forms and compare them
    Compare {
        /// Scenario A form (prefilled with the Sub-Saharan Africa preset)
        a: FormValues,
        /// Scenario B form (standard defaults)
        b: FormValues,
    },
}

impl Request {
    /// Mode this request belongs to
    pub fn mode(&self) -> Mode {
        match self {
            Request::Predict { .. } => Mode::Single,
            Request::Compare { .. } => Mode::Compare,
        }
    }
}

/// Result of a request, ready to render
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum Response {
    /// Single prediction
    Single(Scenario),
    /// Comparison of two scenarios
    Compare(Comparison),
}

impl Response {
    /// Display lines with scores at `precision` decimals
    pub fn render(&self, precision: usize) -> Vec<String> {
        match self {
            Response::Single(scenario) => report::render_single(scenario, precision),
            Response::Compare(comparison) => report::render_comparison(comparison, precision),
        }
    }
}

struct EngineState<P> {
    schema: FeatureSchema,
    mapping: SchemaMapping,
    model: P,
    config: PredictorConfig,
}

/// Loaded schema + model, shared read-only by every request
pub struct Engine<P> {
    state: Arc<EngineState<P>>,
}

impl<P> Clone for Engine<P> {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
        }
    }
}

impl Engine<LinearModel> {
    /// Load schema and model artifacts and build an engine
    ///
    /// # Errors
    ///
    /// Any artifact or schema error is fatal: no engine, no requests.
    pub fn from_artifacts(
        schema_path: impl AsRef<Path>,
        model_path: impl AsRef<Path>,
        config: PredictorConfig,
    ) -> Result<Self, PredictionError> {
        let schema = load_schema(schema_path)?;
        let model = load_model(model_path)?;
        Self::new(schema, model, config)
    }
}

impl<P: Predictor> Engine<P> {
    /// Build an engine from a loaded schema and model
    ///
    /// Resolves the schema mapping once. If the model records its training
    /// columns, they must equal the schema exactly.
    ///
    /// # Errors
    ///
    /// Returns `PredictionError::SchemaMismatch` for an unmapped schema column
    /// or a model/schema column disagreement.
    pub fn new(
        schema: FeatureSchema,
        model: P,
        config: PredictorConfig,
    ) -> Result<Self, PredictionError> {
        let mapping = SchemaMapping::build(&schema, &config.region_prefix)?;

        if let Some(names) = model.feature_names() {
            if let Some(column) = first_disagreement(schema.columns(), names) {
                return Err(PredictionError::schema_mismatch(column));
            }
        }

        log::info!(
            "Engine ready: {} columns, {} regions",
            schema.len(),
            mapping.regions().count()
        );

        Ok(Self {
            state: Arc::new(EngineState {
                schema,
                mapping,
                model,
                config,
            }),
        })
    }

    /// Feature schema
    pub fn schema(&self) -> &FeatureSchema {
        &self.state.schema
    }

    /// Resolved schema mapping
    pub fn mapping(&self) -> &SchemaMapping {
        &self.state.mapping
    }

    /// Underlying model
    pub fn model(&self) -> &P {
        &self.state.model
    }

    /// Active configuration
    pub fn config(&self) -> &PredictorConfig {
        &self.state.config
    }

    /// Input collector bound to this engine's schema
    pub fn collector(&self) -> InputCollector<'_> {
        InputCollector::new(&self.state.mapping, &self.state.config)
    }

    /// Collect a form and run it through the pipeline
    pub fn run_scenario(
        &self,
        name: &str,
        form: &FormValues,
        preset: &FormValues,
    ) -> Result<Scenario, PredictionError> {
        let inputs = self.collector().collect(form, preset)?;
        run_scenario(name, inputs, &self.state.mapping, &self.state.model)
    }

    /// "Predict": score one form with standard defaults
    pub fn predict(&self, form: &FormValues) -> Result<Scenario, PredictionError> {
        self.run_scenario(SINGLE_SCENARIO, form, &presets::standard())
    }

    /// "Compare Predictions": A prefilled with the Sub-Saharan Africa preset,
    /// B with standard defaults
    pub fn compare(&self, a: &FormValues, b: &FormValues) -> Result<Comparison, PredictionError> {
        let scenario_a = self.run_scenario(SCENARIO_A, a, &presets::sub_saharan_africa())?;
        let scenario_b = self.run_scenario(SCENARIO_B, b, &presets::standard())?;
        Ok(Comparison::new(scenario_a, scenario_b))
    }

    /// Serve one request
    pub fn handle(&self, request: &Request) -> Result<Response, PredictionError> {
        log::debug!("Handling {:?} request", request.mode());
        match request {
            Request::Predict { inputs } => self.predict(inputs).map(Response::Single),
            Request::Compare { a, b } => self.compare(a, b).map(Response::Compare),
        }
    }

    /// Render a response with the configured precision
    pub fn render(&self, response: &Response) -> Vec<String> {
        response.render(self.state.config.score_precision)
    }
}

/// First column where schema and model disagree, by position
fn first_disagreement<'a>(schema: &'a [String], model: &'a [String]) -> Option<&'a str> {
    for (i, column) in schema.iter().enumerate() {
        match model.get(i) {
            Some(name) if name == column => continue,
            _ => return Some(column),
        }
    }
    model.get(schema.len()).map(String::as_str)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::compare::Relation;
    use crate::features::FeatureVector;

    fn columns(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    fn engine() -> Engine<LinearModel> {
        let names = columns(&[
            "gdp_per_capita",
            "social_support",
            "region_Western Europe",
            "region_Sub-Saharan Africa",
            "year",
        ]);
        let schema = FeatureSchema::new(names.clone()).unwrap();
        let model = LinearModel::new(names, vec![2.0, 1.0, 0.5, -0.5, 0.0], 2.0).unwrap();
        Engine::new(schema, model, PredictorConfig::default()).unwrap()
    }

    #[test]
    fn test_predict_uses_standard_defaults() {
        let scenario = engine().predict(&FormValues::default()).unwrap();
        // 2.0 + 2*1.0 + 1*1.0 + 0.5 (Western Europe is the first region)
        assert!((scenario.prediction - 5.5).abs() < 1e-12);
        assert_eq!(scenario.name, SINGLE_SCENARIO);
    }

    #[test]
    fn test_compare_prefills_scenario_a() {
        let comparison = engine()
            .compare(&FormValues::default(), &FormValues::default())
            .unwrap();

        // A: 2.0 + 2*0.7 + 0.8 - 0.5 = 3.7; B: 5.5
        assert!((comparison.scenario_a.prediction - 3.7).abs() < 1e-12);
        assert_eq!(
            comparison.scenario_a.inputs.region(),
            Some("Sub-Saharan Africa")
        );
        assert_eq!(comparison.relation, Relation::BHappier);
    }

    #[test]
    fn test_handle_and_render() {
        let engine = engine();
        let response = engine
            .handle(&Request::Predict {
                inputs: FormValues::default(),
            })
            .unwrap();
        let lines = engine.render(&response);
        assert_eq!(lines[0], "🌟 Predicted Happiness Score: 5.50");
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn test_model_schema_disagreement() {
        let schema = FeatureSchema::new(columns(&["gdp_per_capita", "year"])).unwrap();
        let model =
            LinearModel::new(columns(&["year", "gdp_per_capita"]), vec![1.0, 1.0], 0.0).unwrap();
        let result = Engine::new(schema, model, PredictorConfig::default());
        assert!(matches!(
            result,
            Err(PredictionError::SchemaMismatch { ref column }) if column == "gdp_per_capita"
        ));
    }

    #[test]
    fn test_model_with_extra_feature() {
        let schema = FeatureSchema::new(columns(&["year"])).unwrap();
        let model =
            LinearModel::new(columns(&["year", "generosity"]), vec![1.0, 1.0], 0.0).unwrap();
        let result = Engine::new(schema, model, PredictorConfig::default());
        assert!(matches!(
            result,
            Err(PredictionError::SchemaMismatch { ref column }) if column == "generosity"
        ));
    }

    #[test]
    fn test_closure_predictor_skips_name_check() {
        let schema = FeatureSchema::new(columns(&["generosity"])).unwrap();
        let model = |v: &FeatureVector| Ok::<f64, PredictionError>(10.0 * v.values()[0]);
        let engine = Engine::new(schema, model, PredictorConfig::default()).unwrap();

        let scenario = engine.predict(&FormValues::default()).unwrap();
        assert!((scenario.prediction - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_compare_rejects_nan_model() {
        let schema = FeatureSchema::new(columns(&["generosity"])).unwrap();
        let model = |_: &FeatureVector| Ok::<f64, PredictionError>(f64::NAN);
        let engine = Engine::new(schema, model, PredictorConfig::default()).unwrap();

        let result = engine.compare(&FormValues::default(), &FormValues::default());
        assert!(matches!(result, Err(PredictionError::ModelError(_))));
    }

    #[test]
    fn test_engine_clone_shares_state() {
        let engine = engine();
        let clone = engine.clone();
        assert!(std::ptr::eq(engine.schema(), clone.schema()));
    }
}
