//! Integration tests for the prediction pipeline

use happiness_predictor::{
    Engine, FormValues, PredictionError, PredictorConfig, Relation, Request, Response,
    SemanticField, Sentiment,
};
use std::path::PathBuf;

fn fixture_path(filename: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(filename)
}

fn load_engine() -> Engine<happiness_predictor::LinearModel> {
    Engine::from_artifacts(
        fixture_path("training_columns.json"),
        fixture_path("final_model.json"),
        PredictorConfig::default(),
    )
    .expect("Fixture artifacts should load")
}

fn load_form(filename: &str) -> FormValues {
    let text = std::fs::read_to_string(fixture_path(filename)).expect("Failed to read fixture");
    serde_json::from_str(&text).expect("Fixture should be a valid form")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_choices_come_from_schema() {
        let engine = load_engine();
        let choices = engine.collector().region_choices();

        assert_eq!(choices.len(), 10);
        assert_eq!(choices[0], "Australia and New Zealand");
        assert!(choices.contains(&"Sub-Saharan Africa"));
        assert_eq!(
            engine.schema().region_choices(&engine.config().region_prefix),
            choices.iter().map(|s| s.to_string()).collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_single_prediction_with_defaults() {
        let engine = load_engine();
        let scenario = engine
            .predict(&FormValues::default())
            .expect("Prediction should succeed");

        assert_eq!(scenario.features.len(), engine.schema().len());
        assert!(
            (scenario.prediction - 6.6).abs() < 1e-9,
            "Expected 6.6, got {}",
            scenario.prediction
        );
        assert_eq!(
            scenario.features.get("region_Australia and New Zealand"),
            Some(1.0)
        );
    }

    #[test]
    fn test_feature_vector_follows_schema_order() {
        let engine = load_engine();
        let scenario = engine.predict(&load_form("scenario_nordic.json")).unwrap();

        let columns: Vec<&str> = scenario.features.columns().collect();
        let expected: Vec<&str> = engine
            .schema()
            .columns()
            .iter()
            .map(String::as_str)
            .collect();
        assert_eq!(columns, expected);

        assert_eq!(scenario.features.get("gdp_per_capita"), Some(1.5));
        assert_eq!(scenario.features.get("year"), Some(2022.0));
        assert_eq!(scenario.features.get("region_Western Europe"), Some(1.0));
        assert!((scenario.prediction - 7.855).abs() < 1e-9);
    }

    #[test]
    fn test_one_hot_for_every_region() {
        let engine = load_engine();
        let choices: Vec<String> = engine
            .collector()
            .region_choices()
            .iter()
            .map(|s| s.to_string())
            .collect();

        for region in choices {
            let form = FormValues {
                region: Some(region.clone()),
                ..Default::default()
            };
            let scenario = engine.predict(&form).unwrap();

            let region_values: Vec<(&str, f64)> = scenario
                .features
                .entries()
                .iter()
                .filter(|e| e.column.starts_with("region_"))
                .map(|e| (e.column.as_str(), e.value))
                .collect();

            assert_eq!(region_values.len(), 10);
            for (column, value) in region_values {
                let expected = if column == format!("region_{}", region) {
                    1.0
                } else {
                    0.0
                };
                assert_eq!(value, expected, "{} with {} selected", column, region);
            }
        }
    }

    #[test]
    fn test_sub_saharan_preset_explanations() {
        let engine = load_engine();
        let comparison = engine
            .compare(&FormValues::default(), &FormValues::default())
            .unwrap();
        let scenario_a = &comparison.scenario_a;

        let observed: Vec<(SemanticField, Sentiment)> = scenario_a
            .explanations
            .iter()
            .map(|e| (e.field, e.sentiment))
            .collect();
        assert_eq!(
            observed,
            vec![
                (SemanticField::GdpPerCapita, Sentiment::Positive),
                (SemanticField::HealthyLifeExpectancy, Sentiment::Negative),
                (SemanticField::FreedomToMakeLifeChoices, Sentiment::Positive),
                (SemanticField::SocialSupport, Sentiment::Positive),
                (SemanticField::Generosity, Sentiment::Positive),
                (SemanticField::PerceptionsOfCorruption, Sentiment::Negative),
            ]
        );
        assert_eq!(
            scenario_a.explanations[5].message,
            "⚖️ High corruption perception reduces happiness."
        );
    }

    #[test]
    fn test_compare_mode_end_to_end() {
        let engine = load_engine();
        let response = engine
            .handle(&Request::Compare {
                a: FormValues::default(),
                b: FormValues::default(),
            })
            .unwrap();

        let comparison = match &response {
            Response::Compare(c) => c,
            Response::Single(_) => panic!("Compare request produced a single response"),
        };
        assert!((comparison.scenario_a.prediction - 4.475).abs() < 1e-9);
        assert!((comparison.scenario_b.prediction - 6.6).abs() < 1e-9);
        assert!((comparison.difference - 2.125).abs() < 1e-9);
        assert_eq!(comparison.relation, Relation::BHappier);

        let lines = engine.render(&response);
        // headline + 6 lines per scenario, then the difference line
        assert_eq!(lines.len(), 15);
        assert_eq!(lines[0], "🌟 Scenario A Happiness Score: 4.47");
        assert_eq!(lines[7], "🌟 Scenario B Happiness Score: 6.60");
        assert!(lines[14].starts_with("📈 Scenario B is"));
        assert!(lines[14].ends_with("points happier than Scenario A"));
    }

    #[test]
    fn test_identical_scenarios_are_equal() {
        let engine = load_engine();
        let form = load_form("scenario_nordic.json");
        let comparison = engine.compare(&form, &form).unwrap();

        assert_eq!(comparison.difference, 0.0);
        assert_eq!(comparison.relation, Relation::Equal);
        assert_eq!(comparison.scenario_a.features, comparison.scenario_b.features);
    }

    #[test]
    fn test_out_of_range_input_rejected() {
        let engine = load_engine();
        let form = FormValues {
            perceptions_of_corruption: Some(1.2),
            ..Default::default()
        };
        assert!(matches!(
            engine.predict(&form),
            Err(PredictionError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_unmapped_schema_column_is_fatal() {
        let result = Engine::from_artifacts(
            fixture_path("training_columns_unmapped.json"),
            fixture_path("final_model.json"),
            PredictorConfig::default(),
        );
        assert!(matches!(
            result,
            Err(PredictionError::SchemaMismatch { ref column }) if column == "dystopia_residual"
        ));
    }

    #[test]
    fn test_missing_artifact_is_fatal() {
        let result = Engine::from_artifacts(
            fixture_path("training_columns.json"),
            fixture_path("does_not_exist.json"),
            PredictorConfig::default(),
        );
        assert!(matches!(result, Err(PredictionError::ArtifactError(_))));
    }

    #[test]
    fn test_response_serializes_to_json() {
        let engine = load_engine();
        let response = engine
            .handle(&Request::Predict {
                inputs: load_form("scenario_nordic.json"),
            })
            .unwrap();

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["mode"], "single");
        assert_eq!(json["name"], "Single Prediction");
        assert_eq!(json["explanations"].as_array().map(Vec::len), Some(6));
    }
}
