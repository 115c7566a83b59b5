//! Feature vector construction
//!
//! Walks the schema mapping in order and emits exactly one value per column:
//! direct fields are copied, region indicators are one-hot encoded.

use super::vector::FeatureVector;
use crate::error::PredictionError;
use crate::inputs::RawInputs;
use crate::schema::{ColumnSource, SchemaMapping};

/// Build the model input row for a set of collected inputs
///
/// # Arguments
///
/// * `inputs` - Collected (default-filled) inputs
/// * `mapping` - Resolved schema mapping
///
/// # Returns
///
/// Feature vector with one entry per schema column, in schema order. Region
/// columns are 1.0 for the selected region and 0.0 otherwise; with no region
/// selected every region column is 0.0.
///
/// # Errors
///
/// Returns `PredictionError::SchemaMismatch` if a direct column's field was not
/// collected, and `PredictionError::InvalidInput` if the selected region has no
/// column in the schema.
///
/// # Example
///
/// ```
/// use happiness_predictor::features::builder::build_feature_vector;
/// use happiness_predictor::inputs::{fields::SemanticField, RawInputs};
/// use happiness_predictor::schema::{FeatureSchema, SchemaMapping};
///
/// let schema = FeatureSchema::new(vec![
///     "generosity".to_string(),
///     "region_South Asia".to_string(),
///     "region_Western Europe".to_string(),
/// ])?;
/// let mapping = SchemaMapping::build(&schema, "region_")?;
/// let inputs = RawInputs::new()
///     .with_value(SemanticField::Generosity, 0.3)
///     .with_region("Western Europe");
///
/// let vector = build_feature_vector(&inputs, &mapping)?;
/// assert_eq!(vector.values(), vec![0.3, 0.0, 1.0]);
/// # Ok::<(), happiness_predictor::PredictionError>(())
/// ```
pub fn build_feature_vector(
    inputs: &RawInputs,
    mapping: &SchemaMapping,
) -> Result<FeatureVector, PredictionError> {
    let selected = inputs.region();

    if let Some(region) = selected {
        if !mapping.regions().any(|r| r == region) {
            return Err(PredictionError::InvalidInput(format!(
                "Region '{}' has no column in the feature schema",
                region
            )));
        }
    }

    let mut pairs = Vec::with_capacity(mapping.len());
    for (column, source) in mapping.entries() {
        let value = match source {
            ColumnSource::Field(field) => inputs
                .get(*field)
                .ok_or_else(|| PredictionError::schema_mismatch(column.as_str()))?,
            ColumnSource::Region(region) => {
                if selected == Some(region.as_str()) {
                    1.0
                } else {
                    0.0
                }
            }
        };
        pairs.push((column.as_str(), value));
    }

    let vector = FeatureVector::from_pairs(pairs);
    log::debug!("Built feature vector with {} columns", vector.len());
    Ok(vector)
}
