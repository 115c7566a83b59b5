//! Configuration parameters for the prediction pipeline

/// Prediction pipeline configuration
#[derive(Debug, Clone)]
pub struct PredictorConfig {
    /// Prefix marking one-hot region columns in the schema (default: "region_")
    pub region_prefix: String,

    /// Decimal places used when rendering scores and differences (default: 2)
    pub score_precision: usize,

    /// Reject values outside each field's declared [min, max] (default: true)
    ///
    /// Disabling this lets a caller that already enforces bounds (e.g. a UI
    /// widget with min/max) skip the second check.
    pub enforce_input_bounds: bool,
}

impl Default for PredictorConfig {
    fn default() -> Self {
        Self {
            region_prefix: "region_".to_string(),
            score_precision: 2,
            enforce_input_bounds: true,
        }
    }
}
