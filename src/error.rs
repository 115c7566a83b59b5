//! Error types for the prediction pipeline

use std::fmt;

/// Errors that can occur while loading artifacts or serving a prediction
#[derive(Debug, Clone, PartialEq)]
pub enum PredictionError {
    /// Schema or model artifact is missing or malformed
    ArtifactError(String),

    /// A schema column cannot be produced from the collected inputs
    SchemaMismatch {
        /// Offending column name
        column: String,
    },

    /// User input rejected at the form boundary
    InvalidInput(String),

    /// The predictor failed to score a feature vector
    ModelError(String),
}

impl PredictionError {
    pub(crate) fn schema_mismatch(column: impl Into<String>) -> Self {
        PredictionError::SchemaMismatch {
            column: column.into(),
        }
    }
}

impl fmt::Display for PredictionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PredictionError::ArtifactError(msg) => write!(f, "Artifact error: {}", msg),
            PredictionError::SchemaMismatch { column } => {
                write!(f, "Schema mismatch: column '{}' has no input mapping", column)
            }
            PredictionError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            PredictionError::ModelError(msg) => write!(f, "Model error: {}", msg),
        }
    }
}

impl std::error::Error for PredictionError {}

impl From<std::io::Error> for PredictionError {
    fn from(err: std::io::Error) -> Self {
        PredictionError::ArtifactError(err.to_string())
    }
}

impl From<serde_json::Error> for PredictionError {
    fn from(err: serde_json::Error) -> Self {
        PredictionError::ArtifactError(err.to_string())
    }
}
