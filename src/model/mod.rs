//! Predictive model interface
//!
//! The trained model is an external collaborator. The pipeline only needs a
//! scoring function over a schema-ordered feature vector; `LinearModel` is the
//! artifact-backed implementation shipped with the crate.

pub mod linear;

use crate::error::PredictionError;
use crate::features::FeatureVector;

pub use linear::{load_model, LinearModel};

/// Scores a feature vector
///
/// Implementations must be immutable once loaded so one instance can serve
/// every request for the life of the process.
pub trait Predictor: Send + Sync {
    /// Predict a happiness score for one input row
    ///
    /// # Errors
    ///
    /// Returns `PredictionError::ModelError` if the vector cannot be scored.
    /// Callers do not retry.
    fn predict(&self, vector: &FeatureVector) -> Result<f64, PredictionError>;

    /// Column names the model was trained on, if it records them
    fn feature_names(&self) -> Option<&[String]> {
        None
    }
}

impl<F> Predictor for F
where
    F: Fn(&FeatureVector) -> Result<f64, PredictionError> + Send + Sync,
{
    fn predict(&self, vector: &FeatureVector) -> Result<f64, PredictionError> {
        self(vector)
    }
}
