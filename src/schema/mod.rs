//! Feature schema handling
//!
//! The feature schema is the ordered list of column names the trained model
//! expects. It is loaded once at startup and never changes afterwards:
//! - Schema artifact loading
//! - Column-to-input mapping (validated for completeness)

pub mod loader;
pub mod mapping;

use crate::error::PredictionError;
use std::collections::HashSet;

pub use loader::load_schema;
pub use mapping::{ColumnSource, SchemaMapping};

/// Ordered, immutable list of model input columns
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureSchema {
    columns: Vec<String>,
}

impl FeatureSchema {
    /// Create a schema from an ordered column list
    ///
    /// # Errors
    ///
    /// Returns `PredictionError::ArtifactError` if the list is empty or
    /// contains a column name more than once.
    pub fn new(columns: Vec<String>) -> Result<Self, PredictionError> {
        if columns.is_empty() {
            return Err(PredictionError::ArtifactError(
                "Feature schema has no columns".to_string(),
            ));
        }

        let mut seen = HashSet::with_capacity(columns.len());
        for column in &columns {
            if !seen.insert(column.as_str()) {
                return Err(PredictionError::ArtifactError(format!(
                    "Duplicate column in feature schema: {}",
                    column
                )));
            }
        }

        Ok(Self { columns })
    }

    /// Column names in model order
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Number of columns
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Always false for a constructed schema
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// True if the schema contains `column`
    pub fn contains(&self, column: &str) -> bool {
        self.columns.iter().any(|c| c == column)
    }

    /// Region names derived from the one-hot columns, in schema order
    ///
    /// `region_Western Europe` with prefix `region_` yields `Western Europe`.
    pub fn region_choices(&self, prefix: &str) -> Vec<String> {
        self.columns
            .iter()
            .filter_map(|c| c.strip_prefix(prefix))
            .map(str::to_string)
            .collect()
    }
}
