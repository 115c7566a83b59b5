//! Schema artifact loading

use super::FeatureSchema;
use crate::error::PredictionError;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Accepted on-disk shapes of the schema artifact
#[derive(Deserialize)]
#[serde(untagged)]
enum SchemaArtifact {
    Bare(Vec<String>),
    Wrapped { columns: Vec<String> },
}

/// Load a feature schema from a JSON artifact
///
/// The artifact is either a bare array of column names or an object with a
/// `columns` array.
///
/// # Errors
///
/// Returns `PredictionError::ArtifactError` if the file cannot be read, is not
/// one of the accepted shapes, or fails schema validation.
pub fn load_schema(path: impl AsRef<Path>) -> Result<FeatureSchema, PredictionError> {
    let path = path.as_ref();
    log::debug!("Loading feature schema from: {}", path.display());

    let text = fs::read_to_string(path).map_err(|e| {
        PredictionError::ArtifactError(format!("{}: {}", path.display(), e))
    })?;

    let schema = parse_schema(&text)?;
    log::info!("Loaded feature schema with {} columns", schema.len());
    Ok(schema)
}

/// Parse a schema artifact from its JSON text
pub fn parse_schema(text: &str) -> Result<FeatureSchema, PredictionError> {
    let columns = match serde_json::from_str(text)? {
        SchemaArtifact::Bare(columns) => columns,
        SchemaArtifact::Wrapped { columns } => columns,
    };
    FeatureSchema::new(columns)
}
