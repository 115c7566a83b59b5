//! Column-to-input mapping table
//!
//! Every schema column is resolved once, at startup, to the input that
//! produces it. A column that resolves to nothing is a hard error instead of a
//! silently misaligned feature vector.

use super::FeatureSchema;
use crate::error::PredictionError;
use crate::inputs::fields::SemanticField;

/// Where a schema column's value comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnSource {
    /// Copied from a direct semantic field
    Field(SemanticField),
    /// One-hot indicator: 1 when this region is selected, else 0
    Region(String),
}

/// Resolved mapping for every schema column, in schema order
#[derive(Debug, Clone, PartialEq)]
pub struct SchemaMapping {
    entries: Vec<(String, ColumnSource)>,
}

impl SchemaMapping {
    /// Resolve every column of `schema`
    ///
    /// # Arguments
    ///
    /// * `schema` - Loaded feature schema
    /// * `region_prefix` - Prefix marking one-hot region columns
    ///
    /// # Errors
    ///
    /// Returns `PredictionError::SchemaMismatch` naming the first column that
    /// is neither a semantic field nor a region indicator.
    pub fn build(schema: &FeatureSchema, region_prefix: &str) -> Result<Self, PredictionError> {
        let mut entries = Vec::with_capacity(schema.len());

        for column in schema.columns() {
            let source = if let Some(field) = SemanticField::from_column(column) {
                ColumnSource::Field(field)
            } else {
                match column.strip_prefix(region_prefix) {
                    Some(region) if !region.is_empty() => ColumnSource::Region(region.to_string()),
                    _ => return Err(PredictionError::schema_mismatch(column.as_str())),
                }
            };
            entries.push((column.clone(), source));
        }

        log::debug!(
            "Built schema mapping: {} direct fields, {} region indicators",
            entries
                .iter()
                .filter(|(_, s)| matches!(s, ColumnSource::Field(_)))
                .count(),
            entries
                .iter()
                .filter(|(_, s)| matches!(s, ColumnSource::Region(_)))
                .count()
        );

        Ok(Self { entries })
    }

    /// (column, source) pairs in schema order
    pub fn entries(&self) -> &[(String, ColumnSource)] {
        &self.entries
    }

    /// Number of mapped columns (equals the schema length)
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false for a built mapping
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Direct fields the schema needs, in schema order
    pub fn fields(&self) -> impl Iterator<Item = SemanticField> + '_ {
        self.entries.iter().filter_map(|(_, s)| match s {
            ColumnSource::Field(f) => Some(*f),
            ColumnSource::Region(_) => None,
        })
    }

    /// True if the schema contains a column for `field`
    pub fn has_field(&self, field: SemanticField) -> bool {
        self.fields().any(|f| f == field)
    }

    /// Region choices, in schema order
    pub fn regions(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().filter_map(|(_, s)| match s {
            ColumnSource::Region(r) => Some(r.as_str()),
            ColumnSource::Field(_) => None,
        })
    }
}
