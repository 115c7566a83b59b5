//! Input collection
//!
//! Turns a submitted (possibly partial) form into a complete set of raw
//! inputs for the fields the schema needs:
//! - Semantic fields and their declared bounds
//! - Presets (prefilled scenarios)
//! - Default filling and boundary validation

pub mod collector;
pub mod fields;
pub mod presets;

use crate::error::PredictionError;
use fields::SemanticField;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub use collector::InputCollector;

/// A submitted form: every field optional
///
/// Also used to express presets. Missing values fall back to the preset, then
/// to the field's declared default.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FormValues {
    /// GDP per capita
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gdp_per_capita: Option<f64>,
    /// Healthy life expectancy
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub healthy_life_expectancy: Option<f64>,
    /// Freedom to make life choices
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub freedom_to_make_life_choices: Option<f64>,
    /// Social support
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub social_support: Option<f64>,
    /// Generosity
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generosity: Option<f64>,
    /// Perceptions of corruption
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub perceptions_of_corruption: Option<f64>,
    /// Survey year
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    /// Selected region (without the column prefix)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
}

impl FormValues {
    /// Value supplied for `field`, if any
    pub fn get(&self, field: SemanticField) -> Option<f64> {
        match field {
            SemanticField::GdpPerCapita => self.gdp_per_capita,
            SemanticField::HealthyLifeExpectancy => self.healthy_life_expectancy,
            SemanticField::FreedomToMakeLifeChoices => self.freedom_to_make_life_choices,
            SemanticField::SocialSupport => self.social_support,
            SemanticField::Generosity => self.generosity,
            SemanticField::PerceptionsOfCorruption => self.perceptions_of_corruption,
            SemanticField::Year => self.year.map(f64::from),
        }
    }

    /// Set a field from its textual form, e.g. `("generosity", "0.25")`
    ///
    /// `name` is a field's column name or `region`.
    ///
    /// # Errors
    ///
    /// Returns `PredictionError::InvalidInput` for an unknown name or a value
    /// that does not parse.
    pub fn set(&mut self, name: &str, value: &str) -> Result<(), PredictionError> {
        if name == "region" {
            self.region = Some(value.to_string());
            return Ok(());
        }

        let field = SemanticField::from_column(name)
            .ok_or_else(|| PredictionError::InvalidInput(format!("Unknown field: {}", name)))?;

        let decimal = || {
            value.trim().parse::<f64>().map_err(|_| {
                PredictionError::InvalidInput(format!("{} must be a number, got '{}'", name, value))
            })
        };

        match field {
            SemanticField::GdpPerCapita => self.gdp_per_capita = Some(decimal()?),
            SemanticField::HealthyLifeExpectancy => self.healthy_life_expectancy = Some(decimal()?),
            SemanticField::FreedomToMakeLifeChoices => {
                self.freedom_to_make_life_choices = Some(decimal()?)
            }
            SemanticField::SocialSupport => self.social_support = Some(decimal()?),
            SemanticField::Generosity => self.generosity = Some(decimal()?),
            SemanticField::PerceptionsOfCorruption => {
                self.perceptions_of_corruption = Some(decimal()?)
            }
            SemanticField::Year => {
                let year = value.trim().parse::<i32>().map_err(|_| {
                    PredictionError::InvalidInput(format!(
                        "year must be a whole number, got '{}'",
                        value
                    ))
                })?;
                self.year = Some(year);
            }
        }
        Ok(())
    }

    /// Set a field from a `name=value` assignment
    pub fn apply_assignment(&mut self, assignment: &str) -> Result<(), PredictionError> {
        let (name, value) = assignment.split_once('=').ok_or_else(|| {
            PredictionError::InvalidInput(format!(
                "Expected field=value, got '{}'",
                assignment
            ))
        })?;
        self.set(name.trim(), value)
    }
}

/// Collected inputs: one value per schema field plus the selected region
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RawInputs {
    values: BTreeMap<SemanticField, f64>,
    region: Option<String>,
}

impl RawInputs {
    /// Empty input set
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter for a field value
    pub fn with_value(mut self, field: SemanticField, value: f64) -> Self {
        self.values.insert(field, value);
        self
    }

    /// Builder-style setter for the selected region
    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    /// Value collected for `field`
    pub fn get(&self, field: SemanticField) -> Option<f64> {
        self.values.get(&field).copied()
    }

    /// Selected region, if the schema has region columns
    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    /// Collected (field, value) pairs in field order
    pub fn values(&self) -> impl Iterator<Item = (SemanticField, f64)> + '_ {
        self.values.iter().map(|(f, v)| (*f, *v))
    }
}
