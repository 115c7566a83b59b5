//! Semantic input fields and their declared bounds
//!
//! Every direct (non one-hot) model input is one of a fixed set of semantic
//! fields. Each field declares the range and default the input form offers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A direct model input, named by its schema column
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SemanticField {
    /// GDP per capita (normalized contribution)
    GdpPerCapita,
    /// Healthy life expectancy (normalized contribution)
    HealthyLifeExpectancy,
    /// Freedom to make life choices
    FreedomToMakeLifeChoices,
    /// Social support
    SocialSupport,
    /// Generosity
    Generosity,
    /// Perceptions of corruption
    PerceptionsOfCorruption,
    /// Survey year (ordinal)
    Year,
}

impl SemanticField {
    /// All fields, in form order
    pub const ALL: [SemanticField; 7] = [
        SemanticField::GdpPerCapita,
        SemanticField::HealthyLifeExpectancy,
        SemanticField::FreedomToMakeLifeChoices,
        SemanticField::SocialSupport,
        SemanticField::Generosity,
        SemanticField::PerceptionsOfCorruption,
        SemanticField::Year,
    ];

    /// Schema column name for this field
    pub fn column_name(&self) -> &'static str {
        match self {
            SemanticField::GdpPerCapita => "gdp_per_capita",
            SemanticField::HealthyLifeExpectancy => "healthy_life_expectancy",
            SemanticField::FreedomToMakeLifeChoices => "freedom_to_make_life_choices",
            SemanticField::SocialSupport => "social_support",
            SemanticField::Generosity => "generosity",
            SemanticField::PerceptionsOfCorruption => "perceptions_of_corruption",
            SemanticField::Year => "year",
        }
    }

    /// Look up a field by its schema column name
    pub fn from_column(column: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.column_name() == column)
    }

    /// Declared bounds and default for this field
    pub fn spec(&self) -> FieldSpec {
        match self {
            SemanticField::GdpPerCapita => FieldSpec::decimal("💰 GDP per capita", 0.0, 2.0, 1.0),
            SemanticField::HealthyLifeExpectancy => {
                FieldSpec::decimal("🏥 Healthy life expectancy", 0.0, 1.5, 0.8)
            }
            SemanticField::FreedomToMakeLifeChoices => {
                FieldSpec::decimal("🗽 Freedom of choice", 0.0, 1.0, 0.5)
            }
            SemanticField::SocialSupport => {
                FieldSpec::decimal("👥 Social support", 0.0, 1.5, 1.0)
            }
            SemanticField::Generosity => FieldSpec::decimal("🎁 Generosity", 0.0, 1.0, 0.2),
            SemanticField::PerceptionsOfCorruption => {
                FieldSpec::decimal("⚖️ Corruption", 0.0, 1.0, 0.3)
            }
            SemanticField::Year => FieldSpec {
                label: "📅 Year",
                min: 2015.0,
                max: 2023.0,
                default: 2020.0,
                step: 1.0,
                integer: true,
            },
        }
    }
}

impl fmt::Display for SemanticField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column_name())
    }
}

/// Declared form constraints for one field
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldSpec {
    /// Display label
    pub label: &'static str,
    /// Inclusive lower bound
    pub min: f64,
    /// Inclusive upper bound
    pub max: f64,
    /// Value used when neither the form nor a preset supplies one
    pub default: f64,
    /// Widget step size
    pub step: f64,
    /// Only whole numbers are accepted (slider)
    pub integer: bool,
}

impl FieldSpec {
    const fn decimal(label: &'static str, min: f64, max: f64, default: f64) -> Self {
        Self {
            label,
            min,
            max,
            default,
            step: 0.01,
            integer: false,
        }
    }

    /// True if `value` lies within [min, max] (and is whole, for integer fields)
    pub fn accepts(&self, value: f64) -> bool {
        value.is_finite()
            && value >= self.min
            && value <= self.max
            && (!self.integer || value.fract() == 0.0)
    }
}
