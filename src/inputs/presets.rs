//! Prefilled scenarios

use super::FormValues;

/// Dataset averages for Sub-Saharan Africa, used to prefill Scenario A
pub fn sub_saharan_africa() -> FormValues {
    FormValues {
        gdp_per_capita: Some(0.7),
        healthy_life_expectancy: Some(0.5),
        freedom_to_make_life_choices: Some(0.45),
        social_support: Some(0.8),
        generosity: Some(0.2),
        perceptions_of_corruption: Some(0.85),
        year: Some(2020),
        region: Some("Sub-Saharan Africa".to_string()),
    }
}

/// No prefill: every field falls back to its declared default
pub fn standard() -> FormValues {
    FormValues::default()
}
