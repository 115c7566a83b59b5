//! Form collection with default filling and boundary checks

use super::fields::SemanticField;
use super::{FormValues, RawInputs};
use crate::config::PredictorConfig;
use crate::error::PredictionError;
use crate::schema::SchemaMapping;

/// Collects raw inputs for exactly the fields a schema needs
#[derive(Debug, Clone, Copy)]
pub struct InputCollector<'a> {
    mapping: &'a SchemaMapping,
    config: &'a PredictorConfig,
}

impl<'a> InputCollector<'a> {
    /// Create a collector bound to a resolved schema mapping
    pub fn new(mapping: &'a SchemaMapping, config: &'a PredictorConfig) -> Self {
        Self { mapping, config }
    }

    /// Region choices offered by the selector, in schema order
    pub fn region_choices(&self) -> Vec<&'a str> {
        self.mapping.regions().collect()
    }

    /// Collect inputs from a submitted form
    ///
    /// Each field the schema needs takes the form's value, else the preset's,
    /// else its declared default. The region takes the form's choice, else
    /// the preset's, else the first region column in the schema. Fields and
    /// regions the schema does not use are ignored.
    ///
    /// # Arguments
    ///
    /// * `form` - Values the user entered
    /// * `preset` - Prefill for values the user left empty
    ///
    /// # Errors
    ///
    /// Returns `PredictionError::InvalidInput` if a value is outside its
    /// declared bounds (when `enforce_input_bounds` is set) or the selected
    /// region has no column in the schema.
    pub fn collect(
        &self,
        form: &FormValues,
        preset: &FormValues,
    ) -> Result<RawInputs, PredictionError> {
        let mut inputs = RawInputs::new();

        for field in SemanticField::ALL {
            if !self.mapping.has_field(field) {
                continue;
            }

            let spec = field.spec();
            let value = form
                .get(field)
                .or_else(|| preset.get(field))
                .unwrap_or(spec.default);

            if self.config.enforce_input_bounds && !spec.accepts(value) {
                return Err(PredictionError::InvalidInput(format!(
                    "{} = {} is outside [{}, {}]{}",
                    field,
                    value,
                    spec.min,
                    spec.max,
                    if spec.integer { " (whole numbers only)" } else { "" }
                )));
            }

            inputs = inputs.with_value(field, value);
        }

        let choices = self.region_choices();
        if let Some(first) = choices.first() {
            let selected = form
                .region
                .as_deref()
                .or(preset.region.as_deref())
                .unwrap_or(*first);

            if !choices.iter().any(|c| *c == selected) {
                return Err(PredictionError::InvalidInput(format!(
                    "Unknown region '{}' (choices: {})",
                    selected,
                    choices.join(", ")
                )));
            }
            inputs = inputs.with_region(selected);
        } else if form.region.is_some() {
            log::debug!("Schema has no region columns; ignoring selected region");
        }

        Ok(inputs)
    }
}
