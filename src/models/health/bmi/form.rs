//! Interactive form state for BMI input.

use tracing::debug;

use super::{BmiConfig, BmiResult, UnitSystem, compute_with};

/// Caveat shown alongside every BMI result.
pub const DISCLAIMER: &str = "BMI is a screening tool and not a diagnostic tool. \
Consult with healthcare professionals for medical advice.";

/// Raw state of a BMI form: two text fields and a unit toggle.
///
/// The form stores only what the user entered. [`BmiForm::result`] parses the
/// fields and runs the computation on every call, so the result can never
/// disagree with the inputs.
///
/// # Example
///
/// ```
/// use twine_bmi::models::health::bmi::{BmiForm, Category, UnitSystem};
///
/// let mut form = BmiForm::new();
/// form.set_height("170");
/// assert!(form.result().is_none());
///
/// form.set_weight("70");
/// assert_eq!(form.result().unwrap().category, Category::Normal);
///
/// form.toggle_unit();
/// assert_eq!(form.unit(), UnitSystem::Imperial);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BmiForm {
    height: String,
    weight: String,
    unit: UnitSystem,
    config: BmiConfig,
}

impl BmiForm {
    /// Creates an empty metric form with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty metric form with the given configuration.
    #[must_use]
    pub fn with_config(config: BmiConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn set_height(&mut self, text: impl Into<String>) {
        self.height = text.into();
        debug!(height = %self.height, "height changed");
    }

    pub fn set_weight(&mut self, text: impl Into<String>) {
        self.weight = text.into();
        debug!(weight = %self.weight, "weight changed");
    }

    pub fn set_unit(&mut self, unit: UnitSystem) {
        self.unit = unit;
        debug!(%unit, "unit system changed");
    }

    /// Switches between metric and imperial.
    ///
    /// The entered text is kept as is and reinterpreted in the new units.
    pub fn toggle_unit(&mut self) {
        self.set_unit(self.unit.toggle());
    }

    /// Clears both text fields, keeping the selected unit system.
    pub fn reset(&mut self) {
        self.height.clear();
        self.weight.clear();
        debug!("form cleared");
    }

    #[must_use]
    pub fn height(&self) -> &str {
        &self.height
    }

    #[must_use]
    pub fn weight(&self) -> &str {
        &self.weight
    }

    #[must_use]
    pub fn unit(&self) -> UnitSystem {
        self.unit
    }

    #[must_use]
    pub fn config(&self) -> &BmiConfig {
        &self.config
    }

    /// Label for the height field, e.g. `Height (cm)`.
    #[must_use]
    pub fn height_label(&self) -> String {
        format!("Height ({})", self.unit.height_unit())
    }

    /// Label for the weight field, e.g. `Weight (kg)`.
    #[must_use]
    pub fn weight_label(&self) -> String {
        format!("Weight ({})", self.unit.weight_unit())
    }

    /// Computes the result for the current inputs.
    ///
    /// Returns `None` while either field is empty, unparseable, or not a
    /// finite positive number.
    #[must_use]
    pub fn result(&self) -> Option<BmiResult> {
        let height = parse_field(&self.height)?;
        let weight = parse_field(&self.weight)?;
        compute_with(height, weight, self.unit, &self.config)
    }
}

/// Parses a numeric text field, treating empty or malformed text as absent.
fn parse_field(text: &str) -> Option<f64> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    text.parse().ok()
}
