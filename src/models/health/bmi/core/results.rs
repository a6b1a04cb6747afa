//! Result type for BMI computation.

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::support::units::{BodyMassIndex, kilogram_per_square_meter};

use super::{Category, Severity};

/// A computed BMI with its classification.
///
/// `category` is determined from the unrounded BMI, so `value` can sit on the
/// other side of a threshold (an unrounded `24.96` reports `25.0` as `Normal`).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct BmiResult {
    /// BMI in kg/m², rounded to one decimal place.
    pub value: f64,

    pub category: Category,

    /// Advisory text for the category.
    pub description: &'static str,

    /// Presentation tier for the category.
    pub severity: Severity,
}

impl BmiResult {
    /// Builds a result from an unrounded BMI and the already-rounded value.
    pub(super) fn new(unrounded: f64, value: f64) -> Self {
        let category = Category::from_bmi(unrounded);
        Self {
            value,
            category,
            description: category.description(),
            severity: category.severity(),
        }
    }

    /// The rounded value as a [`BodyMassIndex`] quantity.
    #[must_use]
    pub fn as_quantity(&self) -> BodyMassIndex {
        BodyMassIndex::new::<kilogram_per_square_meter>(self.value)
    }
}
