//! Body mass index model.
//!
//! This module provides a [`twine_core::Model`] implementation, [`Bmi`], for
//! computing and classifying a BMI, plus [`BmiForm`], which holds the raw text
//! of an interactive height/weight form and derives its result on demand.
//!
//! The computational core is in the internal `core` module; its API is
//! re-exported here.

mod core;
mod form;

pub use self::core::{
    BmiConfig, BmiResult, Category, Measurement, NORMAL_MIN, OBESE_MIN, OVERWEIGHT_MIN,
    Rounding, Severity, UnitSystem, compute, compute_with, evaluate,
};
pub use form::{BmiForm, DISCLAIMER};

use std::convert::Infallible;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use twine_core::Model;

/// Raw inputs for a [`Bmi`] model call.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BmiInput {
    /// Height in the unit system's length unit.
    pub height: f64,

    /// Weight in the unit system's mass unit.
    pub weight: f64,

    pub unit: UnitSystem,
}

/// BMI model adapter.
///
/// Invalid input produces `Ok(None)`; the model never fails.
///
/// # Example
///
/// ```
/// use twine_core::Model;
/// use twine_bmi::models::health::bmi::{Bmi, BmiInput, Category, UnitSystem};
///
/// let model = Bmi::default();
/// let output = model
///     .call(&BmiInput { height: 170.0, weight: 95.0, unit: UnitSystem::Metric })
///     .unwrap()
///     .unwrap();
/// assert_eq!(output.category, Category::Obese);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Bmi {
    config: BmiConfig,
}

impl Bmi {
    #[must_use]
    pub fn new(config: BmiConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &BmiConfig {
        &self.config
    }
}

impl Model for Bmi {
    type Input = BmiInput;
    type Output = Option<BmiResult>;
    type Error = Infallible;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        Ok(compute_with(
            input.height,
            input.weight,
            input.unit,
            &self.config,
        ))
    }
}
