use uom::si::f64::{Length, Mass};

use crate::support::{
    constraint::{Constrained, ConstraintResult, PositiveFinite},
    units::IMPERIAL_BMI_FACTOR,
};

use super::UnitSystem;

/// Height and weight in a given unit system.
///
/// Both values are guaranteed to be finite and strictly positive.
/// No upper bound or plausibility check is applied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurement {
    height: f64,
    weight: f64,
    unit: UnitSystem,
}

impl Measurement {
    /// Constructs a validated measurement.
    ///
    /// # Errors
    ///
    /// Returns an error if either value is not finite and strictly positive.
    pub fn new(height: f64, weight: f64, unit: UnitSystem) -> ConstraintResult<Self> {
        let height = Constrained::<f64, PositiveFinite>::new(height)?;
        let weight = Constrained::<f64, PositiveFinite>::new(weight)?;
        Ok(Self::from_constrained(height, weight, unit))
    }

    /// Constructs a measurement from pre-validated values.
    #[must_use]
    pub fn from_constrained(
        height: Constrained<f64, PositiveFinite>,
        weight: Constrained<f64, PositiveFinite>,
        unit: UnitSystem,
    ) -> Self {
        Self {
            height: height.into_inner(),
            weight: weight.into_inner(),
            unit,
        }
    }

    /// Constructs a measurement from SI quantities, expressed in `unit`.
    ///
    /// # Errors
    ///
    /// Returns an error if either converted value is not finite and strictly positive.
    pub fn from_quantities(height: Length, weight: Mass, unit: UnitSystem) -> ConstraintResult<Self> {
        Self::new(unit.height_in(height), unit.weight_in(weight), unit)
    }

    /// Raw height in this measurement's unit system.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Raw weight in this measurement's unit system.
    #[must_use]
    pub fn weight(&self) -> f64 {
        self.weight
    }

    #[must_use]
    pub fn unit(&self) -> UnitSystem {
        self.unit
    }

    /// Height as a [`Length`].
    #[must_use]
    pub fn length(&self) -> Length {
        self.unit.length(self.height)
    }

    /// Weight as a [`Mass`].
    #[must_use]
    pub fn mass(&self) -> Mass {
        self.unit.mass(self.weight)
    }

    /// Unrounded BMI in kg/m².
    ///
    /// Imperial values use the conventional factor of 703, so the result can
    /// differ from the exact SI conversion in the fourth significant digit.
    #[must_use]
    pub fn bmi(&self) -> f64 {
        match self.unit {
            UnitSystem::Metric => {
                let height_m = self.height / 100.0;
                self.weight / (height_m * height_m)
            }
            UnitSystem::Imperial => self.weight / (self.height * self.height) * IMPERIAL_BMI_FACTOR,
        }
    }
}
