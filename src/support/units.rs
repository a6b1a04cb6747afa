//! Extensions to [`uom`].
//!
//! This crate uses [`uom`] for physical units (length, mass).
//! This module provides extensions that are useful for BMI modeling but
//! aren't included in [`uom`].
//!
//! ## Body mass index as a quantity
//!
//! BMI is mass per unit area, so it maps onto [`uom`]'s areal mass density.
//! [`BodyMassIndex`] names that quantity and [`body_mass_index`] computes it
//! from SI quantities:
//!
//! ```
//! use approx::assert_relative_eq;
//! use uom::si::{f64::{Length, Mass}, length::centimeter, mass::kilogram};
//! use twine_bmi::support::units::{body_mass_index, kilogram_per_square_meter};
//!
//! let bmi = body_mass_index(Length::new::<centimeter>(200.0), Mass::new::<kilogram>(100.0));
//! assert_relative_eq!(bmi.get::<kilogram_per_square_meter>(), 25.0, max_relative = 1e-12);
//! ```

mod quantities;

pub use quantities::BodyMassIndex;
pub use uom::si::areal_mass_density::kilogram_per_square_meter;

use uom::si::f64::{Length, Mass};

/// Conventional factor converting lb/in² to kg/m² for BMI.
///
/// The exact conversion is about 703.07; screening tables round it to 703.
pub const IMPERIAL_BMI_FACTOR: f64 = 703.0;

/// Computes mass over height squared.
#[must_use]
pub fn body_mass_index(height: Length, weight: Mass) -> BodyMassIndex {
    weight / (height * height)
}
