use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use uom::si::{
    f64::{Length, Mass},
    length::{centimeter, inch},
    mass::{kilogram, pound},
};

/// The unit system raw height and weight values are expressed in.
///
/// | System     | Height | Weight |
/// |------------|--------|--------|
/// | `Metric`   | cm     | kg     |
/// | `Imperial` | in     | lb     |
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum UnitSystem {
    /// Height in centimeters, weight in kilograms.
    #[default]
    Metric,
    /// Height in inches, weight in pounds.
    Imperial,
}

impl UnitSystem {
    /// Returns the other unit system.
    #[must_use]
    pub fn toggle(self) -> Self {
        match self {
            Self::Metric => Self::Imperial,
            Self::Imperial => Self::Metric,
        }
    }

    /// Abbreviation of the height unit.
    #[must_use]
    pub fn height_unit(self) -> &'static str {
        match self {
            Self::Metric => "cm",
            Self::Imperial => "in",
        }
    }

    /// Abbreviation of the weight unit.
    #[must_use]
    pub fn weight_unit(self) -> &'static str {
        match self {
            Self::Metric => "kg",
            Self::Imperial => "lb",
        }
    }

    /// Example height shown in an empty form.
    #[must_use]
    pub fn height_placeholder(self) -> &'static str {
        match self {
            Self::Metric => "170",
            Self::Imperial => "68",
        }
    }

    /// Example weight shown in an empty form.
    #[must_use]
    pub fn weight_placeholder(self) -> &'static str {
        match self {
            Self::Metric => "70",
            Self::Imperial => "154",
        }
    }

    /// Interprets a raw height value in this unit system.
    #[must_use]
    pub fn length(self, height: f64) -> Length {
        match self {
            Self::Metric => Length::new::<centimeter>(height),
            Self::Imperial => Length::new::<inch>(height),
        }
    }

    /// Interprets a raw weight value in this unit system.
    #[must_use]
    pub fn mass(self, weight: f64) -> Mass {
        match self {
            Self::Metric => Mass::new::<kilogram>(weight),
            Self::Imperial => Mass::new::<pound>(weight),
        }
    }

    /// Expresses a length as a raw height value in this unit system.
    #[must_use]
    pub fn height_in(self, length: Length) -> f64 {
        match self {
            Self::Metric => length.get::<centimeter>(),
            Self::Imperial => length.get::<inch>(),
        }
    }

    /// Expresses a mass as a raw weight value in this unit system.
    #[must_use]
    pub fn weight_in(self, mass: Mass) -> f64 {
        match self {
            Self::Metric => mass.get::<kilogram>(),
            Self::Imperial => mass.get::<pound>(),
        }
    }
}

impl fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Metric => f.write_str("metric"),
            Self::Imperial => f.write_str("imperial"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn toggle_flips_between_systems() {
        assert_eq!(UnitSystem::Metric.toggle(), UnitSystem::Imperial);
        assert_eq!(UnitSystem::Imperial.toggle(), UnitSystem::Metric);
        assert_eq!(UnitSystem::default(), UnitSystem::Metric);
    }

    #[test]
    fn converts_between_systems() {
        let height = UnitSystem::Imperial.length(68.0);
        assert_relative_eq!(UnitSystem::Metric.height_in(height), 172.72, epsilon = 1e-9);

        let weight = UnitSystem::Metric.mass(70.0);
        assert_relative_eq!(
            UnitSystem::Imperial.weight_in(weight),
            Mass::new::<kilogram>(70.0).get::<pound>()
        );
        assert_relative_eq!(
            UnitSystem::Imperial.weight_in(weight),
            154.32,
            max_relative = 1e-4
        );
    }
}
