#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration for BMI computation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BmiConfig {
    /// How the reported value is rounded to one decimal place.
    pub rounding: Rounding,
}

/// Tie-breaking rule used when rounding a BMI value to tenths.
///
/// Classification always uses the unrounded value, so the rounding mode only
/// affects the reported number.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Rounding {
    /// Ties round away from zero (`24.25` becomes `24.3`).
    #[default]
    HalfAwayFromZero,
    /// Ties round to the even tenth (`24.25` becomes `24.2`).
    HalfToEven,
}

impl Rounding {
    /// Rounds `value` to one decimal place.
    ///
    /// Ties are detected on the floating-point product `value * 10`. That
    /// product can land exactly on a tie even when `value` is stored just
    /// below one, so `0.35` rounds to `0.4` under `HalfAwayFromZero`.
    ///
    /// Values too large to scale by ten are returned unchanged.
    #[must_use]
    pub fn round_tenths(self, value: f64) -> f64 {
        let scaled = value * 10.0;
        if !scaled.is_finite() {
            return value;
        }
        let rounded = match self {
            Self::HalfAwayFromZero => scaled.round(),
            Self::HalfToEven => scaled.round_ties_even(),
        };
        rounded / 10.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_rounds_half_away_from_zero() {
        assert_eq!(BmiConfig::default().rounding, Rounding::HalfAwayFromZero);
    }

    #[test]
    fn tie_handling() {
        // 24.25 and 24.75 are exact in binary.
        assert_eq!(Rounding::HalfAwayFromZero.round_tenths(24.25), 24.3);
        assert_eq!(Rounding::HalfToEven.round_tenths(24.25), 24.2);
        assert_eq!(Rounding::HalfAwayFromZero.round_tenths(24.75), 24.8);
        assert_eq!(Rounding::HalfToEven.round_tenths(24.75), 24.8);
    }

    #[test]
    fn product_on_tie_rounds_as_tie() {
        // 0.35 is stored just below 0.35, but 0.35 * 10.0 is exactly 3.5.
        assert_eq!(0.35 * 10.0, 3.5);
        assert_eq!(Rounding::HalfAwayFromZero.round_tenths(0.35), 0.4);
        assert_eq!(Rounding::HalfToEven.round_tenths(0.35), 0.4);
    }

    #[test]
    fn huge_values_pass_through() {
        for mode in [Rounding::HalfAwayFromZero, Rounding::HalfToEven] {
            assert_eq!(mode.round_tenths(1e308), 1e308);
            assert_eq!(mode.round_tenths(f64::MAX), f64::MAX);
        }
    }

    #[test]
    fn non_ties_agree() {
        for mode in [Rounding::HalfAwayFromZero, Rounding::HalfToEven] {
            assert_eq!(mode.round_tenths(24.221), 24.2);
            assert_eq!(mode.round_tenths(17.578), 17.6);
            assert_eq!(mode.round_tenths(20.0), 20.0);
        }
    }
}
