//! BMI computation and classification.
//!
//! The computation is a pure function of height, weight, and unit system.
//! Nothing is cached between calls.

mod category;
mod config;
mod measurement;
mod results;
mod unit_system;

pub use category::{Category, NORMAL_MIN, OBESE_MIN, OVERWEIGHT_MIN, Severity};
pub use config::{BmiConfig, Rounding};
pub use measurement::Measurement;
pub use results::BmiResult;
pub use unit_system::UnitSystem;

/// Computes and classifies a BMI using the default configuration.
///
/// Returns `None` when either input is zero, negative, `NaN`, or infinite.
/// That is the expected state of an incomplete form, not an error.
///
/// # Example
///
/// ```
/// use twine_bmi::models::health::bmi::{Category, Severity, UnitSystem, compute};
///
/// let result = compute(68.0, 154.0, UnitSystem::Imperial).unwrap();
/// assert_eq!(result.value, 23.4);
/// assert_eq!(result.category, Category::Normal);
/// assert_eq!(result.severity, Severity::Success);
/// ```
#[must_use]
pub fn compute(height: f64, weight: f64, unit: UnitSystem) -> Option<BmiResult> {
    compute_with(height, weight, unit, &BmiConfig::default())
}

/// Computes and classifies a BMI with an explicit configuration.
///
/// See [`compute`] for when the result is absent.
#[must_use]
pub fn compute_with(
    height: f64,
    weight: f64,
    unit: UnitSystem,
    config: &BmiConfig,
) -> Option<BmiResult> {
    let measurement = Measurement::new(height, weight, unit).ok()?;
    Some(evaluate(&measurement, config))
}

/// Computes and classifies a BMI from a validated measurement.
#[must_use]
pub fn evaluate(measurement: &Measurement, config: &BmiConfig) -> BmiResult {
    let bmi = measurement.bmi();
    BmiResult::new(bmi, config.rounding.round_tenths(bmi))
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        f64::{Length, Mass},
        length::centimeter,
        mass::kilogram,
    };

    fn metric(height: f64, weight: f64) -> BmiResult {
        compute(height, weight, UnitSystem::Metric).expect("valid metric input")
    }

    #[test]
    fn reference_scenarios() {
        let cases = [
            (170.0, 70.0, UnitSystem::Metric, 24.2, Category::Normal),
            (68.0, 154.0, UnitSystem::Imperial, 23.4, Category::Normal),
            (150.0, 45.0, UnitSystem::Metric, 20.0, Category::Normal),
            (160.0, 45.0, UnitSystem::Metric, 17.6, Category::Underweight),
            (170.0, 95.0, UnitSystem::Metric, 32.9, Category::Obese),
        ];

        for (height, weight, unit, value, category) in cases {
            let result = compute(height, weight, unit).expect("valid input");
            assert_relative_eq!(result.value, value);
            assert_eq!(result.category, category, "{height} / {weight} ({unit})");
        }
    }

    #[test]
    fn attaches_description_and_severity() {
        let result = metric(170.0, 95.0);
        assert_eq!(result.description, "Consult with a healthcare provider");
        assert_eq!(result.severity, Severity::Danger);

        let result = metric(160.0, 45.0);
        assert_eq!(
            result.description,
            "Consider consulting a healthcare provider"
        );
        assert_eq!(result.severity, Severity::Warning);

        let result = metric(200.0, 110.0);
        assert_eq!(result.category, Category::Overweight);
        assert_eq!(result.description, "Consider lifestyle changes");
        assert_eq!(result.severity, Severity::Warning);
    }

    #[test]
    fn invalid_inputs_have_no_result() {
        let invalid = [
            (0.0, 70.0),
            (170.0, 0.0),
            (-170.0, 70.0),
            (170.0, -70.0),
            (f64::NAN, 70.0),
            (170.0, f64::NAN),
            (f64::INFINITY, 70.0),
            (170.0, f64::INFINITY),
            (f64::NEG_INFINITY, 70.0),
        ];

        for (height, weight) in invalid {
            for unit in [UnitSystem::Metric, UnitSystem::Imperial] {
                assert_eq!(compute(height, weight, unit), None, "{height} / {weight}");
            }
        }
    }

    #[test]
    fn thresholds_belong_to_upper_category() {
        // A 2 m height makes the metric BMI exactly weight / 4.
        assert_eq!(metric(200.0, 74.0).category, Category::Normal);
        assert_eq!(metric(200.0, 100.0).category, Category::Overweight);
        assert_eq!(metric(200.0, 120.0).category, Category::Obese);

        assert_eq!(metric(200.0, 73.96).category, Category::Underweight);
        assert_eq!(metric(200.0, 99.96).category, Category::Normal);
        assert_eq!(metric(200.0, 119.96).category, Category::Overweight);
    }

    #[test]
    fn classifies_before_rounding() {
        // 99.84 / 4 = 24.96, reported as 25.0 but still in the normal range.
        let result = metric(200.0, 99.84);
        assert_relative_eq!(result.value, 25.0);
        assert_eq!(result.category, Category::Normal);
    }

    #[test]
    fn values_have_at_most_one_decimal() {
        for height in (100..=220).step_by(7) {
            for weight in (30..=180).step_by(11) {
                for unit in [UnitSystem::Metric, UnitSystem::Imperial] {
                    let result = compute(f64::from(height), f64::from(weight) + 0.37, unit)
                        .expect("valid input");
                    let text = result.value.to_string();
                    let decimals = text.split_once('.').map_or(0, |(_, frac)| frac.len());
                    assert!(decimals <= 1, "{text} has more than one decimal");
                }
            }
        }
    }

    #[test]
    fn metric_and_imperial_agree() {
        let bodies = [
            (150.0, 45.0),
            (160.0, 45.0),
            (170.0, 70.0),
            (180.0, 90.0),
            (165.0, 100.0),
            (190.0, 60.0),
        ];

        for (cm, kg) in bodies {
            let height = Length::new::<centimeter>(cm);
            let weight = Mass::new::<kilogram>(kg);

            let from_metric = metric(cm, kg);
            let imperial = compute(
                UnitSystem::Imperial.height_in(height),
                UnitSystem::Imperial.weight_in(weight),
                UnitSystem::Imperial,
            )
            .expect("valid imperial input");

            assert_eq!(from_metric.category, imperial.category, "{cm} cm / {kg} kg");
            assert!(
                (from_metric.value - imperial.value).abs() <= 0.1 + 1e-9,
                "{} vs {}",
                from_metric.value,
                imperial.value
            );
        }
    }

    #[test]
    fn rounding_mode_only_changes_value() {
        // 200 cm and 97 kg gives exactly 24.25.
        let away = compute_with(200.0, 97.0, UnitSystem::Metric, &BmiConfig::default()).unwrap();
        let even = compute_with(
            200.0,
            97.0,
            UnitSystem::Metric,
            &BmiConfig {
                rounding: Rounding::HalfToEven,
            },
        )
        .unwrap();

        assert_relative_eq!(away.value, 24.3);
        assert_relative_eq!(even.value, 24.2);
        assert_eq!(away.category, even.category);
    }

    #[test]
    fn huge_finite_bmi_stays_finite() {
        // 1e304 kg over 1 cm gives a BMI of 1e308, too large to scale by ten.
        let result = metric(1.0, 1e304);
        assert!(result.value.is_finite());
        assert_relative_eq!(result.value, 1e308, max_relative = 1e-12);
        assert_eq!(result.category, Category::Obese);
    }

    #[test]
    fn evaluate_matches_compute() {
        let measurement = Measurement::new(68.0, 154.0, UnitSystem::Imperial).unwrap();
        assert_eq!(
            Some(evaluate(&measurement, &BmiConfig::default())),
            compute(68.0, 154.0, UnitSystem::Imperial)
        );
    }

    #[test]
    fn result_as_quantity() {
        use crate::support::units::kilogram_per_square_meter;

        let result = metric(170.0, 70.0);
        assert_relative_eq!(
            result.as_quantity().get::<kilogram_per_square_meter>(),
            24.2,
            epsilon = 1e-12
        );
    }
}
