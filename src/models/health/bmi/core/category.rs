use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Lower bound of the [`Category::Normal`] range, kg/m².
pub const NORMAL_MIN: f64 = 18.5;

/// Lower bound of the [`Category::Overweight`] range, kg/m².
pub const OVERWEIGHT_MIN: f64 = 25.0;

/// Lower bound of the [`Category::Obese`] range, kg/m².
pub const OBESE_MIN: f64 = 30.0;

/// Weight category for a BMI value.
///
/// Ranges are half-open, so each boundary belongs to the upper category.
///
/// | BMI             | Category      |
/// |-----------------|---------------|
/// | `< 18.5`        | `Underweight` |
/// | `[18.5, 25)`    | `Normal`      |
/// | `[25, 30)`      | `Overweight`  |
/// | `>= 30`         | `Obese`       |
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Category {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

/// Presentation tier for a [`Category`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Severity {
    Warning,
    Success,
    Danger,
}

impl Category {
    /// All categories in ascending BMI order.
    pub const ALL: [Category; 4] = [
        Category::Underweight,
        Category::Normal,
        Category::Overweight,
        Category::Obese,
    ];

    /// Classifies an unrounded BMI value.
    ///
    /// A `NaN` input fails every comparison and lands in `Obese`; callers are
    /// expected to pass values computed from validated measurements.
    #[must_use]
    pub fn from_bmi(bmi: f64) -> Self {
        if bmi < NORMAL_MIN {
            Self::Underweight
        } else if bmi < OVERWEIGHT_MIN {
            Self::Normal
        } else if bmi < OBESE_MIN {
            Self::Overweight
        } else {
            Self::Obese
        }
    }

    /// Short advisory text for this category.
    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Self::Underweight => "Consider consulting a healthcare provider",
            Self::Normal => "Healthy weight range",
            Self::Overweight => "Consider lifestyle changes",
            Self::Obese => "Consult with a healthcare provider",
        }
    }

    #[must_use]
    pub fn severity(self) -> Severity {
        match self {
            Self::Underweight | Self::Overweight => Severity::Warning,
            Self::Normal => Severity::Success,
            Self::Obese => Severity::Danger,
        }
    }

    /// Human-readable BMI range, as shown on a category scale.
    #[must_use]
    pub fn range_label(self) -> &'static str {
        match self {
            Self::Underweight => "< 18.5",
            Self::Normal => "18.5 - 24.9",
            Self::Overweight => "25 - 29.9",
            Self::Obese => "≥ 30",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Underweight => "Underweight",
            Self::Normal => "Normal",
            Self::Overweight => "Overweight",
            Self::Obese => "Obese",
        };
        f.write_str(name)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Warning => "warning",
            Self::Success => "success",
            Self::Danger => "danger",
        };
        f.write_str(name)
    }
}
