use std::cmp::Ordering;

use num_traits::Float;

use super::{Constrained, Constraint, ConstraintError};

/// Marker type enforcing that a float is strictly positive and finite.
///
/// This is the validity rule for raw measurements read from user input.
/// Negative infinity reports [`ConstraintError::Negative`]; positive infinity
/// reports [`ConstraintError::NotFinite`].
///
/// # Examples
///
/// ```
/// use twine_bmi::support::constraint::{ConstraintError, PositiveFinite};
///
/// let height = PositiveFinite::new(170.0).unwrap();
/// assert_eq!(height.into_inner(), 170.0);
///
/// assert_eq!(PositiveFinite::new(0.0).unwrap_err(), ConstraintError::Zero);
/// assert_eq!(PositiveFinite::new(f64::INFINITY).unwrap_err(), ConstraintError::NotFinite);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct PositiveFinite;

impl PositiveFinite {
    /// Constructs a [`Constrained<T, PositiveFinite>`] if the value is positive and finite.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is zero, negative, infinite, or `NaN`.
    pub fn new<T: Float>(value: T) -> Result<Constrained<T, PositiveFinite>, ConstraintError> {
        Constrained::<T, PositiveFinite>::new(value)
    }
}

impl<T: Float> Constraint<T> for PositiveFinite {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match value.partial_cmp(&T::zero()) {
            Some(Ordering::Greater) if value.is_finite() => Ok(()),
            Some(Ordering::Greater) => Err(ConstraintError::NotFinite),
            Some(Ordering::Equal) => Err(ConstraintError::Zero),
            Some(Ordering::Less) => Err(ConstraintError::Negative),
            None => Err(ConstraintError::NotANumber),
        }
    }
}
