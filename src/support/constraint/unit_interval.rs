use std::{cmp::Ordering, marker::PhantomData};

use uom::si::{f64::Ratio, ratio::ratio};

use super::{Constrained, Constraint, ConstraintError};

/// Supplies 0 and 1 for types used with unit-interval constraints.
///
/// Implementations should ensure that `zero() ≤ one()` under the type's
/// `PartialOrd` so the interval is well-formed.
pub trait UnitBounds: PartialOrd {
    fn zero() -> Self;
    fn one() -> Self;
}

impl UnitBounds for f64 {
    fn zero() -> Self {
        0.0
    }
    fn one() -> Self {
        1.0
    }
}

impl UnitBounds for Ratio {
    fn zero() -> Self {
        Ratio::new::<ratio>(0.0)
    }
    fn one() -> Self {
        Ratio::new::<ratio>(1.0)
    }
}

/// Marker type enforcing that a value lies in the right-open unit interval: `0 ≤ x < 1`.
///
/// An ideal-cycle efficiency lives here: zero when nothing is compressed,
/// approaching but never reaching one.
///
/// # Examples
///
/// ```
/// use engine_models::support::constraint::UnitIntervalUpperOpen;
/// use uom::si::{f64::Ratio, ratio::{percent, ratio}};
///
/// let eta = UnitIntervalUpperOpen::new(Ratio::new::<ratio>(0.58)).unwrap();
/// assert!((eta.as_ref().get::<percent>() - 58.0).abs() < 1e-12);
///
/// let z = UnitIntervalUpperOpen::zero::<Ratio>();
/// assert_eq!(z.into_inner().get::<ratio>(), 0.0);
///
/// assert!(UnitIntervalUpperOpen::new(1.0).is_err());
/// assert!(UnitIntervalUpperOpen::new(-0.1).is_err());
/// assert!(UnitIntervalUpperOpen::new(f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct UnitIntervalUpperOpen;

impl UnitIntervalUpperOpen {
    /// Constructs `Constrained<T, UnitIntervalUpperOpen>` if 0 ≤ value < 1.
    ///
    /// # Errors
    ///
    /// - [`ConstraintError::BelowMinimum`] if less than zero.
    /// - [`ConstraintError::AboveMaximum`] if greater than or equal to one.
    /// - [`ConstraintError::NotANumber`] if comparison is undefined (e.g., NaN).
    pub fn new<T: UnitBounds>(
        value: T,
    ) -> Result<Constrained<T, UnitIntervalUpperOpen>, ConstraintError> {
        Constrained::<T, UnitIntervalUpperOpen>::new(value)
    }

    /// Returns the lower bound (zero) as a constrained value.
    #[must_use]
    pub fn zero<T: UnitBounds>() -> Constrained<T, UnitIntervalUpperOpen> {
        Constrained::<T, UnitIntervalUpperOpen> {
            value: T::zero(),
            _marker: PhantomData,
        }
    }
}

impl<T: UnitBounds> Constraint<T> for UnitIntervalUpperOpen {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match (value.partial_cmp(&T::zero()), value.partial_cmp(&T::one())) {
            (None, _) | (_, None) => Err(ConstraintError::NotANumber),
            (Some(Ordering::Less), _) => Err(ConstraintError::BelowMinimum),
            (_, Some(Ordering::Greater | Ordering::Equal)) => Err(ConstraintError::AboveMaximum),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_included_and_one_is_not() {
        assert!(UnitIntervalUpperOpen::new(0.0).is_ok());
        assert!(UnitIntervalUpperOpen::new(0.999).is_ok());
        assert_eq!(
            UnitIntervalUpperOpen::new(1.0),
            Err(ConstraintError::AboveMaximum)
        );
    }

    #[test]
    fn negative_ratios_are_below_minimum() {
        assert_eq!(
            UnitIntervalUpperOpen::new(Ratio::new::<ratio>(-0.2)).map(Constrained::into_inner),
            Err(ConstraintError::BelowMinimum)
        );
    }

    #[test]
    fn nan_is_not_a_number() {
        assert_eq!(
            UnitIntervalUpperOpen::new(f64::NAN),
            Err(ConstraintError::NotANumber)
        );
    }
}
