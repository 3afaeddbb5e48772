use std::cmp::Ordering;

use num_traits::One;

use super::{Constrained, Constraint, ConstraintError};

/// Marker type enforcing that a value is strictly greater than one.
///
/// Compression ratios and heat capacity ratios are both meaningless at or
/// below one: a compression ratio of one leaves no clearance volume to divide
/// by, and a heat capacity ratio of one removes the temperature rise on
/// compression.
///
/// # Examples
///
/// ```
/// use engine_models::support::constraint::{AboveUnity, ConstraintError};
///
/// let cr = AboveUnity::new(8.75).unwrap();
/// assert_eq!(cr.into_inner(), 8.75);
///
/// assert_eq!(AboveUnity::new(1.0), Err(ConstraintError::BelowMinimum));
/// assert_eq!(AboveUnity::new(0.5), Err(ConstraintError::BelowMinimum));
/// assert_eq!(AboveUnity::new(f64::NAN), Err(ConstraintError::NotANumber));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct AboveUnity;

impl AboveUnity {
    /// Constructs a [`Constrained<T, AboveUnity>`] if the value exceeds one.
    ///
    /// # Errors
    ///
    /// Returns [`ConstraintError::BelowMinimum`] if the value is one or less,
    /// or [`ConstraintError::NotANumber`] if it cannot be compared.
    pub fn new<T: PartialOrd + One>(value: T) -> Result<Constrained<T, AboveUnity>, ConstraintError> {
        Constrained::<T, AboveUnity>::new(value)
    }
}

impl<T: PartialOrd + One> Constraint<T> for AboveUnity {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match value.partial_cmp(&T::one()) {
            Some(Ordering::Greater) => Ok(()),
            Some(Ordering::Equal | Ordering::Less) => Err(ConstraintError::BelowMinimum),
            None => Err(ConstraintError::NotANumber),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn just_above_one_is_accepted() {
        assert!(AboveUnity::new(1.0 + f64::EPSILON).is_ok());
        assert!(AboveUnity::new(1.4).is_ok());
    }

    #[test]
    fn one_and_below_are_rejected() {
        assert_eq!(AboveUnity::new(1.0), Err(ConstraintError::BelowMinimum));
        assert_eq!(AboveUnity::new(0.0), Err(ConstraintError::BelowMinimum));
        assert_eq!(AboveUnity::new(-8.0), Err(ConstraintError::BelowMinimum));
    }

    #[test]
    fn integers() {
        assert!(AboveUnity::new(2_u32).is_ok());
        assert!(AboveUnity::new(1_u32).is_err());
    }
}
