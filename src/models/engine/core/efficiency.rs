//! Ideal Otto-cycle thermal efficiency.

use std::ops::Deref;

use uom::si::{f64::Ratio, ratio::ratio};

use crate::support::constraint::{
    AboveUnity, Constrained, ConstraintResult, UnitIntervalUpperOpen,
};

/// Ratio of specific heats (`cp / cv`) of the working fluid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeatCapacityRatio(Constrained<f64, AboveUnity>);

impl HeatCapacityRatio {
    /// Cold-air-standard value for air.
    pub const AIR: f64 = 1.4;

    /// Creates a heat capacity ratio.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the value is not greater than one.
    pub fn new(value: f64) -> ConstraintResult<Self> {
        Ok(Self(AboveUnity::new(value)?))
    }

    /// The cold-air-standard ratio, 1.4.
    #[must_use]
    pub fn air() -> Self {
        Self::new(Self::AIR).expect("1.4 is above unity")
    }

    #[must_use]
    pub fn value(&self) -> f64 {
        self.0.into_inner()
    }
}

impl Default for HeatCapacityRatio {
    fn default() -> Self {
        Self::air()
    }
}

/// Fraction of heat input converted to work, in `[0, 1)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThermalEfficiency(Constrained<Ratio, UnitIntervalUpperOpen>);

impl Deref for ThermalEfficiency {
    type Target = Ratio;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

/// Computes the ideal Otto-cycle efficiency `1 − r^(1 − γ)`.
///
/// The efficiency is zero at a compression ratio of one and rises toward one
/// as the ratio grows.
///
/// # Errors
///
/// Returns `Err` if the compression ratio is below one (negative efficiency),
/// is not a number, or is so large the efficiency rounds to one.
pub fn compute_thermal_efficiency(
    compression_ratio: f64,
    gamma: HeatCapacityRatio,
) -> ConstraintResult<ThermalEfficiency> {
    let efficiency = 1.0 - compression_ratio.powf(1.0 - gamma.value());
    let efficiency = UnitIntervalUpperOpen::new(Ratio::new::<ratio>(efficiency))?;
    Ok(ThermalEfficiency(efficiency))
}
