//! Piston engine geometry and performance.
//!
//! [`EngineCalculator`] is the [`twine_core::Model`] for this domain. It
//! delegates to the internal `core` module, whose public types are
//! re-exported here.
//!
//! # Example
//!
//! ```
//! use engine_models::models::engine::{EngineCalculator, EngineConfig, Sweep};
//! use twine_core::Model;
//! use uom::si::{power::horsepower, volume::cubic_centimeter};
//!
//! let config = EngineConfig {
//!     mep: Sweep::new(50, 100, 10),
//!     ..EngineConfig::default()
//! };
//! let metrics = EngineCalculator.call(&config).unwrap();
//!
//! assert_eq!(metrics.horsepower.rows().len(), 6);
//! assert!((metrics.geometry.displacement.get::<cubic_centimeter>() - 26.507).abs() < 1e-3);
//! assert!(metrics.horsepower_range.max.get::<horsepower>() > 20.0);
//! ```

mod core;

pub use self::core::{
    ConfigurationClass, Dimension, Dimensions, EngineConfig, EngineError, EngineMetrics,
    FinalSample, Geometry, GivenPowerConfig, GivenPowerError, HeatCapacityRatio, HorsepowerRow,
    HorsepowerTable, PowerPoint, PowerRange, RangeError, RpmSample, StrokeCycle, Sweep, SweepKind,
    ThermalEfficiency, calculate, compute_geometry, compute_horsepower_sweep,
    compute_mean_piston_speed_sweep, compute_thermal_efficiency, compute_torque,
    mean_piston_speed, rpm_for_power,
};

use twine_core::Model;

/// Evaluates an [`EngineConfig`] into [`EngineMetrics`].
#[derive(Debug, Clone, Copy, Default)]
pub struct EngineCalculator;

impl Model for EngineCalculator {
    type Input = EngineConfig;
    type Output = EngineMetrics;
    type Error = EngineError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        self::core::calculate(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::velocity::meter_per_second;

    #[test]
    fn adapter_matches_core() {
        let config = EngineConfig::default();
        let via_model = EngineCalculator.call(&config).unwrap();
        assert_eq!(via_model, calculate(&config).unwrap());
        assert_relative_eq!(
            via_model.mean_piston_speed[9].value.get::<meter_per_second>(),
            12.5,
            max_relative = 1e-12
        );
    }

    #[test]
    fn adapter_propagates_errors() {
        let config = EngineConfig {
            cylinders: 0,
            ..EngineConfig::default()
        };
        assert!(matches!(
            EngineCalculator.call(&config),
            Err(EngineError::InvalidDimension {
                dimension: Dimension::Cylinders,
                ..
            })
        ));
    }
}
