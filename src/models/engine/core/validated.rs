//! Checked engine inputs.

use uom::si::f64::Length;

use crate::support::constraint::{AboveUnity, Constrained, StrictlyPositive};

use super::{Dimension, Dimensions, EngineConfig, EngineError, StrokeCycle, SweepKind};

/// Dimensions that passed validation.
#[derive(Debug, Clone, Copy)]
pub(super) struct ValidDimensions {
    pub(super) bore: Constrained<Length, StrictlyPositive>,
    pub(super) stroke: Constrained<Length, StrictlyPositive>,
    pub(super) compression_ratio: Constrained<f64, AboveUnity>,
}

impl ValidDimensions {
    /// Checks bore, stroke, then compression ratio.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidDimension`] for the first violation.
    pub(super) fn new(dimensions: &Dimensions) -> Result<Self, EngineError> {
        let invalid = |dimension| {
            move |source| EngineError::InvalidDimension { dimension, source }
        };

        Ok(Self {
            bore: StrictlyPositive::new(dimensions.bore).map_err(invalid(Dimension::Bore))?,
            stroke: StrictlyPositive::new(dimensions.stroke).map_err(invalid(Dimension::Stroke))?,
            compression_ratio: AboveUnity::new(dimensions.compression_ratio)
                .map_err(invalid(Dimension::CompressionRatio))?,
        })
    }

    pub(super) fn bore(&self) -> Length {
        self.bore.into_inner()
    }

    pub(super) fn stroke(&self) -> Length {
        self.stroke.into_inner()
    }

    pub(super) fn compression_ratio(&self) -> f64 {
        self.compression_ratio.into_inner()
    }
}

/// A fully validated [`EngineConfig`] with its sweeps expanded.
///
/// Both sweeps are guaranteed non-empty.
#[derive(Debug, Clone)]
pub(super) struct ValidEngine {
    pub(super) dimensions: ValidDimensions,
    pub(super) cylinders: Constrained<u32, StrictlyPositive>,
    pub(super) cycle: StrokeCycle,
    pub(super) rpm: Vec<u32>,
    pub(super) mep: Vec<u32>,
}

impl ValidEngine {
    /// Validates a configuration.
    ///
    /// # Errors
    ///
    /// Returns the first [`EngineError`] encountered.
    pub(super) fn new(config: &EngineConfig) -> Result<Self, EngineError> {
        let dimensions = ValidDimensions::new(&config.dimensions)?;

        let cylinders = StrictlyPositive::new(config.cylinders).map_err(|source| {
            EngineError::InvalidDimension {
                dimension: Dimension::Cylinders,
                source,
            }
        })?;

        let rpm = config
            .rpm
            .points()
            .map_err(|reason| EngineError::InvalidRange {
                sweep: SweepKind::Rpm,
                reason,
            })?;

        let mep = config
            .mep
            .points()
            .map_err(|reason| EngineError::InvalidRange {
                sweep: SweepKind::Mep,
                reason,
            })?;

        Ok(Self {
            dimensions,
            cylinders,
            cycle: config.cycle,
            rpm,
            mep,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::models::engine::core::{RangeError, Sweep};
    use crate::support::constraint::ConstraintError;

    #[test]
    fn accepts_reference_engine() {
        let engine = ValidEngine::new(&EngineConfig::default()).unwrap();
        assert_eq!(engine.rpm.len(), 10);
        assert_eq!(engine.mep, vec![75]);
        assert_eq!(engine.cylinders.into_inner(), 1);
    }

    #[test]
    fn compression_ratio_of_one_is_rejected() {
        let dimensions = Dimensions::from_millimeters(30.0, 37.5, 1.0);
        assert_eq!(
            ValidDimensions::new(&dimensions).unwrap_err(),
            EngineError::InvalidDimension {
                dimension: Dimension::CompressionRatio,
                source: ConstraintError::BelowMinimum,
            }
        );
    }

    #[test]
    fn reports_first_violation() {
        let config = EngineConfig {
            dimensions: Dimensions::from_millimeters(-30.0, 0.0, 0.5),
            cylinders: 0,
            rpm: Sweep::new(0, 0, 0),
            ..EngineConfig::default()
        };
        assert_eq!(
            ValidEngine::new(&config).unwrap_err(),
            EngineError::InvalidDimension {
                dimension: Dimension::Bore,
                source: ConstraintError::Negative,
            }
        );
    }

    #[test]
    fn zero_cylinders_is_rejected() {
        let config = EngineConfig {
            cylinders: 0,
            ..EngineConfig::default()
        };
        assert_eq!(
            ValidEngine::new(&config).unwrap_err(),
            EngineError::InvalidDimension {
                dimension: Dimension::Cylinders,
                source: ConstraintError::Zero,
            }
        );
    }

    #[test]
    fn rpm_is_checked_before_mep() {
        let config = EngineConfig {
            rpm: Sweep::new(5000, 1000, 1000),
            mep: Sweep::new(50, 100, 0),
            ..EngineConfig::default()
        };
        assert_eq!(
            ValidEngine::new(&config).unwrap_err(),
            EngineError::InvalidRange {
                sweep: SweepKind::Rpm,
                reason: RangeError::Reversed {
                    start: 5000,
                    end: 1000,
                },
            }
        );

        let config = EngineConfig {
            mep: Sweep::new(50, 100, 0),
            ..EngineConfig::default()
        };
        assert_eq!(
            ValidEngine::new(&config).unwrap_err(),
            EngineError::InvalidRange {
                sweep: SweepKind::Mep,
                reason: RangeError::ZeroStep,
            }
        );
    }
}
