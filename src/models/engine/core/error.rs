use std::fmt;

use thiserror::Error;

use crate::support::constraint::ConstraintError;

/// Errors that can occur while evaluating an engine.
///
/// Inputs are checked in a fixed order (bore, stroke, compression ratio,
/// cylinders, rpm sweep, MEP sweep) and the first violation is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EngineError {
    /// A physical dimension is out of range.
    #[error("invalid {dimension}")]
    InvalidDimension {
        dimension: Dimension,

        /// The violated constraint.
        #[source]
        source: ConstraintError,
    },

    /// An rpm or MEP sweep is malformed.
    #[error("invalid {sweep} sweep")]
    InvalidRange {
        sweep: SweepKind,

        #[source]
        reason: RangeError,
    },
}

/// The input that failed dimension validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dimension {
    Bore,
    Stroke,
    CompressionRatio,
    Cylinders,
    MeanEffectivePressure,
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Bore => "bore",
            Self::Stroke => "stroke",
            Self::CompressionRatio => "compression ratio",
            Self::Cylinders => "cylinder count",
            Self::MeanEffectivePressure => "mean effective pressure",
        })
    }
}

/// The sweep that failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SweepKind {
    Rpm,
    Mep,
}

impl fmt::Display for SweepKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Rpm => "rpm",
            Self::Mep => "MEP",
        })
    }
}

/// Why a sweep is malformed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RangeError {
    #[error("sweep must start above zero")]
    ZeroStart,
    #[error("sweep step must not be zero")]
    ZeroStep,
    #[error("sweep start {start} is after its end {end}")]
    Reversed { start: u32, end: u32 },
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::error::Error as _;

    #[test]
    fn messages_name_the_offending_input() {
        let err = EngineError::InvalidDimension {
            dimension: Dimension::CompressionRatio,
            source: ConstraintError::BelowMinimum,
        };
        assert_eq!(err.to_string(), "invalid compression ratio");
        assert_eq!(
            err.source().map(ToString::to_string).as_deref(),
            Some("value is below the minimum allowed")
        );

        let err = EngineError::InvalidRange {
            sweep: SweepKind::Rpm,
            reason: RangeError::Reversed {
                start: 9000,
                end: 1000,
            },
        };
        assert_eq!(err.to_string(), "invalid rpm sweep");
        assert_eq!(
            err.source().map(ToString::to_string).as_deref(),
            Some("sweep start 9000 is after its end 1000")
        );
    }
}
