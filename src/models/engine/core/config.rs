//! Engine configuration inputs.

use std::fmt;

use uom::si::{f64::Length, length::millimeter};

use super::RangeError;

/// Bore, stroke, and compression ratio of a single cylinder.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dimensions {
    /// Cylinder diameter.
    pub bore: Length,

    /// Piston travel from bottom to top dead center.
    pub stroke: Length,

    /// Total cylinder volume divided by clearance volume.
    pub compression_ratio: f64,
}

impl Dimensions {
    /// Creates dimensions from a bore and stroke given in millimeters.
    #[must_use]
    pub fn from_millimeters(bore: f64, stroke: f64, compression_ratio: f64) -> Self {
        Self {
            bore: Length::new::<millimeter>(bore),
            stroke: Length::new::<millimeter>(stroke),
            compression_ratio,
        }
    }
}

/// Number of crankshaft revolutions per power stroke.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StrokeCycle {
    /// One power stroke every two revolutions.
    #[default]
    FourStroke,
    /// One power stroke every revolution.
    TwoStroke,
}

impl StrokeCycle {
    /// Crankshaft revolutions per power stroke.
    #[must_use]
    pub fn revolutions_per_power_stroke(self) -> f64 {
        match self {
            Self::FourStroke => 2.0,
            Self::TwoStroke => 1.0,
        }
    }
}

impl fmt::Display for StrokeCycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FourStroke => f.write_str("four-stroke"),
            Self::TwoStroke => f.write_str("two-stroke"),
        }
    }
}

/// An integer sweep visited from `start` by repeatedly adding `step`.
///
/// `end` is included only when it lands on a step boundary, so
/// `Sweep::new(1000, 10_500, 1000)` stops at 10 000.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sweep {
    /// First visited value.
    pub start: u32,

    /// Inclusive upper limit.
    pub end: u32,

    /// Increment between visited values.
    pub step: u32,
}

impl Sweep {
    /// Creates a sweep; bounds are checked when it is expanded by [`Sweep::points`].
    #[must_use]
    pub fn new(start: u32, end: u32, step: u32) -> Self {
        Self { start, end, step }
    }

    /// A sweep containing only `value`.
    #[must_use]
    pub fn single(value: u32) -> Self {
        Self {
            start: value,
            end: value,
            step: 1,
        }
    }

    /// Returns the visited values in order.
    ///
    /// # Errors
    ///
    /// Returns a [`RangeError`] if `start` or `step` is zero, or if
    /// `start > end`.
    pub fn points(&self) -> Result<Vec<u32>, RangeError> {
        if self.start == 0 {
            return Err(RangeError::ZeroStart);
        }
        if self.step == 0 {
            return Err(RangeError::ZeroStep);
        }
        if self.start > self.end {
            return Err(RangeError::Reversed {
                start: self.start,
                end: self.end,
            });
        }

        Ok((self.start..=self.end).step_by(self.step as usize).collect())
    }
}

/// Everything needed to evaluate an engine.
///
/// The default is a small single-cylinder four-stroke: 30 mm bore, 37.5 mm
/// stroke, 8.75:1 compression, swept from 1000 to 10 000 rpm at 75 psi MEP.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineConfig {
    /// Per-cylinder bore, stroke, and compression ratio.
    pub dimensions: Dimensions,

    /// Number of cylinders.
    pub cylinders: u32,

    /// Four- or two-stroke operation.
    pub cycle: StrokeCycle,

    /// Engine speeds in rev/min.
    pub rpm: Sweep,

    /// Mean effective pressures in psi.
    ///
    /// Use [`Sweep::single`] for a single assumed MEP.
    pub mep: Sweep,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            dimensions: Dimensions::from_millimeters(30.0, 37.5, 8.75),
            cylinders: 1,
            cycle: StrokeCycle::FourStroke,
            rpm: Sweep::new(1000, 10_000, 1000),
            mep: Sweep::single(75),
        }
    }
}
