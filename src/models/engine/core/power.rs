//! Indicated horsepower and torque over an MEP × RPM sweep.

use std::f64::consts::FRAC_PI_4;

use uom::si::{
    f64::{AngularVelocity, Power, Pressure, Torque},
    power::horsepower,
    pressure::pound_force_per_square_inch,
    torque::pound_force_foot,
};

use crate::support::units::{EngineSpeed, ShopInches};

use super::{EngineConfig, EngineError, validated::ValidEngine};

/// Work rate of one horsepower in ft·lbf/min.
const FT_LBF_PER_MIN_PER_HP: f64 = 33_000.0;

/// `hp × TORQUE_CONSTANT / rpm` gives torque in lbf·ft.
const TORQUE_CONSTANT: f64 = 5252.0;

/// A value observed at one engine speed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RpmSample<T> {
    pub rpm: AngularVelocity,
    pub value: T,
}

/// Horsepower across the rpm sweep at one MEP.
#[derive(Debug, Clone, PartialEq)]
pub struct HorsepowerRow {
    pub mep: Pressure,
    pub samples: Vec<RpmSample<Power>>,
}

/// Smallest and largest horsepower in a table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PowerRange {
    pub min: Power,
    pub max: Power,
}

/// The last sample produced by the sweep, with torque evaluated there.
///
/// This is the last rpm of the last MEP row, which is not necessarily where
/// horsepower or torque peaks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FinalSample {
    pub mep: Pressure,
    pub rpm: AngularVelocity,
    pub horsepower: Power,
    pub torque: Torque,
}

/// Horsepower indexed by MEP (rows) and rpm (columns).
///
/// A table always has at least one row and every row has the same,
/// non-empty set of rpm columns.
#[derive(Debug, Clone, PartialEq)]
pub struct HorsepowerTable {
    rows: Vec<HorsepowerRow>,
}

impl HorsepowerTable {
    /// Rows in ascending MEP order.
    #[must_use]
    pub fn rows(&self) -> &[HorsepowerRow] {
        &self.rows
    }

    /// The rpm columns shared by every row.
    pub fn rpm(&self) -> impl Iterator<Item = AngularVelocity> + '_ {
        self.rows[0].samples.iter().map(|sample| sample.rpm)
    }

    /// The (rpm, horsepower) sequence when the table holds a single MEP.
    #[must_use]
    pub fn single(&self) -> Option<&[RpmSample<Power>]> {
        match self.rows.as_slice() {
            [row] => Some(&row.samples),
            _ => None,
        }
    }

    /// Horsepower at the given row and column indices.
    #[must_use]
    pub fn get(&self, mep_index: usize, rpm_index: usize) -> Option<Power> {
        self.rows
            .get(mep_index)?
            .samples
            .get(rpm_index)
            .map(|sample| sample.value)
    }

    /// Minimum and maximum horsepower over the whole table.
    #[must_use]
    pub fn range(&self) -> PowerRange {
        let first = self.rows[0].samples[0].value;
        self.rows
            .iter()
            .flat_map(|row| &row.samples)
            .fold(
                PowerRange {
                    min: first,
                    max: first,
                },
                |range, sample| PowerRange {
                    min: range.min.min(sample.value),
                    max: range.max.max(sample.value),
                },
            )
    }

    /// The last sample the sweep produced, with torque evaluated there.
    #[must_use]
    pub fn final_sample(&self) -> FinalSample {
        let row = &self.rows[self.rows.len() - 1];
        let sample = row.samples[row.samples.len() - 1];
        FinalSample {
            mep: row.mep,
            rpm: sample.rpm,
            horsepower: sample.value,
            torque: compute_torque(sample.value, sample.rpm),
        }
    }
}

/// Indicated power of an engine as a function of MEP and speed.
///
/// Evaluates the PLAN formula `P·L·A·n·K / 33 000` in US-customary units.
#[derive(Debug, Clone, Copy)]
pub(super) struct IndicatedPower {
    stroke_in: f64,
    piston_area_in2: f64,
    cylinders: f64,
    revolutions_per_power_stroke: f64,
}

impl IndicatedPower {
    pub(super) fn new(engine: &ValidEngine) -> Self {
        let bore_in = engine.dimensions.bore().shop_inches();
        Self {
            stroke_in: engine.dimensions.stroke().shop_inches(),
            piston_area_in2: FRAC_PI_4 * bore_in.powi(2),
            cylinders: f64::from(engine.cylinders.into_inner()),
            revolutions_per_power_stroke: engine.cycle.revolutions_per_power_stroke(),
        }
    }

    pub(super) fn at(&self, mep: Pressure, rpm: AngularVelocity) -> Power {
        let power_strokes_per_min = rpm.rpm() / self.revolutions_per_power_stroke;
        let hp = mep.get::<pound_force_per_square_inch>()
            * self.stroke_in
            * self.piston_area_in2
            * power_strokes_per_min
            * self.cylinders
            / FT_LBF_PER_MIN_PER_HP;
        Power::new::<horsepower>(hp)
    }
}

pub(super) fn horsepower_table(engine: &ValidEngine) -> HorsepowerTable {
    let power = IndicatedPower::new(engine);

    let rows = engine
        .mep
        .iter()
        .map(|&psi| {
            let mep = Pressure::new::<pound_force_per_square_inch>(f64::from(psi));
            let samples = engine
                .rpm
                .iter()
                .map(|&n| {
                    let rpm = AngularVelocity::from_rpm(n);
                    RpmSample {
                        rpm,
                        value: power.at(mep, rpm),
                    }
                })
                .collect();
            HorsepowerRow { mep, samples }
        })
        .collect();

    HorsepowerTable { rows }
}

/// Computes horsepower for every MEP and rpm in the configuration.
///
/// # Errors
///
/// Returns an [`EngineError`] if the configuration is invalid.
pub fn compute_horsepower_sweep(config: &EngineConfig) -> Result<HorsepowerTable, EngineError> {
    let engine = ValidEngine::new(config)?;
    Ok(horsepower_table(&engine))
}

/// Computes torque from horsepower at an engine speed.
///
/// The speed must be non-zero; at zero rpm the result is not finite.
#[must_use]
pub fn compute_torque(power: Power, rpm: AngularVelocity) -> Torque {
    Torque::new::<pound_force_foot>(power.get::<horsepower>() * TORQUE_CONSTANT / rpm.rpm())
}
