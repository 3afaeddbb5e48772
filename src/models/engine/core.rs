//! Closed-form piston engine calculations.
//!
//! A single pass turns an [`EngineConfig`] into [`EngineMetrics`]:
//! validation, cylinder geometry, ideal-cycle efficiency, the horsepower
//! table, and mean piston speed. Nothing is cached between calls.

mod config;
mod efficiency;
mod error;
mod geometry;
mod given_power;
mod metrics;
mod piston_speed;
mod power;
mod validated;

#[cfg(test)]
mod test_support;

pub use config::{Dimensions, EngineConfig, StrokeCycle, Sweep};
pub use efficiency::{HeatCapacityRatio, ThermalEfficiency, compute_thermal_efficiency};
pub use error::{Dimension, EngineError, RangeError, SweepKind};
pub use geometry::{ConfigurationClass, Geometry, compute_geometry};
pub use given_power::{GivenPowerConfig, GivenPowerError, PowerPoint, rpm_for_power};
pub use metrics::EngineMetrics;
pub use piston_speed::{compute_mean_piston_speed_sweep, mean_piston_speed};
pub use power::{
    FinalSample, HorsepowerRow, HorsepowerTable, PowerRange, RpmSample, compute_horsepower_sweep,
    compute_torque,
};

use tracing::debug;
use uom::si::{
    f64::Volume, length::millimeter, power::horsepower, ratio::percent, volume::cubic_centimeter,
};

use piston_speed::piston_speed_sweep;
use power::horsepower_table;
use validated::ValidEngine;

/// Evaluates an engine configuration.
///
/// # Errors
///
/// Returns the first [`EngineError`] found while validating the
/// configuration. A valid configuration always produces complete metrics.
pub fn calculate(config: &EngineConfig) -> Result<EngineMetrics, EngineError> {
    let engine = ValidEngine::new(config)?;

    debug!(
        bore_mm = engine.dimensions.bore().get::<millimeter>(),
        stroke_mm = engine.dimensions.stroke().get::<millimeter>(),
        compression_ratio = engine.dimensions.compression_ratio(),
        cylinders = engine.cylinders.into_inner(),
        rpm_points = engine.rpm.len(),
        mep_points = engine.mep.len(),
        "evaluating engine"
    );

    let geometry = Geometry::from_valid(&engine.dimensions);
    let total_displacement: Volume =
        geometry.displacement * f64::from(engine.cylinders.into_inner());

    let thermal_efficiency = compute_thermal_efficiency(
        engine.dimensions.compression_ratio(),
        HeatCapacityRatio::air(),
    )
    .map_err(|source| EngineError::InvalidDimension {
        dimension: Dimension::CompressionRatio,
        source,
    })?;

    let table = horsepower_table(&engine);
    let horsepower_range = table.range();
    let final_sample = table.final_sample();

    debug!(
        displacement_cc = total_displacement.get::<cubic_centimeter>(),
        thermal_efficiency_pct = thermal_efficiency.get::<percent>(),
        hp_min = horsepower_range.min.get::<horsepower>(),
        hp_max = horsepower_range.max.get::<horsepower>(),
        "engine evaluated"
    );

    Ok(EngineMetrics {
        geometry,
        total_displacement,
        thermal_efficiency,
        horsepower: table,
        horsepower_range,
        mean_piston_speed: piston_speed_sweep(&engine),
        final_sample,
    })
}
