//! Results of an engine evaluation.

use uom::si::f64::{Velocity, Volume};

use super::{FinalSample, Geometry, HorsepowerTable, PowerRange, RpmSample, ThermalEfficiency};

/// Geometry and performance estimates for one engine configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct EngineMetrics {
    /// Per-cylinder geometry.
    pub geometry: Geometry,

    /// Displacement summed over all cylinders.
    pub total_displacement: Volume,

    /// Ideal Otto-cycle efficiency for air.
    pub thermal_efficiency: ThermalEfficiency,

    /// Horsepower by MEP and rpm.
    pub horsepower: HorsepowerTable,

    /// Smallest and largest horsepower in the table.
    pub horsepower_range: PowerRange,

    /// Mean piston speed by rpm.
    pub mean_piston_speed: Vec<RpmSample<Velocity>>,

    /// Last sample of the horsepower sweep, including torque.
    pub final_sample: FinalSample,
}
