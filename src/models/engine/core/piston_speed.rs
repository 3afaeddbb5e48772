use uom::si::{
    f64::{AngularVelocity, Length, Velocity},
    length::meter,
    velocity::meter_per_second,
};

use crate::support::units::EngineSpeed;

use super::{EngineConfig, EngineError, RpmSample, validated::ValidEngine};

/// Average piston velocity: two strokes per revolution.
#[must_use]
pub fn mean_piston_speed(stroke: Length, rpm: AngularVelocity) -> Velocity {
    Velocity::new::<meter_per_second>(2.0 * stroke.get::<meter>() * rpm.rpm() / 60.0)
}

pub(super) fn piston_speed_sweep(engine: &ValidEngine) -> Vec<RpmSample<Velocity>> {
    let stroke = engine.dimensions.stroke();
    engine
        .rpm
        .iter()
        .map(|&n| {
            let rpm = AngularVelocity::from_rpm(n);
            RpmSample {
                rpm,
                value: mean_piston_speed(stroke, rpm),
            }
        })
        .collect()
}

/// Computes mean piston speed at every rpm in the configuration.
///
/// # Errors
///
/// Returns an [`EngineError`] if the configuration is invalid.
pub fn compute_mean_piston_speed_sweep(
    config: &EngineConfig,
) -> Result<Vec<RpmSample<Velocity>>, EngineError> {
    let engine = ValidEngine::new(config)?;
    Ok(piston_speed_sweep(&engine))
}
