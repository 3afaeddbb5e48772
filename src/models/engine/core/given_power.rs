//! Iterative solver for the engine speed that reaches a target power.
//!
//! Varies engine speed within the configured rpm sweep, at a fixed MEP,
//! until the indicated horsepower matches the target.

mod config;
mod error;
mod problem;

pub use config::GivenPowerConfig;
pub use error::GivenPowerError;

use tracing::debug;
use twine_solvers::equation::bisection;
use uom::si::{
    f64::{AngularVelocity, Power, Pressure},
    power::horsepower,
};

use crate::support::{constraint::StrictlyPositive, units::EngineSpeed};

use super::{Dimension, EngineConfig, EngineError, power::IndicatedPower, validated::ValidEngine};

use problem::{GivenPowerModel, GivenPowerProblem};

/// Horsepower reached at one speed and MEP.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PowerPoint {
    pub mep: Pressure,
    pub rpm: AngularVelocity,
    pub horsepower: Power,
}

/// Finds the engine speed at which `target` horsepower is reached at `mep`.
///
/// The search is bracketed by the first and last speeds of the
/// configuration's rpm sweep; the MEP sweep is not used.
///
/// # Errors
///
/// Returns [`GivenPowerError`] if the configuration or `mep` is invalid, the
/// target lies outside the power reachable in the rpm sweep, or the solver
/// fails to converge.
pub fn rpm_for_power(
    engine: &EngineConfig,
    mep: Pressure,
    target: Power,
    config: GivenPowerConfig,
) -> Result<PowerPoint, GivenPowerError> {
    let engine = ValidEngine::new(engine)?;
    let mep = StrictlyPositive::new(mep)
        .map_err(|source| EngineError::InvalidDimension {
            dimension: Dimension::MeanEffectivePressure,
            source,
        })?
        .into_inner();
    let power = IndicatedPower::new(&engine);

    // Validation guarantees a non-empty sweep.
    let low = AngularVelocity::from_rpm(engine.rpm[0]);
    let high = AngularVelocity::from_rpm(engine.rpm[engine.rpm.len() - 1]);

    let (min, max) = (power.at(mep, low), power.at(mep, high));
    if !(min <= target && target <= max) {
        return Err(GivenPowerError::OutOfRange { target, min, max });
    }

    // Bisection needs a sign change across a non-empty bracket.
    for (rpm, achieved) in [(low, min), (high, max)] {
        if (achieved - target).abs() <= config.power_tol {
            debug!(
                target_hp = target.get::<horsepower>(),
                rpm = rpm.rpm(),
                "target power reached at sweep bound"
            );
            return Ok(PowerPoint {
                mep,
                rpm,
                horsepower: achieved,
            });
        }
    }

    let model = GivenPowerModel::new(power, mep);
    let problem = GivenPowerProblem::new(target);

    let solution = bisection::solve(
        &model,
        &problem,
        [low.rpm(), high.rpm()],
        &config.bisection(),
        |_: &bisection::Event<'_, _, _>| None::<bisection::Action>,
    )?;

    if solution.status != bisection::Status::Converged {
        return Err(GivenPowerError::MaxIters {
            residual: Power::new::<horsepower>(solution.residual),
            iters: solution.iters,
        });
    }

    debug!(
        target_hp = target.get::<horsepower>(),
        rpm = solution.snapshot.output.rpm.rpm(),
        iters = solution.iters,
        "target power reached"
    );

    Ok(solution.snapshot.output)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::pressure::pound_force_per_square_inch;

    use crate::models::engine::core::{Sweep, compute_horsepower_sweep, test_support::reference_engine};
    use crate::support::constraint::ConstraintError;

    fn psi(value: f64) -> Pressure {
        Pressure::new::<pound_force_per_square_inch>(value)
    }

    #[test]
    fn roundtrip() {
        let engine = reference_engine();
        let table = compute_horsepower_sweep(&engine).unwrap();
        let target = table.get(0, 5).unwrap();

        let point = rpm_for_power(&engine, psi(75.0), target, GivenPowerConfig::default())
            .expect("solve should succeed");

        assert_relative_eq!(point.rpm.rpm(), 6000.0, epsilon = 1e-5);
        assert_relative_eq!(
            point.horsepower.get::<horsepower>(),
            target.get::<horsepower>(),
            epsilon = 1e-8
        );
    }

    #[test]
    fn first_and_last_sweep_speeds() {
        let engine = reference_engine();
        let table = compute_horsepower_sweep(&engine).unwrap();

        for (column, expected_rpm) in [(0, 1000.0), (9, 10_000.0)] {
            let target = table.get(0, column).unwrap();
            let point = rpm_for_power(&engine, psi(75.0), target, GivenPowerConfig::default())
                .expect("sweep bound should be reachable");

            assert_relative_eq!(point.rpm.rpm(), expected_rpm, max_relative = 1e-12);
            assert_eq!(point.horsepower, target);
        }
    }

    #[test]
    fn single_speed_sweep() {
        let engine = EngineConfig {
            rpm: Sweep::single(5000),
            ..reference_engine()
        };
        let table = compute_horsepower_sweep(&engine).unwrap();
        let target = table.get(0, 0).unwrap();

        let point = rpm_for_power(&engine, psi(75.0), target, GivenPowerConfig::default()).unwrap();

        assert_relative_eq!(point.rpm.rpm(), 5000.0, max_relative = 1e-12);
        assert_relative_eq!(
            point.horsepower.get::<horsepower>(),
            5.0 * 1.838_148_271_067,
            epsilon = 1e-9
        );
    }

    #[test]
    fn rejects_non_positive_mep() {
        for (mep, expected) in [
            (psi(-75.0), ConstraintError::Negative),
            (psi(0.0), ConstraintError::Zero),
            (psi(f64::NAN), ConstraintError::NotANumber),
        ] {
            let result = rpm_for_power(
                &reference_engine(),
                mep,
                Power::new::<horsepower>(5.0),
                GivenPowerConfig::default(),
            );

            assert!(matches!(
                result,
                Err(GivenPowerError::Engine(EngineError::InvalidDimension {
                    dimension: Dimension::MeanEffectivePressure,
                    source,
                })) if source == expected
            ));
        }
    }

    #[test]
    fn between_sweep_points() {
        let engine = reference_engine();
        let point = rpm_for_power(
            &engine,
            psi(75.0),
            Power::new::<horsepower>(10.0),
            GivenPowerConfig::default(),
        )
        .unwrap();

        // Power is linear in speed: 1.838148 hp per 1000 rpm.
        assert_relative_eq!(point.rpm.rpm(), 10.0 / 1.838_148_271_067 * 1000.0, epsilon = 1e-4);
    }

    #[test]
    fn target_above_sweep() {
        let result = rpm_for_power(
            &reference_engine(),
            psi(75.0),
            Power::new::<horsepower>(50.0),
            GivenPowerConfig::default(),
        );

        match result {
            Err(GivenPowerError::OutOfRange { min, max, .. }) => {
                assert_relative_eq!(
                    max.get::<horsepower>(),
                    10.0 * min.get::<horsepower>(),
                    max_relative = 1e-12
                );
            }
            other => panic!("expected OutOfRange, got {other:?}"),
        }
    }

    #[test]
    fn invalid_engine() {
        let mut engine = reference_engine();
        engine.dimensions.compression_ratio = 0.9;

        let result = rpm_for_power(
            &engine,
            psi(75.0),
            Power::new::<horsepower>(5.0),
            GivenPowerConfig::default(),
        );

        assert!(matches!(
            result,
            Err(GivenPowerError::Engine(EngineError::InvalidDimension {
                dimension: Dimension::CompressionRatio,
                source: ConstraintError::BelowMinimum,
            }))
        ));
    }
}
