use twine_solvers::equation::bisection;
use uom::si::{
    angular_velocity::revolution_per_minute,
    f64::{AngularVelocity, Power},
    power::horsepower,
};

/// Solver configuration for finding the speed that reaches a target power.
#[derive(Debug, Clone, Copy)]
pub struct GivenPowerConfig {
    /// Maximum iteration count for the bisection solve.
    pub max_iters: usize,

    /// Absolute tolerance on engine speed.
    pub rpm_tol: AngularVelocity,

    /// Absolute tolerance on the power residual (achieved - target).
    pub power_tol: Power,
}

impl Default for GivenPowerConfig {
    fn default() -> Self {
        Self {
            max_iters: 100,
            rpm_tol: AngularVelocity::new::<revolution_per_minute>(1e-9),
            power_tol: Power::new::<horsepower>(1e-9),
        }
    }
}

impl GivenPowerConfig {
    pub(super) fn bisection(&self) -> bisection::Config {
        bisection::Config {
            max_iters: self.max_iters,
            x_abs_tol: self.rpm_tol.get::<revolution_per_minute>(),
            x_rel_tol: 0.0,
            residual_tol: self.power_tol.get::<horsepower>(),
        }
    }
}
