use thiserror::Error;
use twine_solvers::equation::bisection;
use uom::si::{f64::Power, power::horsepower};

use crate::models::engine::core::EngineError;

/// Errors that can occur while solving for the speed at a target power.
#[derive(Debug, Error)]
pub enum GivenPowerError {
    /// The engine configuration or MEP is invalid.
    #[error("invalid engine input")]
    Engine(#[from] EngineError),

    /// The target is not reachable within the configured rpm sweep.
    #[error(
        "target power {:.6} hp is outside {:.6} to {:.6} hp",
        .target.get::<horsepower>(),
        .min.get::<horsepower>(),
        .max.get::<horsepower>()
    )]
    OutOfRange {
        target: Power,

        /// Power at the lowest swept rpm.
        min: Power,

        /// Power at the highest swept rpm.
        max: Power,
    },

    /// The bisection solver encountered an error.
    #[error("bisection solver error")]
    Bisection(#[from] bisection::Error),

    /// The solver reached the iteration limit without converging.
    #[error(
        "solver hit iteration limit: residual={:.3e} hp",
        .residual.get::<horsepower>()
    )]
    MaxIters {
        /// Best power residual achieved.
        residual: Power,

        /// Iteration count performed by the solver.
        iters: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_range_message_is_in_horsepower() {
        let error = GivenPowerError::OutOfRange {
            target: Power::new::<horsepower>(50.0),
            min: Power::new::<horsepower>(1.838_148_271_067),
            max: Power::new::<horsepower>(18.381_482_710_672),
        };

        assert_eq!(
            error.to_string(),
            "target power 50.000000 hp is outside 1.838148 to 18.381483 hp"
        );
    }

    #[test]
    fn max_iters_message_is_in_horsepower() {
        let error = GivenPowerError::MaxIters {
            residual: Power::new::<horsepower>(0.25),
            iters: 100,
        };

        assert_eq!(
            error.to_string(),
            "solver hit iteration limit: residual=2.500e-1 hp"
        );
    }
}
