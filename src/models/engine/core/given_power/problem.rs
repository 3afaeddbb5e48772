//! Problem formulation for target power matching.

use std::convert::Infallible;

use twine_core::{EquationProblem, Model};
use uom::si::{
    angular_velocity::revolution_per_minute,
    f64::{AngularVelocity, Power, Pressure},
    power::horsepower,
};

use crate::models::engine::core::power::IndicatedPower;

use super::PowerPoint;

/// Model adapter exposing engine speed as the sole input at a fixed MEP.
pub(super) struct GivenPowerModel {
    power: IndicatedPower,
    mep: Pressure,
}

impl GivenPowerModel {
    pub(super) fn new(power: IndicatedPower, mep: Pressure) -> Self {
        Self { power, mep }
    }
}

impl Model for GivenPowerModel {
    type Input = AngularVelocity;
    type Output = PowerPoint;
    type Error = Infallible;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        Ok(PowerPoint {
            mep: self.mep,
            rpm: *input,
            horsepower: self.power.at(self.mep, *input),
        })
    }
}

/// Computes the residual as `achieved - target` in horsepower.
pub(super) struct GivenPowerProblem {
    target: Power,
}

impl GivenPowerProblem {
    pub(super) fn new(target: Power) -> Self {
        Self { target }
    }
}

impl EquationProblem<1> for GivenPowerProblem {
    type Input = AngularVelocity;
    type Output = PowerPoint;
    type Error = Infallible;

    fn input(&self, x: &[f64; 1]) -> Result<Self::Input, Self::Error> {
        Ok(AngularVelocity::new::<revolution_per_minute>(x[0]))
    }

    fn residuals(
        &self,
        _input: &Self::Input,
        output: &Self::Output,
    ) -> Result<[f64; 1], Self::Error> {
        let achieved = output.horsepower.get::<horsepower>();
        let target = self.target.get::<horsepower>();
        Ok([achieved - target])
    }
}
