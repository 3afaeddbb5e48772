use clap::{Parser, ValueEnum};

use engine_models::models::engine::{Dimensions, EngineConfig, StrokeCycle, Sweep};

#[derive(Parser, Debug)]
#[command(
    name = "engine-report",
    version,
    about = "Geometry and performance estimates for a piston engine"
)]
pub struct Cli {
    /// Cylinder bore (mm)
    #[arg(long, default_value_t = 30.0)]
    pub bore: f64,

    /// Piston stroke (mm)
    #[arg(long, default_value_t = 37.5)]
    pub stroke: f64,

    #[arg(long, default_value_t = 8.75)]
    pub compression_ratio: f64,

    #[arg(long, default_value_t = 1)]
    pub cylinders: u32,

    #[arg(long, value_enum, default_value_t = Cycle::FourStroke)]
    pub cycle: Cycle,

    #[arg(long, default_value_t = 1000)]
    pub rpm_start: u32,

    #[arg(long, default_value_t = 10_000)]
    pub rpm_end: u32,

    #[arg(long, default_value_t = 1000)]
    pub rpm_step: u32,

    /// Mean effective pressure (psi), or the start of an MEP sweep
    #[arg(long, default_value_t = 75)]
    pub mep: u32,

    /// End of the MEP sweep (psi); omit for a single MEP
    #[arg(long)]
    pub mep_end: Option<u32>,

    #[arg(long, default_value_t = 10)]
    pub mep_step: u32,

    /// summary: labeled values; tables: piston speed, geometry, and horsepower tables
    #[arg(long, value_enum, default_value_t = Format::Summary)]
    pub format: Format,

    /// Also find the rpm at which this horsepower is reached at --mep
    #[arg(long)]
    pub target_hp: Option<f64>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Cycle {
    FourStroke,
    TwoStroke,
}

impl From<Cycle> for StrokeCycle {
    fn from(cycle: Cycle) -> Self {
        match cycle {
            Cycle::FourStroke => StrokeCycle::FourStroke,
            Cycle::TwoStroke => StrokeCycle::TwoStroke,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Summary,
    Tables,
}

impl Cli {
    pub fn engine_config(&self) -> EngineConfig {
        let mep = match self.mep_end {
            Some(end) => Sweep::new(self.mep, end, self.mep_step),
            None => Sweep::single(self.mep),
        };

        EngineConfig {
            dimensions: Dimensions::from_millimeters(self.bore, self.stroke, self.compression_ratio),
            cylinders: self.cylinders,
            cycle: self.cycle.into(),
            rpm: Sweep::new(self.rpm_start, self.rpm_end, self.rpm_step),
            mep,
        }
    }
}
