use uom::si::{angular_velocity::revolution_per_minute, f64::AngularVelocity};

/// Extension trait for working with crankshaft speed in rev/min.
pub trait EngineSpeed {
    /// Creates a speed from whole revolutions per minute.
    fn from_rpm(rpm: u32) -> Self;

    /// Returns the speed in revolutions per minute.
    fn rpm(&self) -> f64;
}

impl EngineSpeed for AngularVelocity {
    fn from_rpm(rpm: u32) -> Self {
        AngularVelocity::new::<revolution_per_minute>(f64::from(rpm))
    }

    fn rpm(&self) -> f64 {
        self.get::<revolution_per_minute>()
    }
}
