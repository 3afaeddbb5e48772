use super::{EngineConfig, Sweep};

/// 30 × 37.5 mm single cylinder at 8.75:1 and 75 psi.
pub(super) fn reference_engine() -> EngineConfig {
    EngineConfig::default()
}

/// The reference engine swept over 50–100 psi in 10 psi steps.
pub(super) fn table_engine() -> EngineConfig {
    EngineConfig {
        mep: Sweep::new(50, 100, 10),
        ..EngineConfig::default()
    }
}
