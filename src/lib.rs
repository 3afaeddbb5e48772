//! # Engine Models
//!
//! Piston engine geometry and performance models for
//! [Twine](https://github.com/isentropic-dev/twine).
//!
//! Given a bore, stroke, compression ratio, and cylinder count, the
//! [`EngineCalculator`](models::engine::EngineCalculator) model derives the
//! combustion chamber geometry, the ideal Otto-cycle thermal efficiency,
//! horsepower across an MEP × RPM sweep, mean piston speed, and torque.
//!
//! ## Crate layout
//!
//! - [`models`]: Domain-specific [`twine_core::Model`] implementations.
//! - [`support`]: Supporting utilities used by models.
//!
//! ## Utility code lifecycle
//!
//! Modules in [`support`] are part of the public API because they're useful,
//! but their APIs are not stable. Breaking changes may occur as needed.
//!
//! Utility code starts in a model's internal `core` module and moves to
//! [`support`] once it is useful across models.
//!
//! ## Binary
//!
//! With the default `cli` feature, the `engine-report` binary prints the
//! results for an engine described on the command line.

pub mod models;
pub mod support;
