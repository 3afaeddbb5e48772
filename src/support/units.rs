//! Extensions to [`uom`].
//!
//! This crate uses [`uom`] for all physical units (e.g., length, pressure, power).
//! This module provides extensions that are useful for engine worksheets but
//! aren't included in [`uom`].
//!
//! ## Shop inches
//!
//! Engine power figures in US-customary units are traditionally worked with
//! the rounded conversion `1 cm = 0.393701 in`. The [`ShopInches`] trait reads
//! a [`Length`](uom::si::f64::Length) in inches using that factor so results
//! agree with hand-computed worksheets:
//!
//! ```
//! use uom::si::{f64::Length, length::millimeter};
//! use engine_models::support::units::ShopInches;
//!
//! let stroke = Length::new::<millimeter>(37.5);
//! assert!((stroke.shop_inches() - 1.476_378_75).abs() < 1e-12);
//! ```
//!
//! ## Engine speed
//!
//! [`EngineSpeed`] converts between integer rev/min sweep values and
//! [`AngularVelocity`](uom::si::f64::AngularVelocity).

mod engine_speed;
mod shop_inches;

pub use engine_speed::EngineSpeed;
pub use shop_inches::{INCHES_PER_CENTIMETER, ShopInches};
