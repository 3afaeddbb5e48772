//! Cylinder and combustion chamber geometry.

use std::{f64::consts::FRAC_PI_4, fmt};

use uom::si::f64::{Area, Length, Ratio, Volume};

use super::{Dimensions, EngineError, validated::ValidDimensions};

/// Bore-to-stroke classification.
///
/// An engine is undersquare when its stroke is longer than its bore.
/// A square engine (stroke equal to bore) is classified as oversquare.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigurationClass {
    Undersquare,
    Oversquare,
}

impl ConfigurationClass {
    fn classify(bore: Length, stroke: Length) -> Self {
        if stroke > bore {
            Self::Undersquare
        } else {
            Self::Oversquare
        }
    }
}

impl fmt::Display for ConfigurationClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Undersquare => f.write_str("undersquare"),
            Self::Oversquare => f.write_str("oversquare"),
        }
    }
}

/// Per-cylinder geometry derived from bore, stroke, and compression ratio.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geometry {
    /// Piston crown surface area.
    pub piston_area: Area,

    /// Swept volume per stroke.
    pub displacement: Volume,

    /// Volume above the piston at top dead center.
    pub clearance_volume: Volume,

    /// Displacement plus clearance volume.
    pub cylinder_volume: Volume,

    /// Height of the clearance volume over the piston crown.
    pub clearance_height: Length,

    /// Bore divided by stroke.
    pub bore_stroke_ratio: Ratio,

    /// Undersquare when the stroke exceeds the bore.
    pub configuration: ConfigurationClass,
}

impl Geometry {
    pub(super) fn from_valid(dimensions: &ValidDimensions) -> Self {
        let bore = dimensions.bore();
        let stroke = dimensions.stroke();

        let piston_area: Area = bore * bore * FRAC_PI_4;
        let displacement: Volume = piston_area * stroke;
        let clearance_volume = displacement / (dimensions.compression_ratio() - 1.0);
        let cylinder_volume = displacement + clearance_volume;
        let clearance_height: Length = clearance_volume / piston_area;

        Self {
            piston_area,
            displacement,
            clearance_volume,
            cylinder_volume,
            clearance_height,
            bore_stroke_ratio: bore / stroke,
            configuration: ConfigurationClass::classify(bore, stroke),
        }
    }
}

/// Computes cylinder geometry from raw dimensions.
///
/// # Errors
///
/// Returns [`EngineError::InvalidDimension`] if the bore or stroke is not
/// strictly positive, or if the compression ratio is not above one (a ratio
/// of exactly one leaves no clearance volume to divide by).
pub fn compute_geometry(dimensions: &Dimensions) -> Result<Geometry, EngineError> {
    let dimensions = ValidDimensions::new(dimensions)?;
    Ok(Geometry::from_valid(&dimensions))
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        area::square_centimeter, length::millimeter, ratio::ratio, volume::cubic_centimeter,
    };

    use crate::models::engine::core::Dimension;

    fn reference() -> Geometry {
        compute_geometry(&Dimensions::from_millimeters(30.0, 37.5, 8.75)).unwrap()
    }

    #[test]
    fn reference_engine() {
        let geometry = reference();

        assert_relative_eq!(
            geometry.piston_area.get::<square_centimeter>(),
            7.068_583_470_577,
            max_relative = 1e-9
        );
        assert_relative_eq!(
            geometry.displacement.get::<cubic_centimeter>(),
            26.507_188_014_664,
            max_relative = 1e-9
        );
        assert_relative_eq!(
            geometry.clearance_volume.get::<cubic_centimeter>(),
            3.420_282_324_473,
            max_relative = 1e-9
        );
        assert_relative_eq!(
            geometry.cylinder_volume.get::<cubic_centimeter>(),
            29.927_470_339_137,
            max_relative = 1e-9
        );
        assert_relative_eq!(
            geometry.clearance_height.get::<millimeter>(),
            4.838_709_677_419,
            max_relative = 1e-9
        );
        assert_relative_eq!(geometry.bore_stroke_ratio.get::<ratio>(), 0.8, max_relative = 1e-12);
        assert_eq!(geometry.configuration, ConfigurationClass::Undersquare);
    }

    #[test]
    fn clearance_volume_is_positive_above_unity() {
        for cr in [1.01, 2.0, 8.75, 14.0, 22.0] {
            let geometry = compute_geometry(&Dimensions::from_millimeters(30.0, 37.5, cr)).unwrap();
            assert!(geometry.clearance_volume.get::<cubic_centimeter>() > 0.0);
            assert!(geometry.cylinder_volume > geometry.displacement);
        }
    }

    #[test]
    fn compression_ratio_matches_volumes() {
        let geometry = reference();
        let cr: Ratio = geometry.cylinder_volume / geometry.clearance_volume;
        assert_relative_eq!(cr.get::<ratio>(), 8.75, max_relative = 1e-12);
    }

    #[test]
    fn square_engine_is_oversquare() {
        let square = compute_geometry(&Dimensions::from_millimeters(50.0, 50.0, 10.0)).unwrap();
        assert_eq!(square.configuration, ConfigurationClass::Oversquare);

        let over = compute_geometry(&Dimensions::from_millimeters(86.0, 70.0, 10.0)).unwrap();
        assert_eq!(over.configuration, ConfigurationClass::Oversquare);
        assert_eq!(over.configuration.to_string(), "oversquare");
    }

    #[test]
    fn recomputation_is_bit_identical() {
        assert_eq!(reference(), reference());
    }

    #[test]
    fn degenerate_compression_ratio() {
        let err = compute_geometry(&Dimensions::from_millimeters(30.0, 37.5, 1.0)).unwrap_err();
        assert!(matches!(
            err,
            EngineError::InvalidDimension {
                dimension: Dimension::CompressionRatio,
                ..
            }
        ));
    }
}
