use uom::si::{f64::Length, length::centimeter};

/// Inches per centimeter, rounded to six places as in shop practice.
pub const INCHES_PER_CENTIMETER: f64 = 0.393_701;

/// Extension trait for reading a length in rounded "shop" inches.
///
/// [`uom`] converts with the exact factor (`1 in = 2.54 cm`). The difference
/// is below one part per million, but it is visible at the third decimal of a
/// horsepower table, so power calculations use this factor instead.
pub trait ShopInches {
    /// Returns the length in inches using [`INCHES_PER_CENTIMETER`].
    fn shop_inches(self) -> f64;
}

impl ShopInches for Length {
    fn shop_inches(self) -> f64 {
        self.get::<centimeter>() * INCHES_PER_CENTIMETER
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::length::{inch, millimeter};

    #[test]
    fn one_centimeter() {
        let length = Length::new::<centimeter>(1.0);
        assert_relative_eq!(length.shop_inches(), 0.393_701);
    }

    #[test]
    fn close_to_exact_conversion() {
        let bore = Length::new::<millimeter>(30.0);
        assert_relative_eq!(bore.shop_inches(), bore.get::<inch>(), max_relative = 1e-6);
        assert!(bore.shop_inches() != bore.get::<inch>());
    }
}
