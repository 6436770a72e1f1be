pub mod fresnel;
pub mod transform_2d;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// 2D rotation type.
pub type Rotation2 = nalgebra::Rotation2<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Added to the spiral scale factor before it is used as a divisor.
pub const SCALE_EPSILON: f64 = 1e-18;

/// Converts an angle in degrees to radians.
#[must_use]
pub fn deg_to_rad(degrees: f64) -> f64 {
    degrees.to_radians()
}

/// Converts an angle in radians to degrees.
#[must_use]
pub fn rad_to_deg(radians: f64) -> f64 {
    radians.to_degrees()
}

#[cfg(test)]
mod tests {
    use std::f64::consts::{FRAC_PI_2, PI};

    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn right_angle_converts_both_ways() {
        assert_relative_eq!(deg_to_rad(90.0), FRAC_PI_2, max_relative = 1e-15);
        assert_relative_eq!(rad_to_deg(PI), 180.0, max_relative = 1e-15);
    }

    #[test]
    fn conversion_roundtrip_is_stable() {
        for deg in [-270.0, -45.0, 0.0, 12.5, 179.999] {
            assert_relative_eq!(rad_to_deg(deg_to_rad(deg)), deg, epsilon = 1e-12);
        }
    }
}
