use std::f64::consts::FRAC_PI_2;

use tracing::debug;

use crate::error::Result;
use crate::geometry::BendCurve;
use crate::math::{deg_to_rad, rad_to_deg, Vector2};
use crate::operations::calibrate::{CalibrateAngle, CalibrateFromEndpoint, CalibrationParams};
use crate::operations::compose::{validate_bend_parameters, validate_sample_count, ComposeBend};

/// Minimum radius used when none is given.
pub const DEFAULT_MIN_RADIUS: f64 = 10.0;

/// Turning angle (radians) used when none is given.
pub const DEFAULT_END_ANGLE: f64 = FRAC_PI_2;

/// Sample count used when none is given.
pub const DEFAULT_NUM_POINTS: usize = 1000;

/// A fully resolved, validated description of an Euler bend.
///
/// When built with an end point, `min_radius` and `end_angle` already hold
/// the calibrated values; the end point is kept only for reference.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BendSpec {
    min_radius: f64,
    end_angle: f64,
    num_points: usize,
    end_point: Option<Vector2>,
}

impl BendSpec {
    /// Creates a spec from a radius, a turning angle in radians and a sample count.
    ///
    /// # Errors
    ///
    /// Returns an error if the radius is not positive, a value is not finite,
    /// or the sample count is odd or below 4.
    pub fn new(min_radius: f64, end_angle: f64, num_points: usize) -> Result<Self> {
        Self::builder()
            .min_radius(min_radius)
            .end_angle(end_angle)
            .num_points(num_points)
            .build()
    }

    /// Creates a spec whose radius and angle are calibrated so the bend ends at `(dx, dy)`.
    ///
    /// # Errors
    ///
    /// Returns an error if the sample count is invalid or the end point cannot
    /// be reached by a symmetric Euler bend.
    pub fn to_end_point(dx: f64, dy: f64, num_points: usize) -> Result<Self> {
        Self::builder().num_points(num_points).end_point(dx, dy).build()
    }

    /// Starts a builder preloaded with the defaults.
    #[must_use]
    pub fn builder() -> BendSpecBuilder {
        BendSpecBuilder::default()
    }

    /// Minimum radius of curvature.
    #[must_use]
    pub fn min_radius(&self) -> f64 {
        self.min_radius
    }

    /// Turning angle in radians.
    #[must_use]
    pub fn end_angle(&self) -> f64 {
        self.end_angle
    }

    /// Turning angle in degrees.
    #[must_use]
    pub fn end_angle_degrees(&self) -> f64 {
        rad_to_deg(self.end_angle)
    }

    /// Number of samples in the generated curve.
    #[must_use]
    pub fn num_points(&self) -> usize {
        self.num_points
    }

    /// The requested end point, if the spec was calibrated from one.
    #[must_use]
    pub fn end_point(&self) -> Option<Vector2> {
        self.end_point
    }

    /// Generates the centerline for this spec.
    ///
    /// # Errors
    ///
    /// Propagates composition errors; a spec produced by the builder is already valid.
    pub fn curve(&self) -> Result<BendCurve> {
        ComposeBend::from_spec(self).execute()
    }
}

impl Default for BendSpec {
    fn default() -> Self {
        Self {
            min_radius: DEFAULT_MIN_RADIUS,
            end_angle: DEFAULT_END_ANGLE,
            num_points: DEFAULT_NUM_POINTS,
            end_point: None,
        }
    }
}

/// How an end point given to the builder is used.
#[derive(Debug, Clone, Copy, PartialEq)]
enum EndPointUse {
    /// Derive both radius and angle.
    RadiusAndAngle,
    /// Keep the given radius, derive only the angle.
    AngleOnly,
}

/// Collects bend inputs and resolves them into a [`BendSpec`] in one step.
#[derive(Debug, Clone, Copy)]
pub struct BendSpecBuilder {
    min_radius: f64,
    end_angle: f64,
    num_points: usize,
    end_point: Option<(Vector2, EndPointUse)>,
    calibration: CalibrationParams,
}

impl Default for BendSpecBuilder {
    fn default() -> Self {
        Self {
            min_radius: DEFAULT_MIN_RADIUS,
            end_angle: DEFAULT_END_ANGLE,
            num_points: DEFAULT_NUM_POINTS,
            end_point: None,
            calibration: CalibrationParams::default(),
        }
    }
}

impl BendSpecBuilder {
    /// Sets the minimum radius.
    #[must_use]
    pub fn min_radius(mut self, min_radius: f64) -> Self {
        self.min_radius = min_radius;
        self
    }

    /// Sets the turning angle in radians.
    #[must_use]
    pub fn end_angle(mut self, end_angle: f64) -> Self {
        self.end_angle = end_angle;
        self
    }

    /// Sets the turning angle in degrees.
    #[must_use]
    pub fn end_angle_degrees(mut self, degrees: f64) -> Self {
        self.end_angle = deg_to_rad(degrees);
        self
    }

    /// Sets the number of samples.
    #[must_use]
    pub fn num_points(mut self, num_points: usize) -> Self {
        self.num_points = num_points;
        self
    }

    /// Requests a bend ending at `(dx, dy)`. Overrides radius and angle.
    #[must_use]
    pub fn end_point(mut self, dx: f64, dy: f64) -> Self {
        self.end_point = Some((Vector2::new(dx, dy), EndPointUse::RadiusAndAngle));
        self
    }

    /// Keeps the given radius and derives only the turning angle from `(dx, dy)`.
    ///
    /// The resulting bend ends on the ray towards `(dx, dy)`, not necessarily at it.
    #[must_use]
    pub fn min_radius_with_end_point_angle(mut self, min_radius: f64, dx: f64, dy: f64) -> Self {
        self.min_radius = min_radius;
        self.end_point = Some((Vector2::new(dx, dy), EndPointUse::AngleOnly));
        self
    }

    /// Overrides the calibration parameters.
    #[must_use]
    pub fn calibration(mut self, calibration: CalibrationParams) -> Self {
        self.calibration = calibration;
        self
    }

    /// Validates the inputs and performs any calibration.
    ///
    /// # Errors
    ///
    /// Returns a parameter error for an invalid radius, angle or sample count,
    /// and a geometry error when an end point cannot be reached.
    pub fn build(self) -> Result<BendSpec> {
        let (min_radius, end_angle, end_point) = match self.end_point {
            None => (self.min_radius, self.end_angle, None),
            Some((target, EndPointUse::RadiusAndAngle)) => {
                validate_sample_count(self.num_points)?;
                let calibration = CalibrateFromEndpoint::new(target.x, target.y)
                    .with_params(self.calibration)
                    .execute()?;
                (calibration.min_radius, calibration.end_angle, Some(target))
            }
            Some((target, EndPointUse::AngleOnly)) => {
                let end_angle = CalibrateAngle::new(target.x, target.y).execute()?;
                (self.min_radius, end_angle, Some(target))
            }
        };

        validate_bend_parameters(min_radius, end_angle, self.num_points)?;
        debug!(min_radius, end_angle, num_points = self.num_points, "resolved bend spec");

        Ok(BendSpec {
            min_radius,
            end_angle,
            num_points: self.num_points,
            end_point,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::f64::consts::PI;

    use approx::{assert_abs_diff_eq, assert_relative_eq};

    use super::*;

    #[test]
    fn default_matches_documented_values() {
        let spec = BendSpec::default();
        assert_abs_diff_eq!(spec.min_radius(), 10.0);
        assert_abs_diff_eq!(spec.end_angle_degrees(), 90.0, epsilon = 1e-12);
        assert_eq!(spec.num_points(), 1000);
        assert!(spec.end_point().is_none());
        assert_eq!(BendSpec::builder().build().unwrap(), spec);
    }

    #[test]
    fn degrees_convert_at_the_boundary() {
        let spec = BendSpec::builder().end_angle_degrees(45.0).build().unwrap();
        assert_relative_eq!(spec.end_angle(), PI / 4.0, max_relative = 1e-15);
    }

    #[test]
    fn invalid_radius_is_rejected() {
        let err = BendSpec::new(0.0, FRAC_PI_2, 100).unwrap_err();
        assert!(err.is_invalid_parameter());
    }

    #[test]
    fn odd_sample_count_is_rejected() {
        let err = BendSpec::new(5.0, FRAC_PI_2, 101).unwrap_err();
        assert!(err.is_invalid_parameter());
    }

    #[test]
    fn end_point_overrides_radius_and_angle() {
        let spec = BendSpec::builder()
            .min_radius(3.0)
            .end_angle(0.1)
            .end_point(20.0, 20.0)
            .build()
            .unwrap();
        assert_relative_eq!(spec.end_angle(), FRAC_PI_2, max_relative = 1e-12);
        assert!((spec.min_radius() - 3.0).abs() > 1.0);

        let end = spec.curve().unwrap().end();
        assert_relative_eq!(end.x, 20.0, max_relative = 1e-9);
        assert_relative_eq!(end.y, 20.0, max_relative = 1e-9);
    }

    #[test]
    fn end_point_with_bad_sample_count_fails_before_calibration() {
        let err = BendSpec::to_end_point(0.0, 0.0, 7).unwrap_err();
        assert!(err.is_invalid_parameter());
    }

    #[test]
    fn origin_end_point_is_invalid_geometry() {
        let err = BendSpec::to_end_point(0.0, 0.0, 100).unwrap_err();
        assert!(err.is_invalid_geometry());
    }

    #[test]
    fn angle_only_keeps_radius() {
        let spec = BendSpec::builder()
            .min_radius_with_end_point_angle(7.5, 1.0, 1.0)
            .build()
            .unwrap();
        assert_abs_diff_eq!(spec.min_radius(), 7.5);
        assert_relative_eq!(spec.end_angle(), FRAC_PI_2, max_relative = 1e-12);

        let curve = spec.curve().unwrap();
        assert_relative_eq!(curve.chord_angle(), PI / 4.0, max_relative = 1e-9);
    }
}
