use crate::error::Result;
use crate::geometry::BendCurve;
use crate::operations::compose::validate_sample_count;
use crate::operations::{CalibrateFromEndpoint, Calibration, ComposeBend};

/// Generates the centerline of an Euler bend.
///
/// * `min_radius` - Minimum radius of curvature, reached at the midpoint.
/// * `end_angle` - Total turning angle in radians; negative turns clockwise.
/// * `num_points` - Total number of samples; must be even and at least 4.
///
/// # Errors
///
/// Returns a parameter error if the radius is not positive, an input is not
/// finite, or the sample count is odd or below 4.
pub fn compute_euler_bend_curve(
    min_radius: f64,
    end_angle: f64,
    num_points: usize,
) -> Result<BendCurve> {
    ComposeBend::new(min_radius, end_angle, num_points).execute()
}

/// Generates the Euler bend that ends at `(dx, dy)`.
///
/// Returns the curve together with the resolved radius and angle.
///
/// # Errors
///
/// Returns a parameter error for an invalid sample count (checked first), and
/// a geometry error when the end point is the origin or cannot be reached by a
/// symmetric Euler bend with a positive radius.
pub fn compute_euler_bend_curve_to_endpoint(
    dx: f64,
    dy: f64,
    num_points: usize,
) -> Result<(BendCurve, Calibration)> {
    validate_sample_count(num_points)?;
    let calibration = CalibrateFromEndpoint::new(dx, dy).execute()?;
    let curve =
        ComposeBend::new(calibration.min_radius, calibration.end_angle, num_points).execute()?;
    Ok((curve, calibration))
}
