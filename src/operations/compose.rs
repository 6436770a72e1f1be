use tracing::debug;

use crate::error::{ParameterError, Result};
use crate::geometry::{BendCurve, BendSpec};
use crate::math::{transform_2d, Point2};

use super::HalfSpiral;

/// Smallest sample count that leaves each half with two samples.
pub const MIN_NUM_POINTS: usize = 4;

/// Assembles a full Euler bend from two mirrored half spirals.
///
/// The first half runs from zero curvature up to `1 / min_radius` while the
/// tangent turns by half the end angle. The second half is the first half
/// rotated clockwise by the full end angle, reflected across the y-axis,
/// reversed, and translated onto the splice point. Negative end angles are
/// composed for `|end_angle|` and reflected across the x-axis.
pub struct ComposeBend {
    min_radius: f64,
    end_angle: f64,
    num_points: usize,
}

impl ComposeBend {
    /// Creates a new `ComposeBend` operation.
    ///
    /// * `min_radius` - Minimum radius of curvature, reached at the splice point.
    /// * `end_angle` - Total turning angle in radians.
    /// * `num_points` - Total number of samples, split evenly between the halves.
    #[must_use]
    pub fn new(min_radius: f64, end_angle: f64, num_points: usize) -> Self {
        Self {
            min_radius,
            end_angle,
            num_points,
        }
    }

    /// Creates the operation from a resolved spec.
    #[must_use]
    pub fn from_spec(spec: &BendSpec) -> Self {
        Self::new(spec.min_radius(), spec.end_angle(), spec.num_points())
    }

    /// Executes the composition.
    ///
    /// # Errors
    ///
    /// Returns a parameter error if the radius is not positive, a value is not
    /// finite, or `num_points` is odd or below [`MIN_NUM_POINTS`].
    pub fn execute(&self) -> Result<BendCurve> {
        validate_bend_parameters(self.min_radius, self.end_angle, self.num_points)?;

        let turn = self.end_angle.abs();
        let half_length = self.min_radius * turn;

        let first = HalfSpiral::for_bend(self.min_radius, half_length, self.num_points / 2)
            .execute()?;
        let second = mirrored_half(&first, turn);

        let mut points = first;
        points.extend(second);
        if self.end_angle < 0.0 {
            points = transform_2d::reflect_across_x_axis(&points);
        }

        debug!(
            min_radius = self.min_radius,
            end_angle = self.end_angle,
            num_points = points.len(),
            "composed euler bend"
        );
        Ok(BendCurve::new(points, self.min_radius, self.end_angle))
    }
}

/// Builds the curvature-decreasing half from the curvature-increasing one.
///
/// The result starts on the last point of `first` with the same tangent
/// (`turn / 2`) and ends with tangent `turn`.
fn mirrored_half(first: &[Point2], turn: f64) -> Vec<Point2> {
    let Some(splice) = first.last() else {
        return Vec::new();
    };
    let rotated = transform_2d::rotate(first, -turn);
    let reflected = transform_2d::reflect_across_y_axis(&transform_2d::reversed(&rotated));
    transform_2d::translate_start_to(&reflected, splice)
}

/// Checks the inputs of a bend before any point is computed.
///
/// # Errors
///
/// Returns a [`ParameterError`] describing the first invalid input.
pub fn validate_bend_parameters(min_radius: f64, end_angle: f64, num_points: usize) -> Result<()> {
    if !min_radius.is_finite() {
        return Err(ParameterError::NotFinite {
            parameter: "min_radius",
            value: min_radius,
        }
        .into());
    }
    if min_radius <= 0.0 {
        return Err(ParameterError::OutOfRange {
            parameter: "min_radius",
            value: min_radius,
            min: f64::MIN_POSITIVE,
            max: f64::INFINITY,
        }
        .into());
    }
    if !end_angle.is_finite() {
        return Err(ParameterError::NotFinite {
            parameter: "end_angle",
            value: end_angle,
        }
        .into());
    }
    validate_sample_count(num_points)
}

/// Checks that `num_points` splits into two equal halves of at least two samples.
///
/// # Errors
///
/// Returns a [`ParameterError`] for odd counts and counts below [`MIN_NUM_POINTS`].
#[allow(clippy::cast_precision_loss)]
pub fn validate_sample_count(num_points: usize) -> Result<()> {
    if num_points < MIN_NUM_POINTS {
        return Err(ParameterError::OutOfRange {
            parameter: "num_points",
            value: num_points as f64,
            min: MIN_NUM_POINTS as f64,
            max: f64::INFINITY,
        }
        .into());
    }
    if num_points % 2 != 0 {
        return Err(ParameterError::OddSampleCount(num_points).into());
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::f64::consts::{FRAC_PI_2, PI, SQRT_2};

    use approx::{assert_abs_diff_eq, assert_relative_eq};

    use super::*;
    use crate::error::BendError;
    use crate::operations::query::PolylineLength;

    /// Direction angle of the segment `a -> b`.
    fn heading(a: Point2, b: Point2) -> f64 {
        let d = b - a;
        d.y.atan2(d.x)
    }

    #[test]
    fn quarter_bend_scenario() {
        let curve = ComposeBend::new(10.0, FRAC_PI_2, 1000).execute().unwrap();
        assert_eq!(curve.len(), 1000);
        assert_eq!(curve.start(), Point2::origin());

        // Chord points halfway through the turn.
        assert_relative_eq!(curve.chord_angle(), PI / 4.0, max_relative = 1e-12);

        // Shorter than the path, longer than the chord of a circular 90° bend.
        let arc_length = 2.0 * 10.0 * FRAC_PI_2;
        let chord = curve.chord_length();
        assert!(chord < arc_length, "chord {chord} >= arc {arc_length}");
        assert!(chord > 10.0 * SQRT_2, "chord {chord} too short");

        let length = PolylineLength::new(curve.points()).execute().unwrap();
        assert_relative_eq!(length, arc_length, max_relative = 1e-5);
    }

    #[test]
    fn chord_angle_is_half_the_turn() {
        for theta in [-3.0, -2.0, -0.7, -0.01, 0.01, 0.5, 1.0, FRAC_PI_2, 2.5, 3.0] {
            for radius in [0.5, 10.0, 250.0] {
                let curve = ComposeBend::new(radius, theta, 40).execute().unwrap();
                let end = curve.end();
                let recovered = 2.0 * end.y.atan2(end.x);
                assert_abs_diff_eq!(recovered, theta, epsilon = 1e-9);
            }
        }
    }

    #[test]
    fn final_heading_matches_end_angle() {
        for theta in [0.3, FRAC_PI_2, 2.0, -1.0] {
            let curve = ComposeBend::new(5.0, theta, 20_000).execute().unwrap();
            let pts = curve.points();
            let n = pts.len();
            assert_abs_diff_eq!(pts[0].y, 0.0);
            assert_abs_diff_eq!(heading(pts[0], pts[1]), 0.0, epsilon = 1e-6);
            assert_abs_diff_eq!(heading(pts[n - 2], pts[n - 1]), theta, epsilon = 1e-6);
        }
    }

    #[test]
    fn scales_linearly_with_radius() {
        let theta = 1.1;
        let base = ComposeBend::new(3.0, theta, 64).execute().unwrap();
        for k in [0.25, 2.0, 17.0] {
            let scaled = ComposeBend::new(3.0 * k, theta, 64).execute().unwrap();
            for (a, b) in scaled.points().iter().zip(base.points()) {
                assert_relative_eq!(a.x, k * b.x, epsilon = 1e-12, max_relative = 1e-10);
                assert_relative_eq!(a.y, k * b.y, epsilon = 1e-12, max_relative = 1e-10);
            }
            assert_relative_eq!(scaled.min_radius(), base.scaled(k).min_radius());
        }
    }

    #[test]
    fn splice_is_continuous_in_position_and_tangent() {
        for theta in [0.2, 1.0, FRAC_PI_2, 3.0, PI - 1e-3] {
            let n = 200;
            let curve = ComposeBend::new(7.0, theta, n).execute().unwrap();
            let pts = curve.points();
            let splice = n / 2;

            let gap = (pts[splice] - pts[splice - 1]).norm();
            assert!(gap < 1e-12, "splice gap {gap} at theta {theta}");

            // Neighbouring headings are symmetric about theta / 2.
            let before = heading(pts[splice - 2], pts[splice - 1]);
            let after = heading(pts[splice], pts[splice + 1]);
            assert_abs_diff_eq!(0.5 * (before + after), 0.5 * theta, epsilon = 1e-9);
            assert!(before < 0.5 * theta && after > 0.5 * theta);
        }
    }

    #[test]
    fn negative_angle_mirrors_positive() {
        let up = ComposeBend::new(4.0, 0.8, 32).execute().unwrap();
        let down = ComposeBend::new(4.0, -0.8, 32).execute().unwrap();
        for (a, b) in up.points().iter().zip(down.points()) {
            assert_abs_diff_eq!(a.x, b.x);
            assert_abs_diff_eq!(a.y, -b.y);
        }
    }

    #[test]
    fn zero_angle_collapses_to_start() {
        let curve = ComposeBend::new(10.0, 0.0, 10).execute().unwrap();
        assert_eq!(curve.len(), 10);
        for p in curve.points() {
            assert!(p.x.is_finite() && p.y.is_finite());
            assert_abs_diff_eq!(p.x, 0.0);
            assert_abs_diff_eq!(p.y, 0.0);
        }
    }

    #[test]
    fn vanishing_radius_stays_finite() {
        let curve = ComposeBend::new(1e-300, FRAC_PI_2, 16).execute().unwrap();
        assert!(curve.points().iter().all(|p| p.x.is_finite() && p.y.is_finite()));
    }

    #[test]
    fn negative_radius_is_invalid_parameter() {
        let err = ComposeBend::new(-1.0, FRAC_PI_2, 10).execute().unwrap_err();
        assert!(matches!(
            err,
            BendError::Parameter(ParameterError::OutOfRange { parameter: "min_radius", .. })
        ));
    }

    #[test]
    fn bad_sample_counts_are_invalid_parameters() {
        for n in [0, 1, 2, 3, 11] {
            let err = ComposeBend::new(1.0, 1.0, n).execute().unwrap_err();
            assert!(err.is_invalid_parameter(), "n = {n}");
        }
        let err = ComposeBend::new(1.0, 1.0, 11).execute().unwrap_err();
        assert!(matches!(err, BendError::Parameter(ParameterError::OddSampleCount(11))));
    }

    #[test]
    fn non_finite_inputs_are_invalid_parameters() {
        assert!(ComposeBend::new(f64::NAN, 1.0, 10).execute().unwrap_err().is_invalid_parameter());
        assert!(ComposeBend::new(1.0, f64::INFINITY, 10)
            .execute()
            .unwrap_err()
            .is_invalid_parameter());
    }
}
