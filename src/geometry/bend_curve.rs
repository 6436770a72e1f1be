use crate::math::{rad_to_deg, transform_2d, Point2, Vector2};

/// An Euler bend centerline sampled as an ordered point sequence.
///
/// The curve starts at the origin with its tangent along the +x axis and
/// ends with its tangent at `end_angle`. The first half runs from zero
/// curvature to `1 / min_radius`; the second half is the mirrored branch.
/// Both halves contain the splice point, so the samples at
/// `splice_index() - 1` and `splice_index()` coincide.
#[derive(Debug, Clone, PartialEq)]
pub struct BendCurve {
    points: Vec<Point2>,
    min_radius: f64,
    end_angle: f64,
}

impl BendCurve {
    /// Wraps a composed point sequence. `points` must not be empty.
    pub(crate) fn new(points: Vec<Point2>, min_radius: f64, end_angle: f64) -> Self {
        debug_assert!(!points.is_empty(), "a bend curve needs at least one point");
        Self {
            points,
            min_radius,
            end_angle,
        }
    }

    /// Returns the ordered samples.
    #[must_use]
    pub fn points(&self) -> &[Point2] {
        &self.points
    }

    /// Consumes the curve, returning its samples.
    #[must_use]
    pub fn into_points(self) -> Vec<Point2> {
        self.points
    }

    /// Returns the samples as `(x, y)` pairs.
    #[must_use]
    pub fn to_xy(&self) -> Vec<(f64, f64)> {
        self.points.iter().map(|p| (p.x, p.y)).collect()
    }

    /// Returns the number of samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns whether the curve holds no samples.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Minimum radius of curvature, attained at the splice point.
    ///
    /// This is the bend radius handed to the waveguide that extrudes the curve.
    #[must_use]
    pub fn min_radius(&self) -> f64 {
        self.min_radius
    }

    /// Total turning angle in radians.
    #[must_use]
    pub fn end_angle(&self) -> f64 {
        self.end_angle
    }

    /// Total turning angle in degrees.
    #[must_use]
    pub fn end_angle_degrees(&self) -> f64 {
        rad_to_deg(self.end_angle)
    }

    /// First sample (the origin for composed curves).
    #[must_use]
    pub fn start(&self) -> Point2 {
        self.points.first().copied().unwrap_or_else(Point2::origin)
    }

    /// Last sample.
    #[must_use]
    pub fn end(&self) -> Point2 {
        self.points.last().copied().unwrap_or_else(Point2::origin)
    }

    /// Unit tangent at the last sample, derived from `end_angle`.
    #[must_use]
    pub fn end_tangent(&self) -> Vector2 {
        Vector2::new(self.end_angle.cos(), self.end_angle.sin())
    }

    /// Offset from the first to the last sample.
    #[must_use]
    pub fn chord(&self) -> Vector2 {
        self.end() - self.start()
    }

    /// Straight-line distance between the first and last sample.
    #[must_use]
    pub fn chord_length(&self) -> f64 {
        self.chord().norm()
    }

    /// Polar angle of the chord. For a symmetric bend this is half the turning angle.
    #[must_use]
    pub fn chord_angle(&self) -> f64 {
        let chord = self.chord();
        chord.y.atan2(chord.x)
    }

    /// Index of the first sample of the second half.
    #[must_use]
    pub fn splice_index(&self) -> usize {
        self.points.len() / 2
    }

    /// Samples of the curvature-increasing half.
    #[must_use]
    pub fn first_half(&self) -> &[Point2] {
        &self.points[..self.splice_index()]
    }

    /// Samples of the curvature-decreasing half.
    #[must_use]
    pub fn second_half(&self) -> &[Point2] {
        &self.points[self.splice_index()..]
    }

    /// Returns this curve scaled about the origin by `factor`.
    ///
    /// For a positive factor this equals the bend composed with
    /// `factor * min_radius` and the same angle and sample count.
    #[must_use]
    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            points: transform_2d::scale(&self.points, factor),
            min_radius: self.min_radius * factor,
            end_angle: self.end_angle,
        }
    }
}
