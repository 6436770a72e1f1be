use crate::error::Result;
use crate::math::Point2;

use super::require_segments;

/// Computes the length of a sampled curve as the sum of its segment lengths.
pub struct PolylineLength<'a> {
    points: &'a [Point2],
}

impl<'a> PolylineLength<'a> {
    /// Creates a new `PolylineLength` query.
    #[must_use]
    pub fn new(points: &'a [Point2]) -> Self {
        Self { points }
    }

    /// Executes the query, returning the polyline length.
    ///
    /// For a bend sampled with unit-speed arc length this converges to
    /// `2 * min_radius * |end_angle|` as the sample count grows.
    ///
    /// # Errors
    ///
    /// Returns an error if fewer than two points are given.
    pub fn execute(&self) -> Result<f64> {
        require_segments(self.points)?;
        Ok(self.points.windows(2).map(|w| (w[1] - w[0]).norm()).sum())
    }
}
