use crate::error::Result;
use crate::math::{Point2, TOLERANCE};

use super::require_segments;

/// Discrete curvature at one interior vertex of a sampled curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurvatureSample {
    /// Polyline length from the first point to this vertex.
    pub arc_length: f64,
    /// Signed curvature; positive for counter-clockwise turning.
    pub curvature: f64,
}

/// Estimates curvature along a sampled curve.
///
/// At each interior vertex the turning angle between the adjacent segments is
/// divided by their mean length. Repeated points are merged first.
pub struct CurvatureProfile<'a> {
    points: &'a [Point2],
}

impl<'a> CurvatureProfile<'a> {
    /// Creates a new `CurvatureProfile` query.
    #[must_use]
    pub fn new(points: &'a [Point2]) -> Self {
        Self { points }
    }

    /// Executes the query, returning one sample per interior vertex.
    ///
    /// # Errors
    ///
    /// Returns an error if fewer than two points are given.
    pub fn execute(&self) -> Result<Vec<CurvatureSample>> {
        require_segments(self.points)?;

        let mut distinct: Vec<Point2> = Vec::with_capacity(self.points.len());
        for p in self.points {
            match distinct.last() {
                Some(q) if (p - q).norm() < TOLERANCE => {}
                _ => distinct.push(*p),
            }
        }

        let mut samples = Vec::with_capacity(distinct.len().saturating_sub(2));
        let mut arc_length = 0.0;
        for w in distinct.windows(3) {
            let a = w[1] - w[0];
            let b = w[2] - w[1];
            arc_length += a.norm();
            let turn = a.perp(&b).atan2(a.dot(&b));
            let mean = 0.5 * (a.norm() + b.norm());
            samples.push(CurvatureSample {
                arc_length,
                curvature: turn / mean,
            });
        }
        Ok(samples)
    }

    /// Returns the smallest sampled radius of curvature, or `None` for a
    /// straight or collapsed curve.
    ///
    /// # Errors
    ///
    /// Returns an error if fewer than two points are given.
    pub fn tightest_radius(&self) -> Result<Option<f64>> {
        let peak = self
            .execute()?
            .iter()
            .map(|s| s.curvature.abs())
            .fold(0.0_f64, f64::max);
        Ok((peak > TOLERANCE).then(|| 1.0 / peak))
    }
}
