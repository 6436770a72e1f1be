use crate::error::Result;
use crate::math::Point2;

use super::require_segments;

/// An axis-aligned bounding box in the bend's local frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb2 {
    /// Minimum corner of the bounding box.
    pub min: Point2,
    /// Maximum corner of the bounding box.
    pub max: Point2,
}

impl Aabb2 {
    /// Width along x.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    /// Height along y.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }
}

/// Computes the axis-aligned bounding box of a sampled curve.
pub struct BoundingBox<'a> {
    points: &'a [Point2],
}

impl<'a> BoundingBox<'a> {
    /// Creates a new `BoundingBox` query.
    #[must_use]
    pub fn new(points: &'a [Point2]) -> Self {
        Self { points }
    }

    /// Executes the query, returning the AABB.
    ///
    /// # Errors
    ///
    /// Returns an error if fewer than two points are given.
    pub fn execute(&self) -> Result<Aabb2> {
        require_segments(self.points)?;
        let init = Aabb2 {
            min: Point2::new(f64::INFINITY, f64::INFINITY),
            max: Point2::new(f64::NEG_INFINITY, f64::NEG_INFINITY),
        };
        Ok(self.points.iter().fold(init, |acc, p| Aabb2 {
            min: Point2::new(acc.min.x.min(p.x), acc.min.y.min(p.y)),
            max: Point2::new(acc.max.x.max(p.x), acc.max.y.max(p.y)),
        }))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::f64::consts::FRAC_PI_2;

    use super::*;
    use crate::operations::ComposeBend;

    #[test]
    fn box_of_three_points() {
        let pts = [
            Point2::new(0.0, 0.0),
            Point2::new(2.0, -1.0),
            Point2::new(1.0, 3.0),
        ];
        let bb = BoundingBox::new(&pts).execute().unwrap();
        assert!((bb.width() - 2.0).abs() < 1e-12);
        assert!((bb.height() - 4.0).abs() < 1e-12);
    }

    #[test]
    fn quarter_bend_box_is_square() {
        let curve = ComposeBend::new(10.0, FRAC_PI_2, 400).execute().unwrap();
        let bb = BoundingBox::new(curve.points()).execute().unwrap();
        assert!(bb.min.x.abs() < 1e-12 && bb.min.y.abs() < 1e-12);
        assert!((bb.width() - bb.height()).abs() < 1e-9);
        assert!((bb.max.x - curve.end().x).abs() < 1e-9);
    }
}
