use std::f64::consts::{PI, TAU};

use crate::error::Result;
use crate::math::{Point2, TOLERANCE};

use super::require_segments;

/// Computes the heading of every non-degenerate segment of a sampled curve.
///
/// Headings are unwrapped, so a bend turning past ±π keeps increasing
/// (or decreasing) instead of jumping by 2π. Segments shorter than
/// [`TOLERANCE`], such as the repeated splice point, are skipped.
pub struct TangentAngles<'a> {
    points: &'a [Point2],
}

impl<'a> TangentAngles<'a> {
    /// Creates a new `TangentAngles` query.
    #[must_use]
    pub fn new(points: &'a [Point2]) -> Self {
        Self { points }
    }

    /// Executes the query, returning headings in radians.
    ///
    /// # Errors
    ///
    /// Returns an error if fewer than two points are given.
    pub fn execute(&self) -> Result<Vec<f64>> {
        require_segments(self.points)?;

        let mut headings: Vec<f64> = Vec::with_capacity(self.points.len() - 1);
        for w in self.points.windows(2) {
            let d = w[1] - w[0];
            if d.norm() < TOLERANCE {
                continue;
            }
            let raw = d.y.atan2(d.x);
            let heading = match headings.last() {
                Some(&prev) => prev + wrap_to_pi(raw - prev),
                None => raw,
            };
            headings.push(heading);
        }
        Ok(headings)
    }
}

/// Wraps an angle difference into `(-π, π]`.
fn wrap_to_pi(angle: f64) -> f64 {
    let wrapped = (angle + PI).rem_euclid(TAU) - PI;
    if wrapped <= -PI {
        wrapped + TAU
    } else {
        wrapped
    }
}
