mod bounding_box;
mod curvature;
mod length;
mod tangent;

pub use bounding_box::{Aabb2, BoundingBox};
pub use curvature::{CurvatureProfile, CurvatureSample};
pub use length::PolylineLength;
pub use tangent::TangentAngles;

use crate::error::{ParameterError, Result};
use crate::math::Point2;

/// Checks that a point sequence has at least one segment.
#[allow(clippy::cast_precision_loss)]
fn require_segments(points: &[Point2]) -> Result<()> {
    if points.len() < 2 {
        return Err(ParameterError::OutOfRange {
            parameter: "points",
            value: points.len() as f64,
            min: 2.0,
            max: f64::INFINITY,
        }
        .into());
    }
    Ok(())
}
