//! Euler bend generation.
//!
//! An Euler bend joins two directions with a curve whose curvature varies
//! linearly with arc length, rising from zero to `1 / min_radius` at the
//! midpoint and falling back to zero. The crate produces the sampled
//! centerline and can calibrate radius and angle from a target end point.
pub mod bend;
pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;

pub use bend::{compute_euler_bend_curve, compute_euler_bend_curve_to_endpoint};
pub use error::{BendError, Result};
pub use geometry::{BendCurve, BendSpec, BendSpecBuilder};
