use std::f64::consts::PI;

use tracing::trace;

use crate::error::{ParameterError, Result};
use crate::math::fresnel::fresnel;
use crate::math::{Point2, SCALE_EPSILON};

/// Evaluates one branch of the normalized Euler spiral.
///
/// Samples a uniform arc-length grid `s_i = i * L / (n - 1)` and maps each
/// sample through the Fresnel integrals at `u_i = s_i / f`. The branch starts
/// at the origin heading along +x, and its curvature grows linearly with arc
/// length.
pub struct HalfSpiral {
    half_length: f64,
    scale: f64,
    samples: usize,
}

impl HalfSpiral {
    /// Creates a new `HalfSpiral` evaluation.
    ///
    /// * `half_length` - Arc length `L` of the branch.
    /// * `scale` - Scale factor `f`.
    /// * `samples` - Number of samples `n`, endpoints included.
    #[must_use]
    pub fn new(half_length: f64, scale: f64, samples: usize) -> Self {
        Self {
            half_length,
            scale,
            samples,
        }
    }

    /// Creates the first half of a bend with minimum radius `min_radius`.
    ///
    /// The scale factor is `sqrt(π R L)`, which makes the branch's terminal
    /// curvature exactly `1 / R`.
    #[must_use]
    pub fn for_bend(min_radius: f64, half_length: f64, samples: usize) -> Self {
        Self::new(half_length, (PI * min_radius * half_length).sqrt(), samples)
    }

    /// Executes the evaluation, returning `samples` points.
    ///
    /// A zero `half_length` or `scale` is accepted and yields a branch
    /// collapsed onto the origin.
    ///
    /// # Errors
    ///
    /// Returns an error if `samples < 2`, or if `half_length` or `scale` is
    /// negative or not finite.
    #[allow(clippy::cast_precision_loss)]
    pub fn execute(&self) -> Result<Vec<Point2>> {
        if self.samples < 2 {
            return Err(ParameterError::OutOfRange {
                parameter: "samples",
                value: self.samples as f64,
                min: 2.0,
                max: f64::INFINITY,
            }
            .into());
        }
        check_non_negative("half_length", self.half_length)?;
        check_non_negative("scale", self.scale)?;

        let f = self.scale + SCALE_EPSILON;
        let last = self.samples - 1;
        let step = self.half_length / last as f64;

        let points = (0..self.samples)
            .map(|i| {
                let s = if i == last { self.half_length } else { i as f64 * step };
                let (fresnel_s, fresnel_c) = fresnel(s / f);
                Point2::new(f * fresnel_c, f * fresnel_s)
            })
            .collect();

        trace!(
            half_length = self.half_length,
            scale = f,
            samples = self.samples,
            "evaluated half spiral"
        );
        Ok(points)
    }
}

fn check_non_negative(parameter: &'static str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(ParameterError::NotFinite { parameter, value }.into());
    }
    if value < 0.0 {
        return Err(ParameterError::OutOfRange {
            parameter,
            value,
            min: 0.0,
            max: f64::INFINITY,
        }
        .into());
    }
    Ok(())
}
