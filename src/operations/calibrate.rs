use std::f64::consts::PI;

use tracing::{debug, warn};

use crate::error::{GeometryError, Result};
use crate::math::{deg_to_rad, TOLERANCE};

use super::ComposeBend;

/// Distance from a half turn below which the resolved radius is reported as sensitive.
const U_TURN_MARGIN_DEGREES: f64 = 5.0;

/// Parameters controlling endpoint calibration.
#[derive(Debug, Clone, Copy)]
pub struct CalibrationParams {
    /// Sample count of the unit bend probed for its end point.
    ///
    /// The end point does not depend on the sample count, so the smallest
    /// valid count suffices.
    pub probe_samples: usize,
}

impl Default for CalibrationParams {
    fn default() -> Self {
        Self { probe_samples: 4 }
    }
}

/// Radius and angle resolved from a target end point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Calibration {
    /// Minimum radius of curvature.
    pub min_radius: f64,
    /// Total turning angle in radians.
    pub end_angle: f64,
}

/// Derives the turning angle of a bend ending at `(dx, dy)`.
///
/// The chord of a symmetric Euler bend points along half the turning angle,
/// so the turning angle is `2 * atan2(dy, dx)`.
pub struct CalibrateAngle {
    dx: f64,
    dy: f64,
}

impl CalibrateAngle {
    /// Creates a new `CalibrateAngle` operation.
    #[must_use]
    pub fn new(dx: f64, dy: f64) -> Self {
        Self { dx, dy }
    }

    /// Executes the calibration, returning the end angle in radians.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::NotFinite`] for non-finite input and
    /// [`GeometryError::ZeroDisplacement`] when the end point is the origin.
    pub fn execute(&self) -> Result<f64> {
        if !self.dx.is_finite() || !self.dy.is_finite() {
            return Err(GeometryError::NotFinite {
                dx: self.dx,
                dy: self.dy,
            }
            .into());
        }
        if self.dx.hypot(self.dy) < TOLERANCE {
            return Err(GeometryError::ZeroDisplacement.into());
        }
        Ok(2.0 * self.dy.atan2(self.dx))
    }
}

/// Resolves the minimum radius and turning angle of a bend ending at `(dx, dy)`.
///
/// The bend scales linearly with its radius for a fixed angle, so the radius
/// is `dx / x_unit` where `x_unit` is the end abscissa of the unit-radius
/// bend with the same angle. Close to a half turn `x_unit` approaches zero and
/// the radius becomes very sensitive to `dx`.
pub struct CalibrateFromEndpoint {
    dx: f64,
    dy: f64,
    params: CalibrationParams,
}

impl CalibrateFromEndpoint {
    /// Creates a new `CalibrateFromEndpoint` operation with default parameters.
    #[must_use]
    pub fn new(dx: f64, dy: f64) -> Self {
        Self {
            dx,
            dy,
            params: CalibrationParams::default(),
        }
    }

    /// Replaces the calibration parameters.
    #[must_use]
    pub fn with_params(mut self, params: CalibrationParams) -> Self {
        self.params = params;
        self
    }

    /// Executes the calibration.
    ///
    /// # Errors
    ///
    /// Returns a geometry error when the end point is the origin or not finite,
    /// when the unit bend ends on the y-axis (straight-ahead or half-turn
    /// targets), or when the resolved radius is not a positive finite number.
    /// Returns a parameter error if `probe_samples` is not a valid sample count.
    pub fn execute(&self) -> Result<Calibration> {
        let end_angle = CalibrateAngle::new(self.dx, self.dy).execute()?;

        if (end_angle.abs() - PI).abs() < deg_to_rad(U_TURN_MARGIN_DEGREES) {
            warn!(
                end_angle,
                dx = self.dx,
                dy = self.dy,
                "end point is close to a half turn; resolved radius is ill-conditioned"
            );
        }

        let unit = ComposeBend::new(1.0, end_angle, self.params.probe_samples).execute()?;
        let x_unit = unit.end().x;
        if x_unit.abs() < TOLERANCE {
            return Err(GeometryError::IllConditioned { end_angle, x_unit }.into());
        }

        let min_radius = self.dx / x_unit;
        if !min_radius.is_finite() || min_radius <= 0.0 {
            return Err(GeometryError::UnresolvedRadius(min_radius).into());
        }

        debug!(
            dx = self.dx,
            dy = self.dy,
            min_radius,
            end_angle,
            "calibrated bend from end point"
        );
        Ok(Calibration {
            min_radius,
            end_angle,
        })
    }
}
