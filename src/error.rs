use thiserror::Error;

/// Top-level error type for the Euler bend kernel.
#[derive(Debug, Error)]
pub enum BendError {
    #[error(transparent)]
    Parameter(#[from] ParameterError),

    #[error(transparent)]
    Geometry(#[from] GeometryError),
}

impl BendError {
    /// Returns `true` for caller-input validation failures.
    #[must_use]
    pub fn is_invalid_parameter(&self) -> bool {
        matches!(self, Self::Parameter(_))
    }

    /// Returns `true` for endpoint calibration failures.
    #[must_use]
    pub fn is_invalid_geometry(&self) -> bool {
        matches!(self, Self::Geometry(_))
    }
}

/// Invalid bend parameters, detected before any curve point is computed.
#[derive(Debug, Error)]
pub enum ParameterError {
    #[error("parameter {parameter} = {value} is out of range [{min}, {max}]")]
    OutOfRange {
        parameter: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("parameter {parameter} = {value} is not finite")]
    NotFinite { parameter: &'static str, value: f64 },

    #[error("sample count {0} cannot be split into two equal halves")]
    OddSampleCount(usize),
}

/// Target geometry that cannot be reached by a symmetric Euler bend.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("end point coincides with the start point")]
    ZeroDisplacement,

    #[error("end point ({dx}, {dy}) is not finite")]
    NotFinite { dx: f64, dy: f64 },

    #[error("end angle {end_angle} rad is ill-conditioned: unit bend ends at x = {x_unit}")]
    IllConditioned { end_angle: f64, x_unit: f64 },

    #[error("resolved minimum radius {0} is not a positive finite number")]
    UnresolvedRadius(f64),
}

/// Convenience type alias for results using [`BendError`].
pub type Result<T> = std::result::Result<T, BendError>;
