mod bend_curve;
mod bend_spec;

pub use bend_curve::BendCurve;
pub use bend_spec::{
    BendSpec, BendSpecBuilder, DEFAULT_END_ANGLE, DEFAULT_MIN_RADIUS, DEFAULT_NUM_POINTS,
};
