pub mod calibrate;
pub mod compose;
pub mod query;
pub mod spiral;

pub use calibrate::{CalibrateAngle, CalibrateFromEndpoint, Calibration, CalibrationParams};
pub use compose::ComposeBend;
pub use spiral::HalfSpiral;
