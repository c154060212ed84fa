pub mod curve;
pub mod surface;

pub use curve::{Arc, Curve, CurveLoop, Line};
pub use surface::{Plane, Ruled};
