pub mod compare;
pub mod intersect_2d;
pub mod polygon;

pub use compare::{almost_eq, almost_zero};

/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f64>;

/// Global geometric tolerance for floating-point comparisons.
///
/// Every tolerance-based equality in the crate (normal components,
/// elevations, lengths) goes through [`compare`] with this value, so
/// classification behaves consistently everywhere. Matches the
/// almost-equal epsilon scale of typical building-model kernels.
pub const TOLERANCE: f64 = 1e-9;
