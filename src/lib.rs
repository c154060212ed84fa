pub mod error;
pub mod geometry;
pub mod math;
pub mod model;
pub mod operations;
pub mod topology;

pub use error::{Result, StairaError};
